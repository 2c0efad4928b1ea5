pub mod app_config;
pub mod config;
pub mod filter;
pub mod normalizer_options;
pub mod products;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{derive_facets, filter_products, Facets, FilterCriteria, Selection, StockFilter};
pub use normalizer_options::{load_normalizer_options, FieldSynonyms, NormalizerOptions};
pub use products::{round2, Color, Product};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read normalizer file {path}: {source}")]
    NormalizerFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse normalizer file: {0}")]
    NormalizerFileParse(#[from] serde_yaml::Error),

    #[error("invalid normalizer options: {0}")]
    InvalidNormalizerOptions(String),
}
