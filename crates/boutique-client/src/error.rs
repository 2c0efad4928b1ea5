use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected response format from {url}")]
    UnexpectedFormat { url: String },

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl ClientError {
    /// Message suitable for showing to a shopper in place of the catalog.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::UnexpectedFormat { .. } | Self::Deserialize { .. } => {
                "Unexpected response format from the product service.".to_owned()
            }
            Self::Http(_) => {
                "Could not reach the product service. Check your connection and try again."
                    .to_owned()
            }
            Self::NotFound { .. } | Self::UnexpectedStatus { .. } => {
                "The product service is currently unavailable.".to_owned()
            }
            Self::InvalidBaseUrl { .. } => "The storefront is misconfigured.".to_owned(),
        }
    }
}
