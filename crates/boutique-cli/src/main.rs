mod catalog;
mod render;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use boutique_core::{FilterCriteria, Selection, StockFilter};

#[derive(Debug, Parser)]
#[command(name = "boutique-cli")]
#[command(about = "Browse the storefront catalog from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products matching the given filters
    List(ListArgs),
    /// Show a single product by id
    Show {
        /// Product id as the API knows it
        id: String,

        /// Print the normalized product as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the color and size options available across the catalog
    Facets {
        /// Print the facets as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Stock predicate: all, in-stock, or out-of-stock
    #[arg(long, default_value = "all")]
    stock: StockFilter,

    /// Only products offered in this color (exact, case-sensitive)
    #[arg(long)]
    color: Option<String>,

    /// Only products offered in this size (exact)
    #[arg(long)]
    size: Option<String>,

    /// Lower bound on list price (inclusive)
    #[arg(long)]
    min_price: Option<f64>,

    /// Upper bound on list price (inclusive)
    #[arg(long)]
    max_price: Option<f64>,

    /// Print the matching products as JSON
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            stock: self.stock,
            color: Selection::from_option(self.color.clone()),
            size: Selection::from_option(self.size.clone()),
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = boutique_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::List(args) => catalog::list(&config, &args.criteria(), args.json).await,
        Commands::Show { id, json } => catalog::show(&config, &id, json).await,
        Commands::Facets { json } => catalog::facets(&config, json).await,
    }
}
