//! Command handlers. Each handler builds its own client, fetches once, and
//! writes to stdout; logs go to stderr.

use std::sync::Arc;

use anyhow::Context;
use boutique_client::{CatalogView, StorefrontClient, ViewState};
use boutique_core::{load_normalizer_options, AppConfig, FilterCriteria, NormalizerOptions};

use crate::render;

/// Listing and detail normalizer presets. A configured YAML file replaces the
/// listing preset; the detail preset is the same file with product-level
/// face images enabled.
fn normalizer_presets(
    config: &AppConfig,
) -> anyhow::Result<(NormalizerOptions, NormalizerOptions)> {
    let Some(path) = &config.normalizer_path else {
        return Ok((NormalizerOptions::listing(), NormalizerOptions::detail()));
    };
    let listing = load_normalizer_options(path)
        .with_context(|| format!("loading normalizer options from {}", path.display()))?;
    let detail = NormalizerOptions {
        product_face_images: true,
        ..listing.clone()
    };
    Ok((listing, detail))
}

async fn load_catalog(config: &AppConfig) -> anyhow::Result<CatalogView> {
    let (listing, _) = normalizer_presets(config)?;
    let client = Arc::new(StorefrontClient::from_config(config)?);
    let mut view = CatalogView::mount(client, listing);
    if let ViewState::Error(message) = view.settled().await {
        anyhow::bail!(message);
    }
    Ok(view)
}

pub(crate) async fn list(
    config: &AppConfig,
    criteria: &FilterCriteria,
    json: bool,
) -> anyhow::Result<()> {
    let view = load_catalog(config).await?;
    let products = view.visible(criteria);
    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
    } else if products.is_empty() {
        println!("no products match the selected filters");
    } else {
        for product in &products {
            println!("{}", render::product_line(product));
        }
    }
    Ok(())
}

pub(crate) async fn show(config: &AppConfig, id: &str, json: bool) -> anyhow::Result<()> {
    let (_, detail) = normalizer_presets(config)?;
    let client = StorefrontClient::from_config(config)?;
    let Some(product) = client.fetch_product(id, &detail).await else {
        println!("product not found");
        return Ok(());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&product)?);
    } else {
        print!("{}", render::product_detail(&product));
    }
    Ok(())
}

pub(crate) async fn facets(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let view = load_catalog(config).await?;
    let facets = view.facets();
    if json {
        println!("{}", serde_json::to_string_pretty(&facets)?);
    } else {
        println!("colors: {}", facets.available_colors.join(", "));
        println!("sizes:  {}", facets.available_sizes.join(", "));
    }
    Ok(())
}
