//! Endpoint URL construction for the storefront API.

use crate::error::ClientError;

/// Appends path segments to `base_url`, percent-encoding each one.
fn endpoint(base_url: &str, segments: &[&str]) -> Result<String, ClientError> {
    let invalid = |reason: String| ClientError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };

    let mut url = reqwest::Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }
    url.path_segments_mut()
        .map_err(|()| invalid("URL cannot be a base".to_owned()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.to_string())
}

/// `{base}/api/products`
pub(super) fn products_url(base_url: &str) -> Result<String, ClientError> {
    endpoint(base_url, &["api", "products"])
}

/// `{base}/api/products/{id}` with `id` percent-encoded.
pub(super) fn product_url(base_url: &str, id: &str) -> Result<String, ClientError> {
    endpoint(base_url, &["api", "products", id])
}
