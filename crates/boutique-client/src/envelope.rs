//! Response-envelope decoding for the storefront API.
//!
//! The product list endpoint has shipped three envelopes over time; they are
//! tried in this order:
//!
//! 1. `{"success": true, "data": {"produits": [...]}}`
//! 2. `{"success": true, "data": [...]}`
//! 3. `{"produits": [...]}`
//!
//! The single-product endpoint returns `{"success": true, "data": {...}}`.

use serde_json::Value;

use crate::error::ClientError;
use crate::raw::RawProduct;

/// Which list envelope a response matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEnvelope {
    NestedProduits,
    DataArray,
    TopLevelProduits,
}

fn match_list(body: &Value) -> Option<(ListEnvelope, &Vec<Value>)> {
    let data = body.get("data");
    if let Some(items) = data
        .and_then(|d| d.get("produits"))
        .and_then(Value::as_array)
    {
        return Some((ListEnvelope::NestedProduits, items));
    }
    if let Some(items) = data.and_then(Value::as_array) {
        return Some((ListEnvelope::DataArray, items));
    }
    body.get("produits")
        .and_then(Value::as_array)
        .map(|items| (ListEnvelope::TopLevelProduits, items))
}

/// Pulls the raw product records out of a list response.
///
/// # Errors
///
/// Returns [`ClientError::UnexpectedFormat`] when none of the known envelopes
/// match.
pub fn extract_product_list(body: &Value, url: &str) -> Result<Vec<RawProduct>, ClientError> {
    let (envelope, items) = match_list(body).ok_or_else(|| ClientError::UnexpectedFormat {
        url: url.to_owned(),
    })?;
    tracing::debug!(?envelope, count = items.len(), url, "decoded product list");
    Ok(items.iter().cloned().map(RawProduct::from).collect())
}

/// Pulls the raw record out of a single-product response.
///
/// Returns `None` when `success` is explicitly `false` or `data` is not an
/// object.
#[must_use]
pub fn extract_single_product(body: &Value) -> Option<RawProduct> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return None;
    }
    body.get("data")
        .and_then(Value::as_object)
        .cloned()
        .map(RawProduct::from)
}
