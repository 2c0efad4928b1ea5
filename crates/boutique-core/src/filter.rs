//! Multi-predicate product filtering and facet derivation.
//!
//! Both operations are pure: they never mutate their input and always preserve
//! the relative order of products, colors, and sizes.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::products::Product;

/// Stock predicate selected in the filter sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockFilter {
    #[default]
    All,
    InStock,
    OutOfStock,
}

impl FromStr for StockFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "in-stock" | "inStock" | "in_stock" => Ok(Self::InStock),
            "out-of-stock" | "outOfStock" | "out_of_stock" => Ok(Self::OutOfStock),
            other => Err(format!(
                "unknown stock filter \"{other}\" (expected all, in-stock, or out-of-stock)"
            )),
        }
    }
}

/// Either every value passes, or only an exact match does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// `None` maps to [`Selection::All`].
    #[must_use]
    pub fn from_option(value: Option<String>) -> Self {
        value.map_or(Self::All, Self::Only)
    }

    fn admits(&self, pred: impl FnOnce(&str) -> bool) -> bool {
        match self {
            Self::All => true,
            Self::Only(target) => pred(target),
        }
    }
}

/// The user's current filter selection.
///
/// `min_price` defaults to `0` and `max_price` to unbounded. Bounds apply to
/// the list price, never the sale price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub stock: StockFilter,
    pub color: Selection,
    pub size: Selection,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl FilterCriteria {
    /// Returns `true` when `product` satisfies every predicate.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let stock_ok = match self.stock {
            StockFilter::All => true,
            StockFilter::InStock => product.is_in_stock(),
            StockFilter::OutOfStock => product.is_out_of_stock(),
        };

        let min = self.min_price.unwrap_or(0.0);
        let max = self.max_price.unwrap_or(f64::INFINITY);

        stock_ok
            && self.color.admits(|name| product.has_color(name))
            && self.size.admits(|label| product.has_size(label))
            && min <= product.price
            && product.price <= max
    }

    /// Returns `true` when no predicate can reject a product with a
    /// non-negative price.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.stock == StockFilter::All
            && self.color == Selection::All
            && self.size == Selection::All
            && self.min_price.is_none_or(|m| m <= 0.0)
            && self.max_price.is_none()
    }
}

/// Returns the products passing `criteria`, in input order.
#[must_use]
pub fn filter_products(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    if criteria.is_unrestricted() && products.iter().all(|p| p.price >= 0.0) {
        tracing::debug!(total = products.len(), "filter is unrestricted, keeping every product");
        return products.to_vec();
    }

    let visible: Vec<Product> = products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();

    tracing::debug!(
        total = products.len(),
        visible = visible.len(),
        "applied product filter"
    );
    visible
}

/// Distinct filterable values across a product collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub available_colors: Vec<String>,
    pub available_sizes: Vec<String>,
}

/// Derives facet lists from the full, unfiltered collection.
///
/// Each list keeps first-seen order and contains no duplicates. Always pass
/// the complete catalog so that picking one filter never hides the options
/// of another.
#[must_use]
pub fn derive_facets(products: &[Product]) -> Facets {
    let colors = products
        .iter()
        .flat_map(|p| p.colors.iter().map(|c| c.name.as_str()));
    let sizes = products
        .iter()
        .flat_map(|p| p.sizes.iter().map(String::as_str));

    Facets {
        available_colors: distinct_in_order(colors),
        available_sizes: distinct_in_order(sizes),
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
