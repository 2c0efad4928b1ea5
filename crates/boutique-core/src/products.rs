use serde::{Deserialize, Serialize};

/// Rounds a monetary amount to two decimal places.
///
/// Applied to every computed sale price so that `1000 * 0.9` renders as
/// `900` rather than `899.9999999999999`.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A product as the storefront renders it, normalized from whatever shape the
/// API returned.
///
/// Constructed once per fetch and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// List price. Always finite and non-negative.
    pub price: f64,
    pub description: String,
    pub category: String,
    pub is_new: bool,
    /// Size labels in the order the API supplied them. Not deduplicated.
    pub sizes: Vec<String>,
    pub stock: u32,
    /// Explicit out-of-stock flag. Independent of `stock`; see
    /// [`Product::is_in_stock`].
    pub out_of_stock: bool,
    /// Discount in percent, within `[0, 100]`.
    pub discount_percent: f64,
    pub on_sale: bool,
    /// Present iff `discount_percent > 0`.
    pub sale_price: Option<f64>,
    /// Never empty.
    pub colors: Vec<Color>,
    /// At most ten gallery images.
    pub extra_images: Vec<String>,
}

/// A color variant with its own front and back shots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub name: String,
    pub hex_code: String,
    pub front_image: String,
    pub back_image: String,
}

impl Product {
    /// A product is in stock only when it has units left AND is not flagged
    /// out of stock. Neither field alone is authoritative.
    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.stock != 0 && !self.out_of_stock
    }

    #[must_use]
    pub fn is_out_of_stock(&self) -> bool {
        !self.is_in_stock()
    }

    /// Price a shopper pays: the sale price when discounted, else the list price.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }

    /// Returns `true` if any of the product's colors is named exactly `name`.
    #[must_use]
    pub fn has_color(&self, name: &str) -> bool {
        self.colors.iter().any(|c| c.name == name)
    }

    #[must_use]
    pub fn has_size(&self, label: &str) -> bool {
        self.sizes.iter().any(|s| s == label)
    }
}
