//! Configuration for product normalization.
//!
//! The storefront has two entry points that read raw products: the listing
//! page and the product detail page. They differ only in their default
//! category and in whether product-level front/back images are consulted, so
//! both are expressed as presets of one [`NormalizerOptions`] record.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Hard cap on gallery images kept per product.
pub const MAX_EXTRA_IMAGES: usize = 10;

/// Candidate raw field names per canonical field, tried in order. The first
/// present, non-null field wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSynonyms {
    pub id: Vec<String>,
    pub name: Vec<String>,
    pub price: Vec<String>,
    pub description: Vec<String>,
    pub category: Vec<String>,
    pub is_new: Vec<String>,
    pub stock: Vec<String>,
    pub out_of_stock: Vec<String>,
    pub promotion: Vec<String>,
    pub on_sale: Vec<String>,
    pub images: Vec<String>,
    pub default_image: Vec<String>,
    pub front_image: Vec<String>,
    pub back_image: Vec<String>,
    pub colors: Vec<String>,
    pub color_name: Vec<String>,
    pub color_hex: Vec<String>,
    pub sizes: Vec<String>,
    pub size_label: Vec<String>,
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

impl Default for FieldSynonyms {
    fn default() -> Self {
        Self {
            id: names(&["id", "_id"]),
            name: names(&["nom", "name", "titre", "title"]),
            price: names(&["prix", "price"]),
            description: names(&["description"]),
            category: names(&["categorie", "category"]),
            is_new: names(&["nouveau", "is_new", "isNew"]),
            stock: names(&["stock", "quantite", "quantity"]),
            out_of_stock: names(&["rupture_stock", "out_of_stock", "outOfStock"]),
            promotion: names(&["promotion", "discount", "discount_percent"]),
            on_sale: names(&["en_promo", "on_sale", "onSale"]),
            images: names(&["images", "images_supplementaires", "extra_images"]),
            default_image: names(&["image", "image_principale", "image_url"]),
            front_image: names(&["image_avant", "front_image"]),
            back_image: names(&["image_arriere", "back_image"]),
            colors: names(&["couleurs", "colors"]),
            color_name: names(&["couleur", "nom", "name"]),
            color_hex: names(&["code_hexa", "code", "color"]),
            sizes: names(&["tailles", "sizes"]),
            size_label: names(&["taille", "size", "nom", "name", "label"]),
        }
    }
}

impl FieldSynonyms {
    fn tables(&self) -> [(&'static str, &Vec<String>); 19] {
        [
            ("id", &self.id),
            ("name", &self.name),
            ("price", &self.price),
            ("description", &self.description),
            ("category", &self.category),
            ("is_new", &self.is_new),
            ("stock", &self.stock),
            ("out_of_stock", &self.out_of_stock),
            ("promotion", &self.promotion),
            ("on_sale", &self.on_sale),
            ("images", &self.images),
            ("default_image", &self.default_image),
            ("front_image", &self.front_image),
            ("back_image", &self.back_image),
            ("colors", &self.colors),
            ("color_name", &self.color_name),
            ("color_hex", &self.color_hex),
            ("sizes", &self.sizes),
            ("size_label", &self.size_label),
        ]
    }
}

/// Everything that may legitimately differ between normalizer call sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerOptions {
    /// Category assigned when the raw product has none.
    pub default_category: String,
    /// Image used when neither a color override nor a product image exists.
    pub placeholder_image: String,
    pub max_extra_images: usize,
    /// Consult the product-level `image_avant`/`image_arriere` pair before
    /// the single default image.
    pub product_face_images: bool,
    pub fields: FieldSynonyms,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self::listing()
    }
}

impl NormalizerOptions {
    /// Preset for the product listing page.
    #[must_use]
    pub fn listing() -> Self {
        Self {
            default_category: "homme".to_owned(),
            placeholder_image: "/images/placeholder.jpg".to_owned(),
            max_extra_images: MAX_EXTRA_IMAGES,
            product_face_images: false,
            fields: FieldSynonyms::default(),
        }
    }

    /// Preset for the product detail page.
    #[must_use]
    pub fn detail() -> Self {
        Self {
            default_category: "unisexe".to_owned(),
            product_face_images: true,
            ..Self::listing()
        }
    }

    /// Checks that every synonym list is non-empty and the image cap is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNormalizerOptions`] describing the first
    /// problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_extra_images > MAX_EXTRA_IMAGES {
            return Err(ConfigError::InvalidNormalizerOptions(format!(
                "max_extra_images is {} but may not exceed {MAX_EXTRA_IMAGES}",
                self.max_extra_images
            )));
        }
        if self.placeholder_image.trim().is_empty() {
            return Err(ConfigError::InvalidNormalizerOptions(
                "placeholder_image must not be empty".to_owned(),
            ));
        }
        for (field, candidates) in self.fields.tables() {
            if candidates.is_empty() {
                return Err(ConfigError::InvalidNormalizerOptions(format!(
                    "fields.{field} must list at least one raw field name"
                )));
            }
        }
        Ok(())
    }
}

/// Load normalizer options from a YAML file. Keys left out of the file keep
/// their listing-preset values.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_normalizer_options(path: &Path) -> Result<NormalizerOptions, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::NormalizerFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    let options = parse_normalizer_options(&content)?;
    tracing::debug!(path = %path.display(), "loaded normalizer options");
    Ok(options)
}

fn parse_normalizer_options(yaml: &str) -> Result<NormalizerOptions, ConfigError> {
    let options: NormalizerOptions = serde_yaml::from_str(yaml)?;
    options.validate()?;
    Ok(options)
}
