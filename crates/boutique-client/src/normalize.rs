//! Normalization from [`RawProduct`] payloads to canonical [`Product`] values.
//!
//! `normalize` is total: every field resolves independently and a missing or
//! malformed field degrades to its default instead of failing the record.
//! Coercion primitives live in [`crate::raw`].

use boutique_core::{round2, Color, FieldSynonyms, NormalizerOptions, Product};
use serde_json::Value;

use crate::raw::{
    coerce_bool, coerce_count, coerce_number, lookup_text_in, parse_image_list, RawProduct,
};

const FALLBACK_COLOR_NAME: &str = "Standard";
const FALLBACK_COLOR_HEX: &str = "#000000";

/// Normalizes a raw API record into a [`Product`].
#[must_use]
pub fn normalize(raw: &RawProduct, options: &NormalizerOptions) -> Product {
    let fields = &options.fields;
    let text = |candidates: &[String]| raw.lookup_text(candidates);

    let id = text(&fields.id).unwrap_or_default();
    let price = resolve_price(raw, fields, &id);

    let category = text(&fields.category).unwrap_or_else(|| options.default_category.clone());

    let discount_percent = raw
        .lookup(&fields.promotion)
        .and_then(coerce_number)
        .map_or(0.0, |d| d.clamp(0.0, 100.0));
    let explicit_sale = raw
        .lookup(&fields.on_sale)
        .and_then(coerce_bool)
        .unwrap_or(false);
    let sale_price =
        (discount_percent > 0.0).then(|| round2(price * (1.0 - discount_percent / 100.0)));

    let extra_images = resolve_extra_images(raw, options, &id);
    let sizes = resolve_sizes(raw, fields);
    let colors = resolve_colors(raw, options);

    Product {
        name: text(&fields.name).unwrap_or_default(),
        description: text(&fields.description).unwrap_or_default(),
        category,
        is_new: raw
            .lookup(&fields.is_new)
            .and_then(coerce_bool)
            .unwrap_or(false),
        sizes,
        stock: raw
            .lookup(&fields.stock)
            .and_then(coerce_count)
            .unwrap_or(0),
        out_of_stock: raw
            .lookup(&fields.out_of_stock)
            .and_then(coerce_bool)
            .unwrap_or(false),
        on_sale: discount_percent > 0.0 || explicit_sale,
        discount_percent,
        sale_price,
        price,
        colors,
        extra_images,
        id,
    }
}

/// Normalizes every record in order.
#[must_use]
pub fn normalize_all(raws: &[RawProduct], options: &NormalizerOptions) -> Vec<Product> {
    raws.iter().map(|raw| normalize(raw, options)).collect()
}

/// Unparseable and negative prices default to `0` so that `Product::price`
/// is always finite and non-negative.
fn resolve_price(raw: &RawProduct, fields: &FieldSynonyms, product_id: &str) -> f64 {
    let Some(value) = raw.lookup(&fields.price) else {
        tracing::debug!(product_id, "product has no price, defaulting to 0");
        return 0.0;
    };
    match coerce_number(value) {
        Some(price) if price >= 0.0 => price,
        _ => {
            tracing::warn!(
                product_id,
                raw_price = %value,
                "unparseable or negative price, defaulting to 0"
            );
            0.0
        }
    }
}

fn resolve_extra_images(
    raw: &RawProduct,
    options: &NormalizerOptions,
    product_id: &str,
) -> Vec<String> {
    let Some(value) = raw.lookup(&options.fields.images) else {
        return Vec::new();
    };
    parse_image_list(value, options.max_extra_images).unwrap_or_else(|| {
        tracing::debug!(product_id, "images field is not an image list, using none");
        Vec::new()
    })
}

fn resolve_sizes(raw: &RawProduct, fields: &FieldSynonyms) -> Vec<String> {
    let Some(entries) = raw.lookup(&fields.sizes).and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(label) => Some(label.clone()),
            Value::Object(obj) => lookup_text_in(obj, &fields.size_label),
            _ => None,
        })
        .collect()
}

/// Product-level front and back images that per-color overrides fall back to.
fn product_images(
    raw: &RawProduct,
    options: &NormalizerOptions,
) -> (Option<String>, Option<String>) {
    let fields = &options.fields;
    let default_image = raw.lookup_text(&fields.default_image);
    if options.product_face_images {
        let front = raw.lookup_text(&fields.front_image).or_else(|| default_image.clone());
        let back = raw.lookup_text(&fields.back_image).or(default_image);
        (front, back)
    } else {
        (default_image.clone(), default_image)
    }
}

fn resolve_colors(raw: &RawProduct, options: &NormalizerOptions) -> Vec<Color> {
    let fields = &options.fields;
    let (product_front, product_back) = product_images(raw, options);
    let pick = |own: Option<String>, product: Option<&str>| {
        own.or_else(|| product.map(str::to_owned))
            .unwrap_or_else(|| options.placeholder_image.clone())
    };

    let colors: Vec<Color> = raw
        .lookup(&fields.colors)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| match entry {
                    Value::Object(obj) => Some(Color {
                        name: lookup_text_in(obj, &fields.color_name)
                            .unwrap_or_else(|| FALLBACK_COLOR_NAME.to_owned()),
                        hex_code: lookup_text_in(obj, &fields.color_hex)
                            .unwrap_or_else(|| FALLBACK_COLOR_HEX.to_owned()),
                        front_image: pick(
                            lookup_text_in(obj, &fields.front_image),
                            product_front.as_deref(),
                        ),
                        back_image: pick(
                            lookup_text_in(obj, &fields.back_image),
                            product_back.as_deref(),
                        ),
                    }),
                    Value::String(name) => Some(Color {
                        name: name.clone(),
                        hex_code: FALLBACK_COLOR_HEX.to_owned(),
                        front_image: pick(None, product_front.as_deref()),
                        back_image: pick(None, product_back.as_deref()),
                    }),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    if colors.is_empty() {
        return vec![Color {
            name: FALLBACK_COLOR_NAME.to_owned(),
            hex_code: FALLBACK_COLOR_HEX.to_owned(),
            front_image: pick(None, product_front.as_deref()),
            back_image: pick(None, product_back.as_deref()),
        }];
    }
    colors
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
