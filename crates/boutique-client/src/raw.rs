//! Untyped product payloads as the storefront API returns them.
//!
//! ## Observed shapes
//!
//! - `prix` arrives either as a JSON number (`1000`) or a numeric string (`"1000"`).
//! - `images` may be an array of URLs, a JSON-encoded array inside a string
//!   (`"[\"a.jpg\",\"b.jpg\"]"`), or a bare string that is not JSON at all.
//! - Color entries use French or English keys (`couleur`/`nom`/`name`,
//!   `code_hexa`/`code`/`color`) and may carry their own `image_avant` /
//!   `image_arriere`.
//! - Size entries are either bare strings (`"M"`) or objects (`{"taille": "M"}`).
//! - Any field may be missing or `null`.
//!
//! Every coercion below is fallible and returns `Option`; the normalizer
//! decides the default and logs when it applies one.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A single product record exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawProduct(Map<String, Value>);

impl From<Value> for RawProduct {
    /// Non-object values become an empty record rather than an error.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

impl From<Map<String, Value>> for RawProduct {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl RawProduct {
    /// Returns the first candidate field that is present and not `null`.
    #[must_use]
    pub fn lookup(&self, candidates: &[String]) -> Option<&Value> {
        lookup_in(&self.0, candidates)
    }

    /// Returns the first candidate field holding non-blank text.
    #[must_use]
    pub fn lookup_text(&self, candidates: &[String]) -> Option<String> {
        lookup_text_in(&self.0, candidates)
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Synonym lookup over any JSON object: the first candidate key that is
/// present with a non-null value wins.
#[must_use]
pub fn lookup_in<'a>(map: &'a Map<String, Value>, candidates: &[String]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|key| map.get(key))
        .find(|v| !v.is_null())
}

/// Synonym lookup for text fields: `null`, empty, and whitespace-only values
/// fall through to the next candidate.
#[must_use]
pub fn lookup_text_in(map: &Map<String, Value>, candidates: &[String]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|key| map.get(key))
        .filter_map(coerce_text)
        .find(|text| !text.trim().is_empty())
}

/// A JSON number, or a string holding one. Non-finite results are rejected.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

#[must_use]
pub fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// A unit count. Fractions are floored and negatives become `0`.
#[must_use]
pub fn coerce_count(value: &Value) -> Option<u32> {
    let n = coerce_number(value)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = n.floor().clamp(0.0, f64::from(u32::MAX)) as u32;
    Some(count)
}

/// A string as-is, or a number rendered as text (`7` rather than `7.0`).
#[must_use]
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(
            n.as_i64()
                .map(|i| i.to_string())
                .or_else(|| n.as_u64().map(|u| u.to_string()))
                .unwrap_or_else(|| n.to_string()),
        ),
        _ => None,
    }
}

/// Reads an image list from an array of URLs or from a string containing a
/// JSON-encoded array. Non-string array items are skipped. The result keeps
/// at most `max` entries.
///
/// Returns `None` for any other shape, including strings that are not a JSON
/// array.
#[must_use]
pub fn parse_image_list(value: &Value, max: usize) -> Option<Vec<String>> {
    let decoded;
    let items = match value {
        Value::Array(items) => items,
        Value::String(s) => {
            decoded = serde_json::from_str::<Value>(s).ok()?;
            decoded.as_array()?
        }
        _ => return None,
    };
    Some(
        items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .take(max)
            .collect(),
    )
}
