//! Recipe payload accepted by the `<recipe-card>` element.
//!
//! DESIGN
//! ======
//! Field names mirror the camelCase JSON shape that recipe feeds already use,
//! so payloads deserialize straight into the element without a mapping layer.
//! Numeric fields tolerate integer-valued floats (`3.0`) because JSON producers
//! rarely distinguish the two.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DataError;

/// Everything a recipe card displays.
///
/// The element never validates these values; text is escaped on render and
/// `rating` is clamped when stars are drawn. Fields missing from a JSON payload
/// decode to their empty defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeCardData {
    /// Image URL.
    pub img_src: String,
    /// Image alt text.
    pub img_alt: String,
    /// URL the title links to.
    pub title_lnk: String,
    /// Recipe title text.
    pub title_txt: String,
    /// Publishing organization name.
    pub organization: String,
    /// Filled-star count, expected in `0..=5`.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub rating: i64,
    /// Number of ratings backing the average.
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub num_ratings: u64,
    /// Human-readable duration, e.g. `"30 min"`.
    pub length_time: String,
    /// Ingredient summary text.
    pub ingredients: String,
}

impl RecipeCardData {
    /// Parse a single recipe payload from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Json`] when the input is not a well-formed payload.
    pub fn from_json(raw: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse a JSON array of recipe payloads.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Json`] when any entry is malformed; no partial list
    /// is returned.
    pub fn list_from_json(raw: &str) -> Result<Vec<Self>, DataError> {
        Ok(serde_json::from_str(raw)?)
    }
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            if let Some(int) = number.as_i64() {
                return Err(D::Error::custom(format!("value {int} out of range for u64")));
            }
            // 2^64 is exactly representable; anything at or above it does not fit.
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float < u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
