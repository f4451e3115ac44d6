//! Lenient point parsing.
//!
//! Points arrive as free-form input (form fields, hand-edited JSON). Nothing here
//! fails: negatives and non-finite numbers clamp to 0, unparseable values are
//! reported as absent so the caller can pick its own default.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Convert a JSON value into a point total.
///
/// Numbers and numeric strings are truncated toward zero; negative or
/// non-finite values become 0. An empty string counts as 0. Anything else
/// (null, bools, objects, junk strings) is `None`.
pub fn sanitize_points(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_f64().map(clamp_points),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Some(0);
            }
            trimmed.parse::<f64>().ok().map(clamp_points)
        }
        _ => None,
    }
}

#[inline]
fn clamp_points(raw: f64) -> u32 {
    if !raw.is_finite() || raw <= 0.0 {
        0
    } else if raw >= u32::MAX as f64 {
        u32::MAX
    } else {
        raw.trunc() as u32
    }
}

/// Serde helper for optional score fields on match records.
pub fn deserialize_lenient_points<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(sanitize_points))
}

/// Serde helper for a team-key -> points table; bad values become 0.
pub fn deserialize_points_table<'de, D>(deserializer: D) -> Result<BTreeMap<String, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| {
            let points = sanitize_points(&value).unwrap_or(0);
            (key, points)
        })
        .collect())
}
