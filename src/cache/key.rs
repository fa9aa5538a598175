//! Cache Key Module
//!
//! Derives deterministic cache keys from an operation category and its
//! parameters.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::metrics::QueryCategory;

// == Generate Cache Key ==
/// Builds the cache key `"{category}:{canonical_json}"` for a parameter set.
///
/// Object keys are sorted at every nesting level before rendering, so two
/// parameter sets with the same key/value pairs always map to the same key
/// regardless of insertion order.
pub fn generate_cache_key<T>(category: QueryCategory, params: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let canonical = canonicalize(serde_json::to_value(params)?);
    Ok(format!("{}:{}", category.as_str(), canonical))
}

/// Rebuilds every object in `value` with its keys in lexicographic order.
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(fields) => {
            let mut sorted: Vec<(String, Value)> = fields.into_iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                sorted
                    .into_iter()
                    .map(|(k, v)| (k, canonicalize(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
