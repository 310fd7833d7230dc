//! Sparse-field support for partial updates.
//!
//! Patch DTOs must distinguish "field omitted" (leave untouched) from
//! "field explicitly cleared" (write an empty value). `Option<Option<T>>`
//! carries that: outer `None` = omitted, `Some(None)` = cleared,
//! `Some(Some(v))` = set. Serde collapses nested options on its own, so
//! clearable fields use this deserializer:
//!
//! ```ignore
//! #[serde(default, deserialize_with = "double_option")]
//! pub date_comite: Option<Option<String>>,
//! ```

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `Some(None)` instead of `None`, so that an absent
/// key (via `#[serde(default)]`) stays distinguishable from an explicit
/// null.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "double_option")]
        date: Option<Option<String>>,
    }

    #[test]
    fn omitted_vs_null_vs_value() {
        let omitted: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(omitted.date, None);

        let cleared: Payload = serde_json::from_str(r#"{"date": null}"#).unwrap();
        assert_eq!(cleared.date, Some(None));

        let set: Payload = serde_json::from_str(r#"{"date": "2026-03-01"}"#).unwrap();
        assert_eq!(set.date, Some(Some("2026-03-01".to_string())));
    }
}
