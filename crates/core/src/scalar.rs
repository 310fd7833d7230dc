//! Scalar coercion for ambiguous store field values.
//!
//! The store represents checkboxes, numbers, and text inconsistently across
//! schema versions and API response shapes. Each helper here is total and
//! has exactly one documented default.

use serde_json::Value;

/// Coerce a checkbox field to `bool`.
///
/// True iff the value is JSON `true` or one of the case-sensitive strings
/// `"checked"` / `"TRUE"`. Everything else (absent, `false`, `0`, other
/// strings) is false.
pub fn coerce_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "checked" || s == "TRUE",
        _ => false,
    }
}

/// Coerce a checkbox field to `bool`, defaulting to true.
///
/// Explicit JSON `false` is the only way to opt out; any other value,
/// including an absent field, yields true. Used for "can be lead"
/// semantics.
pub fn coerce_bool_default_true(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::Bool(false)))
}

/// Coerce a numeric field to `f64`, substituting `default` for missing or
/// falsy values (absent, non-numeric, zero).
pub fn number_or(value: Option<&Value>, default: f64) -> f64 {
    match value.and_then(Value::as_f64) {
        Some(n) if n != 0.0 => n,
        _ => default,
    }
}

/// Coerce a numeric field to `i64`, substituting `default` for missing or
/// falsy values. Week numbers default to 1, hours and ordering keys to 0.
pub fn int_or(value: Option<&Value>, default: i64) -> i64 {
    match value.and_then(Value::as_f64) {
        Some(n) if n != 0.0 => n as i64,
        _ => default,
    }
}

/// Coerce a text field to `String`, empty when absent or non-string.
pub fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Coerce a text field to `String`, substituting `default` when absent or
/// empty (colors, icons).
pub fn text_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => default.to_string(),
    }
}

/// Coerce a text field to `Option<String>`, `None` when absent or empty
/// (optional dates).
pub fn opt_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bool_true_variants() {
        assert!(coerce_bool(Some(&json!(true))));
        assert!(coerce_bool(Some(&json!("checked"))));
        assert!(coerce_bool(Some(&json!("TRUE"))));
    }

    #[test]
    fn bool_false_variants() {
        assert!(!coerce_bool(None));
        assert!(!coerce_bool(Some(&json!(false))));
        assert!(!coerce_bool(Some(&json!(0))));
        assert!(!coerce_bool(Some(&json!("true"))));
        assert!(!coerce_bool(Some(&json!("Checked"))));
        assert!(!coerce_bool(Some(&Value::Null)));
    }

    #[test]
    fn default_true_only_explicit_false_opts_out() {
        assert!(coerce_bool_default_true(None));
        assert!(coerce_bool_default_true(Some(&json!(true))));
        assert!(coerce_bool_default_true(Some(&json!("no"))));
        assert!(coerce_bool_default_true(Some(&Value::Null)));
        assert!(!coerce_bool_default_true(Some(&json!(false))));
    }

    #[test]
    fn numbers_default_on_missing_or_zero() {
        assert_eq!(int_or(None, 1), 1);
        assert_eq!(int_or(Some(&json!(0)), 1), 1);
        assert_eq!(int_or(Some(&json!(12)), 1), 12);
        assert_eq!(int_or(Some(&json!("12")), 1), 1);
        assert_eq!(number_or(Some(&json!(2.5)), 0.0), 2.5);
        assert_eq!(number_or(None, 0.0), 0.0);
    }

    #[test]
    fn text_defaults() {
        assert_eq!(text(None), "");
        assert_eq!(text(Some(&json!(42))), "");
        assert_eq!(text(Some(&json!("hi"))), "hi");
        assert_eq!(text_or(Some(&json!("")), "#666"), "#666");
        assert_eq!(text_or(Some(&json!("#fff")), "#666"), "#fff");
        assert_eq!(opt_text(Some(&json!(""))), None);
        assert_eq!(opt_text(Some(&json!("2026-03-01"))), Some("2026-03-01".into()));
    }
}
