use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ============================================================================
// Payload Field Policy
// ============================================================================
//
// Request payloads follow a "present AND truthy" rule: a field only counts
// when it carries a value other than null, false, 0 or "". Falsy values are
// treated exactly like absent ones, for creates and updates alike.
//
// ============================================================================

/// Whether a JSON value counts as set.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => true,
    }
}

/// Collapse a JSON value into optional text.
///
/// Truthy strings are kept as-is; other truthy values are stored as their
/// JSON text.
pub fn text_if_truthy(value: Value) -> Option<String> {
    if !is_truthy(&value) {
        return None;
    }

    match value {
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// `deserialize_with` adapter for optional text fields.
///
/// Pair with `#[serde(default)]` so a missing key also yields `None`.
pub fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(text_if_truthy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&value), "{value} should be falsy");
            assert_eq!(text_if_truthy(value), None);
        }
    }

    #[test]
    fn test_truthy_strings_kept_verbatim() {
        assert_eq!(text_if_truthy(json!("Hall")), Some("Hall".to_string()));
        assert_eq!(text_if_truthy(json!(" ")), Some(" ".to_string()));
    }

    #[test]
    fn test_truthy_non_strings_become_json_text() {
        assert_eq!(text_if_truthy(json!(42)), Some("42".to_string()));
        assert_eq!(text_if_truthy(json!(true)), Some("true".to_string()));
        assert_eq!(text_if_truthy(json!([])), Some("[]".to_string()));
    }

    #[derive(Deserialize, Default)]
    struct Payload {
        #[serde(default, deserialize_with = "truthy_text")]
        name: Option<String>,
    }

    #[test]
    fn test_missing_and_null_fields_are_absent() {
        let missing: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.name, None);

        let null: Payload = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(null.name, None);

        let set: Payload = serde_json::from_str(r#"{"name": "Demo"}"#).unwrap();
        assert_eq!(set.name.as_deref(), Some("Demo"));
    }
}
