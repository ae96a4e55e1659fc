// In-place cleanup helpers shared by the domain types. All helpers are
// idempotent; normalize() implementations lean on that.

use serde_json::{Map, Value};

/// Trims leading and trailing whitespace. `None` stays `None`.
pub(crate) fn trim(value: &mut Option<String>) {
    if let Some(v) = value.as_mut() {
        let trimmed = v.trim().to_string();
        *v = trimmed;
    }
}

/// Lower-cases the value. Used for identity fields (email).
pub(crate) fn to_lower_case(value: &mut Option<String>) {
    if let Some(v) = value.as_mut() {
        let lowered = v.to_lowercase();
        *v = lowered;
    }
}

/// Drops map entries whose value is null or a blank string.
pub(crate) fn remove_empty_values(attributes: &mut Map<String, Value>) {
    attributes.retain(|_, value| match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    });
}

/// Drops blank entries from a string list.
pub(crate) fn remove_empty_entries(values: &mut Vec<String>) {
    values.retain(|value| !value.trim().is_empty());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trim_is_idempotent() {
        let mut value = Some("  hello world  ".to_string());
        trim(&mut value);
        assert_eq!(value.as_deref(), Some("hello world"));
        trim(&mut value);
        assert_eq!(value.as_deref(), Some("hello world"));

        let mut none: Option<String> = None;
        trim(&mut none);
        assert_eq!(none, None);
    }

    #[test]
    fn test_remove_empty_values_drops_null_and_blank() {
        let mut map = Map::new();
        map.insert("keep".to_string(), json!("value"));
        map.insert("blank".to_string(), json!("   "));
        map.insert("null".to_string(), Value::Null);
        map.insert("number".to_string(), json!(42));

        remove_empty_values(&mut map);
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("keep"));
        assert!(map.contains_key("number"));
    }

    #[test]
    fn test_remove_empty_entries() {
        let mut values = vec!["en".to_string(), " ".to_string(), "fr".to_string()];
        remove_empty_entries(&mut values);
        assert_eq!(values, vec!["en".to_string(), "fr".to_string()]);
    }
}
