use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lenient deserializer for optional top-level scalar fields (`timestamp`, `cwd`)
///
/// Strings are kept verbatim, other scalars are rendered to their JSON text, and
/// `null` or structured values become an empty string. A record is never rejected
/// because one of these display-only fields has an unexpected shape.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Lenient deserializer for `message.role`
///
/// Anything other than a string is treated as a missing role.
pub fn deserialize_optional_str<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "deserialize_lenient_string")]
        timestamp: String,
        #[serde(default, deserialize_with = "deserialize_optional_str")]
        role: Option<String>,
    }

    #[test]
    fn test_lenient_string_keeps_strings() {
        let fields: Fields =
            serde_json::from_str(r#"{"timestamp":"2025-01-15T10:30:00Z"}"#).unwrap();
        assert_eq!(fields.timestamp, "2025-01-15T10:30:00Z");
    }

    #[test]
    fn test_lenient_string_renders_numbers() {
        let fields: Fields = serde_json::from_str(r#"{"timestamp":1762076480016}"#).unwrap();
        assert_eq!(fields.timestamp, "1762076480016");
    }

    #[test]
    fn test_lenient_string_null_and_missing_are_empty() {
        let fields: Fields = serde_json::from_str(r#"{"timestamp":null}"#).unwrap();
        assert_eq!(fields.timestamp, "");

        let fields: Fields = serde_json::from_str("{}").unwrap();
        assert_eq!(fields.timestamp, "");
    }

    #[test]
    fn test_lenient_string_structured_is_empty() {
        let fields: Fields = serde_json::from_str(r#"{"timestamp":{"ms":1}}"#).unwrap();
        assert_eq!(fields.timestamp, "");
    }

    #[test]
    fn test_optional_str() {
        let fields: Fields = serde_json::from_str(r#"{"role":"user"}"#).unwrap();
        assert_eq!(fields.role.as_deref(), Some("user"));

        let fields: Fields = serde_json::from_str(r#"{"role":42}"#).unwrap();
        assert!(fields.role.is_none());

        let fields: Fields = serde_json::from_str("{}").unwrap();
        assert!(fields.role.is_none());
    }
}
