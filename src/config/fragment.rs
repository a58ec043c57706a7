//! Field extraction helpers for decoded configuration fragments
//!
//! All entity and action constructors pull their fields through these
//! helpers so that a malformed configuration always reports the exact
//! field that is missing or has the wrong shape.

use serde_json::Value;

use crate::error::{CoreError, Result};

/// Extract a required non-empty string field
pub fn required_str(fragment: &Value, field: &str) -> Result<String> {
    let value = fragment
        .get(field)
        .ok_or_else(|| CoreError::missing_field(field))?;
    let s = value
        .as_str()
        .ok_or_else(|| CoreError::wrong_shape(field, "expected a string"))?;
    if s.is_empty() {
        return Err(CoreError::wrong_shape(field, "must not be empty"));
    }
    Ok(s.to_string())
}

/// Extract a required non-empty sequence of strings
pub fn required_str_seq(fragment: &Value, field: &str) -> Result<Vec<String>> {
    let value = fragment
        .get(field)
        .ok_or_else(|| CoreError::missing_field(field))?;
    let seq = str_seq(value, field)?;
    if seq.is_empty() {
        return Err(CoreError::wrong_shape(field, "must not be empty"));
    }
    Ok(seq)
}

/// Extract an optional sequence of strings, defaulting to empty when absent
pub fn optional_str_seq(fragment: &Value, field: &str) -> Result<Vec<String>> {
    match fragment.get(field) {
        Some(value) => str_seq(value, field),
        None => Ok(Vec::new()),
    }
}

/// Extract a required unsigned integer field
pub fn required_u64(fragment: &Value, field: &str) -> Result<u64> {
    let value = fragment
        .get(field)
        .ok_or_else(|| CoreError::missing_field(field))?;
    value
        .as_u64()
        .ok_or_else(|| CoreError::wrong_shape(field, "expected an unsigned integer"))
}

fn str_seq(value: &Value, field: &str) -> Result<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| CoreError::wrong_shape(field, "expected a sequence of strings"))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| CoreError::wrong_shape(field, "expected a sequence of strings"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_str_present() {
        let fragment = json!({"zone": "zone0"});
        assert_eq!(required_str(&fragment, "zone").unwrap(), "zone0");
    }

    #[test]
    fn test_required_str_missing() {
        let fragment = json!({});
        let err = required_str(&fragment, "zone").unwrap_err();
        assert!(matches!(err, CoreError::MissingField { field } if field == "zone"));
    }

    #[test]
    fn test_required_str_empty_rejected() {
        let fragment = json!({"zone": ""});
        let err = required_str(&fragment, "zone").unwrap_err();
        assert!(matches!(err, CoreError::WrongShape { field, .. } if field == "zone"));
    }

    #[test]
    fn test_required_str_seq_wrong_shape() {
        let fragment = json!({"sensors": "fan0"});
        let err = required_str_seq(&fragment, "sensors").unwrap_err();
        assert!(matches!(err, CoreError::WrongShape { field, .. } if field == "sensors"));
    }

    #[test]
    fn test_required_str_seq_empty_rejected() {
        let fragment = json!({"sensors": []});
        assert!(required_str_seq(&fragment, "sensors").is_err());
    }

    #[test]
    fn test_optional_str_seq_absent_defaults_empty() {
        let fragment = json!({});
        assert!(optional_str_seq(&fragment, "profiles").unwrap().is_empty());
    }

    #[test]
    fn test_required_u64_rejects_negative() {
        let fragment = json!({"delta": -5});
        assert!(required_u64(&fragment, "delta").is_err());
    }
}
