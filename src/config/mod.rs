//! Configuration-bound entity model
//!
//! Entities are parsed from the decoded JSON configuration documents the
//! daemon loads at startup. Construction validates shape and required
//! fields; the resulting values are immutable for the life of the
//! control session.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{CoreError, Result};

mod fan;
pub mod fragment;

pub use fan::Fan;

/// Parse all fans from a decoded fans document
///
/// Accepts either a top-level array of fan fragments or an object with a
/// `"fans"` array. Any malformed entry aborts the load with its error;
/// a fan definition is never silently dropped.
pub fn load_fans(doc: &Value) -> Result<Vec<Fan>> {
    let entries = match doc {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(map) => map
            .get("fans")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| CoreError::wrong_shape("fans", "expected a sequence of fans"))?,
        _ => return Err(CoreError::wrong_shape("fans", "expected a sequence of fans")),
    };

    let fans = entries
        .iter()
        .map(Fan::from_json)
        .collect::<Result<Vec<_>>>()?;
    debug!("Loaded {} fan definitions", fans.len());
    Ok(fans)
}

/// Read and decode a fans JSON file, then parse its entries
///
/// Which file to read is the daemon's decision; this only performs the
/// decode for a known path.
pub fn load_fans_file(path: &Path) -> Result<Vec<Fan>> {
    let raw = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&raw)?;
    let fans = load_fans(&doc)?;
    info!("Loaded {} fans from {}", fans.len(), path.display());
    Ok(fans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn fan_fragment(zone: &str) -> Value {
        json!({
            "zone": zone,
            "sensors": ["fan0_tach"],
            "interface": "xyz.openbmc_project.Control.FanSpeed",
        })
    }

    #[test]
    fn test_load_fans_from_array() {
        let doc = json!([fan_fragment("zone0"), fan_fragment("zone1")]);
        let fans = load_fans(&doc).unwrap();
        assert_eq!(fans.len(), 2);
        assert_eq!(fans[1].zone(), "zone1");
    }

    #[test]
    fn test_load_fans_from_object() {
        let doc = json!({"fans": [fan_fragment("zone0")]});
        assert_eq!(load_fans(&doc).unwrap().len(), 1);
    }

    #[test]
    fn test_load_fans_surfaces_entry_errors() {
        let doc = json!([fan_fragment("zone0"), json!({"zone": "zone1"})]);
        assert!(load_fans(&doc).is_err());
    }

    #[test]
    fn test_load_fans_rejects_scalar_document() {
        assert!(load_fans(&json!("fans")).is_err());
    }

    #[test]
    fn test_load_fans_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"zone": "zone0", "sensors": ["fan0_tach"], "interface": "xyz.Target"}}]"#
        )
        .unwrap();
        let fans = load_fans_file(file.path()).unwrap();
        assert_eq!(fans.len(), 1);
        assert_eq!(fans[0].zone(), "zone0");
    }

    #[test]
    fn test_load_fans_file_missing_path() {
        let result = load_fans_file(Path::new("/nonexistent/fans.json"));
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
