//! Unified error handling for the fan control core
//!
//! A single error type covers configuration parsing, action registration,
//! action lookup, and property-bus access. Every variant carries enough
//! context (field name, requested name, available names) that a bad
//! configuration can be fixed without reading source code.

use std::io;

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;

/// Unified error type for all core operations
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Missing required configuration field `{field}`")]
    MissingField { field: String },

    #[error("Invalid configuration field `{field}`: {reason}")]
    WrongShape { field: String, reason: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ============================================================================
    // Action Registry Errors
    // ============================================================================
    #[error("Action `{name}` is already registered")]
    DuplicateAction { name: String },

    #[error("Unknown action `{requested}` (available actions: {})", .available.join(", "))]
    UnknownAction {
        requested: String,
        available: Vec<String>,
    },

    // ============================================================================
    // Property Bus Errors
    // ============================================================================
    #[error("Failed to read property {property} on {object} ({interface}): {reason}")]
    PropertyRead {
        object: String,
        interface: String,
        property: String,
        reason: String,
    },

    #[error("Failed to write property {property} on {object} ({interface}): {reason}")]
    PropertyWrite {
        object: String,
        interface: String,
        property: String,
        reason: String,
    },
}

impl CoreError {
    /// Create a missing-field configuration error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a wrong-shape configuration error
    pub fn wrong_shape(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WrongShape {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a property-read error
    pub fn property_read(
        object: impl Into<String>,
        interface: impl Into<String>,
        property: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::PropertyRead {
            object: object.into(),
            interface: interface.into(),
            property: property.into(),
            reason: reason.into(),
        }
    }

    /// Create a property-write error
    pub fn property_write(
        object: impl Into<String>,
        interface: impl Into<String>,
        property: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::PropertyWrite {
            object: object.into(),
            interface: interface.into(),
            property: property.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_action_lists_available_names() {
        let err = CoreError::UnknownAction {
            requested: "missing".to_string(),
            available: vec!["decrease".to_string(), "increase".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("missing"));
        assert!(msg.contains("decrease, increase"));
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = CoreError::missing_field("sensors");
        assert!(err.to_string().contains("`sensors`"));
    }
}
