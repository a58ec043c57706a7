//! Configured fan entities
//!
//! A fan is described entirely in configuration: the cooling zone it
//! belongs to, the sensors that make it up, the interface carrying the
//! target property used to set its speed, and the operating profiles it
//! is included in. Fans are built once while the configuration document
//! is decoded and never mutated afterwards.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use crate::config::fragment;
use crate::error::{CoreError, Result};

/// A fan under the control of a cooling zone
///
/// When no profiles are given, the fan is included in every profile.
/// That default-include convention is evaluated by consumers through
/// [`Fan::in_profile`], not baked into the stored profile list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fan {
    zone: String,
    sensors: Vec<String>,
    interface: String,
    profiles: Vec<String>,
}

impl Fan {
    /// JSON file name for fan definitions
    pub const CONF_FILE_NAME: &'static str = "fans.json";

    /// Parse and validate a fan from a decoded configuration fragment
    ///
    /// Required fields: `zone` (non-empty string), `sensors` (non-empty
    /// sequence of strings), `interface` (non-empty string). Optional:
    /// `profiles` (sequence of strings, duplicates rejected).
    pub fn from_json(fragment: &Value) -> Result<Self> {
        let zone = fragment::required_str(fragment, "zone")?;
        let sensors = fragment::required_str_seq(fragment, "sensors")?;
        let interface = fragment::required_str(fragment, "interface")?;
        let profiles = fragment::optional_str_seq(fragment, "profiles")?;

        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.as_str()) {
                return Err(CoreError::wrong_shape(
                    "profiles",
                    format!("duplicate profile `{}`", profile),
                ));
            }
        }

        Ok(Self {
            zone,
            sensors,
            interface,
            profiles,
        })
    }

    /// Get the zone this fan belongs to
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Get the sensors that make up the fan
    pub fn sensors(&self) -> &[String] {
        &self.sensors
    }

    /// Get the interface containing the target property used on the sensors
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Get the profiles this fan belongs to
    ///
    /// Empty means the fan was configured without profiles and is
    /// included everywhere; see [`Fan::in_profile`].
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    /// Whether this fan is included when the given profile is active
    ///
    /// A fan with no configured profiles is included in every profile.
    /// Comparison is exact and case-sensitive.
    pub fn in_profile(&self, profile: &str) -> bool {
        self.profiles.is_empty() || self.profiles.iter().any(|p| p == profile)
    }
}
