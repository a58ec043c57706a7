//! Fan Control Core Library
//!
//! Rule-evaluation core for a declarative fan control daemon. Cooling
//! hardware and control behavior are described entirely in JSON
//! configuration; this crate binds that data to executable behavior:
//!
//! - **Entity model**: immutable, validated representations of
//!   configured hardware (the [`Fan`]: zone, sensors, target interface,
//!   profile membership)
//! - **Action framework**: a name-keyed registry of pluggable control
//!   behaviors, each constructed from the configuration fragment that
//!   references it
//! - **Bus abstraction**: the read/write property capability actions
//!   evaluate against, implemented by the daemon over its real transport
//!
//! # Module Structure
//!
//! - `config/` - Entities and fragment parsing helpers
//! - `actions/` - Action contract, registry, builtin behaviors
//! - `bus` - Abstract property access
//! - `error` - Unified error type
//!
//! # Example
//!
//! ```
//! use fanctl_core::{ActionRegistry, Fan};
//! use serde_json::json;
//!
//! let registry = ActionRegistry::with_builtins().unwrap();
//! let action = registry
//!     .create("target_increase", &json!({"state": 65, "delta": 100}))
//!     .unwrap();
//! assert_eq!(action.name(), "target_increase");
//!
//! let fan = Fan::from_json(&json!({
//!     "zone": "zone0",
//!     "sensors": ["fan0_tach"],
//!     "interface": "xyz.openbmc_project.Control.FanSpeed",
//! }))
//! .unwrap();
//! assert!(fan.in_profile("anything"));
//! ```

// Grouped modules
pub mod actions;
pub mod config;

// Standalone modules
pub mod bus;
pub mod error;

// Re-export primary types from actions/
pub use actions::{
    Action, ActionConstructor, ActionRegistry, ControlContext, ControlFn, GroupMember,
    RegisteredAction, TargetDecrease, TargetIncrease,
};

// Re-export entity types and loaders from config/
pub use config::{load_fans, load_fans_file, Fan};

// Re-export bus capability
pub use bus::PropertyAccess;

// Re-export error types
pub use error::{CoreError, Result};
