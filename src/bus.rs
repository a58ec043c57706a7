//! Abstract property access over the system bus
//!
//! The daemon talks to sensor and fan objects through a message bus that
//! exposes named properties on named objects behind named interfaces. The
//! core never owns a bus connection; it only requires this read/write
//! capability, which the daemon implements over its real transport and
//! tests implement over an in-memory map.

use serde_json::Value;

use crate::error::Result;

/// Read/write access to properties on remote objects
///
/// Property values are carried as `serde_json::Value`, matching the
/// variant-typed properties the configuration compares against (numbers,
/// booleans, strings).
pub trait PropertyAccess {
    /// Read a named property on a named object over a named interface
    fn read_property(&self, object: &str, interface: &str, property: &str) -> Result<Value>;

    /// Write a named property on a named object over a named interface
    fn write_property(
        &mut self,
        object: &str,
        interface: &str,
        property: &str,
        value: Value,
    ) -> Result<()>;
}
