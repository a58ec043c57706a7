//! Pluggable control actions
//!
//! An action is a named unit of control behavior configured by the user.
//! Each concrete action type parses its own parameters from the JSON
//! fragment that references it and exposes a control function the event
//! engine invokes against live telemetry.
//!
//! Action types announce themselves through [`RegisteredAction`] and are
//! collected into an [`ActionRegistry`] during startup by
//! [`ActionRegistry::with_builtins`]; adding a new action type means
//! writing its module and adding it to that one assembly list. No
//! dispatch switch exists anywhere else.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bus::PropertyAccess;
use crate::error::Result;

mod registry;
mod target_decrease;
mod target_increase;

pub use registry::{ActionConstructor, ActionRegistry};
pub use target_decrease::TargetDecrease;
pub use target_increase::TargetIncrease;

/// A configured control behavior
///
/// One instance exists per configuration fragment referencing the
/// action's name; instances are never shared between fragments.
pub trait Action: Send + Sync + std::fmt::Debug {
    /// The action's name as used within the JSON configuration
    ///
    /// Fixed per concrete type and identical to the name the type
    /// registers under.
    fn name(&self) -> &'static str;

    /// Run the action's control function against the evaluation context
    fn run(&self, ctx: &mut ControlContext) -> Result<()>;
}

/// A control function detached from its action instance
pub type ControlFn<'a> = Box<dyn Fn(&mut ControlContext) -> Result<()> + 'a>;

impl dyn Action {
    /// Get the action's control function as a standalone invocable
    ///
    /// The closure borrows the action instance; it carries whatever
    /// parameters the instance parsed from its configuration fragment.
    pub fn control_fn(&self) -> ControlFn<'_> {
        Box::new(move |ctx| self.run(ctx))
    }
}

/// Contract a concrete action type fulfills to become registrable
pub trait RegisteredAction {
    /// The configuration-facing name this type registers under
    const NAME: &'static str;

    /// Construct an instance from the action's configuration fragment
    fn from_json(fragment: &Value) -> Result<Box<dyn Action>>;
}

/// One member of the sensor group an event is evaluating
///
/// Group definitions come from configuration, so members decode
/// directly from their JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    /// Bus object identifier
    pub object: String,
    /// Interface exposing the property
    pub interface: String,
    /// Property name to read
    pub property: String,
}

/// Evaluation context handed to a control function
///
/// Carries the bus handle and the group members under evaluation, and
/// accumulates the net target change requested by the actions of one
/// evaluation pass. The zone engine applies the accumulated result after
/// all of an event's actions have run.
pub struct ControlContext<'a> {
    bus: &'a dyn PropertyAccess,
    members: &'a [GroupMember],
    net_increase: u64,
    net_decrease: Option<u64>,
}

impl<'a> ControlContext<'a> {
    /// Create a context over a bus handle and a sensor group
    pub fn new(bus: &'a dyn PropertyAccess, members: &'a [GroupMember]) -> Self {
        Self {
            bus,
            members,
            net_increase: 0,
            net_decrease: None,
        }
    }

    /// The group members under evaluation
    pub fn members(&self) -> &'a [GroupMember] {
        self.members
    }

    /// Read a group member's property value from the bus
    pub fn read_member(&self, member: &GroupMember) -> Result<Value> {
        self.bus
            .read_property(&member.object, &member.interface, &member.property)
    }

    /// Request a target increase; the largest request of the pass wins
    pub fn request_increase(&mut self, delta: u64) {
        self.net_increase = self.net_increase.max(delta);
    }

    /// Request a target decrease; the smallest nonzero request wins
    ///
    /// Decreases are accumulated conservatively: slowing fans less than
    /// any single rule asked for is safe, slowing them more is not.
    pub fn request_decrease(&mut self, delta: u64) {
        if delta == 0 {
            return;
        }
        self.net_decrease = Some(match self.net_decrease {
            Some(current) => current.min(delta),
            None => delta,
        });
    }

    /// Net target increase accumulated so far
    pub fn net_increase(&self) -> u64 {
        self.net_increase
    }

    /// Net target decrease accumulated so far
    pub fn net_decrease(&self) -> u64 {
        self.net_decrease.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    struct NoBus;

    impl PropertyAccess for NoBus {
        fn read_property(&self, object: &str, interface: &str, property: &str) -> Result<Value> {
            Err(CoreError::property_read(
                object,
                interface,
                property,
                "no bus in test",
            ))
        }

        fn write_property(
            &mut self,
            object: &str,
            interface: &str,
            property: &str,
            _value: Value,
        ) -> Result<()> {
            Err(CoreError::property_write(
                object,
                interface,
                property,
                "no bus in test",
            ))
        }
    }

    #[test]
    fn test_group_members_decode_from_config() {
        let members: Vec<GroupMember> = serde_json::from_value(serde_json::json!([
            {"object": "cpu0_temp", "interface": "xyz.Sensor.Value", "property": "Value"}
        ]))
        .unwrap();
        assert_eq!(members[0].object, "cpu0_temp");
        assert_eq!(members[0].property, "Value");
    }

    #[test]
    fn test_increase_keeps_largest_request() {
        let bus = NoBus;
        let mut ctx = ControlContext::new(&bus, &[]);
        ctx.request_increase(5);
        ctx.request_increase(2);
        ctx.request_increase(9);
        assert_eq!(ctx.net_increase(), 9);
    }

    #[test]
    fn test_decrease_keeps_smallest_nonzero_request() {
        let bus = NoBus;
        let mut ctx = ControlContext::new(&bus, &[]);
        ctx.request_decrease(0);
        assert_eq!(ctx.net_decrease(), 0);
        ctx.request_decrease(8);
        ctx.request_decrease(3);
        ctx.request_decrease(6);
        assert_eq!(ctx.net_decrease(), 3);
    }
}
