//! Net target increase action
//!
//! Requests a speed target increase when group members cross a
//! configured state: numeric members at or above the state request an
//! increase scaled by how far above it they are, boolean and string
//! members request the configured delta when they equal the state.

use serde_json::Value;
use tracing::{debug, error};

use super::{Action, ControlContext, RegisteredAction};
use crate::config::fragment;
use crate::error::{CoreError, Result};

/// Increase the zone target based on group member values
#[derive(Debug)]
pub struct TargetIncrease {
    /// State value members are compared against
    state: Value,
    /// Target delta per state unit exceeded
    delta: u64,
}

impl TargetIncrease {
    /// Compute the increase a single member value requests, if any
    fn member_delta(&self, value: &Value) -> Option<u64> {
        match (value, &self.state) {
            (Value::Number(value), Value::Number(state)) => {
                if let (Some(value), Some(state)) = (value.as_i64(), state.as_i64()) {
                    if value >= state {
                        // Increase by at least a single delta to attempt
                        // bringing the member under the configured state.
                        let factor = (value - state).max(1) as u64;
                        return Some(factor * self.delta);
                    }
                    None
                } else {
                    let value = value.as_f64()?;
                    let state = state.as_f64()?;
                    if value >= state {
                        return Some(((value - state) * self.delta as f64) as u64);
                    }
                    None
                }
            }
            (Value::Bool(value), Value::Bool(state)) => (value == state).then_some(self.delta),
            (Value::String(value), Value::String(state)) => {
                (value == state).then_some(self.delta)
            }
            _ => {
                error!(
                    "Action {}: unsupported member value type {:?}",
                    Self::NAME,
                    value
                );
                None
            }
        }
    }
}

impl RegisteredAction for TargetIncrease {
    const NAME: &'static str = "target_increase";

    fn from_json(fragment_obj: &Value) -> Result<Box<dyn Action>> {
        let state = fragment_obj
            .get("state")
            .cloned()
            .ok_or_else(|| CoreError::missing_field("state"))?;
        let delta = fragment::required_u64(fragment_obj, "delta")?;
        Ok(Box::new(Self { state, delta }))
    }
}

impl Action for TargetIncrease {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(&self, ctx: &mut ControlContext) -> Result<()> {
        let mut net_delta = 0u64;
        for member in ctx.members() {
            let value = match ctx.read_member(member) {
                Ok(value) => value,
                Err(err) => {
                    // Member's property not available, net delta unchanged
                    debug!("Action {}: skipping {}: {}", Self::NAME, member.object, err);
                    continue;
                }
            };
            if let Some(delta) = self.member_delta(&value) {
                net_delta = net_delta.max(delta);
            }
        }
        if net_delta > 0 {
            ctx.request_increase(net_delta);
        }
        Ok(())
    }
}
