//! Net target decrease action
//!
//! Mirror of the increase action: numeric members at or below the
//! configured state request a decrease scaled by how far below it they
//! are, boolean and string members request the configured delta when
//! they equal the state. Within one evaluation the smallest member
//! request is used, so a zone only slows down as far as its coolest
//! member justifies.

use serde_json::Value;
use tracing::{debug, error};

use super::{Action, ControlContext, RegisteredAction};
use crate::config::fragment;
use crate::error::{CoreError, Result};

/// Decrease the zone target based on group member values
#[derive(Debug)]
pub struct TargetDecrease {
    /// State value members are compared against
    state: Value,
    /// Target delta per state unit undershot
    delta: u64,
}

impl TargetDecrease {
    /// Compute the decrease a single member value requests, if any
    fn member_delta(&self, value: &Value) -> Option<u64> {
        match (value, &self.state) {
            (Value::Number(value), Value::Number(state)) => {
                if let (Some(value), Some(state)) = (value.as_i64(), state.as_i64()) {
                    if value <= state {
                        let factor = (state - value).max(1) as u64;
                        return Some(factor * self.delta);
                    }
                    None
                } else {
                    let value = value.as_f64()?;
                    let state = state.as_f64()?;
                    if value <= state {
                        return Some(((state - value) * self.delta as f64) as u64);
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

impl RegisteredAction for TargetDecrease {
    const NAME: &'static str = "target_decrease";

    fn from_json(fragment_obj: &Value) -> Result<Box<dyn Action>> {
        let state = fragment_obj
            .get("state")
            .cloned()
            .ok_or_else(|| CoreError::missing_field("state"))?;
        let delta = fragment::required_u64(fragment_obj, "delta")?;
        Ok(Box::new(Self { state, delta }))
    }
}

impl Action for TargetDecrease {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(&self, ctx: &mut ControlContext) -> Result<()> {
        let mut net_delta: Option<u64> = None;
        for member in ctx.members() {
            let value = match ctx.read_member(member) {
                Ok(value) => value,
                Err(err) => {
                    debug!("Action {}: skipping {}: {}", Self::NAME, member.object, err);
                    continue;
                }
            };
            if let Some(delta) = self.member_delta(&value) {
                net_delta = Some(match net_delta {
                    Some(current) => current.min(delta),
                    None => delta,
                });
            }
        }
        if let Some(delta) = net_delta {
            ctx.request_decrease(delta);
        }
        Ok(())
    }
}
