//! Name-keyed registry of action constructors
//!
//! The registry is populated once during startup, before the event
//! engine evaluates any configuration, and is read-only afterwards. Two
//! action types claiming the same name is a packaging defect: the
//! registry reports it and the daemon must refuse to start rather than
//! run with an ambiguous rule set.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{error, info};

use super::{Action, RegisteredAction, TargetDecrease, TargetIncrease};
use crate::error::{CoreError, Result};

/// Function used in creating action instances from their configuration
pub type ActionConstructor = fn(&Value) -> Result<Box<dyn Action>>;

/// Registry of available actions, keyed by configuration-facing name
///
/// Lookup is exact, case-sensitive string match. The key map is ordered
/// so that enumeration (and the diagnostic in unknown-action errors) is
/// deterministic across runs.
#[derive(Default)]
pub struct ActionRegistry {
    constructors: BTreeMap<String, ActionConstructor>,
}

impl ActionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every builtin action type
    ///
    /// This is the single assembly point for builtins; a new action type
    /// is added by listing it here. Fails if two types claim the same
    /// name, in which case startup must not proceed.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        registry.register_type::<TargetIncrease>()?;
        registry.register_type::<TargetDecrease>()?;
        info!("Registered {} builtin actions", registry.len());
        Ok(registry)
    }

    /// Register an action constructor under a name
    ///
    /// Fails with [`CoreError::DuplicateAction`] when the name is taken;
    /// the first registration is retained.
    pub fn register(&mut self, name: &str, constructor: ActionConstructor) -> Result<()> {
        if self.constructors.contains_key(name) {
            error!("Action '{}' is already registered", name);
            return Err(CoreError::DuplicateAction {
                name: name.to_string(),
            });
        }
        self.constructors.insert(name.to_string(), constructor);
        Ok(())
    }

    /// Register an action type under its declared name
    pub fn register_type<T: RegisteredAction>(&mut self) -> Result<()> {
        self.register(T::NAME, T::from_json)
    }

    /// Create an instance of a registered action from its configuration
    ///
    /// Every call invokes the constructor afresh; instances are never
    /// cached or shared. An unknown name fails with the full sorted list
    /// of registered names so configuration typos can be diagnosed
    /// without reading source code.
    pub fn create(&self, name: &str, fragment: &Value) -> Result<Box<dyn Action>> {
        match self.constructors.get(name) {
            Some(constructor) => constructor(fragment),
            None => {
                let available: Vec<String> =
                    self.constructors.keys().cloned().collect();
                error!(
                    "Action '{}' is not registered (available: {})",
                    name,
                    available.join(", ")
                );
                Err(CoreError::UnknownAction {
                    requested: name.to_string(),
                    available,
                })
            }
        }
    }

    /// All registered action names, in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    /// Number of registered actions
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}
