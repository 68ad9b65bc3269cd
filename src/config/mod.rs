//! Declarative machine definitions.
//!
//! A [`MachineConfig`] describes a table, its capacity and the initial state
//! as data, so a controller's behavior can be shipped as JSON rather than
//! compiled in. Only the definition is loaded; a running table is never
//! written back.

pub mod error;

pub use error::ConfigError;

use crate::builder::MachineBuilder;
use crate::core::{StateId, TransitionRecord, DEFAULT_CAPACITY, HALT};
use crate::engine::Machine;
use serde::{Deserialize, Serialize};

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_initial_state() -> StateId {
    HALT
}

/// Serializable description of a machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Maximum number of records in the table
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// State entered once the table is written
    #[serde(default = "default_initial_state")]
    pub initial_state: StateId,

    /// Records in scan order
    #[serde(default)]
    pub transitions: Vec<TransitionRecord>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            initial_state: HALT,
            transitions: Vec::new(),
        }
    }
}

impl MachineConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::from)
    }

    /// Serialize the config to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::from)
    }

    /// Turn the config into a builder so callbacks can be attached.
    pub fn into_builder<'a>(self) -> MachineBuilder<'a> {
        MachineBuilder::new()
            .capacity(self.capacity)
            .records(self.transitions)
            .initial(self.initial_state)
    }

    /// Build a machine with no callbacks registered.
    pub fn build<'a>(self) -> Result<Machine<'a>, ConfigError> {
        self.into_builder().build().map_err(ConfigError::from)
    }
}
