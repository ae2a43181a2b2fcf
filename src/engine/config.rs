//! Runtime configuration of a state machine.

use crate::engine::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Default bound on automatic re-submissions per submitted signal.
pub const DEFAULT_MAX_CASCADE_STEPS: usize = 256;

/// Tunables shared by every machine flavor.
///
/// Missing fields fall back to their defaults when deserializing, so an
/// empty JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Maximum number of output signals processed for a single submitted
    /// signal. `0` forbids output signals entirely.
    pub max_cascade_steps: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            max_cascade_steps: DEFAULT_MAX_CASCADE_STEPS,
        }
    }
}

impl MachineConfig {
    pub fn with_max_cascade_steps(mut self, steps: usize) -> Self {
        self.max_cascade_steps = steps;
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json).map_err(|e| ConfigurationError::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigurationError> {
        serde_json::to_string(self).map_err(|e| ConfigurationError::InvalidConfig(e.to_string()))
    }
}
