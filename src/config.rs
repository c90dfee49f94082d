//! Simulator configuration.
//!
//! Admission rules and Round Robin behavior that the presentation layer may
//! want to change. Serializable so it can be loaded from JSON.

use serde::{Deserialize, Serialize};

/// What happens to a process whose Round Robin quantum expires before it
/// finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantumRotation {
    /// The process stays at the head of the ready queue and gets the next
    /// slice too, so it runs to completion in quantum-sized chunks before
    /// anything behind it is served.
    #[default]
    KeepHead,
    /// Conventional round robin: the process moves behind every process
    /// that is ready when its quantum expires.
    Requeue,
}

/// Simulator settings.
///
/// # Example
/// ```
/// use u_cpusched::config::{QuantumRotation, SimulatorConfig};
///
/// let config = SimulatorConfig::default()
///     .with_allow_zero_id(true)
///     .with_rotation(QuantumRotation::Requeue);
/// assert!(config.allow_zero_id);
/// assert!(config.allow_duplicate_ids);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Accept a numeric zero process id.
    pub allow_zero_id: bool,
    /// Accept a process id that is already admitted.
    pub allow_duplicate_ids: bool,
    /// Round Robin quantum expiry behavior for runs requested by name.
    pub rotation: QuantumRotation,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            allow_zero_id: false,
            allow_duplicate_ids: true,
            rotation: QuantumRotation::KeepHead,
        }
    }
}

impl SimulatorConfig {
    /// Sets whether id 0 is accepted.
    pub fn with_allow_zero_id(mut self, allow: bool) -> Self {
        self.allow_zero_id = allow;
        self
    }

    /// Sets whether duplicate ids are accepted.
    pub fn with_allow_duplicate_ids(mut self, allow: bool) -> Self {
        self.allow_duplicate_ids = allow;
        self
    }

    /// Sets the Round Robin quantum expiry behavior.
    pub fn with_rotation(mut self, rotation: QuantumRotation) -> Self {
        self.rotation = rotation;
        self
    }
}
