//! Process (job) model.
//!
//! A process is one simulated job: an identifier, the tick at which it
//! becomes ready, and the number of CPU ticks it needs. Timing outcomes are
//! attached once a run completes it.
//!
//! # Time Representation
//! All times are integer ticks relative to the start of a run (t=0).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Simulated time, in ticks.
pub type Tick = i64;

/// Caller-supplied process identifier.
///
/// Opaque and comparable. Numeric identifiers are stored in their decimal
/// representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(String);

impl ProcessId {
    /// Creates an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Whether the identifier is a numeric zero (`"0"`, `"000"`, `"-0"`).
    pub fn is_zero(&self) -> bool {
        let digits = self.0.trim();
        let digits = digits
            .strip_prefix('-')
            .or_else(|| digits.strip_prefix('+'))
            .unwrap_or(digits);
        !digits.is_empty() && digits.bytes().all(|b| b == b'0')
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProcessId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProcessId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u32> for ProcessId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for ProcessId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for ProcessId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// Timing outcome of a completed process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Tick at which the last unit of work finished.
    pub completed_time: Tick,
    /// `completed_time - arrival_time`.
    pub turnaround_time: Tick,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Tick,
}

/// A simulated process.
///
/// `burst_time` always holds the original requirement. Runs work against
/// `remaining_burst_time`, so the original value survives preemption and is
/// what gets reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Caller-supplied identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes ready.
    pub arrival_time: Tick,
    /// Total CPU ticks required.
    pub burst_time: Tick,
    /// CPU ticks still owed in the current run.
    pub remaining_burst_time: Tick,
    /// Set when a run completes this process.
    pub completion: Option<Completion>,
}

impl Process {
    /// Creates a process that has not run yet.
    pub fn new(id: impl Into<ProcessId>, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            remaining_burst_time: burst_time,
            completion: None,
        }
    }

    /// Working copy for a fresh run: full remaining burst, no outcome.
    pub fn fresh_copy(&self) -> Self {
        Self {
            id: self.id.clone(),
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            remaining_burst_time: self.burst_time,
            completion: None,
        }
    }

    /// Records completion at `completed_time` and derives the outcome
    /// from the original burst.
    pub fn complete_at(&mut self, completed_time: Tick) {
        let turnaround_time = completed_time - self.arrival_time;
        self.remaining_burst_time = 0;
        self.completion = Some(Completion {
            completed_time,
            turnaround_time,
            waiting_time: turnaround_time - self.burst_time,
        });
    }

    /// Whether a run has completed this process.
    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }

    /// Completion tick, if completed.
    pub fn completed_time(&self) -> Option<Tick> {
        self.completion.map(|c| c.completed_time)
    }

    /// Turnaround time, if completed.
    pub fn turnaround_time(&self) -> Option<Tick> {
        self.completion.map(|c| c.turnaround_time)
    }

    /// Waiting time, if completed.
    pub fn waiting_time(&self) -> Option<Tick> {
        self.completion.map(|c| c.waiting_time)
    }

    /// Ticks of work already executed in the current run.
    pub fn executed_time(&self) -> Tick {
        self.burst_time - self.remaining_burst_time
    }
}
