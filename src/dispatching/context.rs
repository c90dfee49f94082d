//! Scheduling context for dispatching rule evaluation.

use crate::models::Tick;

/// Runtime state passed to dispatching rules.
///
/// Built by the tick engine at every selection point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation clock (ticks).
    pub current_time: Tick,
    /// Number of processes in the ready queue.
    pub ready_count: usize,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: Tick) -> Self {
        Self {
            current_time,
            ..Default::default()
        }
    }

    /// Sets the ready queue length.
    pub fn with_ready_count(mut self, ready_count: usize) -> Self {
        self.ready_count = ready_count;
        self
    }
}
