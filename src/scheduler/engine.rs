//! Ready-queue tick engine.
//!
//! Owns the state of one run: the simulated clock, the pending pool, the
//! ready queue, the completed list and the timeline. Policies drive it
//! through [`TickEngine::execute`] and [`TickEngine::complete`]; the engine
//! takes care of moving arrivals into the ready queue at every tick.
//!
//! # Invariants
//! - Each process is in exactly one of pending, ready, or completed.
//! - The ready queue preserves arrival order; simultaneous arrivals keep
//!   their admission order.
//! - `remaining_burst_time` never drops below zero.

use tracing::trace;

use crate::dispatching::{RuleEngine, SchedulingContext};
use crate::models::{Process, Tick, Timeline};

/// Per-run simulation state.
#[derive(Debug, Clone)]
pub struct TickEngine {
    clock: Tick,
    pending: Vec<Process>,
    ready: Vec<Process>,
    completed: Vec<Process>,
    timeline: Timeline,
}

impl TickEngine {
    /// Creates an engine at t=0 over fresh copies of `processes`.
    ///
    /// The originals are never touched, so the same set can be run again.
    pub fn new(processes: &[Process]) -> Self {
        Self {
            clock: 0,
            pending: processes.iter().map(Process::fresh_copy).collect(),
            ready: Vec::new(),
            completed: Vec::with_capacity(processes.len()),
            timeline: Timeline::new(),
        }
    }

    /// Current simulated time.
    pub fn now(&self) -> Tick {
        self.clock
    }

    /// Processes that have not arrived yet, in admission order.
    pub fn pending(&self) -> &[Process] {
        &self.pending
    }

    /// Ready queue, in queue order.
    pub fn ready(&self) -> &[Process] {
        &self.ready
    }

    /// Completed processes, in completion order.
    pub fn completed(&self) -> &[Process] {
        &self.completed
    }

    /// Whether both the pending pool and the ready queue are empty.
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty() && self.ready.is_empty()
    }

    /// Moves every pending process with `arrival_time <= now` to the back of
    /// the ready queue, preserving pending order. Returns how many moved.
    pub fn admit_arrivals(&mut self) -> usize {
        let now = self.clock;
        if !self.pending.iter().any(|p| p.arrival_time <= now) {
            return 0;
        }

        let (arrived, waiting): (Vec<Process>, Vec<Process>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.arrival_time <= now);
        self.pending = waiting;

        let count = arrived.len();
        for process in &arrived {
            trace!(process = %process.id, time = now, "arrived");
        }
        self.ready.extend(arrived);
        count
    }

    /// Advances the clock while the CPU has nothing to run.
    ///
    /// Stops as soon as the ready queue is non-empty or nothing is pending.
    /// Returns the number of idle ticks.
    pub fn wait_for_arrival(&mut self) -> Tick {
        let start = self.clock;
        while self.ready.is_empty() && !self.pending.is_empty() {
            self.clock += 1;
            self.admit_arrivals();
        }
        let idle = self.clock - start;
        if idle > 0 {
            trace!(from = start, to = self.clock, "cpu idle");
        }
        idle
    }

    /// Selection context at the current tick.
    pub fn context(&self) -> SchedulingContext {
        SchedulingContext::at_time(self.clock).with_ready_count(self.ready.len())
    }

    /// Queue index of the process `rules` would run next.
    pub fn select(&self, rules: &RuleEngine) -> Option<usize> {
        rules.select_best(&self.ready, &self.context())
    }

    /// Runs the ready process at `index` for up to `ticks` ticks.
    ///
    /// Each tick advances the clock by one, takes one unit off the
    /// process's remaining burst and admits arrivals. Arrivals go to the back
    /// of the queue, so `index` stays valid. Stops early when the process has
    /// no work left. Returns the ticks actually executed.
    ///
    /// # Panics
    /// If `index` is out of bounds for the ready queue.
    pub fn execute(&mut self, index: usize, ticks: Tick) -> Tick {
        let start = self.clock;
        let mut executed = 0;

        while executed < ticks && self.ready[index].remaining_burst_time > 0 {
            self.clock += 1;
            self.ready[index].remaining_burst_time -= 1;
            executed += 1;
            self.admit_arrivals();
        }

        let process = &self.ready[index];
        trace!(
            process = %process.id,
            start,
            end = self.clock,
            remaining = process.remaining_burst_time,
            "executed"
        );
        self.timeline.record(&process.id, start, self.clock);
        executed
    }

    /// Removes the ready process at `index` and completes it at the current
    /// tick.
    ///
    /// # Panics
    /// If `index` is out of bounds for the ready queue.
    pub fn complete(&mut self, index: usize) {
        let mut process = self.ready.remove(index);
        process.complete_at(self.clock);
        trace!(process = %process.id, time = self.clock, "completed");
        self.completed.push(process);
    }

    /// Moves the ready process at `index` to the back of the ready queue.
    ///
    /// # Panics
    /// If `index` is out of bounds for the ready queue.
    pub fn requeue(&mut self, index: usize) {
        let process = self.ready.remove(index);
        self.ready.push(process);
    }

    /// Consumes the engine, returning the completed list and the timeline.
    pub fn finish(self) -> (Vec<Process>, Timeline) {
        (self.completed, self.timeline)
    }
}
