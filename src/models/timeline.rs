//! Execution timeline (Gantt) model.
//!
//! A timeline records which process held the CPU over which tick interval
//! during one run. Consecutive ticks of the same process are merged into a
//! single slice; ticks with no slice are idle CPU time.

use serde::{Deserialize, Serialize};

use super::{ProcessId, Tick};

/// CPU slices of one run, in time order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Executed slices, non-overlapping and ordered by start.
    pub slices: Vec<Slice>,
}

/// A contiguous interval `[start, end)` during which one process ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process holding the CPU.
    pub process_id: ProcessId,
    /// First tick of the slice.
    pub start: Tick,
    /// Tick after the last executed unit.
    pub end: Tick,
}

impl Slice {
    /// Creates a slice.
    pub fn new(process_id: impl Into<ProcessId>, start: Tick, end: Tick) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Length in ticks.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records execution of `process_id` over `[start, end)`.
    ///
    /// Extends the last slice when it belongs to the same process and ends
    /// exactly at `start`. Empty intervals are ignored.
    pub fn record(&mut self, process_id: &ProcessId, start: Tick, end: Tick) {
        if end <= start {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.process_id == *process_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(Slice::new(process_id.clone(), start, end));
    }

    /// End of the last slice, or 0 when nothing ran.
    pub fn makespan(&self) -> Tick {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> Tick {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Total idle ticks between t=0 and the makespan.
    pub fn idle_time(&self) -> Tick {
        self.makespan() - self.busy_time()
    }

    /// Idle intervals `[start, end)` between t=0 and the makespan.
    pub fn idle_gaps(&self) -> Vec<(Tick, Tick)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for slice in &self.slices {
            if slice.start > cursor {
                gaps.push((cursor, slice.start));
            }
            cursor = slice.end;
        }
        gaps
    }

    /// All slices of one process.
    pub fn slices_for(&self, process_id: &ProcessId) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == *process_id)
            .collect()
    }

    /// Busy fraction over `horizon`.
    ///
    /// Returns `None` if `horizon` is not positive.
    pub fn utilization(&self, horizon: Tick) -> Option<f64> {
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Number of slices.
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }
}
