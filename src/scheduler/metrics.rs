//! Run performance metrics.
//!
//! Aggregates the completed list of one run into standard CPU scheduling
//! indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Turnaround | Mean of completed - arrival |
//! | Average Waiting | Mean of turnaround - burst |
//! | Throughput | Completed count / last completion tick |
//! | Makespan | Last completion tick |
//! | CPU Utilization | Busy ticks / makespan |
//! | Max Waiting | Longest single wait |

use serde::{Deserialize, Serialize};

use crate::models::{Process, Tick};

/// Aggregate results of one run.
///
/// An empty run reports zero for everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Mean turnaround time (ticks).
    pub average_turnaround_time: f64,
    /// Mean waiting time (ticks).
    pub average_waiting_time: f64,
    /// Processes completed per tick, against the last completion tick.
    pub throughput: f64,
    /// Number of completed processes.
    pub completed_count: usize,
    /// Last completion tick.
    pub makespan: Tick,
    /// Sum of original burst times, i.e. busy CPU ticks.
    pub total_burst_time: Tick,
    /// Busy fraction of the makespan (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Longest waiting time of any process.
    pub max_waiting_time: Tick,
}

impl RunMetrics {
    /// Computes metrics from a completed list.
    ///
    /// Processes without a recorded completion are ignored.
    pub fn calculate(completed: &[Process]) -> Self {
        let mut total_turnaround: f64 = 0.0;
        let mut total_waiting: f64 = 0.0;
        let mut count: usize = 0;
        let mut makespan: Tick = 0;
        let mut total_burst: Tick = 0;
        let mut max_waiting: Tick = 0;

        for process in completed {
            let Some(c) = process.completion else {
                continue;
            };
            count += 1;
            total_turnaround += c.turnaround_time as f64;
            total_waiting += c.waiting_time as f64;
            makespan = makespan.max(c.completed_time);
            total_burst += process.burst_time;
            max_waiting = max_waiting.max(c.waiting_time);
        }

        if count == 0 {
            return Self::default();
        }

        let (throughput, cpu_utilization) = if makespan > 0 {
            (
                count as f64 / makespan as f64,
                total_burst as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            average_turnaround_time: total_turnaround / count as f64,
            average_waiting_time: total_waiting / count as f64,
            throughput,
            completed_count: count,
            makespan,
            total_burst_time: total_burst,
            cpu_utilization,
            max_waiting_time: max_waiting,
        }
    }

    /// `(average_turnaround_time, average_waiting_time, throughput)`.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (
            self.average_turnaround_time,
            self.average_waiting_time,
            self.throughput,
        )
    }

    /// Whether the run completed nothing.
    pub fn is_empty(&self) -> bool {
        self.completed_count == 0
    }
}
