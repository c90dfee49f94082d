//! Synthetic workload generation.
//!
//! Produces random process sets for demos and for exercising the policies on
//! inputs nobody typed in by hand.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_cpusched::workload::WorkloadGenerator;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let processes = WorkloadGenerator::new(5).generate(&mut rng);
//! assert_eq!(processes.len(), 5);
//! assert_eq!(processes[0].id.as_str(), "P1");
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Process, Tick};

/// Random process set parameters.
///
/// Arrival times are drawn uniformly from `0..=max_arrival_time`, burst times
/// from `min_burst_time..=max_burst_time`. Ids are `P1`, `P2`, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival tick.
    pub max_arrival_time: Tick,
    /// Shortest possible burst.
    pub min_burst_time: Tick,
    /// Longest possible burst.
    pub max_burst_time: Tick,
}

impl WorkloadGenerator {
    /// Generator for `count` processes arriving in `0..=10` with bursts in
    /// `1..=10`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival_time: 10,
            min_burst_time: 1,
            max_burst_time: 10,
        }
    }

    /// Sets the latest arrival tick. Negative values are clamped to 0.
    pub fn with_max_arrival_time(mut self, max_arrival_time: Tick) -> Self {
        self.max_arrival_time = max_arrival_time.max(0);
        self
    }

    /// Sets the burst range. Bounds are clamped to at least 1 and swapped if
    /// reversed.
    pub fn with_burst_range(mut self, min_burst_time: Tick, max_burst_time: Tick) -> Self {
        let lo = min_burst_time.max(1);
        let hi = max_burst_time.max(1);
        self.min_burst_time = lo.min(hi);
        self.max_burst_time = lo.max(hi);
        self
    }

    /// Draws a process set. Every process passes admission validation.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let max_arrival = self.max_arrival_time.max(0);
        let min_burst = self.min_burst_time.max(1);
        let max_burst = self.max_burst_time.max(min_burst);

        (1..=self.count)
            .map(|n| {
                let arrival = rng.random_range(0..=max_arrival);
                let burst = rng.random_range(min_burst..=max_burst);
                Process::new(format!("P{n}"), arrival, burst)
            })
            .collect()
    }
}
