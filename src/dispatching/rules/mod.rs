//! Built-in dispatching rules.
//!
//! - **FCFS**: earliest arrival
//! - **SJF**: shortest original burst
//! - **SRTF**: shortest remaining burst
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes. Ties are
//! resolved by the [`RuleEngine`](super::RuleEngine), never by the rule.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// First Come First Served.
///
/// Prioritizes by arrival time. The tick engine admits every process at its
/// arrival tick, so this always selects the head of the ready queue.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time as f64
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with the smaller original burst time. Minimizes
/// average waiting time among non-preemptive disciplines.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst_time as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time First.
///
/// Prioritizes processes closest to completion in the current run.
#[derive(Debug, Clone, Copy)]
pub struct Srtf;

impl DispatchingRule for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.remaining_burst_time as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}
