//! Scheduling policies.
//!
//! Each policy drives a [`TickEngine`] until the pending pool and ready queue
//! are empty. They differ only in which ready process runs next and for how
//! long.
//!
//! | Policy | Selection | Preemption |
//! |--------|-----------|------------|
//! | FCFS | Queue head | None |
//! | SJF | Shortest original burst | None |
//! | SRTF | Shortest remaining burst | Every tick |
//! | Round Robin | Queue head | After each quantum |
//!
//! All selection ties go to the process earlier in the ready queue.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::engine::TickEngine;
use crate::config::QuantumRotation;
use crate::dispatching::{rules, RuleEngine};
use crate::error::SchedulerError;
use crate::models::Tick;

/// A CPU scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Policy {
    /// First Come First Served, non-preemptive.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Shortest Remaining Time First, preemptive.
    Srtf,
    /// Round Robin with a fixed time quantum.
    RoundRobin {
        /// Ticks per slice. Must be positive.
        time_quantum: Tick,
        /// What happens when a slice expires before the process finishes.
        #[serde(default)]
        rotation: QuantumRotation,
    },
}

impl Policy {
    /// Round Robin that keeps a partially-served process at the queue head.
    pub fn round_robin(time_quantum: Tick) -> Result<Self, SchedulerError> {
        Self::round_robin_with(time_quantum, QuantumRotation::KeepHead)
    }

    /// Round Robin with an explicit quantum expiry behavior.
    pub fn round_robin_with(
        time_quantum: Tick,
        rotation: QuantumRotation,
    ) -> Result<Self, SchedulerError> {
        let policy = Self::RoundRobin {
            time_quantum,
            rotation,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Resolves a policy from its display name.
    ///
    /// Accepts "FCFS", "SJF", "SRTF" and "Round Robin" (also "RR" and
    /// "round_robin"), ignoring case, spaces, hyphens and underscores.
    /// `time_quantum` is required for Round Robin and ignored otherwise.
    pub fn from_name(
        name: &str,
        time_quantum: Option<Tick>,
        rotation: QuantumRotation,
    ) -> Result<Self, SchedulerError> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "srtf" => Ok(Self::Srtf),
            "rr" | "roundrobin" => match time_quantum {
                Some(q) => Self::round_robin_with(q, rotation),
                None => Err(SchedulerError::InvalidTimeQuantum(None)),
            },
            _ => Err(SchedulerError::UnknownPolicy(name.to_string())),
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether a running process can lose the CPU before it finishes.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin { .. })
    }

    /// Time quantum, for Round Robin.
    pub fn time_quantum(&self) -> Option<Tick> {
        match self {
            Self::RoundRobin { time_quantum, .. } => Some(*time_quantum),
            _ => None,
        }
    }

    /// Checks that the policy can run.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        match self {
            Self::RoundRobin { time_quantum, .. } if *time_quantum <= 0 => {
                Err(SchedulerError::InvalidTimeQuantum(Some(*time_quantum)))
            }
            _ => Ok(()),
        }
    }

    /// Drives `engine` until every process has completed.
    ///
    /// The policy must be valid; see [`Policy::validate`].
    pub(crate) fn drive(&self, engine: &mut TickEngine) {
        match *self {
            Self::Fcfs => run_to_completion(engine, &RuleEngine::new().with_rule(rules::Fcfs)),
            Self::Sjf => run_to_completion(engine, &RuleEngine::new().with_rule(rules::Sjf)),
            Self::Srtf => shortest_remaining_first(engine),
            Self::RoundRobin {
                time_quantum,
                rotation,
            } => round_robin(engine, time_quantum, rotation),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { time_quantum, .. } => write!(f, "Round Robin (q={time_quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Non-preemptive loop: select by `rules`, run the whole burst.
fn run_to_completion(engine: &mut TickEngine, rules: &RuleEngine) {
    while !engine.is_finished() {
        engine.admit_arrivals();
        engine.wait_for_arrival();

        let Some(index) = engine.select(rules) else {
            break;
        };
        let burst = engine.ready()[index].remaining_burst_time;
        engine.execute(index, burst);
        engine.complete(index);
    }
}

/// Preemptive loop: reselect by remaining burst after every tick.
fn shortest_remaining_first(engine: &mut TickEngine) {
    let rules = RuleEngine::new().with_rule(rules::Srtf);

    while !engine.is_finished() {
        engine.admit_arrivals();
        engine.wait_for_arrival();

        let Some(index) = engine.select(&rules) else {
            break;
        };
        engine.execute(index, 1);
        if engine.ready()[index].remaining_burst_time == 0 {
            engine.complete(index);
        }
    }
}

/// Quantum loop over the queue head.
///
/// With [`QuantumRotation::KeepHead`] an unfinished process stays the head,
/// so it is served slice after slice until done.
fn round_robin(engine: &mut TickEngine, time_quantum: Tick, rotation: QuantumRotation) {
    while !engine.is_finished() {
        engine.admit_arrivals();
        engine.wait_for_arrival();

        if engine.ready().is_empty() {
            break;
        }
        let remaining = engine.ready()[0].remaining_burst_time;
        if remaining <= time_quantum {
            engine.execute(0, remaining);
            engine.complete(0);
        } else {
            engine.execute(0, time_quantum);
            if rotation == QuantumRotation::Requeue {
                engine.requeue(0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, Slice};

    fn drive(policy: Policy, processes: &[Process]) -> (Vec<Process>, crate::models::Timeline) {
        let mut engine = TickEngine::new(processes);
        policy.drive(&mut engine);
        engine.finish()
    }

    fn completion_of(completed: &[Process], id: &str) -> i64 {
        completed
            .iter()
            .find(|p| p.id.as_str() == id)
            .and_then(Process::completed_time)
            .unwrap()
    }

    #[test]
    fn test_fcfs_order_preserving() {
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
        let (completed, _) = drive(Policy::Fcfs, &processes);

        assert_eq!(completion_of(&completed, "A"), 5);
        assert_eq!(completion_of(&completed, "B"), 8);
        assert_eq!(completed[1].waiting_time(), Some(4));
    }

    #[test]
    fn test_fcfs_simultaneous_arrival_uses_admission_order() {
        let processes = vec![Process::new("B", 0, 1), Process::new("A", 0, 1)];
        let (completed, _) = drive(Policy::Fcfs, &processes);
        assert_eq!(completed[0].id.as_str(), "B");
        assert_eq!(completed[1].id.as_str(), "A");
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new("A", 0, 2), Process::new("B", 5, 1)];
        let (completed, timeline) = drive(Policy::Fcfs, &processes);
        assert_eq!(completion_of(&completed, "B"), 6);
        assert_eq!(completed[1].waiting_time(), Some(0));
        assert_eq!(timeline.idle_gaps(), vec![(2, 5)]);
    }

    #[test]
    fn test_sjf_shortest_first() {
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 0, 2)];
        let (completed, _) = drive(Policy::Sjf, &processes);

        assert_eq!(completed[0].id.as_str(), "B");
        assert_eq!(completion_of(&completed, "B"), 2);
        assert_eq!(completion_of(&completed, "A"), 7);
    }

    #[test]
    fn test_sjf_not_preempted_by_shorter_arrival() {
        let processes = vec![Process::new("A", 0, 6), Process::new("B", 1, 1)];
        let (completed, _) = drive(Policy::Sjf, &processes);
        assert_eq!(completion_of(&completed, "A"), 6);
        assert_eq!(completion_of(&completed, "B"), 7);
    }

    #[test]
    fn test_sjf_tie_keeps_queue_order() {
        let processes = vec![
            Process::new("A", 0, 4),
            Process::new("B", 1, 2),
            Process::new("C", 2, 2),
        ];
        let (completed, _) = drive(Policy::Sjf, &processes);
        let order: Vec<&str> = completed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_srtf_preempts_on_arrival() {
        let processes = vec![Process::new("A", 0, 7), Process::new("B", 2, 2)];
        let (completed, timeline) = drive(Policy::Srtf, &processes);

        assert_eq!(completion_of(&completed, "B"), 4);
        assert_eq!(completion_of(&completed, "A"), 9);
        // Reported burst is the original, not the exhausted remaining value.
        let a = completed.iter().find(|p| p.id.as_str() == "A").unwrap();
        assert_eq!(a.burst_time, 7);
        assert_eq!(a.waiting_time(), Some(2));
        assert_eq!(
            timeline.slices,
            vec![Slice::new("A", 0, 2), Slice::new("B", 2, 4), Slice::new("A", 4, 9)]
        );
    }

    #[test]
    fn test_srtf_tie_keeps_running_process() {
        // At t=2 A has 3 left and B needs 3: A is earlier in the queue.
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 2, 3)];
        let (completed, _) = drive(Policy::Srtf, &processes);
        assert_eq!(completion_of(&completed, "A"), 5);
        assert_eq!(completion_of(&completed, "B"), 8);
    }

    #[test]
    fn test_round_robin_keeps_head() {
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
        let policy = Policy::round_robin(2).unwrap();
        let (completed, timeline) = drive(policy, &processes);

        // A is served in slices ending at 2, 4, 5 before B gets the CPU.
        assert_eq!(completion_of(&completed, "A"), 5);
        assert_eq!(completion_of(&completed, "B"), 8);
        assert_eq!(
            timeline.slices,
            vec![Slice::new("A", 0, 5), Slice::new("B", 5, 8)]
        );
    }

    #[test]
    fn test_round_robin_slice_boundaries() {
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
        let mut engine = TickEngine::new(&processes);
        engine.admit_arrivals();

        // Step the same loop by hand to observe each slice.
        let mut boundaries = Vec::new();
        let mut heads = Vec::new();
        while !engine.is_finished() {
            engine.admit_arrivals();
            engine.wait_for_arrival();
            let head = engine.ready()[0].id.to_string();
            let remaining = engine.ready()[0].remaining_burst_time;
            if remaining <= 2 {
                engine.execute(0, remaining);
                engine.complete(0);
            } else {
                engine.execute(0, 2);
            }
            heads.push(head);
            boundaries.push(engine.now());
        }
        assert_eq!(heads, vec!["A", "A", "A", "B", "B"]);
        assert_eq!(boundaries, vec![2, 4, 5, 7, 8]);
    }

    #[test]
    fn test_round_robin_requeue_interleaves() {
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
        let policy = Policy::round_robin_with(2, QuantumRotation::Requeue).unwrap();
        let (completed, timeline) = drive(policy, &processes);

        assert_eq!(completion_of(&completed, "B"), 7);
        assert_eq!(completion_of(&completed, "A"), 8);
        assert_eq!(
            timeline.slices,
            vec![
                Slice::new("A", 0, 2),
                Slice::new("B", 2, 4),
                Slice::new("A", 4, 6),
                Slice::new("B", 6, 7),
                Slice::new("A", 7, 8),
            ]
        );
    }

    #[test]
    fn test_round_robin_quantum_larger_than_bursts() {
        let processes = vec![Process::new("A", 0, 2), Process::new("B", 0, 3)];
        let (completed, _) = drive(Policy::round_robin(10).unwrap(), &processes);
        assert_eq!(completion_of(&completed, "A"), 2);
        assert_eq!(completion_of(&completed, "B"), 5);
    }

    #[test]
    fn test_empty_input_finishes_immediately() {
        for policy in [Policy::Fcfs, Policy::Sjf, Policy::Srtf, Policy::round_robin(1).unwrap()] {
            let (completed, timeline) = drive(policy, &[]);
            assert!(completed.is_empty());
            assert_eq!(timeline.makespan(), 0);
        }
    }

    #[test]
    fn test_invalid_quantum() {
        assert_eq!(
            Policy::round_robin(0),
            Err(SchedulerError::InvalidTimeQuantum(Some(0)))
        );
        assert_eq!(
            Policy::round_robin(-3),
            Err(SchedulerError::InvalidTimeQuantum(Some(-3)))
        );
    }

    #[test]
    fn test_from_name() {
        let keep = QuantumRotation::KeepHead;
        assert_eq!(Policy::from_name("FCFS", None, keep), Ok(Policy::Fcfs));
        assert_eq!(Policy::from_name("sjf", Some(4), keep), Ok(Policy::Sjf));
        assert_eq!(Policy::from_name("Srtf", None, keep), Ok(Policy::Srtf));
        assert_eq!(
            Policy::from_name("Round Robin", Some(3), keep),
            Ok(Policy::RoundRobin {
                time_quantum: 3,
                rotation: keep
            })
        );
        assert_eq!(
            Policy::from_name("rr", None, keep),
            Err(SchedulerError::InvalidTimeQuantum(None))
        );
        assert_eq!(
            Policy::from_name("round_robin", Some(0), keep),
            Err(SchedulerError::InvalidTimeQuantum(Some(0)))
        );
        assert_eq!(
            Policy::from_name("LIFO", None, keep),
            Err(SchedulerError::UnknownPolicy("LIFO".into()))
        );
    }

    #[test]
    fn test_names_and_flags() {
        let rr = Policy::round_robin(4).unwrap();
        assert_eq!(rr.name(), "Round Robin");
        assert_eq!(rr.to_string(), "Round Robin (q=4)");
        assert_eq!(Policy::Sjf.to_string(), "SJF");
        assert!(rr.is_preemptive());
        assert!(Policy::Srtf.is_preemptive());
        assert!(!Policy::Fcfs.is_preemptive());
        assert_eq!(rr.time_quantum(), Some(4));
        assert_eq!(Policy::Fcfs.time_quantum(), None);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Policy::round_robin(2).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"round_robin","time_quantum":2,"rotation":"keep_head"}"#
        );
        let parsed: Policy =
            serde_json::from_str(r#"{"kind":"round_robin","time_quantum":3}"#).unwrap();
        assert_eq!(parsed, Policy::round_robin(3).unwrap());
        let fcfs: Policy = serde_json::from_str(r#"{"kind":"fcfs"}"#).unwrap();
        assert_eq!(fcfs, Policy::Fcfs);
    }
}
