//! Scheduler facade.
//!
//! [`CpuScheduler`] owns the admitted process set and the results of the
//! most recent run. Every run works on a fresh copy of the admitted set, so
//! runs never affect each other.
//!
//! [`simulate`] is the same run without the facade, for callers that keep
//! their own process list.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::engine::TickEngine;
use super::metrics::RunMetrics;
use super::policy::Policy;
use crate::config::SimulatorConfig;
use crate::error::SchedulerError;
use crate::models::{Process, ProcessId, Tick, Timeline};
use crate::validation::{validate_input, validate_process, ValidationResult};

/// Run call as sent by a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    /// Policy display name ("FCFS", "SJF", "SRTF", "Round Robin").
    pub policy: String,
    /// Time quantum, required for Round Robin.
    #[serde(default)]
    pub time_quantum: Option<Tick>,
}

impl RunRequest {
    /// Creates a request for the named policy.
    pub fn new(policy: impl Into<String>) -> Self {
        Self {
            policy: policy.into(),
            time_quantum: None,
        }
    }

    /// Sets the time quantum.
    pub fn with_time_quantum(mut self, time_quantum: Tick) -> Self {
        self.time_quantum = Some(time_quantum);
        self
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutcome {
    /// Policy that ran.
    pub policy: Policy,
    /// Completed processes, in completion order.
    pub completed: Vec<Process>,
    /// CPU slices.
    pub timeline: Timeline,
    /// Aggregates over `completed`.
    pub metrics: RunMetrics,
}

/// Runs `policy` over fresh copies of `processes`.
///
/// `processes` is taken as admitted; validate it first if it comes from
/// outside.
///
/// # Errors
/// [`SchedulerError::InvalidTimeQuantum`] for a Round Robin policy without a
/// positive quantum. Nothing runs in that case.
///
/// # Example
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{simulate, Policy};
///
/// let processes = vec![Process::new("A", 0, 5), Process::new("B", 0, 2)];
/// let outcome = simulate(&processes, Policy::Sjf).unwrap();
///
/// assert_eq!(outcome.completed[0].id.as_str(), "B");
/// assert_eq!(outcome.completed[1].completed_time(), Some(7));
/// assert!((outcome.metrics.throughput - 2.0 / 7.0).abs() < 1e-10);
/// ```
pub fn simulate(processes: &[Process], policy: Policy) -> Result<SimulationOutcome, SchedulerError> {
    policy.validate()?;

    let mut engine = TickEngine::new(processes);
    policy.drive(&mut engine);
    let (completed, timeline) = engine.finish();
    let metrics = RunMetrics::calculate(&completed);

    Ok(SimulationOutcome {
        policy,
        completed,
        timeline,
        metrics,
    })
}

/// Owns the admitted processes and the latest run's results.
///
/// # Example
/// ```
/// use u_cpusched::scheduler::{CpuScheduler, Policy};
///
/// let mut scheduler = CpuScheduler::new();
/// scheduler.admit("A", 0, 5).unwrap();
/// scheduler.admit("B", 1, 3).unwrap();
/// assert!(scheduler.admit("C", 0, 0).is_err());
///
/// let metrics = scheduler.run(Policy::Fcfs).unwrap();
/// assert_eq!(scheduler.completed()[1].completed_time(), Some(8));
/// assert!((metrics.average_waiting_time - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CpuScheduler {
    config: SimulatorConfig,
    processes: Vec<Process>,
    completed: Vec<Process>,
    timeline: Timeline,
    last_policy: Option<Policy>,
}

impl CpuScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with the given configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Admits one process.
    ///
    /// On rejection nothing changes and every problem is reported.
    pub fn admit(
        &mut self,
        id: impl Into<ProcessId>,
        arrival_time: Tick,
        burst_time: Tick,
    ) -> ValidationResult {
        let process = Process::new(id, arrival_time, burst_time);
        if let Err(errors) = validate_process(&process, &self.processes, &self.config) {
            debug!(process = %process.id, errors = errors.len(), "admission rejected");
            return Err(errors);
        }
        debug!(process = %process.id, arrival_time, burst_time, "admitted");
        self.processes.push(process);
        Ok(())
    }

    /// Admits a batch, all or nothing.
    pub fn admit_all(&mut self, processes: Vec<Process>) -> ValidationResult {
        if let Err(errors) = validate_input(&processes, &self.processes, &self.config) {
            debug!(
                batch = processes.len(),
                errors = errors.len(),
                "batch admission rejected"
            );
            return Err(errors);
        }
        debug!(batch = processes.len(), "batch admitted");
        self.processes
            .extend(processes.iter().map(Process::fresh_copy));
        Ok(())
    }

    /// Admitted processes, in admission order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Completed processes of the latest run, in completion order.
    pub fn completed(&self) -> &[Process] {
        &self.completed
    }

    /// Timeline of the latest run.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Policy of the latest run, if results are present.
    pub fn last_policy(&self) -> Option<Policy> {
        self.last_policy
    }

    /// Clears the latest run's results. Admitted processes are kept.
    pub fn reset_results(&mut self) {
        self.completed.clear();
        self.timeline = Timeline::new();
        self.last_policy = None;
    }

    /// Runs `policy` over the admitted set and keeps its results.
    ///
    /// # Errors
    /// [`SchedulerError::InvalidTimeQuantum`] for Round Robin without a
    /// positive quantum. The previous results stay untouched.
    #[instrument(skip(self), fields(processes = self.processes.len()))]
    pub fn run(&mut self, policy: Policy) -> Result<RunMetrics, SchedulerError> {
        let outcome = simulate(&self.processes, policy)?;
        Ok(self.store(outcome))
    }

    /// Runs a policy given by display name.
    ///
    /// Round Robin uses the configured [`QuantumRotation`](crate::config::QuantumRotation).
    pub fn run_named(
        &mut self,
        name: &str,
        time_quantum: Option<Tick>,
    ) -> Result<RunMetrics, SchedulerError> {
        let policy = Policy::from_name(name, time_quantum, self.config.rotation)?;
        self.run(policy)
    }

    /// Runs a [`RunRequest`].
    pub fn run_request(&mut self, request: &RunRequest) -> Result<RunMetrics, SchedulerError> {
        self.run_named(&request.policy, request.time_quantum)
    }

    /// Runs several policies over the same admitted set.
    ///
    /// All policies are validated before any runs. The latest results are
    /// those of the last policy.
    pub fn compare(&mut self, policies: &[Policy]) -> Result<Vec<SimulationOutcome>, SchedulerError> {
        for policy in policies {
            policy.validate()?;
        }

        let mut outcomes = Vec::with_capacity(policies.len());
        for &policy in policies {
            outcomes.push(simulate(&self.processes, policy)?);
        }
        if let Some(last) = outcomes.last() {
            self.store(last.clone());
        }
        Ok(outcomes)
    }

    fn store(&mut self, outcome: SimulationOutcome) -> RunMetrics {
        let metrics = outcome.metrics;
        info!(
            policy = %outcome.policy,
            completed = metrics.completed_count,
            avg_turnaround = metrics.average_turnaround_time,
            avg_waiting = metrics.average_waiting_time,
            throughput = metrics.throughput,
            "run finished"
        );

        self.completed = outcome.completed;
        self.timeline = outcome.timeline;
        self.last_policy = Some(outcome.policy);
        metrics
    }
}
