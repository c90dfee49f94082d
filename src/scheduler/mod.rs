//! CPU scheduling simulation.
//!
//! Provides the tick engine, the four scheduling policies, run metrics and
//! the scheduler facade.
//!
//! # Algorithm
//!
//! A run copies the admitted processes into a [`TickEngine`] at t=0. The
//! selected [`Policy`] then repeatedly:
//! 1. Admits processes whose arrival time has been reached.
//! 2. Idles the clock while nothing is ready.
//! 3. Picks a ready process and executes it tick by tick, admitting arrivals
//!    after every tick.
//!
//! until the pending pool and ready queue are both empty. [`RunMetrics`] then
//! aggregates the completed list.
//!
//! # Round Robin
//!
//! By default an unfinished process keeps the head of the ready queue when
//! its quantum expires, so every process is served to completion in
//! quantum-sized chunks. [`QuantumRotation::Requeue`](crate::config::QuantumRotation)
//! selects conventional rotation instead.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod engine;
mod metrics;
mod policy;
mod simulator;

pub use engine::TickEngine;
pub use metrics::RunMetrics;
pub use policy::Policy;
pub use simulator::{simulate, CpuScheduler, RunRequest, SimulationOutcome};
