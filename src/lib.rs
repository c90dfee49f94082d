//! CPU scheduling simulator.
//!
//! Simulates classical CPU scheduling disciplines over a process set and
//! reports per-process timing outcomes plus aggregate metrics. Execution is
//! modeled as one unit of work per simulated tick; nothing here touches a
//! real clock or a real CPU.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessId`, `Completion`, `Timeline`
//! - **`dispatching`**: Ready-queue selection rules (FCFS, SJF, SRTF) and the
//!   `RuleEngine` that applies them with queue-order tie-breaking
//! - **`scheduler`**: `TickEngine`, `Policy`, `RunMetrics`, and the
//!   `CpuScheduler` facade
//! - **`validation`**: Admission checks (identifier, arrival, burst)
//! - **`config`**: `SimulatorConfig` and Round Robin `QuantumRotation`
//! - **`workload`**: Random process set generation
//!
//! # Example
//!
//! ```
//! use u_cpusched::scheduler::{CpuScheduler, Policy};
//!
//! let mut scheduler = CpuScheduler::new();
//! scheduler.admit("A", 0, 7).unwrap();
//! scheduler.admit("B", 2, 2).unwrap();
//!
//! let (avg_turnaround, avg_waiting, throughput) =
//!     scheduler.run(Policy::Srtf).unwrap().as_tuple();
//! assert_eq!(scheduler.completed()[0].completed_time(), Some(4));
//! assert!((avg_turnaround - 5.5).abs() < 1e-10);
//! assert!((avg_waiting - 1.0).abs() < 1e-10);
//! assert!((throughput - 2.0 / 9.0).abs() < 1e-10);
//! ```
//!
//! # Logging
//!
//! Runs and admissions are reported through `tracing`. The crate never
//! installs a subscriber.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2017), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SchedulerError;
