//! CPU scheduling domain models.
//!
//! Provides the data types a simulation reads and produces: the simulated
//! process with its timing outcome, and the execution timeline of one run.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Job definition plus per-run state and outcome |
//! | `ProcessId` | Caller-supplied identifier |
//! | `Completion` | Completed/turnaround/waiting times |
//! | `Timeline` | CPU slices of one run (Gantt data) |

mod process;
mod timeline;

pub use process::{Completion, Process, ProcessId, Tick};
pub use timeline::{Slice, Timeline};
