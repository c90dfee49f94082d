//! Dispatching rules and rule engine for ready-queue selection.
//!
//! Every policy picks the next process from the ready queue through a
//! [`RuleEngine`]. Rules score processes; ties fall through to the next rule
//! and finally to ready-queue position, so selection is reproducible without
//! relying on sort stability.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{RuleEngine, SchedulingContext};
//! use u_cpusched::dispatching::rules;
//! use u_cpusched::models::Process;
//!
//! let ready = vec![Process::new("A", 0, 5), Process::new("B", 0, 2)];
//! let engine = RuleEngine::new().with_rule(rules::Sjf);
//!
//! let context = SchedulingContext::at_time(0);
//! assert_eq!(engine.select_best(&ready, &context), Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (selected first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRTF").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process given the current context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
