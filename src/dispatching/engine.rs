//! Rule engine for ready-queue selection.
//!
//! Composes dispatching rules lexicographically: the first rule decides,
//! later rules only break its ties, and ready-queue position breaks whatever
//! is still tied.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{RuleEngine, SchedulingContext};
/// use u_cpusched::dispatching::rules;
/// use u_cpusched::models::Process;
///
/// let engine = RuleEngine::new().with_rule(rules::Srtf);
/// let mut a = Process::new("A", 0, 7);
/// a.remaining_burst_time = 5;
/// let b = Process::new("B", 2, 5);
///
/// // Equal remaining time: the earlier queue position wins.
/// let order = engine.sort_indices(&[a, b], &SchedulingContext::at_time(2));
/// assert_eq!(order, vec![0, 1]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine. With no rules, queue order decides.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, in precedence order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts the ready queue by priority (highest priority first).
    ///
    /// `ready` must be in queue order. Returns indices into it.
    pub fn sort_indices(&self, ready: &[Process], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..ready.len()).collect();
        indices.sort_by(|&a, &b| {
            self.compare_rules(&ready[a], &ready[b], context)
                .then(a.cmp(&b))
        });
        indices
    }

    /// Returns the queue index of the highest-priority process.
    pub fn select_best(&self, ready: &[Process], context: &SchedulingContext) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, candidate) in ready.iter().enumerate() {
            best = match best {
                Some(current)
                    if self.compare_rules(candidate, &ready[current], context)
                        != Ordering::Less =>
                {
                    Some(current)
                }
                _ => Some(idx),
            };
        }
        best
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    fn compare_rules(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn with_remaining(id: &str, burst: i64, remaining: i64) -> Process {
        let mut p = Process::new(id, 0, burst);
        p.remaining_burst_time = remaining;
        p
    }

    #[test]
    fn test_sjf_ordering() {
        let ready = vec![
            Process::new("long", 0, 5),
            Process::new("short", 0, 1),
            Process::new("medium", 0, 3),
        ];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Sjf);

        let indices = engine.sort_indices(&ready, &ctx);
        assert_eq!(ready[indices[0]].id.as_str(), "short");
        assert_eq!(ready[indices[1]].id.as_str(), "medium");
        assert_eq!(ready[indices[2]].id.as_str(), "long");
    }

    #[test]
    fn test_ties_broken_by_queue_position() {
        let ready = vec![
            Process::new("first", 0, 4),
            Process::new("second", 0, 2),
            Process::new("third", 0, 2),
        ];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Sjf);

        assert_eq!(engine.sort_indices(&ready, &ctx), vec![1, 2, 0]);
        assert_eq!(engine.select_best(&ready, &ctx), Some(1));
    }

    #[test]
    fn test_srtf_uses_remaining_not_original() {
        let ready = vec![with_remaining("A", 10, 1), with_remaining("B", 2, 2)];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Srtf);
        assert_eq!(engine.select_best(&ready, &ctx), Some(0));

        let sjf = RuleEngine::new().with_rule(rules::Sjf);
        assert_eq!(sjf.select_best(&ready, &ctx), Some(1));
    }

    #[test]
    fn test_secondary_rule_breaks_ties() {
        let ready = vec![with_remaining("A", 9, 3), with_remaining("B", 4, 3)];
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::Srtf)
            .with_rule(rules::Sjf);
        assert_eq!(engine.select_best(&ready, &ctx), Some(1));
    }

    #[test]
    fn test_no_rules_keeps_queue_order() {
        let ready = vec![Process::new("A", 3, 9), Process::new("B", 0, 1)];
        let ctx = SchedulingContext::at_time(3);
        let engine = RuleEngine::new();
        assert_eq!(engine.sort_indices(&ready, &ctx), vec![0, 1]);
        assert_eq!(engine.select_best(&ready, &ctx), Some(0));
    }

    #[test]
    fn test_empty_ready_queue() {
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Sjf);
        assert!(engine.sort_indices(&[], &ctx).is_empty());
        assert!(engine.select_best(&[], &ctx).is_none());
    }

    #[test]
    fn test_evaluate_scores() {
        let p = with_remaining("T1", 6, 4);
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::Sjf)
            .with_rule(rules::Srtf);

        let scores = engine.evaluate(&p, &ctx);
        assert_eq!(scores.len(), 2);
        assert!((scores[0] - 6.0).abs() < 1e-10);
        assert!((scores[1] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new().with_rule(rules::Fcfs);
        assert!(format!("{engine:?}").contains("FCFS"));
    }
}
