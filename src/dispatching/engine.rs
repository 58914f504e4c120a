//! Rule engine for selecting the next process.
//!
//! Scores every arrived process with one dispatching rule. When scores
//! tie, the process found first in the working list's current order wins.
//! That index-order tie-break is observable in scheduler output, so it is
//! not configurable.

use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// A rule engine for process selection.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new(rules::HighestPriority);
/// assert_eq!(engine.rule_name(), "PRIORITY");
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rule: Arc<dyn DispatchingRule>,
}

impl RuleEngine {
    /// Creates an engine driven by `rule`.
    pub fn new<R: DispatchingRule + 'static>(rule: R) -> Self {
        Self {
            rule: Arc::new(rule),
        }
    }

    /// Name of the configured rule.
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Returns the index of the best process that has arrived by
    /// `context.current_time`.
    ///
    /// Scans in slice order and only replaces the current best on a
    /// strictly lower score, so the first of several equal candidates
    /// wins. Returns `None` when nothing has arrived yet.
    pub fn select_eligible(&self, processes: &[Process], context: &SchedulingContext) -> Option<usize> {
        let mut best: Option<(usize, RuleScore)> = None;

        for (idx, process) in processes.iter().enumerate() {
            if !process.has_arrived(context.current_time) {
                continue;
            }
            let score = self.evaluate(process, context);
            match best {
                Some((_, best_score)) if score >= best_score => {}
                _ => best = Some((idx, score)),
            }
        }

        best.map(|(idx, _)| idx)
    }

    /// Scores a single process.
    pub fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore {
        self.rule.evaluate(process, context)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rule", &self.rule_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    #[test]
    fn test_selects_shortest_arrived() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 0, 2),
            Process::new(3, 0, 3),
        ];
        let ctx = SchedulingContext::for_processes(&processes);
        let engine = RuleEngine::new(rules::ShortestRemaining);
        assert_eq!(engine.select_eligible(&processes, &ctx), Some(1));
    }

    #[test]
    fn test_ignores_processes_not_arrived() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 4, 1)];
        let mut ctx = SchedulingContext::for_processes(&processes);
        let engine = RuleEngine::new(rules::ShortestRemaining);
        assert_eq!(engine.select_eligible(&processes, &ctx), Some(0));

        ctx.advance_to(4);
        assert_eq!(engine.select_eligible(&processes, &ctx), Some(1));
    }

    #[test]
    fn test_first_in_list_wins_ties() {
        // Ids deliberately out of order: the tie goes to list position, not id.
        let processes = vec![
            Process::new(9, 1, 4),
            Process::new(2, 0, 4),
            Process::new(5, 0, 4),
        ];
        let mut ctx = SchedulingContext::for_processes(&processes);
        ctx.advance_to(1);
        let engine = RuleEngine::new(rules::ShortestRemaining);
        assert_eq!(engine.select_eligible(&processes, &ctx), Some(0));
    }

    #[test]
    fn test_priority_ties_ignore_arrival() {
        let processes = vec![
            Process::new(1, 2, 3).with_priority(1),
            Process::new(2, 0, 3).with_priority(1),
        ];
        let mut ctx = SchedulingContext::for_processes(&processes);
        ctx.advance_to(2);
        let engine = RuleEngine::new(rules::HighestPriority);
        assert_eq!(engine.select_eligible(&processes, &ctx), Some(0));
    }

    #[test]
    fn test_no_eligible_process() {
        let processes = vec![Process::new(1, 3, 5)];
        let ctx = SchedulingContext::for_processes(&processes);
        let engine = RuleEngine::new(rules::ShortestRemaining);
        assert_eq!(engine.select_eligible(&processes, &ctx), None);
        assert_eq!(engine.select_eligible(&[], &ctx), None);
    }

    #[test]
    fn test_evaluate_score() {
        let p = Process::new(1, 2, 6).with_priority(3);
        let ctx = SchedulingContext::at_time(0).with_remaining_burst(1, 4);
        assert_eq!(RuleEngine::new(rules::HighestPriority).evaluate(&p, &ctx), 3);
        assert_eq!(RuleEngine::new(rules::ShortestRemaining).evaluate(&p, &ctx), 4);
    }

    #[test]
    fn test_debug_names_rule() {
        let engine = RuleEngine::new(rules::ShortestRemaining);
        assert!(format!("{engine:?}").contains("SRT"));
    }
}
