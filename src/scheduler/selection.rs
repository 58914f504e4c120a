//! Re-selection schedulers: shortest job first and priority.
//!
//! # Algorithm
//!
//! 1. Among processes that have arrived, pick the best by the
//!    scheduler's dispatching rule. Equal scores go to the process found
//!    first in the working list.
//! 2. If nothing has arrived yet, the clock jumps to the earliest
//!    pending arrival.
//! 3. The selected process runs to completion. A better process arriving
//!    meanwhile is only considered at the next selection.
//! 4. Remove it from the working list and repeat until the list is empty.
//!
//! # Complexity
//! O(n²)

use tracing::debug;

use super::{outcome, MetricsAggregator, Scheduler};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{Process, ScheduleOutcome, Timeline};

/// Shortest-job-first scheduler (smallest remaining burst first).
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Scheduler, ShortestJobFirst};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3), Process::new(3, 2, 2)];
/// let outcome = ShortestJobFirst.schedule("SJF", &processes);
///
/// assert_eq!(outcome.row_order(), vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst;

impl Scheduler for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, title: &str, processes: &[Process]) -> ScheduleOutcome {
        run_by_selection(&RuleEngine::new(rules::ShortestRemaining), title, processes)
    }
}

/// Priority scheduler (lowest priority value first).
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler;

impl Scheduler for PriorityScheduler {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn schedule(&self, title: &str, processes: &[Process]) -> ScheduleOutcome {
        run_by_selection(&RuleEngine::new(rules::HighestPriority), title, processes)
    }
}

/// Runs the shared selection loop with the given rule engine.
fn run_by_selection(engine: &RuleEngine, title: &str, processes: &[Process]) -> ScheduleOutcome {
    let mut pending = processes.to_vec();
    let mut context = SchedulingContext::for_processes(&pending);
    let mut timeline = Timeline::new();
    let mut metrics = MetricsAggregator::with_capacity(pending.len());

    while !pending.is_empty() {
        let Some(idx) = engine.select_eligible(&pending, &context) else {
            if let Some(next_arrival) = pending.iter().map(|p| p.arrival).min() {
                debug!(from = context.current_time, to = next_arrival, "cpu idle until arrival");
                context.advance_to(next_arrival);
            }
            continue;
        };

        let process = pending.remove(idx);
        let start = context.current_time;
        let ran = context.consume(process.id, process.burst);
        context.retire(process.id);
        let stop = start + ran;

        debug!(
            process = process.id,
            start,
            stop,
            rule = engine.rule_name(),
            "selected"
        );

        timeline.record(process.id, start, stop);
        context.advance_to(stop);
        metrics.complete(&process, stop);
    }

    outcome(title, timeline, metrics)
}
