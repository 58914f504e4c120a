//! Round-robin scheduling with a unit quantum.
//!
//! # Algorithm
//!
//! The scheduler is a state machine over `(pending list, clock)`:
//!
//! 1. Scan the pending list from the front.
//! 2. Every arrived process in the scan runs for one quantum and the clock
//!    advances by the time actually used.
//! 3. A process that finishes is removed and the scan **restarts from the
//!    front**. A process that merely used its quantum stays in place and
//!    the scan moves on to the next one.
//! 4. A scan that reaches the end starts over from the front. A scan that
//!    ran nothing jumps the clock to the earliest pending arrival.
//!
//! The restart-on-completion rule is what decides who runs after a
//! completion, so changing it changes every metric downstream.
//!
//! # Complexity
//! O(B · n) where B = total burst.

use tracing::debug;

use super::{outcome, MetricsAggregator, Scheduler};
use crate::dispatching::SchedulingContext;
use crate::models::{Process, ScheduleOutcome, Timeline};

/// Round-robin scheduler with a quantum of one time unit.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{RoundRobin, Scheduler};
///
/// let outcome = RoundRobin.schedule("RR", &[Process::new(1, 0, 3)]);
/// assert_eq!(outcome.timeline.len(), 3);
/// assert_eq!(outcome.rows[0].wait, 0);
/// assert_eq!(outcome.rows[0].completion, 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

impl RoundRobin {
    /// Time slice granted per turn.
    pub const QUANTUM: i64 = 1;
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, title: &str, processes: &[Process]) -> ScheduleOutcome {
        let mut pending = processes.to_vec();
        let mut context = SchedulingContext::for_processes(&pending);
        let mut timeline = Timeline::new();
        let mut metrics = MetricsAggregator::with_capacity(pending.len());

        while !pending.is_empty() {
            let mut progressed = false;
            let mut idx = 0;

            while idx < pending.len() {
                if !pending[idx].has_arrived(context.current_time) {
                    idx += 1;
                    continue;
                }
                progressed = true;

                let id = pending[idx].id;
                let start = context.current_time;
                let used = context.consume(id, Self::QUANTUM);
                if used > 0 {
                    timeline.record(id, start, start + used);
                    context.advance_to(start + used);
                }

                if context.remaining(id).unwrap_or(0) <= 0 {
                    let process = pending.remove(idx);
                    context.retire(id);
                    debug!(process = id, completion = context.current_time, "completed");
                    metrics.complete(&process, context.current_time);
                    break;
                }
                idx += 1;
            }

            if !progressed {
                if let Some(next_arrival) = pending.iter().map(|p| p.arrival).min() {
                    debug!(from = context.current_time, to = next_arrival, "cpu idle until arrival");
                    context.advance_to(next_arrival);
                }
            }
        }

        outcome(title, timeline, metrics)
    }
}
