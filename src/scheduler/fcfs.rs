//! First-come, first-serve scheduling.
//!
//! # Algorithm
//!
//! Processes run in the order given, each to completion. The input is
//! not sorted by arrival: an out-of-order list is served out of order.
//! When the next process has not arrived yet the CPU idles until it does.
//!
//! # Complexity
//! O(n)

use tracing::debug;

use super::{outcome, MetricsAggregator, Scheduler};
use crate::models::{Process, ScheduleOutcome, Timeline};

/// First-come, first-serve scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Fcfs, Scheduler};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3), Process::new(3, 2, 2)];
/// let outcome = Fcfs.schedule("FCFS", &processes);
///
/// let completions: Vec<i64> = outcome.rows.iter().map(|r| r.completion).collect();
/// assert_eq!(completions, vec![5, 8, 10]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, title: &str, processes: &[Process]) -> ScheduleOutcome {
        let mut timeline = Timeline::new();
        let mut metrics = MetricsAggregator::with_capacity(processes.len());
        let mut clock: i64 = 0;

        for process in processes {
            let wait = (clock - process.arrival).max(0);
            let start = process.arrival + wait;
            let completion = start + process.burst;

            if start > clock {
                debug!(process = process.id, from = clock, to = start, "cpu idle until arrival");
            }

            timeline.record(process.id, start, completion);
            metrics.complete(process, completion);
            clock = completion;
        }

        outcome(title, timeline, metrics)
    }
}
