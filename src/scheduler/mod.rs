//! CPU scheduling disciplines.
//!
//! Each scheduler is a stateless value implementing [`Scheduler`]: it copies
//! the process slice it is given, simulates one run on a private clock and
//! remaining-burst map, and returns a [`ScheduleOutcome`]. Runs never share
//! mutable state, so they may be executed in any order or concurrently.
//!
//! | Scheduler | Selection | Preemption | Row order |
//! |-----------|-----------|------------|-----------|
//! | [`Fcfs`] | input order | none | input |
//! | [`ShortestJobFirst`] | smallest remaining burst | at completion | completion |
//! | [`PriorityScheduler`] | smallest priority value | at completion | completion |
//! | [`RoundRobin`] | scan order | every quantum | completion |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod metrics;
mod round_robin;
mod selection;

pub use fcfs::Fcfs;
pub use metrics::MetricsAggregator;
pub use round_robin::RoundRobin;
pub use selection::{PriorityScheduler, ShortestJobFirst};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ArgumentError;
use crate::models::{Process, ScheduleOutcome, Timeline};

/// A CPU scheduling discipline.
pub trait Scheduler: Send + Sync {
    /// Short discipline name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Simulates one run over `processes` and returns its timeline and metrics.
    ///
    /// Never mutates `processes`; the same input always yields the same outcome.
    /// `processes` is expected to pass
    /// [`validate_processes`](crate::validation::validate_processes), which
    /// keeps every clock value within `i64`.
    fn schedule(&self, title: &str, processes: &[Process]) -> ScheduleOutcome;
}

/// The built-in scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-come, first-serve.
    Fcfs,
    /// Shortest job first.
    Sjf,
    /// Lowest priority value first.
    Priority,
    /// Round-robin with a unit quantum.
    RoundRobin,
}

impl Algorithm {
    /// All disciplines in report order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Priority => "priority",
            Algorithm::RoundRobin => "rr",
        }
    }

    /// Title used in reports.
    pub fn default_title(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-come, first-serve",
            Algorithm::Sjf => "Shortest Job First (preemptive)",
            Algorithm::Priority => "Shortest Job First Priority (preemptive)",
            Algorithm::RoundRobin => "Round-Robin (non-preemptive)",
        }
    }

    /// The scheduler implementing this discipline.
    pub fn scheduler(self) -> &'static dyn Scheduler {
        match self {
            Algorithm::Fcfs => &Fcfs,
            Algorithm::Sjf => &ShortestJobFirst,
            Algorithm::Priority => &PriorityScheduler,
            Algorithm::RoundRobin => &RoundRobin,
        }
    }

    /// Runs this discipline under its default title.
    pub fn run(self, processes: &[Process]) -> ScheduleOutcome {
        self.scheduler().schedule(self.default_title(), processes)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "priority" => Ok(Algorithm::Priority),
            "rr" | "round-robin" => Ok(Algorithm::RoundRobin),
            _ => Err(ArgumentError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Runs each discipline on its own copy of `processes`, in the order given.
pub fn run_all(algorithms: &[Algorithm], processes: &[Process]) -> Vec<ScheduleOutcome> {
    algorithms.iter().map(|alg| alg.run(processes)).collect()
}

/// Closes a run: finalizes metrics and bundles the outcome.
fn outcome(title: &str, timeline: Timeline, metrics: MetricsAggregator) -> ScheduleOutcome {
    let (rows, summary) = metrics.finish();
    info!(
        title,
        processes = rows.len(),
        spans = timeline.len(),
        utilization = ?timeline.utilization(),
        average_wait = summary.average_wait,
        average_turnaround = summary.average_turnaround,
        throughput = summary.throughput,
        "schedule complete"
    );
    ScheduleOutcome {
        title: title.to_string(),
        timeline,
        rows,
        summary,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const PROPTEST_CASES: u32 = 64;

    fn processes() -> impl Strategy<Value = Vec<Process>> {
        proptest::collection::vec((0i64..20, 1i64..8, 0i64..4), 0..10).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (arrival, burst, priority))| {
                    Process::new(i as i64 + 1, arrival, burst).with_priority(priority)
                })
                .collect()
        })
    }

    fn check_invariants(outcome: &ScheduleOutcome, input: &[Process]) -> Result<(), TestCaseError> {
        prop_assert_eq!(outcome.rows.len(), input.len());

        let total_burst: i64 = input.iter().map(|p| p.burst).sum();
        prop_assert_eq!(outcome.timeline.busy_time(), total_burst);

        let mut prev_stop = i64::MIN;
        for entry in &outcome.timeline {
            prop_assert!(entry.stop >= entry.start);
            prop_assert!(entry.start >= prev_stop);
            prev_stop = entry.stop;
        }

        for row in &outcome.rows {
            prop_assert!(row.wait >= 0);
            prop_assert_eq!(row.turnaround, row.wait + row.burst);
            prop_assert_eq!(row.completion, row.arrival + row.wait + row.burst);
            prop_assert_eq!(
                outcome.timeline.completion_time(row.process_id),
                Some(row.completion)
            );
        }

        if !input.is_empty() {
            prop_assert!(outcome.summary.average_wait >= 0.0);
            prop_assert!(outcome.summary.throughput > 0.0);
        }
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

        #[test]
        fn every_algorithm_conserves_cpu_time(input in processes()) {
            for alg in Algorithm::ALL {
                check_invariants(&alg.run(&input), &input)?;
            }
        }

        #[test]
        fn fcfs_rows_follow_input_order(input in processes()) {
            let ids: Vec<i64> = input.iter().map(|p| p.id).collect();
            prop_assert_eq!(Algorithm::Fcfs.run(&input).row_order(), ids);
        }

        #[test]
        fn reordering_schedulers_emit_rows_by_completion(input in processes()) {
            for alg in [Algorithm::Sjf, Algorithm::Priority, Algorithm::RoundRobin] {
                let outcome = alg.run(&input);
                let completions: Vec<i64> = outcome.rows.iter().map(|r| r.completion).collect();
                prop_assert!(completions.windows(2).all(|w| w[0] <= w[1]));
            }
        }

        #[test]
        fn runs_are_idempotent(input in processes()) {
            for alg in Algorithm::ALL {
                let a = alg.run(&input);
                let b = alg.run(&input);
                prop_assert_eq!(a.timeline, b.timeline);
                prop_assert_eq!(a.rows, b.rows);
            }
        }

        #[test]
        fn round_robin_single_process(arrival in 0i64..10, burst in 1i64..20) {
            let outcome = RoundRobin.schedule("RR", &[Process::new(1, arrival, burst)]);
            prop_assert_eq!(outcome.timeline.len() as i64, burst);
            prop_assert!(outcome.timeline.iter().all(|e| e.duration() == 1));
            prop_assert_eq!(outcome.rows[0].wait, 0);
            prop_assert_eq!(outcome.rows[0].completion, arrival + burst);
        }
    }
}
