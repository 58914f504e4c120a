//! Scheduling result model.
//!
//! Per-process timing rows, the run-level summary, and the outcome that
//! bundles them with the timeline of one scheduler invocation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Wait | turnaround - burst |
//! | Average wait | sum(wait) / n |
//! | Average turnaround | sum(turnaround) / n |
//! | Throughput | n / last completion |

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Timeline};

/// Final timing metrics of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Process identifier.
    pub process_id: ProcessId,
    /// Process priority (copied from input).
    pub priority: i64,
    /// Burst duration (copied from input).
    pub burst: i64,
    /// Arrival time (copied from input).
    pub arrival: i64,
    /// Time spent eligible but not running.
    pub wait: i64,
    /// Time from arrival to completion.
    pub turnaround: i64,
    /// Completion (exit) time.
    pub completion: i64,
}

impl ScheduleRow {
    /// Derives the row of a process that completed at `completion`.
    pub fn completed(process: &Process, completion: i64) -> Self {
        let turnaround = completion - process.arrival;
        Self {
            process_id: process.id,
            priority: process.priority,
            burst: process.burst,
            arrival: process.arrival,
            wait: turnaround - process.burst,
            turnaround,
            completion,
        }
    }
}

/// Run-level averages and throughput.
///
/// Fields are `NaN` when the run had no processes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Mean wait time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Completed processes per time unit, measured at the last completion.
    pub throughput: f64,
}

impl RunSummary {
    /// Summary of a run with no processes.
    pub fn undefined() -> Self {
        Self {
            average_wait: f64::NAN,
            average_turnaround: f64::NAN,
            throughput: f64::NAN,
        }
    }

    /// Whether all fields hold defined values.
    pub fn is_defined(&self) -> bool {
        !(self.average_wait.is_nan() || self.average_turnaround.is_nan() || self.throughput.is_nan())
    }
}

/// Complete result of one scheduler invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Title of the run (usually the algorithm name).
    pub title: String,
    /// Execution spans in start order.
    pub timeline: Timeline,
    /// One row per process (order depends on the algorithm).
    pub rows: Vec<ScheduleRow>,
    /// Averages and throughput.
    pub summary: RunSummary,
}

impl ScheduleOutcome {
    /// Finds the row of a process.
    pub fn row_for(&self, process_id: ProcessId) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.process_id == process_id)
    }

    /// Process ids in row order.
    pub fn row_order(&self) -> Vec<ProcessId> {
        self.rows.iter().map(|r| r.process_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_row() {
        let p = Process::new(2, 1, 3).with_priority(4);
        let row = ScheduleRow::completed(&p, 8);
        assert_eq!(row.process_id, 2);
        assert_eq!(row.priority, 4);
        assert_eq!(row.turnaround, 7);
        assert_eq!(row.wait, 4);
        assert_eq!(row.turnaround, row.wait + row.burst);
        assert_eq!(row.completion, row.arrival + row.wait + row.burst);
    }

    #[test]
    fn test_completed_without_waiting() {
        let p = Process::new(1, 0, 5);
        let row = ScheduleRow::completed(&p, 5);
        assert_eq!(row.wait, 0);
        assert_eq!(row.turnaround, 5);
    }

    #[test]
    fn test_undefined_summary() {
        let s = RunSummary::undefined();
        assert!(!s.is_defined());
        assert!(s.average_wait.is_nan());
        assert!(s.throughput.is_nan());
    }

    #[test]
    fn test_outcome_queries() {
        let outcome = ScheduleOutcome {
            title: "t".into(),
            timeline: Timeline::new(),
            rows: vec![
                ScheduleRow::completed(&Process::new(3, 0, 2), 2),
                ScheduleRow::completed(&Process::new(1, 0, 4), 6),
            ],
            summary: RunSummary::undefined(),
        };
        assert_eq!(outcome.row_order(), vec![3, 1]);
        assert_eq!(outcome.row_for(1).unwrap().completion, 6);
        assert!(outcome.row_for(9).is_none());
    }
}
