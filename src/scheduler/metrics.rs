//! Shared per-run metrics accumulation.
//!
//! Every scheduler reports each completion here; the aggregator derives
//! the process's row and keeps the running totals needed for the summary.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average wait | total wait / n |
//! | Average turnaround | total turnaround / n |
//! | Throughput | n / last completion time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::{Process, RunSummary, ScheduleRow};

/// Accumulates rows and totals for one scheduler invocation.
///
/// Totals are kept as `i128`: a single wait fits in `i64`, but FCFS can
/// make many processes wait behind one late arrival.
#[derive(Debug, Clone, Default)]
pub struct MetricsAggregator {
    rows: Vec<ScheduleRow>,
    total_wait: i128,
    total_turnaround: i128,
    last_completion: i64,
}

impl MetricsAggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an aggregator sized for `n` processes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            rows: Vec::with_capacity(n),
            ..Self::default()
        }
    }

    /// Records that `process` completed at `completion`.
    ///
    /// Rows keep the order in which completions are recorded.
    pub fn complete(&mut self, process: &Process, completion: i64) -> &ScheduleRow {
        let row = ScheduleRow::completed(process, completion);
        self.total_wait += i128::from(row.wait);
        self.total_turnaround += i128::from(row.turnaround);
        self.last_completion = self.last_completion.max(completion);
        self.rows.push(row);
        &self.rows[self.rows.len() - 1]
    }

    /// Computes the run summary from the current totals.
    ///
    /// All fields are `NaN` when nothing completed. Throughput is `NaN`
    /// when the last completion is at t=0.
    pub fn summary(&self) -> RunSummary {
        if self.rows.is_empty() {
            return RunSummary::undefined();
        }

        let count = self.rows.len() as f64;
        let throughput = if self.last_completion > 0 {
            count / self.last_completion as f64
        } else {
            f64::NAN
        };

        RunSummary {
            average_wait: self.total_wait as f64 / count,
            average_turnaround: self.total_turnaround as f64 / count,
            throughput,
        }
    }

    /// Consumes the aggregator, returning the rows and the summary.
    pub fn finish(self) -> (Vec<ScheduleRow>, RunSummary) {
        let summary = self.summary();
        (self.rows, summary)
    }
}
