//! Execution timeline (Gantt) model.
//!
//! A timeline is the ordered list of contiguous execution spans produced
//! by one scheduler run. Preemptive disciplines emit several spans for the
//! same process.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// One contiguous execution span of a process.
///
/// Covers `[start, stop)` with `stop >= start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Process that held the CPU.
    pub process_id: ProcessId,
    /// Span start time.
    pub start: i64,
    /// Span stop time.
    pub stop: i64,
}

impl TimelineEntry {
    /// Creates a new span.
    pub fn new(process_id: ProcessId, start: i64, stop: i64) -> Self {
        debug_assert!(stop >= start, "timeline span stops before it starts");
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Span length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Append-only sequence of execution spans in nondecreasing start order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a span.
    pub fn push(&mut self, entry: TimelineEntry) {
        debug_assert!(
            self.entries.last().map_or(true, |last| last.start <= entry.start),
            "timeline spans must be appended in start order"
        );
        self.entries.push(entry);
    }

    /// Appends a span for `process_id` covering `[start, stop)`.
    pub fn record(&mut self, process_id: ProcessId, start: i64, stop: i64) {
        self.push(TimelineEntry::new(process_id, start, stop));
    }

    /// All spans in order.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Number of spans.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no span was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest stop time (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.stop).max().unwrap_or(0)
    }

    /// Total CPU time across all spans.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(TimelineEntry::duration).sum()
    }

    /// Spans belonging to one process.
    pub fn entries_for_process(&self, process_id: ProcessId) -> Vec<&TimelineEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_id == process_id)
            .collect()
    }

    /// Completion time of a process (latest stop of its spans).
    pub fn completion_time(&self, process_id: ProcessId) -> Option<i64> {
        self.entries_for_process(process_id)
            .iter()
            .map(|e| e.stop)
            .max()
    }

    /// CPU utilization over the makespan. `None` for an empty timeline.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Iterates over the spans.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
