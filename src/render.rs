//! Text and JSON presentation of scheduling outcomes.
//!
//! The text report for one outcome has four parts:
//!
//! ```text
//! ----------------------------------------------
//!             First-come, first-serve
//! ----------------------------------------------
//! Gantt schedule
//! |   1   |   2   |   3   |
//! 0       5       8       10
//!
//! CPU utilization: 100.00%
//!
//! Schedule table
//! +----+----------+-------+---------+---------+------------+------------+
//! | ID | PRIORITY | BURST | ARRIVAL |  WAIT   | TURNAROUND |    EXIT    |
//! ...
//! ```
//!
//! Rendering never affects scheduling; write errors are returned to the
//! caller, which decides whether they are fatal.

use std::io::{self, Write};

use crate::models::{RunSummary, ScheduleOutcome, ScheduleRow, Timeline};

const GANTT_CELL_WIDTH: usize = 8;
const TABLE_HEADER: [&str; 7] = ["ID", "Priority", "Burst", "Arrival", "Wait", "Turnaround", "Exit"];

/// Writes the full text report of one outcome.
pub fn write_outcome<W: Write>(w: &mut W, outcome: &ScheduleOutcome) -> io::Result<()> {
    write_title(w, &outcome.title)?;
    write_gantt(w, &outcome.timeline)?;
    write_utilization(w, &outcome.timeline)?;
    write_schedule(w, &outcome.rows, &outcome.summary)
}

/// Writes every outcome as one pretty-printed JSON array.
pub fn write_json<W: Write>(w: &mut W, outcomes: &[ScheduleOutcome]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, outcomes)?;
    writeln!(w)
}

/// Writes the title banner.
pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let width = title.chars().count();
    let rule = "-".repeat(width * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(width / 2))?;
    writeln!(w, "{rule}")
}

/// Writes the Gantt bar: one labelled cell per span, then the span start
/// times and the final stop time.
pub fn write_gantt<W: Write>(w: &mut W, timeline: &Timeline) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;

    let mut bar = String::from("|");
    for entry in timeline {
        let pid = entry.process_id.to_string();
        let padding = " ".repeat(GANTT_CELL_WIDTH.saturating_sub(pid.len()) / 2);
        bar.push_str(&format!("{padding}{pid}{padding}|"));
    }
    writeln!(w, "{bar}")?;

    let mut ticks = String::new();
    for entry in timeline {
        ticks.push_str(&format!("{:<width$}", entry.start, width = GANTT_CELL_WIDTH));
    }
    if let Some(last) = timeline.entries().last() {
        ticks.push_str(&last.stop.to_string());
    }
    writeln!(w, "{}", ticks.trim_end())?;
    writeln!(w)
}

/// Writes the share of the timeline during which the CPU was busy.
pub fn write_utilization<W: Write>(w: &mut W, timeline: &Timeline) -> io::Result<()> {
    match timeline.utilization() {
        Some(share) => writeln!(w, "CPU utilization: {:.2}%", share * 100.0)?,
        None => writeln!(w, "CPU utilization: n/a")?,
    }
    writeln!(w)
}

/// Writes the schedule table with its averages and throughput footer.
pub fn write_schedule<W: Write>(w: &mut W, rows: &[ScheduleRow], summary: &RunSummary) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.process_id.to_string(),
                r.priority.to_string(),
                r.burst.to_string(),
                r.arrival.to_string(),
                r.wait.to_string(),
                r.turnaround.to_string(),
                r.completion.to_string(),
            ]
        })
        .collect();

    let blank = || vec![String::new(); 4];
    let mut labels = blank();
    labels.extend(["Average".to_string(), "Average".to_string(), "Throughput".to_string()]);
    let mut values = blank();
    values.extend([
        format!("{:.2}", summary.average_wait),
        format!("{:.2}", summary.average_turnaround),
        format!("{:.2}/t", summary.throughput),
    ]);

    let table = Table {
        header: TABLE_HEADER.iter().map(|h| h.to_uppercase()).collect(),
        body,
        footer: vec![labels, values],
    };
    table.render(w)
}

/// Minimal bordered table: centered header and footer, right-aligned body.
struct Table {
    header: Vec<String>,
    body: Vec<Vec<String>>,
    footer: Vec<Vec<String>>,
}

impl Table {
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.len()).collect();
        for line in self.body.iter().chain(&self.footer) {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.len());
            }
        }
        widths
    }

    fn render<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let widths = self.widths();
        let border = widths
            .iter()
            .map(|width| "-".repeat(width + 2))
            .collect::<Vec<_>>()
            .join("+");
        let border = format!("+{border}+");

        writeln!(w, "{border}")?;
        write_line(w, &self.header, &widths, Align::Center)?;
        writeln!(w, "{border}")?;
        for line in &self.body {
            write_line(w, line, &widths, Align::Right)?;
        }
        writeln!(w, "{border}")?;
        for line in &self.footer {
            write_line(w, line, &widths, Align::Center)?;
        }
        writeln!(w, "{border}")
    }
}

#[derive(Clone, Copy)]
enum Align {
    Center,
    Right,
}

fn write_line<W: Write>(w: &mut W, cells: &[String], widths: &[usize], align: Align) -> io::Result<()> {
    let mut line = String::from("|");
    for (cell, &width) in cells.iter().zip(widths) {
        let padded = match align {
            Align::Center => format!("{cell:^width$}"),
            Align::Right => format!("{cell:>width$}"),
        };
        line.push_str(&format!(" {padded} |"));
    }
    writeln!(w, "{line}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{Fcfs, RoundRobin, Scheduler};

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 2),
        ]
    }

    fn render(outcome: &ScheduleOutcome) -> String {
        let mut buf = Vec::new();
        write_outcome(&mut buf, outcome).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_title_banner() {
        let mut buf = Vec::new();
        write_title(&mut buf, "abcd").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "--------\n   abcd\n--------\n");
    }

    #[test]
    fn test_gantt_bar() {
        let outcome = Fcfs.schedule("FCFS", &sample());
        let mut buf = Vec::new();
        write_gantt(&mut buf, &outcome.timeline).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Gantt schedule");
        assert_eq!(lines[1], "|   1   |   2   |   3   |");
        assert_eq!(lines[2], "0       5       8       10");
    }

    #[test]
    fn test_gantt_empty() {
        let mut buf = Vec::new();
        write_gantt(&mut buf, &Timeline::new()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Gantt schedule\n|\n\n\n");
    }

    #[test]
    fn test_utilization_line() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 6, 2)];
        let text = render(&Fcfs.schedule("FCFS", &processes));
        assert!(text.contains("CPU utilization: 50.00%\n"));

        let text = render(&Fcfs.schedule("FCFS", &sample()));
        assert!(text.contains("CPU utilization: 100.00%\n"));

        let mut buf = Vec::new();
        write_utilization(&mut buf, &Timeline::new()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "CPU utilization: n/a\n\n");
    }

    #[test]
    fn test_table_contents() {
        let text = render(&Fcfs.schedule("FCFS", &sample()));
        assert!(text.contains("Schedule table"));
        assert!(text.contains("| ID | PRIORITY | BURST | ARRIVAL |"));
        assert!(text.contains("TURNAROUND"));
        assert!(text.contains("3.33"));
        assert!(text.contains("6.67"));
        assert!(text.contains("0.30/t"));
    }

    #[test]
    fn test_table_lines_have_equal_width() {
        let text = render(&RoundRobin.schedule("RR", &sample()));
        let table: Vec<&str> = text
            .lines()
            .skip_while(|l| *l != "Schedule table")
            .skip(1)
            .collect();
        let width = table[0].len();
        assert!(table.iter().all(|l| l.len() == width));
    }

    #[test]
    fn test_empty_outcome_renders_nan() {
        let text = render(&Fcfs.schedule("Empty", &[]));
        assert!(text.contains("NaN"));
    }

    #[test]
    fn test_json_output() {
        let outcomes = vec![Fcfs.schedule("FCFS", &sample())];
        let mut buf = Vec::new();
        write_json(&mut buf, &outcomes).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["title"], "FCFS");
        assert_eq!(value[0]["rows"][2]["completion"], 10);
        assert_eq!(value[0]["timeline"][1]["start"], 5);
    }
}
