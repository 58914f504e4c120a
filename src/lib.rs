//! CPU scheduling simulator.
//!
//! Replays a fixed set of processes through classic uniprocessor scheduling
//! disciplines and reports, for each one, the execution timeline (Gantt
//! chart), per-process wait and turnaround, and run-wide averages and
//! throughput.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Timeline`, `TimelineEntry`,
//!   `ScheduleRow`, `RunSummary`, `ScheduleOutcome`
//! - **`scheduler`**: FCFS, SJF, Priority and Round-Robin disciplines
//! - **`dispatching`**: Rule-based selection used by SJF and Priority
//! - **`validation`**: Input integrity checks (duplicate IDs, arrivals, bursts)
//! - **`loader`**: Comma-separated process record parsing
//! - **`render`**: Text (Gantt bar and table) and JSON reports
//! - **`config`**: Command-line run configuration
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{run_all, Algorithm};
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 2),
//! ];
//! let outcomes = run_all(&Algorithm::ALL, &processes);
//! assert_eq!(outcomes.len(), 4);
//! assert_eq!(outcomes[0].timeline.makespan(), 10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod loader;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod validation;
pub mod workload;
