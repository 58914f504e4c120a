//! Process record loading.
//!
//! Reads comma-separated records of the form
//!
//! ```text
//! id,burst,arrival[,priority]
//! ```
//!
//! One record per line, base-10 integers, priority defaulting to 0. Blank
//! lines are skipped; surrounding whitespace and double quotes around a
//! field are tolerated. Records with 3 and 4 fields may be mixed.
//!
//! Every parsed set is validated before it is returned, so callers never
//! hand a malformed set to a scheduler.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;
use crate::models::Process;
use crate::validation::validate_processes;

/// Loads and validates processes from a file.
pub fn load_processes(path: impl AsRef<Path>) -> Result<Vec<Process>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let processes = parse_processes(&text)?;
    debug!(path = %path.display(), count = processes.len(), "loaded processes");
    Ok(processes)
}

/// Loads and validates processes from any reader.
pub fn read_processes<R: Read>(mut reader: R) -> Result<Vec<Process>, LoadError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Io {
            path: "<reader>".into(),
            source,
        })?;
    parse_processes(&text)
}

/// Parses and validates processes from record text.
///
/// # Example
/// ```
/// use cpu_schedule::loader::parse_processes;
///
/// let processes = parse_processes("1,5,0\n2,3,1,4\n").unwrap();
/// assert_eq!(processes[0].burst, 5);
/// assert_eq!(processes[1].priority, 4);
/// ```
pub fn parse_processes(text: &str) -> Result<Vec<Process>, LoadError> {
    let mut processes = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        processes.push(parse_record(raw, line)?);
    }

    validate_processes(&processes).map_err(LoadError::Invalid)?;
    Ok(processes)
}

fn parse_record(raw: &str, line: usize) -> Result<Process, LoadError> {
    let fields: Vec<&str> = raw.split(',').collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(LoadError::FieldCount {
            line,
            found: fields.len(),
        });
    }

    let id = parse_field(fields[0], "id", line)?;
    let burst = parse_field(fields[1], "burst", line)?;
    let arrival = parse_field(fields[2], "arrival", line)?;
    let priority = match fields.get(3) {
        Some(field) => parse_field(field, "priority", line)?,
        None => 0,
    };

    Ok(Process::new(id, arrival, burst).with_priority(priority))
}

fn parse_field(raw: &str, field: &'static str, line: usize) -> Result<i64, LoadError> {
    let value = raw.trim().trim_matches('"').trim();
    value.parse::<i64>().map_err(|source| LoadError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
        source,
    })
}
