//! Error types for loading input and parsing invocations.
//!
//! The scheduling core itself is total over valid input and has no error
//! type. Both error types here are fatal: nothing is scheduled once either
//! is raised.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure to load a process list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be read.
    #[error("failed to read process file `{}`", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A record had the wrong number of fields.
    #[error("line {line}: expected 3 or 4 fields (id, burst, arrival[, priority]), found {found}")]
    FieldCount {
        /// 1-based line number.
        line: usize,
        /// Number of fields found.
        found: usize,
    },

    /// A field was not a base-10 integer.
    #[error("line {line}: {field} `{value}` is not an integer")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Field name.
        field: &'static str,
        /// Offending text.
        value: String,
        /// Underlying parse error.
        source: ParseIntError,
    },

    /// The records parsed but describe an invalid process set.
    #[error("invalid process list: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

/// Wrong command-line invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// No input file was given.
    #[error("missing process file")]
    MissingInput,

    /// More than one positional argument.
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    /// Unrecognized flag.
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),

    /// A flag that takes a value was last on the command line.
    #[error("flag `{0}` requires a value")]
    MissingValue(String),

    /// Unsupported `--format` value.
    #[error("unknown output format `{0}` (expected `text` or `json`)")]
    UnknownFormat(String),

    /// Unsupported algorithm name.
    #[error("unknown algorithm `{0}` (expected `fcfs`, `sjf`, `priority` or `rr`)")]
    UnknownAlgorithm(String),
}

/// Command-line synopsis printed alongside argument errors.
pub const USAGE: &str =
    "usage: cpu-schedule [--format text|json] [--only <alg>[,<alg>...]] <process-file>";

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_field_count_message() {
        let err = LoadError::FieldCount { line: 3, found: 2 };
        assert_eq!(
            err.to_string(),
            "line 3: expected 3 or 4 fields (id, burst, arrival[, priority]), found 2"
        );
    }

    #[test]
    fn test_invalid_number_has_source() {
        let source = "x".parse::<i64>().unwrap_err();
        let err = LoadError::InvalidNumber {
            line: 1,
            field: "burst",
            value: "x".into(),
            source,
        };
        assert_eq!(err.to_string(), "line 1: burst `x` is not an integer");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_joins_messages() {
        let err = LoadError::Invalid(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: 1"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "Process 2 has burst 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid process list: Duplicate process ID: 1; Process 2 has burst 0"
        );
    }

    #[test]
    fn test_argument_error_messages() {
        assert_eq!(ArgumentError::MissingInput.to_string(), "missing process file");
        assert!(ArgumentError::UnknownFlag("--x".into()).to_string().contains("--x"));
    }
}
