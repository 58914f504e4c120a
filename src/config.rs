//! Run configuration.
//!
//! Describes one invocation of the simulator: which file to load, which
//! disciplines to run, and how to present the results.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArgumentError;
use crate::scheduler::Algorithm;

/// Report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Title banner, Gantt bar and table per discipline.
    #[default]
    Text,
    /// All outcomes as one JSON array.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ArgumentError::UnknownFormat(s.to_string())),
        }
    }
}

/// Configuration of one simulator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Process record file.
    pub input: PathBuf,
    /// Report format.
    pub format: OutputFormat,
    /// Disciplines to run, in report order.
    pub algorithms: Vec<Algorithm>,
}

impl RunConfig {
    /// Creates a configuration running every discipline as text.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: OutputFormat::Text,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }

    /// Sets the report format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Restricts the run to the given disciplines.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Parses command-line arguments (without the program name).
    ///
    /// Accepts `[--format text|json] [--only <alg>[,<alg>...]] <file>`.
    /// `--flag=value` is accepted as well as `--flag value`.
    ///
    /// # Example
    /// ```
    /// use cpu_schedule::config::{OutputFormat, RunConfig};
    /// use cpu_schedule::scheduler::Algorithm;
    ///
    /// let config = RunConfig::from_args(["--only", "rr", "procs.csv"]).unwrap();
    /// assert_eq!(config.algorithms, vec![Algorithm::RoundRobin]);
    /// assert_eq!(config.format, OutputFormat::Text);
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut input: Option<String> = None;
        let mut format = OutputFormat::Text;
        let mut algorithms: Option<Vec<Algorithm>> = None;

        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(arg) = args.next() {
            if let Some(flag) = arg.strip_prefix("--") {
                let (name, inline) = match flag.split_once('=') {
                    Some((name, value)) => (name, Some(value.to_string())),
                    None => (flag, None),
                };
                let mut value = || {
                    inline
                        .clone()
                        .or_else(|| args.next())
                        .ok_or_else(|| ArgumentError::MissingValue(format!("--{name}")))
                };
                match name {
                    "format" => format = value()?.parse::<OutputFormat>()?,
                    "only" => algorithms = Some(parse_algorithms(&value()?)?),
                    _ => return Err(ArgumentError::UnknownFlag(format!("--{name}"))),
                }
            } else if input.is_none() {
                input = Some(arg);
            } else {
                return Err(ArgumentError::UnexpectedArgument(arg));
            }
        }

        let input = input.ok_or(ArgumentError::MissingInput)?;
        let mut config = RunConfig::new(input).with_format(format);
        if let Some(algorithms) = algorithms {
            config = config.with_algorithms(algorithms);
        }
        Ok(config)
    }
}

fn parse_algorithms(list: &str) -> Result<Vec<Algorithm>, ArgumentError> {
    let mut algorithms = Vec::new();
    for name in list.split(',').filter(|s| !s.trim().is_empty()) {
        let alg: Algorithm = name.parse()?;
        if !algorithms.contains(&alg) {
            algorithms.push(alg);
        }
    }
    if algorithms.is_empty() {
        return Err(ArgumentError::UnknownAlgorithm(list.to_string()));
    }
    Ok(algorithms)
}
