//! `cpu-schedule` command-line entry point.
//!
//! ```text
//! cpu-schedule [--format text|json] [--only <alg>[,<alg>...]] <process-file>
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cpu_schedule::config::{OutputFormat, RunConfig};
use cpu_schedule::error::USAGE;
use cpu_schedule::loader::load_processes;
use cpu_schedule::render::{write_json, write_outcome};
use cpu_schedule::scheduler::run_all;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = match RunConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig) -> anyhow::Result<()> {
    let processes = load_processes(&config.input)
        .with_context(|| format!("cannot schedule `{}`", config.input.display()))?;
    info!(
        input = %config.input.display(),
        processes = processes.len(),
        algorithms = config.algorithms.len(),
        "starting simulation"
    );

    let outcomes = run_all(&config.algorithms, &processes);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                if let Err(err) = write_outcome(&mut out, outcome) {
                    warn!(title = %outcome.title, error = %err, "failed to write report");
                }
            }
        }
        OutputFormat::Json => {
            if let Err(err) = write_json(&mut out, &outcomes) {
                warn!(error = %err, "failed to write report");
            }
        }
    }
    if let Err(err) = out.flush() {
        warn!(error = %err, "failed to flush report");
    }
    Ok(())
}
