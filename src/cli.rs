// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::job::OutputMode;

/// Command-line arguments for `jobsort`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "jobsort",
    version,
    about = "Order job tasks by their dependencies and return the commands to run.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Jobsort.toml` is used when present, otherwise defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Address to listen on; overrides `[server].host` and `JOBSORT_HOST`.
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on; overrides `[server].port` and `JOBSORT_PORT`.
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `JOBSORT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Order a job file (JSON) and print the result instead of serving.
    ///
    /// Use `-` to read the job from stdin.
    #[arg(long, value_name = "PATH")]
    pub job: Option<String>,

    /// Output format for `--job`: `json` or `bash`.
    #[arg(long, value_name = "MODE", default_value = "json")]
    pub mode: OutputMode,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
