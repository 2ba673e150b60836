// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod job;
pub mod logging;
pub mod server;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_and_validate};
use crate::job::{Job, OutputMode, order_job};
use crate::server::AppState;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file, `JOBSORT_*` env, CLI overrides)
/// - either a one-shot ordering of `--job` to stdout
/// - or the HTTP server
pub async fn run(args: CliArgs) -> Result<()> {
    let mut cfg = load_and_validate(args.config.as_deref().map(Path::new))?;
    apply_cli_overrides(&mut cfg, &args);

    if let Some(ref path) = args.job {
        let out = order_job_file(path, args.mode)?;
        println!("{out}");
        return Ok(());
    }

    info!(
        environment = %cfg.service.environment,
        region = %cfg.service.region,
        image = %format!("{}:{}", cfg.service.image_name, cfg.service.image_tag),
        "starting jobsort"
    );

    let state = AppState {
        service: cfg.service.clone(),
    };
    server::serve(&cfg.server, state).await
}

fn apply_cli_overrides(cfg: &mut ConfigFile, args: &CliArgs) {
    if let Some(ref host) = args.host {
        cfg.server.host = host.clone();
    }
    if let Some(port) = args.port {
        cfg.server.port = port;
    }
}

/// Read a job from `path` (`-` for stdin), order it, and render it.
pub fn order_job_file(path: &str, mode: OutputMode) -> Result<String> {
    let bytes = if path == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("reading job from stdin")?;
        buf
    } else {
        std::fs::read(path).with_context(|| format!("reading job file {path:?}"))?
    };

    let job = Job::from_json(&bytes)?;
    let commands = order_job(&job)?;
    Ok(mode.render(&commands)?)
}
