// src/job/mode.rs

//! Rendering of an ordered command sequence.

use std::str::FromStr;

use crate::errors::Result;
use crate::job::Command;

/// Marker line at the top of every rendered script.
pub const BASH_HEADER: &str = "#!/usr/bin/env bash";

/// How the ordered commands are returned to the caller.
///
/// - `Json`: a JSON array of `{name, command}` records (default).
/// - `Bash`: an executable script, one command per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Json,
    Bash,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputMode::Json),
            "bash" | "script" => Ok(OutputMode::Bash),
            other => Err(format!(
                "invalid output mode: {other} (expected \"json\" or \"bash\")"
            )),
        }
    }
}

impl OutputMode {
    /// Lenient negotiation for request parameters: anything that is not a
    /// recognised script mode falls back to JSON.
    pub fn negotiate(requested: Option<&str>) -> Self {
        requested
            .and_then(|m| m.parse().ok())
            .unwrap_or_default()
    }

    pub fn content_type(self) -> &'static str {
        match self {
            OutputMode::Json => "application/json",
            OutputMode::Bash => "text/plain; charset=utf-8",
        }
    }

    pub fn render(self, commands: &[Command]) -> Result<String> {
        match self {
            OutputMode::Json => Ok(serde_json::to_string(commands)?),
            OutputMode::Bash => Ok(render_bash(commands)),
        }
    }
}

fn render_bash(commands: &[Command]) -> String {
    std::iter::once(BASH_HEADER)
        .chain(commands.iter().map(|c| c.command.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}
