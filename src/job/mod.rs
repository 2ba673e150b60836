// src/job/mod.rs

//! Job model and the ordering pipeline.
//!
//! A [`Job`] is a collection of tasks, where each [`Task`] has a name and a
//! shell command. Tasks may require other tasks to run beforehand;
//! [`order_job`] returns the commands in an order that honours that.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::dag::build_graph;
use crate::errors::{JobsortError, Result};

pub mod mode;
pub mod order;

pub use mode::OutputMode;
pub use order::{command_order, materialize_order};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub command: String,
    /// Names of tasks that must run before this one. Absent and `null`
    /// both mean none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub requires: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of the ordered output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub command: String,
}

impl Job {
    /// Decode a job from a JSON request body.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| JobsortError::InvalidJob(e.to_string()))
    }
}

/// Build the dependency graph for `job`, sort it, and map the order back
/// onto the job's commands.
pub fn order_job(job: &Job) -> Result<Vec<Command>> {
    let graph = build_graph(&job.tasks)?;
    info!(tasks = job.tasks.len(), "graph has been constructed successfully");

    let sorted = graph.topological_sort()?;
    info!("topological sort has passed");

    let commands = command_order(&sorted, &job.tasks)?;
    info!(commands = commands.len(), "command order has been generated");

    Ok(commands)
}
