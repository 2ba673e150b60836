// src/job/order.rs

use std::collections::HashMap;

use crate::errors::{JobsortError, Result};
use crate::job::{Command, Task};

/// Write each task's command into `slots` at the position its name holds in
/// `sorted`.
///
/// Fails before writing anything when the slot count differs from the
/// sorted-name count. Slots that no task maps to keep their previous value.
pub fn materialize_order(sorted: &[String], tasks: &[Task], slots: &mut [Command]) -> Result<()> {
    if sorted.len() != slots.len() {
        return Err(JobsortError::CommandBufferSizeMismatch {
            sorted: sorted.len(),
            slots: slots.len(),
        });
    }

    let positions: HashMap<&str, usize> = sorted
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    for task in tasks {
        let Some(&pos) = positions.get(task.name.as_str()) else {
            return Err(JobsortError::RequestTaskNotFound(task.name.clone()));
        };
        slots[pos] = Command {
            name: task.name.clone(),
            command: task.command.clone(),
        };
    }

    Ok(())
}

/// Allocating variant of [`materialize_order`].
pub fn command_order(sorted: &[String], tasks: &[Task]) -> Result<Vec<Command>> {
    let mut commands = vec![Command::default(); sorted.len()];
    materialize_order(sorted, tasks, &mut commands)?;
    Ok(commands)
}
