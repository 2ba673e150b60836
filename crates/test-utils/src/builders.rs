#![allow(dead_code)]

use jobsort::job::{Job, Task};

/// Builder for `Job` to simplify test setup.
pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    pub fn new() -> Self {
        Self { job: Job::default() }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.job.tasks.push(task);
        self
    }

    /// Linear chain `prefix_0 <- prefix_1 <- ... <- prefix_{len-1}`, where each
    /// task requires the one before it.
    pub fn with_chain(mut self, prefix: &str, len: usize) -> Self {
        for i in 0..len {
            let mut task = TaskBuilder::new(&format!("{prefix}_{i}"));
            if i > 0 {
                task = task.requires(&format!("{prefix}_{}", i - 1));
            }
            self.job.tasks.push(task.build());
        }
        self
    }

    pub fn build(self) -> Job {
        self.job
    }

    /// Request body as sent to `POST /job`.
    pub fn to_json(self) -> String {
        serde_json::to_string(&self.job).expect("job serialises")
    }
}

impl Default for JobBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Task`. The command defaults to `echo <name>`.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            task: Task {
                name: name.to_string(),
                command: format!("echo {name}"),
                requires: vec![],
            },
        }
    }

    pub fn command(mut self, cmd: &str) -> Self {
        self.task.command = cmd.to_string();
        self
    }

    pub fn requires(mut self, dep: &str) -> Self {
        self.task.requires.push(dep.to_string());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}
