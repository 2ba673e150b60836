// src/dag/sort.rs

//! Cycle-aware topological sort over a [`DirectedGraph`].

use std::collections::HashMap;

use tracing::debug;

use crate::dag::graph::DirectedGraph;
use crate::errors::{JobsortError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current DFS path.
    InProgress,
    /// Finished and already emitted.
    Visited,
}

/// One level of the explicit DFS stack.
struct Frame<'a> {
    name: &'a str,
    neighbours: Vec<&'a str>,
    cursor: usize,
}

impl<'a> Frame<'a> {
    fn enter(graph: &'a DirectedGraph, name: &'a str) -> Self {
        Self {
            name,
            neighbours: graph.neighbours_of(name).collect(),
            cursor: 0,
        }
    }
}

impl DirectedGraph {
    /// Order all vertices so that every dependency precedes its dependents.
    ///
    /// Depth-first with post-order emission, driven by an explicit stack so
    /// long dependency chains cannot exhaust the call stack. Returns
    /// [`JobsortError::GraphCycle`] naming the vertex that closed the first
    /// back edge found; no partial order is returned.
    pub fn topological_sort(&self) -> Result<Vec<String>> {
        let mut sorted = Vec::with_capacity(self.vertex_count());
        let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(self.vertex_count());
        let mut stack: Vec<Frame<'_>> = Vec::new();

        for root in self.vertices() {
            if marks.contains_key(root) {
                continue;
            }

            marks.insert(root, Mark::InProgress);
            stack.push(Frame::enter(self, root));

            while let Some(frame) = stack.last_mut() {
                if let Some(&next) = frame.neighbours.get(frame.cursor) {
                    frame.cursor += 1;
                    match marks.get(next) {
                        Some(Mark::InProgress) => {
                            debug!(vertex = %next, "back edge found during topological sort");
                            return Err(JobsortError::GraphCycle(next.to_string()));
                        }
                        Some(Mark::Visited) => {}
                        None => {
                            marks.insert(next, Mark::InProgress);
                            stack.push(Frame::enter(self, next));
                        }
                    }
                } else if let Some(done) = stack.pop() {
                    marks.insert(done.name, Mark::Visited);
                    sorted.push(done.name.to_string());
                }
            }
        }

        Ok(sorted)
    }
}
