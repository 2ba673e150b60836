// src/dag/builder.rs

//! Translate a job's task list into a populated graph.

use std::collections::HashSet;

use tracing::debug;

use crate::dag::graph::{DirectedGraph, Vertex};
use crate::errors::{JobsortError, Result};
use crate::job::Task;

/// Graph operations the builder relies on.
///
/// [`DirectedGraph`] is the production implementation; tests substitute
/// graphs that fail on demand.
pub trait TaskGraph {
    fn add_vertex(&mut self, name: &str);
    fn vertex(&self, name: &str) -> Result<Vertex>;
    fn add_edge(&mut self, from: Option<&Vertex>, to: Option<&Vertex>) -> Result<()>;
}

impl TaskGraph for DirectedGraph {
    fn add_vertex(&mut self, name: &str) {
        DirectedGraph::add_vertex(self, name)
    }

    fn vertex(&self, name: &str) -> Result<Vertex> {
        DirectedGraph::vertex(self, name)
    }

    fn add_edge(&mut self, from: Option<&Vertex>, to: Option<&Vertex>) -> Result<()> {
        DirectedGraph::add_edge(self, from, to)
    }
}

/// Build a fresh [`DirectedGraph`] for `tasks`.
pub fn build_graph(tasks: &[Task]) -> Result<DirectedGraph> {
    let mut graph = DirectedGraph::new();
    populate_graph(tasks, &mut graph)?;
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph populated"
    );
    Ok(graph)
}

/// Register one vertex per task, then one edge per `requires` entry,
/// oriented task -> dependency.
///
/// On error the graph may already be partially populated and should be
/// discarded.
pub fn populate_graph<G: TaskGraph + ?Sized>(tasks: &[Task], graph: &mut G) -> Result<()> {
    ensure_unique_names(tasks)?;

    for task in tasks {
        graph.add_vertex(&task.name);
    }

    for task in tasks {
        for dep in &task.requires {
            let from = graph.vertex(&task.name)?;
            let to = graph.vertex(dep)?;
            graph.add_edge(Some(&from), Some(&to))?;
        }
    }

    Ok(())
}

fn ensure_unique_names(tasks: &[Task]) -> Result<()> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.name.as_str()) {
            return Err(JobsortError::DuplicateTask(task.name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Graph whose lookups and edge insertions fail with preset errors.
    #[derive(Default)]
    struct FailingGraph {
        vertex_err: Option<fn() -> JobsortError>,
        edge_err: Option<fn() -> JobsortError>,
        added: Vec<String>,
    }

    impl TaskGraph for FailingGraph {
        fn add_vertex(&mut self, name: &str) {
            self.added.push(name.to_string());
        }

        fn vertex(&self, name: &str) -> Result<Vertex> {
            match self.vertex_err {
                Some(err) => Err(err()),
                None => Ok(Vertex::new(name)),
            }
        }

        fn add_edge(&mut self, _from: Option<&Vertex>, _to: Option<&Vertex>) -> Result<()> {
            match self.edge_err {
                Some(err) => Err(err()),
                None => Ok(()),
            }
        }
    }

    fn task(name: &str, requires: &[&str]) -> Task {
        Task {
            name: name.to_string(),
            command: format!("echo {name}"),
            requires: requires.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn vertex_lookup_error_aborts_build() {
        let mut g = FailingGraph {
            vertex_err: Some(|| JobsortError::VertexNotFound("task2".into())),
            ..Default::default()
        };
        let tasks = [task("task2", &[]), task("task1", &["task2"])];

        let err = populate_graph(&tasks, &mut g).unwrap_err();
        assert!(matches!(err, JobsortError::VertexNotFound(_)));
    }

    #[test]
    fn edge_error_aborts_build() {
        let mut g = FailingGraph {
            edge_err: Some(|| JobsortError::VertexUndefined),
            ..Default::default()
        };
        let tasks = [task("task2", &[]), task("task1", &["task2"])];

        let err = populate_graph(&tasks, &mut g).unwrap_err();
        assert!(matches!(err, JobsortError::VertexUndefined));
    }

    #[test]
    fn tasks_without_requirements_never_touch_edges() {
        let mut g = FailingGraph {
            vertex_err: Some(|| JobsortError::VertexUndefined),
            edge_err: Some(|| JobsortError::VertexUndefined),
            ..Default::default()
        };
        let tasks = [task("a", &[]), task("b", &[])];

        populate_graph(&tasks, &mut g).unwrap();
        assert_eq!(g.added, vec!["a", "b"]);
    }

    #[test]
    fn builds_edges_from_task_to_dependency() {
        let tasks = [
            task("deploy", &["build", "test"]),
            task("test", &["build"]),
            task("build", &[]),
        ];
        let g = build_graph(&tasks).unwrap();

        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(
            g.neighbours_of("deploy").collect::<Vec<_>>(),
            vec!["build", "test"]
        );
        assert_eq!(g.neighbours_of("build").count(), 0);
        assert!(
            g.edges()
                .any(|e| e.from == Vertex::new("test") && e.to == Vertex::new("build"))
        );
    }

    #[test]
    fn unknown_dependency_is_named() {
        let tasks = [task("t1", &["nope"])];
        match build_graph(&tasks) {
            Err(JobsortError::VertexNotFound(name)) => assert_eq!(name, "nope"),
            other => panic!("expected VertexNotFound, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_task_names_are_rejected() {
        let tasks = [task("t1", &[]), task("t1", &[])];
        match build_graph(&tasks) {
            Err(JobsortError::DuplicateTask(name)) => assert_eq!(name, "t1"),
            other => panic!("expected DuplicateTask, got {other:?}"),
        }
    }

    #[test]
    fn repeated_requirement_collapses_to_one_edge() {
        let tasks = [task("a", &["b", "b"]), task("b", &[])];
        let g = build_graph(&tasks).unwrap();
        assert_eq!(g.edge_count(), 1);
    }
}
