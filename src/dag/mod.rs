// src/dag/mod.rs

//! Dependency graph and ordering.
//!
//! - [`graph`] holds the vertex/edge store for a single job.
//! - [`sort`] implements the cycle-aware topological sort.
//! - [`builder`] turns a task list into a populated graph.

pub mod builder;
pub mod graph;
pub mod sort;

pub use builder::{TaskGraph, build_graph, populate_graph};
pub use graph::{DirectedGraph, Edge, Vertex};
