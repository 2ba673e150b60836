// src/dag/graph.rs

use std::collections::BTreeMap;

use crate::errors::{JobsortError, Result};

/// A graph node, identified solely by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    pub name: String,
}

impl Vertex {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Directed edge: `from` depends on `to`, so `to` must be scheduled first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
}

/// Edges are keyed by the ordered pair of endpoint names.
type EdgeKey = (String, String);

/// Write-once, read-once dependency graph built for a single job.
///
/// Both maps are ordered, which gives the sorter a deterministic visiting
/// order for roots and for each vertex's neighbours.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    vertices: BTreeMap<String, Vertex>,
    edges: BTreeMap<EdgeKey, Edge>,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex, replacing any existing vertex of the same name.
    pub fn add_vertex(&mut self, name: &str) {
        self.vertices.insert(name.to_string(), Vertex::new(name));
    }

    /// Exact lookup by name.
    pub fn vertex(&self, name: &str) -> Result<Vertex> {
        self.vertices
            .get(name)
            .cloned()
            .ok_or_else(|| JobsortError::VertexNotFound(name.to_string()))
    }

    /// Connect `from` to `to`.
    ///
    /// Both endpoints must be present and registered. Adding the same pair
    /// again overwrites the stored edge.
    pub fn add_edge(&mut self, from: Option<&Vertex>, to: Option<&Vertex>) -> Result<()> {
        let (Some(from), Some(to)) = (from, to) else {
            return Err(JobsortError::VertexUndefined);
        };

        self.validate_vertex_existence(from)?;
        self.validate_vertex_existence(to)?;

        self.edges.insert(
            (from.name.clone(), to.name.clone()),
            Edge {
                from: from.clone(),
                to: to.clone(),
            },
        );
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All vertex names, in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(|s| s.as_str())
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Names this vertex points at (its dependencies), in ascending order.
    pub fn neighbours_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .range((name.to_string(), String::new())..)
            .take_while(move |((from, _), _)| from == name)
            .map(|((_, to), _)| to.as_str())
    }

    fn validate_vertex_existence(&self, v: &Vertex) -> Result<()> {
        if !self.vertices.contains_key(&v.name) {
            return Err(JobsortError::VertexNotFound(v.name.clone()));
        }
        Ok(())
    }
}
