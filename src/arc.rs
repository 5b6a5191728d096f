//! A module for working with arcs.

use std::collections::HashMap;

use crate::vertex::VertexId;

/// A stable handle to an arc, assigned densely in insertion order by the
/// owning graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArcId(pub(crate) u32);

impl ArcId {
    /// Returns the handle's position in the graph's insertion order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An arc connecting two vertices of the same graph.
///
/// In a directed graph the `source`/`target` pair is ordered; in an
/// undirected graph the pair records the orientation the arc was first
/// inserted with, but adjacency treats it symmetrically.
#[derive(Clone, Debug)]
pub struct Arc {
    source: VertexId,
    target: VertexId,
    weight: i64,
    annotations: HashMap<String, String>,
}

impl Arc {
    pub(crate) fn new(source: VertexId, target: VertexId) -> Self {
        Self {
            source,
            target,
            weight: 0,
            annotations: HashMap::new(),
        }
    }

    /// Returns the vertex the arc leaves from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the vertex the arc points at.
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Returns the arc weight. Weights absent from the input default to 0.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Replaces the arc weight.
    pub fn set_weight(&mut self, weight: i64) {
        self.weight = weight;
    }

    /// Swaps source and target. The owning graph is responsible for keeping
    /// its adjacency indexes in step.
    pub(crate) fn reverse(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    /// Looks up an annotation by key.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    /// Sets an annotation, overwriting any previous value under the same key.
    pub fn set_annotation(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.annotations.insert(key.into(), value.into());
    }

    /// Removes an annotation, returning the value it held.
    pub fn remove_annotation(&mut self, key: &str) -> Option<String> {
        self.annotations.remove(key)
    }
}
