//! A module for working with undirected graphs.

use std::collections::HashMap;

use crate::arc::{Arc, ArcId};
use crate::vertex::{Vertex, VertexId};

/// An undirected graph, owning its vertices and arcs.
///
/// An arc is stored once per unordered pair but is reachable through
/// [`adjacent`](Ungraph::adjacent) from either endpoint. Inserting a pair
/// that already exists in either orientation returns the existing arc, so
/// duplicate input lines cannot inflate [`arc_count`](Ungraph::arc_count).
/// The store is append-only: the analysis workflow never removes entities
/// from the undirected view.
#[derive(Clone, Debug, Default)]
pub struct Ungraph {
    vertices: Vec<Vertex>,
    ids: HashMap<String, VertexId>,
    arcs: Vec<Arc>,
    /// Neighbors per vertex slot, symmetric and in arc insertion order.
    adj: Vec<Vec<VertexId>>,
    /// Unordered endpoint pair (normalized to `(min, max)`) to arc lookup.
    pairs: HashMap<(VertexId, VertexId), ArcId>,
}

impl Ungraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a vertex and returns its handle. If the key is already
    /// registered the existing handle is returned.
    pub fn insert_vertex(&mut self, key: impl Into<String>) -> VertexId {
        let key = key.into();
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }

        let id = VertexId(self.vertices.len() as u32);
        self.ids.insert(key.clone(), id);
        self.vertices.push(Vertex::new(key));
        self.adj.push(Vec::new());

        id
    }

    /// Inserts an arc between `source` and `target` and returns its handle.
    ///
    /// If the pair already exists in either orientation the existing arc is
    /// returned and nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::ungraph::Ungraph;
    ///
    /// let mut graph = Ungraph::new();
    /// let a = graph.insert_vertex("a");
    /// let b = graph.insert_vertex("b");
    ///
    /// let arc = graph.insert_arc(a, b);
    /// assert_eq!(graph.insert_arc(b, a), arc);
    /// assert_eq!(graph.arc_count(), 1);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of this graph.
    pub fn insert_arc(&mut self, source: VertexId, target: VertexId) -> ArcId {
        assert!(
            source.index() < self.vertices.len(),
            "arc source is not a vertex of this graph"
        );
        assert!(
            target.index() < self.vertices.len(),
            "arc target is not a vertex of this graph"
        );

        if let Some(&existing) = self.pairs.get(&normalize(source, target)) {
            return existing;
        }

        let id = ArcId(self.arcs.len() as u32);
        self.arcs.push(Arc::new(source, target));
        self.adj[source.index()].push(target);
        self.adj[target.index()].push(source);
        self.pairs.insert(normalize(source, target), id);

        id
    }

    /// Looks up a vertex handle by key.
    pub fn vertex_id(&self, key: &str) -> Option<VertexId> {
        self.ids.get(key).copied()
    }

    /// Returns the vertex behind a handle.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Mutable variant of [`vertex`](Ungraph::vertex).
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(id.index())
    }

    /// Returns the arc behind a handle.
    pub fn arc(&self, id: ArcId) -> Option<&Arc> {
        self.arcs.get(id.index())
    }

    /// Mutable variant of [`arc`](Ungraph::arc).
    pub fn arc_mut(&mut self, id: ArcId) -> Option<&mut Arc> {
        self.arcs.get_mut(id.index())
    }

    /// Looks up an arc by endpoint pair, in either orientation.
    pub fn arc_between(&self, source: VertexId, target: VertexId) -> Option<ArcId> {
        self.pairs.get(&normalize(source, target)).copied()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of arcs. Each unordered pair counts once.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Returns the number of arcs touching `v`, or 0 for an absent vertex.
    pub fn degree(&self, v: VertexId) -> usize {
        self.adj.get(v.index()).map_or(0, Vec::len)
    }

    /// Sum of degrees over all vertices. Each arc contributes twice.
    pub fn total_degree(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Iterates the neighbors of `v` in arc insertion order. Empty for an
    /// absent vertex; restartable by calling again.
    pub fn adjacent(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adj.get(v.index()).map_or(&[][..], Vec::as_slice).iter().copied()
    }

    /// Iterates vertex handles in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(|i| VertexId(i as u32))
    }

    /// Iterates vertices with their handles, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId(i as u32), v))
    }

    /// Iterates arcs with their handles, in insertion order.
    pub fn arcs(&self) -> impl Iterator<Item = (ArcId, &Arc)> + '_ {
        self.arcs
            .iter()
            .enumerate()
            .map(|(i, a)| (ArcId(i as u32), a))
    }

    /// Removes one annotation key from every vertex and every arc.
    pub fn clear_annotations(&mut self, key: &str) {
        for vertex in &mut self.vertices {
            vertex.remove_annotation(key);
        }
        for arc in &mut self.arcs {
            arc.remove_annotation(key);
        }
    }
}

/// Normalizes an unordered pair so `(a, b)` and `(b, a)` share a map slot.
fn normalize(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
