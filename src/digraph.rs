//! A module for working with directed graphs.

use std::collections::HashMap;

use crate::arc::{Arc, ArcId};
use crate::vertex::{Vertex, VertexId};

/// A directed graph, owning its vertices and arcs.
///
/// Vertices are identified by a unique string key and addressed through
/// [`VertexId`] handles assigned at insertion. Arcs are ordered pairs;
/// inserting the same ordered pair twice creates a second, parallel arc and
/// both are counted by [`arc_count`](Digraph::arc_count). In- and
/// out-adjacency indexes are kept consistent with the arc set across
/// insertion, removal and direction reversal.
#[derive(Clone, Debug, Default)]
pub struct Digraph {
    /// Vertex slots in insertion order. Removal leaves a tombstone so
    /// handles stay stable.
    vertices: Vec<Option<Vertex>>,
    /// Key to handle lookup.
    ids: HashMap<String, VertexId>,
    /// Arc slots in insertion order, tombstoned on removal.
    arcs: Vec<Option<Arc>>,
    /// Out-neighbors per vertex slot, in arc insertion order.
    out_adj: Vec<Vec<VertexId>>,
    /// In-neighbors per vertex slot, in arc insertion order.
    in_adj: Vec<Vec<VertexId>>,
    /// Endpoint pair to arc lookup. With parallel arcs the last inserted
    /// pair wins the slot.
    pairs: HashMap<(VertexId, VertexId), ArcId>,
}

impl Digraph {
    /// Creates an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::digraph::Digraph;
    ///
    /// let graph = Digraph::new();
    /// assert_eq!(graph.vertex_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a vertex and returns its handle.
    ///
    /// If the key is already registered the existing handle is returned and
    /// no adjacency state is touched, so repeated insertion cannot corrupt
    /// the graph.
    pub fn insert_vertex(&mut self, key: impl Into<String>) -> VertexId {
        let key = key.into();
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }

        let id = VertexId(self.vertices.len() as u32);
        self.ids.insert(key.clone(), id);
        self.vertices.push(Some(Vertex::new(key)));
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());

        id
    }

    /// Inserts an arc from `source` to `target` and returns its handle.
    ///
    /// No deduplication is performed: every call appends a new arc and a new
    /// adjacency entry, so parallel arcs inflate [`arc_count`](Digraph::arc_count)
    /// and the endpoint degrees.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a live vertex of this graph.
    pub fn insert_arc(&mut self, source: VertexId, target: VertexId) -> ArcId {
        assert!(
            self.contains_vertex(source),
            "arc source is not a vertex of this graph"
        );
        assert!(
            self.contains_vertex(target),
            "arc target is not a vertex of this graph"
        );

        let id = ArcId(self.arcs.len() as u32);
        self.arcs.push(Some(Arc::new(source, target)));
        self.out_adj[source.index()].push(target);
        self.in_adj[target.index()].push(source);
        self.pairs.insert((source, target), id);

        id
    }

    /// Looks up a vertex handle by key.
    pub fn vertex_id(&self, key: &str) -> Option<VertexId> {
        self.ids.get(key).copied()
    }

    /// Returns the vertex behind a handle, or `None` if the handle is stale
    /// or foreign.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())?.as_ref()
    }

    /// Mutable variant of [`vertex`](Digraph::vertex).
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(id.index())?.as_mut()
    }

    /// Returns the arc behind a handle.
    pub fn arc(&self, id: ArcId) -> Option<&Arc> {
        self.arcs.get(id.index())?.as_ref()
    }

    /// Mutable variant of [`arc`](Digraph::arc).
    pub fn arc_mut(&mut self, id: ArcId) -> Option<&mut Arc> {
        self.arcs.get_mut(id.index())?.as_mut()
    }

    /// Looks up an arc by its exact ordered endpoint pair. With parallel
    /// arcs the most recently inserted one is returned.
    pub fn arc_between(&self, source: VertexId, target: VertexId) -> Option<ArcId> {
        self.pairs.get(&(source, target)).copied()
    }

    /// Returns whether the handle refers to a live vertex of this graph.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        matches!(self.vertices.get(id.index()), Some(Some(_)))
    }

    /// Returns the number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.iter().flatten().count()
    }

    /// Returns the number of live arcs, parallel arcs included.
    pub fn arc_count(&self) -> usize {
        self.arcs.iter().flatten().count()
    }

    /// Number of vertex slots ever allocated; the bound for per-vertex
    /// result arrays indexed by [`VertexId::index`].
    pub(crate) fn slots(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of arcs pointing at `v`, or 0 for an absent
    /// vertex.
    pub fn in_degree(&self, v: VertexId) -> usize {
        self.in_adj.get(v.index()).map_or(0, Vec::len)
    }

    /// Returns the number of arcs leaving `v`, or 0 for an absent vertex.
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.out_adj.get(v.index()).map_or(0, Vec::len)
    }

    /// Sum of in-degrees over all vertices.
    pub fn total_in_degree(&self) -> usize {
        self.in_adj.iter().map(Vec::len).sum()
    }

    /// Sum of out-degrees over all vertices.
    pub fn total_out_degree(&self) -> usize {
        self.out_adj.iter().map(Vec::len).sum()
    }

    /// Iterates the vertices `v` points at, in arc insertion order. Empty
    /// for an absent vertex. The iterator borrows the graph and can be
    /// restarted by calling again.
    pub fn out_adjacent(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.out_neighbors(v).iter().copied()
    }

    /// Iterates the vertices pointing at `v`, in arc insertion order.
    pub fn in_adjacent(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.in_neighbors(v).iter().copied()
    }

    pub(crate) fn out_neighbors(&self, v: VertexId) -> &[VertexId] {
        self.out_adj.get(v.index()).map_or(&[][..], Vec::as_slice)
    }

    fn in_neighbors(&self, v: VertexId) -> &[VertexId] {
        self.in_adj.get(v.index()).map_or(&[][..], Vec::as_slice)
    }

    /// Iterates live vertex handles in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| VertexId(i as u32))
    }

    /// Iterates live vertices with their handles, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (VertexId(i as u32), v)))
    }

    /// Iterates live arc handles in insertion order.
    pub fn arc_ids(&self) -> impl Iterator<Item = ArcId> + '_ {
        self.arcs
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| ArcId(i as u32))
    }

    /// Iterates live arcs with their handles, in insertion order.
    pub fn arcs(&self) -> impl Iterator<Item = (ArcId, &Arc)> + '_ {
        self.arcs
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|a| (ArcId(i as u32), a)))
    }

    /// Reverses an arc's direction in place, flipping its contribution to
    /// the in- and out-adjacency indexes. The arc keeps its handle and its
    /// position in [`arcs`](Digraph::arcs) iteration. Reversing twice
    /// restores the original state.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not refer to a live arc.
    pub fn reverse_direction(&mut self, id: ArcId) {
        let arc = self
            .arcs
            .get(id.index())
            .and_then(Option::as_ref)
            .expect("reverse_direction on a stale arc handle");
        let (source, target) = (arc.source(), arc.target());

        remove_one(&mut self.out_adj[source.index()], target);
        remove_one(&mut self.in_adj[target.index()], source);
        self.out_adj[target.index()].push(source);
        self.in_adj[source.index()].push(target);

        if self.pairs.get(&(source, target)) == Some(&id) {
            self.pairs.remove(&(source, target));
        }
        self.pairs.insert((target, source), id);

        // Safety: the slot was checked live above.
        self.arcs[id.index()].as_mut().unwrap().reverse();
    }

    /// Removes an arc and repairs the adjacency indexes, returning the arc
    /// if the handle was live.
    pub fn remove_arc(&mut self, id: ArcId) -> Option<Arc> {
        let arc = self.arcs.get_mut(id.index())?.take()?;
        let (source, target) = (arc.source(), arc.target());

        remove_one(&mut self.out_adj[source.index()], target);
        remove_one(&mut self.in_adj[target.index()], source);

        if self.pairs.get(&(source, target)) == Some(&id) {
            self.pairs.remove(&(source, target));
        }

        Some(arc)
    }

    /// Removes a vertex together with every arc touching it, returning the
    /// vertex if the handle was live.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex> {
        if !self.contains_vertex(id) {
            return None;
        }

        let incident: Vec<ArcId> = self
            .arcs()
            .filter(|(_, arc)| arc.source() == id || arc.target() == id)
            .map(|(arc_id, _)| arc_id)
            .collect();
        for arc_id in incident {
            self.remove_arc(arc_id);
        }

        let vertex = self.vertices[id.index()].take()?;
        self.ids.remove(vertex.key());
        self.out_adj[id.index()].clear();
        self.in_adj[id.index()].clear();

        Some(vertex)
    }

    /// Removes one annotation key from every vertex and every arc.
    pub fn clear_annotations(&mut self, key: &str) {
        for vertex in self.vertices.iter_mut().flatten() {
            vertex.remove_annotation(key);
        }
        for arc in self.arcs.iter_mut().flatten() {
            arc.remove_annotation(key);
        }
    }
}

/// Removes the first occurrence of `value` from `list`, preserving the
/// insertion order of the remaining entries.
fn remove_one(list: &mut Vec<VertexId>, value: VertexId) {
    if let Some(pos) = list.iter().position(|&v| v == value) {
        list.remove(pos);
    }
}
