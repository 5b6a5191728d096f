//! Strongly connected components via two-pass depth-first search
//! (Kosaraju's algorithm).
//!
//! Pass 1 runs DFS over the graph's out-adjacency, stamping discovery and
//! finish times. Pass 2 runs DFS over a transposed adjacency view (built
//! from the arc set, the graph itself is never mutated) in decreasing
//! finish-time order; every vertex reached from a pass-2 root shares its
//! component. Two vertices end up in the same component exactly when each
//! reaches the other along directed arcs.

use std::cmp::Reverse;

use itertools::Itertools;
use tracing::debug;

use crate::bfs::Color;
use crate::digraph::Digraph;
use crate::vertex::VertexId;

/// Per-invocation DFS state. Owning the time counter here keeps the
/// traversal reentrant; nothing is stored in process-wide state or written
/// back to the graph.
struct DfsContext {
    time: u32,
    color: Vec<Color>,
    parent: Vec<Option<VertexId>>,
}

impl DfsContext {
    fn new(slots: usize) -> Self {
        Self {
            time: 0,
            color: vec![Color::White; slots],
            parent: vec![None; slots],
        }
    }
}

/// The component labeling produced by
/// [`strongly_connected_components`], with the pass-1 timestamps and
/// forest. All arrays are indexed by [`VertexId::index`].
#[derive(Clone, Debug)]
pub struct SccResult {
    component: Vec<Option<usize>>,
    count: usize,
    discovery: Vec<Option<u32>>,
    finish: Vec<Option<u32>>,
    parent: Vec<Option<VertexId>>,
}

impl SccResult {
    /// Number of strongly connected components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Component id of `v`, densely numbered from 0 in pass-2 root order.
    pub fn component_of(&self, v: VertexId) -> Option<usize> {
        self.component.get(v.index()).copied().flatten()
    }

    /// Pass-1 discovery stamp of `v`.
    pub fn discovery_of(&self, v: VertexId) -> Option<u32> {
        self.discovery.get(v.index()).copied().flatten()
    }

    /// Pass-1 finish stamp of `v`.
    pub fn finish_of(&self, v: VertexId) -> Option<u32> {
        self.finish.get(v.index()).copied().flatten()
    }

    /// Pass-1 DFS forest predecessor of `v`.
    pub fn parent_of(&self, v: VertexId) -> Option<VertexId> {
        self.parent.get(v.index()).copied().flatten()
    }

    /// Components as vertex groups, ranked by size descending. Ties keep
    /// pass-2 root order.
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut groups: Vec<Vec<VertexId>> = vec![Vec::new(); self.count];
        for (i, component) in self.component.iter().enumerate() {
            if let Some(c) = component {
                groups[*c].push(VertexId(i as u32));
            }
        }

        groups
            .into_iter()
            .sorted_by_key(|group| Reverse(group.len()))
            .collect()
    }

    /// Size of the largest component, 0 for an empty graph.
    pub fn largest(&self) -> usize {
        let mut sizes = vec![0usize; self.count];
        for c in self.component.iter().flatten() {
            sizes[*c] += 1;
        }

        sizes.into_iter().max().unwrap_or(0)
    }
}

/// Labels the strongly connected components of the graph.
///
/// # Examples
///
/// ```
/// use quiver::digraph::Digraph;
/// use quiver::scc::strongly_connected_components;
///
/// let mut graph = Digraph::new();
/// let a = graph.insert_vertex("a");
/// let b = graph.insert_vertex("b");
/// let c = graph.insert_vertex("c");
/// graph.insert_arc(a, b);
/// graph.insert_arc(b, c);
/// graph.insert_arc(c, a);
///
/// let scc = strongly_connected_components(&graph);
/// assert_eq!(scc.count(), 1);
/// assert_eq!(scc.largest(), 3);
/// ```
pub fn strongly_connected_components(graph: &Digraph) -> SccResult {
    let slots = graph.slots();

    // Pass 1: stamp discovery/finish times over the out-adjacency and
    // collect vertices in increasing finish order.
    let mut ctx = DfsContext::new(slots);
    let mut discovery = vec![None; slots];
    let mut finish = vec![None; slots];
    let mut order = Vec::with_capacity(graph.vertex_count());

    for root in graph.vertex_ids() {
        if ctx.color[root.index()] == Color::White {
            visit_collect(graph, root, &mut ctx, &mut discovery, &mut finish, &mut order);
        }
    }

    let parent = ctx.parent;

    // Transposed adjacency view for pass 2; the graph itself stays intact.
    let mut reversed: Vec<Vec<VertexId>> = vec![Vec::new(); slots];
    for (_, arc) in graph.arcs() {
        reversed[arc.target().index()].push(arc.source());
    }

    // Pass 2: fresh colors, roots taken in decreasing finish order; every
    // root starts a new component.
    let mut ctx = DfsContext::new(slots);
    let mut component = vec![None; slots];
    let mut count = 0;

    for &root in order.iter().rev() {
        if ctx.color[root.index()] == Color::White {
            visit_label(&reversed, root, &mut ctx, &mut component, count);
            count += 1;
        }
    }

    debug!(components = count, "component labeling complete");

    SccResult {
        component,
        count,
        discovery,
        finish,
        parent,
    }
}

/// Pass-1 DFS visit: stamps times and appends each vertex to `order` as it
/// finishes, so `order` ends up in increasing finish time.
fn visit_collect(
    graph: &Digraph,
    root: VertexId,
    ctx: &mut DfsContext,
    discovery: &mut [Option<u32>],
    finish: &mut [Option<u32>],
    order: &mut Vec<VertexId>,
) {
    ctx.time += 1;
    ctx.color[root.index()] = Color::Gray;
    discovery[root.index()] = Some(ctx.time);

    let mut stack = vec![(root, 0usize)];

    while let Some(frame) = stack.last_mut() {
        let (v, cursor) = (frame.0, frame.1);
        frame.1 += 1;

        match graph.out_neighbors(v).get(cursor) {
            Some(&w) if ctx.color[w.index()] == Color::White => {
                ctx.time += 1;
                ctx.color[w.index()] = Color::Gray;
                ctx.parent[w.index()] = Some(v);
                discovery[w.index()] = Some(ctx.time);
                stack.push((w, 0));
            }
            Some(_) => {}
            None => {
                ctx.time += 1;
                ctx.color[v.index()] = Color::Black;
                finish[v.index()] = Some(ctx.time);
                order.push(v);
                stack.pop();
            }
        }
    }
}

/// Pass-2 DFS visit over the transposed view: every vertex reached from
/// `root` is labeled with `component_id`.
fn visit_label(
    reversed: &[Vec<VertexId>],
    root: VertexId,
    ctx: &mut DfsContext,
    component: &mut [Option<usize>],
    component_id: usize,
) {
    ctx.color[root.index()] = Color::Gray;
    component[root.index()] = Some(component_id);

    let mut stack = vec![(root, 0usize)];

    while let Some(frame) = stack.last_mut() {
        let (v, cursor) = (frame.0, frame.1);
        frame.1 += 1;

        match reversed[v.index()].get(cursor) {
            Some(&w) if ctx.color[w.index()] == Color::White => {
                ctx.color[w.index()] = Color::Gray;
                ctx.parent[w.index()] = Some(v);
                component[w.index()] = Some(component_id);
                stack.push((w, 0));
            }
            Some(_) => {}
            None => {
                ctx.color[v.index()] = Color::Black;
                stack.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn keys(graph: &Digraph, group: &[VertexId]) -> HashSet<String> {
        group
            .iter()
            .map(|&v| graph.vertex(v).unwrap().key().to_string())
            .collect()
    }

    #[test]
    fn cycle_is_one_component() {
        let mut graph = Digraph::new();
        let ids: Vec<_> = (0..5)
            .map(|i| graph.insert_vertex(format!("v{i}")))
            .collect();
        for i in 0..5 {
            graph.insert_arc(ids[i], ids[(i + 1) % 5]);
        }

        let scc = strongly_connected_components(&graph);
        assert_eq!(scc.count(), 1);
        assert_eq!(scc.largest(), 5);
        assert!(ids.iter().all(|&v| scc.component_of(v) == Some(0)));
    }

    #[test]
    fn dag_yields_singletons() {
        let mut graph = Digraph::new();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let c = graph.insert_vertex("c");
        graph.insert_arc(a, b);
        graph.insert_arc(a, c);
        graph.insert_arc(b, c);

        let scc = strongly_connected_components(&graph);
        assert_eq!(scc.count(), 3);
        assert_eq!(scc.largest(), 1);

        let components: HashSet<usize> = [a, b, c]
            .iter()
            .map(|&v| scc.component_of(v).unwrap())
            .collect();
        assert_eq!(components.len(), 3);
    }

    #[test]
    fn mixed_graph_groups_mutually_reachable_vertices() {
        // a <-> b, then a bridge to the c <-> d cycle, plus a sink e.
        let mut graph = Digraph::new();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let c = graph.insert_vertex("c");
        let d = graph.insert_vertex("d");
        let e = graph.insert_vertex("e");
        graph.insert_arc(a, b);
        graph.insert_arc(b, a);
        graph.insert_arc(b, c);
        graph.insert_arc(c, d);
        graph.insert_arc(d, c);
        graph.insert_arc(d, e);

        let scc = strongly_connected_components(&graph);
        assert_eq!(scc.count(), 3);
        assert_eq!(scc.component_of(a), scc.component_of(b));
        assert_eq!(scc.component_of(c), scc.component_of(d));
        assert_ne!(scc.component_of(a), scc.component_of(c));
        assert_ne!(scc.component_of(c), scc.component_of(e));

        let groups = scc.components();
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].len(), 2);
        assert_eq!(groups[2].len(), 1);
        assert_eq!(keys(&graph, &groups[2]), HashSet::from(["e".to_string()]));
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = Digraph::new();
        let scc = strongly_connected_components(&graph);

        assert_eq!(scc.count(), 0);
        assert_eq!(scc.largest(), 0);
        assert!(scc.components().is_empty());
    }

    #[test]
    fn single_vertex_is_a_singleton_component() {
        let mut graph = Digraph::new();
        let a = graph.insert_vertex("a");

        let scc = strongly_connected_components(&graph);
        assert_eq!(scc.count(), 1);
        assert_eq!(scc.component_of(a), Some(0));
        assert_eq!(scc.largest(), 1);
    }

    #[test]
    fn pass_one_stamps_are_well_formed() {
        let mut graph = Digraph::new();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let c = graph.insert_vertex("c");
        graph.insert_arc(a, b);
        graph.insert_arc(b, c);

        let scc = strongly_connected_components(&graph);

        let mut stamps = Vec::new();
        for v in [a, b, c] {
            let d = scc.discovery_of(v).unwrap();
            let f = scc.finish_of(v).unwrap();
            assert!(d < f);
            stamps.push(d);
            stamps.push(f);
        }

        // 2 stamps per vertex, all distinct, drawn from 1..=6.
        let unique: HashSet<u32> = stamps.iter().copied().collect();
        assert_eq!(unique.len(), 6);
        assert!(stamps.iter().all(|&t| (1..=6).contains(&t)));

        // The line a -> b -> c is discovered in order and finished in
        // reverse, so parents follow the arcs.
        assert_eq!(scc.parent_of(b), Some(a));
        assert_eq!(scc.parent_of(c), Some(b));
    }
}
