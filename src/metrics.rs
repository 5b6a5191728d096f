//! Structural metric batteries for both graph orientations.
//!
//! Degenerate ratios (no arcs, no reachable pairs, a regular graph) come
//! out as `NaN` rather than failing; callers decide how to present an
//! undefined value.

use serde::Serialize;
use tracing::debug;

use crate::bfs::bfs;
use crate::digraph::Digraph;
use crate::scc::strongly_connected_components;
use crate::ungraph::Ungraph;

/// Min/mean/max of a degree distribution, from one linear scan.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct DegreeStats {
    pub min: usize,
    pub mean: f64,
    pub max: usize,
}

/// Aggregates of the all-pairs BFS batch: mean over reachable ordered
/// pairs, and the largest distance any run observed.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct GeodesicStats {
    pub mean: f64,
    pub diameter: u32,
}

/// Ordered-triple census around every center vertex. `coefficient` is
/// `closed / total`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ClusteringStats {
    pub closed: u64,
    pub total: u64,
    pub coefficient: f64,
}

/// Strongly-connected-component summary. `components` holds the vertex
/// keys of each group, ranked by size descending.
#[derive(Clone, Debug, Serialize)]
pub struct ComponentStats {
    pub count: usize,
    pub largest_percent: f64,
    pub components: Vec<Vec<String>>,
}

/// The directed battery.
#[derive(Clone, Debug, Serialize)]
pub struct DirectedMetrics {
    pub vertex_count: usize,
    pub arc_count: usize,
    pub density: f64,
    pub in_degree: DegreeStats,
    pub out_degree: DegreeStats,
    pub reciprocity: f64,
    pub geodesic: GeodesicStats,
    pub components: ComponentStats,
}

/// The undirected battery.
#[derive(Clone, Debug, Serialize)]
pub struct UndirectedMetrics {
    pub vertex_count: usize,
    pub arc_count: usize,
    pub density: f64,
    pub degree: DegreeStats,
    pub clustering: ClusteringStats,
    pub degree_correlation: f64,
}

/// Computes the full directed battery: counts, density, degree statistics,
/// reciprocity, geodesic aggregates and the component summary.
pub fn analyze_directed(graph: &Digraph) -> DirectedMetrics {
    let vertex_count = graph.vertex_count();
    let arc_count = graph.arc_count();
    debug!(vertices = vertex_count, arcs = arc_count, "analyzing directed graph");

    DirectedMetrics {
        vertex_count,
        arc_count,
        density: density(vertex_count, arc_count),
        in_degree: degree_stats(graph.vertex_ids().map(|v| graph.in_degree(v))),
        out_degree: degree_stats(graph.vertex_ids().map(|v| graph.out_degree(v))),
        reciprocity: reciprocity(graph),
        geodesic: geodesic_stats(graph),
        components: component_stats(graph),
    }
}

/// Computes the full undirected battery: counts, density, degree
/// statistics, the clustering census and degree correlation.
pub fn analyze_undirected(graph: &Ungraph) -> UndirectedMetrics {
    let vertex_count = graph.vertex_count();
    let arc_count = graph.arc_count();
    debug!(vertices = vertex_count, arcs = arc_count, "analyzing undirected graph");

    UndirectedMetrics {
        vertex_count,
        arc_count,
        density: density(vertex_count, arc_count),
        degree: degree_stats(graph.vertex_ids().map(|v| graph.degree(v))),
        clustering: clustering_stats(graph),
        degree_correlation: degree_correlation(graph),
    }
}

/// Ratio of arcs to the `v * (v - 1)` ordered-pair bound. Both
/// orientations share this denominator, so the undirected value is half the
/// conventional `2E / (V * (V - 1))`. `NaN` below two vertices.
fn density(vertices: usize, arcs: usize) -> f64 {
    arcs as f64 / (vertices as f64 * (vertices as f64 - 1.0))
}

fn degree_stats(degrees: impl Iterator<Item = usize>) -> DegreeStats {
    let mut count = 0usize;
    let mut total = 0usize;
    let mut min = usize::MAX;
    let mut max = 0usize;

    for degree in degrees {
        count += 1;
        total += degree;
        min = min.min(degree);
        max = max.max(degree);
    }

    if count == 0 {
        return DegreeStats {
            min: 0,
            mean: f64::NAN,
            max: 0,
        };
    }

    DegreeStats {
        min,
        mean: total as f64 / count as f64,
        max,
    }
}

/// Fraction of arcs whose reverse ordered pair also exists. `NaN` when the
/// graph has no arcs.
fn reciprocity(graph: &Digraph) -> f64 {
    let reciprocal = graph
        .arcs()
        .filter(|(_, arc)| graph.arc_between(arc.target(), arc.source()).is_some())
        .count();

    reciprocal as f64 / graph.arc_count() as f64
}

/// Runs BFS from every vertex and folds the per-run aggregates: the mean
/// counts only reachable ordered pairs, the diameter is the running
/// maximum across the whole batch.
fn geodesic_stats(graph: &Digraph) -> GeodesicStats {
    let mut distance_sum = 0u64;
    let mut reachable_pairs = 0u64;
    let mut diameter = 0u32;

    for source in graph.vertex_ids() {
        let tree = bfs(graph, source);
        distance_sum += tree.distance_sum();
        reachable_pairs += tree.reached() as u64;
        diameter = diameter.max(tree.max_distance());
    }

    debug!(reachable_pairs, diameter, "geodesic batch complete");

    GeodesicStats {
        mean: distance_sum as f64 / reachable_pairs as f64,
        diameter,
    }
}

fn component_stats(graph: &Digraph) -> ComponentStats {
    let scc = strongly_connected_components(graph);
    let vertex_count = graph.vertex_count();

    let largest_percent = if vertex_count == 0 {
        0.0
    } else {
        scc.largest() as f64 / vertex_count as f64 * 100.0
    };

    let components = scc
        .components()
        .into_iter()
        .map(|group| {
            group
                .into_iter()
                // Safety: component members are live vertices of this graph.
                .map(|v| graph.vertex(v).unwrap().key().to_string())
                .collect()
        })
        .collect();

    ComponentStats {
        count: scc.count(),
        largest_percent,
        components,
    }
}

/// Counts ordered (first, second, third) triples with second adjacent to
/// first, third adjacent to second and third distinct from first; a triple
/// is closed when first and third are also connected.
fn clustering_stats(graph: &Ungraph) -> ClusteringStats {
    let mut closed = 0u64;
    let mut total = 0u64;

    for first in graph.vertex_ids() {
        for second in graph.adjacent(first) {
            for third in graph.adjacent(second) {
                if third == first {
                    continue;
                }

                total += 1;
                if graph.arc_between(first, third).is_some() {
                    closed += 1;
                }
            }
        }
    }

    ClusteringStats {
        closed,
        total,
        coefficient: closed as f64 / total as f64,
    }
}

/// Pearson-style correlation of degree across arc endpoints:
/// `r = (S1*SE - S2^2) / (S1*S3 - S2^2)` with `S1..S3` the degree power
/// sums and `SE = sum over arcs of 2*deg(u)*deg(v)`. `NaN` when the
/// denominator vanishes (every vertex has the same degree).
fn degree_correlation(graph: &Ungraph) -> f64 {
    let mut s1 = 0.0f64;
    let mut s2 = 0.0f64;
    let mut s3 = 0.0f64;

    for v in graph.vertex_ids() {
        let degree = graph.degree(v) as f64;
        s1 += degree;
        s2 += degree * degree;
        s3 += degree * degree * degree;
    }

    let mut se = 0.0f64;
    for (_, arc) in graph.arcs() {
        se += (graph.degree(arc.source()) * graph.degree(arc.target())) as f64;
    }
    se *= 2.0;

    (s1 * se - s2 * s2) / (s1 * s3 - s2 * s2)
}
