//! Quiver is a small toolkit for computing structural metrics of directed
//! and undirected graphs.
//!
//! # Basic usage
//!
//! The library is centered around the two stores, [`Digraph`](digraph::Digraph)
//! and [`Ungraph`](ungraph::Ungraph), built from keyed vertices and weighted
//! arcs. Once constructed, the traversal engines ([`bfs`](bfs::bfs) and
//! [`scc`](scc::strongly_connected_components)) and the metric batteries in
//! [`metrics`] can be run against them. The [`net`] module reads the
//! plain-text description format and [`report`] renders the results.
//!
//! ```rust
//! use quiver::digraph::Digraph;
//! use quiver::metrics::analyze_directed;
//!
//! // Construct the graph instance.
//! let mut graph = Digraph::new();
//!
//! let a = graph.insert_vertex("a");
//! let b = graph.insert_vertex("b");
//! let c = graph.insert_vertex("c");
//!
//! // Wire the vertices up into a directed cycle.
//! graph.insert_arc(a, b);
//! graph.insert_arc(b, c);
//! graph.insert_arc(c, a);
//!
//! // Compute the metric battery on that state of the graph.
//! let metrics = analyze_directed(&graph);
//!
//! assert_eq!(metrics.components.count, 1);
//! assert_eq!(metrics.geodesic.diameter, 2);
//! assert_eq!(metrics.geodesic.mean, 1.5);
//! ```

pub mod arc;
pub mod bfs;
pub mod digraph;
pub mod metrics;
pub mod net;
pub mod report;
pub mod scc;
pub mod ungraph;
pub mod vertex;
