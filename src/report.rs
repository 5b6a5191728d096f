//! Textual rendering of the metric batteries.
//!
//! Undefined ratios render as `NaN`; the JSON path (serde) turns them into
//! `null` instead.

use std::fmt;

use crate::metrics::{DirectedMetrics, UndirectedMetrics};

/// Renders the directed battery as a human-readable block.
pub fn render_directed(name: &str, metrics: &DirectedMetrics) -> String {
    DirectedReport { name, metrics }.to_string()
}

/// Renders the undirected battery as a human-readable block.
pub fn render_undirected(name: &str, metrics: &UndirectedMetrics) -> String {
    UndirectedReport { name, metrics }.to_string()
}

struct DirectedReport<'a> {
    name: &'a str,
    metrics: &'a DirectedMetrics,
}

impl fmt::Display for DirectedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.metrics;

        writeln!(f, "Graph name: {} (Directed Graph)", self.name)?;
        writeln!(f, "Vertex total: {}", m.vertex_count)?;
        writeln!(f, "Arc total: {}", m.arc_count)?;
        writeln!(f, "Graph density: {:.5}", m.density)?;
        writeln!(
            f,
            "Min/Avg/Max in-degree: {} / {} / {}",
            m.in_degree.min, m.in_degree.mean, m.in_degree.max
        )?;
        writeln!(
            f,
            "Min/Avg/Max out-degree: {} / {} / {}",
            m.out_degree.min, m.out_degree.mean, m.out_degree.max
        )?;
        writeln!(f, "Reciprocity: {}", m.reciprocity)?;
        writeln!(f, "Mean geodesic distance: {}", m.geodesic.mean)?;
        writeln!(f, "Diameter: {}", m.geodesic.diameter)?;
        writeln!(
            f,
            "Strongly connected components: {}",
            m.components.count
        )?;
        writeln!(
            f,
            "Percent of vertices in largest component: {:.0}",
            m.components.largest_percent
        )?;

        Ok(())
    }
}

struct UndirectedReport<'a> {
    name: &'a str,
    metrics: &'a UndirectedMetrics,
}

impl fmt::Display for UndirectedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.metrics;

        writeln!(f, "Graph name: {} (Undirected Graph)", self.name)?;
        writeln!(f, "Vertex total: {}", m.vertex_count)?;
        writeln!(f, "Arc total: {}", m.arc_count)?;
        writeln!(f, "Graph density: {:.5}", m.density)?;
        writeln!(
            f,
            "Min/Avg/Max degree: {} / {} / {}",
            m.degree.min, m.degree.mean, m.degree.max
        )?;
        writeln!(
            f,
            "Closed/Total triples: {} / {}",
            m.clustering.closed, m.clustering.total
        )?;
        writeln!(f, "Clustering coefficient: {}", m.clustering.coefficient)?;
        writeln!(f, "Degree correlation: {}", m.degree_correlation)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digraph::Digraph;
    use crate::metrics::{analyze_directed, analyze_undirected};
    use crate::ungraph::Ungraph;

    #[test]
    fn directed_report_lists_every_metric() {
        let mut graph = Digraph::new();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let c = graph.insert_vertex("c");
        graph.insert_arc(a, b);
        graph.insert_arc(b, c);
        graph.insert_arc(c, a);

        let report = render_directed("triangle", &analyze_directed(&graph));

        assert!(report.contains("Graph name: triangle (Directed Graph)"));
        assert!(report.contains("Vertex total: 3"));
        assert!(report.contains("Arc total: 3"));
        assert!(report.contains("Graph density: 0.50000"));
        assert!(report.contains("Reciprocity: 0"));
        assert!(report.contains("Mean geodesic distance: 1.5"));
        assert!(report.contains("Diameter: 2"));
        assert!(report.contains("Strongly connected components: 1"));
        assert!(report.contains("Percent of vertices in largest component: 100"));
    }

    #[test]
    fn undirected_report_lists_every_metric() {
        let mut graph = Ungraph::new();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let c = graph.insert_vertex("c");
        graph.insert_arc(a, b);
        graph.insert_arc(b, c);

        let report = render_undirected("path", &analyze_undirected(&graph));

        assert!(report.contains("Graph name: path (Undirected Graph)"));
        assert!(report.contains("Graph density: 0.33333"));
        assert!(report.contains("Min/Avg/Max degree: 1 / 1.3333333333333333 / 2"));
        assert!(report.contains("Closed/Total triples: 0 / 2"));
        assert!(report.contains("Clustering coefficient: 0"));
        assert!(report.contains("Degree correlation: -1"));
    }

    #[test]
    fn undefined_ratios_render_as_nan() {
        let report = render_undirected("empty", &analyze_undirected(&Ungraph::new()));

        assert!(report.contains("Graph density: NaN"));
        assert!(report.contains("Degree correlation: NaN"));
    }
}
