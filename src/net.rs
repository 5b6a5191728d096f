//! Parsing of plain-text graph description files.
//!
//! The format is line oriented: a header line, one ignored line, vertex
//! records (`key [data]`), then a marker line containing `*` followed by
//! one more ignored line and arc records (`source target [weight]`).
//! Fields are separated by runs of spaces; weights are read as floats and
//! truncated to integers, defaulting to 0 when absent.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::digraph::Digraph;
use crate::ungraph::Ungraph;

/// Errors raised while reading or interpreting a graph description.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input ended before the vertex records")]
    Truncated,

    #[error("line {line}: arc record needs a source and a target")]
    MissingEndpoint { line: usize },

    #[error("line {line}: invalid weight `{value}`")]
    InvalidWeight { line: usize, value: String },

    #[error("arc record references unknown vertex `{key}`")]
    UnknownVertex { key: String },
}

/// A vertex line: key plus optional payload (the second field; any further
/// fields are ignored).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexRecord {
    pub key: String,
    pub data: Option<String>,
}

/// An arc line: endpoint keys plus the truncated weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArcRecord {
    pub source: String,
    pub target: String,
    pub weight: i64,
}

/// The post-parse shape of an input file: vertex records followed by arc
/// records, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Records {
    pub vertices: Vec<VertexRecord>,
    pub arcs: Vec<ArcRecord>,
}

/// Reads and parses a graph description file.
pub fn parse_file(path: &Path) -> Result<Records, NetError> {
    let input = std::fs::read_to_string(path).map_err(|source| NetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&input)
}

/// Parses a graph description from a string.
///
/// # Examples
///
/// ```
/// let input = "\
/// *Vertices 2
/// ignored
/// a Alpha
/// b
/// *Arcs
/// ignored
/// a b 1.9
/// ";
///
/// let records = quiver::net::parse(input).unwrap();
/// assert_eq!(records.vertices.len(), 2);
/// assert_eq!(records.arcs[0].weight, 1);
/// ```
pub fn parse(input: &str) -> Result<Records, NetError> {
    let mut lines = input.lines().enumerate();

    // Header line plus one ignored line.
    lines.next().ok_or(NetError::Truncated)?;
    lines.next().ok_or(NetError::Truncated)?;

    let mut records = Records::default();
    let mut in_arcs = false;

    while let Some((index, line)) = lines.next() {
        let number = index + 1;

        // A marker line switches to arc records; the line after it is
        // ignored as well.
        if line.contains('*') {
            in_arcs = true;
            lines.next();
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some(&first) = fields.first() else {
            continue;
        };

        if in_arcs {
            let target = *fields
                .get(1)
                .ok_or(NetError::MissingEndpoint { line: number })?;
            let weight = match fields.get(2) {
                Some(&raw) => parse_weight(raw, number)?,
                None => 0,
            };

            records.arcs.push(ArcRecord {
                source: first.to_string(),
                target: target.to_string(),
                weight,
            });
        } else {
            records.vertices.push(VertexRecord {
                key: first.to_string(),
                data: fields.get(1).map(|s| s.to_string()),
            });
        }
    }

    debug!(
        vertices = records.vertices.len(),
        arcs = records.arcs.len(),
        "parsed graph description"
    );

    Ok(records)
}

/// Weights are floating point in the input but integral in the graph; the
/// fractional part is discarded.
fn parse_weight(raw: &str, line: usize) -> Result<i64, NetError> {
    let value: f64 = raw.parse().map_err(|_| NetError::InvalidWeight {
        line,
        value: raw.to_string(),
    })?;

    Ok(value.trunc() as i64)
}

impl Digraph {
    /// Builds a directed graph from parsed records. Every arc line appends
    /// an arc, duplicates included.
    pub fn from_records(records: &Records) -> Result<Self, NetError> {
        let mut graph = Self::new();

        for record in &records.vertices {
            let id = graph.insert_vertex(record.key.clone());
            // Safety: the vertex was just inserted.
            graph.vertex_mut(id).unwrap().set_data(record.data.clone());
        }

        for record in &records.arcs {
            let source = lookup(graph.vertex_id(&record.source), &record.source)?;
            let target = lookup(graph.vertex_id(&record.target), &record.target)?;
            let arc = graph.insert_arc(source, target);
            // Safety: the arc was just inserted.
            graph.arc_mut(arc).unwrap().set_weight(record.weight);
        }

        Ok(graph)
    }
}

impl Ungraph {
    /// Builds an undirected graph from parsed records. A pair already
    /// present in either orientation is not duplicated; its weight is
    /// overwritten by the later record.
    pub fn from_records(records: &Records) -> Result<Self, NetError> {
        let mut graph = Self::new();

        for record in &records.vertices {
            let id = graph.insert_vertex(record.key.clone());
            // Safety: the vertex was just inserted.
            graph.vertex_mut(id).unwrap().set_data(record.data.clone());
        }

        for record in &records.arcs {
            let source = lookup(graph.vertex_id(&record.source), &record.source)?;
            let target = lookup(graph.vertex_id(&record.target), &record.target)?;
            let arc = graph.insert_arc(source, target);
            // Safety: insert_arc returned a live handle.
            graph.arc_mut(arc).unwrap().set_weight(record.weight);
        }

        Ok(graph)
    }
}

fn lookup<T>(id: Option<T>, key: &str) -> Result<T, NetError> {
    id.ok_or_else(|| NetError::UnknownVertex {
        key: key.to_string(),
    })
}
