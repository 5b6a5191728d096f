//! A module for working with vertices.

use std::collections::HashMap;

/// A stable handle to a vertex, assigned densely in insertion order by the
/// owning graph. Handles are meaningful only for the graph that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) u32);

impl VertexId {
    /// Returns the handle's position in the graph's insertion order, usable
    /// as an index into per-vertex result arrays.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A vertex: a unique string key, an optional opaque payload and an
/// open-ended annotation store scoped to a single analysis run.
#[derive(Clone, Debug)]
pub struct Vertex {
    key: String,
    data: Option<String>,
    annotations: HashMap<String, String>,
}

impl Vertex {
    pub(crate) fn new(key: String) -> Self {
        Self {
            key,
            data: None,
            annotations: HashMap::new(),
        }
    }

    /// Returns the vertex key. Keys are unique within a graph and never
    /// change once the vertex is inserted.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the payload attached to this vertex, if any.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Replaces the payload attached to this vertex.
    pub fn set_data(&mut self, data: Option<String>) {
        self.data = data;
    }

    /// Looks up an annotation by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::digraph::Digraph;
    ///
    /// let mut graph = Digraph::new();
    /// let a = graph.insert_vertex("a");
    ///
    /// let vertex = graph.vertex_mut(a).unwrap();
    /// vertex.set_annotation("visited", "yes");
    ///
    /// assert_eq!(graph.vertex(a).unwrap().annotation("visited"), Some("yes"));
    /// ```
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_stable() {
        let vertex = Vertex::new("a".into());
        assert_eq!(vertex.key(), "a");
    }

    #[test]
    fn data_defaults_to_none() {
        let mut vertex = Vertex::new("a".into());
        assert_eq!(vertex.data(), None);

        vertex.set_data(Some("payload".into()));
        assert_eq!(vertex.data(), Some("payload"));
    }

    #[test]
    fn annotations_overwrite_and_remove() {
        let mut vertex = Vertex::new("a".into());
        assert_eq!(vertex.annotation("color"), None);

        vertex.set_annotation("color", "white");
        vertex.set_annotation("color", "gray");
        assert_eq!(vertex.annotation("color"), Some("gray"));

        assert_eq!(vertex.remove_annotation("color"), Some("gray".into()));
        assert_eq!(vertex.annotation("color"), None);
    }
}
