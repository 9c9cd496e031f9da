//! Topology — attribute-carrying network graph on top of petgraph.
//!
//! Built once by a format loader, immutable for the rest of the run.
//! Attribute values are always stored as text; readers get an explicit
//! `Option<&str>` rather than a coerced value.

use std::collections::HashMap;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};

/// Node payload: stable id plus string-valued attributes.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub id: String,
    /// Display label (GEXF carries one; GraphML does not).
    pub label: Option<String>,
    pub attrs: HashMap<String, String>,
}

/// Edge payload: string-valued attributes only.
#[derive(Debug, Clone, Default)]
pub struct EdgeData {
    pub attrs: HashMap<String, String>,
}

/// An undirected network topology with id-addressable nodes.
#[derive(Debug)]
pub struct Topology {
    graph: UnGraph<NodeData, EdgeData>,
    /// Maps node id → petgraph NodeIndex.
    node_index: HashMap<String, NodeIndex>,
}

impl Topology {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            node_index: HashMap::new(),
        }
    }

    /// Add a node if its id is not already present (first definition wins).
    /// Returns the index of the stored node either way.
    pub fn add_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(NodeData {
            id: id.to_string(),
            label: None,
            attrs: HashMap::new(),
        });
        self.node_index.insert(id.to_string(), idx);
        idx
    }

    /// Add an edge between two node ids, creating placeholder endpoints
    /// for ids not seen before.
    pub fn add_edge(&mut self, source: &str, target: &str, data: EdgeData) -> EdgeIndex {
        let s = self.add_node(source);
        let t = self.add_node(target);
        self.graph.add_edge(s, t, data)
    }

    pub fn set_node_label(&mut self, idx: NodeIndex, label: &str) {
        self.graph[idx].label = Some(label.to_string());
    }

    pub fn set_node_attr(&mut self, idx: NodeIndex, name: &str, value: &str) {
        self.graph[idx]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_edge_attr(&mut self, idx: EdgeIndex, name: &str, value: &str) {
        self.graph[idx]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    /// Explicit optional string read of a node attribute.
    pub fn node_attr(&self, idx: NodeIndex, name: &str) -> Option<&str> {
        self.graph[idx].attrs.get(name).map(|s| s.as_str())
    }

    /// Explicit optional string read of an edge attribute.
    pub fn edge_attr(&self, idx: EdgeIndex, name: &str) -> Option<&str> {
        self.graph[idx].attrs.get(name).map(|s| s.as_str())
    }

    pub fn node_id(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].id
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    /// Endpoint indices of an edge.
    pub fn edge_endpoints(&self, idx: EdgeIndex) -> (NodeIndex, NodeIndex) {
        self.graph
            .edge_endpoints(idx)
            .expect("edge index from this graph")
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.neighbors(idx).count()
    }

    pub fn lookup(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
