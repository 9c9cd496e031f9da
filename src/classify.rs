//! Node and edge classification for draw styling.
//!
//! Partitions are pure functions of the attributes present at load time:
//! every node and every edge lands in exactly one bucket.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::topology::Topology;

/// Attribute value marking a network-switch device.
pub const SWITCH_TYPE: &str = "switch";

/// Node partition: switches vs everything else.
#[derive(Debug, Default)]
pub struct NodeClasses {
    pub switches: Vec<NodeIndex>,
    pub others: Vec<NodeIndex>,
}

/// Edge partition: switch-to-switch links vs everything else.
#[derive(Debug, Default)]
pub struct EdgeClasses {
    pub switch_links: Vec<EdgeIndex>,
    pub others: Vec<EdgeIndex>,
}

/// A node is a switch iff its `type` attribute equals `"switch"`.
/// An absent attribute classifies as other.
pub fn classify_nodes(topo: &Topology) -> NodeClasses {
    let mut classes = NodeClasses::default();
    for idx in topo.node_indices() {
        if topo.node_attr(idx, "type") == Some(SWITCH_TYPE) {
            classes.switches.push(idx);
        } else {
            classes.others.push(idx);
        }
    }
    classes
}

/// An edge is a switch link iff its own `source_type` and `target_type`
/// attributes both equal `"switch"`. Either one absent or different
/// classifies as other.
pub fn classify_edges(topo: &Topology) -> EdgeClasses {
    let mut classes = EdgeClasses::default();
    for idx in topo.edge_indices() {
        let source_type = topo.edge_attr(idx, "source_type");
        let target_type = topo.edge_attr(idx, "target_type");
        if source_type == Some(SWITCH_TYPE) && target_type == Some(SWITCH_TYPE) {
            classes.switch_links.push(idx);
        } else {
            classes.others.push(idx);
        }
    }
    classes
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::EdgeData;

    fn edge_data(pairs: &[(&str, &str)]) -> EdgeData {
        let mut data = EdgeData::default();
        for (k, v) in pairs {
            data.attrs.insert(k.to_string(), v.to_string());
        }
        data
    }

    #[test]
    fn test_untyped_nodes_all_other() {
        let mut t = Topology::new();
        t.add_node("A");
        t.add_node("B");
        let classes = classify_nodes(&t);
        assert!(classes.switches.is_empty());
        assert_eq!(classes.others.len(), 2);
    }

    #[test]
    fn test_switch_node_classified() {
        let mut t = Topology::new();
        let a = t.add_node("A");
        t.set_node_attr(a, "type", "switch");
        t.add_node("B");
        let classes = classify_nodes(&t);
        assert_eq!(classes.switches, vec![a]);
        assert_eq!(classes.others.len(), 1);
    }

    #[test]
    fn test_non_switch_type_is_other() {
        let mut t = Topology::new();
        let a = t.add_node("A");
        t.set_node_attr(a, "type", "host");
        let classes = classify_nodes(&t);
        assert!(classes.switches.is_empty());
        assert_eq!(classes.others, vec![a]);
    }

    #[test]
    fn test_every_node_in_exactly_one_bucket() {
        let mut t = Topology::new();
        for i in 0..10 {
            let idx = t.add_node(&format!("n{i}"));
            if i % 3 == 0 {
                t.set_node_attr(idx, "type", "switch");
            }
        }
        let classes = classify_nodes(&t);
        assert_eq!(classes.switches.len() + classes.others.len(), t.node_count());
    }

    #[test]
    fn test_switch_link_requires_both_endpoints() {
        let mut t = Topology::new();
        let both = t.add_edge(
            "s1",
            "s2",
            edge_data(&[("source_type", "switch"), ("target_type", "switch")]),
        );
        let one = t.add_edge("s1", "h1", edge_data(&[("source_type", "switch")]));
        let none = t.add_edge("h1", "h2", edge_data(&[]));
        let classes = classify_edges(&t);
        assert_eq!(classes.switch_links, vec![both]);
        assert_eq!(classes.others, vec![one, none]);
    }

    #[test]
    fn test_mixed_endpoint_types_is_other() {
        let mut t = Topology::new();
        let e = t.add_edge(
            "s1",
            "h1",
            edge_data(&[("source_type", "switch"), ("target_type", "host")]),
        );
        let classes = classify_edges(&t);
        assert_eq!(classes.others, vec![e]);
    }

    #[test]
    fn test_edge_classification_ignores_node_attrs() {
        // Classification reads the edge's own attributes, not the endpoint
        // nodes' `type` attributes.
        let mut t = Topology::new();
        let a = t.add_node("A");
        t.set_node_attr(a, "type", "switch");
        let e = t.add_edge("A", "B", edge_data(&[]));
        let node_classes = classify_nodes(&t);
        let edge_classes = classify_edges(&t);
        assert_eq!(node_classes.switches, vec![a]);
        assert_eq!(edge_classes.others, vec![e]);
        assert!(edge_classes.switch_links.is_empty());
    }
}
