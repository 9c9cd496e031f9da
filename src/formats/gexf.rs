//! GEXF deserializer.
//!
//! Reads the subset of GEXF the topology exporter emits: `<attribute>`
//! declarations mapping attvalue ids to titles (per node/edge class),
//! `<node>` elements with `id` and optional `label`, `<edge>` elements with
//! `source`/`target`, and `<attvalue for=… value=…/>` children.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::topology::{EdgeData, Topology};

#[derive(Clone, Copy)]
enum Scope {
    None,
    Node(petgraph::graph::NodeIndex),
    Edge(petgraph::graph::EdgeIndex),
}

/// Which `<attributes>` block declarations are being read for.
#[derive(Clone, Copy, PartialEq)]
enum AttrClass {
    Node,
    Edge,
}

fn require_attr(e: &BytesStart, name: &str, elem: &str) -> Result<String, String> {
    attr(e, name)?.ok_or_else(|| format!("<{elem}> missing '{name}' attribute"))
}

fn attr(e: &BytesStart, name: &str) -> Result<Option<String>, String> {
    match e.try_get_attribute(name) {
        Ok(Some(a)) => a
            .unescape_value()
            .map(|v| Some(v.into_owned()))
            .map_err(|err| err.to_string()),
        Ok(None) => Ok(None),
        Err(err) => Err(err.to_string()),
    }
}

/// Parse GEXF text into a Topology.
pub fn load(xml: &str) -> Result<Topology, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut topo = Topology::new();
    // attvalue id → declared title, per class ("0" → "type")
    let mut node_attrs: HashMap<String, String> = HashMap::new();
    let mut edge_attrs: HashMap<String, String> = HashMap::new();
    let mut attr_class: Option<AttrClass> = None;
    let mut scope = Scope::None;
    let mut saw_root = false;

    loop {
        let event = reader.read_event().map_err(|e| e.to_string())?;
        match event {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"gexf" => saw_root = true,
                b"attributes" => {
                    attr_class = match attr(&e, "class")?.as_deref() {
                        Some("edge") => Some(AttrClass::Edge),
                        // GEXF defaults the class to node
                        _ => Some(AttrClass::Node),
                    };
                }
                b"attribute" => {
                    let id = require_attr(&e, "id", "attribute")?;
                    let title = require_attr(&e, "title", "attribute")?;
                    match attr_class {
                        Some(AttrClass::Edge) => edge_attrs.insert(id, title),
                        _ => node_attrs.insert(id, title),
                    };
                }
                b"node" => {
                    let id = require_attr(&e, "id", "node")?;
                    let idx = topo.add_node(&id);
                    if let Some(label) = attr(&e, "label")? {
                        topo.set_node_label(idx, &label);
                    }
                    scope = Scope::Node(idx);
                }
                b"edge" => {
                    let source = require_attr(&e, "source", "edge")?;
                    let target = require_attr(&e, "target", "edge")?;
                    scope = Scope::Edge(topo.add_edge(&source, &target, EdgeData::default()));
                }
                b"attvalue" => {
                    let for_id = require_attr(&e, "for", "attvalue")?;
                    let value = require_attr(&e, "value", "attvalue")?;
                    match scope {
                        Scope::Node(idx) => {
                            let name =
                                node_attrs.get(&for_id).map(|s| s.as_str()).unwrap_or(&for_id);
                            topo.set_node_attr(idx, name, &value);
                        }
                        Scope::Edge(idx) => {
                            let name =
                                edge_attrs.get(&for_id).map(|s| s.as_str()).unwrap_or(&for_id);
                            topo.set_edge_attr(idx, name, &value);
                        }
                        Scope::None => {}
                    }
                }
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"node" | b"edge" => scope = Scope::None,
                b"attributes" => attr_class = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err("missing <gexf> root element".to_string());
    }
    Ok(topo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
