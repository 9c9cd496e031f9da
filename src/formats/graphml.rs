//! GraphML deserializer.
//!
//! Reads the subset of GraphML the topology exporter emits: `<key>`
//! declarations mapping key ids to attribute names, `<node>` elements with
//! an `id`, `<edge>` elements with `source`/`target`, and `<data>` children
//! carrying string attribute values. Everything else is skipped.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::topology::{EdgeData, Topology};

/// Element currently being populated with `<data>` values.
#[derive(Clone, Copy)]
enum Scope {
    None,
    Node(petgraph::graph::NodeIndex),
    Edge(petgraph::graph::EdgeIndex),
}

/// Read a single required attribute, unescaped.
fn require_attr(e: &BytesStart, name: &str, elem: &str) -> Result<String, String> {
    attr(e, name)?.ok_or_else(|| format!("<{elem}> missing '{name}' attribute"))
}

/// Read a single optional attribute, unescaped.
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

/// Parse GraphML text into a Topology.
pub fn load(xml: &str) -> Result<Topology, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut topo = Topology::new();
    // key id → declared attr.name (e.g. "d0" → "type")
    let mut keys: HashMap<String, String> = HashMap::new();
    let mut scope = Scope::None;
    let mut data_key: Option<String> = None;
    let mut data_text = String::new();
    let mut saw_root = false;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"graphml" => {
                saw_root = true;
            }
            Event::Empty(e) if e.local_name().as_ref() == b"key" => {
                let id = require_attr(&e, "id", "key")?;
                if let Some(name) = attr(&e, "attr.name")? {
                    keys.insert(id, name);
                }
            }
            Event::Start(e) if e.local_name().as_ref() == b"key" => {
                // <key> with a <default> child; the default value itself is
                // not applied, only the name mapping.
                let id = require_attr(&e, "id", "key")?;
                if let Some(name) = attr(&e, "attr.name")? {
                    keys.insert(id, name);
                }
            }
            Event::Start(e) if e.local_name().as_ref() == b"node" => {
                let id = require_attr(&e, "id", "node")?;
                scope = Scope::Node(topo.add_node(&id));
            }
            Event::Empty(e) if e.local_name().as_ref() == b"node" => {
                let id = require_attr(&e, "id", "node")?;
                topo.add_node(&id);
            }
            Event::Start(e) if e.local_name().as_ref() == b"edge" => {
                let source = require_attr(&e, "source", "edge")?;
                let target = require_attr(&e, "target", "edge")?;
                scope = Scope::Edge(topo.add_edge(&source, &target, EdgeData::default()));
            }
            Event::Empty(e) if e.local_name().as_ref() == b"edge" => {
                let source = require_attr(&e, "source", "edge")?;
                let target = require_attr(&e, "target", "edge")?;
                topo.add_edge(&source, &target, EdgeData::default());
            }
            Event::Start(e) if e.local_name().as_ref() == b"data" => {
                data_key = Some(require_attr(&e, "key", "data")?);
                data_text.clear();
            }
            Event::Text(t) => {
                if data_key.is_some() {
                    data_text.push_str(&t.xml_content().map_err(|e| e.to_string())?);
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"data" => {
                if let Some(key_id) = data_key.take() {
                    // Resolve the declared attribute name; unknown key ids
                    // fall back to the raw id.
                    let name = keys.get(&key_id).map(|s| s.as_str()).unwrap_or(&key_id);
                    match scope {
                        Scope::Node(idx) => topo.set_node_attr(idx, name, &data_text),
                        Scope::Edge(idx) => topo.set_edge_attr(idx, name, &data_text),
                        Scope::None => {}
                    }
                }
            }
            Event::End(e)
                if e.local_name().as_ref() == b"node" || e.local_name().as_ref() == b"edge" =>
            {
                scope = Scope::None;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err("missing <graphml> root element".to_string());
    }
    Ok(topo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
