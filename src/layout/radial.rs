//! Radial layout — concentric rings by BFS depth.
//!
//! The highest-degree node sits at the center; every other node is placed on
//! a ring whose radius is its BFS distance from the center. Nodes not
//! reachable from the center land on one outermost ring.

use std::collections::{HashMap, VecDeque};

use petgraph::graph::NodeIndex;

use super::{Layout, Point};
use crate::topology::Topology;

pub fn layout(topo: &Topology) -> Layout {
    let n = topo.node_count();
    if n == 0 {
        return Layout::new();
    }

    let center = topo
        .node_indices()
        .max_by_key(|&idx| (topo.degree(idx), std::cmp::Reverse(idx.index())))
        .expect("non-empty topology");

    // BFS depth from the center node.
    let mut depth: HashMap<NodeIndex, usize> = HashMap::new();
    depth.insert(center, 0);
    let mut queue = VecDeque::from([center]);
    while let Some(idx) = queue.pop_front() {
        let d = depth[&idx];
        for neighbor in topo.neighbors(idx) {
            if !depth.contains_key(&neighbor) {
                depth.insert(neighbor, d + 1);
                queue.push_back(neighbor);
            }
        }
    }

    // Disconnected nodes share the ring beyond the deepest reached one.
    let max_depth = depth.values().copied().max().unwrap_or(0);
    let outer = max_depth + 1;
    let mut rings: Vec<Vec<NodeIndex>> = vec![Vec::new(); outer + 1];
    for idx in topo.node_indices() {
        let d = depth.get(&idx).copied().unwrap_or(outer);
        rings[d].push(idx);
    }

    let mut positions = Layout::new();
    for (radius, ring) in rings.iter().enumerate() {
        // Stagger ring start angles so spokes do not all line up.
        let offset = radius as f32 * 0.5;
        for (i, &idx) in ring.iter().enumerate() {
            let angle = offset + 2.0 * std::f32::consts::PI * i as f32 / ring.len() as f32;
            positions.insert(
                idx,
                Point::new(radius as f32 * angle.cos(), radius as f32 * angle.sin()),
            );
        }
    }
    positions
}

// ─── Tests ───────────────────────────────────────────────────────────────────
