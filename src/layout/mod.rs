//! Layout engine — assigns each node a 2D position in the unit square.
//!
//! Exactly one algorithm runs per invocation, selected by `LayoutAlgorithm`.
//! Every algorithm produces raw coordinates which `compute()` then fits into
//! the unit square; the renderer maps unit coordinates to pixels.

pub mod force;
pub mod radial;

use std::collections::HashMap;

use clap::ValueEnum;
use petgraph::graph::NodeIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::topology::Topology;

// ─── Types ───────────────────────────────────────────────────────────────────

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Node index → position. Consumed by the draw phase, never persisted.
pub type Layout = HashMap<NodeIndex, Point>;

/// Available layout algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LayoutAlgorithm {
    /// Concentric rings around the highest-degree node (BFS depth).
    #[default]
    Radial,
    /// Fruchterman–Reingold force-directed placement.
    Force,
    /// All nodes evenly spaced on one circle.
    Circular,
    /// Seeded uniform-random placement.
    Random,
}

// ─── Entry point ─────────────────────────────────────────────────────────────

/// Compute positions for every node with the selected algorithm and fit the
/// result into the unit square.
pub fn compute(topo: &Topology, algorithm: LayoutAlgorithm, seed: u64) -> Layout {
    let mut layout = match algorithm {
        LayoutAlgorithm::Radial => radial::layout(topo),
        LayoutAlgorithm::Force => force::layout(topo, seed),
        LayoutAlgorithm::Circular => circular(topo),
        LayoutAlgorithm::Random => random(topo, seed),
    };
    fit_unit(&mut layout);
    layout
}

// ─── Simple algorithms ───────────────────────────────────────────────────────

fn circular(topo: &Topology) -> Layout {
    let n = topo.node_count();
    topo.node_indices()
        .enumerate()
        .map(|(i, idx)| {
            let angle = 2.0 * std::f32::consts::PI * i as f32 / n.max(1) as f32;
            (idx, Point::new(angle.cos(), angle.sin()))
        })
        .collect()
}

fn random(topo: &Topology, seed: u64) -> Layout {
    let mut rng = StdRng::seed_from_u64(seed);
    topo.node_indices()
        .map(|idx| (idx, Point::new(rng.r#gen::<f32>(), rng.r#gen::<f32>())))
        .collect()
}

// ─── Normalization ───────────────────────────────────────────────────────────

/// Rescale positions to fill [0, 1] × [0, 1]. Degenerate axes (all nodes at
/// the same coordinate) collapse to 0.5.
fn fit_unit(layout: &mut Layout) {
    if layout.is_empty() {
        return;
    }
    let min_x = layout.values().map(|p| p.x).fold(f32::INFINITY, f32::min);
    let max_x = layout.values().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
    let min_y = layout.values().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = layout.values().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
    let span_x = max_x - min_x;
    let span_y = max_y - min_y;
    for p in layout.values_mut() {
        p.x = if span_x > f32::EPSILON {
            (p.x - min_x) / span_x
        } else {
            0.5
        };
        p.y = if span_y > f32::EPSILON {
            (p.y - min_y) / span_y
        } else {
            0.5
        };
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
