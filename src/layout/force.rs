//! Fruchterman–Reingold force-directed layout.
//!
//! Nodes repel each other, edges pull their endpoints together, and a
//! cooling temperature caps per-iteration displacement. Seeded so the same
//! input always produces the same picture.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Layout, Point};
use crate::topology::Topology;

const ITERATIONS: usize = 200;

pub fn layout(topo: &Topology, seed: u64) -> Layout {
    let n = topo.node_count();
    if n == 0 {
        return Layout::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let nodes: Vec<NodeIndex> = topo.node_indices().collect();
    let slot: HashMap<NodeIndex, usize> =
        nodes.iter().enumerate().map(|(i, &idx)| (idx, i)).collect();

    let mut pos: Vec<(f32, f32)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();
    let edges: Vec<(usize, usize)> = topo
        .edge_indices()
        .map(|e| {
            let (s, t) = topo.edge_endpoints(e);
            (slot[&s], slot[&t])
        })
        .collect();

    // Ideal pairwise distance for a unit-area canvas.
    let k = (1.0 / n as f32).sqrt();
    let mut temperature = 0.1f32;
    let cooling = temperature / ITERATIONS as f32;

    for _ in 0..ITERATIONS {
        let mut disp = vec![(0.0f32, 0.0f32); n];

        // Repulsion between every pair.
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = separation(pos[i], pos[j], &mut rng);
                let dist = (dx * dx + dy * dy).sqrt();
                let force = k * k / dist;
                disp[i].0 += dx / dist * force;
                disp[i].1 += dy / dist * force;
                disp[j].0 -= dx / dist * force;
                disp[j].1 -= dy / dist * force;
            }
        }

        // Attraction along edges.
        for &(a, b) in &edges {
            if a == b {
                continue;
            }
            let (dx, dy) = separation(pos[a], pos[b], &mut rng);
            let dist = (dx * dx + dy * dy).sqrt();
            let force = dist * dist / k;
            disp[a].0 -= dx / dist * force;
            disp[a].1 -= dy / dist * force;
            disp[b].0 += dx / dist * force;
            disp[b].1 += dy / dist * force;
        }

        // Apply displacement, capped by the current temperature.
        for i in 0..n {
            let (dx, dy) = disp[i];
            let len = (dx * dx + dy * dy).sqrt();
            if len > 0.0 {
                let step = len.min(temperature);
                pos[i].0 += dx / len * step;
                pos[i].1 += dy / len * step;
            }
        }
        temperature -= cooling;
    }

    nodes
        .iter()
        .map(|&idx| {
            let (x, y) = pos[slot[&idx]];
            (idx, Point::new(x, y))
        })
        .collect()
}

/// Vector from `b` to `a`, jittered when the two points coincide so force
/// magnitudes stay finite.
fn separation(a: (f32, f32), b: (f32, f32), rng: &mut StdRng) -> (f32, f32) {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    if dx.abs() < 1e-6 && dy.abs() < 1e-6 {
        (rng.gen_range(-1e-3..1e-3) - 1e-4, rng.gen_range(-1e-3..1e-3) + 1e-4)
    } else {
        (dx, dy)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
