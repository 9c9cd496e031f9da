//! Draw phase — composites classified edges and nodes onto one canvas.
//!
//! Layer order: plain edges, then switch-switch edges, then plain nodes,
//! then switch nodes, so switches stay visible on dense topologies.

pub mod canvas;

pub use canvas::Canvas;

use tiny_skia::Color;

use crate::classify::{EdgeClasses, NodeClasses};
use crate::layout::{Layout, Point};
use crate::topology::Topology;

// ─── Style ───────────────────────────────────────────────────────────────────

/// Visual styling for the two node classes and two edge classes.
pub struct Style {
    pub switch_color: Color,
    pub other_color: Color,
    pub switch_radius: f32,
    pub other_radius: f32,
    pub edge_width: f32,
    pub switch_edge_dash: Vec<f32>,
    /// Pixels kept clear around the drawing area.
    pub margin: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            switch_color: Color::from_rgba8(255, 0, 0, 255),
            other_color: Color::from_rgba8(0, 0, 255, 255),
            switch_radius: 12.0,
            other_radius: 7.5,
            edge_width: 3.0,
            switch_edge_dash: vec![9.0, 6.0],
            margin: 40.0,
        }
    }
}

// ─── Draw phase ──────────────────────────────────────────────────────────────

/// Draw the full topology onto the canvas.
///
/// Every node present in `layout` is drawn; nodes the layout does not cover
/// are skipped (the layout engine positions all nodes, so in practice none
/// are).
pub fn draw_topology(
    canvas: &mut Canvas,
    topo: &Topology,
    layout: &Layout,
    nodes: &NodeClasses,
    edges: &EdgeClasses,
    style: &Style,
) {
    // Unit-square layout point → pixel coordinates inside the margin.
    let margin = style.margin;
    let w = canvas.width() as f32 - 2.0 * margin;
    let h = canvas.height() as f32 - 2.0 * margin;
    let place = move |p: Point| (margin + p.x * w, margin + p.y * h);

    let endpoint_px = |edge| {
        let (s, t) = topo.edge_endpoints(edge);
        match (layout.get(&s), layout.get(&t)) {
            (Some(&a), Some(&b)) => Some((place(a), place(b))),
            _ => None,
        }
    };

    for &edge in &edges.others {
        if let Some((from, to)) = endpoint_px(edge) {
            canvas.stroke_line(from, to, style.edge_width, style.other_color, None);
        }
    }
    for &edge in &edges.switch_links {
        if let Some((from, to)) = endpoint_px(edge) {
            canvas.stroke_line(
                from,
                to,
                style.edge_width,
                style.switch_color,
                Some(&style.switch_edge_dash),
            );
        }
    }

    for &node in &nodes.others {
        if let Some(&p) = layout.get(&node) {
            let (x, y) = place(p);
            canvas.fill_circle(x, y, style.other_radius, style.other_color);
        }
    }
    for &node in &nodes.switches {
        if let Some(&p) = layout.get(&node) {
            let (x, y) = place(p);
            canvas.fill_circle(x, y, style.switch_radius, style.switch_color);
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
