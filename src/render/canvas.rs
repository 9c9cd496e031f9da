//! Canvas — explicit raster drawing surface.
//!
//! Wraps a `tiny_skia::Pixmap` so the draw phase threads one canvas value
//! through every call instead of mutating ambient figure state. Draws
//! outside the pixmap bounds clip silently.

use std::path::Path;

use tiny_skia::{
    Color, FillRule, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Stroke, StrokeDash,
    Transform,
};

pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Create a white canvas of the given pixel size.
    pub fn new(width: u32, height: u32) -> Result<Self, String> {
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| format!("invalid canvas size {width}x{height}"))?;
        pixmap.fill(Color::WHITE);
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill a circle marker at (cx, cy).
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let mut pb = PathBuilder::new();
        pb.push_circle(cx, cy, radius);
        let Some(path) = pb.finish() else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Stroke a straight line segment, optionally dashed.
    pub fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
        dash: Option<&[f32]>,
    ) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.0, from.1);
        pb.line_to(to.0, to.1);
        let Some(path) = pb.finish() else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        let stroke = Stroke {
            width,
            dash: dash.and_then(|d| StrokeDash::new(d.to_vec(), 0.0)),
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Read back one pixel (used by tests).
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremultipliedColorU8> {
        self.pixmap.pixel(x, y)
    }

    /// Encode the canvas as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<(), String> {
        self.pixmap.save_png(path).map_err(|e| e.to_string())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
