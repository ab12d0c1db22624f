// File: crates/arcstrip-core/src/paint.rs
// Summary: Renderer-agnostic painting capability the widgets draw through, plus a recording impl.
// Notes:
// - All coordinates are surface pixels, y down.
// - Backends only fill/stroke what they are given; arc direction and flattening happen in the core.

use crate::geometry::Point;
use crate::pie::TextAnchor;
use crate::theme::Rgba;

pub trait Painter {
    fn fill_polygon(&mut self, points: &[Point], color: Rgba);
    fn stroke_polygon(&mut self, points: &[Point], color: Rgba, width: f64);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, width: f64);
    /// Disc of `outer` radius with a hole of `inner` radius.
    fn fill_ring(&mut self, center: Point, outer: f64, inner: f64, color: Rgba);
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba, width: f64);
    /// `text` may contain `\n`; `anchor` places the text block relative to `pos`.
    fn draw_text(&mut self, pos: Point, text: &str, anchor: TextAnchor, color: Rgba, size: f64);
}

/// One recorded painter call.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    FillPolygon { points: Vec<Point>, color: Rgba },
    StrokePolygon { points: Vec<Point>, color: Rgba, width: f64 },
    FillCircle { center: Point, radius: f64, color: Rgba },
    StrokeCircle { center: Point, radius: f64, color: Rgba, width: f64 },
    FillRing { center: Point, outer: f64, inner: f64, color: Rgba },
    Line { from: Point, to: Point, color: Rgba, width: f64 },
    Text { pos: Point, text: String, anchor: TextAnchor, color: Rgba, size: f64 },
}

/// Painter that keeps every call, for tests and debugging.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    pub ops: Vec<PaintOp>,
}

impl RecordingPainter {
    pub fn new() -> Self { Self::default() }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        self.ops.push(PaintOp::FillPolygon { points: points.to_vec(), color });
    }
    fn stroke_polygon(&mut self, points: &[Point], color: Rgba, width: f64) {
        self.ops.push(PaintOp::StrokePolygon { points: points.to_vec(), color, width });
    }
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.ops.push(PaintOp::FillCircle { center, radius, color });
    }
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, width: f64) {
        self.ops.push(PaintOp::StrokeCircle { center, radius, color, width });
    }
    fn fill_ring(&mut self, center: Point, outer: f64, inner: f64, color: Rgba) {
        self.ops.push(PaintOp::FillRing { center, outer, inner, color });
    }
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        self.ops.push(PaintOp::Line { from, to, color, width });
    }
    fn draw_text(&mut self, pos: Point, text: &str, anchor: TextAnchor, color: Rgba, size: f64) {
        self.ops.push(PaintOp::Text { pos, text: text.to_string(), anchor, color, size });
    }
}
