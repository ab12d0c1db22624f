// File: crates/arcstrip-render-skia/src/painter.rs
// Summary: `Painter` implementation drawing onto a Skia canvas.

use arcstrip_core::{Painter, Point, Rgba, TextAnchor};
use skia_safe as skia;

use crate::text::TextShaper;

pub(crate) fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn pt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn polygon_path(points: &[Point]) -> Option<skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut path = skia::Path::new();
    path.move_to(pt(*first));
    for p in rest {
        path.line_to(pt(*p));
    }
    path.close();
    Some(path)
}

/// Paints widget output onto `canvas`. Text is skipped when no shaper is given.
pub struct SkiaPainter<'a> {
    canvas: &'a skia::Canvas,
    text: Option<&'a TextShaper>,
}

impl<'a> SkiaPainter<'a> {
    pub fn new(canvas: &'a skia::Canvas, text: Option<&'a TextShaper>) -> Self {
        Self { canvas, text }
    }

    fn fill(color: Rgba) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_color(color));
        paint
    }

    fn stroke(color: Rgba, width: f64) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width as f32);
        paint.set_color(to_color(color));
        paint
    }
}

impl Painter for SkiaPainter<'_> {
    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        if let Some(path) = polygon_path(points) {
            self.canvas.draw_path(&path, &Self::fill(color));
        }
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Rgba, width: f64) {
        if let Some(path) = polygon_path(points) {
            let mut paint = Self::stroke(color, width);
            paint.set_stroke_join(skia::paint::Join::Round);
            self.canvas.draw_path(&path, &paint);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.canvas.draw_circle(pt(center), radius as f32, &Self::fill(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba, width: f64) {
        self.canvas.draw_circle(pt(center), radius as f32, &Self::stroke(color, width));
    }

    fn fill_ring(&mut self, center: Point, outer: f64, inner: f64, color: Rgba) {
        let mut path = skia::Path::new();
        path.add_circle(pt(center), outer as f32, None);
        path.add_circle(pt(center), inner as f32, None);
        path.set_fill_type(skia::PathFillType::EvenOdd);
        self.canvas.draw_path(&path, &Self::fill(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        self.canvas.draw_line(pt(from), pt(to), &Self::stroke(color, width));
    }

    fn draw_text(&mut self, pos: Point, text: &str, anchor: TextAnchor, color: Rgba, size: f64) {
        if let Some(shaper) = self.text {
            shaper.draw_anchored(
                self.canvas,
                text,
                (pos.x as f32, pos.y as f32),
                (anchor.x as f32, anchor.y as f32),
                size as f32,
                to_color(color),
            );
        }
    }
}
