// File: crates/arcstrip-render-skia/src/text.rs
// Summary: Multi-line label shaping with Skia textlayout, placed by anchor fractions.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    /// Lines are centered against each other; the paragraph is as wide as its longest line.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Center);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        let width = paragraph.longest_line().ceil() + 1.0;
        paragraph.layout(width);
        paragraph
    }

    /// Draw with the block's `(ax, ay)` fraction point at `(x, y)`.
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        (ax, ay): (f32, f32),
        size: f32,
        color: skia::Color,
    ) {
        let p = self.layout(text, size, color);
        let w = p.max_width();
        let h = p.height();
        p.paint(canvas, (x - ax * w, y - ay * h));
    }
}
