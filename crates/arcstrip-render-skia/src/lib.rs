// File: crates/arcstrip-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for the arcstrip widgets (PNG/RGBA output).

pub mod painter;
pub mod raster;
pub mod text;

pub use painter::SkiaPainter;
pub use raster::{
    render_pie_png_bytes, render_pie_rgba8, render_pie_to_png, render_timedist_png_bytes,
    render_timedist_rgba8, render_timedist_to_png, RenderOptions,
};
pub use text::TextShaper;
