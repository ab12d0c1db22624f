// File: crates/arcstrip-render-skia/src/raster.rs
// Summary: Headless rendering of the pie chart and time strip to PNG bytes, files or RGBA buffers.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use arcstrip_core::{PieChart, Rect, Rgba, TimeDistribution};
use log::debug;
use skia_safe as skia;

use crate::painter::{to_color, SkiaPainter};
use crate::text::TextShaper;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Overrides the widget style's background.
    pub background: Option<Rgba>,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: 640, height: 640, background: None, draw_labels: true }
    }
}

impl RenderOptions {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, ..Self::default() }
    }

    fn rect(&self) -> Rect {
        Rect::from_ltwh(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Clear a raster surface and run `draw` on it.
fn draw_surface(
    opts: &RenderOptions,
    background: Rgba,
    draw: impl FnOnce(&mut SkiaPainter<'_>, Rect),
) -> Result<skia::Surface> {
    if opts.width <= 0 || opts.height <= 0 {
        return Err(anyhow!("invalid surface size {}x{}", opts.width, opts.height));
    }
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;
    let shaper = opts.draw_labels.then(TextShaper::new);
    {
        let canvas = surface.canvas();
        canvas.clear(to_color(opts.background.unwrap_or(background)));
        let mut painter = SkiaPainter::new(canvas, shaper.as_ref());
        draw(&mut painter, opts.rect());
    }
    Ok(surface)
}

fn encode_png(mut surface: skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    debug!("encoded {}x{} png, {} bytes", image.width(), image.height(), data.as_bytes().len());
    Ok(data.as_bytes().to_vec())
}

/// Unpremultiplied RGBA8 pixels as `(pixels, width, height, stride)`.
fn read_rgba8(mut surface: skia::Surface) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(anyhow!("reading back {w}x{h} pixels failed"));
    }
    Ok((pixels, w as u32, h as u32, stride))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

fn pie_surface(chart: &mut PieChart, opts: &RenderOptions) -> Result<skia::Surface> {
    let background = chart.style().background;
    draw_surface(opts, background, |painter, rect| chart.paint(painter, rect.center()))
}

fn timedist_surface(strip: &TimeDistribution, opts: &RenderOptions) -> Result<skia::Surface> {
    draw_surface(opts, strip.style().background, |painter, rect| strip.paint(painter, rect))
}

/// Pie centered on the surface.
pub fn render_pie_png_bytes(chart: &mut PieChart, opts: &RenderOptions) -> Result<Vec<u8>> {
    encode_png(pie_surface(chart, opts)?)
}

pub fn render_pie_to_png(chart: &mut PieChart, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
    write_file(path.as_ref(), &render_pie_png_bytes(chart, opts)?)
}

pub fn render_pie_rgba8(chart: &mut PieChart, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    read_rgba8(pie_surface(chart, opts)?)
}

/// Strip filling the surface, axis along the bottom.
pub fn render_timedist_png_bytes(strip: &TimeDistribution, opts: &RenderOptions) -> Result<Vec<u8>> {
    encode_png(timedist_surface(strip, opts)?)
}

pub fn render_timedist_to_png(strip: &TimeDistribution, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
    write_file(path.as_ref(), &render_timedist_png_bytes(strip, opts)?)
}

pub fn render_timedist_rgba8(strip: &TimeDistribution, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    read_rgba8(timedist_surface(strip, opts)?)
}
