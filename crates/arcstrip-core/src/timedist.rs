// File: crates/arcstrip-core/src/timedist.rs
// Summary: Event-time scatter strip controller: sorted timestamps, jitter, view limits, density-driven marker alpha.

use chrono::{DateTime, TimeZone};
use log::{debug, warn};
use rand::Rng;

use crate::config::TimeDistConfig;
use crate::density::{compute_alpha, count_visible, DensityParams};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::paint::Painter;
use crate::pie::TextAnchor;
use crate::scale::LinearScale;
use crate::theme::{Rgba, Style};
use crate::time_axis::{Tick, TimeAxis};
use crate::view::{ViewLimits, XRange};

/// Vertical extent of the strip in data units; markers are jittered inside it.
const Y_RANGE: (f64, f64) = (-1.0, 1.0);

/// Outcome of a view change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewUpdate {
    pub view: XRange,
    pub visible: usize,
    pub alpha: u8,
    pub redraw: bool,
}

pub struct TimeDistribution {
    config: TimeDistConfig,
    density: DensityParams,
    style: Style,
    axis: TimeAxis,
    /// Ascending.
    timestamps: Vec<f64>,
    /// Vertical jitter per timestamp (same order).
    offsets: Vec<f64>,
    data_range: Option<XRange>,
    limits: ViewLimits,
    view: XRange,
    visible: usize,
    alpha: u8,
}

impl TimeDistribution {
    pub fn new(config: TimeDistConfig, density: DensityParams, style: Style) -> Result<Self> {
        Ok(Self {
            config: config.validate()?,
            density,
            style,
            axis: TimeAxis::utc(),
            timestamps: Vec::new(),
            offsets: Vec::new(),
            data_range: None,
            limits: ViewLimits::unbounded(),
            view: XRange::new(0.0, 1.0),
            visible: 0,
            alpha: 255,
        })
    }

    pub fn with_axis(mut self, axis: TimeAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn timestamps(&self) -> &[f64] { &self.timestamps }
    pub fn data_range(&self) -> Option<XRange> { self.data_range }
    pub fn limits(&self) -> ViewLimits { self.limits }
    pub fn view(&self) -> XRange { self.view }
    pub fn visible(&self) -> usize { self.visible }
    pub fn alpha(&self) -> u8 { self.alpha }
    pub fn axis(&self) -> TimeAxis { self.axis }
    pub fn style(&self) -> &Style { &self.style }
    pub fn config(&self) -> &TimeDistConfig { &self.config }
    pub fn density(&self) -> DensityParams { self.density }

    /// Marker brush color: style primary with the density alpha.
    pub fn marker_color(&self) -> Rgba {
        self.style.primary.with_alpha(self.alpha)
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn set_density(&mut self, density: DensityParams) -> ViewUpdate {
        self.density = density;
        self.set_view(self.view)
    }

    /// Rebuild from `timestamps` (seconds since epoch, any order). Non-finite entries
    /// are dropped. Jitter is drawn from `rng`. Resets limits and view to the data.
    pub fn set_data<R: Rng + ?Sized>(&mut self, timestamps: impl IntoIterator<Item = f64>, rng: &mut R) -> ViewUpdate {
        let mut ts: Vec<f64> = Vec::new();
        let mut dropped = 0usize;
        for t in timestamps {
            if t.is_finite() { ts.push(t) } else { dropped += 1 }
        }
        if dropped > 0 {
            warn!("dropped {dropped} non-finite timestamps");
        }
        if ts.is_empty() {
            return self.clear();
        }
        ts.sort_by(f64::total_cmp);

        let first = ts[0];
        let last = ts[ts.len() - 1];
        let data = if last > first {
            XRange::new(first, last)
        } else {
            let pad = self.config.single_point_padding;
            XRange::new(first - pad, first + pad)
        };
        let tolerance = data.span() * self.config.limit_tolerance;
        self.limits = ViewLimits {
            x_min: data.min - tolerance,
            x_max: data.max + tolerance,
            min_range: self.config.min_range,
            max_range: data.span() * self.config.max_range_factor,
        };

        let j = self.config.jitter;
        self.offsets = ts.iter().map(|_| rng.gen_range(-j..=j)).collect();
        self.timestamps = ts;
        self.data_range = Some(data);
        debug!("time strip data: {} points over [{}, {}]", self.timestamps.len(), data.min, data.max);

        self.set_view(data.padded(self.config.view_padding))
    }

    /// Convenience for calendar datetimes.
    pub fn set_datetimes<Tz: TimeZone, R: Rng + ?Sized>(
        &mut self,
        datetimes: impl IntoIterator<Item = DateTime<Tz>>,
        rng: &mut R,
    ) -> ViewUpdate {
        let ts = datetimes
            .into_iter()
            .map(|dt| dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) * 1e-9);
        self.set_data(ts, rng)
    }

    pub fn clear(&mut self) -> ViewUpdate {
        self.timestamps.clear();
        self.offsets.clear();
        self.data_range = None;
        self.limits = ViewLimits::unbounded();
        self.set_view(self.view)
    }

    /// Move the view (clamped to the limits) and recompute the density alpha.
    pub fn set_view(&mut self, range: XRange) -> ViewUpdate {
        self.view = self.limits.clamp(range);
        self.visible = count_visible(&self.timestamps, self.view.min, self.view.max);
        let alpha = compute_alpha(self.visible, &self.density);
        if alpha != self.alpha {
            debug!("marker alpha {} -> {alpha} ({} visible)", self.alpha, self.visible);
        }
        self.alpha = alpha;
        ViewUpdate { view: self.view, visible: self.visible, alpha, redraw: true }
    }

    pub fn pan_by_pixels(&mut self, dx: f64, width_px: f64) -> ViewUpdate {
        self.set_view(self.view.pan_by_pixels(dx, width_px))
    }

    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, width_px: f64) -> ViewUpdate {
        self.set_view(self.view.zoom_at_pixel(scroll, cursor_x, width_px))
    }

    /// Ticks for the current view.
    pub fn ticks(&self) -> Vec<Tick> {
        self.axis.ticks(self.view.min, self.view.max)
    }

    /// `(timestamp, jitter)` pairs inside the current view.
    pub fn visible_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let lo = self.timestamps.partition_point(|&t| t < self.view.min);
        let hi = self.timestamps.partition_point(|&t| t <= self.view.max);
        self.timestamps[lo..hi]
            .iter()
            .copied()
            .zip(self.offsets[lo..hi].iter().copied())
    }

    /// Paint markers and the bottom time axis into `rect`.
    pub fn paint(&self, painter: &mut dyn Painter, rect: Rect) {
        let plot_bottom = rect.bottom - self.config.axis_height;
        let sx = LinearScale::new(self.view.min, self.view.max, rect.left, rect.right);
        let sy = LinearScale::new(Y_RANGE.0, Y_RANGE.1, plot_bottom, rect.top);

        let color = self.marker_color();
        let r = self.config.marker_size * 0.5;
        for (t, y) in self.visible_points() {
            painter.fill_circle(Point::new(sx.to_px(t), sy.to_px(y)), r, color);
        }

        let axis_color = self.style.axis_line;
        painter.draw_line(Point::new(rect.left, plot_bottom), Point::new(rect.right, plot_bottom), axis_color, 1.0);
        for tick in self.ticks() {
            let x = sx.to_px(tick.position);
            painter.draw_line(
                Point::new(x, plot_bottom),
                Point::new(x, plot_bottom + self.config.tick_length),
                axis_color,
                1.0,
            );
            if !tick.label.is_empty() {
                painter.draw_text(
                    Point::new(x, plot_bottom + self.config.tick_length + 2.0),
                    &tick.label,
                    TextAnchor { x: 0.5, y: 0.0 },
                    self.style.text,
                    self.config.label_font_size,
                );
            }
        }
    }
}
