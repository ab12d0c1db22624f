// File: crates/arcstrip-core/src/view.rs
// Summary: Visible horizontal range of the time strip with pan/zoom helpers and limit clamping.

/// Visible x interval, seconds. Always `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XRange {
    pub min: f64,
    pub max: f64,
}

impl XRange {
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b { Self { min: a, max: b } } else { Self { min: b, max: a } }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn center(&self) -> f64 { (self.min + self.max) * 0.5 }

    /// Grow by `fraction` of the span on each side.
    pub fn padded(&self, fraction: f64) -> Self {
        let pad = self.span() * fraction;
        Self { min: self.min - pad, max: self.max + pad }
    }

    /// Shift by a pixel drag of `dx` on a plot `width_px` wide (dragging right moves the view left).
    pub fn pan_by_pixels(&self, dx: f64, width_px: f64) -> Self {
        let w = width_px.max(1.0);
        let shift = -dx / w * self.span();
        Self { min: self.min + shift, max: self.max + shift }
    }

    /// Zoom around the data value under `cursor_x`. Positive `scroll` zooms in.
    pub fn zoom_at_pixel(&self, scroll: f64, cursor_x: f64, width_px: f64) -> Self {
        let w = width_px.max(1.0);
        let cx = cursor_x.clamp(0.0, w);
        let span = self.span();
        let wx = self.min + cx / w * span;
        let factor = (1.0 - scroll).clamp(0.1, 10.0);
        let ns = span * factor;
        let rx = if span > 0.0 { (wx - self.min) / span } else { 0.5 };
        let min = wx - rx * ns;
        Self { min, max: min + ns }
    }
}

/// Pan/zoom bounds for the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewLimits {
    pub x_min: f64,
    pub x_max: f64,
    pub min_range: f64,
    pub max_range: f64,
}

impl ViewLimits {
    pub fn unbounded() -> Self {
        Self {
            x_min: f64::NEG_INFINITY,
            x_max: f64::INFINITY,
            min_range: 0.0,
            max_range: f64::INFINITY,
        }
    }

    /// Bring `r` within the limits: span first (around its center), then position.
    pub fn clamp(&self, r: XRange) -> XRange {
        let room = self.x_max - self.x_min;
        let max_span = self.max_range.min(room);
        let span = r.span().max(self.min_range).min(max_span.max(self.min_range));
        let half = span * 0.5;
        let mut min = r.center() - half;
        let mut max = r.center() + half;
        if min < self.x_min {
            min = self.x_min;
            max = min + span;
        }
        if max > self.x_max {
            max = self.x_max;
            min = max - span;
        }
        XRange { min, max }
    }
}

impl Default for ViewLimits {
    fn default() -> Self { Self::unbounded() }
}
