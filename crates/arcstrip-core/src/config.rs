// File: crates/arcstrip-core/src/config.rs
// Summary: Validated per-render configuration for the pie chart and the time strip.

use crate::error::{ChartError, Result};
use crate::geometry::normalize_deg;

/// How far from the (exploded) slice center labels sit, as a multiple of the radius,
/// when no slice is hovered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LabelPlacement {
    /// Every label at the same radius factor.
    Fixed(f64),
    /// Radius factor drawn uniformly from `[min, max]` per slice to spread out
    /// labels of neighboring small slices.
    Jittered { min: f64, max: f64 },
}

impl Default for LabelPlacement {
    fn default() -> Self {
        LabelPlacement::Jittered { min: 1.1, max: 1.4 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    pub radius: f64,
    /// Fraction of `radius` carved out as a hole; 0 draws a full pie.
    pub donut_ratio: f64,
    /// Where the first slice starts, degrees in [0, 360). 90 is 12 o'clock on screen.
    pub start_angle: f64,
    /// Pixels of offset per unit explode factor.
    pub explode_scale: f64,
    /// Extra pixels of offset for the hovered slice.
    pub hover_explode_bonus: f64,
    pub label_placement: LabelPlacement,
    /// Label radius factor used while any slice is hovered.
    pub hover_label_factor: f64,
    /// Slices narrower than this (degrees) get no label unless hovered.
    pub min_label_span: f64,
    /// Outer hit-test bound as a multiple of `radius`.
    pub hit_margin: f64,
    pub hover_outline_width: f64,
    /// Max chord deviation (px) when flattening arcs.
    pub arc_tolerance: f64,
    pub label_font_size: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            radius: 200.0,
            donut_ratio: 0.0,
            start_angle: 90.0,
            explode_scale: 200.0,
            hover_explode_bonus: 12.0,
            label_placement: LabelPlacement::default(),
            hover_label_factor: 1.25,
            min_label_span: 0.0,
            hit_margin: 1.0,
            hover_outline_width: 4.0,
            arc_tolerance: 0.25,
            label_font_size: 10.0,
        }
    }
}

impl ChartConfig {
    pub fn with_radius(mut self, radius: f64) -> Result<Self> {
        self.radius = radius;
        self.validate()
    }

    pub fn with_donut_ratio(mut self, ratio: f64) -> Result<Self> {
        self.donut_ratio = ratio;
        self.validate()
    }

    pub fn with_start_angle(mut self, degrees: f64) -> Result<Self> {
        self.start_angle = degrees;
        self.validate()
    }

    pub fn with_explode_scale(mut self, px: f64) -> Result<Self> {
        self.explode_scale = px;
        self.validate()
    }

    pub fn with_hover_explode_bonus(mut self, px: f64) -> Result<Self> {
        self.hover_explode_bonus = px;
        self.validate()
    }

    pub fn with_label_placement(mut self, placement: LabelPlacement) -> Result<Self> {
        self.label_placement = placement;
        self.validate()
    }

    pub fn with_min_label_span(mut self, degrees: f64) -> Result<Self> {
        self.min_label_span = degrees;
        self.validate()
    }

    /// Check every field, normalizing `start_angle` into [0, 360).
    pub fn validate(mut self) -> Result<Self> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidRadius(self.radius));
        }
        if !(0.0..1.0).contains(&self.donut_ratio) {
            return Err(ChartError::InvalidDonutRatio(self.donut_ratio));
        }
        if !self.start_angle.is_finite() {
            return Err(ChartError::param("start_angle", "must be finite"));
        }
        non_negative("explode_scale", self.explode_scale)?;
        non_negative("hover_explode_bonus", self.hover_explode_bonus)?;
        non_negative("min_label_span", self.min_label_span)?;
        non_negative("hover_outline_width", self.hover_outline_width)?;
        positive("hover_label_factor", self.hover_label_factor)?;
        positive("hit_margin", self.hit_margin)?;
        positive("arc_tolerance", self.arc_tolerance)?;
        positive("label_font_size", self.label_font_size)?;
        match self.label_placement {
            LabelPlacement::Fixed(f) => positive("label_placement", f)?,
            LabelPlacement::Jittered { min, max } => {
                positive("label_placement.min", min)?;
                if !max.is_finite() || max < min {
                    return Err(ChartError::param(
                        "label_placement",
                        format!("band [{min}, {max}] is inverted"),
                    ));
                }
            }
        }
        self.start_angle = normalize_deg(self.start_angle);
        Ok(self)
    }

    pub fn inner_radius(&self) -> f64 {
        self.radius * self.donut_ratio
    }

    pub fn is_donut(&self) -> bool {
        self.donut_ratio > 0.0
    }
}

/// Settings of the time-distribution strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeDistConfig {
    /// Markers are scattered vertically in `[-jitter, jitter]` (data units, view is [-1, 1]).
    pub jitter: f64,
    /// Half-width of the view around a lone timestamp, seconds.
    pub single_point_padding: f64,
    /// Pan limits extend the data extent by this fraction of its span.
    pub limit_tolerance: f64,
    /// Initial view pads the data extent by this fraction on each side.
    pub view_padding: f64,
    /// Widest allowed view as a multiple of the data span.
    pub max_range_factor: f64,
    pub min_range: f64,
    /// Marker diameter, px.
    pub marker_size: f64,
    /// Height reserved for the time axis below the markers, px.
    pub axis_height: f64,
    pub tick_length: f64,
    pub label_font_size: f64,
}

impl Default for TimeDistConfig {
    fn default() -> Self {
        Self {
            jitter: 0.35,
            single_point_padding: 86_400.0 * 5.0,
            limit_tolerance: 0.05,
            view_padding: 0.02,
            max_range_factor: 1.15,
            min_range: 1e-5,
            marker_size: 9.0,
            axis_height: 24.0,
            tick_length: 8.0,
            label_font_size: 10.0,
        }
    }
}

impl TimeDistConfig {
    pub fn validate(self) -> Result<Self> {
        if !(0.0..=1.0).contains(&self.jitter) {
            return Err(ChartError::param("jitter", format!("must be in [0, 1], got {}", self.jitter)));
        }
        positive("single_point_padding", self.single_point_padding)?;
        non_negative("limit_tolerance", self.limit_tolerance)?;
        non_negative("view_padding", self.view_padding)?;
        if !self.max_range_factor.is_finite() || self.max_range_factor < 1.0 {
            return Err(ChartError::param("max_range_factor", "must be >= 1"));
        }
        positive("min_range", self.min_range)?;
        positive("marker_size", self.marker_size)?;
        non_negative("axis_height", self.axis_height)?;
        non_negative("tick_length", self.tick_length)?;
        positive("label_font_size", self.label_font_size)?;
        Ok(self)
    }

    pub fn with_jitter(mut self, jitter: f64) -> Result<Self> {
        self.jitter = jitter;
        self.validate()
    }
}

fn non_negative(name: &'static str, v: f64) -> Result<()> {
    if v.is_finite() && v >= 0.0 { Ok(()) } else { Err(ChartError::param(name, format!("must be finite and >= 0, got {v}"))) }
}

fn positive(name: &'static str, v: f64) -> Result<()> {
    if v.is_finite() && v > 0.0 { Ok(()) } else { Err(ChartError::param(name, format!("must be finite and > 0, got {v}"))) }
}
