// File: crates/arcstrip-core/src/pie.rs
// Summary: Pie/donut slice layout: angular spans, explode offsets, label anchors, renderable outlines.
// Notes:
// - Angles follow `geometry` (degrees, counter-clockwise on a y-down screen).
// - `span_angles` is the one accumulation walk; hit testing reuses it so boundaries agree.

use log::debug;
use rand::Rng;

use crate::config::{ChartConfig, LabelPlacement};
use crate::error::{ChartError, Result};
use crate::geometry::{arc_points, direction, normalize_deg, Point};
use crate::theme::{Rgba, Style};

/// Validated pie input: values plus per-slice labels, colors and explode factors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PieData {
    values: Vec<f64>,
    labels: Vec<String>,
    colors: Option<Vec<Rgba>>,
    explode: Vec<f64>,
}

impl PieData {
    /// Values must be finite and non-negative, and so must their sum. Labels default
    /// to `Slice {i}`, explode factors to 0 and colors to the style palette.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Result<Self> {
        let values: Vec<f64> = values.into_iter().collect();
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite() || **v < 0.0) {
            log::warn!("rejecting pie value {value} at index {index}");
            return Err(ChartError::InvalidValue { index, value });
        }
        let total: f64 = values.iter().sum();
        if !total.is_finite() {
            log::warn!("rejecting pie values: sum overflows ({} values)", values.len());
            return Err(ChartError::param("values", "sum of values must be finite"));
        }
        let n = values.len();
        Ok(Self {
            values,
            labels: (0..n).map(|i| format!("Slice {i}")).collect(),
            colors: None,
            explode: vec![0.0; n],
        })
    }

    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        check_len("labels", self.values.len(), labels.len())?;
        self.labels = labels;
        Ok(self)
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Rgba>) -> Result<Self> {
        let colors: Vec<Rgba> = colors.into_iter().collect();
        check_len("colors", self.values.len(), colors.len())?;
        self.colors = Some(colors);
        Ok(self)
    }

    pub fn with_explode(mut self, explode: impl IntoIterator<Item = f64>) -> Result<Self> {
        let explode: Vec<f64> = explode.into_iter().collect();
        check_len("explode", self.values.len(), explode.len())?;
        if let Some((index, &value)) = explode.iter().enumerate().find(|(_, e)| !(0.0..=1.0).contains(*e)) {
            return Err(ChartError::InvalidExplode { index, value });
        }
        self.explode = explode;
        Ok(self)
    }

    pub fn values(&self) -> &[f64] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn total(&self) -> f64 { self.values.iter().sum() }

    pub fn value(&self, i: usize) -> Option<f64> { self.values.get(i).copied() }
    pub fn label(&self, i: usize) -> Option<&str> { self.labels.get(i).map(String::as_str) }
    pub fn explode(&self, i: usize) -> f64 { self.explode.get(i).copied().unwrap_or(0.0) }

    /// Explicit color for slice `i`, else the style palette entry.
    pub fn color(&self, i: usize, style: &Style) -> Rgba {
        self.colors
            .as_ref()
            .and_then(|c| c.get(i).copied())
            .unwrap_or_else(|| style.palette_color(i))
    }

    /// Number of slices with a non-zero value.
    pub fn visible_count(&self) -> usize {
        self.values.iter().filter(|v| **v > 0.0).count()
    }
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual { Ok(()) } else { Err(ChartError::LengthMismatch { field, expected, actual }) }
}

/// Walk `values` in order yielding `(index, cum, span)` in degrees, where `cum` is the
/// angle consumed before this slice. Zero values yield a zero span.
///
/// Divides before scaling so values near `f64::MAX` stay finite.
pub fn span_angles(values: &[f64], total: f64) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
    let mut cum = 0.0;
    values.iter().enumerate().map(move |(i, &v)| {
        let span = v / total * 360.0;
        let at = cum;
        cum += span;
        (i, at, span)
    })
}

/// Renderable outline kind of a slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliceShape {
    /// Sector from the (offset) center out to the radius.
    Wedge,
    /// Outer arc forward, inner arc backward.
    AnnularSector { inner_radius: f64 },
    /// Lone non-zero slice: a whole disc instead of a 360 degree arc.
    FullCircle,
    /// Lone non-zero slice in donut mode.
    FullRing { inner_radius: f64 },
}

/// Text placement fractions: (0, 0) puts the text's top-left corner at the anchor,
/// (1, 1) its bottom-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextAnchor {
    pub x: f64,
    pub y: f64,
}

impl TextAnchor {
    pub const CENTER: TextAnchor = TextAnchor { x: 0.5, y: 0.5 };
}

/// Anchor that pushes a label away from the pie for a label at `angle` degrees.
pub fn label_alignment(angle: f64) -> TextAnchor {
    let a = normalize_deg(angle);
    let x = if !(67.5..292.5).contains(&a) {
        0.0
    } else if (112.5..247.5).contains(&a) {
        1.0
    } else {
        0.5
    };
    let y = if (22.5..157.5).contains(&a) {
        1.0
    } else if (202.5..337.5).contains(&a) {
        0.0
    } else {
        0.5
    };
    TextAnchor { x, y }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliceLabel {
    /// Local-frame position (pie center at origin).
    pub anchor: Point,
    pub text: String,
    pub align: TextAnchor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    /// Position in the input sequence.
    pub index: usize,
    pub value: f64,
    pub percent: f64,
    pub color: Rgba,
    pub explode: f64,
    /// Degrees, `config.start_angle + cum` (not wrapped).
    pub start_angle: f64,
    pub span_angle: f64,
    pub mid_angle: f64,
    pub center_offset: Point,
    pub shape: SliceShape,
    pub label: Option<SliceLabel>,
    pub hovered: bool,
}

impl Slice {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.span_angle
    }

    /// Closed polygon of the slice in the local frame (offset applied). Rings come back
    /// as one polygon whose inner loop winds opposite to the outer one.
    pub fn outline(&self, radius: f64, tolerance: f64) -> Vec<Point> {
        let c = self.center_offset;
        match self.shape {
            SliceShape::Wedge => {
                let mut pts = Vec::with_capacity(64);
                pts.push(c);
                pts.extend(arc_points(c, radius, self.start_angle, self.span_angle, tolerance));
                pts
            }
            SliceShape::AnnularSector { inner_radius } => {
                let mut pts = arc_points(c, radius, self.start_angle, self.span_angle, tolerance);
                pts.extend(arc_points(c, inner_radius, self.end_angle(), -self.span_angle, tolerance));
                pts
            }
            SliceShape::FullCircle => {
                let mut pts = arc_points(c, radius, self.start_angle, 360.0, tolerance);
                pts.pop();
                pts
            }
            // keyhole: outer circle forward, then the inner circle backward, joined at the start angle
            SliceShape::FullRing { inner_radius } => {
                let mut pts = arc_points(c, radius, self.start_angle, 360.0, tolerance);
                pts.extend(arc_points(c, inner_radius, self.start_angle, -360.0, tolerance));
                pts
            }
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self.shape, SliceShape::FullCircle | SliceShape::FullRing { .. })
    }
}

/// Ordered slice geometry for one render. Empty means "clear the chart".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PieLayout {
    pub slices: Vec<Slice>,
    pub total: f64,
}

impl PieLayout {
    pub fn is_empty(&self) -> bool { self.slices.is_empty() }

    /// Slice for input index `index`, if it was laid out.
    pub fn slice(&self, index: usize) -> Option<&Slice> {
        self.slices.iter().find(|s| s.index == index)
    }

    pub fn hovered(&self) -> Option<&Slice> {
        self.slices.iter().find(|s| s.hovered)
    }

    pub fn span_sum(&self) -> f64 {
        self.slices.iter().map(|s| s.span_angle).sum()
    }
}

/// Lay out `data` as pie slices.
///
/// Zero-value slices are skipped; when exactly one value is non-zero it becomes a
/// full circle (or ring) labeled at the start angle. `hovered` only counts when it
/// names a non-zero slice. `rng` drives jittered label radii and is not consulted
/// while a slice is hovered.
pub fn layout_pie<R: Rng + ?Sized>(
    data: &PieData,
    config: &ChartConfig,
    style: &Style,
    hovered: Option<usize>,
    rng: &mut R,
) -> PieLayout {
    let total = data.total();
    if data.is_empty() || !(total > 0.0 && total.is_finite()) {
        debug!("pie layout cleared (n={}, total={total})", data.len());
        return PieLayout { slices: Vec::new(), total: 0.0 };
    }

    let hovered = hovered.filter(|&h| data.value(h).is_some_and(|v| v > 0.0));
    let visible = data.visible_count();
    let full = visible == 1;
    let mut slices = Vec::with_capacity(visible);

    for (index, cum, span) in span_angles(data.values(), total) {
        if span == 0.0 {
            continue;
        }
        let value = data.values()[index];
        let explode = data.explode(index);
        let is_hovered = hovered == Some(index);
        let label_factor = match (hovered, config.label_placement) {
            (Some(_), _) => config.hover_label_factor,
            (None, LabelPlacement::Fixed(f)) => f,
            (None, LabelPlacement::Jittered { min, max }) => rng.gen_range(min..=max),
        };
        let name = data.label(index).unwrap_or_default();

        let (start_angle, span_angle, mid_angle, shape, text, align) = if full {
            let shape = if config.is_donut() {
                SliceShape::FullRing { inner_radius: config.inner_radius() }
            } else {
                SliceShape::FullCircle
            };
            let a = config.start_angle;
            (a, 360.0, a, shape, format!("{name}\n100%"), TextAnchor::CENTER)
        } else {
            let start = config.start_angle + cum;
            let mid = start + span / 2.0;
            let shape = if config.is_donut() {
                SliceShape::AnnularSector { inner_radius: config.inner_radius() }
            } else {
                SliceShape::Wedge
            };
            let percent = value / total * 100.0;
            (start, span, mid, shape, format!("{name}\n{percent:.1}%"), label_alignment(mid))
        };

        let mut offset_len = explode * config.explode_scale;
        if is_hovered && visible > 1 {
            offset_len += config.hover_explode_bonus;
        }
        let center_offset = direction(mid_angle) * offset_len;

        let show_label = match hovered {
            Some(h) => h == index,
            None => span_angle >= config.min_label_span,
        };
        let label = show_label.then(|| SliceLabel {
            anchor: center_offset.polar(config.radius * label_factor, mid_angle),
            text,
            align,
        });

        slices.push(Slice {
            index,
            value,
            percent: value / total * 100.0,
            color: data.color(index, style),
            explode,
            start_angle,
            span_angle,
            mid_angle,
            center_offset,
            shape,
            label,
            hovered: is_hovered,
        });
    }

    debug!("pie layout: {} slices, total={total}, hovered={hovered:?}", slices.len());
    PieLayout { slices, total }
}
