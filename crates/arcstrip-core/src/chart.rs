// File: crates/arcstrip-core/src/chart.rs
// Summary: Pie chart controller: owns data, config, style and hover state; caches layout; paints via `Painter`.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ChartConfig;
use crate::error::Result;
use crate::geometry::Point;
use crate::hit::hit_test_pie;
use crate::interaction::{transition, HoverChange, InteractionState, PointerEvent};
use crate::paint::Painter;
use crate::pie::{layout_pie, PieData, PieLayout, Slice, SliceShape};
use crate::theme::{Rgba, Style};

/// Notifications for the host application, carrying `(index, label, value)`.
#[derive(Clone, Debug, PartialEq)]
pub enum SliceEvent {
    Hovered { index: usize, label: String, value: f64 },
    Unhovered { index: usize },
    Clicked { index: usize, label: String, value: f64 },
}

/// Result of feeding one pointer event to the chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerOutcome {
    pub events: Vec<SliceEvent>,
    pub redraw: bool,
}

pub struct PieChart {
    data: PieData,
    config: ChartConfig,
    style: Style,
    state: InteractionState,
    rng: StdRng,
    /// Seed of the label-radius jitter for the current data set, so labels hold
    /// still across hover changes.
    label_seed: u64,
    cached: Option<PieLayout>,
}

impl PieChart {
    pub fn new(config: ChartConfig, style: Style) -> Result<Self> {
        Self::with_rng(config, style, StdRng::from_entropy())
    }

    /// Deterministic label placement for a given `seed`.
    pub fn with_seed(config: ChartConfig, style: Style, seed: u64) -> Result<Self> {
        Self::with_rng(config, style, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: ChartConfig, style: Style, mut rng: StdRng) -> Result<Self> {
        let config = config.validate()?;
        let label_seed = rng.gen();
        Ok(Self {
            data: PieData::default(),
            config,
            style,
            state: InteractionState::default(),
            rng,
            label_seed,
            cached: None,
        })
    }

    pub fn data(&self) -> &PieData { &self.data }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn style(&self) -> &Style { &self.style }
    pub fn state(&self) -> InteractionState { self.state }

    /// Replace the data set. Hover is reset and labels get a fresh placement.
    pub fn set_data(&mut self, data: PieData) {
        debug!("pie data set: {} values", data.len());
        self.data = data;
        self.state = InteractionState::default();
        self.label_seed = self.rng.gen();
        self.cached = None;
    }

    pub fn set_values(&mut self, values: impl IntoIterator<Item = f64>) -> Result<()> {
        self.set_data(PieData::new(values)?);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.set_data(PieData::default());
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.config = self.config.with_radius(radius)?;
        self.cached = None;
        Ok(())
    }

    /// Start angle in degrees, wrapped into [0, 360).
    pub fn set_start_angle(&mut self, degrees: f64) -> Result<()> {
        self.config = self.config.with_start_angle(degrees)?;
        self.cached = None;
        Ok(())
    }

    pub fn set_donut_ratio(&mut self, ratio: f64) -> Result<()> {
        self.config = self.config.with_donut_ratio(ratio)?;
        self.cached = None;
        Ok(())
    }

    pub fn set_config(&mut self, config: ChartConfig) -> Result<()> {
        self.config = config.validate()?;
        self.cached = None;
        Ok(())
    }

    pub fn set_text_color(&mut self, color: Rgba) {
        self.style.text = color;
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.cached = None;
    }

    /// Current layout, recomputed only after a state change.
    pub fn layout(&mut self) -> &PieLayout {
        if self.cached.is_none() {
            let mut rng = StdRng::seed_from_u64(self.label_seed);
            let layout = layout_pie(&self.data, &self.config, &self.style, self.state.hovered, &mut rng);
            self.cached = Some(layout);
        }
        self.cached.get_or_insert_with(PieLayout::default)
    }

    pub fn hit_test(&self, local: Point) -> Option<usize> {
        hit_test_pie(local, &self.data, &self.config)
    }

    /// Feed a pointer event (local frame). Hover changes recompute the layout.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> PointerOutcome {
        let hit = event.point().and_then(|p| self.hit_test(p));
        let (next, fx) = transition(self.state, event, hit);
        self.state = next;
        if fx.recompute_layout {
            self.cached = None;
        }

        let mut events = Vec::with_capacity(fx.hover_changes.len() + 1);
        for change in &fx.hover_changes {
            match *change {
                HoverChange::Left(index) => events.push(SliceEvent::Unhovered { index }),
                HoverChange::Entered(index) => {
                    if let Some((label, value)) = self.describe(index) {
                        events.push(SliceEvent::Hovered { index, label, value });
                    }
                }
            }
        }
        if let Some(index) = fx.clicked {
            if let Some((label, value)) = self.describe(index) {
                events.push(SliceEvent::Clicked { index, label, value });
            }
        }
        PointerOutcome { events, redraw: fx.redraw }
    }

    fn describe(&self, index: usize) -> Option<(String, f64)> {
        Some((self.data.label(index)?.to_string(), self.data.value(index)?))
    }

    /// Paint with the pie center at `center` (surface pixels).
    pub fn paint(&mut self, painter: &mut dyn Painter, center: Point) {
        let config = self.config;
        let outline = self.style.outline;
        let text = self.style.text;
        let layout = self.layout();

        // earlier slices stack on top of later ones
        for slice in layout.slices.iter().rev() {
            fill_slice(painter, slice, &config, center);
        }
        if let Some(slice) = layout.hovered() {
            if config.hover_outline_width > 0.0 {
                stroke_slice(painter, slice, &config, center, outline);
            }
        }
        for slice in &layout.slices {
            if let Some(label) = &slice.label {
                painter.draw_text(center + label.anchor, &label.text, label.align, text, config.label_font_size);
            }
        }
    }
}

fn fill_slice(painter: &mut dyn Painter, slice: &Slice, config: &ChartConfig, center: Point) {
    let c = center + slice.center_offset;
    match slice.shape {
        SliceShape::FullCircle => painter.fill_circle(c, config.radius, slice.color),
        SliceShape::FullRing { inner_radius } => {
            painter.fill_ring(c, config.radius, inner_radius, slice.color)
        }
        _ => {
            let pts: Vec<Point> = slice
                .outline(config.radius, config.arc_tolerance)
                .into_iter()
                .map(|p| center + p)
                .collect();
            painter.fill_polygon(&pts, slice.color);
        }
    }
}

fn stroke_slice(painter: &mut dyn Painter, slice: &Slice, config: &ChartConfig, center: Point, color: Rgba) {
    let width = config.hover_outline_width;
    let c = center + slice.center_offset;
    match slice.shape {
        SliceShape::FullCircle => painter.stroke_circle(c, config.radius, color, width),
        SliceShape::FullRing { inner_radius } => {
            painter.stroke_circle(c, config.radius, color, width);
            painter.stroke_circle(c, inner_radius, color, width);
        }
        _ => {
            let pts: Vec<Point> = slice
                .outline(config.radius, config.arc_tolerance)
                .into_iter()
                .map(|p| center + p)
                .collect();
            painter.stroke_polygon(&pts, color, width);
        }
    }
}
