// File: crates/arcstrip-core/src/lib.rs
// Summary: Core library entry point; pie/donut layout and hit testing, time ticks, density alpha, widget controllers.

pub mod chart;
pub mod config;
pub mod density;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod interaction;
pub mod paint;
pub mod pie;
pub mod scale;
pub mod theme;
pub mod time_axis;
pub mod timedist;
pub mod view;

pub use chart::{PieChart, PointerOutcome, SliceEvent};
pub use config::{ChartConfig, LabelPlacement, TimeDistConfig};
pub use density::{alpha_curve, compute_alpha, count_visible, DensityParams};
pub use error::ChartError;
pub use geometry::{Point, Rect};
pub use hit::hit_test_pie;
pub use interaction::{transition, Effects, HoverChange, InteractionState, PointerButton, PointerEvent};
pub use paint::{PaintOp, Painter, RecordingPainter};
pub use pie::{layout_pie, PieData, PieLayout, Slice, SliceLabel, SliceShape, TextAnchor};
pub use theme::{Rgba, Style};
pub use time_axis::{format_ticks, generate_ticks, LabelGranularity, Tick, TickSet, TickStep, TimeAxis};
pub use timedist::{TimeDistribution, ViewUpdate};
pub use view::{ViewLimits, XRange};
