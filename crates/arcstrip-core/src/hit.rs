// File: crates/arcstrip-core/src/hit.rs
// Summary: Pointer-to-slice hit testing against the unexploded pie geometry.

use log::trace;

use crate::config::ChartConfig;
use crate::geometry::{normalize_deg, screen_angle, Point};
use crate::pie::{span_angles, PieData};

/// Index of the slice under `pointer`, given in the local frame (center at origin, y down).
///
/// Explode offsets are ignored: the test runs against the plain wedge/ring so that a
/// slice moving outward on hover does not change what is under the pointer.
pub fn hit_test_pie(pointer: Point, data: &PieData, config: &ChartConfig) -> Option<usize> {
    let total = data.total();
    if data.is_empty() || !(total > 0.0 && total.is_finite()) {
        return None;
    }

    let distance = pointer.length();
    if !distance.is_finite() || distance > config.radius * config.hit_margin {
        return None;
    }
    if config.is_donut() && distance < config.inner_radius() {
        return None;
    }

    let angle = normalize_deg(screen_angle(pointer) - config.start_angle);
    let hit = span_angles(data.values(), total)
        .find(|&(_, cum, span)| cum <= angle && angle < cum + span)
        .map(|(i, _, _)| i);
    trace!("hit test at ({:.1}, {:.1}) angle={angle:.3} -> {hit:?}", pointer.x, pointer.y);
    hit
}
