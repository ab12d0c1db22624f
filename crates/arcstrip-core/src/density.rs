// File: crates/arcstrip-core/src/density.rs
// Summary: Marker opacity from the number of points in view (power-law easing) and visible-count search.

use crate::error::{ChartError, Result};

/// Tunables of the density-to-opacity curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityParams {
    /// Opacity once `count_bound` points are visible.
    pub min_alpha: u8,
    /// Visible count at which opacity bottoms out.
    pub count_bound: usize,
    /// Steepness; larger keeps markers opaque longer, then drops faster near the bound.
    pub exponent: f64,
}

impl Default for DensityParams {
    fn default() -> Self {
        Self { min_alpha: 20, count_bound: 1000, exponent: 4.0 }
    }
}

impl DensityParams {
    pub fn new(min_alpha: u8, count_bound: usize, exponent: f64) -> Result<Self> {
        if count_bound < 2 {
            return Err(ChartError::param("count_bound", format!("must be >= 2, got {count_bound}")));
        }
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(ChartError::param("exponent", format!("must be finite and > 0, got {exponent}")));
        }
        Ok(Self { min_alpha, count_bound, exponent })
    }
}

/// Continuous opacity for `visible` points, in `[min_alpha, 255]`.
///
/// Strictly decreasing between 1 and `count_bound`.
pub fn alpha_curve(visible: usize, params: &DensityParams) -> f64 {
    let min = f64::from(params.min_alpha);
    if visible <= 1 {
        return 255.0;
    }
    if visible >= params.count_bound {
        return min;
    }
    let bound = params.count_bound as f64;
    let remaining = bound - visible as f64;
    (255.0 - min) / bound.powf(params.exponent) * remaining.powf(params.exponent) + min
}

/// Opacity (0..=255) for `visible` points; the curve truncated toward zero.
pub fn compute_alpha(visible: usize, params: &DensityParams) -> u8 {
    alpha_curve(visible, params).clamp(0.0, 255.0) as u8
}

/// Points of the ascending slice `sorted` inside `[min, max]` (both inclusive).
pub fn count_visible(sorted: &[f64], min: f64, max: f64) -> usize {
    if !(min <= max) {
        return 0;
    }
    let left = sorted.partition_point(|&t| t < min);
    let right = sorted.partition_point(|&t| t <= max);
    right.saturating_sub(left)
}
