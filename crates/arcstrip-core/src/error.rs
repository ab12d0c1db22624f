// File: crates/arcstrip-core/src/error.rs
// Summary: Error type for rejected configuration and input data.

use thiserror::Error;

/// Contract violations caught at construction/configuration time.
///
/// Pure computations (layout, hit testing, ticks, alpha) never return these;
/// degenerate input there yields empty output instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("radius must be finite and > 0, got {0}")]
    InvalidRadius(f64),
    #[error("donut ratio must be in [0, 1), got {0}")]
    InvalidDonutRatio(f64),
    #[error("value at index {index} must be finite and >= 0, got {value}")]
    InvalidValue { index: usize, value: f64 },
    #[error("explode factor at index {index} must be in [0, 1], got {value}")]
    InvalidExplode { index: usize, value: f64 },
    #[error("{field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl ChartError {
    pub(crate) fn param(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
