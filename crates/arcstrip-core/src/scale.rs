// File: crates/arcstrip-core/src/scale.rs
// Summary: Linear data <-> pixel transform used to place time-strip markers and ticks.

/// Maps a data interval onto a pixel interval. The pixel interval may be inverted
/// (e.g. a y axis growing upward on a y-down surface).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f64,
    pub p1: f64,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, p0: f64, p1: f64) -> Self {
        let mut s = Self { d0, d1, p0, p1 };
        if (s.d1 - s.d0).abs() < 1e-12 { s.d1 = s.d0 + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.p0 + (v - self.d0) / (self.d1 - self.d0) * (self.p1 - self.p0)
    }
}
