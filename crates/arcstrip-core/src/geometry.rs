// File: crates/arcstrip-core/src/geometry.rs
// Summary: Points, rects and the single angle convention shared by layout, hit testing and labels.
// Convention:
// - Local chart frame has the pie center at the origin and y increasing downward (screen space).
// - Angles are degrees, counter-clockwise on screen, measured from the positive x-axis.
//   A direction at angle `a` is therefore (cos a, -sin a).

use std::ops::{Add, Mul, Sub};

/// A point or vector in screen pixels (y down).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Screen point at `radius` along `angle_deg` from `self`.
    pub fn polar(self, radius: f64, angle_deg: f64) -> Point {
        self + direction(angle_deg) * radius
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

/// Axis-aligned rectangle in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Wrap an angle into [0, 360).
#[inline]
pub fn normalize_deg(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Unit screen vector for `angle_deg`.
#[inline]
pub fn direction(angle_deg: f64) -> Point {
    let r = angle_deg.to_radians();
    Point::new(r.cos(), -r.sin())
}

/// Angle of a local-frame point, in [0, 360).
#[inline]
pub fn screen_angle(p: Point) -> f64 {
    normalize_deg((-p.y).atan2(p.x).to_degrees())
}

/// Points along an arc of `radius` around `center`, from `start_deg` sweeping `sweep_deg`
/// (negative sweeps run clockwise). Both endpoints are included.
pub fn arc_points(center: Point, radius: f64, start_deg: f64, sweep_deg: f64, tolerance: f64) -> Vec<Point> {
    let steps = arc_segments(radius, sweep_deg.abs(), tolerance);
    (0..=steps)
        .map(|i| center.polar(radius, start_deg + sweep_deg * i as f64 / steps as f64))
        .collect()
}

/// Segment count so each chord stays within `tolerance` of the true arc.
fn arc_segments(radius: f64, sweep_deg: f64, tolerance: f64) -> usize {
    if radius <= tolerance || sweep_deg <= 0.0 {
        return 1;
    }
    // sagitta: r * (1 - cos(theta/2)) <= tol
    let max_step = 2.0 * (1.0 - tolerance / radius).acos().to_degrees();
    let n = (sweep_deg / max_step.max(1e-3)).ceil();
    clamp(n, 1.0, 4096.0) as usize
}
