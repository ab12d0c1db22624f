// File: crates/arcstrip-core/tests/density.rs
// Purpose: Density-to-opacity curve endpoints, monotonicity and visible-count search.

use arcstrip_core::{alpha_curve, compute_alpha, count_visible, DensityParams};
use proptest::prelude::*;

#[test]
fn endpoints() {
    let p = DensityParams::default();
    assert_eq!(compute_alpha(0, &p), 255);
    assert_eq!(compute_alpha(1, &p), 255);
    assert_eq!(compute_alpha(1000, &p), 20);
    assert_eq!(compute_alpha(50_000, &p), 20);
}

#[test]
fn known_values() {
    let p = DensityParams::default();
    // 235 * 0.5^4 + 20
    assert!((alpha_curve(500, &p) - 34.6875).abs() < 1e-9);
    assert_eq!(compute_alpha(500, &p), 34);
    assert_eq!(compute_alpha(2, &p), 253);
}

#[test]
fn curve_strictly_decreases_until_the_bound() {
    let p = DensityParams::default();
    let mut prev = alpha_curve(1, &p);
    for n in 2..=1000 {
        let a = alpha_curve(n, &p);
        assert!(a < prev, "alpha_curve({n}) = {a} not below {prev}");
        prev = a;
    }
}

#[test]
fn custom_params() {
    let p = DensityParams::new(0, 10, 1.0).unwrap();
    assert!((alpha_curve(5, &p) - 127.5).abs() < 1e-9);
    assert_eq!(compute_alpha(10, &p), 0);

    assert!(DensityParams::new(20, 1, 4.0).is_err());
    assert!(DensityParams::new(20, 1000, 0.0).is_err());
    assert!(DensityParams::new(20, 1000, f64::NAN).is_err());
}

#[test]
fn visible_count_is_inclusive() {
    let ts = [1.0, 2.0, 2.0, 3.0, 5.0];
    assert_eq!(count_visible(&ts, 2.0, 3.0), 3);
    assert_eq!(count_visible(&ts, 0.0, 10.0), 5);
    assert_eq!(count_visible(&ts, 6.0, 7.0), 0);
    assert_eq!(count_visible(&ts, 3.0, 2.0), 0);
    assert_eq!(count_visible(&[], 0.0, 1.0), 0);
    assert_eq!(count_visible(&ts, f64::NAN, 3.0), 0);
}

proptest! {
    #[test]
    fn integer_alpha_never_increases(
        a in 0usize..3000,
        b in 0usize..3000,
        min_alpha in 0u8..=255,
        bound in 2usize..2000,
        exponent in 0.5f64..8.0,
    ) {
        let p = DensityParams::new(min_alpha, bound, exponent).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compute_alpha(lo, &p) >= compute_alpha(hi, &p));
        prop_assert!(compute_alpha(hi, &p) >= min_alpha);
    }
}
