// File: crates/arcstrip-core/tests/hit_test.rs
// Purpose: Hit testing agrees with the layout's boundaries, honors the donut hole and radius bound.

use arcstrip_core::{hit_test_pie, layout_pie, ChartConfig, LabelPlacement, PieData, Point, Style};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config(start: f64) -> ChartConfig {
    ChartConfig::default()
        .with_radius(100.0)
        .and_then(|c| c.with_start_angle(start))
        .and_then(|c| c.with_label_placement(LabelPlacement::Fixed(1.2)))
        .expect("valid config")
}

fn at(angle: f64, r: f64) -> Point {
    Point::ORIGIN.polar(r, angle)
}

#[test]
fn picks_slice_by_angle() {
    let data = PieData::new([10.0, 20.0, 30.0, 40.0]).unwrap();
    let cfg = config(0.0);
    assert_eq!(hit_test_pie(at(10.0, 50.0), &data, &cfg), Some(0));
    assert_eq!(hit_test_pie(at(37.0, 50.0), &data, &cfg), Some(1));
    assert_eq!(hit_test_pie(at(150.0, 50.0), &data, &cfg), Some(2));
    assert_eq!(hit_test_pie(at(359.0, 50.0), &data, &cfg), Some(3));
}

#[test]
fn angles_run_counter_clockwise_on_screen() {
    let data = PieData::new([1.0, 1.0, 1.0, 1.0]).unwrap();
    let cfg = config(0.0);
    // just right of straight up is still the first quarter, just left is the second
    assert_eq!(hit_test_pie(Point::new(1.0, -50.0), &data, &cfg), Some(0));
    assert_eq!(hit_test_pie(Point::new(-1.0, -50.0), &data, &cfg), Some(1));
    // below center is the fourth quarter
    assert_eq!(hit_test_pie(Point::new(1.0, 50.0), &data, &cfg), Some(3));
}

#[test]
fn start_angle_rotates_the_slices() {
    let data = PieData::new([1.0, 3.0]).unwrap();
    let cfg = config(90.0);
    assert_eq!(hit_test_pie(at(135.0, 50.0), &data, &cfg), Some(0));
    assert_eq!(hit_test_pie(at(45.0, 50.0), &data, &cfg), Some(1));
}

#[test]
fn outside_radius_misses_unless_margin_allows() {
    let data = PieData::new([1.0, 1.0]).unwrap();
    let mut cfg = config(0.0);
    assert_eq!(hit_test_pie(at(45.0, 100.5), &data, &cfg), None);
    assert_eq!(hit_test_pie(at(45.0, 99.5), &data, &cfg), Some(0));
    cfg.hit_margin = 1.1;
    assert_eq!(hit_test_pie(at(45.0, 105.0), &data, &cfg), Some(0));
}

#[test]
fn donut_hole_misses() {
    let data = PieData::new([1.0, 1.0]).unwrap();
    let cfg = config(0.0).with_donut_ratio(0.5).unwrap();
    assert_eq!(hit_test_pie(at(45.0, 40.0), &data, &cfg), None);
    assert_eq!(hit_test_pie(at(45.0, 60.0), &data, &cfg), Some(0));
    assert_eq!(hit_test_pie(Point::ORIGIN, &data, &cfg), None);
}

#[test]
fn empty_or_zero_data_never_hits() {
    let cfg = config(0.0);
    let zeros = PieData::new([0.0, 0.0]).unwrap();
    assert_eq!(hit_test_pie(at(10.0, 10.0), &zeros, &cfg), None);
    let empty = PieData::default();
    assert_eq!(hit_test_pie(Point::ORIGIN, &empty, &cfg), None);
}

#[test]
fn lone_slice_covers_every_angle() {
    let data = PieData::new([0.0, 0.0, 7.0]).unwrap();
    let cfg = config(33.0);
    for i in 0..72 {
        let angle = i as f64 * 5.0;
        assert_eq!(hit_test_pie(at(angle, 60.0), &data, &cfg), Some(2), "angle {angle}");
    }
    assert_eq!(hit_test_pie(Point::ORIGIN, &data, &cfg), Some(2));
}

#[test]
fn zero_slices_are_skipped_at_boundaries() {
    let data = PieData::new([5.0, 0.0, 5.0, 10.0]).unwrap();
    let cfg = config(0.0);
    // slice 0 ends at 90, slice 2 starts there
    assert_eq!(hit_test_pie(at(90.0 - 1e-6, 50.0), &data, &cfg), Some(0));
    assert_eq!(hit_test_pie(at(90.0 + 1e-6, 50.0), &data, &cfg), Some(2));
}

#[test]
fn huge_values_split_the_circle() {
    let half = f64::MAX / 2.0;
    let data = PieData::new([half, half]).unwrap();
    let cfg = config(0.0);
    assert_eq!(hit_test_pie(at(90.0, 50.0), &data, &cfg), Some(0));
    assert_eq!(hit_test_pie(at(270.0, 50.0), &data, &cfg), Some(1));
}

proptest! {
    #[test]
    fn boundaries_match_the_layout(
        values in prop::collection::vec(0u32..1000, 2..30),
        start in 0.0f64..360.0,
    ) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        prop_assume!(values.iter().any(|v| *v > 0.0));
        let data = PieData::new(values).unwrap();
        let cfg = config(start);
        let layout = layout_pie(&data, &cfg, &Style::light(), None, &mut StdRng::seed_from_u64(0));

        let n = layout.slices.len();
        for (k, slice) in layout.slices.iter().enumerate() {
            let prev = &layout.slices[(k + n - 1) % n];
            let eps = 1e-6;
            prop_assert_eq!(hit_test_pie(at(slice.start_angle + eps, 50.0), &data, &cfg), Some(slice.index));
            prop_assert_eq!(hit_test_pie(at(slice.start_angle - eps, 50.0), &data, &cfg), Some(prev.index));
            prop_assert_eq!(hit_test_pie(at(slice.mid_angle, 99.0), &data, &cfg), Some(slice.index));
        }
    }
}
