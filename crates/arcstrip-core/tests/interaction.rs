// File: crates/arcstrip-core/tests/interaction.rs
// Purpose: Hover/click transitions and the pie controller's notifications, caching and painting.

use arcstrip_core::{
    transition, ChartConfig, Effects, HoverChange, InteractionState, LabelPlacement, PaintOp, PieChart, PieData,
    Point, PointerButton, PointerEvent, RecordingPainter, SliceEvent, Style,
};

fn at(angle: f64, r: f64) -> Point {
    Point::ORIGIN.polar(r, angle)
}

fn hovering(i: usize) -> InteractionState {
    InteractionState { hovered: Some(i) }
}

#[test]
fn entering_a_slice() {
    let (next, fx) = transition(InteractionState::default(), PointerEvent::Move(Point::ORIGIN), Some(2));
    assert_eq!(next, hovering(2));
    assert_eq!(fx.hover_changes, vec![HoverChange::Entered(2)]);
    assert!(fx.recompute_layout && fx.redraw);
    assert_eq!(fx.clicked, None);
}

#[test]
fn moving_within_a_slice_is_quiet() {
    let (next, fx) = transition(hovering(2), PointerEvent::Move(Point::ORIGIN), Some(2));
    assert_eq!(next, hovering(2));
    assert!(fx.is_empty());
}

#[test]
fn switching_slices_leaves_before_entering() {
    let (next, fx) = transition(hovering(2), PointerEvent::Move(Point::ORIGIN), Some(3));
    assert_eq!(next, hovering(3));
    assert_eq!(fx.hover_changes, vec![HoverChange::Left(2), HoverChange::Entered(3)]);
}

#[test]
fn leaving_the_widget_or_the_pie() {
    let (next, fx) = transition(hovering(3), PointerEvent::Leave, Some(1));
    assert_eq!(next, InteractionState::default());
    assert_eq!(fx.hover_changes, vec![HoverChange::Left(3)]);

    let (next, fx) = transition(hovering(3), PointerEvent::Move(Point::ORIGIN), None);
    assert_eq!(next.hovered, None);
    assert_eq!(fx.hover_changes, vec![HoverChange::Left(3)]);
}

#[test]
fn only_left_press_clicks() {
    let press = |button| PointerEvent::Press { point: Point::ORIGIN, button };
    let (_, fx) = transition(hovering(1), press(PointerButton::Left), Some(1));
    assert_eq!(fx, Effects { clicked: Some(1), ..Effects::default() });

    let (_, fx) = transition(hovering(1), press(PointerButton::Right), Some(1));
    assert!(fx.is_empty());

    let (_, fx) = transition(hovering(1), press(PointerButton::Left), None);
    assert_eq!(fx.clicked, None);
    assert_eq!(fx.hover_changes, vec![HoverChange::Left(1)]);
}

fn chart() -> PieChart {
    let cfg = ChartConfig::default()
        .with_start_angle(0.0)
        .and_then(|c| c.with_label_placement(LabelPlacement::Fixed(1.25)))
        .unwrap();
    let mut chart = PieChart::with_seed(cfg, Style::light(), 11).unwrap();
    chart
        .set_data(PieData::new([1.0, 1.0]).unwrap().with_labels(["north", "south"]).unwrap());
    chart
}

#[test]
fn pointer_sequence_emits_slice_events() {
    let mut chart = chart();

    let out = chart.handle_pointer(PointerEvent::Move(at(45.0, 50.0)));
    assert_eq!(out.events, vec![SliceEvent::Hovered { index: 0, label: "north".into(), value: 1.0 }]);
    assert!(out.redraw);
    assert_eq!(chart.state().hovered, Some(0));
    assert_eq!(chart.layout().hovered().map(|s| s.index), Some(0));

    let out = chart.handle_pointer(PointerEvent::Move(at(225.0, 50.0)));
    assert_eq!(
        out.events,
        vec![
            SliceEvent::Unhovered { index: 0 },
            SliceEvent::Hovered { index: 1, label: "south".into(), value: 1.0 },
        ]
    );

    let out = chart.handle_pointer(PointerEvent::Press { point: at(225.0, 50.0), button: PointerButton::Left });
    assert_eq!(out.events, vec![SliceEvent::Clicked { index: 1, label: "south".into(), value: 1.0 }]);
    assert!(!out.redraw);

    let out = chart.handle_pointer(PointerEvent::Leave);
    assert_eq!(out.events, vec![SliceEvent::Unhovered { index: 1 }]);
    assert!(chart.layout().hovered().is_none());
}

#[test]
fn pointer_outside_the_pie_does_nothing() {
    let mut chart = chart();
    let out = chart.handle_pointer(PointerEvent::Move(Point::new(300.0, 0.0)));
    assert!(out.events.is_empty());
    assert!(!out.redraw);
}

#[test]
fn labels_hold_still_across_hover() {
    let mut chart = PieChart::with_seed(ChartConfig::default(), Style::light(), 5).unwrap();
    chart.set_values([3.0, 1.0, 4.0, 1.0, 5.0]).unwrap();
    let before = chart.layout().clone();

    let radius = chart.config().radius;
    let mid = before.slices[2].mid_angle;
    chart.handle_pointer(PointerEvent::Move(Point::ORIGIN.polar(radius * 0.5, mid)));
    assert_eq!(chart.layout().hovered().map(|s| s.index), Some(2));
    chart.handle_pointer(PointerEvent::Leave);

    assert_eq!(chart.layout(), &before);
}

#[test]
fn new_data_resets_hover() {
    let mut chart = chart();
    chart.handle_pointer(PointerEvent::Move(at(45.0, 50.0)));
    chart.set_values([2.0, 2.0, 2.0]).unwrap();
    assert_eq!(chart.state().hovered, None);
    assert!(chart.set_values([1.0, -2.0]).is_err());
}

#[test]
fn config_setters_validate() {
    let mut chart = chart();
    assert!(chart.set_radius(-1.0).is_err());
    assert!(chart.set_donut_ratio(1.5).is_err());
    chart.set_start_angle(450.0).unwrap();
    assert_eq!(chart.config().start_angle, 90.0);
}

#[test]
fn paint_fills_every_slice_then_labels() {
    let mut chart = chart();
    chart.set_values([1.0, 1.0, 2.0]).unwrap();
    let mut painter = RecordingPainter::new();
    chart.paint(&mut painter, Point::new(250.0, 250.0));

    let fills: Vec<_> = painter
        .ops
        .iter()
        .filter_map(|op| match op {
            PaintOp::FillPolygon { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    let palette = &Style::light().palette;
    assert_eq!(fills, vec![palette[2], palette[1], palette[0]]);
    assert_eq!(painter.texts(), vec!["Slice 0\n25.0%", "Slice 1\n25.0%", "Slice 2\n50.0%"]);
    assert!(!painter.ops.iter().any(|op| matches!(op, PaintOp::StrokePolygon { .. })));
}

#[test]
fn paint_outlines_the_hovered_slice() {
    let mut chart = chart();
    chart.handle_pointer(PointerEvent::Move(at(45.0, 50.0)));
    let mut painter = RecordingPainter::new();
    chart.paint(&mut painter, Point::new(250.0, 250.0));

    let outline = Style::light().outline;
    assert!(painter
        .ops
        .iter()
        .any(|op| matches!(op, PaintOp::StrokePolygon { color, width, .. } if *color == outline && *width == 4.0)));
    assert_eq!(painter.texts(), vec!["north\n50.0%"]);
}

#[test]
fn paint_full_circle_and_ring() {
    let mut chart = chart();
    chart.set_values([0.0, 3.0]).unwrap();
    let mut painter = RecordingPainter::new();
    let center = Point::new(250.0, 250.0);
    chart.paint(&mut painter, center);
    assert!(painter
        .ops
        .iter()
        .any(|op| matches!(op, PaintOp::FillCircle { center: c, radius, .. } if *c == center && *radius == 200.0)));
    assert_eq!(painter.texts(), vec!["Slice 1\n100%"]);

    chart.set_donut_ratio(0.5).unwrap();
    let mut painter = RecordingPainter::new();
    chart.paint(&mut painter, center);
    assert!(painter
        .ops
        .iter()
        .any(|op| matches!(op, PaintOp::FillRing { outer, inner, .. } if *outer == 200.0 && *inner == 100.0)));
}

#[test]
fn cleared_chart_paints_nothing() {
    let mut chart = chart();
    chart.clear();
    let mut painter = RecordingPainter::new();
    chart.paint(&mut painter, Point::ORIGIN);
    assert!(painter.ops.is_empty());
}
