// File: crates/arcstrip-core/src/interaction.rs
// Summary: Hover/click state machine for the pie: (state, pointer event, hit) -> (state, effects).

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Pointer input in the chart's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move(Point),
    Press { point: Point, button: PointerButton },
    /// Pointer left the widget.
    Leave,
}

impl PointerEvent {
    pub fn point(&self) -> Option<Point> {
        match *self {
            PointerEvent::Move(p) | PointerEvent::Press { point: p, .. } => Some(p),
            PointerEvent::Leave => None,
        }
    }
}

/// Mutable interaction state owned by the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
    Entered(usize),
    Left(usize),
}

/// What the caller must do after a transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Effects {
    pub recompute_layout: bool,
    /// In order: the old slice is left before the new one is entered.
    pub hover_changes: Vec<HoverChange>,
    /// Slice pressed with the left button.
    pub clicked: Option<usize>,
    pub redraw: bool,
}

impl Effects {
    pub fn is_empty(&self) -> bool {
        *self == Effects::default()
    }
}

/// Apply `event` to `state`. `hit` is the slice under the event's point (ignored for `Leave`).
pub fn transition(state: InteractionState, event: PointerEvent, hit: Option<usize>) -> (InteractionState, Effects) {
    let next_hover = match event {
        PointerEvent::Leave => None,
        PointerEvent::Move(_) | PointerEvent::Press { .. } => hit,
    };

    let mut fx = Effects::default();
    if next_hover != state.hovered {
        if let Some(old) = state.hovered {
            fx.hover_changes.push(HoverChange::Left(old));
        }
        if let Some(new) = next_hover {
            fx.hover_changes.push(HoverChange::Entered(new));
        }
        fx.recompute_layout = true;
        fx.redraw = true;
    }
    if let PointerEvent::Press { button: PointerButton::Left, .. } = event {
        fx.clicked = hit;
    }
    (InteractionState { hovered: next_hover }, fx)
}
