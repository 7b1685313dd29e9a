use super::*;

// =============================================================
// DragSlot transitions
// =============================================================

#[test]
fn slot_starts_idle() {
    let slot = DragSlot::default();
    assert!(!slot.is_dragging());
    assert!(slot.active().is_none());
}

#[test]
fn surface_press_enters_dragging() {
    let mut slot = DragSlot::default();
    assert!(slot.begin(PanelId(1), Point::new(10.0, 10.0), Position::new(32.0, 32.0), HeaderTarget::Surface));
    assert!(slot.is_dragging());
    assert_eq!(slot.active().map(|d| d.panel), Some(PanelId(1)));
}

#[test]
fn action_button_press_stays_idle() {
    let mut slot = DragSlot::default();
    assert!(!slot.begin(PanelId(1), Point::default(), Position::default(), HeaderTarget::ActionButton));
    assert!(!slot.is_dragging());
}

#[test]
fn end_returns_to_idle_once() {
    let mut slot = DragSlot::default();
    slot.begin(PanelId(3), Point::default(), Position::default(), HeaderTarget::Surface);
    assert_eq!(slot.end().map(|d| d.panel), Some(PanelId(3)));
    assert!(slot.end().is_none());
    assert!(!slot.is_dragging());
}

#[test]
fn release_panel_only_clears_matching_drag() {
    let mut slot = DragSlot::default();
    slot.begin(PanelId(3), Point::default(), Position::default(), HeaderTarget::Surface);
    slot.release_panel(PanelId(4));
    assert!(slot.is_dragging());
    slot.release_panel(PanelId(3));
    assert!(!slot.is_dragging());
}

#[test]
fn new_drag_replaces_stale_one() {
    let mut slot = DragSlot::default();
    slot.begin(PanelId(1), Point::default(), Position::default(), HeaderTarget::Surface);
    slot.begin(PanelId(2), Point::default(), Position::default(), HeaderTarget::Surface);
    assert_eq!(slot.active().map(|d| d.panel), Some(PanelId(2)));
}

// =============================================================
// ActiveDrag
// =============================================================

#[test]
fn position_tracks_pointer_delta_from_start() {
    let drag = ActiveDrag { panel: PanelId(1), start: Point::new(100.0, 200.0), origin: Position::new(40.0, 60.0) };
    assert_eq!(drag.position_at(Point::new(100.0, 200.0)), Position::new(40.0, 60.0));
    assert_eq!(drag.position_at(Point::new(130.0, 190.0)), Position::new(30.0, 90.0));
}
