//! Drag state machine.
//!
//! Only one panel can be dragged at a time, so the active drag lives in a
//! single slot owned by the manager rather than in per-panel listeners. The
//! host forwards window-level pointer moves and releases into that slot.
//!
//! ```text
//! Idle --pointer-down on header surface--> Dragging
//! Dragging --pointer-move--> Dragging (position = origin + delta)
//! Dragging --pointer-up (anywhere)--> Idle (persist)
//! ```

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

use crate::geometry::Position;
use crate::panel::PanelId;

/// Pointer location in viewport (client) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where in a panel header a pointer-down landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTarget {
    /// Title or empty header space; starts a drag.
    Surface,
    /// Collapse or close button; never starts a drag.
    ActionButton,
}

/// Gesture context captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub panel: PanelId,
    /// Pointer position at drag start.
    pub start: Point,
    /// Panel position at drag start.
    pub origin: Position,
}

impl ActiveDrag {
    /// Panel position for the current pointer location.
    #[must_use]
    pub fn position_at(&self, pointer: Point) -> Position {
        self.origin.offset(pointer.x - self.start.x, pointer.y - self.start.y)
    }
}

/// The process-wide drag slot: `None` is `Idle`, `Some` is `Dragging`.
#[derive(Debug, Clone, Default)]
pub struct DragSlot {
    active: Option<ActiveDrag>,
}

impl DragSlot {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    /// Enter `Dragging`. Returns `false` (and stays put) for action buttons.
    /// A new drag replaces a stale one whose release was never observed.
    pub fn begin(&mut self, panel: PanelId, pointer: Point, origin: Position, target: HeaderTarget) -> bool {
        if target == HeaderTarget::ActionButton {
            return false;
        }
        self.active = Some(ActiveDrag { panel, start: pointer, origin });
        true
    }

    /// Return to `Idle`, yielding the drag that ended.
    pub fn end(&mut self) -> Option<ActiveDrag> {
        self.active.take()
    }

    /// Drop the drag if it belongs to `panel` (panel closed mid-drag).
    pub fn release_panel(&mut self, panel: PanelId) {
        if self.active.is_some_and(|d| d.panel == panel) {
            self.active = None;
        }
    }
}
