//! Pointer input: the drag state machine that turns pointer positions into angles.
//!
//! ```text
//!            engage
//!   Idle ─────────────▶ Dragging ──┐ move: update angle
//!    ▲  ▲                  │   ▲───┘
//!    │  └──── release ─────┘
//!    └─ release / move (no-op)
//! ```
//!
//! Release is accepted from any state and from anywhere on the page. The host
//! must route window-level pointer-up into [`DragController::pointer_release`],
//! not just the circle element's own events; otherwise a drag that ends off the
//! element never ends.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Serialize;

use crate::angle::{AngleModel, pointer_to_angle};
use crate::frame::Point;

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DragState {
    /// Waiting for the next pointer-down.
    #[default]
    Idle,
    /// Pointer is engaged; moves update the angle.
    Dragging,
}

/// Tracks pointer engagement and feeds positions into an [`AngleModel`].
///
/// `center` is the circle's center in the same coordinate space as the pointer
/// events (typically client coordinates of the element's bounding rect).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragController {
    state: DragState,
    center: Point,
}

impl DragController {
    #[must_use]
    pub fn new(center: Point) -> Self {
        Self { state: DragState::Idle, center }
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Move the reference center, e.g. after the element scrolled or resized.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Pointer/touch went down on the circle. Starts a drag and applies the
    /// position immediately. Returns whether the angle changed.
    ///
    /// A second engage while already dragging keeps the drag and updates.
    pub fn pointer_engage(&mut self, pointer: Point, model: &mut AngleModel) -> bool {
        if self.state == DragState::Idle {
            self.state = DragState::Dragging;
            tracing::debug!(x = pointer.x, y = pointer.y, "drag started");
        }
        self.update(pointer, model)
    }

    /// Pointer moved. Only updates the angle while dragging; ignored when idle.
    pub fn pointer_move(&mut self, pointer: Point, model: &mut AngleModel) -> bool {
        match self.state {
            DragState::Dragging => self.update(pointer, model),
            DragState::Idle => false,
        }
    }

    /// Pointer/touch released anywhere. Always leaves the machine idle.
    /// Returns whether a drag was actually in progress.
    pub fn pointer_release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        if was_dragging {
            tracing::debug!("drag ended");
        }
        was_dragging
    }

    fn update(&self, pointer: Point, model: &mut AngleModel) -> bool {
        model.set(pointer_to_angle(pointer, self.center))
    }
}
