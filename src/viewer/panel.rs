// SPDX-License-Identifier: MPL-2.0
//! Floating-widget positioner: dragging, tap-to-collapse, viewport clamping.
//!
//! The player widget floats above the page and is moved by dragging any part
//! of it. Because the same press also serves as the collapse/expand button,
//! a release is classified by how far the pointer travelled: under the
//! threshold it was a tap and the widget toggles between its expanded panel
//! and collapsed icon form; at or past the threshold it was a drag.
//!
//! Mouse and touch input are translated into one pointer vocabulary before
//! they reach this type. A single drag session exists at a time; presses
//! arriving while one is active are ignored, so whichever modality starts a
//! gesture finishes it.

use super::geometry::{Point, Size, Vector};
use crate::config::TAP_THRESHOLD_PX;

/// An in-progress drag: where the widget was grabbed and where the gesture
/// began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Offset of the grab point from the widget's top-left corner. Kept
    /// constant for the whole session so the widget does not jump under the
    /// pointer.
    pub grab: Vector,
    /// Pointer position at the press, for tap detection on release.
    pub start: Point,
}

/// Position and collapse state of the floating player widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    position: Point,
    hidden: bool,
    drag: Option<DragSession>,
}

impl Panel {
    /// Creates an expanded widget at the given position.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            hidden: false,
            drag: None,
        }
    }

    /// Handles a pointer press on the widget. Ignored while a drag session
    /// is already active (first interaction-start wins).
    pub fn pointer_down(&mut self, pointer: Point) {
        if self.drag.is_some() {
            return;
        }
        self.drag = Some(DragSession {
            grab: pointer - self.position,
            start: pointer,
        });
    }

    /// Handles pointer movement. Only an active drag session moves the
    /// widget: the new position keeps the grab point under the pointer.
    pub fn pointer_move(&mut self, pointer: Point) {
        if let Some(session) = self.drag {
            self.position = pointer - session.grab;
        }
    }

    /// Handles a pointer release, ending the drag session. Returns true
    /// when the gesture was a tap, in which case the collapsed state has
    /// been toggled.
    pub fn pointer_up(&mut self, pointer: Point) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };
        let delta = pointer - session.start;
        let tapped = delta.x.abs() < TAP_THRESHOLD_PX && delta.y.abs() < TAP_THRESHOLD_PX;
        if tapped {
            self.hidden = !self.hidden;
        }
        tapped
    }

    /// Clamps the widget back into the viewport after a resize. `widget` is
    /// the size of the form currently shown (expanded panel or collapsed
    /// icon). A widget larger than the viewport pins to the top-left corner.
    pub fn resize(&mut self, viewport: Size, widget: Size) {
        self.position.x = self
            .position
            .x
            .min(viewport.width - widget.width)
            .max(0.0);
        self.position.y = self
            .position
            .y
            .min(viewport.height - widget.height)
            .max(0.0);
    }

    /// The widget's top-left corner.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether the widget is collapsed to its icon form.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(Point::ORIGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_at(x: f32, y: f32) -> Panel {
        Panel::new(Point::new(x, y))
    }

    // ========================================================================
    // Drag Sessions
    // ========================================================================

    #[test]
    fn dragging_keeps_the_grab_point_under_the_pointer() {
        let mut panel = panel_at(100.0, 50.0);

        panel.pointer_down(Point::new(110.0, 70.0));
        assert!(panel.is_dragging());

        panel.pointer_move(Point::new(200.0, 100.0));
        assert_eq!(panel.position(), Point::new(190.0, 80.0));

        panel.pointer_move(Point::new(40.0, 25.0));
        assert_eq!(panel.position(), Point::new(30.0, 5.0));
    }

    #[test]
    fn movement_without_a_session_does_nothing() {
        let mut panel = panel_at(100.0, 50.0);

        panel.pointer_move(Point::new(300.0, 300.0));

        assert_eq!(panel.position(), Point::new(100.0, 50.0));
        assert!(!panel.is_dragging());
    }

    #[test]
    fn first_interaction_start_wins() {
        // Simulates: touch starts a drag, then a stray mouse press arrives
        let mut panel = panel_at(100.0, 50.0);

        panel.pointer_down(Point::new(110.0, 60.0));
        panel.pointer_down(Point::new(500.0, 500.0));

        // Still the first session's grab offset.
        panel.pointer_move(Point::new(120.0, 70.0));
        assert_eq!(panel.position(), Point::new(110.0, 60.0));
    }

    #[test]
    fn release_ends_the_session() {
        let mut panel = panel_at(100.0, 50.0);

        panel.pointer_down(Point::new(110.0, 60.0));
        panel.pointer_move(Point::new(150.0, 90.0));
        panel.pointer_up(Point::new(150.0, 90.0));

        assert!(!panel.is_dragging());
        let after_release = panel.position();
        panel.pointer_move(Point::new(400.0, 400.0));
        assert_eq!(panel.position(), after_release);
    }

    #[test]
    fn release_without_a_session_is_ignored() {
        let mut panel = panel_at(100.0, 50.0);
        assert!(!panel.pointer_up(Point::new(100.0, 50.0)));
        assert!(!panel.is_hidden());
    }

    // ========================================================================
    // Tap vs. Drag
    // Displacement under the threshold on both axes toggles the collapsed
    // state; anything further was a drag.
    // ========================================================================

    #[test]
    fn a_tap_toggles_the_collapsed_state() {
        let mut panel = panel_at(100.0, 50.0);

        panel.pointer_down(Point::new(110.0, 70.0));
        panel.pointer_move(Point::new(112.0, 72.0));
        let tapped = panel.pointer_up(Point::new(112.0, 72.0));

        assert!(tapped);
        assert!(panel.is_hidden());
        // The widget moved at most the tap displacement.
        assert_eq!(panel.position(), Point::new(102.0, 52.0));
    }

    #[test]
    fn a_second_tap_expands_again() {
        let mut panel = panel_at(100.0, 50.0);

        panel.pointer_down(Point::new(110.0, 70.0));
        panel.pointer_up(Point::new(110.0, 70.0));
        assert!(panel.is_hidden());

        panel.pointer_down(Point::new(110.0, 70.0));
        panel.pointer_up(Point::new(111.0, 69.0));
        assert!(!panel.is_hidden());
    }

    #[test]
    fn displacement_at_the_threshold_is_a_drag() {
        let mut panel = panel_at(100.0, 50.0);

        panel.pointer_down(Point::new(110.0, 70.0));
        panel.pointer_move(Point::new(115.0, 70.0));
        let tapped = panel.pointer_up(Point::new(115.0, 70.0));

        assert!(!tapped);
        assert!(!panel.is_hidden());
        assert_eq!(panel.position(), Point::new(105.0, 50.0));
    }

    #[test]
    fn one_axis_past_the_threshold_is_enough_for_a_drag() {
        let mut panel = panel_at(100.0, 50.0);

        panel.pointer_down(Point::new(110.0, 70.0));
        panel.pointer_move(Point::new(114.0, 76.0));
        let tapped = panel.pointer_up(Point::new(114.0, 76.0));

        assert!(!tapped);
        assert!(!panel.is_hidden());
    }

    #[test]
    fn backward_displacement_counts_too() {
        let mut panel = panel_at(100.0, 50.0);

        panel.pointer_down(Point::new(110.0, 70.0));
        let tapped = panel.pointer_up(Point::new(103.0, 70.0));

        assert!(!tapped);
    }

    #[test]
    fn the_collapsed_icon_can_be_dragged() {
        let mut panel = panel_at(100.0, 50.0);
        panel.pointer_down(Point::new(110.0, 70.0));
        panel.pointer_up(Point::new(110.0, 70.0));
        assert!(panel.is_hidden());

        panel.pointer_down(Point::new(105.0, 55.0));
        panel.pointer_move(Point::new(205.0, 155.0));
        panel.pointer_up(Point::new(205.0, 155.0));

        assert!(panel.is_hidden());
        assert_eq!(panel.position(), Point::new(200.0, 150.0));
    }

    // ========================================================================
    // Viewport Clamping
    // ========================================================================

    #[test]
    fn resize_clamps_the_widget_into_the_viewport() {
        // Simulates: window shrinks while the widget sits near the corner
        let mut panel = panel_at(900.0, 560.0);

        panel.resize(Size::new(800.0, 600.0), Size::new(320.0, 180.0));

        assert_eq!(panel.position(), Point::new(480.0, 420.0));
    }

    #[test]
    fn resize_leaves_an_inside_widget_alone() {
        let mut panel = panel_at(40.0, 40.0);

        panel.resize(Size::new(800.0, 600.0), Size::new(320.0, 180.0));

        assert_eq!(panel.position(), Point::new(40.0, 40.0));
    }

    #[test]
    fn an_oversized_widget_pins_to_the_origin() {
        let mut panel = panel_at(50.0, 50.0);

        panel.resize(Size::new(200.0, 100.0), Size::new(320.0, 180.0));

        assert_eq!(panel.position(), Point::ORIGIN);
    }

    #[test]
    fn the_collapsed_form_clamps_with_its_own_size() {
        let mut panel = panel_at(770.0, 560.0);
        panel.pointer_down(Point::new(775.0, 565.0));
        panel.pointer_up(Point::new(775.0, 565.0));
        assert!(panel.is_hidden());

        // The icon is much smaller than the expanded panel, so it still
        // fits where the panel would not.
        panel.resize(Size::new(800.0, 600.0), Size::new(48.0, 48.0));

        assert_eq!(panel.position(), Point::new(752.0, 552.0));
    }
}
