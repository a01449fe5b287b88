//! Click origin tracking and press-release hit testing
//!
//! A "click" on a region means the button went down inside it AND came back
//! up inside it. The tracker remembers where each button was pressed; the
//! origin survives the whole held-down stretch and the release frame, then
//! resets on the frame after release.

use super::{InputState, MouseButton};
use crate::foundation::math::{Point2, Rect};

/// Tracks where the left and right mouse buttons were last pressed
#[derive(Debug, Default)]
pub struct ClickTracker {
    left_origin: Option<Point2>,
    right_origin: Option<Point2>,
}

impl ClickTracker {
    /// Create a tracker with no recorded origins
    pub fn new() -> Self {
        Self::default()
    }

    /// Update both button origins from this frame's input
    ///
    /// Call once per frame, after events are routed and before rendering.
    pub fn update(&mut self, input: &InputState) {
        self.left_origin = Self::track(self.left_origin, MouseButton::Left, input);
        self.right_origin = Self::track(self.right_origin, MouseButton::Right, input);
    }

    fn track(origin: Option<Point2>, button: MouseButton, input: &InputState) -> Option<Point2> {
        if input.is_button_just_pressed(button) {
            return Some(input.mouse_position());
        }
        // Keep the origin while held and through the release frame, so the
        // release-frame hit test can still see where the press started.
        if !input.is_button_down(button) && !input.is_button_just_released(button) {
            return None;
        }
        origin
    }

    /// Where the button was pressed, if it is held or was released this frame
    ///
    /// Only the left and right buttons are tracked.
    pub fn origin(&self, button: MouseButton) -> Option<Point2> {
        match button {
            MouseButton::Left => self.left_origin,
            MouseButton::Right => self.right_origin,
            MouseButton::Middle => None,
        }
    }

    /// Whether `button` completed a click inside `rect` this frame
    ///
    /// True iff the button was just released and both the press origin and
    /// the current cursor position are strictly inside `rect`.
    pub fn clicked_inside(&self, rect: &Rect, button: MouseButton, input: &InputState) -> bool {
        input.is_button_just_released(button)
            && self.origin(button).is_some_and(|origin| rect.contains(&origin))
            && rect.contains(&input.mouse_position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_origin_roundtrip() {
        let mut input = InputState::new();
        let mut clicks = ClickTracker::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        // Frame 1: press at (10, 10).
        input.set_mouse_position(10.0, 10.0);
        input.on_button_down(MouseButton::Left);
        clicks.update(&input);
        assert_eq!(clicks.origin(MouseButton::Left), Some(Point2::new(10.0, 10.0)));
        assert!(!clicks.clicked_inside(&rect, MouseButton::Left, &input));
        input.commit_frame();

        // Frame 2: hold while dragging to (50, 50).
        input.set_mouse_position(50.0, 50.0);
        clicks.update(&input);
        assert_eq!(clicks.origin(MouseButton::Left), Some(Point2::new(10.0, 10.0)));
        assert!(!clicks.clicked_inside(&rect, MouseButton::Left, &input));
        input.commit_frame();

        // Frame 3: release at (50, 50) - the click lands this frame.
        input.on_button_up(MouseButton::Left);
        clicks.update(&input);
        assert!(clicks.clicked_inside(&rect, MouseButton::Left, &input));
        input.commit_frame();

        // Frame 4: the origin resets the frame after release.
        clicks.update(&input);
        assert_eq!(clicks.origin(MouseButton::Left), None);
        assert!(!clicks.clicked_inside(&rect, MouseButton::Left, &input));
    }

    #[test]
    fn test_release_outside_rect_is_not_a_click() {
        let mut input = InputState::new();
        let mut clicks = ClickTracker::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        input.set_mouse_position(10.0, 10.0);
        input.on_button_down(MouseButton::Left);
        clicks.update(&input);
        input.commit_frame();

        // Dragged out of the rect before releasing.
        input.set_mouse_position(150.0, 50.0);
        input.on_button_up(MouseButton::Left);
        clicks.update(&input);
        assert!(!clicks.clicked_inside(&rect, MouseButton::Left, &input));
    }

    #[test]
    fn test_press_outside_rect_is_not_a_click() {
        let mut input = InputState::new();
        let mut clicks = ClickTracker::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        input.set_mouse_position(150.0, 50.0);
        input.on_button_down(MouseButton::Left);
        clicks.update(&input);
        input.commit_frame();

        input.set_mouse_position(50.0, 50.0);
        input.on_button_up(MouseButton::Left);
        clicks.update(&input);
        assert!(!clicks.clicked_inside(&rect, MouseButton::Left, &input));
    }

    #[test]
    fn test_left_and_right_tracked_independently() {
        let mut input = InputState::new();
        let mut clicks = ClickTracker::new();

        input.set_mouse_position(5.0, 5.0);
        input.on_button_down(MouseButton::Left);
        clicks.update(&input);
        input.commit_frame();

        input.set_mouse_position(70.0, 70.0);
        input.on_button_down(MouseButton::Right);
        clicks.update(&input);
        assert_eq!(clicks.origin(MouseButton::Left), Some(Point2::new(5.0, 5.0)));
        assert_eq!(clicks.origin(MouseButton::Right), Some(Point2::new(70.0, 70.0)));
    }
}
