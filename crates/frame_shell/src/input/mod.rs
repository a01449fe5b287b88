//! Input state tracking
//!
//! Keeps the current and previous-frame key and mouse-button sets so callers
//! can ask both level questions (is this held?) and edge questions (did this
//! go down this frame?). Event callbacks mutate the current sets as OS
//! messages arrive; [`InputState::commit_frame`] rolls them into the
//! previous sets exactly once per frame, after all frame logic has observed
//! the edges.

pub mod click;

pub use click::ClickTracker;

use crate::foundation::math::Point2;
use std::collections::HashSet;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)] // The variants are the keys they name.
pub enum KeyCode {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Space,
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Per-frame snapshot of keyboard and mouse state
#[derive(Debug)]
pub struct InputState {
    current_keys: HashSet<KeyCode>,
    previous_keys: HashSet<KeyCode>,
    current_buttons: HashSet<MouseButton>,
    previous_buttons: HashSet<MouseButton>,
    mouse_position: Point2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            current_keys: HashSet::new(),
            previous_keys: HashSet::new(),
            current_buttons: HashSet::new(),
            previous_buttons: HashSet::new(),
            mouse_position: Point2::origin(),
        }
    }
}

impl InputState {
    /// Create an input state with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event
    ///
    /// May fire zero or many times per frame; repeats are harmless.
    pub fn on_key_down(&mut self, code: KeyCode) {
        self.current_keys.insert(code);
    }

    /// Record a key-up event
    pub fn on_key_up(&mut self, code: KeyCode) {
        self.current_keys.remove(&code);
    }

    /// Record a mouse-button-down event
    pub fn on_button_down(&mut self, button: MouseButton) {
        self.current_buttons.insert(button);
    }

    /// Record a mouse-button-up event
    pub fn on_button_up(&mut self, button: MouseButton) {
        self.current_buttons.remove(&button);
    }

    /// Whether the key is currently held
    pub fn is_key_down(&self, code: KeyCode) -> bool {
        self.current_keys.contains(&code)
    }

    /// Whether the key went down this frame
    pub fn is_key_just_pressed(&self, code: KeyCode) -> bool {
        self.current_keys.contains(&code) && !self.previous_keys.contains(&code)
    }

    /// Whether the key went up this frame
    pub fn is_key_just_released(&self, code: KeyCode) -> bool {
        !self.current_keys.contains(&code) && self.previous_keys.contains(&code)
    }

    /// Whether the mouse button is currently held
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.current_buttons.contains(&button)
    }

    /// Whether the mouse button went down this frame
    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.current_buttons.contains(&button) && !self.previous_buttons.contains(&button)
    }

    /// Whether the mouse button went up this frame
    pub fn is_button_just_released(&self, button: MouseButton) -> bool {
        !self.current_buttons.contains(&button) && self.previous_buttons.contains(&button)
    }

    /// Record the cursor position in window-client coordinates
    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_position = Point2::new(x, y);
    }

    /// Cursor position in window-client coordinates
    pub fn mouse_position(&self) -> Point2 {
        self.mouse_position
    }

    /// Roll current state into previous state
    ///
    /// Must run exactly once per frame, after everything that wants to see
    /// the just-pressed/just-released edges has run.
    pub fn commit_frame(&mut self) {
        self.previous_keys = self.current_keys.clone();
        self.previous_buttons = self.current_buttons.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_just_pressed_lasts_one_frame() {
        let mut input = InputState::new();

        input.on_key_down(KeyCode::Space);
        assert!(input.is_key_down(KeyCode::Space));
        assert!(input.is_key_just_pressed(KeyCode::Space));
        input.commit_frame();

        // Still held the next frame, but no longer an edge.
        assert!(input.is_key_down(KeyCode::Space));
        assert!(!input.is_key_just_pressed(KeyCode::Space));
    }

    #[test]
    fn test_just_released_lasts_one_frame() {
        let mut input = InputState::new();
        input.on_key_down(KeyCode::Escape);
        input.commit_frame();

        input.on_key_up(KeyCode::Escape);
        assert!(input.is_key_just_released(KeyCode::Escape));
        assert!(!input.is_key_down(KeyCode::Escape));
        input.commit_frame();

        assert!(!input.is_key_just_released(KeyCode::Escape));
    }

    #[test]
    fn test_press_and_release_within_one_frame() {
        let mut input = InputState::new();
        // Down and up arrive between commits; the up wins, so the key never
        // reads as pressed and never reads as released.
        input.on_key_down(KeyCode::A);
        input.on_key_up(KeyCode::A);
        assert!(!input.is_key_just_pressed(KeyCode::A));
        input.commit_frame();
        assert!(!input.is_key_just_released(KeyCode::A));
    }

    #[test]
    fn test_button_edges() {
        let mut input = InputState::new();

        input.on_button_down(MouseButton::Left);
        assert!(input.is_button_just_pressed(MouseButton::Left));
        assert!(!input.is_button_just_pressed(MouseButton::Right));
        input.commit_frame();

        input.on_button_up(MouseButton::Left);
        assert!(input.is_button_just_released(MouseButton::Left));
        input.commit_frame();
        assert!(!input.is_button_just_released(MouseButton::Left));
    }

    #[test]
    fn test_mouse_position_roundtrip() {
        let mut input = InputState::new();
        input.set_mouse_position(12.0, 34.0);
        assert_eq!(input.mouse_position(), Point2::new(12.0, 34.0));
    }
}
