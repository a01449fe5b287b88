//! Application trait and lifecycle management

use crate::input::{KeyCode, MouseButton};
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this to put behavior behind the shell's frame loop. The engine
/// calls `initialize` once, then `handle_event` and `update` every frame,
/// then `cleanup` once on the way out.
pub trait Application {
    /// Called once after the engine is initialized
    fn initialize(&mut self, engine: &mut crate::Engine) -> Result<(), AppError>;

    /// Called every frame, after input and click tracking are up to date and
    /// before the frame is rendered
    fn update(&mut self, engine: &mut crate::Engine) -> Result<(), AppError>;

    /// Called for each translated OS event, in arrival order
    fn handle_event(
        &mut self,
        engine: &mut crate::Engine,
        event: AppEvent,
    ) -> Result<(), AppError> {
        let _ = (engine, event);
        Ok(())
    }

    /// Called once when the loop has ended, before teardown
    fn cleanup(&mut self, engine: &mut crate::Engine);
}

/// Application-level errors
///
/// The engine treats any of these as fatal and unwinds the loop.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error surfaced by the application
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Custom application error
    #[error("{0}")]
    Custom(String),
}

/// OS events after translation, as seen by applications
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// Window close requested
    WindowCloseRequested,

    /// Key transitioned
    KeyInput {
        /// The key that changed
        key: KeyCode,
        /// Down (`true`) or up (`false`)
        pressed: bool,
    },

    /// Mouse button transitioned
    MouseButton {
        /// The button that changed
        button: MouseButton,
        /// Down (`true`) or up (`false`)
        pressed: bool,
    },

    /// Cursor moved, in window-client coordinates
    MouseMoved {
        /// New X coordinate
        x: f64,
        /// New Y coordinate
        y: f64,
    },
}
