//! Renderer collaborator contract
//!
//! The shell owns the frame loop but not the draw calls. Rendering happens
//! behind the [`RenderBackend`] trait: the engine brackets each frame with
//! `begin_frame`/`end_frame` and pushes the fade overlay state between them.
//! Backends never see input or timers.

pub mod fade;

mod headless;

pub use headless::HeadlessRenderer;

use crate::window::Window;
use thiserror::Error;

/// Renderer errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The backend could not be brought up against the window
    #[error("renderer initialization failed: {0}")]
    InitializationFailed(String),
}

/// Contract between the frame loop and a rendering backend
///
/// Calls arrive on the thread running the loop, in a fixed per-frame order:
/// `begin_frame`, fade updates, `end_frame`. `initialize` runs once before
/// the first frame and `shutdown` once after the last; `shutdown` must
/// tolerate being called on a partially initialized backend.
pub trait RenderBackend {
    /// Bind the backend to the window's drawable area
    fn initialize(&mut self, width: u32, height: u32, window: &mut Window)
        -> Result<(), RenderError>;

    /// Start recording a frame
    fn begin_frame(&mut self);

    /// Present the recorded frame
    ///
    /// Pacing (vsync or otherwise) is the backend's concern; the frame loop
    /// itself never sleeps.
    fn end_frame(&mut self, width: u32, height: u32);

    /// Enable the fade overlay
    fn start_fade_effect(&mut self);

    /// Disable the fade overlay
    fn stop_fade_effect(&mut self);

    /// Set the fade overlay opacity, `0.0` transparent to `1.0` opaque
    fn set_fade_blend(&mut self, blend: f32);

    /// Release backend resources
    fn shutdown(&mut self);
}
