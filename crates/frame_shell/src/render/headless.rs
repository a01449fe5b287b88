//! No-op render backend
//!
//! Stands in where a GPU backend would go: it honors the whole
//! [`RenderBackend`] contract and tracks the fade overlay state, but draws
//! nothing. Used by tests and by demos that only exercise the shell.

use super::{RenderBackend, RenderError};
use crate::window::Window;

/// Backend that records state and draws nothing
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    initialized: bool,
    fade_active: bool,
    blend: f32,
    frames_presented: u64,
}

impl HeadlessRenderer {
    /// Create an uninitialized headless backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the fade overlay is currently enabled
    pub fn fade_active(&self) -> bool {
        self.fade_active
    }

    /// Last overlay opacity pushed by the frame loop
    pub fn blend(&self) -> f32 {
        self.blend
    }

    /// Number of frames presented so far
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl RenderBackend for HeadlessRenderer {
    fn initialize(
        &mut self,
        width: u32,
        height: u32,
        _window: &mut Window,
    ) -> Result<(), RenderError> {
        log::info!("headless renderer bound to {width}x{height} target");
        self.initialized = true;
        Ok(())
    }

    fn begin_frame(&mut self) {}

    fn end_frame(&mut self, _width: u32, _height: u32) {
        self.frames_presented += 1;
    }

    fn start_fade_effect(&mut self) {
        log::debug!("fade overlay enabled");
        self.fade_active = true;
    }

    fn stop_fade_effect(&mut self) {
        log::debug!("fade overlay disabled");
        self.fade_active = false;
        self.blend = 0.0;
    }

    fn set_fade_blend(&mut self, blend: f32) {
        self.blend = blend.clamp(0.0, 1.0);
    }

    fn shutdown(&mut self) {
        if self.initialized {
            log::info!(
                "headless renderer shut down after {} frames",
                self.frames_presented
            );
            self.initialized = false;
        }
    }
}
