//! # Frame Shell
//!
//! The run-loop and window-management shell for small real-time demos.
//!
//! ## Features
//!
//! - **Frame Loop**: Single-threaded orchestration of the OS event pump,
//!   per-frame clock, input, and rendering brackets
//! - **Tick Timers**: Named countdown timers driven by the frame clock
//! - **Edge-Triggered Input**: Just-pressed / just-released queries for keys
//!   and mouse buttons, plus press-release click hit testing
//! - **Fade Transitions**: A two-phase fade state machine driving a blend
//!   parameter on the renderer
//! - **Renderer as Collaborator**: Drawing stays behind the
//!   [`render::RenderBackend`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use frame_shell::prelude::*;
//!
//! struct Demo;
//!
//! impl Application for Demo {
//!     fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         if engine.input().is_key_just_pressed(KeyCode::Escape) {
//!             engine.quit();
//!         }
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), EngineError> {
//!     let config = EngineConfig::default();
//!     Engine::run(&config, Box::new(HeadlessRenderer::new()), &mut Demo)
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod render;
pub mod window;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineError};

/// Common imports for shell users
pub mod prelude {
    pub use crate::{
        config::{ConfigError, EngineConfig, FadeConfig, WindowConfig},
        foundation::{
            math::{distance, Point2, PointLike, Rect, Vec2},
            time::{FrameClock, TimerError, TimerId},
        },
        input::{ClickTracker, InputState, KeyCode, MouseButton},
        render::{
            fade::{FadeState, FadeTransition},
            HeadlessRenderer, RenderBackend,
        },
        window::Window,
        AppError, AppEvent, Application, Engine, EngineError,
    };
}
