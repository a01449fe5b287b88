//! Core engine implementation
//!
//! The engine is the frame orchestrator: it owns the window, the renderer
//! handle, and all per-frame state, and runs the synchronous main loop.
//! Everything happens on one thread; the only suspension point is the
//! non-blocking OS event poll at the top of each frame.

use crate::{
    application::{AppEvent, Application},
    config::EngineConfig,
    foundation::time::{FrameClock, TimerError, TimerId},
    input::{ClickTracker, InputState, KeyCode, MouseButton},
    render::{
        fade::{FadeState, FadeTransition},
        RenderBackend, RenderError,
    },
    window::{Window, WindowError},
};
use crate::foundation::math::Rect;
use thiserror::Error;

/// Timer id reserved for the fade transition.
const FADE_TIMER: TimerId = TimerId(1);

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Window system failure during startup
    #[error("window system: {0}")]
    Window(#[from] WindowError),

    /// Renderer failure during startup
    #[error("renderer: {0}")]
    Renderer(#[from] RenderError),

    /// Timer id misuse inside the frame loop; a programmer error
    #[error("timer misuse: {0}")]
    Timer(#[from] TimerError),

    /// Error surfaced by the application callbacks
    #[error("application: {0}")]
    Application(String),
}

/// Main engine struct
///
/// Coordinates the window, renderer, input, clock, click tracking, and fade
/// transition, and drives them once per frame. Single-threaded by design:
/// one `Engine` value owns all of this state for the process lifetime.
pub struct Engine {
    window: Window,
    renderer: Box<dyn RenderBackend>,
    input: InputState,
    clock: FrameClock,
    clicks: ClickTracker,
    fade: FadeTransition,
    running: bool,
    shut_down: bool,
}

impl Engine {
    /// Create an engine instance
    ///
    /// Brings up the window first, then binds the renderer to it. If the
    /// renderer fails, the window is torn down on the way out; teardown only
    /// ever touches what was actually created.
    pub fn new(
        config: &EngineConfig,
        mut renderer: Box<dyn RenderBackend>,
    ) -> Result<Self, EngineError> {
        log::info!("initializing engine");

        let mut window = Window::new(
            &config.window.title,
            config.window.width,
            config.window.height,
        )?;
        renderer.initialize(config.window.width, config.window.height, &mut window)?;

        Ok(Self {
            window,
            renderer,
            input: InputState::new(),
            clock: FrameClock::new(),
            clicks: ClickTracker::new(),
            fade: FadeTransition::new(FADE_TIMER, config.fade.duration_ticks),
            running: true,
            shut_down: false,
        })
    }

    /// Run the main loop with the given application
    ///
    /// Constructs the engine, initializes the application, loops until the
    /// OS or the application requests termination, then cleans up.
    pub fn run<A: Application>(
        config: &EngineConfig,
        renderer: Box<dyn RenderBackend>,
        app: &mut A,
    ) -> Result<(), EngineError> {
        let mut engine = Self::new(config, renderer)?;

        app.initialize(&mut engine)
            .map_err(|e| EngineError::Application(e.to_string()))?;

        log::info!("entering main loop");
        while engine.run_once(app)? {}

        app.cleanup(&mut engine);
        engine.shutdown();
        Ok(())
    }

    /// Simulate one frame
    ///
    /// Order per frame: advance the clock, pump and route OS events, update
    /// click tracking, run the application, bracket the fade step with the
    /// renderer's begin/end, and finally commit the input frame so edge
    /// queries roll over. Returns `Ok(false)` when the loop should stop.
    ///
    /// The loop does not rate-limit; pacing, if any, lives in the backend's
    /// present call.
    pub fn run_once<A: Application>(&mut self, app: &mut A) -> Result<bool, EngineError> {
        self.clock.advance();

        self.window.poll_events();
        let events: Vec<glfw::WindowEvent> =
            self.window.flush_events().map(|(_, event)| event).collect();
        for event in events {
            if let Some(app_event) = self.route_event(&event) {
                app.handle_event(self, app_event)
                    .map_err(|e| EngineError::Application(e.to_string()))?;
            }
        }

        if self.window.should_close() || !self.running {
            return Ok(false);
        }

        self.clicks.update(&self.input);

        app.update(self)
            .map_err(|e| EngineError::Application(e.to_string()))?;

        self.renderer.begin_frame();
        self.fade.step(&mut self.clock, self.renderer.as_mut())?;
        let (width, height) = self.window.size();
        self.renderer.end_frame(width, height);

        self.input.commit_frame();
        Ok(self.running)
    }

    /// Feed one OS event into the input state, translating it for the
    /// application
    fn route_event(&mut self, event: &glfw::WindowEvent) -> Option<AppEvent> {
        match *event {
            glfw::WindowEvent::Key(key, _, action, _) => {
                let key = translate_key(key)?;
                match action {
                    glfw::Action::Press => {
                        self.input.on_key_down(key);
                        Some(AppEvent::KeyInput { key, pressed: true })
                    }
                    glfw::Action::Release => {
                        self.input.on_key_up(key);
                        Some(AppEvent::KeyInput {
                            key,
                            pressed: false,
                        })
                    }
                    // Repeats are not fresh edges.
                    glfw::Action::Repeat => None,
                }
            }
            glfw::WindowEvent::MouseButton(button, action, _) => {
                let button = translate_button(button)?;
                match action {
                    glfw::Action::Press => {
                        self.input.on_button_down(button);
                        Some(AppEvent::MouseButton {
                            button,
                            pressed: true,
                        })
                    }
                    glfw::Action::Release => {
                        self.input.on_button_up(button);
                        Some(AppEvent::MouseButton {
                            button,
                            pressed: false,
                        })
                    }
                    glfw::Action::Repeat => None,
                }
            }
            glfw::WindowEvent::CursorPos(x, y) => {
                self.input.set_mouse_position(x as f32, y as f32);
                Some(AppEvent::MouseMoved { x, y })
            }
            glfw::WindowEvent::Close => {
                log::info!("window close requested");
                self.running = false;
                Some(AppEvent::WindowCloseRequested)
            }
            _ => None,
        }
    }

    /// Request loop termination at the end of the current frame
    pub fn quit(&mut self) {
        log::info!("engine shutdown requested");
        self.running = false;
    }

    /// Start a fade-out/fade-in cycle; ignored while one is in progress
    pub fn begin_fade(&mut self) {
        self.fade.begin();
    }

    /// Current phase of the fade transition
    pub fn fade_state(&self) -> FadeState {
        self.fade.state()
    }

    /// Whether a fade cycle is in progress
    pub fn is_fading(&self) -> bool {
        self.fade.is_active()
    }

    /// Whether a left click completed inside `rect` this frame
    pub fn button_clicked(&self, rect: &Rect) -> bool {
        self.clicks.clicked_inside(rect, MouseButton::Left, &self.input)
    }

    /// Whether `button` completed a click inside `rect` this frame
    pub fn clicked_inside(&self, rect: &Rect, button: MouseButton) -> bool {
        self.clicks.clicked_inside(rect, button, &self.input)
    }

    /// Keyboard and mouse state for this frame
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// The frame clock
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Click origin tracking for this frame
    pub fn click_tracker(&self) -> &ClickTracker {
        &self.clicks
    }

    /// Client-area size in pixels
    pub fn window_size(&self) -> (u32, u32) {
        self.window.size()
    }

    /// Release the renderer
    ///
    /// Idempotent; also invoked on drop, so a loop that unwinds through an
    /// error still tears the backend down exactly once.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.renderer.shutdown();
        log::info!("engine shutdown complete after {} frames", self.clock.frame_count());
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn translate_key(key: glfw::Key) -> Option<KeyCode> {
    match key {
        glfw::Key::A => Some(KeyCode::A),
        glfw::Key::B => Some(KeyCode::B),
        glfw::Key::C => Some(KeyCode::C),
        glfw::Key::D => Some(KeyCode::D),
        glfw::Key::E => Some(KeyCode::E),
        glfw::Key::F => Some(KeyCode::F),
        glfw::Key::G => Some(KeyCode::G),
        glfw::Key::H => Some(KeyCode::H),
        glfw::Key::I => Some(KeyCode::I),
        glfw::Key::J => Some(KeyCode::J),
        glfw::Key::K => Some(KeyCode::K),
        glfw::Key::L => Some(KeyCode::L),
        glfw::Key::M => Some(KeyCode::M),
        glfw::Key::N => Some(KeyCode::N),
        glfw::Key::O => Some(KeyCode::O),
        glfw::Key::P => Some(KeyCode::P),
        glfw::Key::Q => Some(KeyCode::Q),
        glfw::Key::R => Some(KeyCode::R),
        glfw::Key::S => Some(KeyCode::S),
        glfw::Key::T => Some(KeyCode::T),
        glfw::Key::U => Some(KeyCode::U),
        glfw::Key::V => Some(KeyCode::V),
        glfw::Key::W => Some(KeyCode::W),
        glfw::Key::X => Some(KeyCode::X),
        glfw::Key::Y => Some(KeyCode::Y),
        glfw::Key::Z => Some(KeyCode::Z),
        glfw::Key::Space => Some(KeyCode::Space),
        glfw::Key::Enter => Some(KeyCode::Enter),
        glfw::Key::Escape => Some(KeyCode::Escape),
        glfw::Key::Up => Some(KeyCode::Up),
        glfw::Key::Down => Some(KeyCode::Down),
        glfw::Key::Left => Some(KeyCode::Left),
        glfw::Key::Right => Some(KeyCode::Right),
        _ => None,
    }
}

fn translate_button(button: glfw::MouseButton) -> Option<MouseButton> {
    match button {
        glfw::MouseButton::Button1 => Some(MouseButton::Left),
        glfw::MouseButton::Button2 => Some(MouseButton::Right),
        glfw::MouseButton::Button3 => Some(MouseButton::Middle),
        _ => None,
    }
}
