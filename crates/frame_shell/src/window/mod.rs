//! Window management using GLFW
//!
//! One fixed-size top-level window, centered on the primary monitor, with
//! system decorations and the default cursor. Events arrive on a per-window
//! channel owned here, which stands in for the usual process-global window
//! procedure: the frame loop drains the channel once per frame and no global
//! state is involved.

use thiserror::Error;

/// Window system errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW itself failed to come up
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The window could not be created
    #[error("window creation failed")]
    CreationFailed,
}

/// GLFW window wrapper with proper resource management
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Create the application window
    ///
    /// The window is non-resizable, carries no GL context (rendering is the
    /// backend's concern), and is centered on the primary monitor when its
    /// video mode is known.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, WindowError> {
        let mut glfw =
            glfw::init(glfw::fail_on_errors).map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        let centered = glfw.with_primary_monitor(|_, monitor| {
            monitor.and_then(|m| m.get_video_mode()).map(|mode| {
                (
                    (mode.width.saturating_sub(width) / 2) as i32,
                    (mode.height.saturating_sub(height) / 2) as i32,
                )
            })
        });
        if let Some((x, y)) = centered {
            window.set_pos(x, y);
        }

        window.set_key_polling(true);
        window.set_mouse_button_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_close_polling(true);
        window.focus();

        log::info!("created {width}x{height} window \"{title}\"");

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Whether the user or the application requested closure
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Request (or cancel) window closure
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Drain pending OS messages into the event channel
    ///
    /// Non-blocking: processes whatever is queued and returns immediately.
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Iterate the events gathered by the last [`Window::poll_events`]
    pub fn flush_events(&self) -> glfw::FlushedMessages<'_, (f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Client-area size in pixels
    pub fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width as u32, height as u32)
    }
}
