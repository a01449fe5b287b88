//! Fade transition demo
//!
//! Opens a fixed 800x600 window with a click target in the center of the
//! client area. A left click that begins and ends inside the target runs a
//! fade-out/fade-in cycle over the scene; Escape quits.

use frame_shell::prelude::*;

/// Demo application: one invisible button that triggers the fade.
struct FadeDemo {
    button: Rect,
    fades_triggered: u32,
}

impl FadeDemo {
    fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            button: Rect::from_center(
                window_width as f32 / 2.0,
                window_height as f32 / 2.0,
                200.0,
                80.0,
            ),
            fades_triggered: 0,
        }
    }
}

impl Application for FadeDemo {
    fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        log::info!("click the center of the window to trigger a fade, Escape to quit");
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        if engine.input().is_key_just_pressed(KeyCode::Escape) {
            engine.quit();
            return Ok(());
        }

        if !engine.is_fading() && engine.button_clicked(&self.button) {
            self.fades_triggered += 1;
            log::info!(
                "button clicked at {:?} ({} so far), starting fade",
                engine.input().mouse_position(),
                self.fades_triggered
            );
            engine.begin_fade();
        }

        Ok(())
    }

    fn handle_event(&mut self, _engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        if let AppEvent::MouseButton { button, pressed } = event {
            log::debug!("mouse {button:?} {}", if pressed { "down" } else { "up" });
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        log::info!(
            "demo finished after {} frames and {} fades",
            engine.clock().frame_count(),
            self.fades_triggered
        );
    }
}

/// Optional config file next to the executable's working directory.
const CONFIG_PATH: &str = "fade_demo.toml";

fn load_config() -> Result<EngineConfig, ConfigError> {
    if std::path::Path::new(CONFIG_PATH).exists() {
        EngineConfig::load_from_file(CONFIG_PATH)
    } else {
        Ok(EngineConfig::default())
    }
}

fn main() {
    frame_shell::foundation::logging::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("could not load {CONFIG_PATH}: {e}");
            std::process::exit(1);
        }
    };

    let mut app = FadeDemo::new(config.window.width, config.window.height);
    if let Err(e) = Engine::run(&config, Box::new(HeadlessRenderer::new()), &mut app) {
        log::error!("fatal: {e}");
        std::process::exit(1);
    }
}
