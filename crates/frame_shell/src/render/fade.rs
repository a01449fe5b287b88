//! Two-phase fade transition
//!
//! Fading out ramps a solid overlay from transparent to opaque; fading in
//! ramps it back down. Each phase runs a fresh countdown on the frame clock,
//! so a full cycle takes two timer lifetimes. The two phases are variants of
//! one enum, which makes the "never fading out and in at once" invariant
//! structural.

use crate::foundation::time::{FrameClock, TimerError, TimerId};
use crate::render::RenderBackend;

/// Default length of each fade phase, in ticks
pub const DEFAULT_FADE_TICKS: u32 = 30;

/// Phase of the fade transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeState {
    /// No transition in progress
    Idle,
    /// Overlay ramping from transparent to opaque
    FadingOut,
    /// Overlay ramping from opaque back to transparent
    FadingIn,
}

/// Countdown-driven fade state machine
///
/// Owned by the frame orchestrator and stepped exactly once per frame.
/// The overlay opacity is pushed straight to the renderer, never stored
/// here.
#[derive(Debug)]
pub struct FadeTransition {
    state: FadeState,
    duration_ticks: u32,
    timer: TimerId,
}

impl FadeTransition {
    /// Create an idle transition running `duration_ticks` per phase on the
    /// given timer id
    pub fn new(timer: TimerId, duration_ticks: u32) -> Self {
        debug_assert!(duration_ticks > 0, "zero-length fade phase");
        Self {
            state: FadeState::Idle,
            duration_ticks,
            timer,
        }
    }

    /// Current phase
    pub fn state(&self) -> FadeState {
        self.state
    }

    /// Whether a transition is in progress
    pub fn is_active(&self) -> bool {
        self.state != FadeState::Idle
    }

    /// Request a fade-out
    ///
    /// Ignored unless idle; a transition already in progress runs to
    /// completion.
    pub fn begin(&mut self) {
        if self.state == FadeState::Idle {
            self.state = FadeState::FadingOut;
        } else {
            log::debug!("fade request ignored, transition already in progress");
        }
    }

    /// Evaluate one frame of the transition
    ///
    /// Call once per frame, between the renderer's begin and end. Timer
    /// errors here mean the fade timer id collided with another subsystem
    /// and are propagated as fatal.
    pub fn step(
        &mut self,
        clock: &mut FrameClock,
        renderer: &mut dyn RenderBackend,
    ) -> Result<(), TimerError> {
        match self.state {
            FadeState::Idle => {}
            FadeState::FadingOut => {
                if clock.is_running(self.timer) {
                    let remaining = clock.remaining(self.timer)?;
                    if remaining > 0 {
                        renderer.set_fade_blend(1.0 - self.fraction(remaining));
                    } else {
                        // Phase complete; the fade-in runs on a fresh timer.
                        clock.delete_timer(self.timer)?;
                        self.state = FadeState::FadingIn;
                    }
                } else {
                    renderer.start_fade_effect();
                    clock.start_timer(self.timer, self.duration_ticks)?;
                }
            }
            FadeState::FadingIn => {
                if clock.is_running(self.timer) {
                    let remaining = clock.remaining(self.timer)?;
                    if remaining > 0 {
                        renderer.set_fade_blend(self.fraction(remaining));
                    } else {
                        renderer.stop_fade_effect();
                        clock.delete_timer(self.timer)?;
                        self.state = FadeState::Idle;
                        log::debug!("fade cycle complete at frame {}", clock.frame_count());
                    }
                } else {
                    clock.start_timer(self.timer, self.duration_ticks)?;
                }
            }
        }
        Ok(())
    }

    fn fraction(&self, remaining: u32) -> f32 {
        remaining as f32 / self.duration_ticks as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderError;
    use crate::window::Window;
    use approx::assert_relative_eq;

    #[derive(Default)]
    struct RecordingRenderer {
        blends: Vec<f32>,
        start_calls: u32,
        stop_calls: u32,
    }

    impl RenderBackend for RecordingRenderer {
        fn initialize(
            &mut self,
            _width: u32,
            _height: u32,
            _window: &mut Window,
        ) -> Result<(), RenderError> {
            Ok(())
        }

        fn begin_frame(&mut self) {}

        fn end_frame(&mut self, _width: u32, _height: u32) {}

        fn start_fade_effect(&mut self) {
            self.start_calls += 1;
        }

        fn stop_fade_effect(&mut self) {
            self.stop_calls += 1;
        }

        fn set_fade_blend(&mut self, blend: f32) {
            self.blends.push(blend);
        }

        fn shutdown(&mut self) {}
    }

    const TIMER: TimerId = TimerId(9);
    const TICKS: u32 = 4;

    /// Run one frame the way the orchestrator does: tick, then evaluate.
    fn frame(fade: &mut FadeTransition, clock: &mut FrameClock, renderer: &mut RecordingRenderer) {
        clock.advance();
        fade.step(clock, renderer).unwrap();
    }

    #[test]
    fn test_idle_step_is_inert() {
        let mut clock = FrameClock::new();
        let mut fade = FadeTransition::new(TIMER, TICKS);
        let mut renderer = RecordingRenderer::default();

        frame(&mut fade, &mut clock, &mut renderer);
        assert_eq!(fade.state(), FadeState::Idle);
        assert!(!clock.is_running(TIMER));
        assert!(renderer.blends.is_empty());
        assert_eq!(renderer.start_calls, 0);
    }

    #[test]
    fn test_full_fade_cycle() {
        let mut clock = FrameClock::new();
        let mut fade = FadeTransition::new(TIMER, TICKS);
        let mut renderer = RecordingRenderer::default();

        fade.begin();
        assert_eq!(fade.state(), FadeState::FadingOut);

        // Fade-out: one frame to arm the timer, TICKS frames to run it down.
        for _ in 0..=TICKS {
            frame(&mut fade, &mut clock, &mut renderer);
        }
        assert_eq!(fade.state(), FadeState::FadingIn);
        assert_eq!(renderer.start_calls, 1);
        assert_eq!(renderer.stop_calls, 0);

        // Fade-in: same shape, ending back at idle.
        for _ in 0..=TICKS {
            frame(&mut fade, &mut clock, &mut renderer);
        }
        assert_eq!(fade.state(), FadeState::Idle);
        assert_eq!(renderer.stop_calls, 1);
        assert!(!clock.is_running(TIMER));

        // Overlay ramps up through fade-out, back down through fade-in.
        let expected = [0.25, 0.5, 0.75, 0.75, 0.5, 0.25];
        assert_eq!(renderer.blends.len(), expected.len());
        for (blend, want) in renderer.blends.iter().zip(expected) {
            assert_relative_eq!(*blend, want);
        }
    }

    #[test]
    fn test_begin_while_active_is_ignored() {
        let mut clock = FrameClock::new();
        let mut fade = FadeTransition::new(TIMER, TICKS);
        let mut renderer = RecordingRenderer::default();

        fade.begin();
        for _ in 0..3 {
            frame(&mut fade, &mut clock, &mut renderer);
        }
        let mid_state = fade.state();
        let mid_remaining = clock.remaining(TIMER).unwrap();

        fade.begin();
        assert_eq!(fade.state(), mid_state);
        assert_eq!(clock.remaining(TIMER).unwrap(), mid_remaining);
    }

    #[test]
    fn test_cycle_can_repeat() {
        let mut clock = FrameClock::new();
        let mut fade = FadeTransition::new(TIMER, TICKS);
        let mut renderer = RecordingRenderer::default();

        for _ in 0..2 {
            fade.begin();
            while fade.is_active() {
                frame(&mut fade, &mut clock, &mut renderer);
            }
        }
        assert_eq!(renderer.start_calls, 2);
        assert_eq!(renderer.stop_calls, 2);
    }
}
