//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static logo display
    Display,
    /// Logo animating upward
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Splash screen animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// How long the logo stays still before sliding away
    pub display_duration: Duration,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl SplashState {
    /// Duration of scroll-up animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(400);

    pub fn new(display_duration: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            display_duration,
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, terminal_height: u16) {
        self.update_at(self.start_time.elapsed(), terminal_height);
    }

    fn update_at(&mut self, elapsed: Duration, terminal_height: u16) {
        if elapsed < self.display_duration {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < self.display_duration + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let animation_elapsed = elapsed - self.display_duration;
            let progress = animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-out for smooth deceleration
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * (terminal_height as f32);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splash() -> SplashState {
        SplashState::new(Duration::from_millis(1000))
    }

    #[test]
    fn test_new_starts_in_display_phase() {
        let state = splash();
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_skip_immediately_completes() {
        let mut state = splash();
        state.skip();
        assert!(state.is_complete());
        state.skip();
        assert_eq!(state.phase, SplashPhase::Complete);
    }

    #[test]
    fn test_update_stays_in_display_phase_initially() {
        let mut state = splash();
        state.update(24);
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_scrolls_after_display_duration() {
        let mut state = splash();
        state.update_at(Duration::from_millis(1200), 40);
        assert_eq!(state.phase, SplashPhase::ScrollUp);
        assert!(state.scroll_offset > 0.0);
        assert!(state.scroll_offset < 40.0);
    }

    #[test]
    fn test_completes_after_animation() {
        let mut state = splash();
        state.update_at(Duration::from_millis(1400), 40);
        assert!(state.is_complete());
    }

    #[test]
    fn test_zero_display_duration_goes_straight_to_scroll() {
        let mut state = SplashState::new(Duration::ZERO);
        state.update_at(Duration::from_millis(1), 24);
        assert_eq!(state.phase, SplashPhase::ScrollUp);
    }
}
