//! Frame-driven horizontal motion
//!
//! A [`Motion`] moves a comment linearly from its entry x to its exit x over a
//! fixed duration. There is no wall clock inside: the owner advances every
//! motion by the elapsed frame time, so pausing simply stops feeding time in
//! and tests can step time deterministically.

use std::time::Duration;

/// Lifecycle of a single motion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Running,
    Paused,
    Cancelled,
    Finished,
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f32, to: f32, t: f64) -> f32 {
    (from as f64 + (to as f64 - from as f64) * t) as f32
}

/// Linear position-over-time animation
#[derive(Debug, Clone)]
pub struct Motion {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    state: MotionState,
}

impl Motion {
    /// Start a running motion from `from` to `to`
    pub fn start(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            state: MotionState::Running,
        }
    }

    /// Advance by one frame
    ///
    /// Returns `true` only on the frame the motion reaches its end.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.state != MotionState::Running {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.state = MotionState::Finished;
            return true;
        }
        false
    }

    /// Suspend in place; only a running motion can be paused
    pub fn pause(&mut self) {
        if self.state == MotionState::Running {
            self.state = MotionState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == MotionState::Paused {
            self.state = MotionState::Running;
        }
    }

    /// Stop permanently without reporting completion
    pub fn cancel(&mut self) {
        if matches!(self.state, MotionState::Running | MotionState::Paused) {
            self.state = MotionState::Cancelled;
        }
    }

    /// Progress in [0.0, 1.0]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return if self.state == MotionState::Finished { 1.0 } else { 0.0 };
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Current x position
    #[inline]
    pub fn position(&self) -> f32 {
        lerp(self.from, self.to, self.progress())
    }

    #[inline]
    pub fn state(&self) -> MotionState {
        self.state
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == MotionState::Paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(100.0, -20.0, 1.0) - -20.0).abs() < 0.001);
    }

    #[test]
    fn test_linear_position() {
        let mut motion = Motion::start(100.0, -20.0, ms(1200));
        assert_eq!(motion.position(), 100.0);
        motion.advance(ms(600));
        assert!((motion.position() - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_finishes_exactly_once() {
        let mut motion = Motion::start(10.0, 0.0, ms(100));
        assert!(!motion.advance(ms(60)));
        assert!(motion.advance(ms(60)));
        assert_eq!(motion.state(), MotionState::Finished);
        assert_eq!(motion.position(), 0.0);
        assert!(!motion.advance(ms(60)));
    }

    #[test]
    fn test_pause_holds_position() {
        let mut motion = Motion::start(100.0, 0.0, ms(1000));
        motion.advance(ms(250));
        motion.pause();
        let held = motion.position();
        assert!(!motion.advance(ms(5000)));
        assert_eq!(motion.position(), held);

        motion.resume();
        motion.advance(ms(250));
        assert!((motion.position() - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_cancelled_motion_never_finishes() {
        let mut motion = Motion::start(100.0, 0.0, ms(10));
        motion.cancel();
        assert!(!motion.advance(ms(100)));
        assert_eq!(motion.state(), MotionState::Cancelled);
        motion.resume();
        assert_eq!(motion.state(), MotionState::Cancelled);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_frame() {
        let mut motion = Motion::start(5.0, -5.0, Duration::ZERO);
        assert_eq!(motion.position(), 5.0);
        assert!(motion.advance(Duration::ZERO));
        assert_eq!(motion.position(), -5.0);
    }
}
