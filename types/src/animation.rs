//! Frame-delta animation timing.
//!
//! All animation in the card is driven by the render loop: each frame the
//! measured delta is fed into timers, which report clamped progress. There
//! are no deferred callbacks, so tearing the view down cannot leave a timer
//! to fire against disposed state.

use std::time::Duration;

#[must_use]
pub fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Cubic ease-out, used for stage fade-ins and the sound-hint slide.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Where an animation currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Completed,
}

/// Accumulates frame deltas against a fixed duration.
#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, EffectTimer, ease_out_cubic, normalized_progress};
    use std::time::Duration;

    #[test]
    fn progress_clamped_at_one() {
        let mut timer = EffectTimer::new(Duration::from_millis(10));
        timer.advance(Duration::from_millis(1000));
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);
        assert!(matches!(timer.phase(), AnimPhase::Completed));
    }

    #[test]
    fn zero_duration_immediately_completed() {
        let timer = EffectTimer::new(Duration::ZERO);
        assert!(matches!(timer.phase(), AnimPhase::Completed));
    }

    #[test]
    fn advance_keeps_running_until_duration() {
        let mut timer = EffectTimer::new(Duration::from_millis(200));
        timer.advance(Duration::from_millis(100));
        assert!(matches!(
            timer.phase(),
            AnimPhase::Running { progress } if (progress - 0.5).abs() < 0.01
        ));
        timer.advance(Duration::from_millis(100));
        assert!(matches!(timer.phase(), AnimPhase::Completed));
    }

    #[test]
    fn reset_restarts_the_timer() {
        let mut timer = EffectTimer::new(Duration::from_millis(100));
        timer.advance(Duration::from_millis(150));
        timer.reset();
        assert!(matches!(timer.phase(), AnimPhase::Running { .. }));
    }

    #[test]
    fn ease_out_cubic_endpoints() {
        assert!((ease_out_cubic(0.0)).abs() < f32::EPSILON);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f32::EPSILON);
        // Monotonic on a coarse grid.
        let mut last = 0.0;
        for i in 0..=10 {
            let v = ease_out_cubic(i as f32 / 10.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn normalized_progress_midpoint() {
        let p = normalized_progress(Duration::from_millis(50), Duration::from_millis(100));
        assert!((p - 0.5).abs() < 0.01);
    }
}
