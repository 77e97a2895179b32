//! Intro timeline: advances morph progress from 0 to 1 over a fixed duration.

use hero_config::schema::{Ease, TimelineConfig};
use tracing::debug;

/// Apply an easing curve to linear progress `t` in [0, 1].
pub fn ease(kind: Ease, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match kind {
        Ease::Linear => t,
        Ease::Power2InOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let u = -2.0 * t + 2.0;
                1.0 - u * u * u / 2.0
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineState {
    Playing,
    Completed,
    Killed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEvent {
    /// Progress reached 1. Emitted exactly once.
    Completed,
}

pub struct Timeline {
    duration: f32,
    ease: Ease,
    elapsed: f32,
    state: TimelineState,
}

impl Timeline {
    /// A timeline that plays for `duration` seconds.
    pub fn new(duration: f32, ease: Ease) -> Self {
        Self {
            duration: duration.max(f32::EPSILON),
            ease,
            elapsed: 0.0,
            state: TimelineState::Playing,
        }
    }

    pub fn from_config(config: &TimelineConfig) -> Self {
        Self::new(config.duration as f32, config.ease)
    }

    /// A timeline that is already finished at progress 1.
    pub fn completed() -> Self {
        Self {
            duration: f32::EPSILON,
            ease: Ease::Linear,
            elapsed: f32::EPSILON,
            state: TimelineState::Completed,
        }
    }

    /// Advance by `dt` seconds. Negative steps are ignored.
    pub fn advance(&mut self, dt: f32) -> Option<TimelineEvent> {
        if self.state != TimelineState::Playing {
            return None;
        }
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        if self.elapsed >= self.duration {
            self.state = TimelineState::Completed;
            debug!(duration = self.duration, "timeline completed");
            return Some(TimelineEvent::Completed);
        }
        None
    }

    /// Stop advancing. Progress stays where it is.
    pub fn kill(&mut self) {
        if self.state == TimelineState::Playing {
            debug!(elapsed = self.elapsed, "timeline killed");
        }
        self.state = TimelineState::Killed;
    }

    /// Eased progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.state == TimelineState::Completed {
            return 1.0;
        }
        ease(self.ease, self.elapsed / self.duration)
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_progress_follows_time() {
        let mut tl = Timeline::new(2.0, Ease::Linear);
        assert_eq!(tl.progress(), 0.0);
        tl.advance(0.5);
        assert!((tl.progress() - 0.25).abs() < 1e-6);
        tl.advance(0.5);
        assert!((tl.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn completes_once() {
        let mut tl = Timeline::new(1.0, Ease::Power2InOut);
        assert_eq!(tl.advance(0.6), None);
        assert_eq!(tl.advance(0.6), Some(TimelineEvent::Completed));
        assert_eq!(tl.advance(0.6), None);
        assert_eq!(tl.state(), TimelineState::Completed);
        assert_eq!(tl.progress(), 1.0);
    }

    #[test]
    fn negative_dt_is_ignored() {
        let mut tl = Timeline::new(1.0, Ease::Linear);
        tl.advance(0.4);
        tl.advance(-0.3);
        assert!((tl.progress() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn killed_timeline_stops() {
        let mut tl = Timeline::new(1.0, Ease::Linear);
        tl.advance(0.3);
        tl.kill();
        assert_eq!(tl.advance(5.0), None);
        assert_eq!(tl.state(), TimelineState::Killed);
        assert!((tl.progress() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn completed_timeline_is_at_one() {
        let mut tl = Timeline::completed();
        assert_eq!(tl.progress(), 1.0);
        assert_eq!(tl.advance(1.0), None);
    }

    #[test]
    fn eased_progress_is_monotonic() {
        for kind in [Ease::Linear, Ease::Power2InOut] {
            let mut last = 0.0;
            for k in 0..=100 {
                let v = ease(kind, k as f32 / 100.0);
                assert!(v >= last, "{kind:?} dipped at {k}");
                last = v;
            }
            assert_eq!(ease(kind, 0.0), 0.0);
            assert_eq!(ease(kind, 1.0), 1.0);
        }
    }

    #[test]
    fn power2_in_out_is_symmetric() {
        assert!((ease(Ease::Power2InOut, 0.5) - 0.5).abs() < 1e-6);
        let a = ease(Ease::Power2InOut, 0.2);
        let b = ease(Ease::Power2InOut, 0.8);
        assert!((a + b - 1.0).abs() < 1e-5);
    }
}
