//! Frame-step timing against the frame budget.

use std::collections::VecDeque;
use std::time::Duration;

/// Rolling window of per-frame step durations.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    max_samples: usize,
    over_budget: u64,
    budget: Duration,
}

impl FrameTimer {
    /// Create a timer with a 120-sample window and the given per-frame budget.
    pub fn new(budget: Duration) -> Self {
        Self {
            frame_times: VecDeque::new(),
            max_samples: 120,
            over_budget: 0,
            budget,
        }
    }

    /// Budget for a target frame rate, e.g. 60 fps → ~16.7 ms.
    pub fn for_fps(fps: f64) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / fps.max(1.0)))
    }

    /// Record how long one step took.
    pub fn record(&mut self, dt: Duration) {
        if dt > self.budget {
            self.over_budget += 1;
        }
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
    }

    /// Average step time in milliseconds over the window.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    /// Slowest step in the window, in milliseconds.
    pub fn worst_ms(&self) -> f64 {
        self.frame_times
            .iter()
            .map(|d| d.as_secs_f64() * 1000.0)
            .fold(0.0, f64::max)
    }

    /// Steps that exceeded the budget since creation.
    pub fn over_budget(&self) -> u64 {
        self.over_budget
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::for_fps(60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_zero() {
        let timer = FrameTimer::default();
        assert_eq!(timer.frame_time_ms(), 0.0);
        assert_eq!(timer.worst_ms(), 0.0);
        assert_eq!(timer.over_budget(), 0);
    }

    #[test]
    fn average_and_worst() {
        let mut timer = FrameTimer::new(Duration::from_millis(16));
        timer.record(Duration::from_millis(2));
        timer.record(Duration::from_millis(4));
        assert!((timer.frame_time_ms() - 3.0).abs() < 1e-9);
        assert!((timer.worst_ms() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn counts_over_budget_frames() {
        let mut timer = FrameTimer::new(Duration::from_millis(16));
        timer.record(Duration::from_millis(10));
        timer.record(Duration::from_millis(20));
        timer.record(Duration::from_millis(17));
        assert_eq!(timer.over_budget(), 2);
    }

    #[test]
    fn max_samples_respected() {
        let mut timer = FrameTimer::default();
        for _ in 0..200 {
            timer.record(Duration::from_micros(100));
        }
        assert_eq!(timer.sample_count(), 120);
    }

    #[test]
    fn fps_budget() {
        let timer = FrameTimer::for_fps(60.0);
        assert!((timer.budget().as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }
}
