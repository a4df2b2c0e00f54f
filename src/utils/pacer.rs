use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Keeps successive generations at least `period` apart.
///
/// Only the part of the period not already spent on computing and drawing
/// is slept away.
pub struct GenerationPacer {
    period: Duration,
    timer: Instant,
    step_smoothed: f64,
}

impl GenerationPacer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timer: Instant::now(),
            step_smoothed: 0.,
        }
    }

    /// Smoothed generations per second.
    pub fn rate(&self) -> f64 {
        1. / self.step_smoothed
    }

    pub fn delay(&mut self) {
        let before_wait = self.timer.elapsed();

        if self.period > before_wait {
            sleep(self.period - before_wait);
        }

        let step = self.timer.elapsed().as_secs_f64();
        self.step_smoothed += (step - self.step_smoothed) * 0.1;

        self.timer = Instant::now();
    }
}

impl Default for GenerationPacer {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
