pub mod app;
pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod rng;
pub mod session;
pub mod systems;
pub mod ui;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

/// Frame clock: measures the time between consecutive updates.
#[derive(Debug, Clone)]
pub struct Time {
    delta: Duration,
    last_update: Instant,
}

impl Time {
    #[must_use]
    pub fn new() -> Self {
        Self {
            delta: Duration::default(),
            last_update: Instant::now(),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_update);
        self.last_update = now;
    }

    #[must_use]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    #[must_use]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    #[must_use]
    pub fn since_update(&self) -> Duration {
        self.last_update.elapsed()
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
