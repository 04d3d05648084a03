use std::time::{Duration, Instant};

/// Frame clock - reports seconds elapsed between ticks
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    max_delta: Option<f32>,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta: None,
        }
    }

    /// Cap reported deltas (window drags and breakpoints stall the loop)
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = Some(max_delta.as_secs_f32());
        self
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        match self.max_delta {
            Some(max) => delta.min(max),
            None => delta,
        }
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009, "delta too small: {}", delta);
    }

    #[test]
    fn clock_caps_delta() {
        let mut clock = Clock::new().with_max_delta(Duration::from_millis(5));

        thread::sleep(Duration::from_millis(20));
        let delta = clock.tick();

        assert!(delta <= 0.005 + f32::EPSILON, "delta not capped: {}", delta);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        let delta = clock.tick();
        assert!(delta < 0.009);
    }
}
