use std::time::{Duration, Instant};

/// Variable-rate tick timer.
///
/// The interval is passed in on every check, so a speed change after a tick
/// applies to the very next one.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    last_tick: Option<Instant>,
}

impl TickScheduler {
    /// Creates a stopped scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self { last_tick: None }
    }

    /// Starts counting the first interval from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.last_tick = Some(now);
    }

    pub fn stop(&mut self) {
        self.last_tick = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Returns true and restarts the interval when a tick is due at `now`.
    pub fn poll(&mut self, now: Instant, interval: Duration) -> bool {
        let Some(last_tick) = self.last_tick else {
            return false;
        };
        if now.saturating_duration_since(last_tick) < interval {
            return false;
        }
        self.last_tick = Some(now);
        true
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
