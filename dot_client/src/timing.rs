//! Fixed-rate update ticks driven from the event loop

use std::time::{Duration, Instant, TryFromFloatSecsError};

/// Most ticks run for one wake-up before the backlog is dropped
const MAX_CATCH_UP: u32 = 5;

/// Counts update ticks due at a fixed interval
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
        }
    }

    /// Build a ticker from a rate in seconds per tick
    pub fn from_secs(secs: f32, now: Instant) -> Result<Self, TryFromFloatSecsError> {
        Ok(Self::new(Duration::try_from_secs_f32(secs)?, now))
    }

    /// Restart the schedule from `now`
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.interval;
    }

    /// When the next tick is due
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Delta time reported for every tick
    pub fn dt(&self) -> f32 {
        self.interval.as_secs_f32()
    }

    /// Number of ticks due at `now`, advancing the schedule past them
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now >= self.next && ticks < MAX_CATCH_UP {
            ticks += 1;
            self.next += self.interval;
        }
        if now >= self.next {
            tracing::debug!(behind = ?(now - self.next), "update loop fell behind, skipping ticks");
            self.next = now + self.interval;
        }
        ticks
    }
}
