use std::time::Duration;

use crate::GameInstant;

/// A repeating alarm driven by an externally supplied clock
pub struct Timer {
    duration: Duration,
    last: GameInstant,
}

impl Timer {
    /// Creates a timer that first rings `duration` after `now`
    pub fn new(duration: Duration, now: &GameInstant) -> Self {
        Self {
            duration,
            last: *now,
        }
    }

    pub fn reset(&mut self, now: &GameInstant) {
        self.last = *now;
    }

    pub fn ringing(&self, now: &GameInstant) -> bool {
        now.has_elapsed(&self.last, self.duration)
    }

    /// Returns true and re-arms the timer if it is ringing
    pub fn try_reset(&mut self, now: &GameInstant) -> bool {
        if self.ringing(now) {
            self.reset(now);
            true
        } else {
            false
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
