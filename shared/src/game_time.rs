use std::time::Duration;

/// A point on the host's simulation clock, in milliseconds since the
/// session started. Every protocol operation receives one explicitly so the
/// state machines stay deterministic under test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameInstant {
    millis: u64,
}

impl GameInstant {
    pub fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self {
            millis: secs.saturating_mul(1000),
        }
    }

    pub fn as_millis(&self) -> u64 {
        self.millis
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.millis as f64 / 1000.0
    }

    /// Time elapsed from `earlier` until `self`, zero if `earlier` is later
    pub fn duration_since(&self, earlier: &GameInstant) -> Duration {
        Duration::from_millis(self.millis.saturating_sub(earlier.millis))
    }

    pub fn add(&self, duration: Duration) -> GameInstant {
        let delta = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self {
            millis: self.millis.saturating_add(delta),
        }
    }

    /// Whether at least `duration` has passed since `earlier`
    pub fn has_elapsed(&self, earlier: &GameInstant, duration: Duration) -> bool {
        self.duration_since(earlier) >= duration
    }
}
