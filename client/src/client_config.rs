use std::{default::Default, time::Duration};

/// Contains Config properties which will be used by a Client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Minimum spacing between two toggle requests
    pub toggle_cooldown: Duration,
    /// After a local flight end, drifted free movement is left alone for
    /// this long
    pub local_flight_grace: Duration,
    /// Minimum spacing between two corrective status announcements
    pub resync_debounce: Duration,
    /// How often the believed state is announced regardless of drift
    pub heartbeat_interval: Duration,
    /// Fall damage stays off this long after flight ends
    pub post_flight_safe_window: Duration,
    /// A toggle request with no reply stops being awaited after this long
    pub ack_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            toggle_cooldown: Duration::from_secs(1),
            local_flight_grace: Duration::from_millis(150),
            resync_debounce: Duration::from_millis(250),
            heartbeat_interval: Duration::from_secs(3),
            post_flight_safe_window: Duration::from_secs(5),
            ack_timeout: Duration::from_secs(2),
        }
    }
}
