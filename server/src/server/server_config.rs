use std::{default::Default, time::Duration};

/// Contains Config properties which will be used by the Server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// How often every online player's zone membership is re-evaluated
    pub tick_interval: Duration,
    /// How long a flying player may be outside the zone before the
    /// countdown starts. Absorbs momentary boundary crossings.
    pub leave_zone_grace: Duration,
    /// Length of the leave-zone countdown, in countdown steps
    pub forced_disable_delay_secs: u32,
    /// Remaining-seconds values at which the player is warned
    pub warning_checkpoints: Vec<u32>,
    /// Wall time of one countdown step
    pub countdown_step: Duration,
    /// How long fall damage stays off after a disable
    pub fall_damage_restore_delay: Duration,
    /// Restored when no multiplier was captured this session
    pub default_fall_damage_multiplier: f32,
    /// Minimum spacing between corrective pushes sent in answer to a
    /// client echo that disagrees with the server
    pub status_repush_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            leave_zone_grace: Duration::from_secs(5),
            forced_disable_delay_secs: 30,
            warning_checkpoints: vec![30, 15, 5],
            countdown_step: Duration::from_secs(1),
            fall_damage_restore_delay: Duration::from_secs(5),
            default_fall_damage_multiplier: 1.0,
            status_repush_interval: Duration::from_secs(1),
        }
    }
}

impl ServerConfig {
    pub(crate) fn is_warning_checkpoint(&self, seconds_left: u32) -> bool {
        self.warning_checkpoints.contains(&seconds_left)
    }
}
