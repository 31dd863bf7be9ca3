use zoneflight_shared::PlayerId;

/// Deferred server work. Tasks only run from inside
/// [`FlightServer::receive`](crate::FlightServer::receive), so they mutate
/// player state on the same thread as everything else.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum FlightTask {
    /// One-shot: put the fall-damage multiplier back after a disable
    RestoreFallDamage { player: PlayerId, multiplier: f32 },
    /// Repeating: advance a player's leave-zone countdown by one step
    LeaveCountdownStep { player: PlayerId },
}

impl FlightTask {
    pub(crate) fn tag(&self) -> &'static str {
        match self {
            FlightTask::RestoreFallDamage { .. } => "restore_fall_damage",
            FlightTask::LeaveCountdownStep { .. } => "leave_zone_countdown",
        }
    }
}
