use std::time::Duration;

use zoneflight_shared::GameInstant;

use crate::TaskKey;

/// A running leave-zone countdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LeaveCountdown {
    pub task: TaskKey,
    pub remaining_secs: u32,
}

/// The server's authoritative view of one player's flight
#[derive(Clone, Debug, Default)]
pub struct PlayerFlightRecord {
    is_flying: bool,
    original_fall_damage: Option<f32>,
    last_seen_inside_zone: Option<GameInstant>,
    leave_countdown: Option<LeaveCountdown>,
    reported_flying: Option<bool>,
    last_repush: Option<GameInstant>,
}

impl PlayerFlightRecord {
    pub fn is_flying(&self) -> bool {
        self.is_flying
    }

    /// Multiplier captured on the first enable of this session
    pub fn original_fall_damage(&self) -> Option<f32> {
        self.original_fall_damage
    }

    pub fn last_seen_inside_zone(&self) -> Option<GameInstant> {
        self.last_seen_inside_zone
    }

    pub fn has_leave_countdown(&self) -> bool {
        self.leave_countdown.is_some()
    }

    /// Seconds left before a forced disable, if a countdown is running
    pub fn countdown_remaining(&self) -> Option<u32> {
        self.leave_countdown.map(|countdown| countdown.remaining_secs)
    }

    /// Last state the client claimed in a status echo
    pub fn reported_flying(&self) -> Option<bool> {
        self.reported_flying
    }

    // Crate-public

    pub(crate) fn set_flying(&mut self, is_flying: bool) {
        self.is_flying = is_flying;
    }

    /// Stores `multiplier` unless one is already captured
    pub(crate) fn capture_fall_damage(&mut self, multiplier: f32) {
        if self.original_fall_damage.is_none() {
            self.original_fall_damage = Some(multiplier);
        }
    }

    pub(crate) fn mark_inside_zone(&mut self, now: &GameInstant) {
        self.last_seen_inside_zone = Some(*now);
    }

    /// Whether the player has been outside for at least `grace`. A player
    /// never seen inside is past grace.
    pub(crate) fn outside_past_grace(&self, now: &GameInstant, grace: Duration) -> bool {
        match &self.last_seen_inside_zone {
            Some(last_inside) => now.has_elapsed(last_inside, grace),
            None => true,
        }
    }

    pub(crate) fn leave_countdown(&self) -> Option<LeaveCountdown> {
        self.leave_countdown
    }

    pub(crate) fn set_leave_countdown(&mut self, countdown: LeaveCountdown) {
        self.leave_countdown = Some(countdown);
    }

    pub(crate) fn take_leave_countdown(&mut self) -> Option<LeaveCountdown> {
        self.leave_countdown.take()
    }

    pub(crate) fn set_reported_flying(&mut self, reported: bool) {
        self.reported_flying = Some(reported);
    }

    /// Claims the re-push slot if `interval` has passed since the last one
    pub(crate) fn try_claim_repush(&mut self, now: &GameInstant, interval: Duration) -> bool {
        if let Some(last) = &self.last_repush {
            if !now.has_elapsed(last, interval) {
                return false;
            }
        }
        self.last_repush = Some(*now);
        true
    }
}
