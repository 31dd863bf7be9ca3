use std::time::Duration;

use zoneflight_shared::GameInstant;

/// What the client believes about its own flight, reset on every join
#[derive(Clone, Debug)]
pub struct ClientFlightBelief {
    believed_flying: bool,
    awaiting_ack: Option<GameInstant>,
    original_fall_damage: f32,
    last_flight_end: Option<GameInstant>,
    last_resync_sent: Option<GameInstant>,
    resync_accumulator: Duration,
    last_toggle_sent: Option<GameInstant>,
}

impl Default for ClientFlightBelief {
    fn default() -> Self {
        Self::joined(1.0)
    }
}

impl ClientFlightBelief {
    /// Fresh belief for a body spawned with `fall_damage_multiplier`
    pub fn joined(fall_damage_multiplier: f32) -> Self {
        Self {
            believed_flying: false,
            awaiting_ack: None,
            original_fall_damage: fall_damage_multiplier,
            last_flight_end: None,
            last_resync_sent: None,
            resync_accumulator: Duration::ZERO,
            last_toggle_sent: None,
        }
    }

    pub fn believed_flying(&self) -> bool {
        self.believed_flying
    }

    pub fn is_awaiting_ack(&self) -> bool {
        self.awaiting_ack.is_some()
    }

    pub fn original_fall_damage(&self) -> f32 {
        self.original_fall_damage
    }

    pub fn last_flight_end(&self) -> Option<GameInstant> {
        self.last_flight_end
    }

    pub fn last_resync_sent(&self) -> Option<GameInstant> {
        self.last_resync_sent
    }

    pub fn resync_accumulator(&self) -> Duration {
        self.resync_accumulator
    }

    pub fn last_toggle_sent(&self) -> Option<GameInstant> {
        self.last_toggle_sent
    }

    // Crate-public

    pub(crate) fn set_believed_flying(&mut self, flying: bool) {
        self.believed_flying = flying;
    }

    pub(crate) fn set_original_fall_damage(&mut self, multiplier: f32) {
        self.original_fall_damage = multiplier;
    }

    pub(crate) fn mark_flight_end(&mut self, now: &GameInstant) {
        self.last_flight_end = Some(*now);
    }

    /// Whether flight ended less than `window` ago
    pub(crate) fn flight_ended_within(&self, now: &GameInstant, window: Duration) -> bool {
        match &self.last_flight_end {
            Some(ended) => !now.has_elapsed(ended, window),
            None => false,
        }
    }

    pub(crate) fn await_ack(&mut self, now: &GameInstant) {
        self.awaiting_ack = Some(*now);
    }

    pub(crate) fn clear_ack(&mut self) {
        self.awaiting_ack = None;
    }

    /// Stops awaiting a reply older than `timeout`. Returns true if it did.
    pub(crate) fn expire_ack(&mut self, now: &GameInstant, timeout: Duration) -> bool {
        match &self.awaiting_ack {
            Some(sent) if now.has_elapsed(sent, timeout) => {
                self.awaiting_ack = None;
                true
            }
            _ => false,
        }
    }

    /// Claims the toggle slot if `cooldown` has passed since the last request
    pub(crate) fn try_claim_toggle(&mut self, now: &GameInstant, cooldown: Duration) -> bool {
        if let Some(last) = &self.last_toggle_sent {
            if !now.has_elapsed(last, cooldown) {
                return false;
            }
        }
        self.last_toggle_sent = Some(*now);
        true
    }

    /// Claims the shared resync slot if `debounce` has passed since the last
    /// announcement
    pub(crate) fn try_claim_resync(&mut self, now: &GameInstant, debounce: Duration) -> bool {
        if let Some(last) = &self.last_resync_sent {
            if !now.has_elapsed(last, debounce) {
                return false;
            }
        }
        self.last_resync_sent = Some(*now);
        true
    }

    pub(crate) fn stamp_resync(&mut self, now: &GameInstant) {
        self.last_resync_sent = Some(*now);
    }

    pub(crate) fn accumulate(&mut self, dt: Duration) {
        self.resync_accumulator = self.resync_accumulator.saturating_add(dt);
    }

    pub(crate) fn reset_accumulator(&mut self) {
        self.resync_accumulator = Duration::ZERO;
    }
}
