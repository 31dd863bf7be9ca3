use zoneflight_server::{
    DisableReason, ErrorEvent, FlightDeniedEvent, FlightDisabledEvent, FlightEnabledEvent,
    FlightEvents, FlightServerError, LeaveWarningEvent, Notification, NotificationEvent,
    StatusReportEvent,
};
use zoneflight_shared::{GameInstant, PlayerId};

/// Every server event seen by a [`Harness`](crate::Harness), stamped with
/// the instant of the `receive` call that produced it
#[derive(Default)]
pub struct EventLog {
    pub enabled: Vec<(GameInstant, PlayerId)>,
    pub disabled: Vec<(GameInstant, PlayerId, DisableReason)>,
    pub denied: Vec<(GameInstant, PlayerId)>,
    pub warnings: Vec<(GameInstant, PlayerId, u32)>,
    pub notifications: Vec<(GameInstant, PlayerId, Notification)>,
    pub status_reports: Vec<(GameInstant, PlayerId, bool)>,
    pub errors: Vec<FlightServerError>,
}

impl EventLog {
    pub fn record(&mut self, now: GameInstant, mut events: FlightEvents) {
        if events.is_empty() {
            return;
        }
        for player in events.read::<FlightEnabledEvent>() {
            self.enabled.push((now, player));
        }
        for (player, reason) in events.read::<FlightDisabledEvent>() {
            self.disabled.push((now, player, reason));
        }
        for player in events.read::<FlightDeniedEvent>() {
            self.denied.push((now, player));
        }
        for (player, seconds_left) in events.read::<LeaveWarningEvent>() {
            self.warnings.push((now, player, seconds_left));
        }
        for (player, notification) in events.read::<NotificationEvent>() {
            self.notifications.push((now, player, notification));
        }
        for (player, is_flying) in events.read::<StatusReportEvent>() {
            self.status_reports.push((now, player, is_flying));
        }
        for error in events.read::<ErrorEvent>() {
            self.errors.push(error);
        }
    }

    /// Warnings for `player` as (millis, seconds left)
    pub fn warnings_for(&self, player: &PlayerId) -> Vec<(u64, u32)> {
        self.warnings
            .iter()
            .filter(|(_, warned, _)| warned == player)
            .map(|(at, _, seconds_left)| (at.as_millis(), *seconds_left))
            .collect()
    }

    /// Disables for `player` as (millis, reason)
    pub fn disables_for(&self, player: &PlayerId) -> Vec<(u64, DisableReason)> {
        self.disabled
            .iter()
            .filter(|(_, disabled, _)| disabled == player)
            .map(|(at, _, reason)| (at.as_millis(), *reason))
            .collect()
    }

    pub fn notifications_for(&self, player: &PlayerId) -> Vec<Notification> {
        self.notifications
            .iter()
            .filter(|(_, notified, _)| notified == player)
            .map(|(_, _, notification)| notification.clone())
            .collect()
    }
}
