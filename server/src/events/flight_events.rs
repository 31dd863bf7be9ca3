use std::{mem, vec::IntoIter};

use zoneflight_shared::PlayerId;

use crate::{DisableReason, FlightServerError, Notification};

/// Everything that happened during one [`FlightServer::receive`](crate::FlightServer::receive) call
pub struct FlightEvents {
    enabled: Vec<PlayerId>,
    disabled: Vec<(PlayerId, DisableReason)>,
    denied: Vec<PlayerId>,
    warnings: Vec<(PlayerId, u32)>,
    notifications: Vec<(PlayerId, Notification)>,
    status_reports: Vec<(PlayerId, bool)>,
    errors: Vec<FlightServerError>,

    empty: bool,
}

impl Default for FlightEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightEvents {
    pub(crate) fn new() -> Self {
        Self {
            enabled: Vec::new(),
            disabled: Vec::new(),
            denied: Vec::new(),
            warnings: Vec::new(),
            notifications: Vec::new(),
            status_reports: Vec::new(),
            errors: Vec::new(),

            empty: true,
        }
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: FlightEvent>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: FlightEvent>(&self) -> bool {
        V::has(self)
    }

    // Crate-public

    pub(crate) fn push_enabled(&mut self, player: &PlayerId) {
        self.enabled.push(player.clone());
        self.empty = false;
    }

    pub(crate) fn push_disabled(&mut self, player: &PlayerId, reason: DisableReason) {
        self.disabled.push((player.clone(), reason));
        self.empty = false;
    }

    pub(crate) fn push_denied(&mut self, player: &PlayerId) {
        self.denied.push(player.clone());
        self.empty = false;
    }

    pub(crate) fn push_warning(&mut self, player: &PlayerId, seconds_left: u32) {
        self.warnings.push((player.clone(), seconds_left));
        self.empty = false;
    }

    pub(crate) fn push_notification(&mut self, player: &PlayerId, notification: Notification) {
        self.notifications.push((player.clone(), notification));
        self.empty = false;
    }

    pub(crate) fn push_status_report(&mut self, player: &PlayerId, is_flying: bool) {
        self.status_reports.push((player.clone(), is_flying));
        self.empty = false;
    }

    pub(crate) fn push_error(&mut self, error: FlightServerError) {
        self.errors.push(error);
        self.empty = false;
    }
}

// Event Trait
pub trait FlightEvent {
    type Iter;

    fn iter(events: &mut FlightEvents) -> Self::Iter;

    fn has(events: &FlightEvents) -> bool;
}

// FlightEnabledEvent
pub struct FlightEnabledEvent;
impl FlightEvent for FlightEnabledEvent {
    type Iter = IntoIter<PlayerId>;

    fn iter(events: &mut FlightEvents) -> Self::Iter {
        let list = mem::take(&mut events.enabled);
        IntoIterator::into_iter(list)
    }

    fn has(events: &FlightEvents) -> bool {
        !events.enabled.is_empty()
    }
}

// FlightDisabledEvent
pub struct FlightDisabledEvent;
impl FlightEvent for FlightDisabledEvent {
    type Iter = IntoIter<(PlayerId, DisableReason)>;

    fn iter(events: &mut FlightEvents) -> Self::Iter {
        let list = mem::take(&mut events.disabled);
        IntoIterator::into_iter(list)
    }

    fn has(events: &FlightEvents) -> bool {
        !events.disabled.is_empty()
    }
}

/// A grounded player asked to fly without the access right
pub struct FlightDeniedEvent;
impl FlightEvent for FlightDeniedEvent {
    type Iter = IntoIter<PlayerId>;

    fn iter(events: &mut FlightEvents) -> Self::Iter {
        let list = mem::take(&mut events.denied);
        IntoIterator::into_iter(list)
    }

    fn has(events: &FlightEvents) -> bool {
        !events.denied.is_empty()
    }
}

/// A leave-zone countdown reached one of its checkpoints
pub struct LeaveWarningEvent;
impl FlightEvent for LeaveWarningEvent {
    type Iter = IntoIter<(PlayerId, u32)>;

    fn iter(events: &mut FlightEvents) -> Self::Iter {
        let list = mem::take(&mut events.warnings);
        IntoIterator::into_iter(list)
    }

    fn has(events: &FlightEvents) -> bool {
        !events.warnings.is_empty()
    }
}

/// Player-facing messages the host should deliver
pub struct NotificationEvent;
impl FlightEvent for NotificationEvent {
    type Iter = IntoIter<(PlayerId, Notification)>;

    fn iter(events: &mut FlightEvents) -> Self::Iter {
        let list = mem::take(&mut events.notifications);
        IntoIterator::into_iter(list)
    }

    fn has(events: &FlightEvents) -> bool {
        !events.notifications.is_empty()
    }
}

/// A client echoed its believed flight state
pub struct StatusReportEvent;
impl FlightEvent for StatusReportEvent {
    type Iter = IntoIter<(PlayerId, bool)>;

    fn iter(events: &mut FlightEvents) -> Self::Iter {
        let list = mem::take(&mut events.status_reports);
        IntoIterator::into_iter(list)
    }

    fn has(events: &FlightEvents) -> bool {
        !events.status_reports.is_empty()
    }
}

// ErrorEvent
pub struct ErrorEvent;
impl FlightEvent for ErrorEvent {
    type Iter = IntoIter<FlightServerError>;

    fn iter(events: &mut FlightEvents) -> Self::Iter {
        let list = mem::take(&mut events.errors);
        IntoIterator::into_iter(list)
    }

    fn has(events: &FlightEvents) -> bool {
        !events.errors.is_empty()
    }
}
