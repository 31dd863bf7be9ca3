use std::{mem, vec::IntoIter};

use crate::FlightClientError;

pub struct ClientEvents {
    status_changes: Vec<bool>,
    errors: Vec<FlightClientError>,
    empty: bool,
}

impl Default for ClientEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientEvents {
    pub(crate) fn new() -> Self {
        Self {
            status_changes: Vec::new(),
            errors: Vec::new(),
            empty: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: ClientEvent>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: ClientEvent>(&self) -> bool {
        V::has(self)
    }

    pub(crate) fn push_status_change(&mut self, is_flying: bool) {
        self.status_changes.push(is_flying);
        self.empty = false;
    }

    pub(crate) fn push_error(&mut self, error: FlightClientError) {
        self.errors.push(error);
        self.empty = false;
    }
}

// Event Trait
pub trait ClientEvent {
    type Iter;

    fn iter(events: &mut ClientEvents) -> Self::Iter;

    fn has(events: &ClientEvents) -> bool;
}

/// The server's status differed from local belief and was adopted
pub struct FlightStatusEvent;
impl ClientEvent for FlightStatusEvent {
    type Iter = IntoIter<bool>;

    fn iter(events: &mut ClientEvents) -> Self::Iter {
        let list = mem::take(&mut events.status_changes);
        IntoIterator::into_iter(list)
    }

    fn has(events: &ClientEvents) -> bool {
        !events.status_changes.is_empty()
    }
}

// Error Event
pub struct ErrorEvent;
impl ClientEvent for ErrorEvent {
    type Iter = IntoIter<FlightClientError>;

    fn iter(events: &mut ClientEvents) -> Self::Iter {
        let list = mem::take(&mut events.errors);
        IntoIterator::into_iter(list)
    }

    fn has(events: &ClientEvents) -> bool {
        !events.errors.is_empty()
    }
}
