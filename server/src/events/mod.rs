pub(crate) mod flight_events;

pub use flight_events::*;
