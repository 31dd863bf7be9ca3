//! # ZoneFlight Client
//! The predictive half of the flight protocol. Applies the server's flight
//! decisions to the local body, keeps fall damage off while flying and for a
//! short safety window afterwards, and re-announces its belief when local
//! physics drifts from it.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod transport;
pub mod shared {
    pub use zoneflight_shared::{FlightBody, FlightMessage, FlightStatus, GameInstant};
}

mod belief;
mod client;
mod client_config;
mod error;
mod events;

pub use belief::ClientFlightBelief;
pub use client::FlightClient;
pub use client_config::ClientConfig;
pub use error::FlightClientError;
pub use events::{ClientEvent, ClientEvents, ErrorEvent, FlightStatusEvent};
