//! # ZoneFlight Server
//! The authoritative half of the flight protocol. Owns every player's
//! flying flag, validates toggle requests against an access oracle, drives
//! the leave-zone warning countdown and restores fall damage after a safety
//! delay. All state is mutated from [`FlightServer::receive`], on the thread
//! that owns the server.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod transport;
pub mod shared {
    pub use zoneflight_shared::{
        BlockPos, FlightBody, FlightMessage, FlightStatus, GameInstant, PlayerId, WorldPos,
    };
}

mod access;
mod error;
mod events;
mod notification;
mod record;
mod schedule;
mod server;
mod world;

pub use access::{AccessDecision, AccessError, AccessOracle};
pub use error::FlightServerError;
pub use events::{
    ErrorEvent, FlightDeniedEvent, FlightDisabledEvent, FlightEnabledEvent, FlightEvent,
    FlightEvents, LeaveWarningEvent, NotificationEvent, StatusReportEvent,
};
pub use notification::{DisableReason, Notification};
pub use record::PlayerFlightRecord;
pub use schedule::TaskKey;
pub use server::{FlightServer, ServerConfig};
pub use world::FlightWorld;
