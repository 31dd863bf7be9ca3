//! # ZoneFlight Shared
//! Common functionality shared between zoneflight-server & zoneflight-client
//! crates: the wire messages, game time, and the physics surface the flight
//! protocol mutates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use naia_serde::{
    BitCounter, BitReader, BitWrite, BitWriter, ConstBitLength, Serde, SerdeErr, UnsignedInteger,
};

mod body;
mod game_time;
mod messages;
mod timer;
mod types;

pub use body::{FlightBody, FALL_VELOCITY_EPSILON};
pub use game_time::GameInstant;
pub use messages::{
    constants::{CHANNEL_NAME, MESSAGE_KIND_BITS},
    error::MessageError,
    flight_message::{max_packet_bits, FlightMessage},
    flight_status::FlightStatus,
    flight_toggle_request::FlightToggleRequest,
    message_kind::MessageKind,
};
pub use timer::Timer;
pub use types::{BlockPos, HostType, PlayerId, WorldPos};
