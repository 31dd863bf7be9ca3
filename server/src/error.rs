use thiserror::Error;

use zoneflight_shared::{MessageError, PlayerId};

/// Non-fatal conditions surfaced through [`ErrorEvent`](crate::ErrorEvent)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlightServerError {
    /// Inbound packet could not be decoded
    #[error("Failed to decode packet from player {player}: {source}. The packet was dropped")]
    Decode {
        player: PlayerId,
        #[source]
        source: MessageError,
    },

    /// Outbound packet could not be encoded
    #[error("Failed to encode {kind} for player {player}: {source}")]
    Encode {
        player: PlayerId,
        kind: &'static str,
        #[source]
        source: MessageError,
    },

    /// Transport refused an outbound packet
    #[error("Failed to send {kind} to player {player}. The client resynchronizes on its next heartbeat")]
    SendFailed { player: PlayerId, kind: &'static str },

    /// Outbound packet produced before `listen()` was called
    #[error("Cannot send {kind} to player {player}: the server is not listening. Call FlightServer::listen() first")]
    NotListening { player: PlayerId, kind: &'static str },

    /// Transport receiver reported a failure
    #[error("Packet receiver failed. Remaining inbound packets for this update were skipped")]
    ReceiveFailed,
}
