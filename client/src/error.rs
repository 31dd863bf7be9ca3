use thiserror::Error;
use zoneflight_shared::MessageError;

/// Non-fatal conditions surfaced through [`ErrorEvent`](crate::ErrorEvent)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlightClientError {
    #[error("Failed to decode packet from the server: {source}. The packet was dropped")]
    Decode {
        #[source]
        source: MessageError,
    },
    #[error("Failed to encode {kind}: {source}")]
    Encode {
        kind: &'static str,
        #[source]
        source: MessageError,
    },
    #[error("Received {kind}, which the server never sends. The packet was dropped")]
    UnexpectedMessage { kind: &'static str },
    #[error("Failed to send {kind} to the server. The next heartbeat announces the current state")]
    SendFailed { kind: &'static str },
    #[error("Cannot send {kind}: the client is not connected. Call FlightClient::connect() first")]
    NotConnected { kind: &'static str },
    #[error("Packet receiver failed. Remaining inbound packets for this update were skipped")]
    ReceiveFailed,
}
