use thiserror::Error;

/// Errors that can occur while decoding a flight packet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Kind tag not found in the message registry
    #[error("Network ID {net_id} does not name a flight message. The peer may be running an incompatible build")]
    UnknownKind { net_id: u64 },

    /// Packet ended before a whole message was read
    #[error("Packet of {len} bytes ended before a complete flight message was read")]
    Truncated { len: usize },

    /// Packet held more data than one message
    #[error("Packet carried {count} unread trailing bytes after a {kind} message")]
    TrailingBytes { kind: &'static str, count: usize },
}
