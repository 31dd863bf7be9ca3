use naia_serde::{BitReader, BitWriter, ConstBitLength, Serde, SerdeErr};

use crate::{
    messages::constants::MESSAGE_KIND_BITS, FlightStatus, FlightToggleRequest, MessageError,
    MessageKind,
};

/// One decoded flight packet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightMessage {
    ToggleRequest(FlightToggleRequest),
    Status(FlightStatus),
}

impl FlightMessage {
    pub fn status(is_flying: bool) -> Self {
        FlightMessage::Status(FlightStatus::new(is_flying))
    }

    pub fn toggle_request() -> Self {
        FlightMessage::ToggleRequest(FlightToggleRequest)
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            FlightMessage::ToggleRequest(_) => MessageKind::ToggleRequest,
            FlightMessage::Status(_) => MessageKind::Status,
        }
    }

    pub fn bit_length(&self) -> u32 {
        let payload = match self {
            FlightMessage::ToggleRequest(request) => request.bit_length(),
            FlightMessage::Status(status) => status.bit_length(),
        };
        u32::from(MESSAGE_KIND_BITS) + payload
    }

    /// Whole bytes the encoded packet occupies
    pub fn byte_length(&self) -> usize {
        self.bit_length().div_ceil(8) as usize
    }

    /// Encodes the message as a standalone packet
    pub fn write(&self) -> Result<Box<[u8]>, MessageError> {
        let mut writer = BitWriter::new();
        self.kind().ser(&mut writer);
        match self {
            FlightMessage::ToggleRequest(request) => request.ser(&mut writer),
            FlightMessage::Status(status) => status.ser(&mut writer),
        }
        Ok(writer.to_bytes().into())
    }

    /// Decodes a packet produced by [`FlightMessage::write`]
    pub fn read(payload: &[u8]) -> Result<Self, MessageError> {
        let truncated = |_: SerdeErr| MessageError::Truncated {
            len: payload.len(),
        };

        let mut reader = BitReader::new(payload);
        let kind = MessageKind::de(&mut reader).map_err(truncated)??;
        let message = match kind {
            MessageKind::ToggleRequest => FlightMessage::ToggleRequest(
                FlightToggleRequest::de(&mut reader).map_err(truncated)?,
            ),
            MessageKind::Status => {
                FlightMessage::Status(FlightStatus::de(&mut reader).map_err(truncated)?)
            }
        };

        let count = payload.len().saturating_sub(message.byte_length());
        if count > 0 {
            return Err(MessageError::TrailingBytes {
                kind: kind.name(),
                count,
            });
        }

        Ok(message)
    }
}

impl From<FlightStatus> for FlightMessage {
    fn from(status: FlightStatus) -> Self {
        FlightMessage::Status(status)
    }
}

impl From<FlightToggleRequest> for FlightMessage {
    fn from(request: FlightToggleRequest) -> Self {
        FlightMessage::ToggleRequest(request)
    }
}

/// Largest packet any flight message encodes to
pub fn max_packet_bits() -> u32 {
    u32::from(MESSAGE_KIND_BITS)
        + FlightStatus::const_bit_length().max(FlightToggleRequest::const_bit_length())
}
