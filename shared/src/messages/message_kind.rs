use naia_serde::{BitReader, BitWrite, Serde, SerdeErr, UnsignedInteger};

use crate::{messages::constants::MESSAGE_KIND_BITS, HostType, MessageError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    ToggleRequest,
    Status,
}

impl MessageKind {
    pub fn net_id(&self) -> u64 {
        match self {
            MessageKind::ToggleRequest => 0,
            MessageKind::Status => 1,
        }
    }

    pub fn from_net_id(net_id: u64) -> Result<Self, MessageError> {
        match net_id {
            0 => Ok(MessageKind::ToggleRequest),
            1 => Ok(MessageKind::Status),
            _ => Err(MessageError::UnknownKind { net_id }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MessageKind::ToggleRequest => "FlightToggleRequest",
            MessageKind::Status => "FlightStatus",
        }
    }

    /// Toggle requests only travel client to server; status goes both ways
    pub fn sendable_by(&self, host: HostType) -> bool {
        match self {
            MessageKind::ToggleRequest => host == HostType::Client,
            MessageKind::Status => true,
        }
    }

    pub(crate) fn ser(&self, writer: &mut dyn BitWrite) {
        UnsignedInteger::<MESSAGE_KIND_BITS>::new(self.net_id()).ser(writer);
    }

    pub(crate) fn de(reader: &mut BitReader) -> Result<Result<Self, MessageError>, SerdeErr> {
        let tag = UnsignedInteger::<MESSAGE_KIND_BITS>::de(reader)?;
        Ok(Self::from_net_id(tag.get() as u64))
    }
}
