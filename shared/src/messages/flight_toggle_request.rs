use naia_serde::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

/// Client asks the server to flip its flight state. Carries no payload; the
/// server never trusts a client-claimed state when deciding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlightToggleRequest;

impl Serde for FlightToggleRequest {
    fn ser(&self, _writer: &mut dyn BitWrite) {}

    fn de(_reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self)
    }

    fn bit_length(&self) -> u32 {
        <Self as ConstBitLength>::const_bit_length()
    }
}

impl ConstBitLength for FlightToggleRequest {
    fn const_bit_length() -> u32 {
        0
    }
}
