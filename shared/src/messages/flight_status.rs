use naia_serde::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

/// Current flight state. Authoritative when sent by the server, a
/// best-effort echo of local belief when sent by the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlightStatus {
    pub is_flying: bool,
}

impl FlightStatus {
    pub fn new(is_flying: bool) -> Self {
        Self { is_flying }
    }
}

impl Serde for FlightStatus {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.is_flying.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let is_flying = bool::de(reader)?;
        Ok(Self { is_flying })
    }

    fn bit_length(&self) -> u32 {
        <Self as ConstBitLength>::const_bit_length()
    }
}

impl ConstBitLength for FlightStatus {
    fn const_bit_length() -> u32 {
        1
    }
}
