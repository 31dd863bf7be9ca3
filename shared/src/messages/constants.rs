/// Name the host registers the flight channel under
pub const CHANNEL_NAME: &str = "zoneflight";

/// Width of the kind tag that prefixes every flight packet
pub const MESSAGE_KIND_BITS: u8 = 2;
