mod channel;

pub use channel::PacketChannel;
pub use inner::{PacketReceiver, PacketSender, RecvError, SendError};

mod inner {

    use zoneflight_shared::PlayerId;

    #[derive(Debug)]
    pub struct SendError;

    #[derive(Debug)]
    pub struct RecvError;

    /// Used to send packets from the Server to a Client
    pub trait PacketSender: Send + Sync {
        /// Sends a packet to the given player's Client
        fn send(&self, player: &PlayerId, payload: &[u8]) -> Result<(), SendError>;
    }

    /// Used to receive packets from Clients
    pub trait PacketReceiver: Send {
        /// Receives the next queued packet, if any
        fn receive(&mut self) -> Result<Option<(PlayerId, &[u8])>, RecvError>;
    }
}
