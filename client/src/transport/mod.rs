pub use inner::{PacketReceiver, PacketSender, RecvError, SendError};

mod inner {

    #[derive(Debug)]
    pub struct SendError;

    #[derive(Debug)]
    pub struct RecvError;

    /// Used to send packets from the Client to the Server
    pub trait PacketSender: Send + Sync {
        /// Sends a packet to the Server
        fn send(&self, payload: &[u8]) -> Result<(), SendError>;
    }

    /// Used to receive packets from the Server
    pub trait PacketReceiver: Send {
        /// Receives the next queued packet, if any
        fn receive(&mut self) -> Result<Option<&[u8]>, RecvError>;
    }
}
