use smol::{
    channel,
    channel::{Receiver, Sender, TryRecvError},
};

use zoneflight_shared::PlayerId;

use super::{
    PacketReceiver as TransportReceiver, PacketSender as TransportSender, RecvError, SendError,
};

/// An in-process packet queue. The sender half may be cloned onto any
/// thread; the receiver half is handed to the server, which drains it from
/// its own thread inside `receive()`.
pub struct PacketChannel;

impl PacketChannel {
    pub fn unbounded() -> (Box<dyn TransportSender>, Box<dyn TransportReceiver>) {
        let (packet_sender, packet_receiver) = channel::unbounded();
        let packet_receiver = PacketChannelReceiver::new(packet_receiver);
        (Box::new(packet_sender), Box::new(packet_receiver))
    }
}

impl TransportSender for Sender<(PlayerId, Box<[u8]>)> {
    fn send(&self, player: &PlayerId, payload: &[u8]) -> Result<(), SendError> {
        self.send_blocking((player.clone(), payload.into()))
            .map_err(|_| SendError)
    }
}

#[derive(Clone)]
struct PacketChannelReceiver {
    receiver: Receiver<(PlayerId, Box<[u8]>)>,
    current: Option<(PlayerId, Box<[u8]>)>,
}

impl PacketChannelReceiver {
    fn new(receiver: Receiver<(PlayerId, Box<[u8]>)>) -> Self {
        Self {
            receiver,
            current: None,
        }
    }
}

impl TransportReceiver for PacketChannelReceiver {
    /// Receives the next queued packet, if any, without blocking
    fn receive(&mut self) -> Result<Option<(PlayerId, &[u8])>, RecvError> {
        match self.receiver.try_recv() {
            Ok(packet) => {
                self.current = Some(packet);
                Ok(self
                    .current
                    .as_ref()
                    .map(|(player, payload)| (player.clone(), &payload[..])))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(_) => Err(RecvError),
        }
    }
}
