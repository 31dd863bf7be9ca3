/// In-memory transport for E2E testing
/// Routes packets between the server and any number of clients without I/O

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use zoneflight_client::transport::{
    PacketReceiver as ClientPacketReceiver, PacketSender as ClientPacketSender,
    RecvError as ClientRecvError, SendError as ClientSendError,
};
use zoneflight_server::transport::{
    PacketReceiver as ServerPacketReceiver, PacketSender as ServerPacketSender,
    RecvError as ServerRecvError, SendError as ServerSendError,
};
use zoneflight_shared::PlayerId;

/// Packet loss applied to every packet crossing the channel
#[derive(Clone, Copy, Debug)]
pub struct LinkConditionerConfig {
    /// Probability in 0.0..=1.0 that a packet is dropped
    pub loss: f32,
}

impl LinkConditionerConfig {
    pub fn new(loss: f32) -> Self {
        Self { loss }
    }

    pub fn perfect() -> Self {
        Self::new(0.0)
    }

    pub fn lossy() -> Self {
        Self::new(0.3)
    }
}

struct Conditioner {
    config: LinkConditionerConfig,
    rng: fastrand::Rng,
    dropped: usize,
}

impl Conditioner {
    fn should_drop(&mut self) -> bool {
        let drop = self.config.loss > 0.0 && self.rng.f32() < self.config.loss;
        if drop {
            self.dropped += 1;
        }
        drop
    }
}

#[derive(Default)]
struct Queues {
    to_server: VecDeque<(PlayerId, Vec<u8>)>,
    to_clients: HashMap<PlayerId, VecDeque<Vec<u8>>>,
    sent_to_server: usize,
    sent_to_clients: usize,
}

/// Shared hub; hand out server and client halves, then inspect traffic
#[derive(Clone)]
pub struct LocalChannel {
    queues: Arc<Mutex<Queues>>,
    conditioner: Arc<Mutex<Conditioner>>,
}

impl Default for LocalChannel {
    fn default() -> Self {
        Self::new(LinkConditionerConfig::perfect(), 0)
    }
}

impl LocalChannel {
    pub fn new(config: LinkConditionerConfig, seed: u64) -> Self {
        Self {
            queues: Arc::new(Mutex::new(Queues::default())),
            conditioner: Arc::new(Mutex::new(Conditioner {
                config,
                rng: fastrand::Rng::with_seed(seed),
                dropped: 0,
            })),
        }
    }

    pub fn set_link_conditioner(&self, config: LinkConditionerConfig) {
        self.conditioner.lock().unwrap().config = config;
    }

    pub fn server_io(&self) -> (Box<dyn ServerPacketSender>, Box<dyn ServerPacketReceiver>) {
        (
            Box::new(LocalServerSender {
                channel: self.clone(),
            }),
            Box::new(LocalServerReceiver {
                channel: self.clone(),
                last_payload: None,
            }),
        )
    }

    pub fn client_io(
        &self,
        player: &PlayerId,
    ) -> (Box<dyn ClientPacketSender>, Box<dyn ClientPacketReceiver>) {
        self.queues
            .lock()
            .unwrap()
            .to_clients
            .entry(player.clone())
            .or_default();
        (
            Box::new(LocalClientSender {
                channel: self.clone(),
                player: player.clone(),
            }),
            Box::new(LocalClientReceiver {
                channel: self.clone(),
                player: player.clone(),
                last_payload: None,
            }),
        )
    }

    /// Packets the server sent (including dropped ones)
    pub fn sent_to_clients(&self) -> usize {
        self.queues.lock().unwrap().sent_to_clients
    }

    /// Packets clients sent (including dropped ones)
    pub fn sent_to_server(&self) -> usize {
        self.queues.lock().unwrap().sent_to_server
    }

    pub fn dropped(&self) -> usize {
        self.conditioner.lock().unwrap().dropped
    }

    /// Drops everything in flight in both directions
    pub fn clear(&self) {
        let mut queues = self.queues.lock().unwrap();
        queues.to_server.clear();
        for queue in queues.to_clients.values_mut() {
            queue.clear();
        }
    }

    /// Queues a raw payload for the server, bypassing the conditioner
    pub fn inject_to_server(&self, player: &PlayerId, payload: &[u8]) {
        self.queues
            .lock()
            .unwrap()
            .to_server
            .push_back((player.clone(), payload.to_vec()));
    }

    fn should_drop(&self) -> bool {
        self.conditioner.lock().unwrap().should_drop()
    }
}

// Server Components

struct LocalServerSender {
    channel: LocalChannel,
}

impl ServerPacketSender for LocalServerSender {
    fn send(&self, player: &PlayerId, payload: &[u8]) -> Result<(), ServerSendError> {
        let drop = self.channel.should_drop();
        let mut queues = self.channel.queues.lock().unwrap();
        queues.sent_to_clients += 1;
        let Some(queue) = queues.to_clients.get_mut(player) else {
            return Err(ServerSendError);
        };
        if !drop {
            queue.push_back(payload.to_vec());
        }
        Ok(())
    }
}

struct LocalServerReceiver {
    channel: LocalChannel,
    last_payload: Option<(PlayerId, Box<[u8]>)>,
}

impl ServerPacketReceiver for LocalServerReceiver {
    fn receive(&mut self) -> Result<Option<(PlayerId, &[u8])>, ServerRecvError> {
        let packet = self.channel.queues.lock().unwrap().to_server.pop_front();
        self.last_payload = packet.map(|(player, payload)| (player, payload.into_boxed_slice()));
        Ok(self
            .last_payload
            .as_ref()
            .map(|(player, payload)| (player.clone(), &payload[..])))
    }
}

// Client Components

struct LocalClientSender {
    channel: LocalChannel,
    player: PlayerId,
}

impl ClientPacketSender for LocalClientSender {
    fn send(&self, payload: &[u8]) -> Result<(), ClientSendError> {
        let drop = self.channel.should_drop();
        let mut queues = self.channel.queues.lock().unwrap();
        queues.sent_to_server += 1;
        if !drop {
            queues
                .to_server
                .push_back((self.player.clone(), payload.to_vec()));
        }
        Ok(())
    }
}

struct LocalClientReceiver {
    channel: LocalChannel,
    player: PlayerId,
    last_payload: Option<Box<[u8]>>,
}

impl ClientPacketReceiver for LocalClientReceiver {
    fn receive(&mut self) -> Result<Option<&[u8]>, ClientRecvError> {
        let packet = self
            .channel
            .queues
            .lock()
            .unwrap()
            .to_clients
            .get_mut(&self.player)
            .and_then(|queue| queue.pop_front());
        self.last_payload = packet.map(Vec::into_boxed_slice);
        Ok(self.last_payload.as_deref())
    }
}
