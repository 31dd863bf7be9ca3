use std::{mem, time::Duration};

use log::{debug, info, warn};

use zoneflight_shared::{FlightBody, FlightMessage, GameInstant, HostType};

use crate::{
    transport::{PacketReceiver, PacketSender},
    ClientConfig, ClientEvents, ClientFlightBelief, FlightClientError,
};

/// Client-side flight predictor for the local player.
///
/// The host forwards its hotkey to [`FlightClient::toggle_flight`], calls
/// [`FlightClient::receive`] to apply server decisions and
/// [`FlightClient::update`] once per frame.
pub struct FlightClient {
    config: ClientConfig,
    io: Option<(Box<dyn PacketSender>, Box<dyn PacketReceiver>)>,
    belief: ClientFlightBelief,
    incoming_events: ClientEvents,
}

impl FlightClient {
    /// Create a new FlightClient
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            io: None,
            belief: ClientFlightBelief::default(),
            incoming_events: ClientEvents::new(),
        }
    }

    /// Attach the transport used to talk to the server
    pub fn connect(&mut self, sender: Box<dyn PacketSender>, receiver: Box<dyn PacketReceiver>) {
        self.io = Some((sender, receiver));
    }

    pub fn is_connected(&self) -> bool {
        self.io.is_some()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn belief(&self) -> &ClientFlightBelief {
        &self.belief
    }

    pub fn is_flying(&self) -> bool {
        self.belief.believed_flying()
    }

    /// The local player spawned. Belief starts over from the fresh body.
    pub fn on_join<B: FlightBody>(&mut self, body: &mut B) {
        let multiplier = body.fall_damage_multiplier();
        self.belief = ClientFlightBelief::joined(multiplier);

        body.set_flight_flags(false);
        body.reset_fall_state();

        debug!("joined, fall damage multiplier {}", multiplier);
    }

    /// Asks the server to toggle flight. Returns whether a request was sent;
    /// presses inside `toggle_cooldown` are dropped silently.
    pub fn toggle_flight(&mut self, now: &GameInstant) -> bool {
        if !self
            .belief
            .try_claim_toggle(now, self.config.toggle_cooldown)
        {
            return false;
        }
        if !self.send_message(FlightMessage::toggle_request()) {
            return false;
        }
        self.belief.await_ack(now);
        true
    }

    /// Drains packets from the server and applies them to `body`. Returns
    /// what happened since the last call.
    pub fn receive<B: FlightBody>(&mut self, body: &mut B, now: &GameInstant) -> ClientEvents {
        loop {
            let Some((_, receiver)) = self.io.as_mut() else {
                break;
            };

            let next = match receiver.receive() {
                Ok(Some(payload)) => Ok(Some(FlightMessage::read(payload))),
                Ok(None) => Ok(None),
                Err(error) => Err(error),
            };

            match next {
                Ok(Some(Ok(message))) => match message {
                    FlightMessage::Status(status) => {
                        self.on_status(body, status.is_flying, now);
                    }
                    FlightMessage::ToggleRequest(_) => {
                        let kind = message.kind();
                        debug_assert!(!kind.sendable_by(HostType::Server));
                        warn!("dropping {} from the server", kind.name());
                        self.incoming_events
                            .push_error(FlightClientError::UnexpectedMessage { kind: kind.name() });
                    }
                },
                Ok(Some(Err(source))) => {
                    warn!("dropping undecodable packet from the server: {}", source);
                    self.incoming_events
                        .push_error(FlightClientError::Decode { source });
                }
                Ok(None) => break,
                Err(_) => {
                    warn!("packet receiver failed");
                    self.incoming_events
                        .push_error(FlightClientError::ReceiveFailed);
                    break;
                }
            }
        }

        mem::take(&mut self.incoming_events)
    }

    /// Applies a status from the server. Returns true if belief changed.
    pub fn on_status<B: FlightBody>(
        &mut self,
        body: &mut B,
        is_flying: bool,
        now: &GameInstant,
    ) -> bool {
        self.belief.clear_ack();

        if is_flying == self.belief.believed_flying() {
            debug!("status flying={} matches belief", is_flying);
            return false;
        }

        self.belief.set_believed_flying(is_flying);

        if is_flying {
            // inside the safety window the body carries our zeroed multiplier
            if !self
                .belief
                .flight_ended_within(now, self.config.post_flight_safe_window)
            {
                self.belief
                    .set_original_fall_damage(body.fall_damage_multiplier());
            }
            body.set_flight_flags(true);
            body.set_fall_damage_multiplier(0.0);
            body.reset_fall_state();
            info!("flight enabled by the server");
        } else {
            body.set_flight_flags(false);
            body.set_fall_damage_multiplier(self.belief.original_fall_damage());
            body.reset_fall_state();
            self.belief.mark_flight_end(now);
            info!("flight disabled by the server");
        }

        self.incoming_events.push_status_change(is_flying);
        true
    }

    /// Per-frame reconciliation of belief against local physics
    pub fn update<B: FlightBody>(&mut self, body: &mut B, dt: Duration, now: &GameInstant) {
        self.belief.accumulate(dt);

        if self.belief.expire_ack(now, self.config.ack_timeout) {
            debug!("no reply to toggle request after {:?}", self.config.ack_timeout);
        }

        let believed = self.belief.believed_flying();
        let within_grace = self
            .belief
            .flight_ended_within(now, self.config.local_flight_grace);
        let within_safe_window = self
            .belief
            .flight_ended_within(now, self.config.post_flight_safe_window);

        if believed || within_safe_window {
            body.set_fall_distance(0.0);
            body.set_fall_damage_multiplier(0.0);
        } else {
            body.set_fall_damage_multiplier(self.belief.original_fall_damage());
        }

        // something local cleared free movement while we still fly
        if believed && !body.free_move() && !within_grace {
            body.set_flight_flags(true);
            body.set_fall_damage_multiplier(0.0);
            body.reset_fall_state();
            self.belief.reset_accumulator();
            debug!("free movement drifted off, re-applied");
            self.announce_debounced(true, now);
        }

        if !self.belief.is_awaiting_ack() && body.free_move() != believed {
            self.announce_debounced(believed, now);
        }

        if self.belief.resync_accumulator() >= self.config.heartbeat_interval {
            self.belief.reset_accumulator();
            self.belief.stamp_resync(now);
            self.send_message(FlightMessage::status(believed));
        }
    }

    // Private

    fn announce_debounced(&mut self, is_flying: bool, now: &GameInstant) {
        if !self
            .belief
            .try_claim_resync(now, self.config.resync_debounce)
        {
            return;
        }
        debug!("resync: announcing flying={}", is_flying);
        self.send_message(FlightMessage::status(is_flying));
    }

    fn send_message(&mut self, message: FlightMessage) -> bool {
        let kind = message.kind().name();

        let payload = match message.write() {
            Ok(payload) => payload,
            Err(source) => {
                warn!("could not encode {}: {}", kind, source);
                self.incoming_events
                    .push_error(FlightClientError::Encode { kind, source });
                return false;
            }
        };

        let Some((sender, _)) = self.io.as_ref() else {
            warn!("dropping {}: not connected", kind);
            self.incoming_events
                .push_error(FlightClientError::NotConnected { kind });
            return false;
        };

        if sender.send(&payload).is_err() {
            warn!("failed to send {}", kind);
            self.incoming_events
                .push_error(FlightClientError::SendFailed { kind });
            return false;
        }
        true
    }
}
