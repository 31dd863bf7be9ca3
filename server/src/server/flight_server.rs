use std::{collections::HashMap, mem};

use log::{debug, info, warn};

use zoneflight_shared::{BlockPos, FlightBody, FlightMessage, GameInstant, PlayerId, Timer};

use crate::{
    access::{AccessDecision, AccessOracle},
    events::FlightEvents,
    record::{LeaveCountdown, PlayerFlightRecord},
    schedule::{FlightTask, TaskKey, TaskScheduler},
    transport::{PacketReceiver, PacketSender},
    DisableReason, FlightServerError, FlightWorld, Notification, ServerConfig,
};

/// The authority over every player's flight state.
///
/// The host calls [`FlightServer::receive`] from its simulation thread at
/// least as often as `tick_interval`. Inbound packets, zone re-evaluation and
/// scheduled tasks (countdown steps, fall-damage restores) all run inside
/// that call, so player records have a single writer.
pub struct FlightServer {
    config: ServerConfig,
    oracle: Box<dyn AccessOracle>,
    io: Option<(Box<dyn PacketSender>, Box<dyn PacketReceiver>)>,
    records: HashMap<PlayerId, PlayerFlightRecord>,
    scheduler: TaskScheduler<FlightTask>,
    tick_timer: Option<Timer>,
    incoming_events: FlightEvents,
}

impl FlightServer {
    /// Create a new FlightServer
    pub fn new<O: AccessOracle + 'static>(config: ServerConfig, oracle: O) -> Self {
        Self {
            config,
            oracle: Box::new(oracle),
            io: None,
            records: HashMap::new(),
            scheduler: TaskScheduler::new(),
            tick_timer: None,
            incoming_events: FlightEvents::new(),
        }
    }

    /// Attach the transport used to talk to clients
    pub fn listen(&mut self, sender: Box<dyn PacketSender>, receiver: Box<dyn PacketReceiver>) {
        self.io = Some((sender, receiver));
    }

    pub fn is_listening(&self) -> bool {
        self.io.is_some()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Must be called regularly. Drains inbound packets, re-evaluates zone
    /// membership when the tick interval has passed, then fires every
    /// scheduled task that is due. Returns what happened since the last call.
    pub fn receive<W: FlightWorld>(&mut self, world: &mut W, now: &GameInstant) -> FlightEvents {
        self.read_packets(world, now);

        let should_tick = match &mut self.tick_timer {
            Some(timer) => timer.try_reset(now),
            None => {
                self.tick_timer = Some(Timer::new(self.config.tick_interval, now));
                true
            }
        };
        if should_tick {
            self.tick(world, now);
        }

        self.run_due_tasks(world, now);

        mem::replace(&mut self.incoming_events, FlightEvents::new())
    }

    // Players

    pub fn is_flying(&self, player: &PlayerId) -> bool {
        self.records
            .get(player)
            .is_some_and(|record| record.is_flying())
    }

    pub fn record(&self, player: &PlayerId) -> Option<&PlayerFlightRecord> {
        self.records.get(player)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Scheduled countdown steps and fall-damage restores not yet fired
    pub fn pending_task_count(&self) -> usize {
        self.scheduler.len()
    }

    /// Forget a player who left the session. Their countdown is cancelled;
    /// a pending fall-damage restore still fires and finds no entity.
    pub fn disconnect_player(&mut self, player: &PlayerId) -> Option<PlayerFlightRecord> {
        let mut record = self.records.remove(player)?;
        if let Some(countdown) = record.take_leave_countdown() {
            self.scheduler.cancel(&countdown.task);
        }
        debug!("evicted flight record for {}", player);
        Some(record)
    }

    // Protocol

    /// A client asked to toggle flight. The decision uses only the oracle and
    /// the authoritative record.
    pub fn handle_toggle_request<W: FlightWorld>(
        &mut self,
        world: &mut W,
        player: &PlayerId,
        now: &GameInstant,
    ) {
        let Some(decision) = self.query_access(world, player) else {
            debug!("toggle request from {} ignored, no entity", player);
            return;
        };

        let is_flying = self.is_flying(player);

        if !decision.is_granted() {
            if is_flying {
                self.disable(world, player, DisableReason::PermissionDenied, now);
            } else {
                self.deny(player);
            }
            return;
        }

        if is_flying {
            self.disable(world, player, DisableReason::Toggled, now);
        } else {
            self.enable(world, player, now);
        }
    }

    /// A client echoed the state it believes in. Never changes authority; a
    /// disagreeing echo earns a corrective push, rate-limited per player.
    ///
    /// An echo from a player with neither a record nor an entity (already
    /// evicted, or never online) is only surfaced as an event.
    pub fn handle_status_report<W: FlightWorld>(
        &mut self,
        world: &W,
        player: &PlayerId,
        reported_flying: bool,
        now: &GameInstant,
    ) {
        self.incoming_events
            .push_status_report(player, reported_flying);

        if !self.records.contains_key(player) && world.player_position(player).is_none() {
            debug!("status echo from {} who is not online, ignored", player);
            return;
        }

        let record = self.records.entry(player.clone()).or_default();
        record.set_reported_flying(reported_flying);

        let authoritative = record.is_flying();
        if reported_flying == authoritative {
            return;
        }
        if !record.try_claim_repush(now, self.config.status_repush_interval) {
            debug!(
                "{} still reports flying={}, re-push suppressed",
                player, reported_flying
            );
            return;
        }

        debug!(
            "{} reports flying={}, re-pushing flying={}",
            player, reported_flying, authoritative
        );
        self.send_status(player, authoritative);
    }

    /// Grant flight without consulting the oracle. Returns false if the
    /// player has no entity.
    pub fn enable<W: FlightWorld>(
        &mut self,
        world: &mut W,
        player: &PlayerId,
        now: &GameInstant,
    ) -> bool {
        let Some(body) = world.body_mut(player) else {
            return false;
        };

        let record = self.records.entry(player.clone()).or_default();
        record.capture_fall_damage(body.fall_damage_multiplier());
        body.set_flight_flags(true);
        record.set_flying(true);
        record.mark_inside_zone(now);

        info!("flight enabled for {}", player);

        self.send_status(player, true);
        self.notify(player, Notification::FlightEnabled);
        self.incoming_events.push_enabled(player);
        true
    }

    /// Revoke flight. Fall damage is zeroed at once and restored after
    /// `fall_damage_restore_delay`. Returns false if the player has no entity.
    pub fn disable<W: FlightWorld>(
        &mut self,
        world: &mut W,
        player: &PlayerId,
        reason: DisableReason,
        now: &GameInstant,
    ) -> bool {
        let Some(body) = world.body_mut(player) else {
            return false;
        };

        body.set_fall_damage_multiplier(0.0);
        body.set_flight_flags(false);

        let record = self.records.entry(player.clone()).or_default();
        record.set_flying(false);
        let countdown = record.take_leave_countdown();
        let restore_to = record
            .original_fall_damage()
            .unwrap_or(self.config.default_fall_damage_multiplier);

        if let Some(countdown) = countdown {
            self.scheduler.cancel(&countdown.task);
        }

        // restores are never cancelled; a second disable just queues the same value again
        self.scheduler.schedule_delayed(
            now,
            self.config.fall_damage_restore_delay,
            FlightTask::RestoreFallDamage {
                player: player.clone(),
                multiplier: restore_to,
            },
        );

        info!(
            "flight disabled for {} ({:?}), fall damage {} restored in {:?}",
            player, reason, restore_to, self.config.fall_damage_restore_delay
        );

        self.send_status(player, false);
        self.notify(player, reason.notification());
        self.incoming_events.push_disabled(player, reason);
        true
    }

    /// Re-evaluates zone membership for every online player
    pub fn tick<W: FlightWorld>(&mut self, world: &mut W, now: &GameInstant) {
        for player in world.online_players() {
            let Some(decision) = self.query_access(world, &player) else {
                continue;
            };

            if decision.is_granted() {
                self.mark_inside_zone(&player, now);
            } else if self.is_flying(&player) {
                self.evaluate_outside(world, &player, now);
            }
        }
    }

    // Private

    fn query_access<W: FlightWorld>(&self, world: &W, player: &PlayerId) -> Option<AccessDecision> {
        let pos = world.player_position(player)?;
        Some(AccessDecision::query(
            self.oracle.as_ref(),
            player,
            &BlockPos::from(pos),
        ))
    }

    fn deny(&mut self, player: &PlayerId) {
        info!("flight denied for {}", player);

        self.send_status(player, false);
        self.notify(player, Notification::FlightDenied);
        self.incoming_events.push_denied(player);
    }

    fn mark_inside_zone(&mut self, player: &PlayerId, now: &GameInstant) {
        let record = self.records.entry(player.clone()).or_default();
        record.mark_inside_zone(now);

        if let Some(countdown) = record.take_leave_countdown() {
            self.scheduler.cancel(&countdown.task);
            debug!(
                "{} back inside the zone, countdown cancelled with {}s left",
                player, countdown.remaining_secs
            );
        }
    }

    fn evaluate_outside<W: FlightWorld>(
        &mut self,
        world: &mut W,
        player: &PlayerId,
        now: &GameInstant,
    ) {
        let Some(record) = self.records.get(player) else {
            return;
        };
        if record.has_leave_countdown()
            || !record.outside_past_grace(now, self.config.leave_zone_grace)
        {
            return;
        }

        let delay = self.config.forced_disable_delay_secs;
        if delay == 0 {
            self.disable(world, player, DisableReason::LeftZone, now);
            return;
        }

        let task = self.scheduler.schedule_repeating(
            now,
            self.config.countdown_step,
            FlightTask::LeaveCountdownStep {
                player: player.clone(),
            },
        );
        if let Some(record) = self.records.get_mut(player) {
            record.set_leave_countdown(LeaveCountdown {
                task,
                remaining_secs: delay,
            });
        }

        info!(
            "{} left the zone while flying, flight disables in {}s",
            player, delay
        );
        if self.config.is_warning_checkpoint(delay) {
            self.warn_leaving(player, delay);
        }
    }

    fn run_due_tasks<W: FlightWorld>(&mut self, world: &mut W, now: &GameInstant) {
        while let Some((key, due, task)) = self.scheduler.pop_due(now) {
            debug!("running {} task due at {:?}", task.tag(), due);
            match task {
                FlightTask::RestoreFallDamage { player, multiplier } => {
                    self.restore_fall_damage(world, &player, multiplier);
                }
                FlightTask::LeaveCountdownStep { player } => {
                    self.step_leave_countdown(world, key, &player, now);
                }
            }
        }
    }

    fn restore_fall_damage<W: FlightWorld>(
        &mut self,
        world: &mut W,
        player: &PlayerId,
        multiplier: f32,
    ) {
        match world.body_mut(player) {
            Some(body) => {
                body.set_fall_damage_multiplier(multiplier);
                debug!("fall damage for {} restored to {}", player, multiplier);
            }
            None => debug!("fall damage restore for {} skipped, no entity", player),
        }
    }

    fn step_leave_countdown<W: FlightWorld>(
        &mut self,
        world: &mut W,
        key: TaskKey,
        player: &PlayerId,
        now: &GameInstant,
    ) {
        let Some(record) = self.records.get_mut(player) else {
            self.scheduler.cancel(&key);
            return;
        };
        let countdown = match record.leave_countdown() {
            Some(countdown) if countdown.task == key => countdown,
            _ => {
                // stale step from a countdown that was replaced
                self.scheduler.cancel(&key);
                return;
            }
        };

        if !record.is_flying() {
            record.take_leave_countdown();
            self.scheduler.cancel(&key);
            debug!("countdown for {} dropped, no longer flying", player);
            return;
        }

        let remaining = countdown.remaining_secs.saturating_sub(1);
        if remaining == 0 {
            record.take_leave_countdown();
            self.scheduler.cancel(&key);
            if !self.disable(world, player, DisableReason::LeftZone, now) {
                debug!("countdown for {} expired, no entity to ground", player);
            }
            return;
        }

        record.set_leave_countdown(LeaveCountdown {
            task: key,
            remaining_secs: remaining,
        });
        debug!("{}: flight disables in {}s", player, remaining);

        if self.config.is_warning_checkpoint(remaining) {
            self.warn_leaving(player, remaining);
        }
    }

    fn warn_leaving(&mut self, player: &PlayerId, seconds_left: u32) {
        self.notify(player, Notification::LeaveZoneWarning { seconds_left });
        self.incoming_events.push_warning(player, seconds_left);
    }

    fn notify(&mut self, player: &PlayerId, notification: Notification) {
        self.incoming_events
            .push_notification(player, notification);
    }

    fn send_status(&mut self, player: &PlayerId, is_flying: bool) {
        let message = FlightMessage::status(is_flying);
        let kind = message.kind().name();

        let payload = match message.write() {
            Ok(payload) => payload,
            Err(source) => {
                warn!("could not encode {} for {}: {}", kind, player, source);
                self.incoming_events.push_error(FlightServerError::Encode {
                    player: player.clone(),
                    kind,
                    source,
                });
                return;
            }
        };

        let Some((sender, _)) = self.io.as_ref() else {
            warn!("dropping {} for {}: not listening", kind, player);
            self.incoming_events
                .push_error(FlightServerError::NotListening {
                    player: player.clone(),
                    kind,
                });
            return;
        };

        if sender.send(player, &payload).is_err() {
            warn!("failed to send {} to {}", kind, player);
            self.incoming_events.push_error(FlightServerError::SendFailed {
                player: player.clone(),
                kind,
            });
        }
    }

    fn read_packets<W: FlightWorld>(&mut self, world: &mut W, now: &GameInstant) {
        loop {
            let Some((_, receiver)) = self.io.as_mut() else {
                return;
            };

            let next = match receiver.receive() {
                Ok(Some((player, payload))) => Ok(Some((player, FlightMessage::read(payload)))),
                Ok(None) => Ok(None),
                Err(error) => Err(error),
            };

            match next {
                Ok(Some((player, Ok(FlightMessage::ToggleRequest(_))))) => {
                    self.handle_toggle_request(world, &player, now);
                }
                Ok(Some((player, Ok(FlightMessage::Status(status))))) => {
                    self.handle_status_report(world, &player, status.is_flying, now);
                }
                Ok(Some((player, Err(source)))) => {
                    warn!("dropping undecodable packet from {}: {}", player, source);
                    self.incoming_events
                        .push_error(FlightServerError::Decode { player, source });
                }
                Ok(None) => return,
                Err(_) => {
                    warn!("packet receiver failed");
                    self.incoming_events
                        .push_error(FlightServerError::ReceiveFailed);
                    return;
                }
            }
        }
    }
}
