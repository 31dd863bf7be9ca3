/// RESYNC
///
/// The client keeps announcing what it believes; the server answers a
/// disagreeing echo with its authoritative status. Together they repair a
/// lost push without ever letting the client decide.
use std::time::Duration;

use zoneflight_server::{DisableReason, ServerConfig};
use zoneflight_shared::GameInstant;
use zoneflight_test::{Harness, LinkConditionerConfig, LocalChannel};

fn init_logger() {
    env_logger::builder().is_test(true).try_init().ok();
}

fn at(millis: u64) -> GameInstant {
    GameInstant::from_millis(millis)
}

#[test]
fn lost_disable_is_repaired_by_heartbeat() {
    init_logger();

    let mut harness = Harness::new(ServerConfig::default());
    let alice = harness.join("alice", 1.0);
    harness.toggle(&alice);
    harness.step(Duration::from_millis(100));
    harness.run_until(at(1_000));

    harness
        .channel
        .set_link_conditioner(LinkConditionerConfig::new(1.0));
    let now = harness.now();
    assert!(harness
        .server
        .disable(&mut harness.world, &alice, DisableReason::Toggled, &now));
    harness.step(Duration::from_millis(100));
    harness
        .channel
        .set_link_conditioner(LinkConditionerConfig::perfect());

    assert!(!harness.server.is_flying(&alice));
    assert!(harness.client(&alice).client.is_flying());

    // heartbeat at 3.0 carries the stale belief, the re-push answers it;
    // the one at 6.0 echoes the repaired state
    harness.run_for(Duration::from_secs(7));

    assert!(!harness.client(&alice).client.is_flying());
    assert!(!harness.client(&alice).body.free_move);
    assert!(!harness.server.is_flying(&alice));
    assert_eq!(
        harness.server.record(&alice).unwrap().reported_flying(),
        Some(false)
    );
    assert!(harness
        .log
        .status_reports
        .iter()
        .any(|(_, player, is_flying)| player == &alice && *is_flying));
}

#[test]
fn echo_never_grants_flight() {
    init_logger();

    let mut harness = Harness::new(ServerConfig::default());
    let alice = harness.join("alice", 1.0);
    let now = harness.now();

    harness
        .server
        .handle_status_report(&harness.world, &alice, true, &now);
    harness.step(Duration::from_millis(100));

    assert!(!harness.server.is_flying(&alice));
    assert!(!harness.server_body(&alice).free_move);
    assert_eq!(harness.channel.sent_to_clients(), 1);
}

#[test]
fn repush_is_rate_limited() {
    init_logger();

    let mut harness = Harness::new(ServerConfig::default());
    let alice = harness.join("alice", 1.0);

    for millis in [0, 100, 200, 900, 1_000] {
        harness
            .server
            .handle_status_report(&harness.world, &alice, true, &at(millis));
    }

    assert_eq!(harness.channel.sent_to_clients(), 2);
}

#[test]
fn mismatch_resync_is_debounced() {
    init_logger();

    let mut harness = Harness::new(ServerConfig::default());
    let alice = harness.join("alice", 1.0);
    harness.client_mut(&alice).body.free_move = true;

    for _ in 0..24 {
        harness.step(Duration::from_millis(10));
    }
    assert_eq!(harness.channel.sent_to_server(), 1);

    for _ in 24..100 {
        harness.step(Duration::from_millis(10));
    }
    let sent = harness.channel.sent_to_server();
    assert!((2..=4).contains(&sent), "sent {} resyncs in one second", sent);
    assert!(!harness.client(&alice).client.is_flying());
}

#[test]
fn heartbeat_runs_without_drift() {
    init_logger();

    let mut harness = Harness::new(ServerConfig::default());
    let alice = harness.join("alice", 1.0);

    harness.run_until(at(9_000));

    assert_eq!(harness.channel.sent_to_server(), 3);
    assert_eq!(
        harness.client(&alice).client.belief().last_resync_sent(),
        Some(at(9_000))
    );
    assert_eq!(harness.channel.sent_to_clients(), 0);
}

#[test]
fn lossy_link_converges_once_healed() {
    init_logger();

    let channel = LocalChannel::new(LinkConditionerConfig::lossy(), 7);
    let mut harness = Harness::with_channel(ServerConfig::default(), channel);
    let alice = harness.join("alice", 1.0);

    for press in 0..6u64 {
        harness.run_until(at(press * 5_000));
        harness.toggle(&alice);
    }
    harness.run_for(Duration::from_secs(2));
    harness
        .channel
        .set_link_conditioner(LinkConditionerConfig::perfect());
    harness.run_for(Duration::from_secs(7));

    assert!(harness.channel.dropped() > 0);
    assert_eq!(
        harness.client(&alice).client.is_flying(),
        harness.server.is_flying(&alice)
    );
    assert_eq!(
        harness.client(&alice).body.free_move,
        harness.server.is_flying(&alice)
    );
}
