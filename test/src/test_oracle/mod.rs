/// Scripted access oracle for E2E testing

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use zoneflight_server::{AccessError, AccessOracle};
use zoneflight_shared::{BlockPos, PlayerId};

struct OracleState {
    min: BlockPos,
    max: BlockPos,
    revoked: HashSet<PlayerId>,
    failing: bool,
    queries: usize,
}

/// Grants access inside an axis-aligned box of blocks. Clones share state,
/// so a test keeps one handle and gives another to the server.
#[derive(Clone)]
pub struct TestOracle {
    state: Arc<Mutex<OracleState>>,
}

impl TestOracle {
    /// Zone spanning `min..=max` on every axis
    pub fn zone(min: BlockPos, max: BlockPos) -> Self {
        Self {
            state: Arc::new(Mutex::new(OracleState {
                min,
                max,
                revoked: HashSet::new(),
                failing: false,
                queries: 0,
            })),
        }
    }

    /// Takes the access right away from `player` everywhere
    pub fn revoke(&self, player: &PlayerId) {
        self.state.lock().unwrap().revoked.insert(player.clone());
    }

    pub fn restore(&self, player: &PlayerId) {
        self.state.lock().unwrap().revoked.remove(player);
    }

    /// While failing, every query returns an error
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    pub fn queries(&self) -> usize {
        self.state.lock().unwrap().queries
    }
}

impl AccessOracle for TestOracle {
    fn query_access(&self, player: &PlayerId, pos: &BlockPos) -> Result<bool, AccessError> {
        let mut state = self.state.lock().unwrap();
        state.queries += 1;

        if state.failing {
            return Err(AccessError::ZoneDataUnavailable { pos: *pos });
        }
        if state.revoked.contains(player) {
            return Ok(false);
        }

        let inside = (state.min.x..=state.max.x).contains(&pos.x)
            && (state.min.y..=state.max.y).contains(&pos.y)
            && (state.min.z..=state.max.z).contains(&pos.z);
        Ok(inside)
    }
}
