use log::warn;
use thiserror::Error;

use zoneflight_shared::{BlockPos, PlayerId};

/// Errors an [`AccessOracle`] may report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Zone data was not available for the queried position
    #[error("Zone data unavailable at {pos:?}")]
    ZoneDataUnavailable { pos: BlockPos },

    /// The oracle failed for any other reason
    #[error("Access query failed: {reason}")]
    QueryFailed { reason: String },
}

/// Answers whether a player holds the flight-granting access right at a
/// position. May be called every tick for every player.
pub trait AccessOracle {
    fn query_access(&self, player: &PlayerId, pos: &BlockPos) -> Result<bool, AccessError>;
}

impl<F> AccessOracle for F
where
    F: Fn(&PlayerId, &BlockPos) -> Result<bool, AccessError>,
{
    fn query_access(&self, player: &PlayerId, pos: &BlockPos) -> Result<bool, AccessError> {
        self(player, pos)
    }
}

/// Outcome of one access query. A failed query is its own branch and is
/// never granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied,
    Failed(AccessError),
}

impl AccessDecision {
    pub fn query(oracle: &dyn AccessOracle, player: &PlayerId, pos: &BlockPos) -> Self {
        match oracle.query_access(player, pos) {
            Ok(true) => AccessDecision::Granted,
            Ok(false) => AccessDecision::Denied,
            Err(error) => {
                warn!("access query for {} at {:?} failed, denying: {}", player, pos, error);
                AccessDecision::Failed(error)
            }
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }
}
