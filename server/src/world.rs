use zoneflight_shared::{FlightBody, PlayerId, WorldPos};

/// The host world as seen by the flight authority.
///
/// Every lookup returns `None` for a player whose entity is missing or
/// already gone; the server treats that as a no-op.
pub trait FlightWorld {
    type Body: FlightBody;

    /// Players currently connected, in any order
    fn online_players(&self) -> Vec<PlayerId>;

    /// Server-side position of the player's entity
    fn player_position(&self, player: &PlayerId) -> Option<WorldPos>;

    /// Physics state of the player's entity
    fn body_mut(&mut self, player: &PlayerId) -> Option<&mut Self::Body>;
}
