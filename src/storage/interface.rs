use crate::games::models::{
    ClueRejection, ClueTicket, GameStateView, Round, RoundStartError,
};
use crate::map::models::LatLng;

pub trait IGameStorage:
    GameRepo + GameFlowHandler + GuessRepo + ClueAllowanceRepo + GameStateReader
    + Clone + Send + Sync + 'static
{
}

pub trait GameRepo {
    async fn exists(&self, game_id: &str) -> bool;

    async fn create(&self) -> String;
}

/// The round lifecycle operations. Every method is a guarded transition on
/// the game's phase tag: callers learn from the result whether their trigger
/// won or was dropped.
pub trait GameFlowHandler {
    /// Starts the next round and spawns its countdown.
    async fn begin_round(&self, game_id: &str, location: LatLng)
        -> Result<u64, RoundStartError>;

    /// Final guess; returns the scored round, or `None` when the round was
    /// already over and the event was dropped.
    async fn submit_guess(&self, game_id: &str, guess: LatLng) -> Option<Round>;

    /// Concludes the game after its last round. `false` when the game is not
    /// in that position.
    async fn end_game(&self, game_id: &str) -> bool;

    async fn restart(&self, game_id: &str);
}

pub trait GuessRepo {
    async fn save_guess(&self, game_id: &str, guess: LatLng) -> bool;

    async fn revoke_guess(&self, game_id: &str) -> bool;
}

/// The once-per-round clue gate.
pub trait ClueAllowanceRepo {
    async fn begin_clue(&self, game_id: &str) -> Result<ClueTicket, ClueRejection>;

    async fn complete_clue(&self, game_id: &str, ticket: &ClueTicket) -> bool;

    async fn abort_clue(&self, game_id: &str, ticket: &ClueTicket);
}

pub trait GameStateReader {
    async fn state(&self, game_id: &str) -> Option<GameStateView>;
}
