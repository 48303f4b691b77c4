use crate::games::consts::DEFAULT_ROUND_DURATION_SECS;
use crate::games::models::{
    ClueRejection, ClueTicket, Game, GameStateView, Round, RoundFinish, RoundStartError, TimerTick,
};
use crate::map::models::LatLng;
use crate::storage::interface::{
    ClueAllowanceRepo, GameFlowHandler, GameRepo, GameStateReader, GuessRepo, IGameStorage,
};
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct HashMapGamesStorage {
    storage: Arc<RwLock<HashMap<String, Game>>>,
    round_duration_secs: u64,
}

impl HashMapGamesStorage {
    pub fn new(round_duration_secs: u64) -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            round_duration_secs,
        }
    }
}

impl Default for HashMapGamesStorage {
    fn default() -> Self {
        Self::new(DEFAULT_ROUND_DURATION_SECS)
    }
}

impl IGameStorage for HashMapGamesStorage {}

impl GameRepo for HashMapGamesStorage {
    async fn exists(&self, game_id: &str) -> bool {
        self.storage.read().await.contains_key(game_id)
    }

    async fn create(&self) -> String {
        let game_id = generate_game_id();
        let game = Game::new(self.round_duration_secs);
        self.storage.write().await.insert(game_id.clone(), game);
        game_id
    }
}

impl GameFlowHandler for HashMapGamesStorage {
    async fn begin_round(
        &self,
        game_id: &str,
        location: LatLng,
    ) -> Result<u64, RoundStartError> {
        let (round_number, epoch) = {
            let mut storage_guard = self.storage.write().await;
            let game = storage_guard.get_mut(game_id).unwrap();
            let round_number = game.begin_round(location)?;
            (round_number, game.epoch)
        };
        tracing::info!(
            game_id,
            round_number,
            lat = location.lat,
            lng = location.lng,
            "Round started."
        );

        // The round's countdown lives in a detached task. Every tick re-takes
        // the write lock and runs the guarded transition, so a guess that
        // lands between ticks simply wins and the task sees a stopped timer.
        let game_id = game_id.to_string();
        let storage_handle = self.storage.clone();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                let mut storage_guard = storage_handle.write().await;
                let Some(game) = storage_guard.get_mut(&game_id) else {
                    return;
                };
                if game.epoch != epoch {
                    // The game was restarted or moved on; this countdown is
                    // no longer the round's.
                    return;
                }
                match game.tick() {
                    TimerTick::Running => {}
                    TimerTick::Expired => {
                        tracing::info!(game_id, round_number, "Round timed out.");
                        return;
                    }
                    TimerTick::Stopped => return,
                }
            }
        });
        Ok(round_number)
    }

    async fn submit_guess(&self, game_id: &str, guess: LatLng) -> Option<Round> {
        self.storage
            .write()
            .await
            .get_mut(game_id)
            .unwrap()
            .finish_round(RoundFinish::Guessed(guess))
            .cloned()
    }

    async fn end_game(&self, game_id: &str) -> bool {
        self.storage.write().await.get_mut(game_id).unwrap().end_game()
    }

    async fn restart(&self, game_id: &str) {
        self.storage.write().await.get_mut(game_id).unwrap().restart()
    }
}

impl GuessRepo for HashMapGamesStorage {
    async fn save_guess(&self, game_id: &str, guess: LatLng) -> bool {
        self.storage
            .write()
            .await
            .get_mut(game_id)
            .unwrap()
            .save_guess(guess)
    }

    async fn revoke_guess(&self, game_id: &str) -> bool {
        self.storage
            .write()
            .await
            .get_mut(game_id)
            .unwrap()
            .revoke_guess()
    }
}

impl ClueAllowanceRepo for HashMapGamesStorage {
    async fn begin_clue(&self, game_id: &str) -> Result<ClueTicket, ClueRejection> {
        self.storage.write().await.get_mut(game_id).unwrap().begin_clue()
    }

    async fn complete_clue(&self, game_id: &str, ticket: &ClueTicket) -> bool {
        self.storage
            .write()
            .await
            .get_mut(game_id)
            .unwrap()
            .complete_clue(ticket)
    }

    async fn abort_clue(&self, game_id: &str, ticket: &ClueTicket) {
        self.storage
            .write()
            .await
            .get_mut(game_id)
            .unwrap()
            .abort_clue(ticket)
    }
}

impl GameStateReader for HashMapGamesStorage {
    async fn state(&self, game_id: &str) -> Option<GameStateView> {
        self.storage.read().await.get(game_id).map(Game::state_view)
    }
}

fn generate_game_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect()
}
