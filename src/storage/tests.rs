use crate::map::models::LatLng;
use crate::storage::games::HashMapGamesStorage;
use crate::storage::interface::{GameFlowHandler, GameRepo, GameStateReader};
use std::time::Duration;

const LOCATION: LatLng = LatLng {
    lat: 35.6595,
    lng: 139.7005,
};

const GUESS: LatLng = LatLng {
    lat: 35.0,
    lng: 139.0,
};

/// Paused-clock tests: `tokio::time::sleep` auto-advances, so the per-round
/// countdown task runs its ticks deterministically and instantly.

#[tokio::test(start_paused = true)]
async fn test_the_timer_times_the_round_out() {
    let storage = HashMapGamesStorage::new(2);
    let game_id = storage.create().await;
    storage.begin_round(&game_id, LOCATION).await.unwrap();

    tokio::time::sleep(Duration::from_secs(3)).await;

    let state = storage.state(&game_id).await.unwrap();
    assert!(state.is_round_ended);
    assert!(!state.is_timer_running);
    assert_eq!(state.timer_count, 0);
    assert_eq!(state.rounds.len(), 1);
    assert!(state.rounds[0].timed_out);
    assert_eq!(state.rounds[0].points, 0);
}

#[tokio::test(start_paused = true)]
async fn test_a_submitted_guess_beats_the_timer() {
    let storage = HashMapGamesStorage::new(2);
    let game_id = storage.create().await;
    storage.begin_round(&game_id, LOCATION).await.unwrap();

    let round = storage.submit_guess(&game_id, GUESS).await;
    assert!(round.is_some());

    // Let the countdown task run to where the timeout would have fired.
    tokio::time::sleep(Duration::from_secs(5)).await;

    let state = storage.state(&game_id).await.unwrap();
    assert_eq!(state.rounds.len(), 1);
    assert!(!state.rounds[0].timed_out);
    assert_eq!(state.total_score, state.rounds[0].points);
}

#[tokio::test(start_paused = true)]
async fn test_a_stale_timer_cannot_touch_the_next_round() {
    let storage = HashMapGamesStorage::new(3);
    let game_id = storage.create().await;
    storage.begin_round(&game_id, LOCATION).await.unwrap();
    storage.submit_guess(&game_id, GUESS).await.unwrap();

    // Round 2 starts while round 1's countdown task is still parked on its
    // first sleep; that task must exit on the epoch check, not tick round 2.
    storage.begin_round(&game_id, LOCATION).await.unwrap();
    tokio::time::sleep(Duration::from_secs(10)).await;

    let state = storage.state(&game_id).await.unwrap();
    assert_eq!(state.rounds.len(), 2);
    assert!(!state.rounds[0].timed_out);
    assert!(state.rounds[1].timed_out);
}

#[tokio::test(start_paused = true)]
async fn test_restart_cancels_the_running_countdown() {
    let storage = HashMapGamesStorage::new(2);
    let game_id = storage.create().await;
    storage.begin_round(&game_id, LOCATION).await.unwrap();

    storage.restart(&game_id).await;
    tokio::time::sleep(Duration::from_secs(5)).await;

    let state = storage.state(&game_id).await.unwrap();
    assert!(!state.is_game_started);
    assert!(state.rounds.is_empty());
    assert_eq!(state.total_score, 0);
}
