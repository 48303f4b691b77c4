use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::games::HashMapGamesStorage;
use crate::{games, health, http::cors};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapGamesStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let guesses_routes = Router::new()
        .route("/save", post(games::handlers::guesses::save))
        .route("/submit", post(games::handlers::guesses::submit))
        .route("/revoke", post(games::handlers::guesses::revoke));
    let games_routes = Router::new()
        .route("/", post(games::handlers::game::create))
        .route("/:game-id", get(games::handlers::game::state))
        .route("/:game-id/start", post(games::handlers::game::start))
        .route("/:game-id/continue", post(games::handlers::game::advance))
        .route("/:game-id/restart", post(games::handlers::game::restart))
        .route("/:game-id/clue", post(games::handlers::clues::request))
        .nest("/:game-id/guesses", guesses_routes);

    Router::new()
        .nest("/health", health_routes)
        .nest("/games", games_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
