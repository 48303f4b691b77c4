use crate::app_context::AppContext;
use crate::games::handlers::http::GamesHttpHandler;
use crate::games::handlers::responses::{
    RevokeGuessResponse, SaveGuessResponse, SubmitGuessResponse,
};
use crate::map::models::LatLng;
use crate::storage::interface::IGameStorage;
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn save<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
    Json(guess): Json<LatLng>,
) -> Json<SaveGuessResponse>
where
    GS: IGameStorage,
{
    let response = GamesHttpHandler::new(app_context, game_id)
        .save_guess(guess)
        .await;
    Json(response)
}

pub async fn submit<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
    Json(guess): Json<LatLng>,
) -> Json<SubmitGuessResponse>
where
    GS: IGameStorage,
{
    let response = GamesHttpHandler::new(app_context, game_id)
        .submit_guess(guess)
        .await;
    Json(response)
}

pub async fn revoke<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<RevokeGuessResponse>
where
    GS: IGameStorage,
{
    let response = GamesHttpHandler::new(app_context, game_id)
        .revoke_guess()
        .await;
    Json(response)
}
