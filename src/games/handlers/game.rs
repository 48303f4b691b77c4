use crate::app_context::AppContext;
use crate::games::handlers::http::{CreateGameHttpHandler, GamesHttpHandler};
use crate::games::handlers::responses::{
    ContinueGameResponse, CreateGameResponse, GameStateResponse, RestartGameResponse,
    StartGameResponse,
};
use crate::storage::interface::IGameStorage;
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn create<GS>(State(app_context): State<AppContext<GS>>) -> Json<CreateGameResponse>
where
    GS: IGameStorage,
{
    let response = CreateGameHttpHandler::new(app_context).create().await;
    Json(response)
}

pub async fn state<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<GameStateResponse>
where
    GS: IGameStorage,
{
    let response = GamesHttpHandler::new(app_context, game_id).state().await;
    Json(response)
}

pub async fn start<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<StartGameResponse>
where
    GS: IGameStorage,
{
    let response = GamesHttpHandler::new(app_context, game_id).start().await;
    Json(response)
}

pub async fn advance<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<ContinueGameResponse>
where
    GS: IGameStorage,
{
    let response = GamesHttpHandler::new(app_context, game_id).advance().await;
    Json(response)
}

pub async fn restart<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<RestartGameResponse>
where
    GS: IGameStorage,
{
    let response = GamesHttpHandler::new(app_context, game_id).restart().await;
    Json(response)
}
