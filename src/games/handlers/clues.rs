use crate::app_context::AppContext;
use crate::games::handlers::http::GamesHttpHandler;
use crate::games::handlers::responses::ClueResponse;
use crate::storage::interface::IGameStorage;
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn request<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<ClueResponse>
where
    GS: IGameStorage,
{
    let response = GamesHttpHandler::new(app_context, game_id)
        .request_clue()
        .await;
    Json(response)
}
