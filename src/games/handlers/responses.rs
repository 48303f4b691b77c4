use crate::games::models::{GameStateView, Round};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    pub game_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameStateError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<GameStateView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStateError {
    GameNotFound,
}

/// Shared by the three endpoints that (re)start a round: start, continue and
/// restart all funnel into the same guarded round-start transition and fail
/// the same ways.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundFlowError {
    GameNotFound,
    RoundAlreadyActive,
    GameAlreadyEnded,
    NoRoundsLeft,
    NoLocationFound,
    MissingProviderCredentials,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RoundFlowError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<GameStateView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueGameResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RoundFlowError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<GameStateView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestartGameResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RoundFlowError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<GameStateView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GuessSavingError>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessSavingError {
    GameNotFound,
    RoundNotActive,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GuessSubmissionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<Round>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessSubmissionError {
    GameNotFound,
    RoundNotActive,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokeGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GuessRevocationError>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessRevocationError {
    GameNotFound,
    RoundNotActive,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClueResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ClueRequestError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClueRequestError {
    GameNotFound,
    RoundNotActive,
    ClueAlreadyUsed,
    ClueRequestInFlight,
    MissingProviderCredentials,
    ImageCaptureFailed,
    /// Every recognition request failed; the allowance is not consumed.
    ClueUnavailable,
    /// The round (or game) moved on while the clue was being inferred; the
    /// result was discarded.
    ClueExpired,
}
