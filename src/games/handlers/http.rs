use crate::app_context::AppContext;
use crate::clues;
use crate::clues::models::ClueError;
use crate::games::handlers::responses::{
    ClueRequestError, ClueResponse, ContinueGameResponse, CreateGameResponse, GameStateError,
    GameStateResponse, GuessRevocationError, GuessSavingError, GuessSubmissionError,
    RestartGameResponse, RevokeGuessResponse, RoundFlowError, SaveGuessResponse,
    StartGameResponse, SubmitGuessResponse,
};
use crate::games::models::{ClueRejection, GameStateView, RoundStartError};
use crate::map::models::LatLng;
use crate::map::sampler::{self, LocationResolutionError};
use crate::storage::interface::IGameStorage;

pub struct CreateGameHttpHandler<GS: IGameStorage> {
    app_context: AppContext<GS>,
}

impl<GS: IGameStorage> CreateGameHttpHandler<GS> {
    pub fn new(app_context: AppContext<GS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> CreateGameResponse {
        let game_id = self.app_context.games.create().await;
        tracing::info!(game_id, "Game created.");
        CreateGameResponse { game_id }
    }
}

pub struct GamesHttpHandler<GS: IGameStorage> {
    app_context: AppContext<GS>,
    game_id: String,
}

impl<GS: IGameStorage> GamesHttpHandler<GS> {
    pub fn new(app_context: AppContext<GS>, game_id: String) -> Self {
        Self {
            app_context,
            game_id,
        }
    }

    pub async fn state(&self) -> GameStateResponse {
        match self.app_context.games.state(&self.game_id).await {
            Some(state) => GameStateResponse {
                error: false,
                error_code: None,
                state: Some(state),
            },
            None => GameStateResponse {
                error: true,
                error_code: Some(GameStateError::GameNotFound),
                state: None,
            },
        }
    }

    pub async fn start(&self) -> StartGameResponse {
        if !self.app_context.games.exists(&self.game_id).await {
            return StartGameResponse {
                error: true,
                error_code: Some(RoundFlowError::GameNotFound),
                state: None,
            };
        }
        match self.resolve_and_begin_round().await {
            Ok(state) => StartGameResponse {
                error: false,
                error_code: None,
                state: Some(state),
            },
            Err(error_code) => StartGameResponse {
                error: true,
                error_code: Some(error_code),
                state: self.app_context.games.state(&self.game_id).await,
            },
        }
    }

    /// From a finished round: concludes the game when the round cap is
    /// reached, otherwise starts the next round.
    pub async fn advance(&self) -> ContinueGameResponse {
        if !self.app_context.games.exists(&self.game_id).await {
            return ContinueGameResponse {
                error: true,
                error_code: Some(RoundFlowError::GameNotFound),
                state: None,
            };
        }
        if self.app_context.games.end_game(&self.game_id).await {
            tracing::info!(game_id = %self.game_id, "Game finished.");
            return ContinueGameResponse {
                error: false,
                error_code: None,
                state: self.app_context.games.state(&self.game_id).await,
            };
        }
        match self.resolve_and_begin_round().await {
            Ok(state) => ContinueGameResponse {
                error: false,
                error_code: None,
                state: Some(state),
            },
            Err(error_code) => ContinueGameResponse {
                error: true,
                error_code: Some(error_code),
                state: self.app_context.games.state(&self.game_id).await,
            },
        }
    }

    pub async fn restart(&self) -> RestartGameResponse {
        if !self.app_context.games.exists(&self.game_id).await {
            return RestartGameResponse {
                error: true,
                error_code: Some(RoundFlowError::GameNotFound),
                state: None,
            };
        }
        self.app_context.games.restart(&self.game_id).await;
        match self.resolve_and_begin_round().await {
            Ok(state) => RestartGameResponse {
                error: false,
                error_code: None,
                state: Some(state),
            },
            Err(error_code) => RestartGameResponse {
                error: true,
                error_code: Some(error_code),
                state: self.app_context.games.state(&self.game_id).await,
            },
        }
    }

    pub async fn save_guess(&self, guess: LatLng) -> SaveGuessResponse {
        if !self.app_context.games.exists(&self.game_id).await {
            return SaveGuessResponse {
                error: true,
                error_code: Some(GuessSavingError::GameNotFound),
            };
        }
        if self.app_context.games.save_guess(&self.game_id, guess).await {
            SaveGuessResponse {
                error: false,
                error_code: None,
            }
        } else {
            SaveGuessResponse {
                error: true,
                error_code: Some(GuessSavingError::RoundNotActive),
            }
        }
    }

    pub async fn submit_guess(&self, guess: LatLng) -> SubmitGuessResponse {
        if !self.app_context.games.exists(&self.game_id).await {
            return SubmitGuessResponse {
                error: true,
                error_code: Some(GuessSubmissionError::GameNotFound),
                round: None,
            };
        }
        match self.app_context.games.submit_guess(&self.game_id, guess).await {
            Some(round) => {
                tracing::info!(
                    game_id = %self.game_id,
                    round_number = round.round_number,
                    distance_km = round.distance_km,
                    points = round.points,
                    "Guess scored."
                );
                SubmitGuessResponse {
                    error: false,
                    error_code: None,
                    round: Some(round),
                }
            }
            // The round already ended (e.g. the timer won the race); the
            // guess is dropped without touching any recorded state.
            None => SubmitGuessResponse {
                error: true,
                error_code: Some(GuessSubmissionError::RoundNotActive),
                round: None,
            },
        }
    }

    pub async fn revoke_guess(&self) -> RevokeGuessResponse {
        if !self.app_context.games.exists(&self.game_id).await {
            return RevokeGuessResponse {
                error: true,
                error_code: Some(GuessRevocationError::GameNotFound),
            };
        }
        if self.app_context.games.revoke_guess(&self.game_id).await {
            RevokeGuessResponse {
                error: false,
                error_code: None,
            }
        } else {
            RevokeGuessResponse {
                error: true,
                error_code: Some(GuessRevocationError::RoundNotActive),
            }
        }
    }

    pub async fn request_clue(&self) -> ClueResponse {
        if !self.app_context.games.exists(&self.game_id).await {
            return clue_failure(ClueRequestError::GameNotFound);
        }
        let ticket = match self.app_context.games.begin_clue(&self.game_id).await {
            Ok(ticket) => ticket,
            Err(ClueRejection::RoundNotActive) => {
                return clue_failure(ClueRequestError::RoundNotActive);
            }
            Err(ClueRejection::ClueAlreadyUsed) => {
                return clue_failure(ClueRequestError::ClueAlreadyUsed);
            }
            Err(ClueRejection::ClueRequestInFlight) => {
                return clue_failure(ClueRequestError::ClueRequestInFlight);
            }
        };
        let inference = clues::infer(
            self.app_context.imagery.as_ref(),
            self.app_context.recognition.as_ref(),
            ticket.location,
        )
        .await;
        match inference {
            Ok(clue) => {
                if self.app_context.games.complete_clue(&self.game_id, &ticket).await {
                    ClueResponse {
                        error: false,
                        error_code: None,
                        clue: Some(clue),
                    }
                } else {
                    tracing::info!(
                        game_id = %self.game_id,
                        round_number = ticket.round_number,
                        "Discarding a clue that arrived after its round."
                    );
                    clue_failure(ClueRequestError::ClueExpired)
                }
            }
            Err(err) => {
                self.app_context.games.abort_clue(&self.game_id, &ticket).await;
                tracing::warn!(game_id = %self.game_id, error = %err, "Clue request failed.");
                clue_failure(match err {
                    ClueError::MissingCredentials(_) => {
                        ClueRequestError::MissingProviderCredentials
                    }
                    ClueError::ImageCapture(_) => ClueRequestError::ImageCaptureFailed,
                    ClueError::AllSignalsFailed => ClueRequestError::ClueUnavailable,
                })
            }
        }
    }

    /// Resolves a start location (bounded retries happen in the sampler) and
    /// runs the guarded round-start transition. On any failure the game is
    /// left exactly as it was: the timer only ever starts together with a
    /// resolved location.
    async fn resolve_and_begin_round(&self) -> Result<GameStateView, RoundFlowError> {
        let location = match sampler::resolve_valid_location(self.app_context.imagery.as_ref())
            .await
        {
            Ok(location) => location,
            Err(LocationResolutionError::MissingCredentials(_)) => {
                return Err(RoundFlowError::MissingProviderCredentials);
            }
            Err(err @ LocationResolutionError::AttemptsExhausted(_)) => {
                tracing::error!(game_id = %self.game_id, error = %err, "Could not start a round.");
                return Err(RoundFlowError::NoLocationFound);
            }
        };
        match self.app_context.games.begin_round(&self.game_id, location).await {
            Ok(_round_number) => Ok(self
                .app_context
                .games
                .state(&self.game_id)
                .await
                .expect("The game vanished right after its round started.")),
            Err(RoundStartError::RoundAlreadyActive) => Err(RoundFlowError::RoundAlreadyActive),
            Err(RoundStartError::GameAlreadyEnded) => Err(RoundFlowError::GameAlreadyEnded),
            Err(RoundStartError::NoRoundsLeft) => Err(RoundFlowError::NoRoundsLeft),
        }
    }
}

fn clue_failure(error_code: ClueRequestError) -> ClueResponse {
    ClueResponse {
        error: true,
        error_code: Some(error_code),
        clue: None,
    }
}
