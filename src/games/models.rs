use crate::games::consts::ROUNDS_PER_GAME;
use crate::map::{self, models::LatLng, scoring};
use serde::Serialize;

/// One finished play cycle. Appended to the game's history when the round
/// ends and never mutated afterwards.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub round_number: u64,
    pub actual_location: LatLng,
    pub guess_location: Option<LatLng>,
    pub distance_km: u64,
    pub points: u64,
    pub timed_out: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GamePhase {
    NotStarted,
    Playing { current_location: LatLng },
    RoundEnded,
    GameEnded,
}

/// Why a round is being finalized. Both triggers funnel into the same guarded
/// transition, so whichever arrives second is dropped.
#[derive(Copy, Clone, Debug)]
pub enum RoundFinish {
    Guessed(LatLng),
    TimedOut,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TimerTick {
    Running,
    Expired,
    Stopped,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundStartError {
    RoundAlreadyActive,
    GameAlreadyEnded,
    NoRoundsLeft,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClueRejection {
    RoundNotActive,
    ClueAlreadyUsed,
    ClueRequestInFlight,
}

/// Handle for an admitted clue request. A completion is applied only if the
/// ticket still matches the live game, so results arriving after the round
/// (or a restart) are discarded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClueTicket {
    pub epoch: u64,
    pub round_number: u64,
    pub location: LatLng,
}

#[derive(Clone, Debug)]
pub struct Game {
    pub rounds: Vec<Round>,
    pub current_round: u64,
    pub total_score: u64,
    pub phase: GamePhase,
    pub timer_count: u64,
    pub is_timer_running: bool,
    pub saved_guess: Option<LatLng>,
    pub clue_requested: bool,
    pub clue_used: bool,
    pub round_duration_secs: u64,
    /// Bumped on every round start and restart; lets detached timer tasks and
    /// in-flight clue requests detect that the game moved on without them.
    pub epoch: u64,
}

impl Game {
    pub fn new(round_duration_secs: u64) -> Self {
        Game {
            rounds: Vec::new(),
            current_round: 1,
            total_score: 0,
            phase: GamePhase::NotStarted,
            timer_count: round_duration_secs,
            is_timer_running: false,
            saved_guess: None,
            clue_requested: false,
            clue_used: false,
            round_duration_secs,
            epoch: 0,
        }
    }

    /// Starts the next round at the given location. Valid from `NotStarted`
    /// (round 1) and from `RoundEnded` while rounds remain; everything else
    /// is rejected without touching the state.
    pub fn begin_round(&mut self, location: LatLng) -> Result<u64, RoundStartError> {
        match self.phase {
            GamePhase::NotStarted => {}
            GamePhase::RoundEnded => {
                if self.current_round >= ROUNDS_PER_GAME {
                    return Err(RoundStartError::NoRoundsLeft);
                }
                self.current_round += 1;
            }
            GamePhase::Playing { .. } => return Err(RoundStartError::RoundAlreadyActive),
            GamePhase::GameEnded => return Err(RoundStartError::GameAlreadyEnded),
        }
        self.phase = GamePhase::Playing {
            current_location: location,
        };
        self.timer_count = self.round_duration_secs;
        self.is_timer_running = true;
        self.saved_guess = None;
        self.clue_requested = false;
        self.clue_used = false;
        self.epoch += 1;
        Ok(self.current_round)
    }

    /// The single round-ending transition. Returns the finalized round, or
    /// `None` when the round was already over and the event is dropped. This
    /// is what guarantees at most one scoring event per round: a guess and a
    /// timeout can race, but only the first one finds the phase `Playing`.
    pub fn finish_round(&mut self, finish: RoundFinish) -> Option<&Round> {
        let actual_location = match self.phase {
            GamePhase::Playing { current_location } => current_location,
            _ => return None,
        };
        let round = match finish {
            RoundFinish::Guessed(guess) => {
                let distance_km = map::distance_km(guess, actual_location);
                Round {
                    round_number: self.current_round,
                    actual_location,
                    guess_location: Some(guess),
                    distance_km,
                    points: scoring::points_for(distance_km),
                    timed_out: false,
                }
            }
            // A tentative guess that was never submitted does not count.
            RoundFinish::TimedOut => Round {
                round_number: self.current_round,
                actual_location,
                guess_location: None,
                distance_km: 0,
                points: 0,
                timed_out: true,
            },
        };
        self.total_score += round.points;
        self.rounds.push(round);
        self.is_timer_running = false;
        self.phase = GamePhase::RoundEnded;
        self.rounds.last()
    }

    /// One second of the countdown. Reaching zero is itself the timeout event.
    pub fn tick(&mut self) -> TimerTick {
        if !self.is_timer_running || !matches!(self.phase, GamePhase::Playing { .. }) {
            return TimerTick::Stopped;
        }
        self.timer_count = self.timer_count.saturating_sub(1);
        if self.timer_count == 0 {
            self.finish_round(RoundFinish::TimedOut);
            TimerTick::Expired
        } else {
            TimerTick::Running
        }
    }

    /// Concludes the game once the last round has ended.
    pub fn end_game(&mut self) -> bool {
        if matches!(self.phase, GamePhase::RoundEnded)
            && self.current_round >= ROUNDS_PER_GAME
        {
            self.phase = GamePhase::GameEnded;
            true
        } else {
            false
        }
    }

    /// Back to a pristine round 1, keeping the epoch monotonic so that
    /// anything still in flight from the previous life of the game gets
    /// dropped on arrival.
    pub fn restart(&mut self) {
        let epoch = self.epoch + 1;
        *self = Game::new(self.round_duration_secs);
        self.epoch = epoch;
    }

    pub fn save_guess(&mut self, guess: LatLng) -> bool {
        if matches!(self.phase, GamePhase::Playing { .. }) {
            self.saved_guess = Some(guess);
            true
        } else {
            false
        }
    }

    pub fn revoke_guess(&mut self) -> bool {
        if matches!(self.phase, GamePhase::Playing { .. }) {
            self.saved_guess = None;
            true
        } else {
            false
        }
    }

    /// Admits a clue request: one per round, one in flight at a time, only
    /// while the round is active.
    pub fn begin_clue(&mut self) -> Result<ClueTicket, ClueRejection> {
        let location = match self.phase {
            GamePhase::Playing { current_location } => current_location,
            _ => return Err(ClueRejection::RoundNotActive),
        };
        if self.clue_used {
            return Err(ClueRejection::ClueAlreadyUsed);
        }
        if self.clue_requested {
            return Err(ClueRejection::ClueRequestInFlight);
        }
        self.clue_requested = true;
        Ok(ClueTicket {
            epoch: self.epoch,
            round_number: self.current_round,
            location,
        })
    }

    /// Consumes the clue allowance if the ticket still matches the live
    /// round; a stale completion returns `false` and the caller discards the
    /// result.
    pub fn complete_clue(&mut self, ticket: &ClueTicket) -> bool {
        if self.clue_requested
            && !self.clue_used
            && self.epoch == ticket.epoch
            && self.current_round == ticket.round_number
        {
            self.clue_used = true;
            true
        } else {
            false
        }
    }

    /// Releases the in-flight marker after a failed clue request. The
    /// allowance is not consumed: no information was delivered.
    pub fn abort_clue(&mut self, ticket: &ClueTicket) {
        if self.clue_requested
            && !self.clue_used
            && self.epoch == ticket.epoch
            && self.current_round == ticket.round_number
        {
            self.clue_requested = false;
        }
    }

    pub fn state_view(&self) -> GameStateView {
        GameStateView {
            current_round: self.current_round,
            max_rounds: ROUNDS_PER_GAME,
            total_score: self.total_score,
            rounds: self.rounds.clone(),
            is_game_started: !matches!(self.phase, GamePhase::NotStarted),
            is_round_ended: matches!(self.phase, GamePhase::RoundEnded),
            is_game_ended: matches!(self.phase, GamePhase::GameEnded),
            timer_count: self.timer_count,
            is_timer_running: self.is_timer_running,
            current_location: match self.phase {
                GamePhase::Playing { current_location } => Some(current_location),
                _ => None,
            },
            saved_guess: self.saved_guess,
            clue_requested: self.clue_requested,
            clue_used: self.clue_used,
        }
    }
}

/// The snapshot the frontend renders from.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    pub current_round: u64,
    pub max_rounds: u64,
    pub total_score: u64,
    pub rounds: Vec<Round>,
    pub is_game_started: bool,
    pub is_round_ended: bool,
    pub is_game_ended: bool,
    pub timer_count: u64,
    pub is_timer_running: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_guess: Option<LatLng>,
    pub clue_requested: bool,
    pub clue_used: bool,
}
