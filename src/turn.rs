//! Turn sequencing between the human and the AI.
//!
//! The controller never reads a clock. Frontends call [`TurnController::tick`]
//! once per frame with the time that passed since the previous call, which
//! drives the two timed AI states. Tests can advance time in arbitrary steps.

use alloc::format;
use alloc::string::String;
use core::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::{
    ai::AiShot,
    common::{Coord, ShotOutcome, Side},
    config::GameConfig,
    game::{Game, GameError},
};

pub const PROMPT_FIRST_TURN: &str = "Your Turn! Click on the right board.";
pub const PROMPT_TURN: &str = "Your Turn!";
pub const ALREADY_SHOT: &str = "You already shot there!";
pub const AI_THINKING: &str = "AI is thinking...";
pub const AI_OUT_OF_SHOTS: &str = "The AI has no shots left.";
pub const BANNER_WIN: &str = "YOU WIN!";
pub const BANNER_LOSE: &str = "GAME OVER! AI WINS!";
pub const RESTART_PROMPT: &str = "Press 'R' to Restart";

/// Where control currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the human to pick a cell on the enemy radar.
    PlayerTurn,
    /// Pause between the human's shot and the AI's.
    AiThinking { waited: Duration },
    /// The AI's result is on screen; control returns to the human after it.
    AiResultDisplay { waited: Duration },
    /// Match decided; only a restart is accepted.
    GameOver { winner: Side },
}

/// Colour class of a message line; frontends pick the actual colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Alert,
    Calm,
    Good,
}

/// A line of text for the status area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub tone: Tone,
}

impl Message {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// Not the player's turn, or the pointer was not over a cell.
    Ignored,
    /// The cell was already shot; only the status line changed.
    AlreadyShot,
    /// A shot was fired.
    Fired(ShotOutcome),
}

/// Drives a [`Game`] through player turns, timed AI turns and game over.
pub struct TurnController<R> {
    config: GameConfig,
    game: Game,
    rng: R,
    state: TurnState,
    status: Message,
    ai_line: Option<Message>,
    last_ai_shot: Option<AiShot>,
}

impl<R: Rng> TurnController<R> {
    /// Start a new match with ships placed using `rng`.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        let game = Game::new(config, &mut rng)?;
        Ok(Self::with_game(game, rng))
    }

    /// Wrap an already set up game, e.g. one with hand-placed ships.
    pub fn with_game(game: Game, rng: R) -> Self {
        Self {
            config: *game.config(),
            game,
            rng,
            state: TurnState::PlayerTurn,
            status: Message::new(PROMPT_FIRST_TURN, Tone::Neutral),
            ai_line: None,
            last_ai_shot: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Main status line.
    pub fn status(&self) -> &Message {
        &self.status
    }

    /// Secondary line describing the AI's turn, if any.
    pub fn ai_line(&self) -> Option<&Message> {
        self.ai_line.as_ref()
    }

    /// The AI's most recent shot of the current turn.
    pub fn last_ai_shot(&self) -> Option<AiShot> {
        self.last_ai_shot
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            TurnState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// End-of-game banner and its tone.
    pub fn banner(&self) -> Option<Message> {
        self.winner().map(|winner| match winner {
            Side::Player => Message::new(BANNER_WIN, Tone::Alert),
            Side::Ai => Message::new(BANNER_LOSE, Tone::Neutral),
        })
    }

    /// Radar cell worth highlighting under the pointer: only during the
    /// player's turn and only if it has not been shot yet.
    pub fn hover_target(&self, target: Option<Coord>) -> Option<Coord> {
        let coord = target?;
        let open = self.game.player_guesses().contains(coord) && !self.game.player_has_shot(coord);
        (self.state == TurnState::PlayerTurn && open).then_some(coord)
    }

    /// Handle a click on the enemy radar. `target` is the cell under the
    /// pointer, `None` if the pointer missed the board.
    pub fn click(&mut self, target: Option<Coord>) -> Result<ClickResult, GameError> {
        if self.state != TurnState::PlayerTurn {
            debug!("click ignored in state {:?}", self.state);
            return Ok(ClickResult::Ignored);
        }
        let Some(coord) = target else {
            return Ok(ClickResult::Ignored);
        };
        if !self.game.player_guesses().contains(coord) {
            return Ok(ClickResult::Ignored);
        }
        if self.game.player_has_shot(coord) {
            self.status = Message::new(ALREADY_SHOT, Tone::Alert);
            return Ok(ClickResult::AlreadyShot);
        }

        let outcome = self.game.player_shot(coord)?;
        self.status = match outcome {
            ShotOutcome::Hit => Message::new(format!("BOOM! Hit at {}!", coord), Tone::Alert),
            ShotOutcome::Miss => Message::new(format!("Splash. Miss at {}.", coord), Tone::Calm),
        };
        if let Some(winner) = self.game.winner() {
            self.finish(winner);
        } else {
            self.state = TurnState::AiThinking {
                waited: Duration::ZERO,
            };
            self.ai_line = Some(Message::new(AI_THINKING, Tone::Neutral));
            self.last_ai_shot = None;
        }
        Ok(ClickResult::Fired(outcome))
    }

    /// Advance the timed states by `elapsed`. At most one transition happens
    /// per call and time left over after a transition is dropped. Returns
    /// `true` if the state changed.
    pub fn tick(&mut self, elapsed: Duration) -> Result<bool, GameError> {
        match self.state {
            TurnState::AiThinking { waited } => {
                let waited = waited.saturating_add(elapsed);
                if waited < self.config.ai_think_delay {
                    self.state = TurnState::AiThinking { waited };
                    return Ok(false);
                }
                self.fire_ai()?;
                Ok(true)
            }
            TurnState::AiResultDisplay { waited } => {
                let waited = waited.saturating_add(elapsed);
                if waited < self.config.ai_result_delay {
                    self.state = TurnState::AiResultDisplay { waited };
                    return Ok(false);
                }
                self.state = TurnState::PlayerTurn;
                self.status = Message::new(PROMPT_TURN, Tone::Neutral);
                self.ai_line = None;
                Ok(true)
            }
            TurnState::PlayerTurn | TurnState::GameOver { .. } => Ok(false),
        }
    }

    fn fire_ai(&mut self) -> Result<(), GameError> {
        let shot = self.game.ai_turn(&mut self.rng)?;
        self.last_ai_shot = shot;
        self.ai_line = Some(match shot {
            Some(AiShot {
                coord,
                outcome: ShotOutcome::Hit,
            }) => Message::new(format!("DANGER! AI hit you at {}!", coord), Tone::Alert),
            Some(AiShot {
                coord,
                outcome: ShotOutcome::Miss,
            }) => Message::new(format!("The AI missed at {}.", coord), Tone::Good),
            // Unreachable: `Game` only takes unshot boards, so the AI lands
            // on the last ship before it can run out of cells.
            None => Message::new(AI_OUT_OF_SHOTS, Tone::Neutral),
        });
        match self.game.winner() {
            Some(winner) => self.finish(winner),
            None => {
                self.state = TurnState::AiResultDisplay {
                    waited: Duration::ZERO,
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self, winner: Side) {
        info!("game over, {:?} wins", winner);
        if winner == Side::Player {
            self.ai_line = None;
        }
        self.state = TurnState::GameOver { winner };
    }

    /// Start over with fresh boards. Only honoured once the game is over;
    /// returns `false` when ignored.
    pub fn restart(&mut self) -> Result<bool, GameError> {
        if self.winner().is_none() {
            return Ok(false);
        }
        self.game = Game::new(self.config, &mut self.rng)?;
        self.state = TurnState::PlayerTurn;
        self.status = Message::new(PROMPT_TURN, Tone::Neutral);
        self.ai_line = None;
        self.last_ai_shot = None;
        info!("game restarted");
        Ok(true)
    }
}
