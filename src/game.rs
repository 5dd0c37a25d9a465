use core::fmt;

use log::info;
use rand::Rng;

use crate::{
    ai::{AiGunner, AiShot},
    board::Board,
    common::{BoardError, Cell, Coord, ShotOutcome, Side},
    config::{ConfigError, GameConfig},
};

/// Errors returned by [`Game`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The configuration cannot produce a playable game.
    Config(ConfigError),
    /// A board rejected the operation.
    Board(BoardError),
    /// The match already has a winner.
    GameOver(Side),
    /// A board does not have the configured side length.
    BoardSize { expected: usize, found: usize },
    /// A board handed in for a new match already has shots on it.
    BoardInPlay,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Config(e) => write!(f, "invalid configuration: {}", e),
            GameError::Board(e) => write!(f, "board error: {}", e),
            GameError::GameOver(winner) => write!(f, "game is over, {:?} won", winner),
            GameError::BoardSize { expected, found } => write!(
                f,
                "board is {}x{}, expected {}x{}",
                found, found, expected, expected
            ),
            GameError::BoardInPlay => write!(f, "board already has shots on it"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// Both sides of a human-vs-AI match.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    player_board: Board,
    player_guesses: Board,
    ai_board: Board,
    ai: AiGunner,
    winner: Option<Side>,
}

impl Game {
    /// Set up fresh boards with `ship_count` ships placed at random on each
    /// side.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        let mut player_board = Board::new(config.grid_size);
        player_board.place_ships_randomly(rng, config.ship_count)?;
        let mut ai_board = Board::new(config.grid_size);
        ai_board.place_ships_randomly(rng, config.ship_count)?;
        Self::from_boards(config, player_board, ai_board)
    }

    /// Start a match from boards whose ships are already placed. Both boards
    /// must match the configured grid size and must not have been shot at.
    pub fn from_boards(
        config: GameConfig,
        player_board: Board,
        ai_board: Board,
    ) -> Result<Self, GameError> {
        for board in [&player_board, &ai_board] {
            if board.size() != config.grid_size {
                return Err(GameError::BoardSize {
                    expected: config.grid_size,
                    found: board.size(),
                });
            }
            if board.count(Cell::Hit) + board.count(Cell::Miss) > 0 {
                return Err(GameError::BoardInPlay);
            }
        }
        Ok(Self {
            player_guesses: Board::new(player_board.size()),
            config,
            player_board,
            ai_board,
            ai: AiGunner::new(),
            winner: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The human's own board with ships and the AI's shots.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The human's record of shots against the AI.
    pub fn player_guesses(&self) -> &Board {
        &self.player_guesses
    }

    /// The AI's real board. Renderers must not show its ships.
    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    pub fn ai(&self) -> &AiGunner {
        &self.ai
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(side) => GameStatus::Won(side),
            None => GameStatus::InProgress,
        }
    }

    /// Returns `true` if the player already fired at `coord`.
    pub fn player_has_shot(&self, coord: Coord) -> bool {
        self.player_guesses.is_resolved(coord)
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.winner {
            Some(winner) => Err(GameError::GameOver(winner)),
            None => Ok(()),
        }
    }

    /// Fire the player's shot at the AI board and note it on the guess board.
    pub fn player_shot(&mut self, coord: Coord) -> Result<ShotOutcome, GameError> {
        self.ensure_in_progress()?;
        if self.player_guesses.is_resolved(coord) {
            return Err(BoardError::AlreadyResolved(coord).into());
        }
        let outcome = self.ai_board.resolve_shot(coord)?;
        self.player_guesses.record(coord, outcome)?;
        info!("player fired at ({}): {:?}", coord, outcome);
        if self.ai_board.all_sunk() {
            info!("player sank the last ai ship");
            self.winner = Some(Side::Player);
        }
        Ok(outcome)
    }

    /// Let the AI take its shot. `Ok(None)` when it has nothing left to try.
    pub fn ai_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<AiShot>, GameError> {
        self.ensure_in_progress()?;
        let shot = self.ai.take_shot(rng, &mut self.player_board)?;
        if let Some(shot) = shot {
            info!("ai fired at ({}): {:?}", shot.coord, shot.outcome);
            if self.player_board.all_sunk() {
                info!("ai sank the last player ship");
                self.winner = Some(Side::Ai);
            }
        }
        Ok(shot)
    }
}
