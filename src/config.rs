//! Game configuration: grid and fleet size, screen layout and turn pacing.

use core::fmt;
use core::time::Duration;

use crate::input::BoardGeometry;

pub const DEFAULT_GRID_SIZE: usize = 5;
pub const DEFAULT_SHIP_COUNT: usize = 3;
pub const DEFAULT_CELL_SIZE: u32 = 60;
pub const DEFAULT_BOARD_OFFSET_X: u32 = 50;
pub const DEFAULT_BOARD_OFFSET_Y: u32 = 50;
pub const DEFAULT_BOARD_GAP: u32 = 100;
pub const DEFAULT_AI_THINK_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_AI_RESULT_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Largest grid side: columns are labelled with the single letters A-Z.
pub const MAX_GRID_SIZE: usize = 26;

/// Extra room below the boards for the status lines.
const MESSAGE_AREA_HEIGHT: u32 = 50;

/// Immutable settings for one session. Built once at startup and handed to
/// the game and the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of each square board.
    pub grid_size: usize,
    /// Ship cells placed per side.
    pub ship_count: usize,
    /// Pixel size of one cell.
    pub cell_size: u32,
    /// Pixel offset of the player's board.
    pub board_offset_x: u32,
    pub board_offset_y: u32,
    /// Horizontal pixel gap between the two boards.
    pub board_gap: u32,
    /// Pause after the player's shot before the AI fires.
    pub ai_think_delay: Duration,
    /// How long the AI's result stays up before control returns.
    pub ai_result_delay: Duration,
    /// Frame cap of the render loop.
    pub frame_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            ship_count: DEFAULT_SHIP_COUNT,
            cell_size: DEFAULT_CELL_SIZE,
            board_offset_x: DEFAULT_BOARD_OFFSET_X,
            board_offset_y: DEFAULT_BOARD_OFFSET_Y,
            board_gap: DEFAULT_BOARD_GAP,
            ai_think_delay: DEFAULT_AI_THINK_DELAY,
            ai_result_delay: DEFAULT_AI_RESULT_DELAY,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

/// Errors returned by [`GameConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid side length is zero.
    EmptyGrid,
    /// Grid has more columns than there are column letters.
    GridTooLarge { grid_size: usize, max: usize },
    /// No ships requested; the game would be over before it starts.
    NoShips,
    /// Ship count exceeds the number of cells.
    TooManyShips { ship_count: usize, cells: usize },
    /// Cell size is zero.
    ZeroCellSize,
    /// Frame rate is zero.
    ZeroFrameRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid => write!(f, "grid size must be at least 1"),
            ConfigError::GridTooLarge { grid_size, max } => {
                write!(f, "grid size {} exceeds the maximum of {}", grid_size, max)
            }
            ConfigError::NoShips => write!(f, "ship count must be at least 1"),
            ConfigError::TooManyShips { ship_count, cells } => write!(
                f,
                "ship count {} does not fit on a board of {} cells",
                ship_count, cells
            ),
            ConfigError::ZeroCellSize => write!(f, "cell size must be at least 1 pixel"),
            ConfigError::ZeroFrameRate => write!(f, "frame rate must be at least 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Default configuration with a different grid and fleet size.
    pub fn with_grid(grid_size: usize, ship_count: usize) -> Self {
        Self {
            grid_size,
            ship_count,
            ..Self::default()
        }
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                grid_size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.ship_count == 0 {
            return Err(ConfigError::NoShips);
        }
        let cells = self.cells();
        if self.ship_count > cells {
            return Err(ConfigError::TooManyShips {
                ship_count: self.ship_count,
                cells,
            });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    /// Total number of cells on one board.
    pub fn cells(&self) -> usize {
        self.grid_size.saturating_mul(self.grid_size)
    }

    /// Pixel width of a single board.
    fn board_span(&self) -> u32 {
        self.cell_size * self.grid_size as u32
    }

    /// Window size in pixels as `(width, height)`.
    pub fn screen_size(&self) -> (u32, u32) {
        let width = self.board_offset_x * 2 + self.board_span() * 2 + self.board_gap;
        let height = self.board_offset_y * 2 + self.board_span() + MESSAGE_AREA_HEIGHT;
        (width, height)
    }

    /// Where the player's own board is drawn.
    pub fn own_board_geometry(&self) -> BoardGeometry {
        BoardGeometry::new(
            self.board_offset_x as f32,
            self.board_offset_y as f32,
            self.cell_size as f32,
            self.grid_size,
        )
    }

    /// Where the enemy radar (the player's guess board) is drawn. This is
    /// the board the player clicks on.
    pub fn enemy_board_geometry(&self) -> BoardGeometry {
        BoardGeometry::new(
            (self.board_offset_x + self.board_span() + self.board_gap) as f32,
            self.board_offset_y as f32,
            self.cell_size as f32,
            self.grid_size,
        )
    }

    /// Target duration of one frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}
