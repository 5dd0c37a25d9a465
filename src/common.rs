//! Common types for the game: cell states, coordinates, shot outcomes and
//! board errors.

use core::fmt;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Open water, never shot at.
    #[default]
    Empty,
    /// Unhit ship segment.
    Ship,
    /// Ship segment that has been hit.
    Hit,
    /// Water that has been shot at.
    Miss,
}

impl Cell {
    /// Returns `true` once a shot has landed on this cell.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Zero-based `(row, col)` board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// One-based `row, col`, the form shown to players.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.row + 1, self.col + 1)
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed on a ship segment.
    Hit,
    /// Shot landed in open water.
    Miss,
}

impl ShotOutcome {
    /// Cell state a board takes after this outcome.
    pub fn cell(self) -> Cell {
        match self {
            ShotOutcome::Hit => Cell::Hit,
            ShotOutcome::Miss => Cell::Miss,
        }
    }
}

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the `size × size` grid.
    OutOfBounds { coord: Coord, size: usize },
    /// The cell has already been shot at.
    AlreadyResolved(Coord),
    /// A ship already sits on the cell.
    Occupied(Coord),
    /// More ships were requested than there are empty cells.
    TooManyShips { requested: usize, available: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { coord, size } => write!(
                f,
                "coordinate ({}, {}) is outside the {}x{} board",
                coord.row, coord.col, size, size
            ),
            BoardError::AlreadyResolved(coord) => {
                write!(f, "cell ({}, {}) was already shot at", coord.row, coord.col)
            }
            BoardError::Occupied(coord) => {
                write!(f, "cell ({}, {}) already holds a ship", coord.row, coord.col)
            }
            BoardError::TooManyShips {
                requested,
                available,
            } => write!(
                f,
                "cannot place {} ships with only {} empty cells",
                requested, available
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
