//! Square game board: cell grid plus the roster of unsunk ship cells.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::common::{BoardError, Cell, Coord, ShotOutcome};

/// Remaining (unsunk) ship cells of one side.
pub type Roster = BTreeSet<Coord>;

/// An `N×N` grid of [`Cell`]s. Used both as a side's own board (ships plus
/// the opponent's shots) and as a guess board (own shots only).
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    roster: Roster,
}

impl Board {
    /// Create an all-empty board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
            roster: Roster::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ship cells that have not been hit yet.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn ships_remaining(&self) -> usize {
        self.roster.len()
    }

    /// Returns `true` when every ship cell has been hit.
    pub fn all_sunk(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    fn index(&self, coord: Coord) -> Result<usize, BoardError> {
        if self.contains(coord) {
            Ok(coord.row * self.size + coord.col)
        } else {
            Err(BoardError::OutOfBounds {
                coord,
                size: self.size,
            })
        }
    }

    /// State of the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Returns `true` if a shot already landed at `coord`. Out-of-range
    /// coordinates count as unresolved.
    pub fn is_resolved(&self, coord: Coord) -> bool {
        self.cell(coord).map(Cell::is_resolved).unwrap_or(false)
    }

    /// Number of cells currently in state `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Claim `count` distinct random empty cells as ships.
    ///
    /// Cells are drawn uniformly from the whole grid; draws that land on an
    /// occupied cell are retried. Fails up front when fewer than `count`
    /// empty cells exist, so sampling always terminates.
    pub fn place_ships_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
    ) -> Result<(), BoardError> {
        let available = self.count(Cell::Empty);
        if count > available {
            return Err(BoardError::TooManyShips {
                requested: count,
                available,
            });
        }
        let mut placed = 0;
        while placed < count {
            let coord = Coord::new(
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            let idx = self.index(coord)?;
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = Cell::Ship;
                self.roster.insert(coord);
                placed += 1;
            }
        }
        debug!("placed {} ships on {}x{} board", count, self.size, self.size);
        Ok(())
    }

    /// Put a single ship at `coord`. Only valid on an empty cell.
    pub fn place_ship(&mut self, coord: Coord) -> Result<(), BoardError> {
        let idx = self.index(coord)?;
        match self.cells[idx] {
            Cell::Empty => {
                self.cells[idx] = Cell::Ship;
                self.roster.insert(coord);
                Ok(())
            }
            Cell::Ship => Err(BoardError::Occupied(coord)),
            Cell::Hit | Cell::Miss => Err(BoardError::AlreadyResolved(coord)),
        }
    }

    /// Apply a shot at `coord`.
    ///
    /// A ship cell becomes [`Cell::Hit`] and leaves the roster; an empty
    /// cell becomes [`Cell::Miss`]. Shooting a cell twice is rejected and
    /// leaves the board untouched.
    pub fn resolve_shot(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        let idx = self.index(coord)?;
        match self.cells[idx] {
            Cell::Ship => {
                self.cells[idx] = Cell::Hit;
                self.roster.remove(&coord);
                Ok(ShotOutcome::Hit)
            }
            Cell::Empty => {
                self.cells[idx] = Cell::Miss;
                Ok(ShotOutcome::Miss)
            }
            Cell::Hit | Cell::Miss => Err(BoardError::AlreadyResolved(coord)),
        }
    }

    /// Record the outcome of our own shot on a guess board.
    pub fn record(&mut self, coord: Coord, outcome: ShotOutcome) -> Result<(), BoardError> {
        let idx = self.index(coord)?;
        if self.cells[idx].is_resolved() {
            return Err(BoardError::AlreadyResolved(coord));
        }
        self.cells[idx] = outcome.cell();
        Ok(())
    }
}

/// Compact text dump: `.` empty, `S` ship, `X` hit, `o` miss.
impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} ({} ships left)", self.size, self.size, self.roster.len())?;
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Ship => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
