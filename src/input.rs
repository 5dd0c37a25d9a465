//! Pointer-to-cell mapping for boards drawn on screen.

use crate::common::Coord;

/// Screen placement of one board: top-left corner, cell size and grid side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    pub size: usize,
}

/// Pixel rectangle of a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoardGeometry {
    pub fn new(origin_x: f32, origin_y: f32, cell_size: f32, size: usize) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_size,
            size,
        }
    }

    /// Pixel length of one side of the board.
    pub fn span(&self) -> f32 {
        self.cell_size * self.size as f32
    }

    /// Map a pointer position to the cell under it. Positions on the left or
    /// top edge belong to the board, positions on the right or bottom edge
    /// do not. Returns `None` outside the board.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Coord> {
        if !(x.is_finite() && y.is_finite()) || self.cell_size <= 0.0 {
            return None;
        }
        let span = self.span();
        let inside_x = self.origin_x <= x && x < self.origin_x + span;
        let inside_y = self.origin_y <= y && y < self.origin_y + span;
        if !(inside_x && inside_y) {
            return None;
        }
        let col = ((x - self.origin_x) / self.cell_size) as usize;
        let row = ((y - self.origin_y) / self.cell_size) as usize;
        // float rounding right at the far edge
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(Coord::new(row, col))
    }

    /// Pixel rectangle covered by `coord`.
    pub fn cell_rect(&self, coord: Coord) -> CellRect {
        CellRect {
            x: self.origin_x + coord.col as f32 * self.cell_size,
            y: self.origin_y + coord.row as f32 * self.cell_size,
            width: self.cell_size,
            height: self.cell_size,
        }
    }
}
