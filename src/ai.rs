// Uniform random targeting for the computer opponent.

use alloc::collections::BTreeSet;

use log::debug;
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, Coord, ShotOutcome},
};

/// A shot fired by the AI and what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiShot {
    pub coord: Coord,
    pub outcome: ShotOutcome,
}

/// Computer opponent that fires at uniformly random cells it has not tried
/// before.
#[derive(Debug, Clone, Default)]
pub struct AiGunner {
    guesses: BTreeSet<Coord>,
}

impl AiGunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinates already fired at.
    pub fn guesses(&self) -> &BTreeSet<Coord> {
        &self.guesses
    }

    /// Number of shots taken so far.
    pub fn shots_taken(&self) -> usize {
        self.guesses.len()
    }

    /// Returns `true` once every cell of a `size × size` grid was tried.
    pub fn is_exhausted(&self, size: usize) -> bool {
        self.guesses.len() >= size * size
    }

    /// Pick a fresh random cell and remember it.
    ///
    /// Draws uniformly from the whole grid and redraws on cells already
    /// tried. Returns `None` without drawing when nothing is left.
    pub fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, size: usize) -> Option<Coord> {
        if self.is_exhausted(size) {
            debug!("ai has no untried cells left");
            return None;
        }
        loop {
            let coord = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
            if self.guesses.insert(coord) {
                return Some(coord);
            }
        }
    }

    /// Select a target and resolve it against `target`. `Ok(None)` means the
    /// AI declined to move.
    pub fn take_shot<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        target: &mut Board,
    ) -> Result<Option<AiShot>, BoardError> {
        let Some(coord) = self.select_target(rng, target.size()) else {
            return Ok(None);
        };
        let outcome = target.resolve_shot(coord)?;
        debug!("ai fired at ({}, {}): {:?}", coord.row, coord.col, outcome);
        Ok(Some(AiShot { coord, outcome }))
    }
}
