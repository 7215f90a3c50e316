//! The canonical battlefield state: one `CellState` per (row, col) plus the
//! per-type placement budget counters.
//!
//! `Board` is a plain arena of cell values. It is cheap to clone, which the
//! scoring engine relies on: every candidate is evaluated against a trial
//! clone and the authoritative board is only replaced on commit.

use crate::location::*;
use serde::{Deserialize, Serialize};

/// Occupant of a single battlefield cell.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Tower,
    Wall,
}

/// Battlefield grid with budget counters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    rows: u8,
    cols: u8,
    cells: Vec<CellState>,
    towers_placed: u8,
    walls_placed: u8,
}

impl Board {
    /// Create an empty board of the given dimensions.
    pub fn new(rows: u8, cols: u8) -> Self {
        Board {
            rows,
            cols,
            cells: vec![CellState::Empty; rows as usize * cols as usize],
            towers_placed: 0,
            walls_placed: 0,
        }
    }

    #[inline]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    #[inline]
    fn index(&self, row: u8, col: u8) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    #[inline]
    pub fn get(&self, loc: Location) -> CellState {
        self.get_rc(loc.row(), loc.col())
    }

    #[inline]
    pub fn get_rc(&self, row: u8, col: u8) -> CellState {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub(crate) fn set(&mut self, loc: Location, state: CellState) {
        let index = self.index(loc.row(), loc.col());
        self.cells[index] = state;
    }

    /// Signed-coordinate bounds check, for neighbor expansion.
    #[inline]
    pub fn in_bounds(&self, row: i16, col: i16) -> bool {
        row >= 0 && col >= 0 && row < self.rows as i16 && col < self.cols as i16
    }

    #[inline]
    pub fn is_empty_cell(&self, loc: Location) -> bool {
        self.get(loc) == CellState::Empty
    }

    #[inline]
    pub fn towers_placed(&self) -> u8 {
        self.towers_placed
    }

    #[inline]
    pub fn walls_placed(&self) -> u8 {
        self.walls_placed
    }

    #[inline]
    pub(crate) fn bump_towers(&mut self) {
        self.towers_placed += 1;
    }

    #[inline]
    pub(crate) fn bump_walls(&mut self) {
        self.walls_placed += 1;
    }

    /// Iterate all cells as `((row, col), state)`, row-major.
    pub fn snapshot(&self) -> impl Iterator<Item = ((u8, u8), CellState)> + '_ {
        self.cells.iter().enumerate().map(|(i, state)| {
            let row = (i / self.cols as usize) as u8;
            let col = (i % self.cols as usize) as u8;
            ((row, col), *state)
        })
    }

    /// Count of cells in the given state.
    pub fn count_cells(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}
