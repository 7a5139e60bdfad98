//! Board module - manages the game grid
//!
//! The board is a 10x22 grid where each cell is empty or holds a piece color.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges 0..21
//! (bottom to top). Rows 20 and 21 are overflow and never rendered.

use arrayvec::ArrayVec;

use crate::types::{Cell, Coord, BOARD_HEIGHT, BOARD_WIDTH, VISIBLE_HEIGHT};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices cleared by one call to [`Board::clear_completed_lines`], bottom to top
pub type ClearedRows = ArrayVec<u8, { VISIBLE_HEIGHT as usize }>;

/// The game board - 10 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Check if position lies outside the 10x22 grid
    pub fn is_out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Cell at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the board. Callers bounds-check first.
    pub fn cell_at(&self, x: i8, y: i8) -> Cell {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx],
            None => panic!("cell ({x}, {y}) is outside the board"),
        }
    }

    /// Overwrite the cell at (x, y)
    /// Returns false if out of bounds
    pub fn set_cell(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True if (x, y) is occupied by something other than the given blocks.
    ///
    /// `excluding` is the falling piece's own coordinates, so a piece never
    /// collides with itself while probing a move.
    pub fn is_blocked(&self, x: i8, y: i8, excluding: &[Coord]) -> bool {
        self.is_occupied(x, y) && !excluding.contains(&(x, y))
    }

    /// Check if a visible row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= VISIBLE_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    fn clear_row(&mut self, y: usize) {
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize].fill(None);
    }

    /// Clear every complete visible row at once and compact the rows above.
    ///
    /// Each surviving row drops by the number of cleared rows beneath it, tracked
    /// as a running count while scanning bottom to top, so multi-line clears
    /// finish in a single pass. Overflow rows are left where they are.
    pub fn clear_completed_lines(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = BOARD_WIDTH as usize;

        for y in 0..VISIBLE_HEIGHT as usize {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared.push(y as u8);
                continue;
            }

            let shift = cleared.len();
            if shift > 0 {
                let src = y * width;
                let dst = (y - shift) * width;
                self.cells.copy_within(src..src + width, dst);
                self.clear_row(y);
            }
        }

        cleared
    }

    /// Number of occupied cells, overflow rows included
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Visible rows, bottom row first
    pub fn visible_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..VISIBLE_HEIGHT as usize).map(move |y| self.row(y))
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
