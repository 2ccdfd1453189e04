//! Board module - manages the game grid
//!
//! The board is a `cols x rows` grid (10x20 by default) where each cell is
//! empty or holds the color of the piece that locked there.
//! Uses a flat row-major vector for cache locality; the size is fixed at
//! construction.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Rows above the board (y < 0) are open space: pieces may pass through them
//! but nothing is ever stored there.

use crate::config::{ConfigError, GameConfig};
use crate::piece::Piece;
use crate::types::{Cell, ColorTag, BOARD_HEIGHT, BOARD_WIDTH};

/// Result of writing a piece into the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    /// Every mino landed on the visible board.
    Placed,
    /// At least one mino was above the top row and was dropped.
    Overflow,
}

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Row-major cells (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 10x20 board
    pub fn new() -> Self {
        Self::sized(BOARD_WIDTH as u16, BOARD_HEIGHT as u16)
    }

    /// Create an empty board of the given size.
    ///
    /// Fails if the size could not hold every piece at the spawn origin.
    pub fn with_size(width: u16, height: u16) -> Result<Self, ConfigError> {
        GameConfig::with_board(width, height).validate()?;
        Ok(Self::sized(width, height))
    }

    /// Caller guarantees a validated size.
    pub(crate) fn sized(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a single mino may sit at (x, y).
    ///
    /// Columns must be on the board and rows must be above the floor. Rows
    /// above the top edge are always free.
    pub fn is_free(&self, x: i16, y: i16) -> bool {
        if x < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return false;
        }
        y < 0 || !self.is_occupied(x, y)
    }

    /// Whether every mino of `piece` is free
    pub fn valid(&self, piece: &Piece) -> bool {
        piece.blocks().iter().all(|&(x, y)| self.is_free(x, y))
    }

    /// Write `piece` into the board with `color`.
    ///
    /// Minos above the top row are not written and turn the result into
    /// [`LockOutcome::Overflow`]; the rest are still committed.
    pub fn lock(&mut self, piece: &Piece, color: ColorTag) -> LockOutcome {
        let mut outcome = LockOutcome::Placed;
        for (x, y) in piece.blocks() {
            if y < 0 {
                outcome = LockOutcome::Overflow;
                continue;
            }
            self.set(x, y, Some(color));
        }
        outcome
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove every full row at once and return how many were removed.
    ///
    /// Remaining rows keep their order and settle to the bottom; the same
    /// number of empty rows appear on top. Two-pointer compaction, no
    /// allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Cells of row `y`
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Count of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
