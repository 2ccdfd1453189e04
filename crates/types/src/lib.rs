//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, making them usable
//! by the engine, the terminal frontend, and the score ledger alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn origin**: (3, 0)
//!
//! Both dimensions can be overridden through the engine's `GameConfig`; the
//! constants here are only the defaults.
//!
//! # Gravity
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_DELAY_MS` | 500 | Gravity delay at level 1 |
//! | `LEVEL_STEP_MS` | 40 | Delay reduction per level |
//! | `MIN_DELAY_MS` | 80 | Gravity delay floor |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines per level-up |
//! | `TICK_MS` | 16 | Frontend polling interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, KICK_OFFSETS};
//!
//! assert_eq!(PieceKind::T.color().to_string(), "#ba6bff");
//! assert_eq!(PieceKind::T.color().rgb(), (0xba, 0x6b, 0xff));
//! assert_eq!(KICK_OFFSETS, [0, -1, 1, -2, 2]);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn origin for new pieces (column, row)
pub const SPAWN_POSITION: (i16, i16) = (3, 0);

/// Frontend polling interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity delay at level 1
pub const START_DELAY_MS: u32 = 500;

/// Gravity delay reduction per level gained
pub const LEVEL_STEP_MS: u32 = 40;

/// Gravity delay never drops below this
pub const MIN_DELAY_MS: u32 = 80;

/// Cumulative cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear base points, indexed by rows cleared (multiplied by level)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per soft drop invocation
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row travelled by a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Horizontal kick offsets tried after a rotation, in priority order
pub const KICK_OFFSETS: [i16; 5] = [0, -1, 1, -2, 2];

/// A display color attached to a piece kind and to every locked board cell.
///
/// Stored as packed `0xRRGGBB`; formats as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorTag(pub u32);

impl ColorTag {
    /// Outline color used for the ghost projection.
    pub const GHOST: ColorTag = ColorTag(0x444455);

    pub const fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// The seven tetromino piece kinds
///
/// Each kind has a distinct color:
/// - **I**: sky blue bar
/// - **J**: blue
/// - **L**: orange
/// - **O**: yellow square
/// - **S**: green
/// - **T**: violet
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in table order. Random selection indexes into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Color tag written into the board when a piece of this kind locks.
    pub const fn color(self) -> ColorTag {
        match self {
            PieceKind::I => ColorTag(0x53d1f5),
            PieceKind::J => ColorTag(0x5a79ff),
            PieceKind::L => ColorTag(0xff9f40),
            PieceKind::O => ColorTag(0xffd93b),
            PieceKind::S => ColorTag(0x7dd36a),
            PieceKind::T => ColorTag(0xba6bff),
            PieceKind::Z => ColorTag(0xff6b6b),
        }
    }
}

/// Input commands accepted by the engine
///
/// Each maps 1:1 to a game controller operation. Gravity ticks are not an
/// action; the host scheduler calls `tick()` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (locks when blocked, +1 point)
    SoftDrop,
    /// Drop piece to its resting row and lock (+2 points per row)
    HardDrop,
    /// Rotate to the next rotation state, kicking sideways if needed
    Rotate,
    /// Toggle pause (ignored after game over)
    Pause,
    /// Start a fresh game
    Restart,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ColorTag)`: Locked cell, colored by the piece that filled it
pub type Cell = Option<ColorTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_defaults() {
        assert_eq!(START_DELAY_MS, 500);
        assert_eq!(LEVEL_STEP_MS, 40);
        assert_eq!(MIN_DELAY_MS, 80);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
    }

    #[test]
    fn color_tag_formats_as_hex() {
        assert_eq!(PieceKind::I.color().to_string(), "#53d1f5");
        assert_eq!(ColorTag::GHOST.to_string(), "#444455");
        assert_eq!(ColorTag(0x0000ff).to_string(), "#0000ff");
    }

    #[test]
    fn color_tag_rgb_components() {
        assert_eq!(PieceKind::L.color().rgb(), (0xff, 0x9f, 0x40));
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{:?} and {:?} share a color", a, b);
            }
            assert_ne!(a.color(), ColorTag::GHOST);
        }
    }
}
