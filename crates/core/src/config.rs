//! Game configuration and its validation
//!
//! Configuration is checked once, when a game is built. Nothing in the
//! gameplay path can fail because of a bad setting.

use derive_more::{Display, Error};
use tracing::debug;

use crate::shapes::rotation_states;
use crate::types::{
    PieceKind, BOARD_HEIGHT, BOARD_WIDTH, LEVEL_STEP_MS, LINES_PER_LEVEL, MIN_DELAY_MS,
    SPAWN_POSITION, START_DELAY_MS,
};

/// Rejected configuration value
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Board has zero columns or rows.
    #[display("board dimensions must be positive, got {cols}x{rows}")]
    EmptyBoard { cols: u16, rows: u16 },

    /// Some piece would not fit the board at the spawn origin.
    #[display("board {cols}x{rows} cannot hold every piece at the spawn origin (needs at least {min_cols}x{min_rows})")]
    BoardTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },

    /// Board is wider or taller than [`MAX_BOARD_DIM`].
    #[display("board {cols}x{rows} exceeds the {max}x{max} limit")]
    BoardTooLarge { cols: u16, rows: u16, max: u16 },

    /// `lines_per_level` is zero.
    #[display("lines per level must be positive")]
    ZeroLinesPerLevel,

    /// Gravity floor is zero or above the starting delay.
    #[display("gravity floor {min_delay_ms}ms must be in 1..={start_delay_ms}ms")]
    InvalidDelayFloor {
        min_delay_ms: u32,
        start_delay_ms: u32,
    },
}

/// Largest accepted board side. Board coordinates are `i16`.
pub const MAX_BOARD_DIM: u16 = 255;

/// Tunable game parameters. Defaults reproduce the classic 10x20 rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: u16,
    pub rows: u16,
    /// Gravity delay at level 1
    pub start_delay_ms: u32,
    /// Gravity delay floor
    pub min_delay_ms: u32,
    /// Delay reduction per level above 1
    pub level_step_ms: u32,
    pub lines_per_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: BOARD_WIDTH as u16,
            rows: BOARD_HEIGHT as u16,
            start_delay_ms: START_DELAY_MS,
            min_delay_ms: MIN_DELAY_MS,
            level_step_ms: LEVEL_STEP_MS,
            lines_per_level: LINES_PER_LEVEL,
        }
    }
}

impl GameConfig {
    /// Default rules on a board of the given size
    pub fn with_board(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            ..Self::default()
        }
    }

    /// Smallest board on which every rotation state of every kind fits at
    /// the spawn origin.
    pub fn min_board() -> (u16, u16) {
        let mut max_x = 0;
        let mut max_y = 0;
        for kind in PieceKind::ALL {
            for shape in rotation_states(kind) {
                for &(dx, dy) in shape {
                    max_x = max_x.max(SPAWN_POSITION.0 + dx);
                    max_y = max_y.max(SPAWN_POSITION.1 + dy);
                }
            }
        }
        ((max_x + 1) as u16, (max_y + 1) as u16)
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyBoard {
                cols: self.cols,
                rows: self.rows,
            });
        }

        let (min_cols, min_rows) = Self::min_board();
        if self.cols < min_cols || self.rows < min_rows {
            return Err(ConfigError::BoardTooSmall {
                cols: self.cols,
                rows: self.rows,
                min_cols,
                min_rows,
            });
        }

        if self.cols > MAX_BOARD_DIM || self.rows > MAX_BOARD_DIM {
            return Err(ConfigError::BoardTooLarge {
                cols: self.cols,
                rows: self.rows,
                max: MAX_BOARD_DIM,
            });
        }

        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }

        if self.min_delay_ms == 0 || self.min_delay_ms > self.start_delay_ms {
            return Err(ConfigError::InvalidDelayFloor {
                min_delay_ms: self.min_delay_ms,
                start_delay_ms: self.start_delay_ms,
            });
        }

        debug!(cols = self.cols, rows = self.rows, "game config accepted");
        Ok(())
    }
}
