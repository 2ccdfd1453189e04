//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game: the grid, the seven pieces and
//! their rotation states, movement and kicks, locking, line clears, scoring,
//! levels, and the game-over condition. It does no I/O and keeps no clocks;
//! a host drives it by calling [`GameState::tick`] at [`GameState::delay_ms`]
//! intervals and forwarding player commands.
//!
//! # Module Structure
//!
//! - [`shapes`]: rotation state table for every piece kind
//! - [`piece`]: the falling piece as an immutable value
//! - [`board`]: grid storage, validity checks, locking, and row clearing
//! - [`rotation`]: rotation with horizontal kicks
//! - [`ghost`]: landing projection
//! - [`scoring`]: points, levels, and gravity delay
//! - [`rng`]: seeded piece selection behind the [`PieceSource`] trait
//! - [`config`]: board size and timing rules, validated up front
//! - [`game_state`]: the controller that ties it all together
//! - [`snapshot`]: owned render state for frontends
//! - [`session`]: player identity and game-result recording
//!
//! # Game Rules
//!
//! - **Random pieces**: every kind is drawn uniformly and independently
//! - **Rotation**: one direction only, trying horizontal kicks 0, -1, +1, -2, +2
//! - **Locking**: a piece locks as soon as a downward step is blocked
//! - **Scoring**: 100/300/500/800 times level for 1-4 rows, +1 per soft
//!   drop, +2 per hard-dropped row
//! - **Levels**: one level per 10 lines; gravity starts at 500ms and speeds
//!   up by 40ms per level down to 80ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Hard drop awards points
//! assert!(game.score() > 0);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod ghost;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, LockOutcome};
pub use config::{ConfigError, GameConfig, MAX_BOARD_DIM};
pub use game_state::{GameOverEvent, GameState, Phase};
pub use piece::Piece;
pub use rng::{PieceSource, ScriptedSource, SimpleRng, UniformSource};
pub use rotation::try_rotate;
pub use session::{
    rank_players, GameRecord, GameRecorder, Leaderboard, LeaderboardEntry, MemoryLedger, Session,
};
pub use snapshot::{GameSnapshot, PieceView};
