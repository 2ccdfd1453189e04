//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a plain
//! framebuffer by a pure [`GameView`], and [`TerminalRenderer`] flushes that
//! framebuffer to the terminal with crossterm, writing only what changed.
//! Board cells are two columns wide to roughly square them up.

pub mod fb;
pub mod game_view;
pub mod leaderboard_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardRect, GameView, Viewport, HELP_LINE};
pub use leaderboard_view::format_leaderboard;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
