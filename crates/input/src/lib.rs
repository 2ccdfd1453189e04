//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Holding a
//! key relies on the terminal's own key repeat; there is no separate
//! auto-shift timing here. [`prompt::NamePrompt`] edits the player name.

pub mod map;
pub mod prompt;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_change_player, should_quit};
pub use prompt::{NamePrompt, PromptOutcome, MAX_NAME_LEN};
