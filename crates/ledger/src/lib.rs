//! Persistent game history.
//!
//! Finished games are appended to a JSON-lines file, one record per line,
//! and never rewritten. The leaderboard is computed from the whole file on
//! each query.

mod error;
mod jsonl;
mod models;

pub use error::LedgerError;
pub use jsonl::JsonlLedger;
pub use models::StoredGame;
