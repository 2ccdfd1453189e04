//! Command-line interface for the blockfall binary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand};

use crate::core::GameConfig;

/// Default ledger file, relative to the working directory
pub const DEFAULT_LEDGER: &str = "blockfall-scores.jsonl";

/// Default leaderboard length
pub const DEFAULT_LIMIT: usize = 50;

/// Blockfall - falling-block puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "blockfall")]
#[command(about = "Falling-block puzzle in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; plays a game when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The chosen command, falling back to `play` with its defaults
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Play(PlayArgs::parse_from(["play"])))
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play(PlayArgs),

    /// Print the best score of every player
    Leaderboard(LeaderboardArgs),
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct PlayArgs {
    /// Player name; results are only recorded when set
    #[arg(short, long, env = "BLOCKFALL_PLAYER")]
    pub player: Option<String>,

    /// Ledger file finished games are appended to
    #[arg(long, env = "BLOCKFALL_LEDGER", default_value = DEFAULT_LEDGER)]
    pub ledger: PathBuf,

    /// Seed for piece selection; random when omitted
    #[arg(long, env = "BLOCKFALL_SEED")]
    pub seed: Option<u32>,

    /// Board width in cells
    #[arg(long, env = "BLOCKFALL_COLS", default_value_t = 10)]
    pub cols: u16,

    /// Board height in cells
    #[arg(long, env = "BLOCKFALL_ROWS", default_value_t = 20)]
    pub rows: u16,

    /// Log file (the terminal belongs to the game while playing)
    #[arg(long, env = "BLOCKFALL_LOG", default_value = "blockfall.log")]
    pub log: PathBuf,
}

impl PlayArgs {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::with_board(self.cols, self.rows)
    }

    /// The given seed, or one taken from the clock
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardArgs {
    /// Ledger file to read
    #[arg(long, env = "BLOCKFALL_LEDGER", default_value = DEFAULT_LEDGER)]
    pub ledger: PathBuf,

    /// Number of players to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}
