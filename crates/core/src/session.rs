//! Session - a game plus the player playing it and where results go.
//!
//! The controller knows nothing about players or storage. The session wraps
//! it, forwards every command, and after each one drains the game-over event
//! into the recorder. A result is recorded at most once per game, and only
//! while a player name is set. Recorder failures are logged and dropped; the
//! game carries on either way.

use std::collections::HashMap;
use std::convert::Infallible;
use std::error::Error;

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use crate::game_state::{GameOverEvent, GameState};
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

/// One finished game as handed to a recorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub name: String,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub played_at: DateTime<Utc>,
}

impl GameRecord {
    pub fn from_event(name: &str, event: GameOverEvent, played_at: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            score: event.score,
            lines: event.lines,
            level: event.level,
            played_at,
        }
    }
}

/// One leaderboard row: a player's best score and how often they played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub max_score: u32,
    pub play_count: u32,
}

/// Sink for finished games
pub trait GameRecorder {
    type Error: Error + Send + Sync + 'static;

    fn record_game(&mut self, record: &GameRecord) -> Result<(), Self::Error>;
}

/// Read side of the game history
pub trait Leaderboard {
    type Error: Error + Send + Sync + 'static;

    /// Players ranked by best score, highest first, at most `limit` rows
    fn top_scores(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, Self::Error>;
}

/// Group records by player name and rank them by best score.
///
/// Ties on score are broken by name so the order is stable.
pub fn rank_players<'a, I>(records: I, limit: usize) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = &'a GameRecord>,
{
    let mut by_name: HashMap<&str, LeaderboardEntry> = HashMap::new();
    for record in records {
        let entry = by_name
            .entry(record.name.as_str())
            .or_insert_with(|| LeaderboardEntry {
                name: record.name.clone(),
                max_score: 0,
                play_count: 0,
            });
        entry.max_score = entry.max_score.max(record.score);
        entry.play_count += 1;
    }

    let mut ranked: Vec<_> = by_name.into_values().collect();
    ranked.sort_by(|a, b| b.max_score.cmp(&a.max_score).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(limit);
    ranked
}

/// In-memory history, for tests and for playing without a ledger file
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    records: Vec<GameRecord>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }
}

impl GameRecorder for MemoryLedger {
    type Error = Infallible;

    fn record_game(&mut self, record: &GameRecord) -> Result<(), Infallible> {
        self.records.push(record.clone());
        Ok(())
    }
}

impl Leaderboard for MemoryLedger {
    type Error = Infallible;

    fn top_scores(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, Infallible> {
        Ok(rank_players(&self.records, limit))
    }
}

/// A running game bound to an optional player and a recorder
#[derive(Debug)]
pub struct Session<R> {
    game: GameState,
    player: Option<String>,
    recorder: R,
    clock: fn() -> DateTime<Utc>,
    games_recorded: u32,
}

impl<R: GameRecorder> Session<R> {
    pub fn new(game: GameState, recorder: R) -> Self {
        Self {
            game,
            player: None,
            recorder,
            clock: Utc::now,
            games_recorded: 0,
        }
    }

    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.set_player(Some(name.into()));
        self
    }

    /// Replace the time source used for `played_at`
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Change who is playing. Blank names clear the player, which stops
    /// results from being recorded.
    #[instrument(skip(self))]
    pub fn set_player(&mut self, name: Option<String>) {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        info!(player = ?name, "player changed");
        self.player = name;
    }

    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    /// Results handed to the recorder successfully in this session
    pub fn games_recorded(&self) -> u32 {
        self.games_recorded
    }

    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let applied = self.game.apply_action(action);
        self.settle();
        applied
    }

    pub fn tick(&mut self) -> bool {
        let applied = self.game.tick();
        self.settle();
        applied
    }

    /// Record the game that just ended, if any
    fn settle(&mut self) {
        let Some(event) = self.game.take_game_over() else {
            return;
        };

        let Some(name) = self.player.as_deref() else {
            debug!(score = event.score, "no player set, result not recorded");
            return;
        };

        let record = GameRecord::from_event(name, event, (self.clock)());
        match self.recorder.record_game(&record) {
            Ok(()) => {
                self.games_recorded += 1;
                info!(player = %record.name, score = record.score, "game recorded");
            }
            Err(err) => {
                warn!(player = %record.name, score = record.score, error = %err, "failed to record game");
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
        out.player.clone_from(&self.player);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
