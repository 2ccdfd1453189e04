//! Append-only JSON-lines ledger.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use blockfall_core::{rank_players, GameRecord, GameRecorder, Leaderboard, LeaderboardEntry};
use tracing::{debug, info, instrument, warn};

use crate::error::LedgerError;
use crate::models::StoredGame;

/// Game history stored as one JSON object per line
#[derive(Debug)]
pub struct JsonlLedger {
    path: PathBuf,
    next_id: u64,
}

impl JsonlLedger {
    /// Open the ledger at `path`, creating its directory if needed.
    ///
    /// A missing file is an empty ledger; it is created on first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LedgerError::io(parent, e))?;
        }

        let games = read_games(&path)?;
        let next_id = games.iter().map(|g| g.id).max().map_or(1, |id| id + 1);
        info!(path = %path.display(), games = games.len(), "ledger opened");

        Ok(Self { path, next_id })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored game, oldest first
    pub fn games(&self) -> Result<Vec<StoredGame>, LedgerError> {
        read_games(&self.path)
    }

    fn append(&mut self, game: &StoredGame) -> Result<(), LedgerError> {
        let mut line = serde_json::to_vec(game)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LedgerError::io(&self.path, e))?;
        file.write_all(&line)
            .map_err(|e| LedgerError::io(&self.path, e))?;
        Ok(())
    }
}

impl GameRecorder for JsonlLedger {
    type Error = LedgerError;

    #[instrument(skip(self, record), fields(player = %record.name, score = record.score))]
    fn record_game(&mut self, record: &GameRecord) -> Result<(), LedgerError> {
        let game = StoredGame::new(self.next_id, record);
        self.append(&game)?;
        self.next_id += 1;
        debug!(id = game.id, "game appended");
        Ok(())
    }
}

impl Leaderboard for JsonlLedger {
    type Error = LedgerError;

    #[instrument(skip(self))]
    fn top_scores(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, LedgerError> {
        let records: Vec<GameRecord> = self.games()?.iter().map(StoredGame::to_record).collect();
        Ok(rank_players(&records, limit))
    }
}

/// Read every well-formed line. Lines that fail to parse (a torn final
/// write, hand edits) are skipped with a warning.
fn read_games(path: &Path) -> Result<Vec<StoredGame>, LedgerError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(LedgerError::io(path, e)),
    };

    let mut games = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| LedgerError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<StoredGame>(&line) {
            Ok(game) => games.push(game),
            Err(err) => warn!(line = idx + 1, error = %err, "skipping malformed ledger line"),
        }
    }
    Ok(games)
}
