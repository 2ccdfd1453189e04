//! On-disk record format.

use blockfall_core::GameRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the ledger file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredGame {
    /// Sequential id, starting at 1
    pub id: u64,
    pub name: String,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub played_at: DateTime<Utc>,
}

impl StoredGame {
    pub fn new(id: u64, record: &GameRecord) -> Self {
        Self {
            id,
            name: record.name.clone(),
            score: record.score,
            lines: record.lines,
            level: record.level,
            played_at: record.played_at,
        }
    }

    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            name: self.name.clone(),
            score: self.score,
            lines: self.lines,
            level: self.level,
            played_at: self.played_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_with_rfc3339_timestamp() {
        let game = StoredGame {
            id: 7,
            name: "ada".to_string(),
            score: 1200,
            lines: 12,
            level: 2,
            played_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(
            json,
            r#"{"id":7,"name":"ada","score":1200,"lines":12,"level":2,"played_at":"2024-05-01T12:00:00Z"}"#
        );
        assert_eq!(serde_json::from_str::<StoredGame>(&json).unwrap(), game);
    }
}
