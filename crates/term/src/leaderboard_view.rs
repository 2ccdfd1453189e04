//! Plain-text leaderboard table.

use std::fmt::Write;

use crate::core::LeaderboardEntry;

/// Longest name shown before truncation
const NAME_WIDTH: usize = 20;

/// Format ranked entries as an aligned table with a header row.
pub fn format_leaderboard(entries: &[LeaderboardEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<w$}  {:>10}  {:>5}",
        "RANK",
        "NAME",
        "BEST",
        "PLAYS",
        w = NAME_WIDTH
    );

    if entries.is_empty() {
        out.push_str("  no games recorded yet\n");
        return out;
    }

    for (i, entry) in entries.iter().enumerate() {
        let name: String = entry.name.chars().take(NAME_WIDTH).collect();
        let _ = writeln!(
            out,
            "{:>4}  {:<w$}  {:>10}  {:>5}",
            i + 1,
            name,
            entry.max_score,
            entry.play_count,
            w = NAME_WIDTH
        );
    }
    out
}
