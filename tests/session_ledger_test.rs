//! Sessions recording into the on-disk ledger

use blockfall::core::{
    GameConfig, GameRecorder, GameState, Leaderboard, ScriptedSource, Session,
};
use blockfall::ledger::JsonlLedger;
use blockfall::types::{GameAction, PieceKind};
use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
}

/// Stacks O pieces on a 7x4 board; ends after two hard drops
fn short_game() -> GameState {
    GameState::with_config(
        GameConfig::with_board(7, 4),
        Box::new(ScriptedSource::new([PieceKind::O])),
    )
    .unwrap()
}

fn finish<R: GameRecorder>(session: &mut Session<R>) {
    while !session.game().game_over() {
        session.apply_action(GameAction::HardDrop);
    }
}

#[test]
fn finished_game_is_written_once() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("scores.jsonl");
    let ledger = JsonlLedger::open(&path).unwrap();

    let mut session = Session::new(short_game(), ledger)
        .with_player("ada")
        .with_clock(fixed_clock);
    finish(&mut session);
    session.tick();
    session.apply_action(GameAction::Rotate);

    let games = session.recorder().games().unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, 1);
    assert_eq!(games[0].name, "ada");
    assert_eq!(games[0].score, 4);
    assert_eq!(games[0].lines, 0);
    assert_eq!(games[0].level, 1);
    assert_eq!(games[0].played_at, fixed_clock());
}

#[test]
fn anonymous_games_are_not_written() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("scores.jsonl");

    let mut session = Session::new(short_game(), JsonlLedger::open(&path).unwrap());
    finish(&mut session);

    assert!(session.recorder().games().unwrap().is_empty());
    assert!(!path.exists());
}

#[test]
fn leaderboard_survives_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("scores.jsonl");

    let mut session =
        Session::new(short_game(), JsonlLedger::open(&path).unwrap()).with_player("ada");
    finish(&mut session);
    session.apply_action(GameAction::Restart);
    session.apply_action(GameAction::SoftDrop);
    finish(&mut session);

    session.set_player(Some("bob".to_string()));
    session.apply_action(GameAction::Restart);
    finish(&mut session);
    drop(session);

    let ledger = JsonlLedger::open(&path).unwrap();
    let top = ledger.top_scores(50).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "ada");
    assert_eq!(top[0].max_score, 4);
    assert_eq!(top[1].max_score, 4);
    assert_eq!(top[0].play_count, 2);
    assert_eq!(top[1].name, "bob");
    assert_eq!(top[1].play_count, 1);
}

#[test]
fn player_changed_during_a_paused_game_owns_the_result() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("scores.jsonl");

    let mut session = Session::new(short_game(), JsonlLedger::open(&path).unwrap());
    session.apply_action(GameAction::HardDrop);

    assert!(session.apply_action(GameAction::Pause));
    session.set_player(Some("  grace ".to_string()));
    assert!(session.apply_action(GameAction::Pause));
    finish(&mut session);

    let games = session.recorder().games().unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "grace");
    assert_eq!(games[0].score, 4);
}
