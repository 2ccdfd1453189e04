use std::path::PathBuf;

use blockfall::cli::{Cli, Command, DEFAULT_LEDGER, DEFAULT_LIMIT};
use clap::Parser;

#[test]
fn play_flags_parse() {
    let cli = Cli::try_parse_from([
        "blockfall", "play", "--player", "ada", "--seed", "42", "--cols", "12", "--rows", "24",
    ])
    .unwrap();

    let Command::Play(args) = cli.into_command() else {
        panic!("expected play");
    };
    assert_eq!(args.player.as_deref(), Some("ada"));
    assert_eq!(args.seed, Some(42));
    assert_eq!(args.seed_or_clock(), 42);
    let config = args.game_config();
    assert_eq!((config.cols, config.rows), (12, 24));
    assert!(config.validate().is_ok());
}

#[test]
fn leaderboard_flags_parse() {
    let cli =
        Cli::try_parse_from(["blockfall", "leaderboard", "--ledger", "x.jsonl", "-n", "5"]).unwrap();

    let Command::Leaderboard(args) = cli.into_command() else {
        panic!("expected leaderboard");
    };
    assert_eq!(args.ledger, PathBuf::from("x.jsonl"));
    assert_eq!(args.limit, 5);
}

#[test]
fn leaderboard_defaults() {
    let cli = Cli::try_parse_from(["blockfall", "leaderboard"]).unwrap();
    let Command::Leaderboard(args) = cli.into_command() else {
        panic!("expected leaderboard");
    };
    assert_eq!(args.limit, DEFAULT_LIMIT);
    if std::env::var_os("BLOCKFALL_LEDGER").is_none() {
        assert_eq!(args.ledger, PathBuf::from(DEFAULT_LEDGER));
    }
}

#[test]
fn no_subcommand_means_play() {
    let cli = Cli::try_parse_from(["blockfall"]).unwrap();
    assert!(matches!(cli.into_command(), Command::Play(_)));
}

#[test]
fn too_small_board_is_rejected_by_config() {
    let cli = Cli::try_parse_from(["blockfall", "play", "--cols", "3"]).unwrap();
    let Command::Play(args) = cli.into_command() else {
        panic!("expected play");
    };
    assert!(args.game_config().validate().is_err());
}

#[test]
fn oversized_board_flags_fail_validation() {
    let cli = Cli::try_parse_from(["blockfall", "play", "--cols", "40000"]).unwrap();
    let Command::Play(args) = cli.into_command() else {
        panic!("expected play");
    };
    assert!(args.game_config().validate().is_err());
}
