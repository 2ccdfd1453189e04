//! Terminal runner (default binary).
//!
//! Reads keys with crossterm, draws through the framebuffer renderer, and
//! drives gravity from a frame loop: elapsed time accumulates and one tick
//! is applied each time it passes the game's current delay. N opens a name
//! box that changes the player; a running game is paused while it is open.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfall::cli::{Cli, Command, LeaderboardArgs, PlayArgs};
use blockfall::core::{
    GameRecorder, GameSnapshot, GameState, Leaderboard, Phase, Session, UniformSource,
};
use blockfall::input::{
    handle_key_event, is_change_player, should_quit, NamePrompt, PromptOutcome,
};
use blockfall::ledger::JsonlLedger;
use blockfall::term::{format_leaderboard, FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    match Cli::parse().into_command() {
        Command::Play(args) => play(args),
        Command::Leaderboard(args) => leaderboard(args),
    }
}

/// `RUST_LOG` if set, else `default`
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to a file; stdout and stderr belong to the game screen.
fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn play(args: PlayArgs) -> Result<()> {
    init_file_logging(&args.log)?;

    let seed = args.seed_or_clock();
    let game = GameState::with_config(args.game_config(), Box::new(UniformSource::new(seed)))
        .context("invalid board settings")?;
    let ledger = JsonlLedger::open(&args.ledger)?;

    let mut session = Session::new(game, ledger);
    session.set_player(args.player.clone());
    info!(seed, player = ?session.player(), "starting game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Player-name entry in progress
struct PlayerChange {
    prompt: NamePrompt,
    /// The prompt paused a running game and unpauses it on close
    resume: bool,
}

fn run<R: GameRecorder>(term: &mut TerminalRenderer, session: &mut Session<R>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(TICK_MS as u64);
    let mut gravity = Duration::ZERO;
    let mut last = Instant::now();
    let mut change: Option<PlayerChange> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        if let Some(change) = &change {
            view.render_name_prompt(&snap, viewport, change.prompt.text(), &mut fb);
        }
        term.draw_swap(&mut fb)?;

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(open) = change.as_mut() {
                        let outcome = open.prompt.handle_key(key);
                        if outcome != PromptOutcome::Editing {
                            if let PromptOutcome::Submitted(name) = outcome {
                                session.set_player(Some(name));
                            }
                            if open.resume {
                                session.apply_action(GameAction::Pause);
                            }
                            change = None;
                        }
                    } else if should_quit(key) {
                        info!(score = session.game().score(), "quit");
                        return Ok(());
                    } else if is_change_player(key) {
                        let resume = session.game().phase() == Phase::Running
                            && session.apply_action(GameAction::Pause);
                        change = Some(PlayerChange {
                            prompt: NamePrompt::new(session.player()),
                            resume,
                        });
                    } else if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                        if action == GameAction::Restart {
                            gravity = Duration::ZERO;
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let now = Instant::now();
        gravity += now - last;
        last = now;
        let delay = Duration::from_millis(session.game().delay_ms() as u64);
        while gravity >= delay {
            gravity -= delay;
            session.tick();
        }
    }
}

fn leaderboard(args: LeaderboardArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .init();

    let ledger = JsonlLedger::open(&args.ledger)?;
    let top = ledger.top_scores(args.limit)?;
    print!("{}", format_leaderboard(&top));
    Ok(())
}
