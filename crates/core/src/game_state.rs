//! Game state module - the game controller
//!
//! Ties together the board, the current and next pieces, the piece source,
//! and scoring. Every mutation happens synchronously inside one command or
//! one gravity tick; there are no timers in here. The host calls
//! [`GameState::tick`] every [`GameState::delay_ms`] milliseconds and forwards
//! input through [`GameState::apply_action`].
//!
//! Commands never fail. A command that cannot apply (blocked move, blocked
//! rotation, input while paused or after game over) leaves the state alone
//! and returns `false`.

use tracing::{debug, info};

use crate::board::{Board, LockOutcome};
use crate::config::{ConfigError, GameConfig};
use crate::ghost;
use crate::piece::Piece;
use crate::rng::{PieceSource, UniformSource};
use crate::rotation::try_rotate;
use crate::scoring::{
    gravity_delay_ms, hard_drop_points, level_for_lines, line_clear_points, soft_drop_points,
};
use crate::snapshot::{GameSnapshot, PieceView};
use crate::types::{GameAction, PieceKind};

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// Final figures of a finished game, emitted once per game over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverEvent {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    current: Piece,
    next: Piece,
    source: Box<dyn PieceSource>,
    score: u32,
    lines: u32,
    level: u32,
    delay_ms: u32,
    paused: bool,
    game_over: bool,
    /// Pending game-over event (consumed by the session).
    game_over_event: Option<GameOverEvent>,
    /// Rows cleared by the most recent lock.
    last_clear: usize,
}

impl GameState {
    /// Create a classic 10x20 game with uniform random pieces
    pub fn new(seed: u32) -> Self {
        Self::build(GameConfig::default(), Box::new(UniformSource::new(seed)))
    }

    /// Create a game from a configuration and a piece source.
    ///
    /// Fails if the configuration is invalid.
    pub fn with_config(
        config: GameConfig,
        source: Box<dyn PieceSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, source))
    }

    fn build(config: GameConfig, mut source: Box<dyn PieceSource>) -> Self {
        let current = Piece::new(source.next_kind());
        let next = Piece::new(source.next_kind());
        debug!(current = ?current.kind(), next = ?next.kind(), "new game");

        Self {
            config,
            board: Board::sized(config.cols, config.rows),
            current,
            next,
            source,
            score: 0,
            lines: 0,
            level: 1,
            delay_ms: config.start_delay_ms,
            paused: false,
            game_over: false,
            game_over_event: None,
            last_clear: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity interval in milliseconds
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Rows cleared by the most recent lock
    pub fn last_clear(&self) -> usize {
        self.last_clear
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    fn playable(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Where the current piece would land. Never changes state.
    pub fn ghost(&self) -> Piece {
        ghost::project(&self.board, &self.current)
    }

    /// Apply an input command
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Try to move the current piece.
    ///
    /// A blocked downward step (`dy == 1`) locks the piece instead and still
    /// counts as applied.
    pub fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        if !self.playable() {
            return false;
        }
        self.step(dx, dy)
    }

    fn step(&mut self, dx: i16, dy: i16) -> bool {
        let candidate = self.current.moved(dx, dy);
        if self.board.valid(&candidate) {
            self.current = candidate;
            return true;
        }
        if dy == 1 {
            self.lock_current();
            return true;
        }
        false
    }

    /// Gravity: one step down, locking if blocked. No score.
    pub fn tick(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        self.step(0, 1)
    }

    /// One step down (or lock) for one point
    pub fn soft_drop(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        // Awarded before the step so a game-over lock reports it.
        self.score = self.score.saturating_add(soft_drop_points());
        self.step(0, 1)
    }

    /// Drop to the resting row and lock, two points per row travelled
    pub fn hard_drop(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let distance = ghost::drop_distance(&self.board, &self.current);
        self.current = self.current.moved(0, distance as i16);
        self.score = self.score.saturating_add(hard_drop_points(distance));
        self.lock_current();
        true
    }

    /// Rotate with horizontal kicks
    pub fn rotate(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        match try_rotate(&self.board, &self.current) {
            Some((rotated, kick)) => {
                if kick != 0 {
                    debug!(kick, kind = ?rotated.kind(), "rotation kicked");
                }
                self.current = rotated;
                true
            }
            None => false,
        }
    }

    /// Toggle pause. Ignored after game over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Start over: empty board, fresh pieces, initial score/lines/level.
    ///
    /// The piece source keeps running, so a restart does not replay the
    /// previous game.
    pub fn restart(&mut self) {
        self.board.clear();
        self.current = Piece::new(self.source.next_kind());
        self.next = Piece::new(self.source.next_kind());
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.delay_ms = self.config.start_delay_ms;
        self.paused = false;
        self.game_over = false;
        self.game_over_event = None;
        self.last_clear = 0;
        info!("game restarted");
    }

    /// Take the pending game-over event, if the game just ended
    pub fn take_game_over(&mut self) -> Option<GameOverEvent> {
        self.game_over_event.take()
    }

    /// Commit the current piece and advance to the next one
    fn lock_current(&mut self) {
        let piece = self.current;
        if self.board.lock(&piece, piece.color()) == LockOutcome::Overflow {
            debug!(kind = ?piece.kind(), y = piece.y(), "piece locked above the board");
            self.last_clear = 0;
            self.end_game();
            return;
        }

        let cleared = self.board.clear_full_rows();
        self.last_clear = cleared;
        self.apply_line_clear(cleared);
        debug!(kind = ?piece.kind(), cleared, score = self.score, "piece locked");

        self.current = self.next;
        self.next = Piece::new(self.source.next_kind());

        if !self.board.valid(&self.current) {
            debug!(kind = ?self.current.kind(), "spawn blocked");
            self.end_game();
        }
    }

    fn apply_line_clear(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }

        self.score = self
            .score
            .saturating_add(line_clear_points(rows, self.level));
        self.lines = self.lines.saturating_add(rows as u32);

        // At most one level per clear
        if level_for_lines(self.lines, self.config.lines_per_level) > self.level {
            self.level += 1;
            self.delay_ms = gravity_delay_ms(self.level, &self.config);
            info!(level = self.level, delay_ms = self.delay_ms, "level up");
        }
    }

    fn end_game(&mut self) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        self.paused = false;
        let event = GameOverEvent {
            score: self.score,
            lines: self.lines,
            level: self.level,
        };
        info!(score = event.score, lines = event.lines, level = event.level, "game over");
        self.game_over_event = Some(event);
    }

    /// Copy renderable state into an existing snapshot, reusing its buffer
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());

        if self.game_over {
            out.current = None;
            out.ghost = None;
        } else {
            out.current = Some(PieceView::placed(&self.current));
            out.ghost = Some(self.ghost().blocks());
        }
        out.next = PieceView::preview(self.next.kind());
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.delay_ms = self.delay_ms;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.seed = self.source.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Kind that the next lock will promote to current
    pub fn next_kind(&self) -> PieceKind {
        self.next.kind()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
