//! Render snapshot - a read-only copy of everything a frontend draws
//!
//! Snapshots own their data. Renderers never hold a reference into the live
//! game state.

use crate::piece::Piece;
use crate::types::{Cell, ColorTag, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceView {
    pub kind: PieceKind,
    pub color: ColorTag,
    pub cells: [(i16, i16); 4],
}

impl PieceView {
    /// View of a piece at its board position
    pub fn placed(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            color: piece.color(),
            cells: piece.blocks(),
        }
    }

    /// View of a piece's rotation-0 offsets, for a preview box
    pub fn preview(kind: PieceKind) -> Self {
        Self::placed(&Piece::at(kind, 0, 0, 0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major board cells
    pub board: Vec<Cell>,
    /// Falling piece; absent once the game is over
    pub current: Option<PieceView>,
    /// Resting cells of the falling piece; absent once the game is over
    pub ghost: Option<[(i16, i16); 4]>,
    /// Queued piece, as preview offsets
    pub next: PieceView,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub delay_ms: u32,
    pub paused: bool,
    pub game_over: bool,
    pub seed: Option<u32>,
    pub player: Option<String>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = BOARD_WIDTH as u16;
        self.height = BOARD_HEIGHT as u16;
        self.board.clear();
        self.board
            .resize(self.width as usize * self.height as usize, None);
        self.current = None;
        self.ghost = None;
        self.next = PieceView::preview(PieceKind::I);
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.delay_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.seed = None;
        self.player = None;
    }

    /// Cell at (x, y), `None` when empty or out of range
    pub fn cell(&self, x: u16, y: u16) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            current: None,
            ghost: None,
            next: PieceView::preview(PieceKind::I),
            score: 0,
            lines: 0,
            level: 1,
            delay_ms: 0,
            paused: false,
            game_over: false,
            seed: None,
            player: None,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_an_empty_board() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.board.len(), 200);
        assert!(snap.board.iter().all(|c| c.is_none()));
        assert!(!snap.paused && !snap.game_over);
    }

    #[test]
    fn cell_out_of_range_is_empty() {
        let mut snap = GameSnapshot::default();
        snap.board[0] = Some(PieceKind::O.color());
        assert_eq!(snap.cell(0, 0), Some(PieceKind::O.color()));
        assert_eq!(snap.cell(10, 0), None);
        assert_eq!(snap.cell(0, 20), None);
    }

    #[test]
    fn preview_uses_rotation_zero_offsets() {
        let view = PieceView::preview(PieceKind::T);
        assert_eq!(view.cells, [(1, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(view.color, PieceKind::T.color());
    }
}
