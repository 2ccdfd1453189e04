//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceView};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::ColorTag;

/// Key reference shown under the board.
pub const HELP_LINE: &str =
    "←→ move  ↑ rotate  ↓ soft  Space hard drop  P pause  R restart  N player  Q quit";

const BLOCK: char = '█';
const GHOST: char = '░';
const EMPTY: char = '·';

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen position of the board frame, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// Draws the playfield, HUD and overlays for one snapshot.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up the usual terminal glyph.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
            show_help: true,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Where the board frame lands for a snapshot of this size.
    pub fn board_rect(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardRect {
        let w = snap.width * self.cell_w + 2;
        let h = snap.height * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        BoardRect { x, y, w, h }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG)));

        let rect = self.board_rect(snap, viewport);

        fb.fill_rect(
            rect.x + 1,
            rect.y + 1,
            rect.w - 2,
            rect.h - 2,
            ' ',
            CellStyle::new(PLAY_BG, PLAY_BG),
        );
        draw_border(fb, rect, CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG));

        // Locked cells and the empty grid.
        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for y in 0..snap.height {
            for x in 0..snap.width {
                let (ch, style) = match snap.cell(x, y) {
                    Some(color) => (BLOCK, block_style(color)),
                    None => (EMPTY, empty),
                };
                self.fill_board_cell(fb, rect, x as i16, y as i16, ch, style);
            }
        }

        if let Some(ghost) = snap.ghost {
            let style = CellStyle::new(ColorTag::GHOST.into(), PLAY_BG).dim();
            for (x, y) in ghost {
                self.fill_board_cell(fb, rect, x, y, GHOST, style);
            }
        }

        // Falling piece last so it covers its own ghost.
        if let Some(current) = snap.current {
            let style = block_style(current.color);
            for (x, y) in current.cells {
                self.fill_board_cell(fb, rect, x, y, BLOCK, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, rect);

        if self.show_help {
            let help_y = rect.y + rect.h;
            if help_y < viewport.height {
                let text_w = HELP_LINE.chars().count() as u16;
                let x = viewport.width.saturating_sub(text_w) / 2;
                fb.put_str(x, help_y, HELP_LINE, CellStyle::default().dim());
            }
        }

        if snap.game_over {
            draw_overlay(fb, rect, &["GAME OVER", "Press R"]);
        } else if snap.paused {
            draw_overlay(fb, rect, &["PAUSED"]);
        }
    }

    /// Draw the player-name entry box over an already rendered frame.
    pub fn render_name_prompt(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        text: &str,
        fb: &mut FrameBuffer,
    ) {
        let rect = self.board_rect(snap, viewport);
        let band = 5;
        let top = (rect.y + rect.h / 2).saturating_sub(band / 2);
        fb.fill_rect(
            rect.x + 1,
            top,
            rect.w.saturating_sub(2),
            band,
            ' ',
            CellStyle::new(SCREEN_BG, SCREEN_BG),
        );
        let entry = format!("{text}_");
        draw_overlay(fb, rect, &["PLAYER NAME", &entry, "Enter ok  Esc cancel"]);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Fill one board cell; cells above or outside the board are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        rect: BoardRect,
        x: i16,
        y: i16,
        ch: char,
        style: CellStyle,
    ) {
        let cols = (rect.w - 2) / self.cell_w;
        let rows = (rect.h - 2) / self.cell_h;
        if x < 0 || y < 0 || x as u16 >= cols || y as u16 >= rows {
            return;
        }
        let px = rect.x + 1 + x as u16 * self.cell_w;
        let py = rect.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        rect: BoardRect,
    ) {
        let panel_x = rect.x.saturating_add(rect.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = rect.y;
        fb.put_str(panel_x, y, "PLAYER", label);
        fb.put_str(panel_x, y + 1, snap.player.as_deref().unwrap_or("-"), value);
        y += 3;

        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y + 1, &snap.next);
        y += 2 + 2 * self.cell_h;

        if snap.game_over {
            fb.put_str(panel_x, y, "[GAME OVER] Press R", label);
        } else if snap.paused {
            fb.put_str(panel_x, y, "[PAUSED]", label);
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: &PieceView) {
        let style = CellStyle::new(next.color.into(), SCREEN_BG);
        for (dx, dy) in next.cells {
            // Preview offsets are never negative.
            let px = x + dx as u16 * self.cell_w;
            let py = y + dy as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
        }
    }
}

fn block_style(color: ColorTag) -> CellStyle {
    CellStyle::new(color.into(), PLAY_BG).bold()
}

fn draw_border(fb: &mut FrameBuffer, rect: BoardRect, style: CellStyle) {
    let BoardRect { x, y, w, h } = rect;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Centered lines over the middle of the board
fn draw_overlay(fb: &mut FrameBuffer, rect: BoardRect, lines: &[&str]) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let top = (rect.y + rect.h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = rect.x + rect.w.saturating_sub(text_w) / 2;
        fb.put_str(x, top + i as u16, text, style);
    }
}
