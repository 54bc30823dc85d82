//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: a bordered playfield (each board cell is `cell_w` x `cell_h`
//! terminal cells), empty cells drawn as a uniform dotted grid, and a label
//! panel to the right with `Score: N`, `High Score: N`, `Lines: N` and
//! `Next: X`. When the terminal is too narrow for the panel, the labels are
//! drawn over the top-left of the playfield instead.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

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

const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);
const GRIDLINE: Rgb = Rgb::new(50, 50, 50);
const SCORE_FG: Rgb = Rgb::new(255, 255, 255);
const HIGH_SCORE_FG: Rgb = Rgb::new(255, 255, 0);

/// Minimum panel width that fits "High Score: 0000000".
const PANEL_MIN_W: u16 = 20;

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered playfield in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => {
                        self.draw_filled_cell(fb, start_x, start_y, x as u16, y as u16, *color)
                    }
                    None => self.draw_empty_cell(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x.saturating_add(PANEL_MIN_W) <= viewport.width {
            self.draw_labels(fb, snap, panel_x, start_y);
        } else {
            self.draw_labels(fb, snap, start_x + 1, start_y + 1);
        }

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(GRIDLINE, PLAYFIELD_BG);
        self.fill_cell_rect(fb, start_x, start_y, x, y, ' ', style);
        // Gridline mark in the top-left corner of every cell.
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.put_char(px, py, '·', style);
    }

    fn draw_filled_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: Rgb,
    ) {
        let style = CellStyle {
            fg: color,
            bg: PLAYFIELD_BG,
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, cell_x: u16, cell_y: u16) -> (u16, u16) {
        (
            start_x + 1 + cell_x * self.cell_w,
            start_y + 1 + cell_y * self.cell_h,
        )
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, cell_x, cell_y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_labels(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let score = CellStyle {
            bold: true,
            ..CellStyle::new(SCORE_FG, Rgb::new(0, 0, 0))
        };
        let high = CellStyle {
            bold: true,
            ..CellStyle::new(HIGH_SCORE_FG, Rgb::new(0, 0, 0))
        };
        let info = CellStyle::default();

        let end = fb.put_str(x, y, "Score: ", score);
        fb.put_u32(end, y, snap.score, score);

        let end = fb.put_str(x, y.saturating_add(1), "High Score: ", high);
        fb.put_u32(end, y.saturating_add(1), snap.high_score, high);

        let end = fb.put_str(x, y.saturating_add(3), "Lines: ", info);
        fb.put_u32(end, y.saturating_add(3), snap.lines, info);

        let end = fb.put_str(x, y.saturating_add(4), "Next: ", info);
        fb.put_str(end, y.saturating_add(4), snap.next.letter(), info);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
