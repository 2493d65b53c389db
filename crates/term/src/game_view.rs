//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O) and can be unit-tested. The snapshot
//! already carries the active piece overlaid on the grid, so the view
//! only draws cells, the next-piece preview, the score panel, and the
//! pause / game-over overlays.

use blockfall_core::GameSnapshot;
use blockfall_types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::fb::{FrameBuffer, Rgb, Style};

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

/// A lightweight terminal renderer for the playfield.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one frame of the game into a framebuffer.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = Style {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(26, 26, 26),
            bold: false,
            dim: false,
        };
        let border = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for (y, row) in snapshot.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => {
                        self.draw_board_cell(&mut fb, start_x, start_y, x as u16, y as u16, *kind)
                    }
                    None => self.draw_empty_cell(&mut fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        self.draw_side_panel(&mut fb, snapshot, viewport, start_x, start_y, frame_w);

        match snapshot.status {
            GameStatus::Paused => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
            }
            GameStatus::GameOver => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
                self.draw_overlay_text(
                    &mut fb,
                    start_x,
                    start_y + 2,
                    frame_w,
                    frame_h,
                    "press r to restart",
                );
            }
            GameStatus::Playing => {}
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
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
        let style = Style {
            fg: Rgb::new(70, 70, 80),
            bg: Rgb::new(26, 26, 26),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = Style {
            fg: piece_color(kind),
            bg: Rgb::new(26, 26, 26),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = Style {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snapshot.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(preview) = snapshot.next {
            let style = Style {
                fg: piece_color(preview.kind),
                bg: Rgb::new(0, 0, 0),
                bold: false,
                dim: false,
            };
            let n = preview.shape.size() as u16;
            for sy in 0..n {
                for sx in 0..n {
                    if preview.shape.filled(sx as usize, sy as usize) {
                        fb.put_str(panel_x + sx * 2, y + sy, "██", style);
                    }
                }
            }
            y = y.saturating_add(n).saturating_add(1);
        } else {
            fb.put_str(panel_x, y, "-", value);
            y = y.saturating_add(2);
        }

        // Key hints, clipped to whatever room is left.
        let hints = [
            "← →  move",
            "↓    soft drop",
            "↑    rotate",
            "spc  hard drop",
            "p    pause",
            "r    restart",
            "q    quit",
        ];
        y = y.saturating_add(1);
        for hint in hints {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, hint, Style { dim: true, ..value });
            y = y.saturating_add(1);
        }
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
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Terminal color for a piece kind, matching the classic palette.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 240, 240),
        PieceKind::J => Rgb::new(60, 90, 240),
        PieceKind::L => Rgb::new(240, 160, 0),
        PieceKind::O => Rgb::new(240, 240, 0),
        PieceKind::S => Rgb::new(0, 240, 0),
        PieceKind::T => Rgb::new(160, 0, 240),
        PieceKind::Z => Rgb::new(240, 0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::BoardEngine;

    fn contains_str(fb: &FrameBuffer, needle: &str) -> bool {
        for y in 0..fb.height() {
            let row: String = (0..fb.width())
                .map(|x| fb.get(x, y).unwrap_or_default().ch)
                .collect();
            if row.contains(needle) {
                return true;
            }
        }
        false
    }

    #[test]
    fn renders_score_in_side_panel() {
        let mut engine = BoardEngine::new(3);
        engine.step();
        engine.hard_drop();

        let view = GameView::default();
        let fb = view.render(&engine.snapshot(), Viewport::new(80, 30));

        assert!(contains_str(&fb, "SCORE"));
        assert!(contains_str(&fb, &engine.score().to_string()));
    }

    #[test]
    fn paused_overlay_is_drawn() {
        let mut engine = BoardEngine::new(3);
        engine.step();
        engine.toggle_pause();

        let view = GameView::default();
        let fb = view.render(&engine.snapshot(), Viewport::new(80, 30));

        assert!(contains_str(&fb, "PAUSED"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let engine = BoardEngine::new(3);
        let view = GameView::default();
        let _ = view.render(&engine.snapshot(), Viewport::new(5, 3));
    }
}
