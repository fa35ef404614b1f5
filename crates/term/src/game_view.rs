//! GameView: maps a session [`Snapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::{NextSnapshot, Snapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, GRID_HEIGHT, GRID_WIDTH};

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

/// Vertical placement of the playfield inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const PANEL_GAP: u16 = 2;
const PANEL_MIN_W: u16 = 10;
const PANEL_STRIDE: u16 = 3;

/// Screen rectangle of the bordered playfield
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Frame {
    fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    /// Column where `text` starts when centered across the frame
    fn centered_x(&self, text: &str) -> u16 {
        let len = text.chars().count() as u16;
        self.x.saturating_add(self.w.saturating_sub(len) / 2)
    }
}

/// Draws snapshots with each board cell `cell_w` x `cell_h` characters large.
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square in most fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when the terminal size changes.
    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame = self.frame_for(viewport);
        draw_border(fb, frame);

        let empty = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: PLAYFIELD_BG,
            bold: false,
            dim: true,
        };
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (cx, cy) = (x as i8, y as i8);
                match cell {
                    Some(color) => self.paint_cell(fb, frame, cx, cy, '█', block_style(*color)),
                    None => self.paint_cell(fb, frame, cx, cy, '·', empty),
                }
            }
        }

        // The active piece may hang outside the grid after an unchecked
        // rotation; `paint_cell` clips it.
        let active = block_style(snap.active.color);
        for (x, y) in snap.active_cells() {
            self.paint_cell(fb, frame, x, y, '█', active);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            let mid = frame.y.saturating_add(frame.h / 2);
            let banner = CellStyle {
                fg: Rgb::new(255, 80, 80),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            };
            let hint = CellStyle {
                dim: true,
                ..CellStyle::default()
            };
            fb.put_str(frame.centered_x("GAME OVER"), mid, "GAME OVER", banner);
            fb.put_str(frame.centered_x("r: restart"), mid.saturating_add(1), "r: restart", hint);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame_for(&self, viewport: Viewport) -> Frame {
        let w = GRID_WIDTH as u16 * self.cell_w + 2;
        let h = GRID_HEIGHT as u16 * self.cell_h + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y,
            w,
            h,
        }
    }

    /// Paint board cell (x, y); cells off the grid are skipped.
    fn paint_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, ch: char, style: CellStyle) {
        if !(0..GRID_WIDTH as i8).contains(&x) || !(0..GRID_HEIGHT as i8).contains(&y) {
            return;
        }
        let px = frame.x + 1 + x as u16 * self.cell_w;
        let py = frame.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &Snapshot, viewport: Viewport, frame: Frame) {
        let x = frame.right().saturating_add(PANEL_GAP);
        if viewport.width.saturating_sub(x) < PANEL_MIN_W {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: BORDER_FG,
            ..CellStyle::default()
        };

        let mut y = frame.y;
        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y.saturating_add(1), n, value);
            y = y.saturating_add(PANEL_STRIDE);
        }

        fb.put_str(x, y, "NEXT", label);
        self.draw_preview(fb, x, y.saturating_add(1), &snap.next);
    }

    /// Draw the next piece's matrix, one board cell per `cell_w` columns.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: &NextSnapshot) {
        let style = CellStyle {
            bg: CellStyle::default().bg,
            ..block_style(next.color)
        };
        for (dx, dy) in next.shape.minos() {
            let px = x.saturating_add(dx as u16 * self.cell_w);
            let py = y.saturating_add(dy as u16);
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle {
        fg: BORDER_FG,
        ..CellStyle::default()
    };
    let (right, bottom) = (x + w - 1, y + h - 1);

    fb.fill_rect(x + 1, y, w - 2, 1, '─', style);
    fb.fill_rect(x + 1, bottom, w - 2, 1, '─', style);
    fb.fill_rect(x, y + 1, 1, h - 2, '│', style);
    fb.fill_rect(right, y + 1, 1, h - 2, '│', style);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}

fn block_style(color: Color) -> CellStyle {
    CellStyle {
        fg: color_rgb(color),
        bg: PLAYFIELD_BG,
        bold: true,
        dim: false,
    }
}

/// Terminal color for each piece color
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Purple => Rgb::new(170, 90, 220),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Red => Rgb::new(220, 80, 80),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
    }
}
