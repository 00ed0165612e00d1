//! GameView: maps the screen state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::screen::{outcome_message, ScreenState};
use crate::types::{Phase, TimeUrgency};

/// Glyph used for one car.
pub const CAR_GLYPH: char = '■';

const CAR_PALETTE: [Rgb; 6] = [
    Rgb::new(230, 80, 80),
    Rgb::new(80, 160, 240),
    Rgb::new(240, 200, 70),
    Rgb::new(90, 210, 120),
    Rgb::new(200, 120, 220),
    Rgb::new(250, 150, 60),
];

const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const HINT: CellStyle = CellStyle::fg(Rgb::new(150, 150, 160)).dim();
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const OK: CellStyle = CellStyle::fg(Rgb::new(90, 210, 120)).bold();
const BAD: CellStyle = CellStyle::fg(Rgb::new(235, 90, 90)).bold();

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

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub phase: Phase,
    pub screen: &'a ScreenState,
    /// Current contents of the answer field.
    pub answer: &'a str,
}

/// A lightweight terminal renderer for the counting game.
pub struct GameView {
    /// Car slot width in terminal columns (glyph plus gap).
    car_w: u16,
    /// Cars per row at most.
    max_columns: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            car_w: 2,
            max_columns: 20,
        }
    }
}

impl GameView {
    pub fn new(car_w: u16, max_columns: u16) -> Self {
        Self {
            car_w: car_w.max(1),
            max_columns: max_columns.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, input: &FrameInput<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        match input.phase {
            Phase::Idle => self.draw_menu(fb, input.screen, viewport),
            Phase::RoundActive | Phase::RoundResolved => self.draw_game(fb, input, viewport),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, input: &FrameInput<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(input, viewport, &mut fb);
        fb
    }

    /// Columns and rows of the car field for `count` cars in `viewport`.
    pub fn field_grid(&self, count: u32, viewport: Viewport) -> (u16, u16) {
        let inner_w = viewport.width.saturating_sub(2);
        let columns = (inner_w / self.car_w).min(self.max_columns);
        if columns == 0 {
            return (0, 0);
        }
        let rows = count.div_ceil(u32::from(columns)).max(1);
        (columns, u16::try_from(rows).unwrap_or(u16::MAX))
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, screen: &ScreenState, viewport: Viewport) {
        let mid = viewport.height / 2;
        let top = mid.saturating_sub(3);

        centered(fb, viewport, top, "CAR COUNTER", LABEL);
        centered(
            fb,
            viewport,
            top + 2,
            "Count the cars before the time runs out.",
            VALUE,
        );

        let best = screen.hud().best;
        let label = "BEST ";
        let w = label.len() as u16 + digits(best);
        let x = viewport.width.saturating_sub(w) / 2;
        let x = fb.put_str(x, top + 4, label, LABEL);
        fb.put_u32(x, top + 4, best, VALUE);

        centered(fb, viewport, top + 6, "Enter  play    q  quit", HINT);
    }

    fn draw_game(&self, fb: &mut FrameBuffer, input: &FrameInput<'_>, viewport: Viewport) {
        let screen = input.screen;
        let hud = screen.hud();

        // HUD line.
        let mut x = 0;
        for (label, value) in [("ROUND ", hud.round), ("SCORE ", hud.score), ("BEST ", hud.best)] {
            x = fb.put_str(x, 0, label, LABEL);
            x = fb.put_u32(x, 0, value, VALUE);
            x = x.saturating_add(3);
        }
        x = fb.put_str(x, 0, "TIME ", LABEL);
        fb.put_u32(x, 0, hud.time_left, time_style(hud.urgency()));

        // Car field.
        let count = screen.item_count();
        let (columns, rows) = self.field_grid(count, viewport);
        if columns == 0 {
            return;
        }
        let rows = rows.min(viewport.height);
        let frame_w = columns * self.car_w + 2;
        let frame_h = rows.saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = 2;
        draw_border(fb, start_x, start_y, frame_w, frame_h, BORDER);

        let palette_shift = screen.rounds_shown() as usize;
        for i in 0..count {
            let col = (i % u32::from(columns)) as u16;
            let row = i / u32::from(columns);
            if row >= u32::from(rows) {
                break;
            }
            let row = row as u16;
            let color = CAR_PALETTE[(i as usize + palette_shift) % CAR_PALETTE.len()];
            fb.put_char(
                start_x + 1 + col * self.car_w,
                start_y + 1 + row,
                CAR_GLYPH,
                CellStyle::fg(color),
            );
        }

        // Answer, message and key hints below the field.
        let mut y = start_y.saturating_add(frame_h).saturating_add(1);
        let x = fb.put_str(start_x, y, "HOW MANY? ", LABEL);
        let x = fb.put_str(x, y, input.answer, VALUE);
        if input.phase == Phase::RoundActive {
            fb.put_char(x, y, '_', VALUE);
        }

        y = y.saturating_add(2);
        if let Some(event) = screen.outcome() {
            let style = if event.is_success() { OK } else { BAD };
            fb.put_str(start_x, y, &outcome_message(event), style);
        }

        y = y.saturating_add(2);
        let hint = match input.phase {
            Phase::RoundResolved => "Enter  next round    r  restart    m  menu    q  quit",
            _ => "Enter  check    Esc  menu    Ctrl-R  restart",
        };
        fb.put_str(start_x, y, hint, HINT);
    }
}

fn time_style(urgency: TimeUrgency) -> CellStyle {
    match urgency {
        TimeUrgency::Calm => VALUE,
        TimeUrgency::Warn => CellStyle::fg(Rgb::new(240, 200, 70)).bold(),
        TimeUrgency::Panic => BAD,
    }
}

fn centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let w = text.chars().count() as u16;
    let x = viewport.width.saturating_sub(w) / 2;
    fb.put_str(x, y, text, style);
}

fn digits(value: u32) -> u16 {
    value.checked_ilog10().map_or(1, |d| d as u16 + 1)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_widths() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(4_000_000_000), 10);
    }

    #[test]
    fn field_grid_wraps_rows() {
        let view = GameView::default();
        assert_eq!(view.field_grid(60, Viewport::new(80, 24)), (20, 3));
        assert_eq!(view.field_grid(21, Viewport::new(80, 24)), (20, 2));
        assert_eq!(view.field_grid(0, Viewport::new(80, 24)), (20, 1));
        // 12 inner columns => 6 cars per row.
        assert_eq!(view.field_grid(13, Viewport::new(14, 24)), (6, 3));
        assert_eq!(view.field_grid(5, Viewport::new(2, 24)), (0, 0));
    }
}
