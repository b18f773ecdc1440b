//! GameView: maps a [`GameSnapshot`] onto the terminal.
//!
//! Pure presentation: reads the snapshot, never touches engine state. Board
//! cells are drawn two columns wide to compensate for terminal glyph aspect
//! ratio, tinted with the catalog's `#rrggbb` color identifiers.

use anyhow::Result;

use crossterm::style::Color;

use crate::core::pieces::Tetromino;
use crate::core::snapshot::GameSnapshot;
use crate::term::screen::{Screen, TextStyle};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

const BLOCK: &str = "██";
const EMPTY: &str = " ·";

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render a full frame for the snapshot into the screen's queue.
    pub fn draw(&self, screen: &mut Screen, snap: &GameSnapshot, cols: u16, rows: u16) -> Result<()> {
        screen.begin_frame()?;

        let board_w = BOARD_WIDTH as u16 * self.cell_w;
        let board_h = BOARD_HEIGHT as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = cols.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = rows.saturating_sub(frame_h) / 2;

        self.draw_border(screen, start_x, start_y, frame_w, frame_h)?;
        self.draw_cells(screen, snap, start_x + 1, start_y + 1)?;
        self.draw_panel(screen, snap, start_x + frame_w + 2, start_y)?;

        if snap.paused {
            self.draw_overlay(screen, start_x, start_y, frame_w, frame_h, "PAUSED")?;
        } else if snap.game_over {
            self.draw_overlay(screen, start_x, start_y, frame_w, frame_h, "GAME OVER")?;
        }

        Ok(())
    }

    fn draw_border(
        &self,
        screen: &mut Screen,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) -> Result<()> {
        let style = TextStyle::colored(Color::Grey);

        let mut top = String::from("┌");
        let mut bottom = String::from("└");
        for _ in 0..w - 2 {
            top.push('─');
            bottom.push('─');
        }
        top.push('┐');
        bottom.push('┘');

        screen.put(x, y, &top, style)?;
        for dy in 1..h - 1 {
            screen.put(x, y + dy, "│", style)?;
            screen.put(x + w - 1, y + dy, "│", style)?;
        }
        screen.put(x, y + h - 1, &bottom, style)?;
        Ok(())
    }

    fn draw_cells(&self, screen: &mut Screen, snap: &GameSnapshot, x0: u16, y0: u16) -> Result<()> {
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (text, style) = match cell {
                    Some(color) => (BLOCK, TextStyle::colored(color_from_hex(color))),
                    None => (EMPTY, TextStyle::dim(Color::DarkGrey)),
                };
                screen.put(x0 + x as u16 * self.cell_w, y0 + y as u16, text, style)?;
            }
        }

        // The falling piece overdraws the grid; cells above row 0 stay hidden.
        if let Some(piece) = snap.current {
            let style = TextStyle::bold(color_from_hex(piece.tetromino.color));
            for (x, y) in piece.cells() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    screen.put(x0 + x as u16 * self.cell_w, y0 + y as u16, BLOCK, style)?;
                }
            }
        }
        Ok(())
    }

    fn draw_panel(&self, screen: &mut Screen, snap: &GameSnapshot, x: u16, y: u16) -> Result<()> {
        let label = TextStyle::bold(Color::White);
        let value = TextStyle::colored(Color::Grey);

        let mut row = y;
        for (name, amount) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            screen.put(x, row, name, label)?;
            screen.put(x, row + 1, &amount.to_string(), value)?;
            row += 3;
        }

        screen.put(x, row, "NEXT", label)?;
        if let Some(next) = snap.next {
            self.draw_preview(screen, &next, x, row + 1)?;
        }

        row += 6;
        screen.put(x, row, "p pause · r restart · q quit", TextStyle::dim(Color::Grey))?;
        Ok(())
    }

    fn draw_preview(&self, screen: &mut Screen, piece: &Tetromino, x: u16, y: u16) -> Result<()> {
        let style = TextStyle::colored(color_from_hex(piece.color));
        for (dx, dy) in piece.shape.offsets() {
            screen.put(x + dx as u16 * self.cell_w, y + dy as u16, BLOCK, style)?;
        }
        Ok(())
    }

    fn draw_overlay(
        &self,
        screen: &mut Screen,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        text: &str,
    ) -> Result<()> {
        let text_w = text.chars().count() as u16;
        let mid_x = x + w.saturating_sub(text_w) / 2;
        let mid_y = y + h / 2;
        screen.put(mid_x, mid_y, text, TextStyle::bold(Color::White))
    }
}

/// Side panel width reserved next to the well.
const PANEL_W: u16 = 30;

/// Decode a `"#rrggbb"` identifier. Unknown formats fall back to white.
pub fn color_from_hex(hex: &str) -> Color {
    if hex.len() != 7 || !hex.starts_with('#') {
        return Color::White;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    Color::Rgb {
        r: channel(1),
        g: channel(3),
        b: channel(5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catalog_colors() {
        assert_eq!(
            color_from_hex("#00f0f0"),
            Color::Rgb {
                r: 0,
                g: 240,
                b: 240
            }
        );
        assert_eq!(
            color_from_hex("#f0a000"),
            Color::Rgb {
                r: 240,
                g: 160,
                b: 0
            }
        );
    }

    #[test]
    fn malformed_identifiers_fall_back_to_white() {
        assert_eq!(color_from_hex("red"), Color::White);
        assert_eq!(color_from_hex("#fff"), Color::White);
        assert_eq!(color_from_hex(""), Color::White);
    }
}
