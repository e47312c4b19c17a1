//! Cell buffer for per-character colored scenes.
//!
//! Scenes draw glyphs into a 2D grid, then the grid is stamped row by row as
//! Paragraph widgets, merging runs of equal style into one span.

use crate::core::animation::Frame as SpriteFrame;
use crate::core::geometry::{Rect as WorldRect, Viewport};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

pub struct CellBuffer {
    pub width: u16,
    pub height: u16,
    rows: Vec<Vec<Cell>>,
}

impl CellBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Cell::default(); width as usize]; height as usize],
        }
    }

    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        if col < 0 || row < 0 {
            return None;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    /// Write one cell; out-of-range positions are dropped.
    pub fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return;
        }
        self.rows[row as usize][col as usize] = cell;
    }

    pub fn put_char(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        let bg = self.get(col, row).map(|c| c.bg).unwrap_or(Color::Reset);
        self.put(col, row, Cell { ch, fg, bg });
    }

    pub fn put_str(&mut self, col: i32, row: i32, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put_char(col + i as i32, row, ch, fg);
        }
    }

    pub fn fill_row(&mut self, row: i32, cell: Cell) {
        for col in 0..self.width as i32 {
            self.put(col, row, cell);
        }
    }

    /// Fill the cells covered by a world rectangle. Every rectangle covers at
    /// least one cell so small objects stay visible.
    pub fn fill_world_rect(&mut self, viewport: &Viewport, rect: &WorldRect, ch: char, fg: Color) {
        let (c0, r0, cols, rows) = cell_span(viewport, rect);
        for r in r0..r0 + rows {
            for c in c0..c0 + cols {
                self.put_char(c, r, ch, fg);
            }
        }
    }

    /// Stretch a sprite frame over the cells of a world rectangle.
    pub fn draw_sprite(&mut self, viewport: &Viewport, rect: &WorldRect, sprite: &SpriteFrame) {
        let (c0, r0, cols, rows) = cell_span(viewport, rect);
        let fg = sprite.color.to_ratatui();
        for r in 0..rows {
            for c in 0..cols {
                let u = (c as f64 + 0.5) / cols as f64;
                let v = (r as f64 + 0.5) / rows as f64;
                if let Some(ch) = sprite.sample(u, v) {
                    self.put_char(c0 + c, r0 + r, ch, fg);
                }
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        for (row_idx, row_data) in self.rows.iter().enumerate() {
            let y = area.y + row_idx as u16;
            if y >= area.y + area.height {
                break;
            }

            let mut spans: Vec<Span> = Vec::new();
            let mut current_fg = Color::Reset;
            let mut current_bg = Color::Reset;
            let mut current_text = String::new();

            for &cell in row_data {
                if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current_text),
                        Style::default().fg(current_fg).bg(current_bg),
                    ));
                }
                current_fg = cell.fg;
                current_bg = cell.bg;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(
                    current_text,
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }

            let row_area = Rect::new(area.x, y, self.width.min(area.width), 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }
}

/// First column/row and cell counts covered by a world rectangle.
fn cell_span(viewport: &Viewport, rect: &WorldRect) -> (i32, i32, i32, i32) {
    let c0 = viewport.column_of(rect.x);
    let r0 = viewport.row_of(rect.y);
    let cols = ((rect.width * viewport.x_scale()).round() as i32).max(1);
    let rows = ((rect.height * viewport.y_scale()).round() as i32).max(1);
    (c0, r0, cols, rows)
}

/// Scene-local viewport: the content area mapped onto a world size.
pub fn scene_viewport(area: Rect, world_width: f64, world_height: f64) -> Viewport {
    Viewport::new(0, 0, area.width, area.height, world_width, world_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::Rgb;

    #[test]
    fn test_put_ignores_out_of_range() {
        let mut buf = CellBuffer::new(4, 2);
        buf.put_char(-1, 0, 'x', Color::White);
        buf.put_char(4, 0, 'x', Color::White);
        buf.put_char(0, 2, 'x', Color::White);
        buf.put_str(2, 1, "abc", Color::White);
        assert_eq!(buf.get(2, 1).map(|c| c.ch), Some('a'));
        assert_eq!(buf.get(3, 1).map(|c| c.ch), Some('b'));
        assert_eq!(buf.get(4, 1), None);
    }

    #[test]
    fn test_small_world_rect_covers_one_cell() {
        let viewport = Viewport::new(0, 0, 90, 35, 900.0, 700.0);
        let mut buf = CellBuffer::new(90, 35);
        // 4 x 10 projectile is smaller than a 10 x 20 cell
        buf.fill_world_rect(&viewport, &WorldRect::new(455.0, 100.0, 4.0, 10.0), '|', Color::White);
        assert_eq!(buf.get(45, 5).map(|c| c.ch), Some('|'));
        assert_eq!(buf.get(46, 5).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn test_sprite_transparent_cells_keep_background() {
        let viewport = Viewport::new(0, 0, 8, 4, 8.0, 4.0);
        let mut buf = CellBuffer::new(8, 4);
        buf.put_char(1, 0, '.', Color::Gray);
        let sprite = SpriteFrame::from_art("# \n##", Rgb(1, 2, 3));
        buf.draw_sprite(&viewport, &WorldRect::new(0.0, 0.0, 2.0, 2.0), &sprite);
        assert_eq!(buf.get(0, 0).map(|c| c.ch), Some('#'));
        assert_eq!(buf.get(1, 0).map(|c| c.ch), Some('.'));
        assert_eq!(buf.get(1, 1).map(|c| c.ch), Some('#'));
    }
}
