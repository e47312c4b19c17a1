//! Flashcards rendering.
//!
//! The paint canvas is drawn with upper half blocks: each terminal cell shows
//! two canvas samples, the top one as foreground and the bottom one as
//! background.

use super::cells::{Cell, CellBuffer};
use super::game_common::{
    create_game_layout, render_forfeit_status_bar, render_info_panel_frame, render_status_bar,
    stat_line,
};
use crate::games::flashcard::{Canvas, FlashcardGame, Mode};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_flashcard_scene(frame: &mut Frame, area: Rect, game: &FlashcardGame) -> Rect {
    let layout = create_game_layout(frame, area, " Flashcards ", Color::Yellow, 24);

    if layout.content.width >= 4 && layout.content.height >= 2 {
        let mut buf = canvas_cells(&game.card, layout.content.width, layout.content.height);
        if game.card_is_fallback {
            let col = (layout.content.width as i32 - game.card_label.chars().count() as i32) / 2;
            buf.put_str(col, layout.content.height as i32 / 2, &game.card_label, Color::Black);
        }
        buf.render(frame, layout.content);
    }

    if !render_forfeit_status_bar(frame, layout.status_bar, game.forfeit_pending) {
        let hint = match (game.params.mode, game.expected_letter()) {
            (Mode::Alphabet, Some(letter)) => format!("Type {}", letter.to_ascii_uppercase()),
            _ => game.status.clone(),
        };
        render_status_bar(
            frame,
            layout.status_bar,
            &hint,
            Color::Yellow,
            &[("[Key]", "Next"), ("[Click]", "Paint"), ("[Esc]", "Quit")],
        );
    }

    render_info_panel(frame, layout.info_panel, game);
    layout.content
}

/// Sample the canvas nearest-neighbour onto `width x height` cells.
fn canvas_cells(canvas: &Canvas, width: u16, height: u16) -> CellBuffer {
    let mut buf = CellBuffer::new(width, height);
    let pixel_rows = height as u32 * 2;
    let sample = |col: u16, pixel_row: u32| -> Color {
        let x = (col as u32 * canvas.width()) / width as u32;
        let y = (pixel_row * canvas.height()) / pixel_rows;
        canvas
            .get(x, y)
            .map(|rgb| rgb.to_ratatui())
            .unwrap_or(Color::Reset)
    };
    for row in 0..height {
        for col in 0..width {
            let top = sample(col, row as u32 * 2);
            let bottom = sample(col, row as u32 * 2 + 1);
            buf.put(
                col as i32,
                row as i32,
                Cell {
                    ch: '▀',
                    fg: top,
                    bg: bottom,
                },
            );
        }
    }
    buf
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlashcardGame) {
    let inner = render_info_panel_frame(frame, area);
    let lines = vec![
        Line::from(Span::styled(
            game.card_label.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        stat_line("Mode: ", game.params.mode.name(), Color::White),
        stat_line("Colors: ", game.params.color_schema.name(), Color::White),
        stat_line("Cards: ", game.cards_shown.to_string(), Color::White),
        stat_line(
            "Fresh: ",
            game.deck.fresh_sources.len().to_string(),
            Color::White,
        ),
        stat_line("Brush: ", "██", game.brush.to_ratatui()),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::Rgb;

    #[test]
    fn test_canvas_cells_split_top_and_bottom() {
        let mut canvas = Canvas::new(4, 4, Rgb(255, 255, 255));
        canvas.fill_rect(0, 2, 4, 2, Rgb(0, 0, 0));
        let buf = canvas_cells(&canvas, 4, 1);
        let cell = buf.get(0, 0).unwrap();
        assert_eq!(cell.fg, Color::Rgb(255, 255, 255));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_canvas_cells_scale_down() {
        let mut canvas = Canvas::new(160, 120, Rgb(255, 255, 255));
        canvas.fill_rect(80, 0, 80, 120, Rgb(255, 0, 0));
        let buf = canvas_cells(&canvas, 40, 15);
        assert_eq!(buf.get(0, 7).unwrap().fg, Color::Rgb(255, 255, 255));
        assert_eq!(buf.get(39, 7).unwrap().bg, Color::Rgb(255, 0, 0));
    }
}
