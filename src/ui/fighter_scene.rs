//! Type Fighter rendering: scrolling backdrop, fighter, monsters and the
//! quick-time prompt.

use super::cells::{scene_viewport, Cell, CellBuffer};
use super::game_common::{
    create_game_layout, render_forfeit_status_bar, render_info_panel_frame, render_status_bar,
    stat_line,
};
use crate::core::geometry::Rect as WorldRect;
use crate::games::fighter::types::{
    TypeFighterGame, FIGHTER_GROUND_Y, FIGHTER_HEIGHT, FIGHTER_MAX_HEALTH, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY: Color = Color::Rgb(20, 24, 40);
const GROUND: Color = Color::Rgb(60, 45, 30);
/// World spacing of the backdrop pillars.
const PILLAR_SPACING: f64 = 160.0;

/// Render the Type Fighter scene. Returns the playfield area.
pub fn render_fighter_scene(frame: &mut Frame, area: Rect, game: &TypeFighterGame) -> Rect {
    let layout = create_game_layout(frame, area, " Type Fighter ", Color::LightMagenta, 24);

    render_play_field(frame, layout.content, game);
    if game.waiting_to_start {
        render_centered(frame, layout.content, "[ Press Space to Start ]", Color::White);
    }
    render_status(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
    layout.content
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &TypeFighterGame) {
    if area.width < 10 || area.height < 4 {
        return;
    }
    let viewport = scene_viewport(area, SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut buf = CellBuffer::new(area.width, area.height);

    // Sky above the ground line, dirt below
    let ground_row = viewport.row_of(FIGHTER_GROUND_Y + FIGHTER_HEIGHT as f64);
    for row in 0..area.height as i32 {
        let bg = if row >= ground_row { GROUND } else { SKY };
        buf.fill_row(
            row,
            Cell {
                ch: ' ',
                fg: Color::Reset,
                bg,
            },
        );
    }

    // Pillars scroll with background_x and repeat every background width
    let mut x = game.background_x.rem_euclid(PILLAR_SPACING) - PILLAR_SPACING;
    while x < SCREEN_WIDTH {
        let col = viewport.column_of(x);
        for row in viewport.row_of(FIGHTER_GROUND_Y - 80.0)..ground_row {
            buf.put_char(col, row, '┃', Color::Rgb(70, 70, 100));
        }
        x += PILLAR_SPACING;
    }
    for col in 0..area.width as i32 {
        buf.put_char(col, ground_row, '▀', Color::Rgb(110, 85, 55));
    }

    for (sprite, screen_x) in game.visible_sprites() {
        let rect = WorldRect {
            x: screen_x,
            ..sprite.rect
        };
        buf.draw_sprite(&viewport, &rect, &sprite.frame());
    }

    buf.draw_sprite(&viewport, &game.fighter.rect, &game.fighter.frame());

    if let Some(prompt) = game.prompt_text() {
        let secs = game.time_remaining_secs().unwrap_or(0.0);
        let text = format!(" {}  ({:.1}s) ", prompt, secs);
        let col = (area.width as i32 - text.chars().count() as i32) / 2;
        buf.put_str(col, 1, &text, Color::Yellow);
    }

    buf.render(frame, area);
}

fn render_status(frame: &mut Frame, area: Rect, game: &TypeFighterGame) {
    if game.waiting_to_start {
        render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightMagenta,
            &[("[Space]", "Start"), ("[Esc]", "Quit")],
        );
        return;
    }
    if render_forfeit_status_bar(frame, area, game.forfeit_pending) {
        return;
    }
    let (text, color) = match game.prompt_text() {
        Some(prompt) => (prompt, Color::Yellow),
        None => ("Running...".to_string(), Color::LightMagenta),
    };
    render_status_bar(frame, area, &text, color, &[("[Key]", "Answer"), ("[Esc]", "Quit")]);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &TypeFighterGame) {
    let inner = render_info_panel_frame(frame, area);
    let health_color = if game.fighter.health * 3 < FIGHTER_MAX_HEALTH {
        Color::Red
    } else {
        Color::Green
    };

    let mut lines = vec![
        stat_line(
            "Health: ",
            format!("{}/{}", game.fighter.health, FIGHTER_MAX_HEALTH),
            health_color,
        ),
        stat_line(
            "Events: ",
            format!("{}/{}", game.resolved_count(), game.events.len()),
            Color::White,
        ),
        stat_line("Hits: ", game.successes.to_string(), Color::Green),
        stat_line("Misses: ", game.failures.to_string(), Color::Red),
        stat_line("State: ", game.fighter.state.name(), Color::White),
        Line::from(""),
    ];
    for message in game.messages.iter().rev() {
        let color = if message.success {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(Span::styled(
            message.text.as_str(),
            Style::default().fg(color),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_centered(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    if area.height < 3 || area.width < text.len() as u16 {
        return;
    }
    let x = area.x + (area.width - text.len() as u16) / 2;
    let y = area.y + area.height / 2;
    let line = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(line, Rect::new(x, y, text.len() as u16, 1));
}
