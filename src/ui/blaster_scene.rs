//! Math Blasters rendering.

use super::cells::{scene_viewport, CellBuffer};
use super::game_common::{
    create_game_layout, render_info_panel_frame, render_status_bar, stat_line,
};
use crate::games::blaster::types::{BlasterGame, SCREEN_HEIGHT, SCREEN_WIDTH};
use ratatui::{layout::Rect, style::Color, widgets::Paragraph, Frame};

pub fn render_blaster_scene(frame: &mut Frame, area: Rect, game: &BlasterGame) -> Rect {
    let layout = create_game_layout(frame, area, " Math Blasters ", Color::LightGreen, 20);

    if layout.content.width >= 10 && layout.content.height >= 4 {
        let viewport = scene_viewport(layout.content, SCREEN_WIDTH, SCREEN_HEIGHT);
        let mut buf = CellBuffer::new(layout.content.width, layout.content.height);
        buf.fill_world_rect(&viewport, &game.origin_rect(), '○', Color::DarkGray);
        if game.ball_on_screen() {
            buf.fill_world_rect(&viewport, &game.ball_rect(), '●', Color::LightGreen);
        }
        buf.render(frame, layout.content);
    }

    render_status_bar(
        frame,
        layout.status_bar,
        "Click to launch",
        Color::LightGreen,
        &[("[Click]", "Launch"), ("[Esc]", "Back")],
    );

    let inner = render_info_panel_frame(frame, layout.info_panel);
    let lines = vec![
        stat_line("Shots: ", game.shots_fired.to_string(), Color::White),
        stat_line(
            "Speed: ",
            format!("({:.2}, {:.2})", game.speed.x, game.speed.y),
            Color::White,
        ),
        stat_line(
            "Ball: ",
            format!("({:.0}, {:.0})", game.ball.x, game.ball.y),
            Color::White,
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    layout.content
}
