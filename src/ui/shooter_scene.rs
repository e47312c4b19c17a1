//! Scrolling Shooter rendering.

use super::cells::{scene_viewport, CellBuffer};
use super::game_common::{
    create_game_layout, render_forfeit_status_bar, render_info_panel_frame, render_status_bar,
    stat_line,
};
use crate::games::shooter::types::{ShooterGame, BLOCK_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH};
use ratatui::{layout::Rect, style::Color, widgets::Paragraph, Frame};

/// Render the shooter scene. Returns the playfield area.
pub fn render_shooter_scene(frame: &mut Frame, area: Rect, game: &ShooterGame) -> Rect {
    let layout = create_game_layout(frame, area, " Scrolling Shooter ", Color::LightBlue, 20);

    render_play_field(frame, layout.content, game);

    if !render_forfeit_status_bar(frame, layout.status_bar, game.forfeit_pending) {
        render_status_bar(
            frame,
            layout.status_bar,
            "Shoot the blocks!",
            Color::LightBlue,
            &[("[WASD]", "Move"), ("[Click]", "Fire"), ("[Esc]", "Quit")],
        );
    }

    render_info_panel(frame, layout.info_panel, game);
    layout.content
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &ShooterGame) {
    if area.width < 10 || area.height < 4 {
        return;
    }
    let viewport = scene_viewport(area, SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut buf = CellBuffer::new(area.width, area.height);

    // Background seam scrolling down the screen
    if game.seam_y < SCREEN_HEIGHT as i64 {
        let row = viewport.row_of(game.seam_y as f64);
        for col in (0..area.width as i32).step_by(2) {
            buf.put_char(col, row, '·', Color::Rgb(60, 60, 90));
        }
    }

    for block in &game.blocks {
        buf.fill_world_rect(&viewport, &block.rect, '█', block.color.to_ratatui());
    }
    for projectile in &game.projectiles {
        buf.fill_world_rect(
            &viewport,
            &projectile.rect,
            '│',
            projectile.color.to_ratatui(),
        );
    }
    buf.fill_world_rect(
        &viewport,
        &game.player.rect,
        '▲',
        game.player.color.to_ratatui(),
    );

    buf.render(frame, area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &ShooterGame) {
    let inner = render_info_panel_frame(frame, area);
    let lines = vec![
        stat_line("Kills: ", game.kill_count.to_string(), Color::White),
        stat_line(
            "Blocks: ",
            format!("{}/{}", game.blocks.len(), BLOCK_COUNT),
            Color::Red,
        ),
        stat_line("Shots: ", game.shots_fired.to_string(), Color::White),
        stat_line("In flight: ", game.projectiles.len().to_string(), Color::White),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
