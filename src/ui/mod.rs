mod blaster_scene;
pub mod cells;
mod fighter_scene;
mod flashcard_scene;
pub mod game_common;
mod menu_scene;
mod shooter_scene;

use crate::app::App;
use crate::build_info;
use crate::games::ActiveGame;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Draw the whole screen and remember where the game playfield landed so
/// mouse clicks can be mapped back into world coordinates.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    let outcome = app.outcome();
    let content = match app.game.as_ref() {
        Some(game) => Some(draw_game(frame, chunks[0], game)),
        None => {
            menu_scene::render_menu(frame, chunks[0], app);
            None
        }
    };
    app.game_area = content;

    if let (Some(outcome), Some(area)) = (outcome, content) {
        game_common::render_game_over_overlay(frame, area, &outcome);
    }

    draw_footer(frame, chunks[1]);
}

fn draw_game(frame: &mut Frame, area: Rect, game: &ActiveGame) -> Rect {
    match game {
        ActiveGame::Flashcards(game) => flashcard_scene::render_flashcard_scene(frame, area, game),
        ActiveGame::TypeFighter(game) => fighter_scene::render_fighter_scene(frame, area, game),
        ActiveGame::Shooter(game) => shooter_scene::render_shooter_scene(frame, area, game),
        ActiveGame::MathBlasters(game) => blaster_scene::render_blaster_scene(frame, area, game),
    }
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(build_info::version_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    frame.render_widget(footer, area);
}
