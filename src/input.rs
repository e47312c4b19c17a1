//! Terminal event mapping: crossterm keys and mouse clicks to menu and game inputs.

use crate::core::geometry::Viewport;
use crate::games::{ClickButton, GameInput};
use crate::menu::MenuInput;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

pub fn map_menu_key(key: KeyEvent) -> MenuInput {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => MenuInput::Up,
        KeyCode::Down | KeyCode::Char('j') => MenuInput::Down,
        KeyCode::Left => MenuInput::Left,
        KeyCode::Right => MenuInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => MenuInput::Select,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => MenuInput::Back,
        _ => MenuInput::Other,
    }
}

pub fn map_game_key(key: KeyEvent) -> GameInput {
    match key.code {
        KeyCode::Char(c) => GameInput::Char(c),
        KeyCode::Left => GameInput::Left,
        KeyCode::Right => GameInput::Right,
        KeyCode::Up => GameInput::Up,
        KeyCode::Down => GameInput::Down,
        KeyCode::Enter => GameInput::Confirm,
        KeyCode::Esc => GameInput::Cancel,
        _ => GameInput::Other,
    }
}

/// A mouse press inside the game area, in world coordinates.
///
/// Releases, drags, scrolls and presses outside the viewport yield `None`.
pub fn map_mouse(mouse: MouseEvent, viewport: &Viewport) -> Option<GameInput> {
    let MouseEventKind::Down(button) = mouse.kind else {
        return None;
    };
    let button = match button {
        MouseButton::Left => ClickButton::Left,
        MouseButton::Right => ClickButton::Right,
        MouseButton::Middle => ClickButton::Middle,
    };
    let (x, y) = viewport.to_world(mouse.column, mouse.row)?;
    Some(GameInput::Click { x, y, button })
}
