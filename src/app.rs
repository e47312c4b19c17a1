//! Screen state machine shared by the terminal loop and the tests.

use crate::config::{LaunchOptions, Settings};
use crate::core::geometry::Viewport;
use crate::games::{self, ActiveGame, GameKind, GameOutcome};
use crate::input::{map_game_key, map_menu_key, map_mouse};
use crate::menu::{Launcher, MenuAction};
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};
use rand::Rng;

/// Whether the main loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub struct App {
    pub settings: Settings,
    pub options: LaunchOptions,
    pub launcher: Launcher,
    pub game: Option<ActiveGame>,
    /// Shown on the launcher after a game failed to start.
    pub notice: Option<String>,
    /// Terminal area the current game was last drawn into.
    pub game_area: Option<ratatui::layout::Rect>,
}

impl App {
    pub fn new(settings: Settings, options: LaunchOptions) -> Self {
        Self {
            settings,
            options,
            launcher: Launcher::new(),
            game: None,
            notice: None,
            game_area: None,
        }
    }

    /// Overlay to show for a finished game.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.game
            .as_ref()
            .filter(|g| g.is_finished())
            .and_then(|g| g.outcome())
    }

    pub fn start<R: Rng>(&mut self, kind: GameKind, rng: &mut R) {
        match games::start_game(kind, &self.settings, &self.options, rng) {
            Ok(game) => {
                self.notice = None;
                self.game = Some(game);
            }
            Err(e) => {
                tracing::warn!(game = kind.title(), error = %e, "Game failed to start");
                self.notice = Some(format!("{}: {}", kind.title(), e));
            }
        }
    }

    pub fn handle_event<R: Rng>(&mut self, event: Event, rng: &mut R) -> InputResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, rng),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse, rng);
                InputResult::Continue
            }
            _ => InputResult::Continue,
        }
    }

    fn handle_key<R: Rng>(&mut self, key: KeyEvent, rng: &mut R) -> InputResult {
        if let Some(game) = self.game.as_mut() {
            // Any key dismisses the game-over overlay
            if game.is_finished() {
                self.game = None;
                return InputResult::Continue;
            }
            game.handle_input(map_game_key(key), rng);
            self.close_if_done();
            return InputResult::Continue;
        }

        match self
            .launcher
            .process_input(map_menu_key(key), &mut self.settings)
        {
            MenuAction::Start(kind) => self.start(kind, rng),
            MenuAction::SettingsChanged => self.settings.save(),
            MenuAction::Quit => return InputResult::Quit,
            MenuAction::None => {}
        }
        InputResult::Continue
    }

    fn handle_mouse<R: Rng>(&mut self, mouse: MouseEvent, rng: &mut R) {
        let (Some(game), Some(area)) = (self.game.as_mut(), self.game_area) else {
            return;
        };
        if game.is_finished() {
            return;
        }
        let (world_width, world_height) = game.world_size();
        let viewport = Viewport::new(
            area.x,
            area.y,
            area.width,
            area.height,
            world_width,
            world_height,
        );
        if let Some(input) = map_mouse(mouse, &viewport) {
            game.handle_input(input, rng);
            self.close_if_done();
        }
    }

    /// Advance the running game. Returns true if a redraw is needed.
    pub fn tick(&mut self, dt_ms: u64) -> bool {
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        let changed = game.tick(dt_ms);
        self.close_if_done();
        changed
    }

    /// Games that end without an overlay go straight back to the launcher.
    fn close_if_done(&mut self) {
        if let Some(game) = &self.game {
            if game.is_finished() && game.outcome().is_none() {
                tracing::info!(game = game.kind().title(), "Back to launcher");
                self.game = None;
                self.game_area = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseButton, MouseEventKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn app() -> App {
        App::new(Settings::default(), LaunchOptions::default())
    }

    #[test]
    fn test_start_blaster_and_escape_back() {
        let mut app = app();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        app.start(GameKind::MathBlasters, &mut rng);
        assert!(app.game.is_some());
        app.handle_event(press(KeyCode::Esc), &mut rng);
        assert!(app.game.is_none());
    }

    #[test]
    fn test_click_reaches_game_through_area() {
        let mut app = app();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        app.start(GameKind::MathBlasters, &mut rng);
        app.game_area = Some(ratatui::layout::Rect::new(0, 0, 100, 40));
        app.handle_event(
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 50,
                row: 0,
                modifiers: KeyModifiers::NONE,
            }),
            &mut rng,
        );
        let Some(ActiveGame::MathBlasters(game)) = &app.game else {
            panic!("expected blaster");
        };
        assert_eq!(game.shots_fired, 1);
        assert!(game.speed.y < 0.0);
    }

    #[test]
    fn test_failed_flashcard_start_sets_notice() {
        let mut app = App::new(
            Settings::default(),
            LaunchOptions {
                debug: false,
                deck: Some("definitely/missing/deck".into()),
            },
        );
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        app.start(GameKind::Flashcards, &mut rng);
        assert!(app.game.is_none());
        assert!(app.notice.as_deref().unwrap_or("").contains("No flashcards found"));
    }

    #[test]
    fn test_overlay_dismissed_by_any_key() {
        let mut app = app();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        app.start(GameKind::Shooter, &mut rng);
        app.handle_event(press(KeyCode::Esc), &mut rng);
        app.handle_event(press(KeyCode::Esc), &mut rng);
        assert!(app.outcome().is_some());
        app.handle_event(press(KeyCode::Char('x')), &mut rng);
        assert!(app.game.is_none());
    }

    #[test]
    fn test_launcher_back_quits() {
        let mut app = app();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(app.handle_event(press(KeyCode::Esc), &mut rng), InputResult::Quit);
    }
}
