//! The four games and the dispatch layer that runs whichever is active.

pub mod blaster;
pub mod fighter;
pub mod flashcard;
pub mod shooter;

pub use blaster::{BlasterGame, BlasterInput};
pub use fighter::{FighterInput, FighterResult, TypeFighterGame};
pub use flashcard::{ClickButton, DeckError, FlashcardGame, FlashcardInput, FlashcardResult};
pub use shooter::{Direction, ShooterGame, ShooterInput, ShooterResult};

use crate::config::{LaunchOptions, Settings};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Flashcards,
    TypeFighter,
    Shooter,
    MathBlasters,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Flashcards,
        GameKind::TypeFighter,
        GameKind::Shooter,
        GameKind::MathBlasters,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Flashcards => "Flashcards",
            Self::TypeFighter => "Type Fighter",
            Self::Shooter => "Scrolling Shooter",
            Self::MathBlasters => "Math Blasters",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Self::Flashcards => "Picture cards to paint on. Any key shows the next card.",
            Self::TypeFighter => "Run, and press the right key when a monster appears.",
            Self::Shooter => "Move with WASD, click to shoot the bouncing blocks.",
            Self::MathBlasters => "Click anywhere to launch the ball toward it.",
        }
    }

    /// Command-line name.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "flashcards" | "flashcard" => Some(Self::Flashcards),
            "fighter" | "type-fighter" => Some(Self::TypeFighter),
            "shooter" => Some(Self::Shooter),
            "blaster" | "math-blasters" => Some(Self::MathBlasters),
            _ => None,
        }
    }
}

/// UI-agnostic input shared by every game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameInput {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Confirm,
    Cancel,
    /// Mouse click in the active game's world coordinates.
    Click { x: f64, y: f64, button: ClickButton },
    Other,
}

/// How a finished game ended, for the game-over overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Win,
    Loss,
    Forfeit,
    /// Ran its course (e.g. the deck ran out).
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub kind: OutcomeKind,
    pub title: &'static str,
    pub message: String,
}

/// The game currently on screen.
#[derive(Debug)]
pub enum ActiveGame {
    Flashcards(Box<FlashcardGame>),
    TypeFighter(Box<TypeFighterGame>),
    Shooter(ShooterGame),
    MathBlasters(BlasterGame),
}

/// Create a game with the current settings.
pub fn start_game<R: Rng>(
    kind: GameKind,
    settings: &Settings,
    options: &LaunchOptions,
    rng: &mut R,
) -> Result<ActiveGame, DeckError> {
    tracing::info!(game = kind.title(), "Starting game");
    let game = match kind {
        GameKind::Flashcards => {
            let params = settings.flashcards;
            let deck = flashcard::Deck::from_root(options.deck_root(settings));
            let face = params
                .face_stamp
                .then(|| flashcard::load_face_stamp(&settings.face_stamp_path));
            let game = flashcard::start_flashcards(params, deck, face, rng)?;
            ActiveGame::Flashcards(Box::new(game))
        }
        GameKind::TypeFighter => ActiveGame::TypeFighter(Box::new(TypeFighterGame::new(
            settings.fighter_gender,
            &settings.art_source(),
        ))),
        GameKind::Shooter => ActiveGame::Shooter(ShooterGame::new(rng)),
        GameKind::MathBlasters => ActiveGame::MathBlasters(BlasterGame::new()),
    };
    Ok(game)
}

impl ActiveGame {
    pub fn kind(&self) -> GameKind {
        match self {
            Self::Flashcards(_) => GameKind::Flashcards,
            Self::TypeFighter(_) => GameKind::TypeFighter,
            Self::Shooter(_) => GameKind::Shooter,
            Self::MathBlasters(_) => GameKind::MathBlasters,
        }
    }

    /// World size mouse clicks are mapped into.
    pub fn world_size(&self) -> (f64, f64) {
        match self {
            Self::Flashcards(_) => (flashcard::types::CARD_WIDTH, flashcard::types::CARD_HEIGHT),
            Self::TypeFighter(_) => (
                fighter::types::SCREEN_WIDTH,
                fighter::types::SCREEN_HEIGHT,
            ),
            Self::Shooter(_) => (shooter::types::SCREEN_WIDTH, shooter::types::SCREEN_HEIGHT),
            Self::MathBlasters(_) => (blaster::types::SCREEN_WIDTH, blaster::types::SCREEN_HEIGHT),
        }
    }

    pub fn handle_input<R: Rng>(&mut self, input: GameInput, rng: &mut R) {
        match self {
            Self::Flashcards(game) => {
                let input = match input {
                    GameInput::Char(c) => FlashcardInput::Key(c),
                    GameInput::Left => FlashcardInput::Previous,
                    GameInput::Click { x, y, button } => FlashcardInput::Click { x, y, button },
                    GameInput::Cancel => FlashcardInput::Forfeit,
                    _ => FlashcardInput::OtherKey,
                };
                flashcard::process_input(game, input, rng);
            }
            Self::TypeFighter(game) => {
                let input = match input {
                    GameInput::Char(c) => FighterInput::Key(c),
                    GameInput::Cancel => FighterInput::Forfeit,
                    _ => FighterInput::Other,
                };
                fighter::process_input(game, input);
            }
            Self::Shooter(game) => {
                let input = match input {
                    GameInput::Char(c) => match c.to_ascii_lowercase() {
                        'a' => ShooterInput::Move(Direction::Left),
                        'd' => ShooterInput::Move(Direction::Right),
                        'w' => ShooterInput::Move(Direction::Up),
                        's' => ShooterInput::Move(Direction::Down),
                        _ => ShooterInput::Other,
                    },
                    GameInput::Left => ShooterInput::Move(Direction::Left),
                    GameInput::Right => ShooterInput::Move(Direction::Right),
                    GameInput::Up => ShooterInput::Move(Direction::Up),
                    GameInput::Down => ShooterInput::Move(Direction::Down),
                    GameInput::Click { x, y, .. } => ShooterInput::Fire { x, y },
                    GameInput::Cancel => ShooterInput::Forfeit,
                    _ => ShooterInput::Other,
                };
                shooter::process_input(game, input);
            }
            Self::MathBlasters(game) => {
                let input = match input {
                    GameInput::Click { x, y, .. } => BlasterInput::Click { x, y },
                    GameInput::Cancel => BlasterInput::Exit,
                    _ => BlasterInput::Other,
                };
                blaster::process_input(game, input);
            }
        }
    }

    /// Advance by `dt_ms`. Returns true if anything changed on screen.
    pub fn tick(&mut self, dt_ms: u64) -> bool {
        match self {
            Self::Flashcards(_) => false,
            Self::TypeFighter(game) => fighter::tick_type_fighter(game, dt_ms),
            Self::Shooter(game) => shooter::tick_shooter(game, dt_ms),
            Self::MathBlasters(game) => blaster::tick_blaster(game, dt_ms),
        }
    }

    pub fn is_finished(&self) -> bool {
        match self {
            Self::Flashcards(game) => game.game_result.is_some(),
            Self::TypeFighter(game) => game.game_result.is_some(),
            Self::Shooter(game) => game.game_result.is_some(),
            Self::MathBlasters(game) => game.exited,
        }
    }

    /// Summary for the game-over overlay. `None` for games that simply close.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            Self::Flashcards(game) => match game.game_result? {
                FlashcardResult::Exhausted => Some(GameOutcome {
                    kind: OutcomeKind::Ended,
                    title: "Out of cards",
                    message: format!("{} cards shown. {}", game.cards_shown, game.status),
                }),
                FlashcardResult::Quit => None,
            },
            Self::TypeFighter(game) => {
                let summary = format!(
                    "{} successes, {} failures, {} health left",
                    game.successes, game.failures, game.fighter.health
                );
                let outcome = match game.game_result? {
                    FighterResult::Victory => GameOutcome {
                        kind: OutcomeKind::Win,
                        title: "Victory!",
                        message: summary,
                    },
                    FighterResult::Defeat if game.fighter.is_dead() => GameOutcome {
                        kind: OutcomeKind::Loss,
                        title: "Defeated",
                        message: summary,
                    },
                    FighterResult::Defeat => GameOutcome {
                        kind: OutcomeKind::Forfeit,
                        title: "Run abandoned",
                        message: summary,
                    },
                };
                Some(outcome)
            }
            Self::Shooter(game) => {
                let summary = format!("{} blocks destroyed with {} shots", game.kill_count, game.shots_fired);
                let (kind, title) = match game.game_result? {
                    ShooterResult::Cleared => (OutcomeKind::Win, "All blocks cleared!"),
                    ShooterResult::Died => (OutcomeKind::Loss, "You died!"),
                    ShooterResult::Forfeit => (OutcomeKind::Forfeit, "Game abandoned"),
                };
                Some(GameOutcome {
                    kind,
                    title,
                    message: summary,
                })
            }
            Self::MathBlasters(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn start(kind: GameKind) -> ActiveGame {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        start_game(kind, &Settings::default(), &LaunchOptions::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_parse_game_names() {
        assert_eq!(GameKind::parse("Shooter"), Some(GameKind::Shooter));
        assert_eq!(GameKind::parse("blaster"), Some(GameKind::MathBlasters));
        assert_eq!(GameKind::parse("fighter"), Some(GameKind::TypeFighter));
        assert_eq!(GameKind::parse("flashcards"), Some(GameKind::Flashcards));
        assert_eq!(GameKind::parse("chess"), None);
    }

    #[test]
    fn test_shooter_wasd_maps_to_moves() {
        let mut game = start(GameKind::Shooter);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        game.handle_input(GameInput::Char('D'), &mut rng);
        let ActiveGame::Shooter(ref s) = game else {
            panic!("expected shooter");
        };
        assert_eq!(s.queued_move, Some(Direction::Right));
    }

    #[test]
    fn test_blaster_cancel_finishes_without_outcome() {
        let mut game = start(GameKind::MathBlasters);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(!game.is_finished());
        game.handle_input(GameInput::Cancel, &mut rng);
        assert!(game.is_finished());
        assert!(game.outcome().is_none());
    }

    #[test]
    fn test_fighter_double_cancel_is_forfeit() {
        let mut game = start(GameKind::TypeFighter);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        game.handle_input(GameInput::Char(' '), &mut rng);
        game.handle_input(GameInput::Cancel, &mut rng);
        game.handle_input(GameInput::Cancel, &mut rng);
        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.kind, OutcomeKind::Forfeit);
    }

    #[test]
    fn test_flashcards_missing_deck_errors() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let options = LaunchOptions {
            debug: false,
            deck: Some("no/such/deck/anywhere".into()),
        };
        let result = start_game(GameKind::Flashcards, &Settings::default(), &options, &mut rng);
        assert!(matches!(result, Err(DeckError::Empty)));
    }

    #[test]
    fn test_world_sizes() {
        assert_eq!(start(GameKind::Shooter).world_size(), (900.0, 700.0));
        assert_eq!(start(GameKind::MathBlasters).world_size(), (1000.0, 800.0));
        assert_eq!(start(GameKind::TypeFighter).world_size(), (800.0, 600.0));
    }
}
