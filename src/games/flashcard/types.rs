//! Flashcard game parameters and state.

use super::canvas::Canvas;
use super::deck::Deck;
use crate::core::palette::{self, Rgb};
use serde::{Deserialize, Serialize};

/// Logical card size; mouse clicks arrive in these coordinates.
pub const CARD_WIDTH: f64 = 800.0;
pub const CARD_HEIGHT: f64 = 600.0;
/// Logical units per canvas pixel.
pub const CANVAS_SCALE: f64 = 5.0;
pub const CANVAS_WIDTH: u32 = (CARD_WIDTH / CANVAS_SCALE) as u32;
pub const CANVAS_HEIGHT: u32 = (CARD_HEIGHT / CANVAS_SCALE) as u32;

pub const CIRCLE_RADIUS: f64 = 60.0;
pub const FACE_WIDTH: f64 = 140.0;
pub const FACE_HEIGHT: f64 = 210.0;
/// Stand-in color when the face stamp image cannot be loaded.
pub const FACE_FALLBACK: Rgb = Rgb(255, 218, 185);

/// Cards drawn from the fresh sources per pile.
pub const SUBSAMPLE_SIZE: usize = 5;
/// Circle clicks between brush color changes.
pub const CLICKS_PER_COLOR: u32 = 5;

macro_rules! option_enum_impl {
    ($name:ident, $default:ident, [$(($variant:ident, $label:expr)),+ $(,)?]) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn from_index(index: usize) -> Self {
                Self::ALL.get(index).copied().unwrap_or($name::$default)
            }

            pub fn index(&self) -> usize {
                Self::ALL.iter().position(|v| v == self).unwrap_or(0)
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Next option, wrapping.
            pub fn next(&self) -> Self {
                Self::from_index((self.index() + 1) % Self::ALL.len())
            }

            /// Previous option, wrapping.
            pub fn prev(&self) -> Self {
                Self::from_index((self.index() + Self::ALL.len() - 1) % Self::ALL.len())
            }
        }
    };
}

/// How a key press picks the next card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Any key shows a random card from the pile.
    #[default]
    Normal,
    /// Walk the pile in order; Left goes back.
    NoRepeats,
    /// The card's letter must be typed to move on.
    Alphabet,
}

option_enum_impl!(
    Mode,
    Normal,
    [
        (Normal, "1 - Normal Mode"),
        (NoRepeats, "2 - No Repeats"),
        (Alphabet, "3 - Alphabet Only"),
    ]
);

/// Which colors the brush picks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchema {
    All,
    #[default]
    Primary,
    Black,
}

option_enum_impl!(
    ColorSchema,
    Primary,
    [
        (All, "1 - All colors"),
        (Primary, "2 - Primary colors"),
        (Black, "3 - Black"),
    ]
);

/// Options chosen in the play menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashcardParams {
    pub mode: Mode,
    pub color_schema: ColorSchema,
    pub face_stamp: bool,
    pub recycle_flashcards: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickButton {
    Left,
    Right,
    Middle,
}

/// Why a flashcard session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardResult {
    /// No fresh cards left for a new pile.
    Exhausted,
    Quit,
}

/// Main flashcard session state.
#[derive(Debug, Clone)]
pub struct FlashcardGame {
    pub params: FlashcardParams,
    pub deck: Deck,
    /// The card on screen with the marks made on it so far.
    pub card: Canvas,
    pub card_label: String,
    pub card_is_fallback: bool,
    /// Face stamp, scaled to canvas pixels. Present only when enabled.
    pub face: Option<Canvas>,
    pub mouse_counter: u32,
    pub brush: Rgb,
    pub cards_shown: u32,
    pub status: String,
    pub game_result: Option<FlashcardResult>,
    pub forfeit_pending: bool,
}

impl FlashcardGame {
    /// Start a session on a deck whose pile is already loaded.
    pub fn new(params: FlashcardParams, deck: Deck, face: Option<Canvas>) -> Self {
        let mut game = Self {
            params,
            deck,
            card: Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, palette::WHITE),
            card_label: String::new(),
            card_is_fallback: false,
            face: if params.face_stamp { face } else { None },
            mouse_counter: 0,
            brush: palette::BLACK,
            cards_shown: 0,
            status: String::new(),
            game_result: None,
            forfeit_pending: false,
        };
        game.show_current();
        game
    }

    /// Put a fresh copy of the deck's current card on screen.
    pub fn show_current(&mut self) {
        if let Some(card) = self.deck.current() {
            self.card = card.canvas.clone();
            self.card_label = card.label.clone();
            self.card_is_fallback = card.fallback;
            self.cards_shown += 1;
        }
    }

    /// Letter the player must type in alphabet mode.
    pub fn expected_letter(&self) -> Option<char> {
        self.deck.current().and_then(|c| c.letter)
    }
}

/// Convert a logical position to canvas pixels.
pub fn to_canvas(x: f64, y: f64) -> (i64, i64) {
    (
        (x / CANVAS_SCALE).floor() as i64,
        (y / CANVAS_SCALE).floor() as i64,
    )
}
