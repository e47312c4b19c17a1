//! Flashcards: show picture cards, paint on them, and move on with a key.

pub mod canvas;
pub mod deck;
pub mod logic;
pub mod types;

pub use canvas::{AssetError, Canvas};
pub use deck::{discover_sources, Card, Deck, DeckError};
pub use logic::{draw_card, get_color, load_face_stamp, process_input, start_flashcards, FlashcardInput};
pub use types::{
    ClickButton, ColorSchema, FlashcardGame, FlashcardParams, FlashcardResult, Mode,
};
