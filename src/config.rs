//! Persistent settings and per-launch options.

use crate::core::constants::SETTINGS_FILE;
use crate::games::fighter::{ArtSource, Gender};
use crate::games::flashcard::FlashcardParams;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings kept in ~/.baby_games/settings.json.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Last options chosen in the flashcard play menu.
    pub flashcards: FlashcardParams,
    pub deck_dir: PathBuf,
    /// Small deck used in debug mode.
    pub test_deck_dir: PathBuf,
    pub face_stamp_path: PathBuf,
    pub fighter_gender: Gender,
    /// Text-art sprite directory for Type Fighter; built-in art when unset.
    pub sprite_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            flashcards: FlashcardParams::default(),
            deck_dir: PathBuf::from("static/flashcards"),
            test_deck_dir: PathBuf::from("static/test/alphabet"),
            face_stamp_path: PathBuf::from("static/face.jpg"),
            fighter_gender: Gender::default(),
            sprite_dir: None,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        persistence::load_json_or_default(SETTINGS_FILE)
    }

    pub fn save(&self) {
        if let Err(e) = persistence::save_json(SETTINGS_FILE, self) {
            tracing::warn!(error = %e, "Could not save settings");
        }
    }

    pub fn art_source(&self) -> ArtSource {
        match &self.sprite_dir {
            Some(dir) => ArtSource::Directory(dir.clone()),
            None => ArtSource::Builtin,
        }
    }
}

/// Command-line choices that apply to one run only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub debug: bool,
    pub deck: Option<PathBuf>,
}

impl LaunchOptions {
    /// `DEBUG` in the environment also turns on debug mode.
    pub fn debug_from_env() -> bool {
        std::env::var_os("DEBUG").is_some_and(|v| !v.is_empty())
    }

    /// Deck to play: explicit `--deck`, else the test deck in debug mode,
    /// else the configured deck.
    pub fn deck_root<'a>(&'a self, settings: &'a Settings) -> &'a Path {
        if let Some(deck) = &self.deck {
            deck
        } else if self.debug {
            &settings.test_deck_dir
        } else {
            &settings.deck_dir
        }
    }
}
