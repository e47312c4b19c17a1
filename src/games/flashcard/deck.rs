//! Flashcard sources, pile sampling and card navigation.

use super::canvas::Canvas;
use super::types::{CANVAS_HEIGHT, CANVAS_WIDTH, SUBSAMPLE_SIZE};
use crate::core::palette::{self, Rgb};
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("Not enough fresh flashcards left ({available} remaining, {needed} needed)")]
    Exhausted { needed: usize, available: usize },
    #[error("No flashcards found")]
    Empty,
}

/// One loaded card.
#[derive(Debug, Clone)]
pub struct Card {
    pub source: PathBuf,
    /// File stem, shown on fallback cards.
    pub label: String,
    /// First alphanumeric character of the label, lower-cased.
    pub letter: Option<char>,
    pub canvas: Canvas,
    /// True when the image could not be decoded.
    pub fallback: bool,
}

impl Card {
    /// Load a card image. An unreadable file becomes a plain colored card.
    pub fn load(path: &Path) -> Self {
        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        match Canvas::load(path, CANVAS_WIDTH, CANVAS_HEIGHT) {
            Ok(canvas) => Self::with_canvas(path, label, canvas, false),
            Err(e) => {
                tracing::warn!(error = %e, "Using fallback flashcard");
                let canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, fallback_color(&label));
                Self::with_canvas(path, label, canvas, true)
            }
        }
    }

    fn with_canvas(path: &Path, label: String, canvas: Canvas, fallback: bool) -> Self {
        let letter = card_letter(&label);
        Self {
            source: path.to_path_buf(),
            label,
            letter,
            canvas,
            fallback,
        }
    }
}

pub fn card_letter(label: &str) -> Option<char> {
    label
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
}

/// Stable background for a fallback card, picked from the named colors.
fn fallback_color(label: &str) -> Rgb {
    let sum: usize = label.bytes().map(usize::from).sum();
    palette::ALL_COLORS
        .get(sum % palette::ALL_COLORS.len())
        .map(|(_, c)| *c)
        .unwrap_or(palette::WHITE)
}

/// Regular files one or two levels below `root`. Hidden entries are skipped.
pub fn discover_sources(root: &Path) -> BTreeSet<PathBuf> {
    let mut sources = BTreeSet::new();
    let Ok(entries) = fs::read_dir(root) else {
        tracing::warn!(root = %root.display(), "Flashcard directory not readable");
        return sources;
    };
    for path in visible_entries(entries) {
        if path.is_file() {
            sources.insert(path);
        } else if path.is_dir() {
            if let Ok(inner) = fs::read_dir(&path) {
                sources.extend(visible_entries(inner).filter(|p| p.is_file()));
            }
        }
    }
    sources
}

fn visible_entries(entries: fs::ReadDir) -> impl Iterator<Item = PathBuf> {
    entries
        .flatten()
        .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
        .map(|e| e.path())
}

/// The card pile and the sources not yet used for a pile.
#[derive(Debug, Clone)]
pub struct Deck {
    pub sources: BTreeSet<PathBuf>,
    pub fresh_sources: BTreeSet<PathBuf>,
    pub pile: Vec<Card>,
    pub current_card_idx: usize,
}

impl Deck {
    pub fn new(sources: BTreeSet<PathBuf>) -> Self {
        Self {
            fresh_sources: sources.clone(),
            sources,
            pile: Vec::new(),
            current_card_idx: 0,
        }
    }

    pub fn from_root(root: &Path) -> Self {
        let sources = discover_sources(root);
        tracing::info!(root = %root.display(), count = sources.len(), "Flashcard sources found");
        Self::new(sources)
    }

    /// Build a new pile.
    ///
    /// Large decks are subsampled from the fresh sources, which shrink with
    /// every pile. Small decks always use every source.
    pub fn init_flashcards<R: Rng>(&mut self, rng: &mut R) -> Result<(), DeckError> {
        let chosen: Vec<PathBuf> = if self.sources.len() > SUBSAMPLE_SIZE {
            if self.fresh_sources.len() < SUBSAMPLE_SIZE {
                return Err(DeckError::Exhausted {
                    needed: SUBSAMPLE_SIZE,
                    available: self.fresh_sources.len(),
                });
            }
            let picked: Vec<PathBuf> = self
                .fresh_sources
                .iter()
                .cloned()
                .choose_multiple(rng, SUBSAMPLE_SIZE);
            for path in &picked {
                self.fresh_sources.remove(path);
            }
            picked
        } else if self.sources.is_empty() {
            return Err(DeckError::Empty);
        } else {
            self.sources.iter().cloned().collect()
        };

        self.pile = chosen.iter().map(|p| Card::load(p)).collect();
        self.current_card_idx = 0;
        tracing::debug!(
            pile = self.pile.len(),
            fresh = self.fresh_sources.len(),
            "New flashcard pile"
        );
        Ok(())
    }

    pub fn current(&self) -> Option<&Card> {
        self.pile.get(self.current_card_idx)
    }

    /// Step forward. Past the end the pile is reshuffled (`recycle`) or
    /// replaced by a fresh one.
    pub fn draw_new_card<R: Rng>(&mut self, rng: &mut R, recycle: bool) -> Result<(), DeckError> {
        self.current_card_idx += 1;
        if self.current_card_idx >= self.pile.len() {
            if recycle {
                tracing::info!("Out of cards, reshuffling the flash card pile");
                self.pile.shuffle(rng);
            } else {
                tracing::info!("Out of cards, creating a new flash card pile");
                self.init_flashcards(rng)?;
            }
            self.current_card_idx = 0;
        }
        Ok(())
    }

    /// Step back, stopping at the first card.
    pub fn draw_previous_card(&mut self) {
        self.current_card_idx = self.current_card_idx.saturating_sub(1);
    }

    /// Jump to a uniformly random card in the pile.
    pub fn draw_random_card<R: Rng>(&mut self, rng: &mut R) {
        if !self.pile.is_empty() {
            self.current_card_idx = rng.gen_range(0..self.pile.len());
        }
    }
}
