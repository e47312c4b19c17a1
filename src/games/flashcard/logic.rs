//! Flashcard game logic: card navigation per mode, painting and stamping.

use super::canvas::Canvas;
use super::deck::{Deck, DeckError};
use super::types::*;
use crate::core::palette::{self, Rgb};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;

/// UI-agnostic input actions for the flashcard game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlashcardInput {
    /// A printable key.
    Key(char),
    /// Left arrow: previous card in no-repeats mode.
    Previous,
    /// Any other key press.
    OtherKey,
    /// Mouse click in logical card coordinates.
    Click { x: f64, y: f64, button: ClickButton },
    Forfeit, // Esc
}

/// Load the face stamp, or a plain colored block when the image is unusable.
pub fn load_face_stamp(path: &Path) -> Canvas {
    let width = (FACE_WIDTH / CANVAS_SCALE) as u32;
    let height = (FACE_HEIGHT / CANVAS_SCALE) as u32;
    Canvas::load(path, width, height).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Face stamp unavailable, using a plain block");
        Canvas::new(width, height, FACE_FALLBACK)
    })
}

/// Build the first pile and start a session.
pub fn start_flashcards<R: Rng>(
    params: FlashcardParams,
    mut deck: Deck,
    face: Option<Canvas>,
    rng: &mut R,
) -> Result<FlashcardGame, DeckError> {
    deck.init_flashcards(rng)?;
    tracing::info!(mode = ?params.mode, schema = ?params.color_schema, "Flashcards started");
    Ok(FlashcardGame::new(params, deck, face))
}

/// Process player input.
pub fn process_input<R: Rng>(game: &mut FlashcardGame, input: FlashcardInput, rng: &mut R) {
    if game.game_result.is_some() {
        return;
    }

    match input {
        FlashcardInput::Forfeit => {
            if game.forfeit_pending {
                game.game_result = Some(FlashcardResult::Quit);
            } else {
                game.forfeit_pending = true;
            }
        }
        _ if game.forfeit_pending => {
            game.forfeit_pending = false;
        }
        FlashcardInput::Click { x, y, button } => handle_click(game, x, y, button, rng),
        key => {
            if let Err(e) = draw_card(game, key, rng) {
                tracing::warn!(error = %e, "Flashcards ended");
                game.status = e.to_string();
                game.game_result = Some(FlashcardResult::Exhausted);
            }
        }
    }
}

/// Pick the next card for a key press according to the mode.
pub fn draw_card<R: Rng>(
    game: &mut FlashcardGame,
    key: FlashcardInput,
    rng: &mut R,
) -> Result<(), DeckError> {
    match game.params.mode {
        Mode::NoRepeats => {
            if key == FlashcardInput::Previous {
                game.deck.draw_previous_card();
            } else {
                game.deck.draw_new_card(rng, game.params.recycle_flashcards)?;
            }
        }
        Mode::Normal => game.deck.draw_random_card(rng),
        Mode::Alphabet => {
            if let Some(expected) = game.expected_letter() {
                let matches = matches!(key, FlashcardInput::Key(c) if c.to_ascii_lowercase() == expected);
                if !matches {
                    tracing::debug!(expected = %expected, "Wrong letter");
                    return Ok(());
                }
            }
            game.deck.draw_new_card(rng, game.params.recycle_flashcards)?;
        }
    }
    game.show_current();
    game.status.clear();
    Ok(())
}

/// Brush color: an explicit color wins, otherwise the color schema decides.
pub fn get_color<R: Rng>(schema: ColorSchema, explicit: Option<Rgb>, rng: &mut R) -> Rgb {
    if let Some(color) = explicit {
        return color;
    }
    match schema {
        ColorSchema::Primary => palette::primary_colors()
            .choose(rng)
            .copied()
            .unwrap_or(palette::BLACK),
        ColorSchema::Black => palette::BLACK,
        ColorSchema::All => palette::ALL_COLORS
            .choose(rng)
            .map(|(_, c)| *c)
            .unwrap_or(palette::BLACK),
    }
}

fn handle_click<R: Rng>(
    game: &mut FlashcardGame,
    x: f64,
    y: f64,
    button: ClickButton,
    rng: &mut R,
) {
    let (cx, cy) = to_canvas(x, y);

    if let (Some(face), ClickButton::Left) = (&game.face, button) {
        game.card.blit(face, cx, cy);
        return;
    }

    if game.mouse_counter % CLICKS_PER_COLOR == 0 {
        game.brush = get_color(game.params.color_schema, None, rng);
        game.mouse_counter = 0;
    }
    game.mouse_counter += 1;

    let radius = (CIRCLE_RADIUS / CANVAS_SCALE) as i64;
    game.card.fill_circle(cx, cy, radius, game.brush);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::fs;

    fn alphabet_deck(letters: &str) -> (tempfile::TempDir, Deck) {
        let dir = tempfile::tempdir().unwrap();
        for c in letters.chars() {
            fs::write(dir.path().join(format!("{}.png", c)), "not really a png").unwrap();
        }
        let deck = Deck::from_root(dir.path());
        (dir, deck)
    }

    fn game_with(params: FlashcardParams, letters: &str) -> (tempfile::TempDir, FlashcardGame) {
        let (dir, deck) = alphabet_deck(letters);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let game = start_flashcards(params, deck, None, &mut rng).unwrap();
        (dir, game)
    }

    #[test]
    fn test_start_shows_first_card() {
        let (_dir, game) = game_with(FlashcardParams::default(), "abc");
        assert_eq!(game.deck.current_card_idx, 0);
        assert_eq!(game.card_label, "a");
        assert!(game.card_is_fallback);
        assert_eq!(game.cards_shown, 1);
    }

    #[test]
    fn test_start_on_empty_deck_fails() {
        let deck = Deck::new(Default::default());
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert!(matches!(
            start_flashcards(FlashcardParams::default(), deck, None, &mut rng),
            Err(DeckError::Empty)
        ));
    }

    #[test]
    fn test_norepeats_walks_and_goes_back() {
        let params = FlashcardParams {
            mode: Mode::NoRepeats,
            ..Default::default()
        };
        let (_dir, mut game) = game_with(params, "abc");
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        process_input(&mut game, FlashcardInput::Key('x'), &mut rng);
        assert_eq!(game.card_label, "b");
        process_input(&mut game, FlashcardInput::OtherKey, &mut rng);
        assert_eq!(game.card_label, "c");
        process_input(&mut game, FlashcardInput::Previous, &mut rng);
        assert_eq!(game.card_label, "b");
        process_input(&mut game, FlashcardInput::Previous, &mut rng);
        process_input(&mut game, FlashcardInput::Previous, &mut rng);
        assert_eq!(game.deck.current_card_idx, 0);
    }

    #[test]
    fn test_normal_mode_stays_in_pile() {
        let (_dir, mut game) = game_with(FlashcardParams::default(), "abcd");
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..30 {
            process_input(&mut game, FlashcardInput::OtherKey, &mut rng);
            assert!(game.deck.current_card_idx < 4);
        }
        assert_eq!(game.cards_shown, 31);
    }

    #[test]
    fn test_alphabet_requires_matching_letter() {
        let params = FlashcardParams {
            mode: Mode::Alphabet,
            ..Default::default()
        };
        let (_dir, mut game) = game_with(params, "ab");
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        process_input(&mut game, FlashcardInput::Key('z'), &mut rng);
        assert_eq!(game.card_label, "a");
        process_input(&mut game, FlashcardInput::OtherKey, &mut rng);
        assert_eq!(game.card_label, "a");

        process_input(&mut game, FlashcardInput::Key('A'), &mut rng);
        assert_eq!(game.card_label, "b");
    }

    #[test]
    fn test_exhausted_deck_ends_game() {
        let params = FlashcardParams {
            mode: Mode::NoRepeats,
            ..Default::default()
        };
        // Six cards: one pile of five, then only one fresh source left
        let (_dir, mut game) = game_with(params, "abcdef");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..4 {
            process_input(&mut game, FlashcardInput::OtherKey, &mut rng);
        }
        assert!(game.game_result.is_none());
        process_input(&mut game, FlashcardInput::OtherKey, &mut rng);
        assert_eq!(game.game_result, Some(FlashcardResult::Exhausted));
        assert!(game.status.starts_with("Not enough fresh flashcards left"));
    }

    #[test]
    fn test_color_changes_every_five_clicks() {
        let params = FlashcardParams {
            color_schema: ColorSchema::Black,
            ..Default::default()
        };
        let (_dir, mut game) = game_with(params, "a");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for i in 1..=6 {
            process_input(
                &mut game,
                FlashcardInput::Click {
                    x: 100.0,
                    y: 100.0,
                    button: ClickButton::Left,
                },
                &mut rng,
            );
            assert_eq!(game.mouse_counter, if i <= 5 { i } else { 1 });
        }
        assert_eq!(game.card.get(20, 20), Some(palette::BLACK));
    }

    #[test]
    fn test_circle_radius_on_canvas() {
        let params = FlashcardParams {
            color_schema: ColorSchema::Black,
            ..Default::default()
        };
        let (_dir, mut game) = game_with(params, "a");
        let background = game.card.get(0, 0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        process_input(
            &mut game,
            FlashcardInput::Click {
                x: 400.0,
                y: 300.0,
                button: ClickButton::Right,
            },
            &mut rng,
        );
        assert_eq!(game.card.get(80 + 12, 60), Some(palette::BLACK));
        assert_eq!(game.card.get(80 + 13, 60), Some(background));
    }

    #[test]
    fn test_marks_do_not_persist_into_pile() {
        let params = FlashcardParams {
            mode: Mode::NoRepeats,
            color_schema: ColorSchema::Black,
            ..Default::default()
        };
        let (_dir, mut game) = game_with(params, "ab");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let click = FlashcardInput::Click {
            x: 400.0,
            y: 300.0,
            button: ClickButton::Left,
        };
        process_input(&mut game, click, &mut rng);
        assert_eq!(game.card.get(80, 60), Some(palette::BLACK));

        process_input(&mut game, FlashcardInput::OtherKey, &mut rng);
        process_input(&mut game, FlashcardInput::Previous, &mut rng);
        assert_eq!(game.card_label, "a");
        assert_ne!(game.card.get(80, 60), Some(palette::BLACK));
    }

    #[test]
    fn test_face_stamp_on_left_click_only() {
        let params = FlashcardParams {
            face_stamp: true,
            color_schema: ColorSchema::Black,
            ..Default::default()
        };
        let (dir, deck) = alphabet_deck("a");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let face = load_face_stamp(&dir.path().join("missing_face.jpg"));
        assert_eq!((face.width(), face.height()), (28, 42));
        let mut game = start_flashcards(params, deck, Some(face), &mut rng).unwrap();

        process_input(
            &mut game,
            FlashcardInput::Click {
                x: 100.0,
                y: 100.0,
                button: ClickButton::Left,
            },
            &mut rng,
        );
        assert_eq!(game.card.get(20, 20), Some(FACE_FALLBACK));
        assert_eq!(game.card.get(20 + 27, 20 + 41), Some(FACE_FALLBACK));
        assert_eq!(game.mouse_counter, 0);

        process_input(
            &mut game,
            FlashcardInput::Click {
                x: 600.0,
                y: 400.0,
                button: ClickButton::Right,
            },
            &mut rng,
        );
        assert_eq!(game.card.get(120, 80), Some(palette::BLACK));
        assert_eq!(game.mouse_counter, 1);
    }

    #[test]
    fn test_get_color_explicit_wins() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let c = get_color(ColorSchema::All, Some(Rgb(1, 2, 3)), &mut rng);
        assert_eq!(c, Rgb(1, 2, 3));
        assert_eq!(get_color(ColorSchema::Black, None, &mut rng), palette::BLACK);
        let primaries = palette::primary_colors();
        for _ in 0..20 {
            assert!(primaries.contains(&get_color(ColorSchema::Primary, None, &mut rng)));
        }
    }

    #[test]
    fn test_forfeit_quits() {
        let (_dir, mut game) = game_with(FlashcardParams::default(), "a");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        process_input(&mut game, FlashcardInput::Forfeit, &mut rng);
        process_input(&mut game, FlashcardInput::OtherKey, &mut rng);
        assert!(!game.forfeit_pending);
        assert_eq!(game.cards_shown, 1);
        process_input(&mut game, FlashcardInput::Forfeit, &mut rng);
        process_input(&mut game, FlashcardInput::Forfeit, &mut rng);
        assert_eq!(game.game_result, Some(FlashcardResult::Quit));
    }
}
