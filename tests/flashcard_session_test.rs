//! Flashcard sessions over real image decks on disk.

use baby_games::games::flashcard::types::{CANVAS_HEIGHT, CANVAS_WIDTH, FACE_FALLBACK};
use baby_games::games::flashcard::{
    discover_sources, process_input, start_flashcards, Canvas, ClickButton, Deck, FlashcardGame,
    FlashcardInput, FlashcardParams, FlashcardResult, Mode,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;

/// Write `count` solid-color PNGs named card_00.png, card_01.png, ...
fn write_deck(dir: &Path, count: usize) {
    for i in 0..count {
        let shade = (i * 20) as u8;
        let img = image::RgbImage::from_pixel(8, 6, image::Rgb([200, shade, 10]));
        img.save(dir.join(format!("card_{:02}.png", i))).unwrap();
    }
}

fn session(
    params: FlashcardParams,
    cards: usize,
    face: Option<Canvas>,
) -> (tempfile::TempDir, FlashcardGame) {
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), cards);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let game = start_flashcards(params, Deck::from_root(dir.path()), face, &mut rng).unwrap();
    (dir, game)
}

fn click(x: f64, y: f64, button: ClickButton) -> FlashcardInput {
    FlashcardInput::Click { x, y, button }
}

#[test]
fn test_hidden_entries_are_not_cards() {
    let dir = tempfile::tempdir().unwrap();
    write_deck(dir.path(), 1);
    std::fs::write(dir.path().join(".DS_Store"), "x").unwrap();
    let thumbs = dir.path().join(".thumbs");
    let animals = dir.path().join("animals");
    std::fs::create_dir_all(&thumbs).unwrap();
    std::fs::create_dir_all(&animals).unwrap();
    write_deck(&thumbs, 2);
    std::fs::write(animals.join(".gitkeep"), "").unwrap();

    let sources = discover_sources(dir.path());
    assert_eq!(sources.len(), 1);
    assert!(sources.contains(&dir.path().join("card_00.png")));
}

#[test]
fn test_images_decode_at_canvas_size() {
    let (_dir, game) = session(FlashcardParams::default(), 3, None);
    assert!(!game.card_is_fallback);
    assert_eq!(game.card.width(), CANVAS_WIDTH);
    assert_eq!(game.card.height(), CANVAS_HEIGHT);
    let pixel = game.card.get(CANVAS_WIDTH / 2, CANVAS_HEIGHT / 2).unwrap();
    assert_eq!(pixel.0, 200);
    assert_eq!(pixel.2, 10);
}

#[test]
fn test_no_repeats_runs_out_after_two_piles() {
    let params = FlashcardParams {
        mode: Mode::NoRepeats,
        ..Default::default()
    };
    // 12 sources subsampled 5 at a time: two piles fit, the third does not
    let (_dir, mut game) = session(params, 12, None);
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut seen = vec![game.card_label.clone()];

    for _ in 0..9 {
        process_input(&mut game, FlashcardInput::Key('n'), &mut rng);
        assert!(game.game_result.is_none());
        seen.push(game.card_label.clone());
    }
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 10, "no card repeats across piles");
    assert_eq!(game.deck.fresh_sources.len(), 2);

    process_input(&mut game, FlashcardInput::Key('n'), &mut rng);
    assert_eq!(game.game_result, Some(FlashcardResult::Exhausted));
    assert_eq!(
        game.status,
        "Not enough fresh flashcards left (2 remaining, 5 needed)"
    );
    assert_eq!(game.cards_shown, 10);
}

#[test]
fn test_recycle_reshuffles_instead_of_drawing_fresh() {
    let params = FlashcardParams {
        mode: Mode::NoRepeats,
        recycle_flashcards: true,
        ..Default::default()
    };
    let (_dir, mut game) = session(params, 12, None);
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..30 {
        process_input(&mut game, FlashcardInput::OtherKey, &mut rng);
    }
    assert!(game.game_result.is_none());
    assert_eq!(game.deck.fresh_sources.len(), 7);
    assert_eq!(game.deck.pile.len(), 5);
}

#[test]
fn test_brush_changes_every_five_clicks() {
    let (_dir, mut game) = session(FlashcardParams::default(), 3, None);
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    process_input(&mut game, click(400.0, 300.0, ClickButton::Left), &mut rng);
    assert_eq!(game.mouse_counter, 1);
    assert_eq!(game.card.get(80, 60), Some(game.brush));
    // Radius 60 world units is 12 canvas pixels
    assert_eq!(game.card.get(92, 60), Some(game.brush));

    for _ in 0..4 {
        process_input(&mut game, click(10.0, 10.0, ClickButton::Right), &mut rng);
    }
    assert_eq!(game.mouse_counter, 5);
    process_input(&mut game, click(10.0, 10.0, ClickButton::Middle), &mut rng);
    assert_eq!(game.mouse_counter, 1);
}

#[test]
fn test_face_stamp_on_left_click_paint_on_right() {
    let face = Canvas::new(28, 42, FACE_FALLBACK);
    let (_dir, mut game) = session(FlashcardParams::default(), 3, Some(face));
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    process_input(&mut game, click(100.0, 100.0, ClickButton::Left), &mut rng);
    assert_eq!(game.card.get(20, 20), Some(FACE_FALLBACK));
    assert_eq!(game.card.get(47, 61), Some(FACE_FALLBACK));
    assert_eq!(game.mouse_counter, 0);

    process_input(&mut game, click(700.0, 500.0, ClickButton::Right), &mut rng);
    assert_eq!(game.mouse_counter, 1);
    assert_eq!(game.card.get(140, 100), Some(game.brush));
}

#[test]
fn test_alphabet_mode_waits_for_matching_letter() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["apple", "ball", "cat"] {
        std::fs::write(dir.path().join(format!("{}.png", name)), b"broken").unwrap();
    }
    let params = FlashcardParams {
        mode: Mode::Alphabet,
        recycle_flashcards: true,
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut game = start_flashcards(params, Deck::from_root(dir.path()), None, &mut rng).unwrap();
    assert_eq!(game.card_label, "apple");
    assert!(game.card_is_fallback);

    process_input(&mut game, FlashcardInput::Key('x'), &mut rng);
    assert_eq!(game.card_label, "apple");
    process_input(&mut game, FlashcardInput::Key('A'), &mut rng);
    assert_eq!(game.card_label, "ball");
    assert_eq!(game.expected_letter(), Some('b'));
}
