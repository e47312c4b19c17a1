//! End-to-end Type Fighter runs driven one physics step at a time.

use baby_games::core::constants::PHYSICS_TICK_MS;
use baby_games::games::fighter::{
    process_input, tick_type_fighter, ArtSource, FighterInput, FighterResult, FighterState,
    Gender, QtEvent, QteKind, TypeFighterGame,
};
use baby_games::games::{ActiveGame, OutcomeKind};

const MAX_STEPS: usize = 20_000;

fn start(game: &mut TypeFighterGame) {
    process_input(game, FighterInput::Key(' '));
    assert!(!game.waiting_to_start);
}

/// Tick until the run ends, pressing the prompted key when `answer` is set.
fn play(game: &mut TypeFighterGame, answer: bool) {
    for _ in 0..MAX_STEPS {
        if game.game_result.is_some() {
            return;
        }
        if answer && game.waiting_for_input {
            if let Some(key) = game.active_event().map(|e| e.key) {
                process_input(game, FighterInput::Key(key));
            }
        }
        tick_type_fighter(game, PHYSICS_TICK_MS);
    }
    panic!("run did not finish in {} steps", MAX_STEPS);
}

#[test]
fn test_answering_every_prompt_wins_unhurt() {
    let mut game = TypeFighterGame::new(Gender::Female, &ArtSource::Builtin);
    start(&mut game);
    play(&mut game, true);

    assert_eq!(game.game_result, Some(FighterResult::Victory));
    assert_eq!(game.successes, 3);
    assert_eq!(game.failures, 0);
    assert_eq!(game.fighter.health, 100);
    assert!(!game.fighter.is_jumping);
    assert_eq!(game.messages.len(), 3);
    assert!(game.messages.iter().all(|m| m.success));
}

#[test]
fn test_ignoring_prompts_costs_health_but_finishes() {
    let mut game = TypeFighterGame::new(Gender::Male, &ArtSource::Builtin);
    start(&mut game);
    play(&mut game, false);

    // 10 + 15 + 20 damage from the default script
    assert_eq!(game.game_result, Some(FighterResult::Victory));
    assert_eq!(game.failures, 3);
    assert_eq!(game.fighter.health, 55);
    assert_eq!(game.messages[0].text, "Missed the opening!");
}

#[test]
fn test_fatal_timeout_ends_in_defeat() {
    let events = vec![QtEvent::new(700.0, 'a', QteKind::Attack, 500)
        .with_messages("Hit", "Crushed")
        .with_damage(150)
        .with_trigger_distance(70.0)];
    let mut game = TypeFighterGame::with_events(Gender::Male, &ArtSource::Builtin, events);
    start(&mut game);
    play(&mut game, false);

    assert_eq!(game.game_result, Some(FighterResult::Defeat));
    assert_eq!(game.fighter.state, FighterState::Dead);
    assert_eq!(game.fighter.health, 0);

    let outcome = ActiveGame::TypeFighter(Box::new(game)).outcome().unwrap();
    assert_eq!(outcome.kind, OutcomeKind::Loss);
}

#[test]
fn test_wrong_key_fails_the_prompt() {
    let mut game = TypeFighterGame::new(Gender::Male, &ArtSource::Builtin);
    start(&mut game);
    for _ in 0..MAX_STEPS {
        if game.waiting_for_input {
            break;
        }
        tick_type_fighter(&mut game, PHYSICS_TICK_MS);
    }
    assert_eq!(game.prompt_text().as_deref(), Some("ATTACK: Press a"));

    process_input(&mut game, FighterInput::Key('z'));
    assert_eq!(game.failures, 1);
    assert_eq!(game.fighter.health, 90);
    assert!(!game.waiting_for_input);
}

#[test]
fn test_forfeit_is_a_defeat_but_not_a_loss() {
    let mut game = TypeFighterGame::new(Gender::Male, &ArtSource::Builtin);
    start(&mut game);
    process_input(&mut game, FighterInput::Forfeit);
    assert!(game.forfeit_pending);
    assert!(!tick_type_fighter(&mut game, 100));

    process_input(&mut game, FighterInput::Forfeit);
    assert_eq!(game.game_result, Some(FighterResult::Defeat));
    let outcome = ActiveGame::TypeFighter(Box::new(game)).outcome().unwrap();
    assert_eq!(outcome.kind, OutcomeKind::Forfeit);
}
