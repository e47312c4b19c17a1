//! Type Fighter game logic: prompt scheduling, timeouts, resolution, scrolling.

use super::types::*;
use crate::core::constants::{MAX_FRAME_DT_MS, PHYSICS_TICK_MS};

/// UI-agnostic input actions for Type Fighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FighterInput {
    /// A typed character (also Space, which starts the run).
    Key(char),
    Forfeit, // Esc
    Other,
}

/// Process player input.
pub fn process_input(game: &mut TypeFighterGame, input: FighterInput) {
    if game.game_result.is_some() {
        return;
    }

    if game.waiting_to_start {
        if input == FighterInput::Key(' ') {
            game.waiting_to_start = false;
            game.fighter.set_state(FighterState::Walking);
            tracing::info!("Type Fighter run started");
        }
        return;
    }

    match input {
        FighterInput::Forfeit => {
            if game.forfeit_pending {
                game.game_result = Some(FighterResult::Defeat);
            } else {
                game.forfeit_pending = true;
            }
        }
        _ if game.forfeit_pending => {
            game.forfeit_pending = false;
        }
        FighterInput::Key(c) => {
            let Some(expected) = game.active_event().map(|e| e.key) else {
                return;
            };
            if !game.waiting_for_input {
                return;
            }
            if c == expected {
                handle_event_success(game);
            } else {
                tracing::debug!(pressed = %c, expected = %expected, "Wrong key for prompt");
                handle_event_failure(game);
            }
        }
        FighterInput::Other => {}
    }
}

/// Advance Type Fighter. `dt_ms` is milliseconds since the last call.
///
/// Steps the world in fixed 16ms increments. Returns true if anything moved.
pub fn tick_type_fighter(game: &mut TypeFighterGame, dt_ms: u64) -> bool {
    if game.game_result.is_some() || game.waiting_to_start || game.forfeit_pending {
        return false;
    }

    game.accumulated_time_ms += dt_ms.min(MAX_FRAME_DT_MS);
    let mut changed = false;

    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        step(game);
        changed = true;

        if game.game_result.is_some() {
            break;
        }
    }

    changed
}

/// One 16ms frame.
fn step(game: &mut TypeFighterGame) {
    game.clock_ms += PHYSICS_TICK_MS;
    let now = game.clock_ms;

    if game.fighter.is_dead() {
        // A fighter killed mid-jump still falls
        game.fighter.update_physics();
        game.fighter.animate(now);
        if now >= game.animation_timer_ms && !game.fighter.is_jumping {
            game.game_result = Some(FighterResult::Defeat);
        }
        return;
    }

    handle_animation_completion(game);

    if should_trigger_next(game) {
        let index = game.current_event_index;
        show_prompt(game, index);
        game.current_event_index += 1;
    }

    if check_prompt_timeout(game) {
        tracing::debug!("Prompt timed out");
        handle_event_failure(game);
    }

    update_world(game);

    // Physics run regardless of whether the world is scrolling
    game.fighter.update_physics();

    game.fighter.animate(now);
    for event in &mut game.events {
        if let Some(sprite) = event.sprite.as_mut() {
            sprite.animate(now);
        }
    }

    if game.fighter.is_dead() {
        return;
    }

    if game.game_result.is_none() && run_complete(game) {
        tracing::info!(
            successes = game.successes,
            failures = game.failures,
            "Type Fighter run complete"
        );
        game.game_result = Some(FighterResult::Victory);
    }
}

/// True when the next event is in range and nothing else is in progress.
fn should_trigger_next(game: &TypeFighterGame) -> bool {
    if game.waiting_for_input || !game.animation_complete {
        return false;
    }
    let Some(event) = game.events.get(game.current_event_index) else {
        return false;
    };
    game.world_offset >= event.position - game.fighter.rect.x - event.trigger_distance
}

/// Put an event's prompt on screen and stop the fighter.
pub fn show_prompt(game: &mut TypeFighterGame, index: usize) {
    game.waiting_for_input = true;
    game.current_event = Some(index);
    game.prompt_start_ms = game.clock_ms;
    game.fighter.moving = false;
    game.fighter.set_state(FighterState::Typing);
    if let Some(event) = game.events.get(index) {
        tracing::debug!(key = %event.key, kind = event.kind.name(), "Prompt shown");
    }
}

/// True once the active prompt has been up for longer than its time limit.
pub fn check_prompt_timeout(game: &TypeFighterGame) -> bool {
    if !game.waiting_for_input {
        return false;
    }
    let Some(event) = game.active_event() else {
        return false;
    };
    game.clock_ms.saturating_sub(game.prompt_start_ms) > event.time_limit_ms
}

/// Lock the world for `duration_ms` while a resolution animation plays.
pub fn start_animation(game: &mut TypeFighterGame, duration_ms: u64) {
    game.animation_complete = false;
    game.animation_timer_ms = game.clock_ms + duration_ms;
}

/// Finish a resolution animation once its timer expires and resume the run.
pub fn handle_animation_completion(game: &mut TypeFighterGame) {
    if game.animation_complete || game.clock_ms < game.animation_timer_ms {
        return;
    }
    game.animation_complete = true;
    game.fighter.moving = true;
    // A jump lands on its own
    if !game.fighter.is_jumping {
        game.fighter.set_state(FighterState::Walking);
    }
}

/// Resolve the active prompt as a success.
pub fn handle_event_success(game: &mut TypeFighterGame) {
    let Some(index) = game.current_event else {
        return;
    };
    let kind = game.events[index].kind;
    let message = game.events[index].success_message.clone();
    tracing::info!(kind = kind.name(), "{}", message);
    game.push_message(&message, true);

    match kind {
        QteKind::Attack => {
            game.fighter.attack();
            if let Some(sprite) = game.events[index].sprite.as_mut() {
                sprite.set_state(MonsterState::Hurt);
            }
            let duration = game.fighter.animation(FighterState::Attack).frame_duration_ms * 3;
            start_animation(game, duration);
        }
        QteKind::Jump => {
            game.fighter.jump();
            let duration = game.fighter.animation(FighterState::Jump).frame_duration_ms * 4;
            start_animation(game, duration);
        }
        QteKind::Move | QteKind::Dodge | QteKind::Block => {
            game.fighter.set_state(FighterState::Walking);
        }
    }

    game.successes += 1;
    clear_prompt(game, index);
}

/// Resolve the active prompt as a failure: hurt the fighter and lock the world.
pub fn handle_event_failure(game: &mut TypeFighterGame) {
    let Some(index) = game.current_event else {
        return;
    };
    let message = game.events[index].fail_message.clone();
    let damage = game.events[index].damage_on_fail;
    tracing::info!(damage, "{}", message);
    game.push_message(&message, false);

    let fatal = game.fighter.take_damage(damage);
    if fatal {
        game.fighter.set_state(FighterState::Dead);
        let duration = game.fighter.animation(FighterState::Dead).frame_duration_ms * 4;
        start_animation(game, duration);
    } else {
        game.fighter.set_state(FighterState::Hurt);
        let duration = game.fighter.animation(FighterState::Hurt).frame_duration_ms * 2;
        start_animation(game, duration);
    }

    game.failures += 1;
    clear_prompt(game, index);
    if fatal {
        game.fighter.moving = false;
    }
}

fn clear_prompt(game: &mut TypeFighterGame, index: usize) {
    game.waiting_for_input = false;
    game.current_event = None;
    game.last_resolved = Some(index);
    game.fighter.moving = true;
}

/// Scroll the world past the fighter while the run is unobstructed.
pub fn update_world(game: &mut TypeFighterGame) {
    if !(game.animation_complete && game.fighter.moving) {
        return;
    }
    game.world_offset += game.fighter.speed;
    game.background_x -= game.fighter.speed;
    if game.background_x <= -game.background_width {
        game.background_x = 0.0;
    }
}

fn run_complete(game: &TypeFighterGame) -> bool {
    game.current_event_index >= game.events.len()
        && !game.waiting_for_input
        && game.animation_complete
        && !game.fighter.is_jumping
}
