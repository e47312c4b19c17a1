//! Scrolling Shooter game logic: movement, firing, collisions, background scroll.

use super::types::*;
use crate::core::constants::{MAX_FRAME_DT_MS, PHYSICS_TICK_MS};

/// UI-agnostic input actions for the shooter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShooterInput {
    Move(Direction),
    /// Mouse click in world coordinates.
    Fire { x: f64, y: f64 },
    Forfeit, // Esc
    Other,
}

/// Process player input.
pub fn process_input(game: &mut ShooterGame, input: ShooterInput) {
    if game.game_result.is_some() {
        return;
    }

    match input {
        ShooterInput::Forfeit => {
            if game.forfeit_pending {
                game.game_result = Some(ShooterResult::Forfeit);
            } else {
                game.forfeit_pending = true;
            }
        }
        _ if game.forfeit_pending => {
            game.forfeit_pending = false;
        }
        ShooterInput::Move(direction) => {
            game.queued_move = Some(direction);
        }
        ShooterInput::Fire { x, y } => {
            game.fire_at(x, y);
        }
        ShooterInput::Other => {}
    }
}

/// Advance the shooter. `dt_ms` is milliseconds since the last call.
///
/// Steps in fixed 16ms increments. Returns true if anything moved.
pub fn tick_shooter(game: &mut ShooterGame, dt_ms: u64) -> bool {
    if game.game_result.is_some() || game.forfeit_pending {
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
fn step(game: &mut ShooterGame) {
    game.tick_count += 1;

    for block in &mut game.blocks {
        block.update();
    }
    if let Some(direction) = game.queued_move.take() {
        game.player.apply(direction);
    }
    for projectile in &mut game.projectiles {
        projectile.update();
    }
    game.projectiles.retain(|p| p.alive);

    resolve_projectile_hits(game);
    scroll_background(game);

    if resolve_player_hits(game) {
        tracing::info!(kills = game.kill_count, "Shooter: player died");
        game.game_result = Some(ShooterResult::Died);
    } else if game.blocks.is_empty() {
        tracing::info!(shots = game.shots_fired, "Shooter: all blocks cleared");
        game.game_result = Some(ShooterResult::Cleared);
    }
}

/// Remove every block a projectile overlaps, and the projectiles that hit.
fn resolve_projectile_hits(game: &mut ShooterGame) {
    let blocks = &mut game.blocks;
    let mut kills = 0;

    game.projectiles.retain(|projectile| {
        let before = blocks.len();
        blocks.retain(|b| !b.rect.intersects(&projectile.rect));
        let hit = before - blocks.len();
        kills += hit as u32;
        hit == 0 && projectile.rect.y >= -10.0
    });

    game.kill_count += kills;
}

/// Remove blocks touching the player. True if any did.
fn resolve_player_hits(game: &mut ShooterGame) -> bool {
    let player = game.player.rect;
    let before = game.blocks.len();
    game.blocks.retain(|b| !b.rect.intersects(&player));
    game.blocks.len() != before
}

fn scroll_background(game: &mut ShooterGame) {
    game.seam_y = game.background_y.rem_euclid(BACKGROUND_HEIGHT);
    game.background_y += BACKGROUND_SCROLL;
    if game.seam_y >= SCREEN_HEIGHT as i64 {
        game.background_y = 0;
    }
}
