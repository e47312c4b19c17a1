//! Math Blasters logic: aim a unit-vector trajectory at the last click.

use super::types::*;
use crate::core::constants::{MAX_FRAME_DT_MS, PHYSICS_TICK_MS};
use crate::core::geometry::Vec2;

/// UI-agnostic input actions for Math Blasters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlasterInput {
    /// Mouse click in world coordinates.
    Click { x: f64, y: f64 },
    Exit, // Esc
    Other,
}

pub fn process_input(game: &mut BlasterGame, input: BlasterInput) {
    match input {
        BlasterInput::Click { x, y } => launch(game, Vec2::new(x, y)),
        BlasterInput::Exit => game.exited = true,
        BlasterInput::Other => {}
    }
}

/// Reset the ball to the origin and send it toward `target`.
///
/// A click exactly on the origin has no direction and is ignored.
pub fn launch(game: &mut BlasterGame, target: Vec2) {
    let Some(direction) = (target - ORIGIN).normalized() else {
        tracing::debug!("Math Blasters: click on origin ignored");
        return;
    };
    game.ball = ORIGIN;
    game.speed = direction.scale(BALL_SPEED);
    game.shots_fired += 1;
}

/// Advance the ball. Returns true if anything moved.
pub fn tick_blaster(game: &mut BlasterGame, dt_ms: u64) -> bool {
    if game.exited {
        return false;
    }

    game.accumulated_time_ms += dt_ms.min(MAX_FRAME_DT_MS);
    let mut changed = false;

    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        game.tick_count += 1;
        if game.speed != Vec2::ZERO {
            game.ball = game.ball + game.speed;
            changed = true;
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_starts_at_origin_and_rests() {
        let mut game = BlasterGame::new();
        assert_eq!(game.ball, Vec2::new(500.0, 700.0));
        assert!(!tick_blaster(&mut game, 64));
        assert_eq!(game.ball, ORIGIN);
    }

    #[test]
    fn test_click_sets_unit_speed_times_two() {
        let mut game = BlasterGame::new();
        process_input(&mut game, BlasterInput::Click { x: 800.0, y: 300.0 });
        // (300, -400) has length 500
        assert!((game.speed.x - 1.2).abs() < 1e-9);
        assert!((game.speed.y + 1.6).abs() < 1e-9);
        assert!((game.speed.length() - 2.0).abs() < 1e-9);
        assert_eq!(game.shots_fired, 1);
    }

    #[test]
    fn test_ball_moves_each_step() {
        let mut game = BlasterGame::new();
        process_input(&mut game, BlasterInput::Click { x: 500.0, y: 0.0 });
        assert!(tick_blaster(&mut game, 48));
        assert!((game.ball.y - 694.0).abs() < 1e-9);
        assert!((game.ball.x - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_new_click_resets_to_origin() {
        let mut game = BlasterGame::new();
        process_input(&mut game, BlasterInput::Click { x: 500.0, y: 0.0 });
        tick_blaster(&mut game, 100);
        process_input(&mut game, BlasterInput::Click { x: 1000.0, y: 700.0 });
        assert_eq!(game.ball, ORIGIN);
        assert!((game.speed.x - 2.0).abs() < 1e-9);
        assert_eq!(game.shots_fired, 2);
    }

    #[test]
    fn test_click_on_origin_ignored() {
        let mut game = BlasterGame::new();
        process_input(&mut game, BlasterInput::Click { x: 500.0, y: 700.0 });
        assert_eq!(game.speed, Vec2::ZERO);
        assert_eq!(game.shots_fired, 0);
    }

    #[test]
    fn test_ball_leaves_screen() {
        let mut game = BlasterGame::new();
        process_input(&mut game, BlasterInput::Click { x: 500.0, y: 0.0 });
        for _ in 0..400 {
            tick_blaster(&mut game, 100);
        }
        assert!(!game.ball_on_screen());
    }

    #[test]
    fn test_exit() {
        let mut game = BlasterGame::new();
        process_input(&mut game, BlasterInput::Exit);
        assert!(game.exited);
        assert!(!tick_blaster(&mut game, 16));
    }
}
