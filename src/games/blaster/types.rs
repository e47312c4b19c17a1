//! Math Blasters data structures.

use crate::core::geometry::{Rect, Vec2};

pub const SCREEN_WIDTH: f64 = 1000.0;
pub const SCREEN_HEIGHT: f64 = 800.0;
/// Launch point, centered horizontally and 100 units above the bottom edge.
pub const ORIGIN: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - 100.0);
pub const BALL_SIZE: f64 = 40.0;
/// Distance travelled per step.
pub const BALL_SPEED: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct BlasterGame {
    /// Center of the moving ball.
    pub ball: Vec2,
    /// Per-step displacement.
    pub speed: Vec2,
    pub shots_fired: u32,
    /// Set when the player leaves for the launcher.
    pub exited: bool,
    pub accumulated_time_ms: u64,
    pub tick_count: u64,
}

impl Default for BlasterGame {
    fn default() -> Self {
        Self::new()
    }
}

impl BlasterGame {
    pub fn new() -> Self {
        Self {
            ball: ORIGIN,
            speed: Vec2::ZERO,
            shots_fired: 0,
            exited: false,
            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    pub fn ball_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, BALL_SIZE, BALL_SIZE).centered_at(self.ball)
    }

    /// The ball parked at the launch point.
    pub fn origin_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, BALL_SIZE, BALL_SIZE).centered_at(ORIGIN)
    }

    pub fn ball_on_screen(&self) -> bool {
        let screen = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
        self.ball_rect().intersects(&screen)
    }
}
