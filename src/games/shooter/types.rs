//! Scrolling Shooter data structures.
//!
//! Red blocks bounce around the screen while the player, a blue square near
//! the bottom, fires projectiles at the mouse cursor.

use crate::core::geometry::{Rect, Vec2};
use crate::core::palette::{self, Rgb};
use rand::Rng;

pub const SCREEN_WIDTH: f64 = 900.0;
pub const SCREEN_HEIGHT: f64 = 700.0;

pub const BLOCK_WIDTH: f64 = 20.0;
pub const BLOCK_HEIGHT: f64 = 15.0;
pub const BLOCK_COUNT: usize = 50;
/// Blocks spawn in the upper band of the screen.
pub const BLOCK_SPAWN_MAX_Y: i32 = 350;
/// Block speed per axis is drawn from `-BLOCK_MAX_SPEED..=BLOCK_MAX_SPEED`.
pub const BLOCK_MAX_SPEED: i32 = 3;

pub const PLAYER_SIZE: f64 = 20.0;
pub const PLAYER_STEP: f64 = 10.0;

pub const PROJECTILE_WIDTH: f64 = 4.0;
pub const PROJECTILE_HEIGHT: f64 = 10.0;
pub const PROJECTILE_VELOCITY: f64 = 5.0;

/// The looping background is twice the screen height.
pub const BACKGROUND_HEIGHT: i64 = (SCREEN_HEIGHT as i64) * 2;
/// Background scroll per step.
pub const BACKGROUND_SCROLL: i64 = 2;

/// Game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShooterResult {
    /// Every block destroyed.
    Cleared,
    /// A block reached the player.
    Died,
    Forfeit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// A bouncing enemy block.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub rect: Rect,
    pub color: Rgb,
    pub change_x: f64,
    pub change_y: f64,
    pub left_boundary: f64,
    pub top_boundary: f64,
    pub right_boundary: f64,
    pub bottom_boundary: f64,
}

impl Block {
    pub fn new(color: Rgb) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, BLOCK_WIDTH, BLOCK_HEIGHT),
            color,
            change_x: 0.0,
            change_y: 0.0,
            left_boundary: 0.0,
            top_boundary: 0.0,
            right_boundary: 0.0,
            bottom_boundary: 0.0,
        }
    }

    /// Random block in the spawn band, bouncing off the screen edges.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut block = Self::new(palette::RED);
        block.rect.x = rng.gen_range(0..SCREEN_WIDTH as i32) as f64;
        block.rect.y = rng.gen_range(0..BLOCK_SPAWN_MAX_Y) as f64;
        block.change_x = rng.gen_range(-BLOCK_MAX_SPEED..=BLOCK_MAX_SPEED) as f64;
        block.change_y = rng.gen_range(-BLOCK_MAX_SPEED..=BLOCK_MAX_SPEED) as f64;
        block.right_boundary = SCREEN_WIDTH;
        block.bottom_boundary = SCREEN_HEIGHT;
        block
    }

    /// Move one step and reverse on any boundary the block touches.
    pub fn update(&mut self) {
        self.rect.x += self.change_x;
        self.rect.y += self.change_y;

        if self.rect.right() >= self.right_boundary || self.rect.left() <= self.left_boundary {
            self.change_x *= -1.0;
        }
        if self.rect.bottom() >= self.bottom_boundary || self.rect.top() <= self.top_boundary {
            self.change_y *= -1.0;
        }
    }
}

/// The player's ship.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub color: Rgb,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                (SCREEN_WIDTH as i32 / 2) as f64,
                SCREEN_HEIGHT - 50.0,
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
            color: palette::BLUE,
        }
    }

    pub fn move_left(&mut self) {
        if self.rect.x > 0.0 {
            self.rect.x -= PLAYER_STEP;
        }
    }

    pub fn move_right(&mut self) {
        if self.rect.x < SCREEN_WIDTH - PLAYER_SIZE {
            self.rect.x += PLAYER_STEP;
        }
    }

    pub fn move_up(&mut self) {
        if self.rect.y > 0.0 {
            self.rect.y -= PLAYER_STEP;
        }
    }

    pub fn move_down(&mut self) {
        if self.rect.y < SCREEN_HEIGHT - PLAYER_SIZE {
            self.rect.y += PLAYER_STEP;
        }
    }

    pub fn apply(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }
}

/// A shot travelling in a straight line.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub rect: Rect,
    pub color: Rgb,
    /// Exact position; `rect` holds the truncated copy used for collisions.
    pub position: Vec2,
    pub change_x: f64,
    pub change_y: f64,
    pub alive: bool,
}

impl Projectile {
    /// Aim from `start` toward `dest` at the fixed projectile velocity.
    pub fn new(start_x: f64, start_y: f64, dest_x: f64, dest_y: f64, color: Rgb) -> Self {
        let angle = (dest_y - start_y).atan2(dest_x - start_x);
        Self {
            rect: Rect::new(start_x, start_y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            color,
            position: Vec2::new(start_x, start_y),
            change_x: angle.cos() * PROJECTILE_VELOCITY,
            change_y: angle.sin() * PROJECTILE_VELOCITY,
            alive: true,
        }
    }

    /// Advance one step; a projectile leaving the screen dies.
    pub fn update(&mut self) {
        self.position.y += self.change_y;
        self.position.x += self.change_x;

        self.rect.y = self.position.y.trunc();
        self.rect.x = self.position.x.trunc();

        if self.rect.x < 0.0
            || self.rect.x > SCREEN_WIDTH
            || self.rect.y < 0.0
            || self.rect.y > SCREEN_HEIGHT
        {
            self.alive = false;
        }
    }
}

/// Main Scrolling Shooter state.
#[derive(Debug, Clone)]
pub struct ShooterGame {
    pub game_result: Option<ShooterResult>,
    pub forfeit_pending: bool,

    pub player: Player,
    pub blocks: Vec<Block>,
    pub projectiles: Vec<Projectile>,
    /// Movement key pressed since the last step.
    pub queued_move: Option<Direction>,

    pub kill_count: u32,
    pub shots_fired: u32,

    /// Background scroll accumulator.
    pub background_y: i64,
    /// Where the background seam sits this frame (`background_y % BACKGROUND_HEIGHT`).
    pub seam_y: i64,

    pub accumulated_time_ms: u64,
    pub tick_count: u64,
}

impl ShooterGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let blocks = (0..BLOCK_COUNT).map(|_| Block::random(rng)).collect();
        Self::with_blocks(blocks)
    }

    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self {
            game_result: None,
            forfeit_pending: false,
            player: Player::new(),
            blocks,
            projectiles: Vec::new(),
            queued_move: None,
            kill_count: 0,
            shots_fired: 0,
            background_y: 0,
            seam_y: 0,
            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    /// Fire a projectile from the player toward a world position.
    pub fn fire_at(&mut self, x: f64, y: f64) {
        let projectile = Projectile::new(
            self.player.rect.x,
            self.player.rect.y,
            x,
            y,
            palette::WHITE,
        );
        self.projectiles.push(projectile);
        self.shots_fired += 1;
    }
}
