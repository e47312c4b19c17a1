//! Scrolling Shooter: clear the bouncing blocks before one reaches you.

pub mod logic;
pub mod types;

pub use logic::{process_input, tick_shooter, ShooterInput};
pub use types::{Block, Direction, Player, Projectile, ShooterGame, ShooterResult};
