//! Engine-agnostic building blocks shared by the games.

pub mod animation;
pub mod constants;
pub mod geometry;
pub mod palette;

pub use animation::{Animation, Frame, SpriteSheet};
pub use geometry::{Rect, Vec2, Viewport};
pub use palette::Rgb;
