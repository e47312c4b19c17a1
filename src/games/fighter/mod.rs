//! Type Fighter: an auto-runner where quick-time events stop the fighter and
//! demand a keypress before the timer runs out.

pub mod art;
pub mod logic;
pub mod types;

pub use art::ArtSource;
pub use logic::{process_input, tick_type_fighter, FighterInput};
pub use types::{
    Fighter, FighterResult, FighterState, Gender, MonsterState, QtEvent, QteKind, QteSprite,
    TypeFighterGame,
};
