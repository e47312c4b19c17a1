//! Math Blasters: click anywhere and the ball flies from the launch point
//! toward the click.

pub mod logic;
pub mod types;

pub use logic::{launch, process_input, tick_blaster, BlasterInput};
pub use types::BlasterGame;
