//! Timing and data-directory constants shared by every game.

/// Fixed physics step in milliseconds (~60 FPS).
pub const PHYSICS_TICK_MS: u64 = 16;

/// Largest frame delta accepted by a tick, so a stalled terminal does not
/// fast-forward the world.
pub const MAX_FRAME_DT_MS: u64 = 100;

/// Input poll timeout for the main loop.
pub const INPUT_POLL_MS: u64 = 16;

/// Directory under the home directory that holds settings and logs.
pub const DATA_DIR_NAME: &str = ".baby_games";

/// Settings file name inside the data directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "baby_games.log";
