//! Log file setup. The terminal belongs to the TUI, so logs go to
//! ~/.baby_games/baby_games.log.

use super::persistence::data_path;
use crate::core::constants::LOG_FILE;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `debug` lowers the default level.
///
/// `RUST_LOG` overrides the default filter. Returns the log file path.
pub fn init(debug: bool) -> io::Result<PathBuf> {
    let path = data_path(LOG_FILE)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(path)
}
