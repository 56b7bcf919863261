//! Persisted calculator state
//!
//! The in-progress calculation survives an app restart: the front end saves
//! the `CalcState` as JSON on exit and restores it on launch. Loading
//! absorbs every failure (missing file, unreadable JSON) into `None`; the
//! calculator must always be able to start.

use std::path::{Path, PathBuf};

use crate::engine::CalcState;

/// App identifier used for the config directory.
const APP_NAME: &str = "calcpad";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad state file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-user config directory for an app, created on demand by `save`.
/// Falls back to the current directory when no home is available.
pub fn config_dir(app: &str) -> PathBuf {
    match directories::ProjectDirs::from("", "", app) {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => PathBuf::from("."),
    }
}

fn state_path() -> PathBuf {
    config_dir(APP_NAME).join("state.json")
}

/// Save the current calculation so it can be resumed next launch.
pub fn save_state(state: &CalcState) -> Result<(), StorageError> {
    save_state_to(state, &state_path())
}

pub fn save_state_to(state: &CalcState, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Restore the last saved calculation, if any.
pub fn load_state() -> Option<CalcState> {
    load_state_from(&state_path())
}

pub fn load_state_from(path: &Path) -> Option<CalcState> {
    let text = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&text) {
        Ok(state) => Some(state),
        Err(e) => {
            eprintln!("[calcpad] ignoring unreadable state file: {}", e);
            None
        }
    }
}
