//! Startup errors
//!
//! The simulation and render steps are total; everything that can fail does
//! so while wiring the game to its collaborators, and is fatal there.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("canvas has no 2d context")]
    NoContext2d,
    #[error("failed to register tick timer: {0}")]
    Timer(String),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("failed to read settings file {path}: {source}")]
    SettingsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] serde_json::Error),
}
