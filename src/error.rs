//! Fatal error types
//!
//! Gameplay itself never fails; these cover startup and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no element with id `{0}` in the document")]
    MissingCanvas(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("no window or document available")]
    NoDocument,
    #[error("failed to create render surface: {0}")]
    Surface(String),
    #[error("no compatible graphics adapter")]
    NoAdapter,
    #[error("invalid tuning: {0}")]
    InvalidTuning(&'static str),
    #[error("failed to parse tuning: {0}")]
    TuningParse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
