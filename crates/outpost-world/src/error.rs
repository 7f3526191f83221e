//! World-subsystem error type.

use thiserror::Error;

use outpost_core::RoomId;

/// Errors produced by `outpost-world`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("no path from {from} to {to}")]
    NoPath { from: RoomId, to: RoomId },

    #[error("level references unknown room '{0}'")]
    UnknownRoom(String),

    #[error("invalid level data: {0}")]
    Level(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
