//! Error types for amostra-log

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("History is empty, nothing to export")]
    EmptyHistory,

    #[error("Payload file not found: {0}")]
    PayloadNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
