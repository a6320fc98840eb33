use std::io;

use thiserror::Error;

/// Application-wide error type for the kube-scan CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to collect cluster images: {0}")]
    Collection(String),

    #[error("No images found")]
    EmptyInventory,

    #[error("Failed to write report to '{path}': {source}")]
    ReportWrite { path: String, source: io::Error },
}

impl AppError {
    pub fn collection<S: Into<String>>(msg: S) -> Self {
        AppError::Collection(msg.into())
    }
}
