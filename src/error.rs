// Prompt Reel Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptReelError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Seek error: {0}")]
    Seek(String),

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("FFprobe error: {0}")]
    FFprobe(String),

    #[error("{0}")]
    AnalysisFailed(String),

    #[error("Run cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for PromptReelError {
    fn from(err: anyhow::Error) -> Self {
        PromptReelError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PromptReelError>;
