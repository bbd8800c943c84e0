use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckprintError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Printer send failed: {0}")]
    Printer(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl CheckprintError {
    /// Stable short code, safe to surface in logs and scripts.
    pub fn code(&self) -> &'static str {
        match self {
            CheckprintError::InvalidArgument(_) => "E_ARG_001",
            CheckprintError::Io(_) => "E_IO_001",
            CheckprintError::Serialization(_) => "E_SER_001",
            CheckprintError::Printer(_) => "E_PRN_001",
            CheckprintError::Api(_) => "E_API_001",
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckprintError>;
