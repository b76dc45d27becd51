use thiserror::Error;

use crate::shipstation::ShipStationError;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Fetch failed: {0}")]
    Network(#[from] ShipStationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Process exit status for this failure. Every failure is fatal and maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExportError::Configuration(_)
            | ExportError::Network(_)
            | ExportError::Serialization(_)
            | ExportError::Io(_) => 1,
        }
    }
}
