use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShipStationError {
    #[error("ShipStation API error: {0}")]
    ApiError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ShipStationError {
    pub fn from_status_code(status: u16, message: String) -> Self {
        match status {
            401 | 403 => ShipStationError::AuthenticationError(message),
            404 => ShipStationError::NotFound(message),
            _ => ShipStationError::ApiError(format!("HTTP {}: {}", status, message)),
        }
    }
}
