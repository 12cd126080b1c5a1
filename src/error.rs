use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{path} returned status {status}")]
    HttpStatus { path: String, status: u16 },

    #[error("Session expired: {0}")]
    SessionExpired(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Missing page element: {0}")]
    MissingElement(String),

    #[error("Invalid config: {0}")]
    Config(String),
}

impl From<reqwest::Error> for BookingError {
    fn from(err: reqwest::Error) -> Self {
        BookingError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for BookingError {
    fn from(err: serde_json::Error) -> Self {
        BookingError::MalformedResponse(err.to_string())
    }
}
