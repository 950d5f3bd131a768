//! Errors surfaced by API calls.

/// Failure of a login, profile, or resource call.
///
/// Pages render the `Display` text inline; nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("{message} ({status})")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Parse(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User already exists!")]
    AlreadyExists,

    /// Called during server rendering, where no browser is available.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, preferring the server's own message.
    pub fn from_status(status: u16, message: Option<String>, fallback: &str) -> Self {
        let message = message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| fallback.to_owned());
        ApiError::Status { status, message }
    }
}
