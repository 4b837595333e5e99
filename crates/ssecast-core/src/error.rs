//! Shared error type across ssecast crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request or config.
    BadRequest,
    /// Targeted recipient is not connected.
    NotFound,
    /// Write to a registered connection failed.
    DeliveryFailed,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::DeliveryFailed => "DELIVERY_FAILED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status the gateway answers with.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => 400,
            ClientCode::NotFound => 404,
            ClientCode::DeliveryFailed | ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SsecastError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum SsecastError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("client not connected: {0}")]
    NotFound(String),
    #[error("delivery to {id} failed: {reason}")]
    Delivery { id: String, reason: String },
    #[error("transport: {0}")]
    Transport(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SsecastError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SsecastError::BadRequest(_) => ClientCode::BadRequest,
            SsecastError::NotFound(_) => ClientCode::NotFound,
            SsecastError::Delivery { .. } => ClientCode::DeliveryFailed,
            SsecastError::Transport(_) => ClientCode::Internal,
            SsecastError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            SsecastError::Internal(_) => ClientCode::Internal,
        }
    }
}
