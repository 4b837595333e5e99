use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use ssecast_core::error::SsecastError;

/// Error reply: status from the client code, `{"code","msg"}` body.
#[derive(Debug)]
pub struct ApiError(pub SsecastError);

impl From<SsecastError> for ApiError {
    fn from(e: SsecastError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status =
            StatusCode::from_u16(code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::warn!(error = %self.0, "request failed");
        }

        (
            status,
            Json(json!({
                "code": code.as_str(),
                "msg": self.0.to_string(),
            })),
        )
            .into_response()
    }
}
