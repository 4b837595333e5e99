//! Publish / introspection endpoints and the static page.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::transport::http::ApiError;

#[derive(Debug, Deserialize)]
pub struct PublishMessageReq {
    pub message: String,
}

/// `GET /users`, `GET /clients`
pub async fn list_clients(State(app): State<AppState>) -> Json<Vec<String>> {
    Json(app.realtime().sessions().list_ids())
}

/// `POST /users/:user_id/publish/messages`
pub async fn publish_message(
    State(app): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<PublishMessageReq>,
) -> Result<&'static str, ApiError> {
    let core = app.realtime();
    let text = core.notices().says(&user_id, &req.message, Utc::now());
    core.broadcast(&text)?;
    Ok("Ok")
}

/// `GET /publish/status/:status`
pub async fn publish_status(
    State(app): State<AppState>,
    Path(status): Path<String>,
) -> Result<&'static str, ApiError> {
    app.realtime().broadcast(&status)?;
    Ok("Ok")
}

/// `GET /publish/:client_id/status/:status`
pub async fn publish_status_to(
    State(app): State<AppState>,
    Path((client_id, status)): Path<(String, String)>,
) -> Result<&'static str, ApiError> {
    app.realtime().send_to(&client_id, &status)?;
    Ok("Ok")
}

/// `GET /`
pub async fn index(State(app): State<AppState>) -> Response {
    let path = &app.cfg().gateway.index_html;
    match tokio::fs::read_to_string(path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(%path, error = %e, "index page unreadable");
            (StatusCode::INTERNAL_SERVER_ERROR, "could not load the page").into_response()
        }
    }
}
