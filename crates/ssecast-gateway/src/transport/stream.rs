//! Event stream handler.
//!
//! Responsibilities:
//! - Register the client under its path id and announce it
//! - Drain the client's outbound queue into the response body
//! - Heartbeat comment frames so idle proxies keep the connection
//! - Unregister the moment the body is dropped (client gone or server stop)

use std::convert::Infallible;
use std::sync::Arc;

use async_stream::stream;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

use ssecast_core::protocol::KEEPALIVE_COMMENT;

use crate::app_state::AppState;
use crate::realtime::{Connection, RealtimeCore, Registration};

/// Lives inside the response body. Dropping it unregisters the session before
/// the receiver goes away, so a concurrent write can never observe the closed
/// channel while this session is still registered.
struct SessionGuard {
    core: Arc<RealtimeCore>,
    registration: Registration,
    rx: mpsc::Receiver<Bytes>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.core.disconnect(&self.registration);
    }
}

pub async fn open_stream(State(app): State<AppState>, Path(id): Path<String>) -> Response {
    let gw = &app.cfg().gateway;
    let period = Duration::from_millis(gw.keepalive_interval_ms);

    let (conn, rx) = Connection::channel(gw.queue_capacity);
    let core = app.realtime();
    let registration = core.connect(&id, conn);
    let mut guard = SessionGuard {
        core,
        registration,
        rx,
    };

    let body = stream! {
        let mut keepalive = interval_at(Instant::now() + period, period);
        keepalive.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let next = tokio::select! {
                frame = guard.rx.recv() => frame,
                _ = keepalive.tick() => Some(Bytes::from_static(KEEPALIVE_COMMENT)),
            };
            match next {
                Some(frame) => yield Ok::<Bytes, Infallible>(frame),
                // registry dropped us: superseded, evicted or shutting down
                None => break,
            }
        }
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
            (HeaderName::from_static("x-accel-buffering"), "no"),
        ],
        Body::from_stream(body),
    )
        .into_response()
}
