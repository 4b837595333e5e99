//! ssecast gateway binary.
//!
//! - Event streams: GET /stream/:id
//! - Publish: POST /users/:id/publish/messages, GET /publish/...
//! - Ctrl-C drains: every stream is closed, then the server exits

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use ssecast_core::error::{Result, SsecastError};
use ssecast_gateway::{app_state, config, realtime::RealtimeCore, router};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "ssecast-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let core = state.realtime();
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| SsecastError::Transport(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "ssecast-gateway starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(core))
        .await
        .map_err(|e| SsecastError::Transport(format!("server failed: {e}")))?;

    tracing::info!("ssecast-gateway stopped");
    Ok(())
}

async fn shutdown_signal(core: Arc<RealtimeCore>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
    let closed = core.shutdown();
    tracing::info!(closed, "shutdown requested; streams closed");
}
