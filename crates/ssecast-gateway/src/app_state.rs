//! Shared application state for the ssecast gateway.
//!
//! One `RealtimeCore` per process, created at startup and handed to the HTTP
//! layer; nothing lives in globals.

use std::sync::Arc;

use ssecast_core::error::Result;

use crate::config::GatewayConfig;
use crate::obs::metrics::GatewayMetrics;
use crate::realtime::{Notices, RealtimeCore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    realtime: Arc<RealtimeCore>,
}

struct AppStateInner {
    cfg: GatewayConfig,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        cfg.validate()?;
        let notices = Notices::new(cfg.notices.enabled, cfg.notices.utc_offset_minutes)?;
        let realtime = Arc::new(RealtimeCore::new(
            notices,
            Arc::new(GatewayMetrics::default()),
        ));

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg }),
            realtime,
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn realtime(&self) -> Arc<RealtimeCore> {
        Arc::clone(&self.realtime)
    }

    pub fn is_draining(&self) -> bool {
        self.realtime.metrics().is_draining()
    }

    /// Gauges computed at scrape time.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![(
            "ssecast_clients_connected",
            self.realtime.sessions().len() as u64,
        )]
    }
}
