use std::sync::Arc;

use chrono::Utc;

use ssecast_core::error::{Result, SsecastError};
use ssecast_core::protocol::Event;

use crate::obs::metrics::GatewayMetrics;
use crate::realtime::core::{ConnectionRegistry, Notices};
use crate::realtime::types::{Connection, DeliveryReport, Registration, WriteError};

/// RealtimeCore: egress engine (broadcast to everyone / send to one client).
///
/// Frames are encoded once, then written to a registry snapshot with no lock
/// held. A recipient whose write fails is unregistered on the spot and never
/// retried; other recipients are unaffected.
pub struct RealtimeCore {
    sessions: Arc<ConnectionRegistry>,
    notices: Notices,
    metrics: Arc<GatewayMetrics>,
}

impl RealtimeCore {
    pub fn new(notices: Notices, metrics: Arc<GatewayMetrics>) -> Self {
        Self {
            sessions: Arc::new(ConnectionRegistry::new()),
            notices,
            metrics,
        }
    }

    pub fn sessions(&self) -> &ConnectionRegistry {
        &self.sessions
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.metrics
    }

    /// Register `id` and announce it to everyone, the newcomer included.
    pub fn connect(&self, id: &str, conn: Connection) -> Registration {
        let reg = self.sessions.register(id, conn);
        self.metrics.streams_opened.inc(&[]);
        tracing::info!(client_id = %id, seq = reg.seq(), "client connected");

        if self.notices.enabled() {
            self.announce(self.notices.joined(id, Utc::now()));
        }
        reg
    }

    /// Transport reported the stream closed. Returns false when the session had
    /// already been superseded or dropped, in which case nothing is announced.
    pub fn disconnect(&self, reg: &Registration) -> bool {
        if !self.sessions.unregister_session(reg) {
            tracing::debug!(client_id = %reg.id(), seq = reg.seq(), "stale session closed");
            return false;
        }
        self.metrics.streams_closed.inc(&[("reason", "disconnect")]);
        tracing::info!(client_id = %reg.id(), seq = reg.seq(), "client disconnected");

        if self.notices.enabled() {
            self.announce(self.notices.left(reg.id(), Utc::now()));
        }
        true
    }

    pub fn broadcast(&self, message: &str) -> Result<DeliveryReport> {
        self.broadcast_event(&Event::message(message))
    }

    pub fn broadcast_event(&self, event: &Event) -> Result<DeliveryReport> {
        let frame = event.encode()?;
        let mut report = DeliveryReport::default();

        for target in self.sessions.snapshot() {
            match target.conn.write(frame.clone()) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    self.drop_failed(&target.id, target.seq, e, "broadcast");
                    report.failed.push(target.id);
                }
            }
        }

        self.metrics
            .frames_delivered
            .add(&[("mode", "broadcast")], report.delivered as u64);
        if !report.is_clean() {
            tracing::warn!(
                delivered = report.delivered,
                failed = ?report.failed,
                "broadcast finished with failures"
            );
        }
        Ok(report)
    }

    pub fn send_to(&self, id: &str, message: &str) -> Result<()> {
        self.send_event_to(id, &Event::message(message))
    }

    pub fn send_event_to(&self, id: &str, event: &Event) -> Result<()> {
        let frame = event.encode()?;
        let (conn, seq) = self
            .sessions
            .lookup(id)
            .ok_or_else(|| SsecastError::NotFound(id.to_string()))?;

        conn.write(frame).map_err(|e| {
            self.drop_failed(id, seq, e, "unicast");
            SsecastError::Delivery {
                id: id.to_string(),
                reason: e.to_string(),
            }
        })?;

        self.metrics.frames_delivered.inc(&[("mode", "unicast")]);
        Ok(())
    }

    /// Process stop: drop every connection so open streams end.
    pub fn shutdown(&self) -> usize {
        self.metrics.set_draining();
        let closed = self.sessions.clear();
        self.metrics
            .streams_closed
            .add(&[("reason", "shutdown")], closed as u64);
        closed
    }

    fn announce(&self, text: String) {
        if let Err(e) = self.broadcast(&text) {
            tracing::warn!(error = %e, "notice broadcast failed");
        }
    }

    fn drop_failed(&self, id: &str, seq: u64, err: WriteError, mode: &'static str) {
        let removed = self.sessions.remove_if_current(id, seq);
        if removed {
            self.metrics.streams_closed.inc(&[("reason", "delivery_failed")]);
        }
        self.metrics
            .delivery_failures
            .inc(&[("mode", mode), ("reason", err.label())]);
        tracing::warn!(client_id = %id, seq, mode, error = %err, removed, "delivery failed; connection dropped");
    }
}
