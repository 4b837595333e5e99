//! Realtime core components for the gateway runtime.
//!
//! Connection registry, notice texts, and the delivery engine shared by the
//! HTTP handlers.

mod connection_registry;
mod notice;
mod realtime;

pub use connection_registry::{ConnectionRegistry, SnapshotEntry};
pub use notice::Notices;
pub use realtime::RealtimeCore;
