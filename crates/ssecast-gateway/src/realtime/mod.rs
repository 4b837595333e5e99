//! Realtime runtime (egress engine) for the ssecast gateway.
//!
//! Connection registry + delivery engine (broadcast / unicast) + notices.

pub mod core;
pub mod types;

pub use self::core::{ConnectionRegistry, Notices, RealtimeCore, SnapshotEntry};
pub use types::{Connection, DeliveryReport, Registration, WriteError};
