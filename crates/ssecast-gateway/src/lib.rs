//! ssecast gateway library entry.
//!
//! This crate wires config, the realtime core (connection registry + delivery
//! engine), the event-stream transport, and the HTTP surface into one server.
//! It is consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod realtime;
pub mod router;
pub mod transport;
