//! ssecast core: transport-agnostic event-stream framing and error types.
//!
//! This crate defines the wire-level contract (one message = one complete
//! `text/event-stream` frame) and the error surface shared by the gateway and
//! its clients. It carries no runtime or HTTP dependencies so it can be reused
//! by test harnesses and other front-ends.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SsecastError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, SsecastError};
