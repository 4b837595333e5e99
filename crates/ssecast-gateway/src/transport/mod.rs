//! Transport layer (HTTP event streams).
//!
//! `stream` owns the long-lived `text/event-stream` responses; `http` maps
//! core errors onto HTTP replies.

pub mod http;
pub mod stream;
