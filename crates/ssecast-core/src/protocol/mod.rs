//! Event-stream wire format.
//!
//! - `event`: builds and encodes one self-contained frame per message.
//! - `decoder`: incremental parser turning a byte stream back into events.
//!
//! A frame always ends with a blank line, so a receiver can never merge two
//! messages or split one, regardless of how the transport chunks the bytes.

pub mod decoder;
pub mod event;

pub use decoder::{DecodedEvent, EventDecoder};
pub use event::{encode_comment, Event, KEEPALIVE_COMMENT};
