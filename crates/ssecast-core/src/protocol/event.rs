//! Event frame encoding (`text/event-stream`).
//!
//! Encoding rules:
//! - Every payload line becomes its own `data: ` line; `\n`, `\r\n` and `\r`
//!   are all treated as line breaks so the receiver rebuilds the payload with `\n`.
//! - `event:` and `id:` values are single-line; line breaks are rejected.
//! - A frame always ends with an empty line.

use bytes::Bytes;

use crate::error::{Result, SsecastError};

/// Heartbeat comment frame. Receivers ignore it; it keeps idle proxies from
/// closing the connection.
pub const KEEPALIVE_COMMENT: &[u8] = b": keep-alive\n\n";

/// One outgoing event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    event: Option<String>,
    id: Option<String>,
    data: String,
}

impl Event {
    /// Plain message event (no `event:` name, default `message` type on the client).
    pub fn message(data: impl Into<String>) -> Self {
        Self {
            event: None,
            id: None,
            data: data.into(),
        }
    }

    pub fn with_event(mut self, name: impl Into<String>) -> Self {
        self.event = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn event_name(&self) -> Option<&str> {
        self.event.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Encode into one complete frame. Encode once, write to N connections.
    pub fn encode(&self) -> Result<Bytes> {
        let mut out = String::with_capacity(self.data.len() + 16);

        if let Some(name) = &self.event {
            ensure_single_line("event", name)?;
            push_field(&mut out, "event", name);
        }
        if let Some(id) = &self.id {
            ensure_single_line("id", id)?;
            if id.contains('\0') {
                return Err(SsecastError::BadRequest("event id must not contain NUL".into()));
            }
            push_field(&mut out, "id", id);
        }

        let mut rest = self.data.as_str();
        loop {
            match rest.find(|c: char| c == '\r' || c == '\n') {
                Some(pos) => {
                    push_field(&mut out, "data", &rest[..pos]);
                    let tail = &rest[pos..];
                    let skip = if tail.starts_with("\r\n") { 2 } else { 1 };
                    rest = &tail[skip..];
                }
                None => {
                    push_field(&mut out, "data", rest);
                    break;
                }
            }
        }

        out.push('\n');
        Ok(Bytes::from(out))
    }
}

/// Encode a comment frame (`: text`).
pub fn encode_comment(text: &str) -> Result<Bytes> {
    ensure_single_line("comment", text)?;
    Ok(Bytes::from(format!(": {text}\n\n")))
}

fn ensure_single_line(field: &str, value: &str) -> Result<()> {
    if value.contains(|c: char| c == '\r' || c == '\n') {
        return Err(SsecastError::BadRequest(format!(
            "{field} must not contain line breaks"
        )));
    }
    Ok(())
}

fn push_field(out: &mut String, field: &str, value: &str) {
    out.push_str(field);
    out.push_str(": ");
    out.push_str(value);
    out.push('\n');
}
