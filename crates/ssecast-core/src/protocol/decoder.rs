//! Incremental event-stream decoder.
//!
//! Feed arbitrary chunks; complete events come out once their terminating
//! blank line has been seen. A `\r` at the end of one chunk followed by `\n`
//! at the start of the next counts as a single line break.

use crate::error::{Result, SsecastError};

/// Event reconstructed from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEvent {
    pub event: Option<String>,
    pub id: Option<String>,
    pub data: String,
}

#[derive(Debug, Default)]
struct Pending {
    event: Option<String>,
    id: Option<String>,
    data: Vec<String>,
}

impl Pending {
    fn take(&mut self) -> Option<DecodedEvent> {
        let pending = std::mem::take(self);
        if pending.data.is_empty() {
            return None;
        }
        Some(DecodedEvent {
            event: pending.event,
            id: pending.id,
            data: pending.data.join("\n"),
        })
    }
}

#[derive(Debug, Default)]
pub struct EventDecoder {
    line: Vec<u8>,
    skip_lf: bool,
    pending: Pending,
    comments: u64,
}

impl EventDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of comment lines seen so far (heartbeats).
    pub fn comments(&self) -> u64 {
        self.comments
    }

    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<DecodedEvent>> {
        let mut out = Vec::new();
        for &b in chunk {
            if self.skip_lf {
                self.skip_lf = false;
                if b == b'\n' {
                    continue;
                }
            }
            match b {
                b'\n' => self.end_line(&mut out)?,
                b'\r' => {
                    self.end_line(&mut out)?;
                    self.skip_lf = true;
                }
                _ => self.line.push(b),
            }
        }
        Ok(out)
    }

    fn end_line(&mut self, out: &mut Vec<DecodedEvent>) -> Result<()> {
        let raw = std::mem::take(&mut self.line);
        let line = String::from_utf8(raw)
            .map_err(|e| SsecastError::BadRequest(format!("event stream is not utf-8: {e}")))?;

        if line.is_empty() {
            if let Some(ev) = self.pending.take() {
                out.push(ev);
            }
            return Ok(());
        }
        if line.starts_with(':') {
            self.comments += 1;
            return Ok(());
        }

        let (field, value) = match line.split_once(':') {
            Some((f, v)) => (f, v.strip_prefix(' ').unwrap_or(v)),
            None => (line.as_str(), ""),
        };
        match field {
            "data" => self.pending.data.push(value.to_string()),
            "event" => self.pending.event = Some(value.to_string()),
            "id" => self.pending.id = Some(value.to_string()),
            // retry and unknown fields are ignored
            _ => {}
        }
        Ok(())
    }
}
