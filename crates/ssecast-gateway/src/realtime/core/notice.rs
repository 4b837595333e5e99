use chrono::{DateTime, FixedOffset, Offset, Utc};

use ssecast_core::error::{Result, SsecastError};

/// Presence and chat texts, stamped with a local `HH:MMh` clock.
#[derive(Debug, Clone)]
pub struct Notices {
    enabled: bool,
    offset: FixedOffset,
}

impl Notices {
    pub fn new(enabled: bool, utc_offset_minutes: i32) -> Result<Self> {
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                SsecastError::BadRequest(format!(
                    "utc offset out of range: {utc_offset_minutes} minutes"
                ))
            })?;
        Ok(Self { enabled, offset })
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            offset: Utc.fix(),
        }
    }

    /// Whether joined/left notices are broadcast.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn clock(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&self.offset).format("%H:%Mh").to_string()
    }

    pub fn joined(&self, id: &str, now: DateTime<Utc>) -> String {
        format!("user {id} joined. {}", self.clock(now))
    }

    pub fn left(&self, id: &str, now: DateTime<Utc>) -> String {
        format!("user {id} left. {}", self.clock(now))
    }

    pub fn says(&self, from: &str, message: &str, now: DateTime<Utc>) -> String {
        format!("{from} says: {message}. {}", self.clock(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn clock_uses_configured_offset() {
        let n = Notices::new(true, -180).unwrap();
        let t = Utc.with_ymd_and_hms(2024, 5, 1, 17, 5, 0).unwrap();
        assert_eq!(n.clock(t), "14:05h");
        assert_eq!(n.joined("alice", t), "user alice joined. 14:05h");
        assert_eq!(n.left("alice", t), "user alice left. 14:05h");
        assert_eq!(n.says("bob", "hi", t), "bob says: hi. 14:05h");
    }

    #[test]
    fn offset_out_of_range_is_rejected() {
        assert!(Notices::new(true, 24 * 60).is_err());
        assert!(!Notices::disabled().enabled());
    }
}
