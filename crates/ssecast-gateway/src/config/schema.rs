use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use ssecast_core::error::{Result, SsecastError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub notices: NoticeSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            notices: NoticeSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SsecastError::UnsupportedVersion);
        }
        self.gateway.validate()?;
        self.notices.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Frames buffered per client before it counts as a failed delivery.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    #[serde(default = "default_keepalive_interval_ms")]
    pub keepalive_interval_ms: u64,

    #[serde(default = "default_index_html")]
    pub index_html: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            queue_capacity: default_queue_capacity(),
            keepalive_interval_ms: default_keepalive_interval_ms(),
            index_html: default_index_html(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.host
            .parse::<IpAddr>()
            .map_err(|_| SsecastError::BadRequest("gateway.host must be an IP address".into()))?;
        if !(1..=65536).contains(&self.queue_capacity) {
            return Err(SsecastError::BadRequest(
                "gateway.queue_capacity must be between 1 and 65536".into(),
            ));
        }
        if !(1000..=300000).contains(&self.keepalive_interval_ms) {
            return Err(SsecastError::BadRequest(
                "gateway.keepalive_interval_ms must be between 1000 and 300000".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| SsecastError::BadRequest("gateway.host must be an IP address".into()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    3000
}
fn default_queue_capacity() -> usize {
    256
}
fn default_keepalive_interval_ms() -> u64 {
    15000
}
fn default_index_html() -> String {
    "index.html".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoticeSection {
    #[serde(default = "default_notices_enabled")]
    pub enabled: bool,

    /// Offset used for the `HH:MMh` stamp. -180 is America/Sao_Paulo.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

impl Default for NoticeSection {
    fn default() -> Self {
        Self {
            enabled: default_notices_enabled(),
            utc_offset_minutes: default_utc_offset_minutes(),
        }
    }
}

impl NoticeSection {
    pub fn validate(&self) -> Result<()> {
        if !(-720..=840).contains(&self.utc_offset_minutes) {
            return Err(SsecastError::BadRequest(
                "notices.utc_offset_minutes must be between -720 and 840".into(),
            ));
        }
        Ok(())
    }
}

fn default_notices_enabled() -> bool {
    true
}
fn default_utc_offset_minutes() -> i32 {
    -180
}
