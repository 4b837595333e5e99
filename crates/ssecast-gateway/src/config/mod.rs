//! Gateway config loader (strict parsing).

pub mod schema;

use std::env;
use std::fs;
use std::path::Path;

use ssecast_core::error::{Result, SsecastError};

pub use schema::{GatewayConfig, GatewaySection, NoticeSection};

/// Used when `SSECAST_CONFIG` is unset. Missing file means defaults.
pub const DEFAULT_CONFIG_PATH: &str = "ssecast.yaml";

/// Load config from `$SSECAST_CONFIG` (must exist) or `ssecast.yaml`
/// (optional), then apply `PORT`.
pub fn load() -> Result<GatewayConfig> {
    let explicit = env::var("SSECAST_CONFIG").ok();
    let path = explicit.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

    let mut cfg = if explicit.is_some() || Path::new(path).exists() {
        load_from_file(path)?
    } else {
        tracing::info!(path, "no config file, using defaults");
        GatewayConfig::default()
    };

    apply_port_override(&mut cfg, env::var("PORT").ok().as_deref())?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SsecastError::Internal(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| SsecastError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// `PORT` wins over `gateway.port`. Empty values are ignored.
pub fn apply_port_override(cfg: &mut GatewayConfig, port: Option<&str>) -> Result<()> {
    let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(());
    };
    cfg.gateway.port = raw
        .parse()
        .map_err(|e| SsecastError::BadRequest(format!("PORT must be a port number ({raw}): {e}")))?;
    Ok(())
}
