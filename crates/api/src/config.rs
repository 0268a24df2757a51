//! Environment-driven configuration, resolved once at startup.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address (`AEROSENSE_BIND`).
    pub bind: String,
    /// Artificial latency applied to security scans
    /// (`AEROSENSE_SCAN_DELAY_MS`). Purely cosmetic; defaults to zero.
    pub scan_delay: Duration,
    /// Whether the chatbot's text-generation capability is installed
    /// (`AEROSENSE_ENABLE_NLG`). Off by default; the chatbot then answers
    /// from canned replies.
    pub enable_nlg: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let bind =
            std::env::var("AEROSENSE_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let scan_delay_ms = std::env::var("AEROSENSE_SCAN_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);

        let enable_nlg = std::env::var("AEROSENSE_ENABLE_NLG")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let config = Self {
            bind,
            scan_delay: Duration::from_millis(scan_delay_ms),
            enable_nlg,
        };
        tracing::info!(
            bind = %config.bind,
            scan_delay_ms,
            enable_nlg,
            "configuration resolved"
        );
        config
    }
}
