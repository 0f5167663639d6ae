use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The model API key is deliberately NOT configuration: it belongs to the
/// caller's session and arrives with each generate request.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Extra denied mail domains appended to the built-in policy.
    pub deny_domains_extra: Vec<String>,
    /// Extra denied local parts appended to the built-in policy.
    pub deny_local_parts_extra: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            deny_domains_extra: list_env("DENY_DOMAINS_EXTRA"),
            deny_local_parts_extra: list_env("DENY_LOCAL_PARTS_EXTRA"),
        })
    }
}

/// Optional comma-separated env var; blank entries are ignored.
fn list_env(key: &str) -> Vec<String> {
    std::env::var(key)
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
