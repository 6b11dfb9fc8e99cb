use anyhow::{bail, Context, Result};
use std::time::Duration;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
/// The OpenAI API key is deliberately absent: callers supply it per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_base_url: String,
    pub llm_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            llm_timeout: parse_timeout(std::env::var("LLM_TIMEOUT_SECS").ok().as_deref())?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Seconds allowed for one completion call. Defaults to 120.
fn parse_timeout(value: Option<&str>) -> Result<Duration> {
    let secs = match value {
        Some(v) => v
            .trim()
            .parse::<u64>()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
        None => 120,
    };
    if secs == 0 {
        bail!("LLM_TIMEOUT_SECS must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}
