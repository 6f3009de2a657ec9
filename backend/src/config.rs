use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use axum::http::HeaderValue;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Origins allowed by the CORS layer
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_origins: CorsOrigins,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cors_origins: CorsOrigins::Any,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Read configuration from the process environment (and `.env`, if any)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Reads `EXPENSES_LISTEN_ADDR`, `EXPENSES_CORS_ORIGINS` and
    /// `EXPENSES_LOG_FORMAT`; unset keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr_raw =
            lookup("EXPENSES_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_addr_raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid EXPENSES_LISTEN_ADDR: {}", listen_addr_raw))?;

        let cors_origins = match lookup("EXPENSES_CORS_ORIGINS") {
            Some(raw) => parse_cors_origins(&raw)?,
            None => CorsOrigins::Any,
        };

        let log_format = match lookup("EXPENSES_LOG_FORMAT") {
            Some(raw) if raw.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(raw) if raw.trim().eq_ignore_ascii_case("text") || raw.trim().is_empty() => {
                LogFormat::Text
            }
            Some(raw) => return Err(anyhow!("Invalid EXPENSES_LOG_FORMAT: {}", raw)),
            None => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            cors_origins,
            log_format,
        })
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()
        .map(CorsOrigins::List)
}
