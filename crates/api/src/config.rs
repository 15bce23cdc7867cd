use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context};
use axum::http::HeaderValue;

/// Directory mounted as a persistent volume in container deployments.
const DATA_VOLUME: &str = "/data";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => bail!("unknown log format '{other}' (expected 'text' or 'json')"),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// SQLite connection URL.
    pub database_url: String,
    /// Max pooled SQLite connections (default: `5`).
    pub db_max_connections: u32,
    /// Directory holding the built single-page client (default: `static`).
    pub static_dir: PathBuf,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Insert the default categories into an empty database on startup.
    pub seed_default_categories: bool,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                                   |
    /// |---------------------------|-------------------------------------------|
    /// | `HOST`                    | `0.0.0.0`                                 |
    /// | `PORT`                    | `8000`                                    |
    /// | `DATABASE_URL`            | `/data/promptbox.db` or `./promptbox.db`  |
    /// | `DB_MAX_CONNECTIONS`      | `5`                                       |
    /// | `STATIC_DIR`              | `static`                                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`                   |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                                      |
    /// | `SEED_DEFAULT_CATEGORIES` | `true`                                    |
    /// | `LOG_FORMAT`              | `text`                                    |
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&var, "PORT", 8000u16)?;

        let database_url = var("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| default_database_url(Path::new(DATA_VOLUME)));
        let db_max_connections = parse_or(&var, "DB_MAX_CONNECTIONS", 5u32)?;
        if db_max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        let static_dir = PathBuf::from(var("STATIC_DIR").unwrap_or_else(|| "static".into()));

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin '{o}'"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let request_timeout_secs = parse_or(&var, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let seed_default_categories = parse_or(&var, "SEED_DEFAULT_CATEGORIES", true)?;
        let log_format = parse_or(&var, "LOG_FORMAT", LogFormat::Text)?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            static_dir,
            cors_origins,
            request_timeout_secs,
            seed_default_categories,
            log_format,
        })
    }
}

/// The database lives on the data volume when one is mounted, otherwise
/// next to the working directory.
fn default_database_url(data_volume: &Path) -> String {
    if data_volume.is_dir() {
        format!("sqlite://{}", data_volume.join("promptbox.db").display())
    } else {
        "sqlite://promptbox.db".to_string()
    }
}

fn parse_or<F, T>(var: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match var(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{key} has invalid value '{raw}': {e}")),
    }
}
