//! Runtime configuration assembled from the environment.
//!
//! Values come from process env vars (a `.env` file is honored when present),
//! with CLI flags applied on top by `main`. Every knob has a default so a
//! bare `sortex-server` starts on a fresh machine.

use std::env;
use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DB_PATH: &str = "sortex.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    /// Whether a `.env` file was found next to the process and loaded.
    pub env_file_loaded: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path of the single-file SQLite store.
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Origins allowed by CORS. Empty means every origin is allowed.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let env_file_loaded = dotenvy::dotenv().is_ok();

        let host = env::var("SORTEX_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = parse_var("SORTEX_PORT").unwrap_or(DEFAULT_PORT);
        let path = env::var("SORTEX_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));
        let allowed_origins = env::var("SORTEX_CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        Self {
            server: ServerConfig { host, port },
            database: DatabaseConfig { path },
            cors: CorsConfig { allowed_origins },
            env_file_loaded,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = name, value = %raw, "ignoring unparseable configuration value");
            None
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
