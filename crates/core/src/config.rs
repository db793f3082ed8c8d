use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u16(key: &str, default: u16) -> u16 {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "{} is set to '{}', which is not a port number. Using {}.",
                key,
                raw,
                default
            );
            default
        }),
        Err(_) => default,
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            api: ApiConfig::from_env(),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!(
            "  server: host={}, port={}",
            self.server.host,
            self.server.port
        );
        tracing::info!(
            "  api:    prefix={}, description={}",
            self.api.path_prefix,
            self.api.description_path
        );
        tracing::info!("  output: {}", self.api.widgets_path);
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: env_or("HOST", "127.0.0.1"),
            port: env_u16("PORT", 8000),
        }
    }
}

// ── Interface description / output ────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Route prefix that marks an endpoint as widget-eligible.
    pub path_prefix: String,
    /// Where the interface description JSON is read from.
    pub description_path: String,
    /// Where the generated widget set is written for inspection.
    pub widgets_path: String,
}

impl ApiConfig {
    fn from_env() -> Self {
        Self {
            path_prefix: env_or("API_PREFIX", "/api"),
            description_path: env_or("OPENAPI_PATH", "openapi.json"),
            widgets_path: env_or("WIDGETS_PATH", "widgets.json"),
        }
    }
}
