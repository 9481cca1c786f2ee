//! services/app/src/config.rs
//!
//! Defines the companion service's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub database_url: String,
    pub log_level: Level,
    pub generation_api_key: Option<String>,
    /// `None` keeps the client library's default (api.openai.com).
    pub generation_api_base: Option<String>,
    pub assist_model: String,
    pub recommend_model: String,
    pub cors_origin: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Load Server and Storage Settings ---
        let bind_address_str = lookup("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://smartx.db?mode=rwc".to_string());
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::InvalidValue(
                "DATABASE_URL".to_string(),
                "only sqlite: URLs are supported".to_string(),
            ));
        }

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Load API Keys (as optional) ---
        let generation_api_key = lookup("GENERATION_API_KEY")
            .or_else(|| lookup("OPENAI_API_KEY"))
            .or_else(|| lookup("GEMINI_API_KEY"));
        let generation_api_base = lookup("GENERATION_API_BASE");

        // --- Load Adapter-specific Settings ---
        let assist_model = lookup("ASSIST_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string());
        let recommend_model = lookup("RECOMMEND_MODEL").unwrap_or_else(|| "gpt-4o".to_string());
        let cors_origin =
            lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:5173".to_string());

        Ok(Self {
            bind_address,
            database_url,
            log_level,
            generation_api_key,
            generation_api_base,
            assist_model,
            recommend_model,
            cors_origin,
        })
    }

    /// The generation key is optional at load time so `openapi` and tests can run
    /// without one; the server itself requires it.
    pub fn require_generation_api_key(&self) -> Result<&str, ConfigError> {
        self.generation_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingVar("GENERATION_API_KEY".to_string()))
    }
}
