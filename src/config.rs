//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup; a `.env` file is honored for
//! local development.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the remote country directory document
    pub directory_url: String,
    /// Local pedometer step log; `None` means no sensor source is
    /// configured and the device reading will be unavailable
    pub step_log_path: Option<PathBuf>,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            directory_url: "https://www.stickerbru.com/example.json".to_string(),
            step_log_path: None,
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            directory_url: env::var("DIRECTORY_URL")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("DIRECTORY_URL"))?,
            step_log_path: env::var("STEP_LOG").ok().map(PathBuf::from),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
