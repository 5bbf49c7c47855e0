//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite URL (default: `sqlite://urls.db`; the file is
//!   created on first start)
//! - `LISTEN` - Bind address (default: `0.0.0.0:5001`)
//! - `ALLOWED_ORIGINS` - Comma-separated CORS allow-list (default: the
//!   production frontend origin and the local Vite dev origin)
//! - `LOGO_PATH` - Logo image composited into QR codes (default:
//!   `logo_pkg.png`; a missing file degrades QR output to plain symbols)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// CORS origins used when `ALLOWED_ORIGINS` is not set.
const DEFAULT_ALLOWED_ORIGINS: &str = "https://kodeqr.pkgwagir.or.id,http://localhost:5173";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Origins allowed to perform cross-origin requests.
    pub allowed_origins: Vec<String>,
    /// Logo asset composited into QR symbols, decoded once at startup.
    pub logo_path: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://urls.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5001".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let allowed_origins = parse_origins(
            &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
        );

        let logo_path =
            PathBuf::from(env::var("LOGO_PATH").unwrap_or_else(|_| "logo_pkg.png".to_string()));

        Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            allowed_origins,
            logo_path,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite URL
    /// - `listen_addr` is not in `host:port` form
    /// - `log_format` is not `text` or `json`
    /// - the origin allow-list is empty or contains a non-HTTP(S) origin
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.allowed_origins.is_empty() {
            anyhow::bail!("ALLOWED_ORIGINS must list at least one origin");
        }

        for origin in &self.allowed_origins {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                anyhow::bail!("ALLOWED_ORIGINS entries must be HTTP(S) origins, got '{origin}'");
            }
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Allowed origins: {}", self.allowed_origins.join(", "));
        tracing::info!("  Logo path: {}", self.logo_path.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Splits a comma-separated origin list, trimming whitespace and dropping
/// empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
