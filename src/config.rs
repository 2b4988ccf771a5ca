//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Variables may also come from a `.env` file (loaded by `main.rs`
//! through `dotenvy`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SEARCH_DELAY_MS` - Wait before search results are returned (default: 0, max: 10000)
//! - `BEHIND_PROXY` - Read client IP from proxy headers for rate limiting (default: false)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)

use anyhow::Result;
use std::env;
use std::time::Duration;

const MAX_SEARCH_DELAY_MS: u64 = 10_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub search_delay_ms: u64,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            search_delay_ms: 0,
            behind_proxy: false,
            static_dir: "static".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let search_delay_ms = env::var("SEARCH_DELAY_MS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.search_delay_ms);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.behind_proxy);

        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        Self {
            listen_addr,
            log_level,
            log_format,
            search_delay_ms,
            behind_proxy,
            static_dir,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `search_delay_ms` exceeds 10 seconds
    /// - `static_dir` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.search_delay_ms > MAX_SEARCH_DELAY_MS {
            anyhow::bail!(
                "SEARCH_DELAY_MS is too large (max: {}), got {}",
                MAX_SEARCH_DELAY_MS,
                self.search_delay_ms
            );
        }

        if self.static_dir.trim().is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        Ok(())
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Search delay: {}ms", self.search_delay_ms);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Static dir: {}", self.static_dir);
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "SEARCH_DELAY_MS",
        "BEHIND_PROXY",
        "STATIC_DIR",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:3000".to_string();
        config.search_delay_ms = 10_001;
        assert!(config.validate().is_err());

        config.search_delay_ms = 1_000;
        assert!(config.validate().is_ok());
        assert_eq!(config.search_delay(), Duration::from_secs(1));

        config.static_dir = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.search_delay_ms, 0);
        assert!(!config.behind_proxy);
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    #[serial]
    fn test_reads_environment() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("SEARCH_DELAY_MS", "1000");
            env::set_var("BEHIND_PROXY", "TRUE");
            env::set_var("STATIC_DIR", "/srv/static");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.search_delay_ms, 1000);
        assert!(config.behind_proxy);
        assert_eq!(config.static_dir, "/srv/static");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_delay_falls_back_to_default() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("SEARCH_DELAY_MS", "soon");
        }

        assert_eq!(Config::from_env().search_delay_ms, 0);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_rejects_invalid_format() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "pretty");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
