//! Runtime configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any demo
//! runs. Every variable has a default, so the binary works out of the box.
//!
//! ## Variables
//!
//! - `RUST_LOG` - Log level filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `FETCH_DELAY_MS` - Delay in milliseconds before the fetch demo
//!   resolves (default: 2000, max: 60000)
//! - `FIB_MAX_N` - Largest index the fib demo accepts (default: 93,
//!   which is the largest index whose value fits in `u64`)

use std::env;
use std::time::Duration;

use anyhow::Result;

use crate::demos::fib;

/// Default delay before the fetch demo resolves.
const DEFAULT_FETCH_DELAY_MS: u64 = 2_000;

/// Upper bound on the configurable fetch delay.
const MAX_FETCH_DELAY_MS: u64 = 60_000;

/// Tour configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// Delay in milliseconds before the fetch demo resolves.
    pub fetch_delay_ms: u64,
    /// Largest index accepted by the fib demo.
    pub fib_max_n: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Missing or unparseable values fall back to their defaults;
    /// out-of-range values are caught by [`validate`](Config::validate).
    pub fn from_env() -> Self {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let fetch_delay_ms = env::var("FETCH_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_FETCH_DELAY_MS);

        let fib_max_n = env::var("FIB_MAX_N")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(fib::MAX_N);

        Self {
            log_level,
            log_format,
            fetch_delay_ms,
            fib_max_n,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `fetch_delay_ms` exceeds 60000
    /// - `fib_max_n` exceeds the largest representable index
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.fetch_delay_ms > MAX_FETCH_DELAY_MS {
            anyhow::bail!(
                "FETCH_DELAY_MS must be at most {}, got {}",
                MAX_FETCH_DELAY_MS,
                self.fetch_delay_ms
            );
        }

        if self.fib_max_n > fib::MAX_N {
            anyhow::bail!(
                "FIB_MAX_N must be at most {} (larger terms do not fit in u64), got {}",
                fib::MAX_N,
                self.fib_max_n
            );
        }

        Ok(())
    }

    /// The fetch demo delay as a [`Duration`].
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Fetch delay: {} ms", self.fetch_delay_ms);
        tracing::info!("  Fib max index: {}", self.fib_max_n);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            fetch_delay_ms: DEFAULT_FETCH_DELAY_MS,
            fib_max_n: fib::MAX_N,
        }
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
