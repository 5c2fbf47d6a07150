//! Logging setup
//!
//! Events go to stderr through a `tracing-subscriber` fmt layer so command
//! output on stdout stays clean. The filter comes from `RUST_LOG`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_level: String,
    /// Include the event target (module path) in each line
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            with_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG")
                .ok()
                .filter(|level| !level.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            ..Self::default()
        }
    }

    /// Raise the level to `debug` unless `RUST_LOG` already asked for something
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose && self.log_level == DEFAULT_LOG_LEVEL {
            self.log_level = "debug".to_string();
            self.with_target = true;
        }
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.log_level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log filter '{}': {}", self.log_level, e))
    }
}

/// Install the global subscriber
///
/// Fails if the filter does not parse or a subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(config.with_target),
        )
        .try_init()?;

    tracing::debug!(filter = %config.log_level, "logging initialized");
    Ok(())
}
