//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Reports go to stdout; logs always go to stderr so the two never mix.
//!
//! # Log Levels
//!
//! - `info`: one event per finished run, with final error and elapsed time
//! - `debug`: configurations as runs start, convergence samples
//! - `trace`: every integration record of the tabulated run

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Configuration for logging behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Maximum level logged by this workspace's crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter` when set.
    pub use_env_filter: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: false,
        }
    }
}

impl LogConfig {
    /// Builds the filter directive string for the configured level.
    ///
    /// Crates outside this workspace stay at `warn`.
    #[must_use]
    pub fn directives(&self) -> String {
        let level = self.level_filter.to_string().to_lowercase();
        format!(
            "warn,stepwise={level},stepwise_compare={level},\
             stepwise_core={level},stepwise_solvers={level}"
        )
    }

    fn env_filter(&self) -> EnvFilter {
        if self.use_env_filter {
            if let Ok(filter) = EnvFilter::try_from_default_env() {
                return filter;
            }
        }
        EnvFilter::new(self.directives())
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiet() {
        let config = LogConfig::default();

        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.directives().contains("stepwise_compare=warn"));
    }

    #[test]
    fn directives_follow_level() {
        let config = LogConfig {
            level_filter: LevelFilter::TRACE,
            ..LogConfig::default()
        };

        let directives = config.directives();
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("stepwise_solvers=trace"));
    }

    #[test]
    fn second_init_fails() {
        let config = LogConfig {
            use_env_filter: false,
            ..LogConfig::default()
        };

        // Whichever call comes first in this process wins.
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
