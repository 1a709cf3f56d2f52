//! Logging setup shared by both binaries
//!
//! Builds on the tracing stack: a daily-rolling file in the system temp
//! directory plus a stderr layer. `RUST_LOG` overrides the default filter.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory for the rolling log file; defaults to the system temp dir.
    pub log_dir: PathBuf,
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: std::env::temp_dir(),
            level: Level::INFO,
        }
    }
}

impl LogConfig {
    pub fn with_log_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.log_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

/// Default filter when `RUST_LOG` is unset. Covers both the binary's own
/// target and this library, where the conversion loop emits its events.
fn default_filter(program_name: &str, level: Level) -> String {
    format!("{}={},heic_core={}", program_name, level, level)
}

/// Initializes the global subscriber. Returns an error if the log directory
/// cannot be created; calling it twice fails, so binaries ignore the result
/// in tests.
pub fn init_logging(program_name: &str, config: LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", config.log_dir))?;

    let log_file_name = format!("{}.log", program_name);
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.log_dir, &log_file_name);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(program_name, config.level)));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!(
        program = program_name,
        log_dir = ?config.log_dir,
        "Logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_temp_dir() {
        let config = LogConfig::default();
        assert_eq!(config.log_dir, std::env::temp_dir());
        assert_eq!(config.level, Level::INFO);
    }

    #[test]
    fn test_default_filter_covers_library_target() {
        let filter = default_filter("heic2png", Level::INFO);
        assert_eq!(filter, "heic2png=INFO,heic_core=INFO");
        // The directive must parse, or EnvFilter drops everything.
        assert!(EnvFilter::try_new(&filter).is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = LogConfig::default()
            .with_log_dir("/tmp/heic2png-logs")
            .with_level(Level::DEBUG);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/heic2png-logs"));
        assert_eq!(config.level, Level::DEBUG);
    }
}
