//! Structured logging for the seedlore tools.
//!
//! Library crates emit through the `log` facade; this crate installs a
//! `tracing` subscriber that collects those records alongside native
//! `tracing` events. Console output carries timestamps, module paths, and
//! severity; verbose runs can additionally write JSON to a file for
//! post-mortem analysis.

use std::fs::File;
use std::io;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `filter` overrides the default level string; `RUST_LOG` in the
/// environment takes precedence over both. When `log_dir` is given, a JSON
/// file layer is added next to the console layer.
///
/// # Examples
///
/// ```no_run
/// use seedlore_log::init_logging;
///
/// // Basic initialization
/// init_logging(None, None);
///
/// // Verbose, with JSON file output
/// let log_dir = std::path::Path::new("./logs");
/// init_logging(Some("debug"), Some(log_dir));
/// ```
pub fn init_logging(filter: Option<&str>, log_dir: Option<&Path>) {
    let filter_str = filter.unwrap_or("info");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    match log_dir.map(open_log_file) {
        Some(Ok(log_file)) => {
            let file_layer = fmt::layer()
                .with_writer(log_file)
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::uptime())
                .json();

            subscriber.with(file_layer).init();
        }
        Some(Err(err)) => {
            // console logging still works; say so once the subscriber is up
            subscriber.init();
            tracing::warn!("JSON log file disabled: {err}");
        }
        None => subscriber.init(),
    }
}

fn open_log_file(log_dir: &Path) -> io::Result<File> {
    std::fs::create_dir_all(log_dir)?;
    File::create(log_dir.join("seedlore.log"))
}

/// An `EnvFilter` with the default filter string, for tests and for
/// consistent default behavior.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter_str = format!("{}", default_env_filter());
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_subsystem_filter() {
        let filter = EnvFilter::new("info,seedlore_biome=debug");
        let filter_str = format!("{}", filter);
        assert!(filter_str.contains("seedlore_biome=debug"));
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,seedlore_finder=trace",
            "warn,seedlore_structure=debug,seedlore_noise=trace",
            "error",
        ];
        for filter_str in &valid_filters {
            let result = EnvFilter::try_from(*filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {}", filter_str);
        }
    }

    #[test]
    fn test_log_file_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_file = open_log_file(temp_dir.path()).unwrap();
        drop(log_file);
        assert!(temp_dir.path().join("seedlore.log").is_file());
    }

    #[test]
    fn test_log_dir_not_creatable() {
        // a regular file in place of the directory must surface an error
        // rather than silently skipping the file layer
        let blocker = tempfile::NamedTempFile::new().unwrap();
        assert!(open_log_file(blocker.path()).is_err());
    }
}
