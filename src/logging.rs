//! Logging initialization.
//!
//! Logs go to standard error alongside diagnostics, so the default level is
//! kept at `warn` and raised with `-v`.

use clap::ValueEnum;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

static INIT_ONCE: Once = Once::new();

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "toy_robot=warn",
        1 => "toy_robot=info",
        2 => "toy_robot=debug",
        _ => "toy_robot=trace",
    }
}

/// Installs the global subscriber. Later calls are ignored.
///
/// `RUST_LOG` takes precedence over `verbosity` when set.
pub fn init(format: LogFormat, verbosity: u8) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        // A subscriber may already be installed (e.g. by a test harness).
        let _ = match format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_installs_subscriber_once() {
        init(LogFormat::Pretty, 0);
        assert!(INIT_ONCE.is_completed());
        assert!(tracing::dispatcher::has_been_set());

        // A second call with other settings is a no-op rather than a panic.
        init(LogFormat::Json, 3);
        assert!(tracing::dispatcher::has_been_set());
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_directive(0), "toy_robot=warn");
        assert_eq!(default_directive(2), "toy_robot=debug");
        assert_eq!(default_directive(9), "toy_robot=trace");
    }
}
