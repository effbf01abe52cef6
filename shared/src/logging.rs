//! Shared logging utilities for consistent tracing across the harness

use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Default filter for the harness crates at the given level
pub fn default_filter(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("stellar_tester={base_level},shared={base_level},reqwest=warn,hyper=warn")
}

/// Initialize the stdout subscriber; `RUST_LOG` wins over the level argument
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(log_level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Log a named step of a scenario
pub fn log_step(scenario: &str, step: &str) {
    info!(
        scenario = scenario,
        timestamp = format_timestamp(),
        "📋 {}",
        step
    );
}

/// Log a cleanup failure line
pub fn log_cleanup_warning(message: &str) {
    warn!(
        timestamp = format_timestamp(),
        "🧹 Cleanup warning: {}",
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_level() {
        assert_eq!(
            default_filter(Some("debug")),
            "stellar_tester=debug,shared=debug,reqwest=warn,hyper=warn"
        );
        assert!(default_filter(None).starts_with("stellar_tester=info"));
    }

    #[test]
    fn test_timestamp_format() {
        let ts = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(ts.len(), 12);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[8..9], ".");
    }
}
