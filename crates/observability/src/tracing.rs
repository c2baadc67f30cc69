//! Tracing/logging initialization.
//!
//! Filtering comes from `RUST_LOG` (default `info`), the output format from
//! `ROSTER_LOG_FORMAT` (`json` or `pretty`, default `json`).

use core::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "ROSTER_LOG_FORMAT";

/// Output format of the fmt subscriber.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Initialize tracing/logging for the process, reading the format from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let (format, rejected) = match std::env::var(LOG_FORMAT_ENV) {
        Ok(raw) => match raw.parse::<LogFormat>() {
            Ok(format) => (format, None),
            Err(e) => (LogFormat::default(), Some(e)),
        },
        Err(_) => (LogFormat::default(), None),
    };

    init_with(format);

    if let Some(e) = rejected {
        ::tracing::warn!("{LOG_FORMAT_ENV}: {e}; falling back to json");
    }
}

/// Initialize tracing/logging with an explicit output format.
pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    // try_init fails once a global subscriber is set; that is the no-op path.
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
