//! Tracing subscriber installation.
//!
//! [`TracingSetup`] collects the log level, output format and per-target
//! filter, then installs a global `tracing_subscriber` registry with
//! [`init`](TracingSetup::init).
//!
//! # Example
//!
//! ```
//! use scholar_core::{TracingFormat, TracingSetup};
//! use tracing::Level;
//!
//! // Development: pretty output with span enter/exit
//! let dev = TracingSetup::new()
//!     .with_level(Level::DEBUG)
//!     .with_format(TracingFormat::Pretty)
//!     .with_span_events(true);
//!
//! // Production: JSON lines for log aggregation
//! let prod = TracingSetup::new()
//!     .with_format(TracingFormat::Json)
//!     .with_env_filter("scholar_bridge=info,reqwest=warn");
//! # let _ = (dev, prod);
//! ```

use core::str::FromStr;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

// ─────────────────────────────────────────────────────────────────────────────
// TracingFormat
// ─────────────────────────────────────────────────────────────────────────────

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TracingFormat {
    /// Human-readable multi-line output (default).
    #[default]
    Pretty,
    /// Compact single-line output.
    Compact,
    /// JSON structured output for log aggregation.
    Json,
}

/// Error returned when parsing an unknown [`TracingFormat`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format '{0}', expected one of: pretty, compact, json")]
pub struct ParseTracingFormatError(String);

impl FromStr for TracingFormat {
    type Err = ParseTracingFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ParseTracingFormatError(s.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TracingSetup
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for the global tracing subscriber.
///
/// Filter precedence, highest first:
///
/// 1. An explicit [`with_env_filter`](Self::with_env_filter) directive string.
/// 2. The `RUST_LOG` environment variable, when [`with_rust_log`](Self::with_rust_log) is on.
/// 3. The configured level.
#[derive(Debug, Clone)]
pub struct TracingSetup {
    level: Level,
    format: TracingFormat,
    env_filter: Option<String>,
    rust_log: bool,
    span_events: bool,
}

impl Default for TracingSetup {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: TracingFormat::Pretty,
            env_filter: None,
            rust_log: true,
            span_events: false,
        }
    }
}

impl TracingSetup {
    /// Creates a setup with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum log level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: TracingFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets a filter directive string.
    ///
    /// Format: `target=level,target=level,...`
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Whether `RUST_LOG` is consulted when no explicit filter is set.
    #[must_use]
    pub fn with_rust_log(mut self, enabled: bool) -> Self {
        self.rust_log = enabled;
        self
    }

    /// Enables span enter/exit events in output.
    #[must_use]
    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    /// The configured level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// The configured format.
    #[must_use]
    pub fn format(&self) -> TracingFormat {
        self.format
    }

    /// Builds the filter this setup would install.
    ///
    /// An invalid explicit directive falls back to the configured level.
    #[must_use]
    pub fn build_filter(&self) -> EnvFilter {
        if let Some(filter) = &self.env_filter {
            return EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(self.level.as_str()));
        }
        if self.rust_log
            && let Ok(filter) = EnvFilter::try_from_default_env()
        {
            return filter;
        }
        EnvFilter::new(self.level.as_str())
    }

    /// Installs the global subscriber.
    ///
    /// Returns `false` if a global subscriber was already installed, in which
    /// case the existing one is kept.
    pub fn init(self) -> bool {
        let span_events = if self.span_events {
            FmtSpan::ENTER | FmtSpan::EXIT
        } else {
            FmtSpan::NONE
        };

        let fmt_layer = match self.format {
            TracingFormat::Pretty => tracing_subscriber::fmt::layer()
                .pretty()
                .with_span_events(span_events)
                .boxed(),
            TracingFormat::Compact => tracing_subscriber::fmt::layer()
                .compact()
                .with_span_events(span_events)
                .boxed(),
            TracingFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(span_events)
                .boxed(),
        };

        let installed = tracing_subscriber::registry()
            .with(fmt_layer)
            .with(self.build_filter())
            .try_init()
            .is_ok();

        if installed {
            tracing::debug!(level = %self.level, format = ?self.format, "tracing initialized");
        }
        installed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pretty_at_info() {
        let setup = TracingSetup::default();
        assert_eq!(setup.level(), Level::INFO);
        assert_eq!(setup.format(), TracingFormat::Pretty);
        assert!(!setup.span_events);
    }

    #[test]
    fn builder_sets_fields() {
        let setup = TracingSetup::new()
            .with_level(Level::DEBUG)
            .with_format(TracingFormat::Json)
            .with_env_filter("scholar_bridge=debug")
            .with_span_events(true);

        assert_eq!(setup.level(), Level::DEBUG);
        assert_eq!(setup.format(), TracingFormat::Json);
        assert_eq!(setup.env_filter.as_deref(), Some("scholar_bridge=debug"));
        assert!(setup.span_events);
    }

    #[test]
    fn explicit_filter_is_used() {
        let filter = TracingSetup::new()
            .with_env_filter("scholar_bridge=trace")
            .build_filter();
        assert!(filter.to_string().contains("scholar_bridge=trace"));
    }

    #[test]
    fn invalid_filter_falls_back_to_level() {
        let filter = TracingSetup::new()
            .with_level(Level::WARN)
            .with_env_filter("scholar_bridge=loud")
            .build_filter();
        assert!(filter.to_string().eq_ignore_ascii_case("warn"));
    }

    #[test]
    fn level_is_used_without_rust_log() {
        let filter = TracingSetup::new()
            .with_level(Level::ERROR)
            .with_rust_log(false)
            .build_filter();
        assert!(filter.to_string().eq_ignore_ascii_case("error"));
    }

    #[test]
    fn formats_parse_case_insensitively() {
        assert_eq!("JSON".parse::<TracingFormat>(), Ok(TracingFormat::Json));
        assert_eq!(" compact ".parse::<TracingFormat>(), Ok(TracingFormat::Compact));
        assert_eq!("pretty".parse::<TracingFormat>(), Ok(TracingFormat::Pretty));
        assert!("xml".parse::<TracingFormat>().is_err());
    }

    #[test]
    fn second_init_keeps_existing_subscriber() {
        let _ = TracingSetup::new().with_rust_log(false).init();
        assert!(!TracingSetup::new().with_rust_log(false).init());
    }
}
