//! Ambient infrastructure shared by Scholar binaries and tests.
//!
//! - [`TracingSetup`] - Logging and observability via the `tracing` crate
//!
//! # Example
//!
//! ```no_run
//! use scholar_core::{TracingFormat, TracingSetup};
//! use tracing::Level;
//!
//! TracingSetup::new()
//!     .with_level(Level::DEBUG)
//!     .with_format(TracingFormat::Compact)
//!     .init();
//! ```

mod tracing_setup;

pub use tracing_setup::{ParseTracingFormatError, TracingFormat, TracingSetup};
