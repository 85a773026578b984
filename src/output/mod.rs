//! Diagnostic output for finished logs.
//!
//! Provides configurable display of the per-test log at teardown, with
//! support for showing it always, on failure, or never.
//!
//! # Example
//!
//! ```rust
//! use verdict::output::{OutputConfig, OutputFormatter, OutputMode};
//!
//! let config = OutputConfig::new()
//!     .log(OutputMode::OnFailure)
//!     .colors(false);
//!
//! let formatter = OutputFormatter::new(config);
//! assert!(!formatter.should_show_log(true));
//! ```

mod config;
mod formatter;

pub use config::{OutputConfig, OutputMode};
pub use formatter::OutputFormatter;
