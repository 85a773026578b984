//! # verdict
//!
//! A soft-assertion harness for Rust tests.
//!
//! Checks raised through a [`TestCase`] never abort the test body; each one
//! is recorded as a pass/fail fact, failures are attributed to the exact
//! source line that raised them, and the whole record is judged once at
//! teardown. A test with three failing checks reports all three, each with
//! its own file and line.
//!
//! ## Quick start
//!
//! ```rust
//! use verdict::{Record, TestCase, VerdictError};
//!
//! fn main() -> Result<(), VerdictError> {
//!     let mut test = TestCase::new(module_path!())?;
//!
//!     test.are_equal(&4, &(2 + 2));
//!     test.is_true("verdict".starts_with("ver"));
//!     test.contains(vec![1, 2, 3], &2);
//!
//!     test.finish()
//! }
//! ```
//!
//! ## Retrying flaky checks
//!
//! ```rust
//! use verdict::{Record, TestCase, VerdictError};
//!
//! fn main() -> Result<(), VerdictError> {
//!     let mut test = TestCase::new(module_path!())?;
//!     let mut polls = 0;
//!
//!     test.retry(3, |attempt| {
//!         polls += 1;
//!         attempt.is_greater_than_or_equal_to(&polls, &2);
//!     })?;
//!
//!     test.finish()
//! }
//! ```
//!
//! Only the last attempt's record reaches the test's log; earlier failing
//! attempts are discarded.
//!
//! ## Expecting errors
//!
//! ```rust
//! use verdict::{Record, TestCase, VerdictError};
//!
//! fn main() -> Result<(), VerdictError> {
//!     let mut test = TestCase::new(module_path!())?;
//!
//!     test.throws::<std::num::ParseIntError, _>(|| {
//!         "not a number".parse::<i32>()?;
//!         Ok(())
//!     });
//!
//!     test.finish()
//! }
//! ```

pub mod assertion;
pub mod case;
pub mod context;
pub mod error;
pub mod log;
pub mod output;
pub mod record;
pub mod report;
pub mod retry;
pub mod stack;

#[cfg(feature = "yaml")]
pub mod config;

// Core types
pub use assertion::{Assertion, TypeToken};
pub use case::TestCase;
pub use context::{Context, Location};
pub use error::VerdictError;
pub use log::Log;
pub use record::Record;
pub use retry::Attempt;

// Reporting
pub use output::{OutputConfig, OutputFormatter, OutputMode};
pub use report::{Report, ReportEntry};

// Configuration (feature-gated)
#[cfg(feature = "yaml")]
pub use config::Config;
