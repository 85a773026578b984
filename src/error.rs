//! Error types for the verdict harness.

use std::fmt;

/// Errors raised by the harness itself.
///
/// Assertion mismatches are never errors — they are recorded facts that make
/// the log unhealthy. This enum covers the single teardown failure signal
/// plus programmer errors detectable before any assertion runs.
#[derive(thiserror::Error)]
pub enum VerdictError {
    /// The test's log contained at least one failed assertion at teardown.
    /// The message is the full rendered log.
    #[error("{0}")]
    TestFailed(String),

    /// A context was constructed with an empty module path.
    #[error("the context path must not be empty")]
    EmptyContext,

    /// `retry` was called with fewer than two attempts.
    #[error("the number of attempts must be at least two, got {0}")]
    InvalidAttempts(usize),
}

impl VerdictError {
    /// Whether this error marks a bug in the test itself rather than a
    /// failed check.
    pub fn is_invalid_usage(&self) -> bool {
        !matches!(self, VerdictError::TestFailed(_))
    }
}

// The useful locations are already embedded in the rendered log, one per
// failed assertion. Debug output therefore carries only the message, so the
// test harness shows the log instead of a struct dump pointing at teardown.
impl fmt::Debug for VerdictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
