//! Test lifecycle: one log and one context per test instance.

use std::mem;

use crate::context::Context;
use crate::error::VerdictError;
use crate::log::Log;
use crate::output::OutputFormatter;
use crate::record::Record;
use crate::retry::{self, Attempt};

#[cfg(feature = "yaml")]
use crate::config::Config;

/// An assorted series of assertions for one test.
///
/// Construct one per test with the module path of the test itself
/// (typically `module_path!()`), raise assertions through the [`Record`]
/// surface, and call [`TestCase::finish`] at the end. An unhealthy log
/// turns into a [`VerdictError::TestFailed`] carrying the full rendered
/// record; a healthy one prints as a diagnostic.
///
/// Dropping an unfinished case runs the same teardown, panicking on an
/// unhealthy log, so a forgotten `finish` still fails the test.
#[derive(Debug)]
pub struct TestCase {
    log: Log,
    context: Context,
    formatter: OutputFormatter,
    finished: bool,
}

impl TestCase {
    /// Create a test case attributed to the given module path.
    pub fn new(context_path: &str) -> Result<Self, VerdictError> {
        Self::with_formatter(context_path, OutputFormatter::with_defaults())
    }

    /// Create a test case with explicit output settings.
    pub fn with_formatter(
        context_path: &str,
        formatter: OutputFormatter,
    ) -> Result<Self, VerdictError> {
        Ok(Self {
            log: Log::new(false),
            context: Context::new(context_path)?,
            formatter,
            finished: false,
        })
    }

    /// Create a test case from a loaded configuration, which controls the
    /// default retention policy and the output settings.
    #[cfg(feature = "yaml")]
    pub fn from_config(context_path: &str, config: &Config) -> Result<Self, VerdictError> {
        let mut case =
            Self::with_formatter(context_path, OutputFormatter::new(config.output()))?;
        case.log = Log::new(config.only_failures);
        Ok(case)
    }

    /// The accumulated record so far.
    pub fn log(&self) -> &Log {
        &self.log
    }

    /// Whether the record holds zero failures.
    pub fn is_healthy(&self) -> bool {
        self.log.is_healthy()
    }

    /// Keep only failed assertions from here on.
    ///
    /// A one-way narrowing: the retained entries replay into a fresh
    /// only-failures log, dropping previously retained passed entries.
    /// Counts rebuild from the replay.
    pub fn log_only_failures(&mut self) {
        let retained = mem::replace(&mut self.log, Log::new(true));
        self.log = retained.narrow_to_failures_only();
    }

    /// Re-run `action` up to `attempts` times (at least two), stopping at
    /// the first attempt with no failures.
    ///
    /// Each attempt records into its own scoped [`Attempt`]; only the last
    /// executed attempt's entries merge back into this case's log. See
    /// [`crate::retry`].
    pub fn retry<F>(&mut self, attempts: usize, action: F) -> Result<(), VerdictError>
    where
        F: FnMut(&mut Attempt),
    {
        retry::run(&mut self.log, &self.context, attempts, action)
    }

    /// Teardown: judge the record and emit it.
    ///
    /// Returns [`VerdictError::TestFailed`] carrying the rendered log when
    /// any assertion failed; otherwise prints the log as a diagnostic,
    /// subject to the output mode. Idempotent — a second call is a no-op.
    pub fn finish(&mut self) -> Result<(), VerdictError> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        if !self.log.is_healthy() {
            return Err(VerdictError::TestFailed(self.log.to_string()));
        }

        self.formatter.print_log(&self.log, true);
        Ok(())
    }
}

impl Record for TestCase {
    fn active_log(&mut self) -> &mut Log {
        &mut self.log
    }

    fn context(&self) -> &Context {
        &self.context
    }
}

impl Drop for TestCase {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        if let Err(error) = self.finish() {
            panic!("{error}");
        }
    }
}
