//! The ordered record of assertions for one test instance.

use std::fmt;

use crate::assertion::Assertion;

/// An ordered collection of assertions with running pass/fail counters.
///
/// `count` and `failures` cover every assertion ever added; the retained
/// entries may be a subset when the only-failures policy is set. The policy
/// is fixed at construction — narrowing an existing log means building a new
/// one via [`Log::narrow_to_failures_only`].
#[derive(Debug)]
pub struct Log {
    entries: Vec<Assertion>,
    count: usize,
    failures: usize,
    only_failures: bool,
}

impl Log {
    /// Create an empty log with the given retention policy.
    pub fn new(only_failures: bool) -> Self {
        Self {
            entries: Vec::new(),
            count: 0,
            failures: 0,
            only_failures,
        }
    }

    /// Total assertions evaluated, including ones not retained.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total failed assertions.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// The retention policy.
    pub fn only_failures(&self) -> bool {
        self.only_failures
    }

    /// A log is healthy when it holds zero failures; an empty log is
    /// vacuously healthy.
    pub fn is_healthy(&self) -> bool {
        self.failures == 0
    }

    /// Record an assertion and return its own state, so several checks can
    /// be chained in one conditional.
    ///
    /// Failed assertions are always retained; passed ones only when the
    /// policy allows. Both are always counted.
    pub fn add(&mut self, assertion: Assertion) -> bool {
        let passed = assertion.is_passing();

        if !passed {
            self.entries.push(assertion);
            self.failures += 1;
        } else if !self.only_failures {
            self.entries.push(assertion);
        }

        self.count += 1;

        passed
    }

    /// Iterate over the retained assertions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Assertion> {
        self.entries.iter()
    }

    /// Number of retained assertions.
    pub fn retained(&self) -> usize {
        self.entries.len()
    }

    /// Rebuild this log under the only-failures policy by replaying every
    /// retained entry.
    ///
    /// Counts reset and rebuild from the replay: passed assertions that were
    /// already dropped cannot be recovered, so the narrowed counts reflect
    /// the retained entries, not the original totals.
    pub fn narrow_to_failures_only(self) -> Log {
        let mut narrowed = Log::new(true);
        for assertion in self.entries {
            narrowed.add(assertion);
        }
        narrowed
    }

    pub(crate) fn into_entries(self) -> Vec<Assertion> {
        self.entries
    }
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.entries.iter().map(ToString::to_string).collect();
        write!(
            f,
            "Assertions: {}, Passed: {}, Failed: {}\n{}",
            self.count,
            self.count - self.failures,
            self.failures,
            rendered.join("\n")
        )
    }
}
