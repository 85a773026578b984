//! Failure attribution: matching captured stack frames to the test's module.
//!
//! A [`Context`] holds the fixed identity of the module a test lives in,
//! created once per test case and reused for every assertion it raises. When
//! an assertion fails, the context walks the live stack from the innermost
//! frame outward and returns the first frame declared inside that module —
//! skipping the harness's own frames and normalizing closures to their
//! enclosing function.

use std::fmt;

use crate::error::VerdictError;
use crate::stack::{self, Frame};

/// Source location of a failed assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Source file that raised the assertion.
    pub file: String,
    /// Line of the assertion call.
    pub line: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: line {}", self.file, self.line)
    }
}

/// The declaring module of the currently running test.
///
/// Used only for stack matching; typically constructed from `module_path!()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    declaring: String,
}

impl Context {
    /// Create a context for the given module path.
    ///
    /// Returns [`VerdictError::EmptyContext`] for an empty path — that is a
    /// bug in the test, not a failed check.
    pub fn new(declaring: &str) -> Result<Self, VerdictError> {
        if declaring.is_empty() {
            return Err(VerdictError::EmptyContext);
        }
        Ok(Self {
            declaring: declaring.to_string(),
        })
    }

    /// The module path this context matches against.
    pub fn declaring(&self) -> &str {
        &self.declaring
    }

    /// Capture the live stack and locate the innermost frame inside this
    /// context. `None` when no frame matches or the matching frame carries
    /// no debug info; callers render a placeholder instead.
    pub(crate) fn locate(&self) -> Option<Location> {
        self.attribute(stack::capture())
    }

    /// Find the first frame whose declaring module equals this context,
    /// exactly — not a prefix or submodule match.
    ///
    /// An assertion raised from a submodule of the test's module, or from a
    /// free function declared elsewhere, will not be attributed. Accepted
    /// limitation.
    pub fn attribute<I>(&self, frames: I) -> Option<Location>
    where
        I: IntoIterator<Item = Frame>,
    {
        let frame = frames.into_iter().find(|frame| {
            declaring_module(&frame.symbol).as_deref() == Some(self.declaring.as_str())
        })?;

        match (frame.file, frame.line) {
            (Some(file), Some(line)) => Some(Location { file, line }),
            _ => None,
        }
    }
}

/// Resolve the declaring module of a demangled symbol path.
///
/// Strips the trailing `::h<hex>` disambiguator, truncates at the first
/// `{{closure}}` segment so a closure declared inside a test attributes to
/// the enclosing function, then drops the final segment (the function name
/// itself). `None` for symbols without a recoverable module path, such as
/// foreign frames.
fn declaring_module(symbol: &str) -> Option<String> {
    let mut segments: Vec<&str> = symbol.split("::").collect();

    if let Some(last) = segments.last() {
        let is_hash = last
            .strip_prefix('h')
            .map_or(false, |hex| hex.len() == 16 && hex.chars().all(|c| c.is_ascii_hexdigit()));
        if is_hash {
            segments.pop();
        }
    }

    if let Some(index) = segments.iter().position(|segment| *segment == "{{closure}}") {
        segments.truncate(index);
    }

    // What remains ends with the function name; its parent is the declaring
    // module. A single segment has no parent to attribute to.
    if segments.len() < 2 {
        return None;
    }
    segments.pop();

    Some(segments.join("::"))
}
