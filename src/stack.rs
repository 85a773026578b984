//! Stack capture for failure attribution.
//!
//! Attribution needs the live call stack with file/line debug info. The
//! capture itself is the only platform-specific piece; the matching logic in
//! [`crate::context`] operates on plain [`Frame`] records and stays portable.

use backtrace::Backtrace;

/// One resolved stack frame, innermost frames first in a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Demangled symbol path, e.g. `my_crate::suite::my_test::{{closure}}`.
    pub symbol: String,
    /// Source file, when debug info is available.
    pub file: Option<String>,
    /// Source line, when debug info is available.
    pub line: Option<u32>,
}

/// Capture the current call stack.
///
/// Frames whose symbols cannot be resolved are dropped — thunks without
/// recoverable names can never match a context anyway. Must be called
/// synchronously at the failure site; frame data is only valid for the
/// currently executing call chain.
pub fn capture() -> Vec<Frame> {
    let trace = Backtrace::new();
    let mut frames = Vec::new();

    for frame in trace.frames() {
        for symbol in frame.symbols() {
            let Some(name) = symbol.name() else {
                continue;
            };
            frames.push(Frame {
                symbol: name.to_string(),
                file: symbol.filename().map(|path| path.display().to_string()),
                line: symbol.lineno(),
            });
        }
    }

    frames
}
