//! Machine-readable summaries of a finished log.

use serde::Serialize;

use crate::log::Log;

/// A serializable snapshot of one test's record.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Total assertions evaluated.
    pub assertions: usize,
    /// Assertions that passed.
    pub passed: usize,
    /// Assertions that failed.
    pub failed: usize,
    /// Whether the log held zero failures.
    pub healthy: bool,
    /// The retained entries, in insertion order.
    pub entries: Vec<ReportEntry>,
}

/// One retained assertion in a report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// The logical operation name.
    pub name: String,
    /// The outcome.
    pub passed: bool,
    /// The outcome-specific explanation.
    pub message: String,
    /// Attributed source file, failed assertions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Attributed source line, failed assertions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Report {
    /// Snapshot a log.
    pub fn from_log(log: &Log) -> Self {
        let entries = log
            .iter()
            .map(|assertion| ReportEntry {
                name: assertion.name().to_string(),
                passed: assertion.is_passing(),
                message: assertion.message().to_string(),
                file: assertion.location().map(|location| location.file.clone()),
                line: assertion.location().map(|location| location.line),
            })
            .collect();

        Self {
            assertions: log.count(),
            passed: log.count() - log.failures(),
            failed: log.failures(),
            healthy: log.is_healthy(),
            entries,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Log> for Report {
    fn from(log: &Log) -> Self {
        Self::from_log(log)
    }
}
