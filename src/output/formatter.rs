//! Rendering of finished logs for the terminal.

use crate::assertion::Assertion;
use crate::log::Log;
use crate::output::config::{OutputConfig, OutputMode};

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Formatter for the diagnostic log printed at teardown.
#[derive(Debug)]
pub struct OutputFormatter {
    config: OutputConfig,
}

impl OutputFormatter {
    /// Create a new formatter with the given configuration.
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Create a formatter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(OutputConfig::new())
    }

    /// Check if the log should be shown given the test result.
    pub fn should_show_log(&self, test_passed: bool) -> bool {
        match self.config.log {
            OutputMode::Always => true,
            OutputMode::OnFailure => !test_passed,
            OutputMode::Never => false,
        }
    }

    /// Format a single assertion for display.
    pub fn format_assertion(&self, assertion: &Assertion) -> String {
        let message = self.truncate(assertion.message());

        if assertion.is_passing() {
            if self.config.colors_enabled {
                format!(" {}+{} {} passed. {}", GREEN, RESET, assertion.name(), message)
            } else {
                format!(" + {} passed. {}", assertion.name(), message)
            }
        } else if self.config.colors_enabled {
            format!(
                " {}-{} {} failed: {} {}",
                RED,
                RESET,
                assertion.name(),
                message,
                assertion.location_display()
            )
        } else {
            format!(
                " - {} failed: {} {}",
                assertion.name(),
                message,
                assertion.location_display()
            )
        }
    }

    /// Format the whole log: summary line, then each retained entry.
    pub fn format_log(&self, log: &Log) -> String {
        let summary = format!(
            "Assertions: {}, Passed: {}, Failed: {}",
            log.count(),
            log.count() - log.failures(),
            log.failures()
        );

        let mut output = if self.config.colors_enabled {
            format!("{}{}{}", YELLOW, summary, RESET)
        } else {
            summary
        };

        for assertion in log.iter() {
            output.push('\n');
            output.push_str(&self.format_assertion(assertion));
        }

        output
    }

    /// Print the log if the output mode allows it for this result.
    pub fn print_log(&self, log: &Log, test_passed: bool) {
        if !self.should_show_log(test_passed) {
            return;
        }

        println!("{}", self.format_log(log));
    }

    /// Truncate a string to the configured maximum length.
    /// Handles multi-byte UTF-8 characters safely.
    fn truncate(&self, s: &str) -> String {
        let max = self.config.truncate_at;
        let char_count = s.chars().count();

        if char_count <= max {
            s.to_string()
        } else {
            // Reserve 3 chars for "..."
            let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
            format!("{}...", truncated)
        }
    }
}
