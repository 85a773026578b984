//! Configuration for diagnostic output display.

use serde::Deserialize;
use std::io::IsTerminal;

/// When to display the rendered log at teardown.
///
/// An unhealthy log is carried by the teardown error either way; this mode
/// governs the diagnostic print for healthy runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Always show the log regardless of the test result (default).
    #[default]
    Always,
    /// Only show the log when the test fails.
    OnFailure,
    /// Never show the log.
    Never,
}

/// Configuration for diagnostic output display.
///
/// Use the builder pattern to configure what gets displayed:
///
/// ```rust
/// use verdict::output::{OutputConfig, OutputMode};
///
/// let config = OutputConfig::new()
///     .log(OutputMode::OnFailure)
///     .truncate_at(80)
///     .colors(false);
/// ```
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// When to show the rendered log.
    pub log: OutputMode,
    /// Maximum characters before truncating an assertion message.
    pub truncate_at: usize,
    /// Whether to use ANSI colors in output.
    pub colors_enabled: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            log: OutputMode::Always,
            truncate_at: 120,
            colors_enabled: std::io::stdout().is_terminal(),
        }
    }
}

impl OutputConfig {
    /// Create a new output configuration with defaults.
    ///
    /// Default: `Always`, 120 character truncation, colors auto-detected
    /// from TTY.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure when to show the rendered log.
    pub fn log(mut self, mode: OutputMode) -> Self {
        self.log = mode;
        self
    }

    /// Set the maximum characters before truncating assertion messages.
    pub fn truncate_at(mut self, chars: usize) -> Self {
        self.truncate_at = chars;
        self
    }

    /// Enable or disable ANSI colors.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Create a quiet configuration that never prints.
    pub fn quiet() -> Self {
        Self {
            log: OutputMode::Never,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OutputConfig::new();
        assert_eq!(config.log, OutputMode::Always);
        assert_eq!(config.truncate_at, 120);
    }

    #[test]
    fn test_quiet_config() {
        let config = OutputConfig::quiet();
        assert_eq!(config.log, OutputMode::Never);
    }

    #[test]
    fn test_builder_chain() {
        let config = OutputConfig::new()
            .log(OutputMode::OnFailure)
            .truncate_at(100)
            .colors(false);

        assert_eq!(config.log, OutputMode::OnFailure);
        assert_eq!(config.truncate_at, 100);
        assert!(!config.colors_enabled);
    }

    #[test]
    fn test_mode_deserializes_kebab_case() {
        let mode: OutputMode = serde_json::from_str("\"on-failure\"").unwrap();
        assert_eq!(mode, OutputMode::OnFailure);
    }
}
