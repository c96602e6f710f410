//! Basic Config - Pure configuration data structures
//!
//! This crate contains only data structures, no I/O or global state.
//! It serves as the shared configuration vocabulary across all Basic crates.
//!
//! Every type deserializes with defaults, so a partial JSON file such as
//! `{"diagnostics": "context"}` is a valid configuration.

use serde::Deserialize;

/// Log verbosity, ordered from quietest to loudest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name (case-insensitive). `silent` maps to `Error`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("basic::{}", self.as_str())
    }
}

/// Logging levels, global with optional per-phase overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub global: LogLevel,
    pub lexer: Option<LogLevel>,
}

impl LoggingConfig {
    /// Effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        match phase {
            Phase::Lexer => self.lexer.unwrap_or(self.global),
            Phase::Cli => self.global,
        }
    }
}

/// How a lexical diagnostic is shown to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticStyle {
    /// Single line, `Illegal characters: '&'File<stdin>, line1`
    #[default]
    Compact,
    /// Compact line followed by the offending source line and a caret marker
    Context,
}

/// Output format for scan results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub logging: LoggingConfig,
    pub diagnostics: DiagnosticStyle,
    pub output: OutputFormat,
}

impl BasicConfig {
    /// Parse a configuration from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = BasicConfig::default();
        assert_eq!(cfg.logging.global, LogLevel::Warn);
        assert_eq!(cfg.logging.lexer, None);
        assert_eq!(cfg.diagnostics, DiagnosticStyle::Compact);
        assert_eq!(cfg.output, OutputFormat::Text);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Lexer.as_str(), "lexer");
        assert_eq!(Phase::Lexer.target(), "basic::lexer");
        assert_eq!(Phase::Cli.target(), "basic::cli");
    }

    #[test]
    fn test_level_for_override() {
        let cfg = LoggingConfig {
            global: LogLevel::Info,
            lexer: Some(LogLevel::Trace),
        };
        assert_eq!(cfg.level_for(Phase::Lexer), LogLevel::Trace);
        assert_eq!(cfg.level_for(Phase::Cli), LogLevel::Info);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("silent"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("loud"), None);
        assert!(LogLevel::Error < LogLevel::Trace);
    }

    #[test]
    fn test_partial_json() {
        let cfg = BasicConfig::from_json_str(r#"{"diagnostics": "context"}"#).unwrap();
        assert_eq!(cfg.diagnostics, DiagnosticStyle::Context);
        assert_eq!(cfg.output, OutputFormat::Text);
        assert_eq!(cfg.logging, LoggingConfig::default());
    }

    #[test]
    fn test_full_json() {
        let text = r#"{
            "logging": { "global": "info", "lexer": "trace" },
            "diagnostics": "compact",
            "output": "json"
        }"#;
        let cfg = BasicConfig::from_json_str(text).unwrap();
        assert_eq!(cfg.logging.global, LogLevel::Info);
        assert_eq!(cfg.logging.lexer, Some(LogLevel::Trace));
        assert_eq!(cfg.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_json() {
        assert!(BasicConfig::from_json_str(r#"{"output": "xml"}"#).is_err());
    }
}
