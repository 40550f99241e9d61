//! Severity levels attached to every log event.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the console can compare an event's level against its configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// High-volume instrumentation, mostly the crate's own diagnostics.
    Trace = 0,
    /// Details useful while developing.
    Debug = 1,
    /// Plain log messages.
    #[default]
    Info = 2,
    /// Non-fatal anomalies.
    Warning = 3,
    /// Failed assertions.
    Assert = 4,
    /// Failures that prevent an operation from completing.
    Error = 5,
}

impl Level {
    /// Lowercase because profiles and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Assert => "assert",
            Self::Error => "error",
        }
    }

    /// Capitalized name written in the `[...]` header of saved log blocks.
    ///
    /// Plain messages are labelled `Log`, matching the console they come from.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Info => "Log",
            Self::Warning => "Warning",
            Self::Assert => "Assert",
            Self::Error => "Error",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Assert,
            Self::Error,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" | "log" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "assert" | "assertion" => Ok(Self::Assert),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
