//! Unified error type for all logex operations.

use std::path::PathBuf;

/// Error type for logex operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML profile parsing error.
    ProfileParse(toml::de::Error),
    /// Config directory not found.
    ProfileDirNotFound,
    /// An operation needed a profile but the console was built without one.
    ProfileMissing,
    /// The configured log save directory does not exist.
    SaveDirMissing(PathBuf),
    /// `record_stop` was called without an active recording.
    NotRecording,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ProfileParse(e) => write!(f, "profile parse error: {e}"),
            Self::ProfileDirNotFound => write!(f, "config directory not found"),
            Self::ProfileMissing => write!(f, "no profile configured"),
            Self::SaveDirMissing(p) => {
                write!(f, "log save directory does not exist: {}", p.display())
            }
            Self::NotRecording => write!(f, "no recording in progress"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ProfileParse(e) => Some(e),
            Self::ProfileDirNotFound
            | Self::ProfileMissing
            | Self::SaveDirMissing(_)
            | Self::NotRecording => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ProfileParse(e)
    }
}
