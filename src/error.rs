//! Crate-level error types.

use std::fmt;

/// Errors produced by the resortview crate.
///
/// Interaction itself never fails; only loading configuration and replay
/// scripts from disk can.
#[derive(Debug)]
pub enum ResortError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Replay script could not be decoded.
    ReplayParse(String),
}

impl fmt::Display for ResortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ReplayParse(msg) => {
                write!(f, "replay script error: {msg}")
            }
        }
    }
}

impl std::error::Error for ResortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ResortError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
