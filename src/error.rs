//! Error handling for configuration store operations.
//!
//! A missing configuration file is not an error anywhere in this crate;
//! the two variants below cover the cases that are: a file that exists but
//! is not valid INI, and filesystem failures while reading or writing.

use std::fmt;

/// Main error type for configuration store operations.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// The configuration file exists but could not be parsed as
    /// INI-style sections of key/value pairs.
    Parse { message: String },

    /// Filesystem error while reading or writing the configuration file.
    Io { path: String, message: String },
}

impl ConfigError {
    /// Create a new parse error.
    pub fn parse<M: Into<String>>(message: M) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new I/O error with path context.
    pub fn io<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { message } => {
                write!(f, "Failed to parse config file: {}", message)
            }
            Self::Io { path, message } => {
                write!(f, "I/O error at '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
