use derive_more::Display;
use docmatch_config::ConfigError;
use docmatch_core::{document::PathError, error::MatcherError, value::ValueError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<MatcherError> for Error {
    fn from(err: MatcherError) -> Self {
        match err {
            MatcherError::DepthExceeded { .. } => Self::new(
                ErrorKind::Matcher(MatcherErrorKind::TooDeep),
                ErrorOrigin::Matcher,
                err.to_string(),
            ),
            MatcherError::Config(err) => err.into(),
        }
    }
}

impl From<PathError> for Error {
    fn from(err: PathError) -> Self {
        Self::new(
            ErrorKind::Matcher(MatcherErrorKind::InvalidPath),
            ErrorOrigin::Document,
            err.to_string(),
        )
    }
}

impl From<ValueError> for Error {
    fn from(err: ValueError) -> Self {
        Self::new(
            ErrorKind::Matcher(MatcherErrorKind::TypeMismatch),
            ErrorOrigin::Value,
            err.to_string(),
        )
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        let kind = match err {
            ConfigError::Io { .. } => ConfigErrorKind::Unreadable,
            ConfigError::Parse(_) => ConfigErrorKind::Malformed,
            ConfigError::ZeroMaxDepth => ConfigErrorKind::Invalid,
        };

        Self::new(ErrorKind::Config(kind), ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Matcher(MatcherErrorKind),
    Config(ConfigErrorKind),
}

///
/// MatcherErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MatcherErrorKind {
    /// Tree is deeper than the configured limit.
    TooDeep,

    /// Field path is empty or has an empty segment.
    InvalidPath,

    /// A typed value reader met a value of another type.
    TypeMismatch,
}

///
/// ConfigErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ConfigErrorKind {
    /// Config file could not be read.
    Unreadable,

    /// Config text is not valid TOML or has unknown keys.
    Malformed,

    /// Config parsed but holds an unusable value.
    Invalid,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Config,
    Document,
    Matcher,
    Value,
}

///
/// TESTS
///
