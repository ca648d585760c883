//! Failure categories recognized by the Scyther GUI wrapper.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Result type alias for operations that can fail with a [`ScytherError`].
pub type Result<T> = std::result::Result<T, ScytherError>;

/// Every failure the wrapper can signal, raised at the detection site and
/// propagated unmodified up to whatever presents it.
///
/// No recovery or retry happens here; rendering reads the stored fields
/// only and performs no I/O.
#[derive(Debug, Clone, Error, Serialize)]
pub enum ScytherError {
    /// The backend ran but reported errors, one line each, in the order it
    /// emitted them.
    #[error("Scyther backend reported the following errors:\n{}", .errorlist.join("\n"))]
    Backend { errorlist: Vec<String> },

    /// Malformed input. This variant has no message format of its own:
    /// `Display` passes the caller's `message` through verbatim, and
    /// handlers that need the offending input read `expression` directly.
    #[error("{message}")]
    Input { expression: String, message: String },

    /// An executable path is configured, but nothing is there.
    #[error("Could not find Scyther executable at '{file}'")]
    BinaryMissing { file: PathBuf },

    /// No executable path was ever configured.
    #[error("Scyther class attribute 'program' was not defined.")]
    BinaryUndefined,

    /// Platform detection came back with an environment the backend cannot
    /// be driven on.
    #[error("The {platform} platform is currently unsupported.")]
    UnsupportedPlatform { platform: String },

    /// An argument failed the "string or list of strings" check. `obj` is
    /// the rejected value, captured textually at construction.
    #[error("Got {obj} instead of a (list of) string.")]
    StringOrList { obj: String },
}

impl ScytherError {
    /// Error lines retrieved from the backend, in emission order.
    pub fn backend<I, S>(errorlist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Backend {
            errorlist: errorlist.into_iter().map(Into::into).collect(),
        }
    }

    /// The input that failed, plus a free-text explanation. Neither field
    /// has a format imposed on it.
    pub fn input(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Input {
            expression: expression.into(),
            message: message.into(),
        }
    }

    /// The path where the executable was expected but not found.
    pub fn binary_missing(file: impl Into<PathBuf>) -> Self {
        Self::BinaryMissing { file: file.into() }
    }

    /// The detected platform identifier, verbatim.
    pub fn unsupported_platform(platform: impl Into<String>) -> Self {
        Self::UnsupportedPlatform {
            platform: platform.into(),
        }
    }

    /// Capture the rejected value through its `Debug` rendering; only the
    /// textual form is kept.
    pub fn string_or_list(obj: impl fmt::Debug) -> Self {
        Self::StringOrList {
            obj: format!("{obj:?}"),
        }
    }

    /// Emit the error through the active `tracing` subscriber before the
    /// UI surfaces it. Argument mistakes the caller can correct go out at
    /// `warn`; environment and backend failures go out at `error`.
    pub fn log(&self) {
        match self {
            Self::Input { .. } | Self::StringOrList { .. } => warn!("{}", self),
            Self::Backend { .. }
            | Self::BinaryMissing { .. }
            | Self::BinaryUndefined
            | Self::UnsupportedPlatform { .. } => error!("{}", self),
        }
    }
}
