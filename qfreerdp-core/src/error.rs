//! Error types for `qfreerdp`
//!
//! Each layer has its own error enum; [`QfreerdpError`] aggregates them for
//! callers that do not care which layer failed.

use std::path::PathBuf;

use thiserror::Error;

/// Preconditions checked before an argument vector is produced.
///
/// Validation stops at the first unmet precondition, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The server field is empty
    #[error("Server name must not be empty")]
    MissingServer,

    /// The username field is empty
    #[error("Username must not be empty")]
    MissingUsername,

    /// The password field is empty
    #[error("Password must not be empty")]
    MissingPassword,

    /// Custom width or height is not an integer in the accepted range
    #[error("Invalid custom resolution specified: {width}x{height}")]
    InvalidResolution {
        /// Width as entered
        width: String,
        /// Height as entered
        height: String,
    },
}

/// Failures of the external client version check performed at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    /// The client binary could not be started
    #[error("Error starting {binary}. Is it in your PATH? ({reason})")]
    ExternalClientNotFound {
        /// Binary that was invoked
        binary: String,
        /// OS error message
        reason: String,
    },

    /// The client ran but printed no recognizable version line
    #[error("Could not determine {binary} version")]
    ExternalClientVersionUnparseable {
        /// Binary that was invoked
        binary: String,
    },

    /// The client reported a major version other than the supported one
    #[error("{binary} reported version {version}, but version {required}.x is required")]
    ExternalClientVersionUnsupported {
        /// Binary that was invoked
        binary: String,
        /// Version string that was reported
        version: String,
        /// Required major version
        required: u32,
    },
}

/// Failures while launching the external client
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The preference model did not pass validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The process could not be spawned
    #[error("Could not start {program}. Is it in your PATH? ({source})")]
    ProcessSpawnFailure {
        /// Program that was spawned
        program: String,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },
}

/// Settings persistence errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration directory could be determined
    #[error("Could not determine the configuration directory")]
    NoConfigDir,

    /// Reading or writing the settings file failed
    #[error("Settings I/O error at {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML
    #[error("Failed to parse settings file {path}: {reason}")]
    Parse {
        /// Settings file path
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// The store could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),
}

/// Top-level error for the core library
#[derive(Debug, Error)]
pub enum QfreerdpError {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Client detection error
    #[error(transparent)]
    Detection(#[from] DetectionError),

    /// Launch error
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for argument compilation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for client detection
pub type DetectionResult<T> = Result<T, DetectionError>;

/// Result type for launching
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
