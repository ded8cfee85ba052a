//! CLI error types and exit codes.

use qfreerdp_core::error::{ConfigError, DetectionError, LaunchError, ValidationError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - validation, launch, configuration, or an unusable
    /// FreeRDP client
    pub const GENERAL_ERROR: i32 = 1;
    /// The FreeRDP client binary could not be started at all
    pub const CLIENT_NOT_FOUND: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Startup version check failed
    #[error(transparent)]
    Detection(#[from] DetectionError),

    /// Preferences are incomplete or invalid
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The session could not be started
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A command-line value is not usable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Output could not be rendered
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error
    /// - 2: The FreeRDP client is not installed or cannot be executed
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Detection(DetectionError::ExternalClientNotFound { .. }) => {
                exit_codes::CLIENT_NOT_FOUND
            }
            Self::Detection(_)
            | Self::Validation(_)
            | Self::Launch(_)
            | Self::Config(_)
            | Self::InvalidArgument(_)
            | Self::Output(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
