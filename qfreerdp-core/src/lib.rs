//! `qfreerdp` Core Library
//!
//! Everything behind the `qfreerdp` launcher: the connection preference
//! model, its compilation into FreeRDP 2.x command-line arguments, the
//! settings file it is persisted to, and starting the client.
//!
//! # Crate Structure
//!
//! - [`models`] - Preference model, resolution catalogue, preset reconciliation
//! - [`protocol`] - Argument compiler, client version check, detached launch
//! - [`config`] - Settings store and its on-disk file
//! - [`display`] - Attached display geometry for filtering the catalogue
//! - [`tracing`] - Logging setup

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod protocol;
pub mod tracing;

pub use config::{ConfigManager, SettingValue, SettingsStore, restore_preferences, save_preferences};
pub use display::{DisplayProvider, StaticDisplays, XrandrDisplays, offered_resolutions};
pub use error::{
    ConfigError, ConfigResult, DetectionError, DetectionResult, LaunchError, LaunchResult,
    QfreerdpError, ValidationError, ValidationResult,
};
pub use models::{
    AudioMode, CacheSettings, ColorDepth, CompressionMode, CompressionSettings, DeviceSettings,
    DisplayArea, DisplaySettings, ExperienceSettings, ExperienceToggle, ExperienceToggles,
    GatewaySettings, LoginSettings, PerformancePreset, Preferences, Resolution, ResolutionMode,
    STANDARD_RESOLUTIONS,
};
pub use protocol::{
    DEFAULT_CLIENT_BINARY, DetachedLauncher, DetectedClient, LaunchedSession, ProcessLauncher,
    build_freerdp_args, detect_freerdp, launch_session,
};
pub use tracing::{TracingConfig, TracingError, TracingLevel, TracingOutput, init_tracing};
