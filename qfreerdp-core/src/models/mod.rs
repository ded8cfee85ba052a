//! Core data structures for the launcher

mod experience;
mod preferences;
mod resolution;

pub use experience::{ExperienceSettings, ExperienceToggle};
pub use preferences::{
    AudioMode, CacheSettings, ColorDepth, CompressionMode, CompressionSettings, DeviceSettings,
    DisplaySettings, ExperienceToggles, GatewaySettings, LoginSettings, MAX_COMPRESSION_LEVEL,
    PerformancePreset, Preferences, ResolutionMode,
};
pub use resolution::{
    DisplayArea, MAX_CUSTOM_DIMENSION, MIN_CUSTOM_DIMENSION, Resolution, STANDARD_RESOLUTIONS,
    largest_standard_resolution, match_catalogue, parse_custom_dimension, usable_resolutions,
};
