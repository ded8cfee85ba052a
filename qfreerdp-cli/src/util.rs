//! Shared utility functions used across command modules.

use std::path::Path;

use qfreerdp_core::config::ConfigManager;
use qfreerdp_core::display::{DisplayProvider, StaticDisplays, XrandrDisplays};
use qfreerdp_core::models::{ColorDepth, DisplayArea, Resolution};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Display source: the `--display` sizes if any were given, else `xrandr`
pub fn display_provider(displays: &[Resolution]) -> Box<dyn DisplayProvider> {
    if displays.is_empty() {
        Box::new(XrandrDisplays)
    } else {
        Box::new(StaticDisplays(
            displays
                .iter()
                .map(|r| DisplayArea::sized(r.width, r.height))
                .collect(),
        ))
    }
}

/// Parse a color depth given in bits per pixel
pub fn parse_color_depth(s: &str) -> Result<ColorDepth, String> {
    s.trim()
        .parse::<u32>()
        .ok()
        .and_then(ColorDepth::from_bits)
        .ok_or_else(|| format!("unsupported color depth `{s}`, expected 15, 16, 24 or 32"))
}
