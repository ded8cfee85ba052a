//! Show command.

use std::path::Path;

use qfreerdp_core::display::offered_resolutions;
use qfreerdp_core::models::{CompressionMode, Preferences, Resolution, ResolutionMode};
use qfreerdp_core::protocol::{build_freerdp_args, mask_args};
use serde::Serialize;

use crate::cli::{PreferenceArgs, ShowFormat};
use crate::error::CliError;
use crate::util::{create_config_manager, display_provider};

/// Machine-readable `show` output
#[derive(Serialize)]
struct ShowOutput<'a> {
    preferences: &'a Preferences,
    #[serde(skip_serializing_if = "Option::is_none")]
    arguments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Show command handler
pub fn cmd_show(
    config_path: Option<&Path>,
    displays: &[Resolution],
    options: &PreferenceArgs,
    format: ShowFormat,
) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let catalogue = offered_resolutions(display_provider(displays).as_ref());

    let mut prefs = config_manager.load_preferences(&catalogue);
    options.apply(&mut prefs, &catalogue)?;

    let compiled = build_freerdp_args(&prefs).map(|args| mask_args(&args));

    match format {
        ShowFormat::Text => print_text(&prefs, &compiled),
        ShowFormat::Json | ShowFormat::Toml => {
            let (arguments, error) = match compiled {
                Ok(args) => (Some(args), None),
                Err(e) => (None, Some(e.to_string())),
            };
            let output = ShowOutput {
                preferences: &prefs,
                arguments,
                error,
            };
            let rendered = if matches!(format, ShowFormat::Json) {
                serde_json::to_string_pretty(&output).map_err(|e| CliError::Output(e.to_string()))?
            } else {
                toml::to_string_pretty(&output).map_err(|e| CliError::Output(e.to_string()))?
            };
            println!("{rendered}");
        }
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn or_none(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}

fn print_text<E: std::fmt::Display>(prefs: &Preferences, compiled: &Result<Vec<String>, E>) {
    let login = &prefs.login;
    println!("Login:");
    println!("  Server:   {}", or_none(&login.server));
    println!("  Username: {}", or_none(&login.username));
    let history = login.server_history();
    if !history.is_empty() {
        println!("  History:  {}", history.join(", "));
    }

    let display = &prefs.display;
    println!("Display:");
    let size = match display.resolution_mode {
        ResolutionMode::Standard => display.standard_resolution.to_string(),
        ResolutionMode::Custom => format!("{}x{}", display.custom_width, display.custom_height),
        ResolutionMode::Fullscreen => "full screen".to_string(),
    };
    println!("  Mode:     {}", display.resolution_mode.display_name());
    println!("  Size:     {size}");
    println!("  Colors:   {}", display.color_depth.display_name());

    let compression = &prefs.compression;
    println!("Compression:");
    let network = match compression.mode {
        CompressionMode::Disabled => "disabled".to_string(),
        CompressionMode::Default => "default".to_string(),
        CompressionMode::Level => format!("level {}", compression.level),
    };
    println!("  Network:  {network}");
    if compression.jpeg_enabled {
        println!("  JPEG:     quality {}", compression.jpeg_quality);
    } else {
        println!("  JPEG:     no");
    }

    let devices = &prefs.devices;
    println!("Devices:");
    println!("  Audio:     {}", devices.audio_mode.display_name());
    println!("  Clipboard: {}", yes_no(devices.clipboard));
    println!("  Drives:    {}", yes_no(devices.redirect_all_drives));
    println!("  Home:      {}", yes_no(devices.redirect_home_drive));

    let experience = &prefs.experience;
    let toggles = experience.toggles();
    println!("Experience: {}", experience.preset().display_name());
    println!("  Wallpaper:       {}", yes_no(toggles.wallpaper));
    println!("  Font smoothing:  {}", yes_no(toggles.font_smoothing));
    println!("  Composition:     {}", yes_no(toggles.aero));
    println!("  Window drag:     {}", yes_no(toggles.window_drag));
    println!("  Menu animations: {}", yes_no(toggles.menu_animations));
    println!("  Themes:          {}", yes_no(toggles.themes));
    println!("  Bitmap cache:    {}", yes_no(experience.cache.bitmap_cache));
    println!("  Offscreen cache: {}", yes_no(experience.cache.offscreen_cache));
    println!("  Glyph cache:     {}", yes_no(experience.cache.glyph_cache));

    if prefs.gateway.is_enabled() {
        println!("Gateway:");
        println!("  Server:   {}", prefs.gateway.server);
        println!("  Username: {}", or_none(&prefs.gateway.username));
    }

    println!();
    match compiled {
        Ok(args) => println!("Arguments: {}", args.join(" ")),
        Err(e) => println!("Arguments: not available ({e})"),
    }
}
