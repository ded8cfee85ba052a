//! `FreeRDP` command builder
//!
//! Compiles a [`Preferences`] into the argument vector for `xfreerdp`
//! (FreeRDP 2.x syntax). Output order is fixed so identical preferences
//! always produce identical arguments.

use secrecy::ExposeSecret;

use crate::error::{ValidationError, ValidationResult};
use crate::models::{CompressionMode, Preferences, ResolutionMode, parse_custom_dimension};

/// Default client binary
pub const DEFAULT_CLIENT_BINARY: &str = "xfreerdp";

/// Value shown in place of secrets in logs and dry runs
const MASK: &str = "****";

/// The twelve boolean `+name` / `-name` switches, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleFlags {
    /// `clipboard`
    pub clipboard: bool,
    /// `drives`
    pub drives: bool,
    /// `home-drive`
    pub home_drive: bool,
    /// `fonts`
    pub fonts: bool,
    /// `aero`
    pub aero: bool,
    /// `window-drag`
    pub window_drag: bool,
    /// `menu-anims`
    pub menu_anims: bool,
    /// `themes`
    pub themes: bool,
    /// `wallpaper`
    pub wallpaper: bool,
    /// `bitmap-cache`
    pub bitmap_cache: bool,
    /// `offscreen-cache`
    pub offscreen_cache: bool,
    /// `glyph-cache`
    pub glyph_cache: bool,
}

/// Switch names in emission order
pub const TOGGLE_FLAG_NAMES: [&str; 12] = [
    "clipboard",
    "drives",
    "home-drive",
    "fonts",
    "aero",
    "window-drag",
    "menu-anims",
    "themes",
    "wallpaper",
    "bitmap-cache",
    "offscreen-cache",
    "glyph-cache",
];

impl ToggleFlags {
    /// Collects the switches from a preference model
    #[must_use]
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let toggles = prefs.experience.toggles();
        let cache = prefs.experience.cache;
        Self {
            clipboard: prefs.devices.clipboard,
            drives: prefs.devices.redirect_all_drives,
            home_drive: prefs.devices.redirect_home_drive,
            fonts: toggles.font_smoothing,
            aero: toggles.aero,
            window_drag: toggles.window_drag,
            menu_anims: toggles.menu_animations,
            themes: toggles.themes,
            wallpaper: toggles.wallpaper,
            bitmap_cache: cache.bitmap_cache,
            offscreen_cache: cache.offscreen_cache,
            glyph_cache: cache.glyph_cache,
        }
    }

    /// Values in the same order as [`TOGGLE_FLAG_NAMES`]
    #[must_use]
    pub const fn values(&self) -> [bool; 12] {
        [
            self.clipboard,
            self.drives,
            self.home_drive,
            self.fonts,
            self.aero,
            self.window_drag,
            self.menu_anims,
            self.themes,
            self.wallpaper,
            self.bitmap_cache,
            self.offscreen_cache,
            self.glyph_cache,
        ]
    }

    /// Builds flags from values ordered as [`TOGGLE_FLAG_NAMES`]
    #[must_use]
    pub const fn from_values(v: [bool; 12]) -> Self {
        Self {
            clipboard: v[0],
            drives: v[1],
            home_drive: v[2],
            fonts: v[3],
            aero: v[4],
            window_drag: v[5],
            menu_anims: v[6],
            themes: v[7],
            wallpaper: v[8],
            bitmap_cache: v[9],
            offscreen_cache: v[10],
            glyph_cache: v[11],
        }
    }

    /// Encodes each switch as `+name` or `-name`
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        TOGGLE_FLAG_NAMES
            .iter()
            .zip(self.values())
            .map(|(name, on)| toggle_arg(name, on))
            .collect()
    }
}

fn toggle_arg(name: &str, on: bool) -> String {
    format!("{}{name}", if on { '+' } else { '-' })
}

/// Builds `FreeRDP` command-line arguments from preferences.
///
/// Preconditions are checked in order: server, username, password, then
/// custom resolution bounds when the custom mode is selected.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first unmet precondition.
pub fn build_freerdp_args(prefs: &Preferences) -> ValidationResult<Vec<String>> {
    let login = &prefs.login;
    if login.server.is_empty() {
        return Err(ValidationError::MissingServer);
    }
    if login.username.is_empty() {
        return Err(ValidationError::MissingUsername);
    }
    let password = login.password.expose_secret();
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }

    let display = &prefs.display;
    let size = match display.resolution_mode {
        ResolutionMode::Standard => Some(display.standard_resolution.to_string()),
        ResolutionMode::Custom => {
            match (
                parse_custom_dimension(&display.custom_width),
                parse_custom_dimension(&display.custom_height),
            ) {
                (Some(width), Some(height)) => Some(format!("{width}x{height}")),
                _ => {
                    return Err(ValidationError::InvalidResolution {
                        width: display.custom_width.clone(),
                        height: display.custom_height.clone(),
                    });
                }
            }
        }
        ResolutionMode::Fullscreen => None,
    };

    let mut args = vec![
        format!("/v:{}", login.server),
        format!("/u:{}", login.username),
        // xfreerdp masks this out of its own command line once running
        format!("/p:{password}"),
    ];

    match size {
        Some(size) => args.push(format!("/size:{size}")),
        None => args.push("/f".to_string()),
    }

    args.push(format!("/bpp:{}", display.color_depth.bits()));

    let compression = &prefs.compression;
    match compression.mode {
        CompressionMode::Disabled => args.push("-compression".to_string()),
        CompressionMode::Default => args.push("+compression".to_string()),
        CompressionMode::Level => {
            args.push(format!("/compression-level:{}", compression.level));
        }
    }

    if compression.jpeg_enabled {
        args.push("/jpeg".to_string());
        args.push(format!("/jpeg-quality:{}", compression.jpeg_quality));
    }

    args.push(format!("/audio-mode:{}", prefs.devices.audio_mode.index()));

    args.extend(ToggleFlags::from_preferences(prefs).to_args());

    let gateway = &prefs.gateway;
    if gateway.is_enabled() {
        args.push(format!("/g:{}", gateway.server));
        if !gateway.username.is_empty() {
            args.push(format!("/gu:{}", gateway.username));
            args.push(format!("/gp:{}", gateway.password.expose_secret()));
        }
    }

    Ok(args)
}

/// Recovers the twelve switches from an argument vector.
///
/// Returns `None` if any switch is missing. When a switch appears more than
/// once the last occurrence wins, as it does for the client.
#[must_use]
pub fn parse_toggle_flags(args: &[String]) -> Option<ToggleFlags> {
    let mut values: [Option<bool>; 12] = [None; 12];

    for arg in args {
        let (on, name) = if let Some(name) = arg.strip_prefix('+') {
            (true, name)
        } else if let Some(name) = arg.strip_prefix('-') {
            (false, name)
        } else {
            continue;
        };
        if let Some(pos) = TOGGLE_FLAG_NAMES.iter().position(|n| *n == name) {
            values[pos] = Some(on);
        }
    }

    let mut flags = [false; 12];
    for (slot, value) in flags.iter_mut().zip(values) {
        *slot = value?;
    }
    Some(ToggleFlags::from_values(flags))
}

/// Returns true if the argument carries a password
fn is_sensitive_arg(arg: &str) -> bool {
    let lower = arg.to_lowercase();
    lower.starts_with("/p:") || lower.starts_with("/gp:")
}

/// Masks the value of a password argument, preserving the key prefix
fn mask_arg(arg: &str) -> String {
    match arg.find(':') {
        Some(pos) => format!("{}{MASK}", &arg[..=pos]),
        None => MASK.to_string(),
    }
}

/// Copies the arguments with password values replaced by `****`
#[must_use]
pub fn mask_args(args: &[String]) -> Vec<String> {
    args.iter()
        .map(|arg| {
            if is_sensitive_arg(arg) {
                mask_arg(arg)
            } else {
                arg.clone()
            }
        })
        .collect()
}

/// Formats a command line for log output with passwords masked
#[must_use]
pub fn format_command_for_log(program: &str, args: &[String]) -> String {
    let masked = mask_args(args);
    if masked.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", masked.join(" "))
    }
}
