//! The preference model: every user-configurable connection option
//!
//! Values are plain data. Validation happens when the model is compiled into
//! arguments (see [`crate::protocol::freerdp`]) and preset consistency is
//! maintained by [`ExperienceSettings`]'s mutation methods.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::resolution::{Resolution, largest_standard_resolution};

/// How the remote desktop size is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// One of the catalogue sizes
    #[default]
    Standard,
    /// User-entered width and height
    Custom,
    /// Full screen
    Fullscreen,
}

impl ResolutionMode {
    /// Returns all modes in display order
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Standard, Self::Custom, Self::Fullscreen]
    }

    /// Returns the display name for this mode
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Standard => "Standard Resolution",
            Self::Custom => "Custom Resolution",
            Self::Fullscreen => "Full Screen",
        }
    }

    /// Returns the index of this mode in the `all()` array
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::Standard => 0,
            Self::Custom => 1,
            Self::Fullscreen => 2,
        }
    }

    /// Creates a mode from an index, falling back to `Standard`
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        match index {
            1 => Self::Custom,
            2 => Self::Fullscreen,
            _ => Self::Standard,
        }
    }
}

/// Session color depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ColorDepth {
    /// High Color (15 bpp)
    #[serde(rename = "15")]
    Bpp15,
    /// High Color (16 bpp)
    #[serde(rename = "16")]
    Bpp16,
    /// True Color (24 bpp)
    #[serde(rename = "24")]
    Bpp24,
    /// True Color (32 bpp)
    #[default]
    #[serde(rename = "32")]
    Bpp32,
}

impl ColorDepth {
    /// Returns all depths in ascending order
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Bpp15, Self::Bpp16, Self::Bpp24, Self::Bpp32]
    }

    /// Returns the display name for this depth
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bpp15 => "High Color (15 bpp)",
            Self::Bpp16 => "High Color (16 bpp)",
            Self::Bpp24 => "True Color (24 bpp)",
            Self::Bpp32 => "True Color (32 bpp)",
        }
    }

    /// Bits per pixel
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bpp15 => 15,
            Self::Bpp16 => 16,
            Self::Bpp24 => 24,
            Self::Bpp32 => 32,
        }
    }

    /// Looks up a depth by its exact bit count
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            15 => Some(Self::Bpp15),
            16 => Some(Self::Bpp16),
            24 => Some(Self::Bpp24),
            32 => Some(Self::Bpp32),
            _ => None,
        }
    }
}

/// Network compression setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionMode {
    /// Compression off
    Disabled,
    /// Client default (enabled)
    #[default]
    Default,
    /// Explicit compression level
    Level,
}

/// Highest explicit compression level
pub const MAX_COMPRESSION_LEVEL: u8 = 2;

/// Audio playback mode, indexed as the client's `/audio-mode` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioMode {
    /// Play on the local machine
    #[default]
    RedirectLocal,
    /// Leave audio on the remote machine
    PlayRemote,
    /// No audio
    Disabled,
}

impl AudioMode {
    /// Returns all modes in display order
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::RedirectLocal, Self::PlayRemote, Self::Disabled]
    }

    /// Returns the display name for this mode
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RedirectLocal => "Redirect to local",
            Self::PlayRemote => "Play on remote",
            Self::Disabled => "Disable audio",
        }
    }

    /// Returns the index of this mode in the `all()` array
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::RedirectLocal => 0,
            Self::PlayRemote => 1,
            Self::Disabled => 2,
        }
    }

    /// Creates a mode from an index, falling back to `RedirectLocal`
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        match index {
            1 => Self::PlayRemote,
            2 => Self::Disabled,
            _ => Self::RedirectLocal,
        }
    }
}

/// Named bundles of the six experience toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformancePreset {
    /// Everything off
    Minimum,
    /// Themes only
    Low,
    /// Desktop composition and themes
    Mid,
    /// Everything on
    #[default]
    High,
    /// Any other combination
    Custom,
}

impl PerformancePreset {
    /// Returns all presets in display order
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Minimum, Self::Low, Self::Mid, Self::High, Self::Custom]
    }

    /// Returns the display name for this preset
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Minimum => "Minimum",
            Self::Low => "Low-speed (<1 Mbps)",
            Self::Mid => "Medium (2-10 Mbps)",
            Self::High => "High-speed (LAN)",
            Self::Custom => "Custom",
        }
    }
}

/// Login group. The password is never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct LoginSettings {
    /// Server host name, optionally with `:port`
    pub server: String,
    /// Previously used servers, most recent first
    pub recent_servers: Vec<String>,
    /// Username, optionally `DOMAIN\user` or `user@DOMAIN`
    pub username: String,
    /// Password
    #[serde(skip)]
    pub password: SecretString,
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            server: String::new(),
            recent_servers: Vec::new(),
            username: String::new(),
            password: SecretString::from(String::new()),
        }
    }
}

impl PartialEq for LoginSettings {
    fn eq(&self, other: &Self) -> bool {
        self.server == other.server
            && self.recent_servers == other.recent_servers
            && self.username == other.username
            && self.password.expose_secret() == other.password.expose_secret()
    }
}

impl Eq for LoginSettings {}

impl LoginSettings {
    /// Returns the server history as it should be saved: the current server
    /// first, then the remaining entries in order, without duplicates or
    /// empty names.
    #[must_use]
    pub fn server_history(&self) -> Vec<String> {
        let mut history: Vec<String> = Vec::with_capacity(self.recent_servers.len() + 1);
        for server in std::iter::once(&self.server).chain(&self.recent_servers) {
            if !server.is_empty() && !history.contains(server) {
                history.push(server.clone());
            }
        }
        history
    }
}

/// Display group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySettings {
    /// How the size is chosen
    pub resolution_mode: ResolutionMode,
    /// Selected catalogue entry
    pub standard_resolution: Resolution,
    /// Custom width as typed; validated at compile time
    pub custom_width: String,
    /// Custom height as typed; validated at compile time
    pub custom_height: String,
    /// Color depth
    pub color_depth: ColorDepth,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            resolution_mode: ResolutionMode::Standard,
            standard_resolution: largest_standard_resolution(),
            custom_width: "0".to_string(),
            custom_height: "0".to_string(),
            color_depth: ColorDepth::Bpp32,
        }
    }
}

/// Compression group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompressionSettings {
    /// Network compression mode
    pub mode: CompressionMode,
    /// Level 0..=2, used only when `mode` is `Level`
    pub level: u8,
    /// JPEG codec enabled
    pub jpeg_enabled: bool,
    /// JPEG quality 10..=100
    pub jpeg_quality: u8,
}

impl CompressionSettings {
    /// Lowest JPEG quality
    pub const MIN_JPEG_QUALITY: u8 = 10;
    /// Highest JPEG quality
    pub const MAX_JPEG_QUALITY: u8 = 100;
    /// Quality used when none is stored
    pub const DEFAULT_JPEG_QUALITY: u8 = 95;

    /// Index of the combined compression choice as stored in settings:
    /// 0 disabled, 1 default, 2..=4 level 0..=2
    #[must_use]
    pub const fn choice_index(&self) -> u32 {
        match self.mode {
            CompressionMode::Disabled => 0,
            CompressionMode::Default => 1,
            CompressionMode::Level => 2 + self.level as u32,
        }
    }

    /// Sets mode and level from a stored choice index.
    ///
    /// Unknown indices select the default mode.
    pub fn set_choice_index(&mut self, index: u32) {
        match index {
            0 => self.mode = CompressionMode::Disabled,
            2..=4 => {
                self.mode = CompressionMode::Level;
                self.level = (index - 2) as u8;
            }
            _ => self.mode = CompressionMode::Default,
        }
    }
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            mode: CompressionMode::Default,
            level: 0,
            jpeg_enabled: false,
            jpeg_quality: Self::DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Devices group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceSettings {
    /// Audio playback mode
    pub audio_mode: AudioMode,
    /// Share the clipboard
    pub clipboard: bool,
    /// Redirect all local drives
    pub redirect_all_drives: bool,
    /// Redirect the home directory
    pub redirect_home_drive: bool,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            audio_mode: AudioMode::RedirectLocal,
            clipboard: true,
            redirect_all_drives: false,
            redirect_home_drive: false,
        }
    }
}

/// The six visual experience toggles that presets control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ExperienceToggles {
    /// Desktop wallpaper
    pub wallpaper: bool,
    /// Font smoothing
    pub font_smoothing: bool,
    /// Desktop composition (Aero)
    pub aero: bool,
    /// Show window contents while dragging
    pub window_drag: bool,
    /// Menu animation
    pub menu_animations: bool,
    /// Windows themes
    pub themes: bool,
}

impl ExperienceToggles {
    /// All toggles set to `value`
    #[must_use]
    pub const fn all(value: bool) -> Self {
        Self {
            wallpaper: value,
            font_smoothing: value,
            aero: value,
            window_drag: value,
            menu_animations: value,
            themes: value,
        }
    }
}

impl Default for ExperienceToggles {
    fn default() -> Self {
        Self::all(true)
    }
}

/// Bitmap caching options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheSettings {
    /// Bitmap caching
    pub bitmap_cache: bool,
    /// Offscreen bitmap caching
    pub offscreen_cache: bool,
    /// Glyph caching
    pub glyph_cache: bool,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            bitmap_cache: true,
            offscreen_cache: true,
            glyph_cache: true,
        }
    }
}

/// Remote Desktop Gateway group. The password is never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct GatewaySettings {
    /// Gateway host; empty means no gateway
    pub server: String,
    /// Gateway username
    pub username: String,
    /// Gateway password
    #[serde(skip)]
    pub password: SecretString,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            server: String::new(),
            username: String::new(),
            password: SecretString::from(String::new()),
        }
    }
}

impl PartialEq for GatewaySettings {
    fn eq(&self, other: &Self) -> bool {
        self.server == other.server
            && self.username == other.username
            && self.password.expose_secret() == other.password.expose_secret()
    }
}

impl Eq for GatewaySettings {}

impl GatewaySettings {
    /// Returns `true` if a gateway server is configured
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.server.is_empty()
    }
}

/// Complete set of connection preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    /// Server and credentials
    pub login: LoginSettings,
    /// Size and color depth
    pub display: DisplaySettings,
    /// Network and JPEG compression
    pub compression: CompressionSettings,
    /// Audio and device redirection
    pub devices: DeviceSettings,
    /// Visual experience and caching
    pub experience: super::ExperienceSettings,
    /// RD Gateway
    pub gateway: GatewaySettings,
}
