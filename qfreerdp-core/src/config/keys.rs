//! Setting key names
//!
//! These names are the on-disk contract; changing one orphans existing
//! user settings.

pub const CURRENT_SERVER: &str = "CurrentServer";
pub const ALL_SERVERS: &str = "AllServers";
pub const USERNAME: &str = "Username";

pub const RESOLUTION_TYPE: &str = "ResolutionType";
pub const STANDARD_RESOLUTION: &str = "StandardResolution";
pub const CUSTOM_RESOLUTION: &str = "CustomResolution";
pub const BIT_DEPTH: &str = "BitDepth";

pub const COMPRESSION_TYPE: &str = "CompressionType";
/// Read as a fallback when `CompressionType` is absent
pub const LEGACY_COMPRESSION: &str = "Compression";
pub const JPEG: &str = "Jpeg";
pub const JPEG_LEVEL: &str = "JpegLevel";

pub const AUDIO_MODE: &str = "AudioMode";
pub const CLIPBOARD: &str = "Clipboard";
pub const REDIRECT_DRIVES: &str = "RedirectDrives";
pub const REDIRECT_HOME: &str = "RedirectHome";

pub const WALLPAPER: &str = "Wallpaper";
pub const FONT_SMOOTHING: &str = "FontSmoothing";
pub const AERO: &str = "Aero";
pub const WINDOW_DRAG: &str = "WindowDrag";
pub const MENU_ANIMS: &str = "MenuAnims";
pub const THEMES: &str = "Themes";

pub const BITMAP_CACHE: &str = "BitmapCache";
pub const OFFSCREEN_CACHE: &str = "OffscreenCache";
pub const GLYPH_CACHE: &str = "GlyphCache";

pub const GATEWAY: &str = "Gateway";
pub const GATEWAY_USERNAME: &str = "GatewayUsername";
