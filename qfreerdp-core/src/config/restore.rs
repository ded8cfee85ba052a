//! Conversion between [`Preferences`] and the persisted [`SettingsStore`]
//!
//! Restoring never fails: a key that is missing or holds a value of the
//! wrong shape keeps the model default. Passwords are never written.

use crate::models::{
    AudioMode, CacheSettings, ColorDepth, CompressionSettings, ExperienceSettings,
    ExperienceToggles, Preferences, Resolution, ResolutionMode, largest_standard_resolution,
    match_catalogue,
};

use super::keys;
use super::store::SettingsStore;

/// Builds the preference model from stored settings.
///
/// `catalogue` is the list of standard sizes offered on this machine; the
/// stored standard size is snapped to it, and with no stored size the
/// largest offered entry is selected.
#[must_use]
pub fn restore_preferences(store: &SettingsStore, catalogue: &[Resolution]) -> Preferences {
    let mut prefs = Preferences::default();

    // Login
    prefs.login.server = store.get_text(keys::CURRENT_SERVER).unwrap_or_default();
    prefs.login.recent_servers = store.get_list(keys::ALL_SERVERS).unwrap_or_default();
    prefs.login.username = store.get_text(keys::USERNAME).unwrap_or_default();

    // Display
    if let Some(index) = store.get_u32(keys::RESOLUTION_TYPE) {
        prefs.display.resolution_mode = ResolutionMode::from_index(index);
    }
    let fallback = catalogue
        .last()
        .copied()
        .unwrap_or_else(largest_standard_resolution);
    let wanted = store
        .get_resolution(keys::STANDARD_RESOLUTION)
        .unwrap_or(fallback);
    prefs.display.standard_resolution = match_catalogue(catalogue, wanted).unwrap_or(fallback);
    if let Some((width, height)) = store
        .get_text(keys::CUSTOM_RESOLUTION)
        .as_deref()
        .and_then(split_custom_resolution)
    {
        prefs.display.custom_width = width.to_string();
        prefs.display.custom_height = height.to_string();
    }
    if let Some(depth) = store.get_u32(keys::BIT_DEPTH).and_then(ColorDepth::from_bits) {
        prefs.display.color_depth = depth;
    }

    // Compression
    let choice = store
        .get_u32(keys::COMPRESSION_TYPE)
        .or_else(|| store.get_u32(keys::LEGACY_COMPRESSION));
    if let Some(choice) = choice {
        prefs.compression.set_choice_index(choice);
    }
    if let Some(jpeg) = store.get_bool(keys::JPEG) {
        prefs.compression.jpeg_enabled = jpeg;
    }
    if let Some(quality) = store.get_u32(keys::JPEG_LEVEL) {
        prefs.compression.jpeg_quality = clamp_jpeg_quality(quality);
    }

    // Devices
    if let Some(index) = store.get_u32(keys::AUDIO_MODE) {
        prefs.devices.audio_mode = AudioMode::from_index(index);
    }
    let devices = &mut prefs.devices;
    read_bool(store, keys::CLIPBOARD, &mut devices.clipboard);
    read_bool(store, keys::REDIRECT_DRIVES, &mut devices.redirect_all_drives);
    read_bool(store, keys::REDIRECT_HOME, &mut devices.redirect_home_drive);

    // Experience
    let mut toggles = ExperienceToggles::default();
    read_bool(store, keys::WALLPAPER, &mut toggles.wallpaper);
    read_bool(store, keys::FONT_SMOOTHING, &mut toggles.font_smoothing);
    read_bool(store, keys::AERO, &mut toggles.aero);
    read_bool(store, keys::WINDOW_DRAG, &mut toggles.window_drag);
    read_bool(store, keys::MENU_ANIMS, &mut toggles.menu_animations);
    read_bool(store, keys::THEMES, &mut toggles.themes);

    let mut cache = CacheSettings::default();
    read_bool(store, keys::BITMAP_CACHE, &mut cache.bitmap_cache);
    read_bool(store, keys::OFFSCREEN_CACHE, &mut cache.offscreen_cache);
    read_bool(store, keys::GLYPH_CACHE, &mut cache.glyph_cache);
    prefs.experience = ExperienceSettings::from_toggles(toggles, cache);

    // Gateway
    prefs.gateway.server = store.get_text(keys::GATEWAY).unwrap_or_default();
    prefs.gateway.username = store.get_text(keys::GATEWAY_USERNAME).unwrap_or_default();

    prefs
}

/// Writes every persisted field of `prefs` into a fresh store.
///
/// The server list is saved with the current server first.
#[must_use]
pub fn save_preferences(prefs: &Preferences) -> SettingsStore {
    let mut store = SettingsStore::new();

    store.set(keys::CURRENT_SERVER, prefs.login.server.as_str());
    store.set(keys::ALL_SERVERS, prefs.login.server_history());
    store.set(keys::USERNAME, prefs.login.username.as_str());

    let display = &prefs.display;
    store.set(keys::RESOLUTION_TYPE, display.resolution_mode.index());
    store.set(keys::STANDARD_RESOLUTION, display.standard_resolution);
    store.set(
        keys::CUSTOM_RESOLUTION,
        format!(
            "{}x{}",
            stored_dimension(&display.custom_width),
            stored_dimension(&display.custom_height)
        ),
    );
    store.set(keys::BIT_DEPTH, display.color_depth.bits());

    let compression = &prefs.compression;
    store.set(keys::COMPRESSION_TYPE, compression.choice_index());
    store.set(keys::JPEG, compression.jpeg_enabled);
    store.set(keys::JPEG_LEVEL, compression.jpeg_quality);

    let devices = &prefs.devices;
    store.set(keys::AUDIO_MODE, devices.audio_mode.index());
    store.set(keys::CLIPBOARD, devices.clipboard);
    store.set(keys::REDIRECT_DRIVES, devices.redirect_all_drives);
    store.set(keys::REDIRECT_HOME, devices.redirect_home_drive);

    let toggles = prefs.experience.toggles();
    store.set(keys::WALLPAPER, toggles.wallpaper);
    store.set(keys::FONT_SMOOTHING, toggles.font_smoothing);
    store.set(keys::AERO, toggles.aero);
    store.set(keys::WINDOW_DRAG, toggles.window_drag);
    store.set(keys::MENU_ANIMS, toggles.menu_animations);
    store.set(keys::THEMES, toggles.themes);

    let cache = &prefs.experience.cache;
    store.set(keys::BITMAP_CACHE, cache.bitmap_cache);
    store.set(keys::OFFSCREEN_CACHE, cache.offscreen_cache);
    store.set(keys::GLYPH_CACHE, cache.glyph_cache);

    store.set(keys::GATEWAY, prefs.gateway.server.as_str());
    store.set(keys::GATEWAY_USERNAME, prefs.gateway.username.as_str());

    store
}

/// Custom dimensions are stored as integers; text that is not one stores 0
fn stored_dimension(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

/// Splits a stored `WxH` value, reading each half on its own so a damaged
/// half does not discard the other
fn split_custom_resolution(text: &str) -> Option<(u32, u32)> {
    let (width, height) = text.split_once(['x', 'X'])?;
    Some((stored_dimension(width), stored_dimension(height)))
}

fn read_bool(store: &SettingsStore, key: &str, target: &mut bool) {
    if let Some(value) = store.get_bool(key) {
        *target = value;
    }
}

fn clamp_jpeg_quality(quality: u32) -> u8 {
    let clamped = quality.clamp(
        u32::from(CompressionSettings::MIN_JPEG_QUALITY),
        u32::from(CompressionSettings::MAX_JPEG_QUALITY),
    );
    u8::try_from(clamped).unwrap_or(CompressionSettings::DEFAULT_JPEG_QUALITY)
}
