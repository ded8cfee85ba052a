//! Applying command-line overrides to restored preferences.

use qfreerdp_core::models::{
    CompressionMode, ExperienceToggle, Preferences, Resolution, ResolutionMode,
};
use secrecy::SecretString;

use crate::cli::PreferenceArgs;
use crate::error::CliError;

impl PreferenceArgs {
    /// Writes every given option into `prefs`.
    ///
    /// `--size` implies the standard mode and `--custom-width`/`--custom-height`
    /// imply the custom mode unless `--resolution-mode` says otherwise. The
    /// preset is applied before the individual experience toggles, so a toggle
    /// given alongside a preset turns it into `Custom`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] if `--size` is not one of the
    /// offered standard sizes.
    pub fn apply(&self, prefs: &mut Preferences, catalogue: &[Resolution]) -> Result<(), CliError> {
        // Login
        if let Some(server) = &self.server {
            prefs.login.server = server.trim().to_string();
        }
        if let Some(username) = &self.username {
            prefs.login.username = username.clone();
        }
        if let Some(password) = &self.password {
            prefs.login.password = SecretString::from(password.clone());
        }

        // Display
        let display = &mut prefs.display;
        if let Some(size) = self.size {
            if !catalogue.contains(&size) {
                return Err(CliError::InvalidArgument(format!(
                    "{size} is not an offered standard size (see `qfreerdp resolutions`)"
                )));
            }
            display.standard_resolution = size;
            display.resolution_mode = ResolutionMode::Standard;
        }
        if self.custom_width.is_some() || self.custom_height.is_some() {
            display.resolution_mode = ResolutionMode::Custom;
        }
        if let Some(width) = &self.custom_width {
            display.custom_width.clone_from(width);
        }
        if let Some(height) = &self.custom_height {
            display.custom_height.clone_from(height);
        }
        if let Some(mode) = self.resolution_mode {
            display.resolution_mode = mode.into();
        }
        if let Some(depth) = self.bpp {
            display.color_depth = depth;
        }

        // Compression
        let compression = &mut prefs.compression;
        if let Some(level) = self.compression_level {
            compression.mode = CompressionMode::Level;
            compression.level = level;
        }
        if let Some(mode) = self.compression {
            compression.mode = mode.into();
        }
        if let Some(jpeg) = self.jpeg {
            compression.jpeg_enabled = jpeg;
        }
        if let Some(quality) = self.jpeg_quality {
            compression.jpeg_quality = quality;
        }

        // Devices
        let devices = &mut prefs.devices;
        if let Some(audio) = self.audio {
            devices.audio_mode = audio.into();
        }
        if let Some(clipboard) = self.clipboard {
            devices.clipboard = clipboard;
        }
        if let Some(drives) = self.redirect_drives {
            devices.redirect_all_drives = drives;
        }
        if let Some(home) = self.redirect_home {
            devices.redirect_home_drive = home;
        }

        // Experience
        if let Some(preset) = self.preset {
            prefs.experience.select_preset(preset.into());
        }
        let toggles = [
            (ExperienceToggle::Wallpaper, self.wallpaper),
            (ExperienceToggle::FontSmoothing, self.font_smoothing),
            (ExperienceToggle::Aero, self.aero),
            (ExperienceToggle::WindowDrag, self.window_drag),
            (ExperienceToggle::MenuAnimations, self.menu_animations),
            (ExperienceToggle::Themes, self.themes),
        ];
        for (toggle, value) in toggles {
            if let Some(value) = value {
                prefs.experience.set_toggle(toggle, value);
            }
        }

        let cache = &mut prefs.experience.cache;
        if let Some(bitmap) = self.bitmap_cache {
            cache.bitmap_cache = bitmap;
        }
        if let Some(offscreen) = self.offscreen_cache {
            cache.offscreen_cache = offscreen;
        }
        if let Some(glyph) = self.glyph_cache {
            cache.glyph_cache = glyph;
        }

        // Gateway
        if let Some(gateway) = &self.gateway {
            prefs.gateway.server = gateway.trim().to_string();
        }
        if let Some(username) = &self.gateway_username {
            prefs.gateway.username = username.clone();
        }
        if let Some(password) = &self.gateway_password {
            prefs.gateway.password = SecretString::from(password.clone());
        }

        Ok(())
    }
}
