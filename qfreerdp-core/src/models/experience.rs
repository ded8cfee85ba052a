//! Performance preset and experience toggle reconciliation
//!
//! The preset and the six toggles are two views of the same six bits. Picking
//! a named preset rewrites the toggles; editing a toggle recomputes the
//! preset. The reverse direction sets an `updating` flag while it writes the
//! preset so the forward handler does not run again in response.

use serde::Serialize;

use super::preferences::{CacheSettings, ExperienceToggles, PerformancePreset};

/// Bit positions of the toggles in the preset selector
const WALLPAPER_BIT: u8 = 1 << 0;
const FONT_SMOOTHING_BIT: u8 = 1 << 1;
const AERO_BIT: u8 = 1 << 2;
const WINDOW_DRAG_BIT: u8 = 1 << 3;
const MENU_ANIMATIONS_BIT: u8 = 1 << 4;
const THEMES_BIT: u8 = 1 << 5;

/// One of the six preset-controlled toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceToggle {
    /// Desktop wallpaper
    Wallpaper,
    /// Font smoothing
    FontSmoothing,
    /// Desktop composition (Aero)
    Aero,
    /// Show window contents while dragging
    WindowDrag,
    /// Menu animation
    MenuAnimations,
    /// Windows themes
    Themes,
}

impl ExperienceToggle {
    /// Returns all toggles in selector bit order
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Wallpaper,
            Self::FontSmoothing,
            Self::Aero,
            Self::WindowDrag,
            Self::MenuAnimations,
            Self::Themes,
        ]
    }

    /// Selector bit for this toggle
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::Wallpaper => WALLPAPER_BIT,
            Self::FontSmoothing => FONT_SMOOTHING_BIT,
            Self::Aero => AERO_BIT,
            Self::WindowDrag => WINDOW_DRAG_BIT,
            Self::MenuAnimations => MENU_ANIMATIONS_BIT,
            Self::Themes => THEMES_BIT,
        }
    }
}

impl ExperienceToggles {
    /// Packs the toggles into the 6-bit preset selector
    #[must_use]
    pub const fn selector(&self) -> u8 {
        let mut selector = 0;
        if self.wallpaper {
            selector |= WALLPAPER_BIT;
        }
        if self.font_smoothing {
            selector |= FONT_SMOOTHING_BIT;
        }
        if self.aero {
            selector |= AERO_BIT;
        }
        if self.window_drag {
            selector |= WINDOW_DRAG_BIT;
        }
        if self.menu_animations {
            selector |= MENU_ANIMATIONS_BIT;
        }
        if self.themes {
            selector |= THEMES_BIT;
        }
        selector
    }

    /// Unpacks a 6-bit selector; higher bits are ignored
    #[must_use]
    pub const fn from_selector(selector: u8) -> Self {
        Self {
            wallpaper: selector & WALLPAPER_BIT != 0,
            font_smoothing: selector & FONT_SMOOTHING_BIT != 0,
            aero: selector & AERO_BIT != 0,
            window_drag: selector & WINDOW_DRAG_BIT != 0,
            menu_animations: selector & MENU_ANIMATIONS_BIT != 0,
            themes: selector & THEMES_BIT != 0,
        }
    }

    /// Reads one toggle
    #[must_use]
    pub const fn get(&self, toggle: ExperienceToggle) -> bool {
        match toggle {
            ExperienceToggle::Wallpaper => self.wallpaper,
            ExperienceToggle::FontSmoothing => self.font_smoothing,
            ExperienceToggle::Aero => self.aero,
            ExperienceToggle::WindowDrag => self.window_drag,
            ExperienceToggle::MenuAnimations => self.menu_animations,
            ExperienceToggle::Themes => self.themes,
        }
    }

    /// Writes one toggle
    pub fn set(&mut self, toggle: ExperienceToggle, value: bool) {
        match toggle {
            ExperienceToggle::Wallpaper => self.wallpaper = value,
            ExperienceToggle::FontSmoothing => self.font_smoothing = value,
            ExperienceToggle::Aero => self.aero = value,
            ExperienceToggle::WindowDrag => self.window_drag = value,
            ExperienceToggle::MenuAnimations => self.menu_animations = value,
            ExperienceToggle::Themes => self.themes = value,
        }
    }
}

impl PerformancePreset {
    /// Toggle pattern applied when this preset is selected.
    ///
    /// `Custom` has no pattern.
    #[must_use]
    pub const fn toggles(self) -> Option<ExperienceToggles> {
        match self {
            Self::Minimum => Some(ExperienceToggles::from_selector(0)),
            Self::Low => Some(ExperienceToggles::from_selector(THEMES_BIT)),
            Self::Mid => Some(ExperienceToggles::from_selector(THEMES_BIT | AERO_BIT)),
            Self::High => Some(ExperienceToggles::all(true)),
            Self::Custom => None,
        }
    }

    /// Preset matching a toggle combination exactly, or `Custom`
    #[must_use]
    pub const fn from_toggles(toggles: &ExperienceToggles) -> Self {
        match toggles.selector() {
            0x00 => Self::Minimum,
            0x20 => Self::Low,
            0x24 => Self::Mid,
            0x3F => Self::High,
            _ => Self::Custom,
        }
    }
}

/// Experience group: preset, its toggles, and the cache options
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExperienceSettings {
    preset: PerformancePreset,
    toggles: ExperienceToggles,
    /// Caching options, independent of the preset
    pub cache: CacheSettings,
    #[serde(skip)]
    updating: bool,
}

impl PartialEq for ExperienceSettings {
    fn eq(&self, other: &Self) -> bool {
        self.preset == other.preset && self.toggles == other.toggles && self.cache == other.cache
    }
}

impl Eq for ExperienceSettings {}

impl ExperienceSettings {
    /// Builds settings from toggles, deriving the preset
    #[must_use]
    pub fn from_toggles(toggles: ExperienceToggles, cache: CacheSettings) -> Self {
        Self {
            preset: PerformancePreset::from_toggles(&toggles),
            toggles,
            cache,
            updating: false,
        }
    }

    /// Current preset
    #[must_use]
    pub const fn preset(&self) -> PerformancePreset {
        self.preset
    }

    /// Current toggles
    #[must_use]
    pub const fn toggles(&self) -> ExperienceToggles {
        self.toggles
    }

    /// User picked a preset.
    ///
    /// Named presets rewrite all six toggles; `Custom` leaves them alone.
    pub fn select_preset(&mut self, preset: PerformancePreset) {
        self.preset = preset;
        self.on_preset_changed(preset);
    }

    /// User changed one toggle
    pub fn set_toggle(&mut self, toggle: ExperienceToggle, value: bool) {
        self.toggles.set(toggle, value);
        self.on_toggles_changed();
    }

    /// Replaces all six toggles at once, then reconciles the preset
    pub fn set_toggles(&mut self, toggles: ExperienceToggles) {
        self.toggles = toggles;
        self.on_toggles_changed();
    }

    fn on_preset_changed(&mut self, preset: PerformancePreset) {
        if self.updating {
            return;
        }
        if let Some(pattern) = preset.toggles() {
            for toggle in ExperienceToggle::all() {
                self.toggles.set(*toggle, pattern.get(*toggle));
                self.on_toggles_changed();
            }
        }
    }

    fn on_toggles_changed(&mut self) {
        // Don't cycle between here and on_preset_changed()
        self.updating = true;
        let preset = PerformancePreset::from_toggles(&self.toggles);
        self.select_preset(preset);
        self.updating = false;
    }
}
