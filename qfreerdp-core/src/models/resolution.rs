//! Screen resolutions and the standard resolution catalogue

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest accepted custom width or height
pub const MIN_CUSTOM_DIMENSION: u32 = 100;

/// Largest accepted custom width or height
pub const MAX_CUSTOM_DIMENSION: u32 = 65535;

/// Screen resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Resolution {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if this resolution fits inside the given display area
    #[must_use]
    pub const fn fits_in(&self, area: &DisplayArea) -> bool {
        area.width >= self.width && area.height >= self.height
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = String;

    /// Parses `"<width>x<height>"`, tolerating surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
        let width = w
            .trim()
            .parse()
            .map_err(|_| format!("invalid width `{w}`"))?;
        let height = h
            .trim()
            .parse()
            .map_err(|_| format!("invalid height `{h}`"))?;
        Ok(Self::new(width, height))
    }
}

/// Usable area of one attached display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayArea {
    /// Left edge in virtual desktop coordinates
    pub x: i32,
    /// Top edge in virtual desktop coordinates
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl DisplayArea {
    /// Creates a display area at the given position
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a display area at the origin
    #[must_use]
    pub const fn sized(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }
}

/// Common screen sizes offered for the standard resolution mode.
///
/// Sorted ascending by width, then height.
pub const STANDARD_RESOLUTIONS: &[Resolution] = &[
    Resolution::new(640, 480),
    Resolution::new(800, 600),
    Resolution::new(1024, 768),
    Resolution::new(1280, 720),
    Resolution::new(1280, 768),
    Resolution::new(1280, 800),
    Resolution::new(1280, 960),
    Resolution::new(1280, 1024),
    Resolution::new(1360, 768),
    Resolution::new(1400, 1050),
    Resolution::new(1440, 900),
    Resolution::new(1600, 900),
    Resolution::new(1600, 960),
    Resolution::new(1600, 1200),
    Resolution::new(1680, 1050),
    Resolution::new(1920, 1080),
    Resolution::new(1920, 1200),
    Resolution::new(1920, 1280),
    Resolution::new(1920, 1440),
    Resolution::new(2048, 1152),
    Resolution::new(2048, 1536),
    Resolution::new(2560, 1440),
    Resolution::new(2560, 1600),
    Resolution::new(2560, 1920),
    Resolution::new(3200, 1800),
    Resolution::new(3840, 2160),
    Resolution::new(4096, 2304),
    Resolution::new(4096, 3072),
    Resolution::new(5120, 2160),
    Resolution::new(5120, 2880),
    Resolution::new(6400, 4800),
    Resolution::new(7680, 4320),
    Resolution::new(8192, 4608),
];

/// Returns the largest entry of the full catalogue
#[must_use]
pub const fn largest_standard_resolution() -> Resolution {
    STANDARD_RESOLUTIONS[STANDARD_RESOLUTIONS.len() - 1]
}

/// Filters a catalogue down to the entries that fit at least one display.
///
/// With no displays the catalogue is returned unfiltered. If no entry fits
/// any display, the smallest entry is kept so the result is never empty.
#[must_use]
pub fn usable_resolutions(catalogue: &[Resolution], displays: &[DisplayArea]) -> Vec<Resolution> {
    if displays.is_empty() {
        return catalogue.to_vec();
    }

    let usable: Vec<Resolution> = catalogue
        .iter()
        .filter(|res| displays.iter().any(|area| res.fits_in(area)))
        .copied()
        .collect();

    if usable.is_empty() {
        catalogue.first().copied().into_iter().collect()
    } else {
        usable
    }
}

/// Finds `wanted` in the catalogue by exact equality.
///
/// Falls back to the last (largest) entry when there is no exact match.
/// Returns `None` only for an empty catalogue.
#[must_use]
pub fn match_catalogue(catalogue: &[Resolution], wanted: Resolution) -> Option<Resolution> {
    catalogue
        .iter()
        .find(|res| **res == wanted)
        .or_else(|| catalogue.last())
        .copied()
}

/// Parses a custom width or height as typed by the user.
///
/// Returns `None` unless the text is an integer within
/// [`MIN_CUSTOM_DIMENSION`]..=[`MAX_CUSTOM_DIMENSION`].
#[must_use]
pub fn parse_custom_dimension(text: &str) -> Option<u32> {
    text.trim()
        .parse::<u32>()
        .ok()
        .filter(|v| (MIN_CUSTOM_DIMENSION..=MAX_CUSTOM_DIMENSION).contains(v))
}
