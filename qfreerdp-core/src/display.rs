//! Local display geometry
//!
//! The standard size catalogue is filtered down to sizes that fit on at
//! least one attached display. Displays come from `xrandr` on X11 or from an
//! explicit list.

use std::process::{Command, Stdio};
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{DisplayArea, Resolution, STANDARD_RESOLUTIONS, usable_resolutions};

/// Matches an active output line such as
/// `HDMI-1 connected primary 1920x1080+0+0 (normal left inverted) 527mm x 296mm`
static XRANDR_OUTPUT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+ connected (?:primary )?(\d+)x(\d+)\+(-?\d+)\+(-?\d+)")
        .expect("XRANDR_OUTPUT_REGEX is a valid regex pattern")
});

/// Source of the attached displays' geometry
pub trait DisplayProvider {
    /// Returns the attached displays; empty if unknown
    fn displays(&self) -> Vec<DisplayArea>;
}

/// Reads displays from `xrandr --query`
#[derive(Debug, Clone, Copy, Default)]
pub struct XrandrDisplays;

impl DisplayProvider for XrandrDisplays {
    fn displays(&self) -> Vec<DisplayArea> {
        let output = match Command::new("xrandr")
            .arg("--query")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) if output.status.success() => output,
            Ok(output) => {
                tracing::debug!(status = %output.status, "xrandr failed, display size unknown");
                return Vec::new();
            }
            Err(e) => {
                tracing::debug!(error = %e, "xrandr not available, display size unknown");
                return Vec::new();
            }
        };

        let displays = parse_xrandr_output(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!(count = displays.len(), "Detected displays");
        displays
    }
}

/// A fixed list of displays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDisplays(pub Vec<DisplayArea>);

impl DisplayProvider for StaticDisplays {
    fn displays(&self) -> Vec<DisplayArea> {
        self.0.clone()
    }
}

/// Parses the active outputs from `xrandr --query` output.
///
/// Disconnected outputs and connected outputs without a mode are skipped.
#[must_use]
pub fn parse_xrandr_output(output: &str) -> Vec<DisplayArea> {
    output
        .lines()
        .filter_map(|line| {
            let caps = XRANDR_OUTPUT_REGEX.captures(line)?;
            Some(DisplayArea::new(
                caps[3].parse().ok()?,
                caps[4].parse().ok()?,
                caps[1].parse().ok()?,
                caps[2].parse().ok()?,
            ))
        })
        .collect()
}

/// Standard sizes that fit on at least one display from `provider`.
///
/// With no display information the whole catalogue is offered.
#[must_use]
pub fn offered_resolutions(provider: &dyn DisplayProvider) -> Vec<Resolution> {
    usable_resolutions(STANDARD_RESOLUTIONS, &provider.displays())
}
