//! Lists the offered standard sizes.

use qfreerdp_core::display::offered_resolutions;
use qfreerdp_core::models::Resolution;

use crate::error::CliError;
use crate::util::display_provider;

/// Resolutions command handler
pub fn cmd_resolutions(displays: &[Resolution]) -> Result<(), CliError> {
    for resolution in offered_resolutions(display_provider(displays).as_ref()) {
        println!("{resolution}");
    }
    Ok(())
}
