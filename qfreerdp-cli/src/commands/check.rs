//! Reports the detected FreeRDP client.

use qfreerdp_core::protocol::DetectedClient;

use crate::error::CliError;

/// Check command handler
///
/// The version check itself runs at startup; this only reports its result.
pub fn cmd_check(client: &DetectedClient) -> Result<(), CliError> {
    println!("{}: FreeRDP {} (supported)", client.binary, client.version);
    Ok(())
}
