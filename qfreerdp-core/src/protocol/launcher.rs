//! Detached client launch
//!
//! The client is started in the background and never waited on; the
//! launcher's job ends once the process exists.

use std::process::{Command, Stdio};

use crate::error::{LaunchError, LaunchResult};
use crate::models::Preferences;
use crate::tracing::span_names;

use super::freerdp::{build_freerdp_args, format_command_for_log};

/// Starts a program without waiting for it
pub trait ProcessLauncher {
    /// Spawns `program` with `args`, returning its process id
    ///
    /// # Errors
    ///
    /// Returns the OS error if the process cannot be created.
    fn spawn_detached(&self, program: &str, args: &[String]) -> std::io::Result<u32>;
}

/// Spawns real processes with all standard streams closed
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedLauncher;

impl ProcessLauncher for DetachedLauncher {
    fn spawn_detached(&self, program: &str, args: &[String]) -> std::io::Result<u32> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // Own process group, so a Ctrl-C in the launching terminal does not
        // reach the session
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let child = command.spawn()?;
        Ok(child.id())
    }
}

/// A started session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchedSession {
    /// Client process id
    pub pid: u32,
    /// Arguments the client was started with
    pub args: Vec<String>,
}

/// Compiles `prefs` and starts `program` with the result.
///
/// Nothing is spawned if validation fails.
///
/// # Errors
///
/// - [`LaunchError::Validation`] if the preferences are incomplete
/// - [`LaunchError::ProcessSpawnFailure`] if the client cannot be started
pub fn launch_session(
    prefs: &Preferences,
    program: &str,
    launcher: &dyn ProcessLauncher,
) -> LaunchResult<LaunchedSession> {
    let _span = tracing::info_span!(span_names::SESSION_LAUNCH, program = %program).entered();

    let args = build_freerdp_args(prefs)?;
    tracing::info!(
        command = %format_command_for_log(program, &args),
        "Launching FreeRDP session"
    );

    let pid = launcher
        .spawn_detached(program, &args)
        .map_err(|source| LaunchError::ProcessSpawnFailure {
            program: program.to_string(),
            source,
        })?;

    tracing::debug!(pid, "FreeRDP session started");
    Ok(LaunchedSession { pid, args })
}
