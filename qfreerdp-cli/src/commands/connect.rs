//! Starts a FreeRDP session.

use std::io::IsTerminal;
use std::path::Path;

use qfreerdp_core::display::offered_resolutions;
use qfreerdp_core::models::{Preferences, Resolution};
use qfreerdp_core::protocol::{
    DetachedLauncher, build_freerdp_args, format_command_for_log, launch_session,
};
use secrecy::{ExposeSecret, SecretString};

use crate::cli::PreferenceArgs;
use crate::error::CliError;
use crate::util::{create_config_manager, display_provider};

/// Options for a connect run
pub struct ConnectParams<'a> {
    pub config_path: Option<&'a Path>,
    pub client: &'a str,
    pub displays: &'a [Resolution],
    pub options: &'a PreferenceArgs,
    pub dry_run: bool,
    pub no_save: bool,
}

/// Connect command handler
///
/// Restores the saved preferences, applies the overrides, and starts the
/// client detached. Preferences are saved only after the client started.
pub fn cmd_connect(params: &ConnectParams<'_>) -> Result<(), CliError> {
    let config_manager = create_config_manager(params.config_path)?;
    let catalogue = offered_resolutions(display_provider(params.displays).as_ref());

    let mut prefs = config_manager.load_preferences(&catalogue);
    params.options.apply(&mut prefs, &catalogue)?;
    prompt_missing_passwords(&mut prefs)?;

    if params.dry_run {
        let args = build_freerdp_args(&prefs)?;
        println!("{}", format_command_for_log(params.client, &args));
        return Ok(());
    }

    let session = launch_session(&prefs, params.client, &DetachedLauncher)?;
    println!(
        "Started {} for {} (pid {})",
        params.client, prefs.login.server, session.pid
    );

    if !params.no_save {
        // Session is already running; a save failure only warns
        if let Err(e) = config_manager.save_preferences(&prefs) {
            tracing::warn!(error = %e, "Failed to save preferences");
        }
    }

    Ok(())
}

/// Prompts for empty passwords when stdin is a terminal.
///
/// The gateway password is asked for only when a gateway user is set.
fn prompt_missing_passwords(prefs: &mut Preferences) -> Result<(), CliError> {
    if !std::io::stdin().is_terminal() {
        return Ok(());
    }

    if prefs.login.password.expose_secret().is_empty()
        && !prefs.login.server.is_empty()
        && !prefs.login.username.is_empty()
    {
        let prompt = format!(
            "Password for {}@{}: ",
            prefs.login.username, prefs.login.server
        );
        prefs.login.password = SecretString::from(rpassword::prompt_password(prompt)?);
    }

    if prefs.gateway.is_enabled()
        && !prefs.gateway.username.is_empty()
        && prefs.gateway.password.expose_secret().is_empty()
    {
        let prompt = format!(
            "Gateway password for {}@{}: ",
            prefs.gateway.username, prefs.gateway.server
        );
        prefs.gateway.password = SecretString::from(rpassword::prompt_password(prompt)?);
    }

    Ok(())
}
