//! Command handler modules for the CLI.

mod check;
mod connect;
mod resolutions;
mod shell;
mod show;

use qfreerdp_core::protocol::detect_freerdp;

use crate::cli::{Cli, Commands};
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
///
/// Every command that touches the client or its preferences runs the
/// FreeRDP version check first, exactly once.
pub fn dispatch(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Completions { shell: target } => return shell::cmd_completions(*target),
        Commands::Manpage => return shell::cmd_manpage(),
        _ => {}
    }

    let client = detect_freerdp(&cli.client)?;
    let config_path = cli.config.as_deref();

    match &cli.command {
        Commands::Connect {
            options,
            dry_run,
            no_save,
        } => connect::cmd_connect(&connect::ConnectParams {
            config_path,
            client: &cli.client,
            displays: &cli.displays,
            options,
            dry_run: *dry_run,
            no_save: *no_save,
        }),
        Commands::Show { options, format } => {
            show::cmd_show(config_path, &cli.displays, options, *format)
        }
        Commands::Resolutions => resolutions::cmd_resolutions(&cli.displays),
        Commands::Check => check::cmd_check(&client),
        Commands::Completions { .. } | Commands::Manpage => Ok(()),
    }
}
