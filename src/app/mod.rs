// Application layer: turns a parsed command line into an exit code.

use crate::config::{CliConfig, FileConfig, Settings};
use crate::core::{CommandOutput, Connector, Controller};
use crate::utils::error::{CastError, Result};
use crate::utils::output;
use crate::utils::validation::Validate;
use std::io::Write;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Runs one CLI invocation and returns the process exit code.
///
/// Host and argument checks happen before `connector` is touched.
pub async fn run<C: Connector, W: Write>(cli: CliConfig, connector: C, out: &mut W) -> i32 {
    let result = match execute(cli, connector).await {
        Ok(outcome) => output::render(&outcome, out),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report(&e),
    }
}

pub async fn execute<C: Connector>(cli: CliConfig, connector: C) -> Result<CommandOutput> {
    let file = match &cli.config {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            let file = FileConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let settings = Settings::resolve(&cli, file.as_ref())?;
    cli.validate()?;

    tracing::debug!(
        host = %settings.host,
        port = settings.port,
        command = cli.command.name(),
        "Configuration resolved"
    );

    Controller::new(connector, settings)
        .execute(cli.command)
        .await
}

/// Exit code for a command line clap refused. Help and version requests
/// are not failures.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
            EXIT_SUCCESS
        }
        _ => EXIT_FAILURE,
    }
}

fn report(e: &CastError) -> i32 {
    tracing::debug!(category = ?e.category(), "❌ {}", e);
    tracing::debug!("💡 {}", e.recovery_suggestion());
    eprintln!("Error: {}", e);
    e.exit_code()
}
