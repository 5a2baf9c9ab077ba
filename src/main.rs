//! vitrine: command-line content client for the Vitrine publishing API.

use std::sync::Arc;

use clap::Parser;

use vitrine::config::{self, CliArgs, Command};
use vitrine::infra::{api::ApiClient, telemetry};
use vitrine::presentation::{self, CliError};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = CliArgs::parse();
    let settings = config::load(&cli)?;
    telemetry::init(&settings.logging)?;

    let client = Arc::new(ApiClient::new(&settings.api.base_url)?);
    match cli.command {
        Command::Blogs(cmd) => presentation::blogs::handle(&client, cmd.action).await?,
        Command::Projects(cmd) => presentation::projects::handle(&client, cmd.action).await?,
    }

    Ok(())
}
