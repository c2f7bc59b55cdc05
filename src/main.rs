//! Boardlink CLI entrypoint for linking issues onto project boards.

use std::io::{self, Write};
use std::process::ExitCode;

use boardlink::{
    BoardlinkConfig, DraftLinker, LinkError, OctocrabProjectGateway, PersonalAccessToken,
    ProjectLocator, workflow,
};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), LinkError> {
    let config = load_config()?;

    let project_url = config.require_project_url()?;
    let token_value = config.resolve_token()?;
    let token = PersonalAccessToken::new(token_value)?;

    let locator = ProjectLocator::parse(project_url)?;

    let event_path = config.resolve_event_path()?;
    let issue = workflow::load_issue_snapshot(&event_path)?;

    let gateway = OctocrabProjectGateway::for_token(&token, &locator)?;
    let linker = DraftLinker::new(&gateway);
    let item = linker.link(&locator, &issue).await?;

    workflow::write_step_output(workflow::ITEM_ID_OUTPUT, item.id())?;
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`LinkError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<BoardlinkConfig, LinkError> {
    BoardlinkConfig::load().map_err(|error| LinkError::Configuration {
        message: error.to_string(),
    })
}
