//! circleci-env - Main entry point

use log::debug;
use std::process::ExitCode;

use circleci_env::{logging, CircleClient, CircleError, Cli, EnvManager, TerminalPrompter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    logging::init(cli.debug);

    debug!("Starting circleci-env v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: api_url={}, project={}, context={:?}, env_file={:?}, list_envs={}, delete={}, owner_type={}",
        cli.api_url,
        cli.project,
        cli.context,
        cli.env_file,
        cli.list_envs,
        cli.delete,
        cli.owner_type
    );

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CircleError> {
    if cli.token.trim().is_empty() {
        return Err(CircleError::Config(
            "API token is empty. Use --token or CIRCLE_TOKEN".to_string(),
        ));
    }

    let client = CircleClient::new(cli.token.clone(), &cli.api_url);
    let manager = EnvManager::new(client, TerminalPrompter).quiet(cli.debug);

    let outcome = manager.run(&cli.run_options()).await?;
    debug!("Finished: {:?}", outcome);

    Ok(())
}
