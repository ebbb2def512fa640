//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{
    OutputFormat, format_models, format_personas, format_prompt, format_turn,
};
use crate::cli::parser::{Cli, ClientArgs, Commands, SessionArgs};
use crate::cli::repl::run_repl;
use crate::completion::{CompletionClient, OpenAiCompatClient};
use crate::core::Persona;
use crate::error::Result;
use crate::prompt;
use crate::session::{Session, SessionSettings};
use tokio::io::BufReader;
use tracing::info;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success. The interactive chat writes
/// directly to stdout and returns an empty string.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub async fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Chat { client, session } => cmd_chat(client, session, format).await,
        Commands::Ask {
            input,
            client,
            session,
        } => {
            let settings = session.to_settings()?;
            let client = build_client(client)?;
            cmd_ask(&client, settings, input, format).await
        }
        Commands::Prompt { input, persona } => cmd_prompt(input, persona, format),
        Commands::Personas => Ok(format_personas(format)),
        Commands::Models => Ok(format_models(format)),
    }
}

/// Validates endpoint settings and builds the remote client.
fn build_client(args: &ClientArgs) -> Result<OpenAiCompatClient> {
    let config = args.to_config();
    info!(base_url = %config.base_url, "using completion endpoint");
    OpenAiCompatClient::new(&config)
}

async fn cmd_chat(
    client_args: &ClientArgs,
    session_args: &SessionArgs,
    format: OutputFormat,
) -> Result<String> {
    let settings = session_args.to_settings()?;
    let client = build_client(client_args)?;
    let mut session = Session::new(settings);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout().lock();
    run_repl(&mut session, &client, stdin, &mut stdout, format).await?;

    Ok(String::new())
}

/// Sends a single message in a fresh session.
///
/// # Errors
///
/// Returns the send error; nothing is printed on failure.
pub async fn cmd_ask(
    client: &dyn CompletionClient,
    settings: SessionSettings,
    input: &str,
    format: OutputFormat,
) -> Result<String> {
    let mut session = Session::new(settings);
    let turn = session.send(client, input).await?;
    Ok(format_turn(turn, settings.persona, format))
}

/// Renders the prompt for `input` with an empty history.
///
/// # Errors
///
/// Returns an unknown-persona error.
pub fn cmd_prompt(input: &str, persona: &str, format: OutputFormat) -> Result<String> {
    let persona: Persona = persona.parse()?;
    let rendered = prompt::build(persona, &[], input);
    Ok(format_prompt(&rendered, persona, format))
}
