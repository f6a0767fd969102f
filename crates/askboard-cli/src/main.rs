//! Askboard command-line client.
//!
//! Binary name: `askb`
//!
//! Parses CLI arguments, wires the API client to the configured server and
//! credential store, then dispatches to the matching command handler.

mod cli;
mod output;
mod state;
mod ui;

use std::io::Write;

use clap::Parser;
use clap_complete::{Shell, generate};

use askboard_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    let result = if let Commands::Completions { shell } = cli.command {
        write_completions(shell, &mut std::io::stdout());
        Ok(())
    } else {
        run(cli).await
    };

    shutdown_tracing();
    result
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = <Cli as clap::CommandFactory>::command();
    generate(shell, &mut cmd, "askb", out);
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let state = AppState::init(cli.store, cli.api_url, cli.quiet).await?;
    let json = cli.json;

    match cli.command {
        Commands::Questions { action } => cli::questions::run(&state, action, json).await?,
        Commands::Answers { action } => cli::answers::run(&state, action, json).await?,
        Commands::Login { email, password } => {
            cli::session::login(&state, email, password, json).await?;
        }
        Commands::Register {
            admin,
            email,
            password,
            username,
            display_name,
        } => {
            cli::session::register(&state, admin, email, password, username, display_name, json)
                .await?;
        }
        Commands::Whoami => cli::session::whoami(&state, json).await?,
        Commands::Logout => cli::session::logout(&state, json).await?,
        Commands::Upload { path, file } => {
            cli::upload::upload(&state, &path, &file, json).await?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
