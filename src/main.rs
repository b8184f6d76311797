//! Entry point: parse CLI, load the session and dispatch clan operations.

use std::{io, process::ExitCode};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;
use wotblitz_clans::{
    cli::Clans,
    commands::{execute, Outcome},
    core::ApiConfig,
    output::Writer,
    wargaming::HttpGateway,
    SessionStore,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let app = Clans::parse();
    init_tracing(app.debug);

    let invocation = app.invocation();
    if invocation.is_empty() {
        Clans::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = ApiConfig::resolve(
        app.application_id.clone(),
        app.region,
        app.language.clone(),
    )?;
    let gateway = HttpGateway::new(&config)?;
    let store = (!app.no_session).then(SessionStore::from_env);

    let outcomes = execute(&gateway, store.as_ref(), &invocation)
        .await
        .context("failed to load session")?;

    let writer = Writer::new(app.depth, app.json);
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    for outcome in &outcomes {
        writer.write(&mut stdout, &mut stderr, outcome)?;
    }

    if outcomes.iter().any(Outcome::is_err) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("wotblitz_clans=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
