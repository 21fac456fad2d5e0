//! usermgr — user management console for a REST users API.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use usermgr::config::Config;
use usermgr::console::{AutoConfirm, Confirm, Console, StdinConfirm, run_action};
use usermgr::constants;
use usermgr::env::Env;
use usermgr::logging;
use usermgr::output;

use cli::args::Cli;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    }
}

/// Returns the process exit status.
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(action) = cli.command.action() else {
        run_version();
        return Ok(0);
    };

    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let mut config = Config::load(Some(&cwd), &Env::real()).context("failed to load config")?;
    cli.apply_to(&mut config);
    tracing::debug!(?config, "resolved configuration");

    let client = config.api_client().context("failed to build API client")?;
    let confirm: Box<dyn Confirm> = if cli.assume_yes() {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(StdinConfirm)
    };
    let mut console = Console::new(client, confirm, config.ui.locale);
    cli.command.fill(&mut console.forms);

    let renderer = output::renderer_for(config.ui.format);
    let outcome = run_action(&mut console, action, renderer.as_ref()).await;
    for block in &outcome.blocks {
        println!("{block}");
    }
    Ok(outcome.exit_code())
}

/// Print version information.
fn run_version() {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
}
