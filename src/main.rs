use clap::Parser;
use log::{error, info};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod auth;
mod cli;
mod config;
mod core;
mod driver;
mod error;
mod inventory;
mod output;
mod providers;

use cli::Cli;
use config::Config;
use error::Error;
use providers::dynect::{DynectConfig, DynectProvider, error::map_error};

async fn start(cli: Cli) -> Result<(), Error> {
    let config = Config::load(&cli.config)?;
    let provider = DynectProvider::new(DynectConfig::from(&config)).map_err(map_error)?;

    let (written, _) = driver::run(
        &provider,
        &config.credentials,
        &cli.mode(),
        std::io::stdout(),
        cli.file.as_deref(),
    )
    .await?;
    info!("Listed {written} names");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the listed names.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match start(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
