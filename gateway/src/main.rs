use clap::Parser;
use config::{Config, ConfigError};
use http::{ApiServer, ServerError};
use thiserror::Error;

mod cli;
mod config;
mod http;
mod middleware;
mod tracing;

use ::tracing::info;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    ServerError(#[from] ServerError),
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}

#[actix_web::main]
async fn main() -> Result<(), CliError> {
    dotenv::from_filename(".env.local").ok();
    dotenv::dotenv().ok();

    let cli = cli::Cli::parse();
    tracing::init_tracing();

    match cli
        .command
        .unwrap_or(cli::Commands::Serve(cli::ServeArgs::default()))
    {
        cli::Commands::Check => {
            let config = Config::load(&cli.config)?;
            println!("{config:#?}");
            Ok(())
        }
        cli::Commands::Serve(serve_args) => {
            let config = Config::load(&cli.config)?.apply_cli_overrides(&serve_args);
            let api_server = ApiServer::new(config);
            info!("Starting server...");

            let server = api_server.start().await?;
            server.await?;
            Ok(())
        }
    }
}
