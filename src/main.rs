use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use techdigest::cli::{commands, Cli, Commands};
use techdigest::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match &cli.env_file {
        Some(path) => Config::from_env_file(path)?,
        None => {
            dotenv::dotenv().ok();
            Config::from_env()?
        }
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run_digest(config).await?,
        Commands::Articles => commands::list_articles(config).await?,
        Commands::Prompt => commands::print_prompt(config).await?,
    }

    Ok(())
}
