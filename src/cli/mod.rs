pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "techdigest")]
#[command(about = "Post a daily digest of tech news to a Telegram channel", long_about = None)]
pub struct Cli {
    /// Read settings from this file instead of ./.env
    #[arg(long, global = true)]
    pub env_file: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Fetch, summarize and publish the digest (default)
    Run,
    /// Print the articles that would be summarized
    Articles,
    /// Print the prompt that would be sent to the model
    Prompt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_is_implicit() {
        let cli = Cli::try_parse_from(["techdigest"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(cli.env_file.is_none());
    }

    #[test]
    fn test_subcommands_and_env_file() {
        let cli = Cli::try_parse_from(["techdigest", "prompt", "--env-file", "prod.env"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Prompt));
        assert_eq!(cli.env_file.as_deref(), Some(std::path::Path::new("prod.env")));

        let cli = Cli::try_parse_from(["techdigest", "articles"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Articles));
    }
}
