use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gebzem", about = "Gebze city guide with an AI assistant (TUI)")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Start the city guide shell
    Run,
    /// Ask the assistant one question and print the reply
    Ask {
        /// Question for the assistant
        prompt: String,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["gebzem"]);

        assert_eq!(cli.command_or_default(), Command::Run);
    }

    #[test]
    fn parses_explicit_run_command() {
        let cli = Cli::parse_from(["gebzem", "run", "--config", "custom.toml"]);

        assert_eq!(cli.command_or_default(), Command::Run);
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn parses_ask_prompt() {
        let cli = Cli::parse_from(["gebzem", "ask", "Nereye gideyim?"]);

        assert_eq!(
            cli.command_or_default(),
            Command::Ask {
                prompt: "Nereye gideyim?".to_owned()
            }
        );
    }

    #[test]
    fn ask_requires_a_prompt() {
        assert!(Cli::try_parse_from(["gebzem", "ask"]).is_err());
    }
}
