//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

/// サービスのローテーション済みログからレポートを作成するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "logreport")]
#[command(about = "Aggregate rotated service logs into per-service reports", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./logreport.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Rebuild reports for services matching NAME and print them
    Service {
        /// Service name pattern (case-insensitive regular expression)
        name: String,

        /// Log directory (defaults to the configured log directory)
        #[arg(short, long, default_value = "")]
        folder: String,

        /// Persist the rebuilt reports to the store
        #[arg(long)]
        save: bool,
    },

    /// Print the reports currently in the store
    List,

    /// Rebuild reports for NAME and print every distinct log line seen
    Logs {
        /// Service name pattern (case-insensitive regular expression)
        name: String,

        /// Log directory (defaults to the configured log directory)
        #[arg(short, long, default_value = "")]
        folder: String,
    },

    /// Empty the store and persist the empty state
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["logreport", "list"]);
        assert_eq!(args.config, "./logreport.json");
        assert_eq!(args.command, Command::List);
    }

    #[test]
    fn test_args_service() {
        let args = Args::parse_from(["logreport", "service", "auth"]);
        assert_eq!(
            args.command,
            Command::Service {
                name: "auth".to_string(),
                folder: String::new(),
                save: false,
            }
        );
    }

    #[test]
    fn test_args_service_with_folder_and_save() {
        let args = Args::parse_from(["logreport", "service", "auth", "-f", "/var/log", "--save"]);
        assert_eq!(
            args.command,
            Command::Service {
                name: "auth".to_string(),
                folder: "/var/log".to_string(),
                save: true,
            }
        );
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["logreport", "-c", "/custom/config.json", "clear"]);
        assert_eq!(args.config, "/custom/config.json");
        assert_eq!(args.command, Command::Clear);
    }

    #[test]
    fn test_args_logs() {
        let args = Args::parse_from(["logreport", "logs", "billing", "--folder", "./logs"]);
        assert_eq!(
            args.command,
            Command::Logs {
                name: "billing".to_string(),
                folder: "./logs".to_string(),
            }
        );
    }

    #[test]
    fn test_args_requires_command() {
        assert!(Args::try_parse_from(["logreport"]).is_err());
    }
}
