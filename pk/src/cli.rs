//! CLI argument parsing for pk

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pk")]
#[command(author, version, about = "Pick one entry through fzf, zenity or another selector", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask the user to pick one entry
    Select {
        /// Candidate entries (read from stdin, one per line, when omitted)
        entries: Vec<String>,

        /// Picker preset to use (see `pk list`)
        #[arg(short, long)]
        picker: Option<String>,

        /// Title shown by the selector
        #[arg(short, long)]
        title: Option<String>,

        /// Do not print diagnostics on failure
        #[arg(short, long)]
        silent: bool,
    },

    /// List available picker presets
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_select() {
        let cli = Cli::try_parse_from(["pk", "select", "-p", "fzf", "-t", "Pick one", "-s", "a", "b"]).unwrap();

        match cli.command {
            Command::Select {
                entries,
                picker,
                title,
                silent,
            } => {
                assert_eq!(entries, vec!["a", "b"]);
                assert_eq!(picker.as_deref(), Some("fzf"));
                assert_eq!(title.as_deref(), Some("Pick one"));
                assert!(silent);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pk", "list", "--log-level", "debug"]).unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Command::List));
    }
}
