//! pk - pick one entry through a configured selector

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use picker::cli::{Cli, Command};
use picker::config::Config;
use picker::{Picker, PresetRegistry};

fn parse_level(level: &str) -> tracing::Level {
    match level.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", level);
            tracing::Level::INFO
        }
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // The terminal belongs to the selector, so logs go to a file
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("picker")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > INFO
    let level = cli_log_level
        .or(config_log_level)
        .map(parse_level)
        .unwrap_or(tracing::Level::INFO);

    let log_file = fs::File::create(log_dir.join("picker.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

/// Non-empty stdin lines, in order
fn read_entries(input: impl BufRead) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read entries from stdin")?;
        if !line.trim().is_empty() {
            entries.push(line);
        }
    }
    Ok(entries)
}

fn cmd_select(
    config: &Config,
    registry: PresetRegistry,
    entries: Vec<String>,
    picker_id: Option<String>,
    title: Option<String>,
    silent: bool,
) -> Result<ExitCode> {
    let entries = if entries.is_empty() {
        debug!("cmd_select: reading entries from stdin");
        read_entries(io::stdin().lock())?
    } else {
        entries
    };

    let picker_id = picker_id.unwrap_or_else(|| config.default_picker.clone());
    let title = title.unwrap_or_else(|| config.default_title.clone());
    info!(%picker_id, entries = entries.len(), "cmd_select: prompting");

    let picker = Picker::new(registry);
    match picker.prompt(&entries, &picker_id, &title, silent) {
        Some(selected) => {
            info!("cmd_select: entry selected");
            println!("{}", selected);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            info!("cmd_select: nothing selected");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn cmd_list(registry: &PresetRegistry) -> Result<ExitCode> {
    for (id, preset) in registry.iter() {
        let target = match &preset.command {
            Some(command) => format!("{} {}", command, preset.args.join(" ")),
            None => preset.args.join(" "),
        };
        println!("{} {} {}", id.cyan(), format!("[{}]", preset.strategy).yellow(), target.dimmed());
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;
    info!("pk starting");

    let registry = config.registry();

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Select {
            entries,
            picker,
            title,
            silent,
        } => cmd_select(&config, registry, entries, picker, title, silent),
        Command::List => cmd_list(&registry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_entries_skips_blank_lines() {
        let input = "libfoo.so.6\n\n  \nlibbar.so.1\n";

        let entries = read_entries(input.as_bytes()).unwrap();

        assert_eq!(entries, vec!["libfoo.so.6", "libbar.so.1"]);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), tracing::Level::DEBUG);
        assert_eq!(parse_level("Warning"), tracing::Level::WARN);
        assert_eq!(parse_level("nonsense"), tracing::Level::INFO);
    }
}
