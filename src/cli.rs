// CLI module - command-line argument parsing and handlers
//
// Running without a subcommand starts the TUI. Subcommands:
// - config --show: Display effective configuration
// - config --path: Print the config file location
// - config --reset: Regenerate config file with defaults
// - roster: Print the startup roster as JSON

use crate::config::{Config, VERSION};
use crate::roster::Roster;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Person cards - show, rename and delete people in the terminal
#[derive(Parser)]
#[command(name = "person-cards")]
#[command(version = VERSION)]
#[command(about = "Show, rename and delete person cards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Skip the overwrite confirmation for --reset
        #[arg(long, requires = "reset")]
        yes: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
    /// Print the roster the TUI would start with, as JSON
    Roster,
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> Result<bool> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config {
            show,
            reset,
            yes,
            path,
        }) => {
            if path {
                handle_config_path()?;
            } else if show {
                handle_config_show()?;
            } else if reset {
                handle_config_reset(yes)?;
            } else {
                println!("Usage: person-cards config [--show|--reset [--yes]|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        Some(Commands::Roster) => {
            handle_roster()?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    let path = config_path()?;
    println!();
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

fn handle_config_reset(yes: bool) -> Result<()> {
    let path = config_path()?;

    if path.exists() && !yes {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::write_default(&path)?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_roster() -> Result<()> {
    let config = Config::from_env()?;
    let roster = Roster::from_seeds(&config.persons);
    let json = serde_json::to_string_pretty(&roster).context("Failed to serialize roster")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["person-cards"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["person-cards", "roster"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Roster)));

        let cli = Cli::try_parse_from(["person-cards", "config", "--reset", "--yes"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                reset: true,
                yes: true,
                ..
            })
        ));
    }

    #[test]
    fn yes_requires_reset() {
        assert!(Cli::try_parse_from(["person-cards", "config", "--yes"]).is_err());
    }
}
