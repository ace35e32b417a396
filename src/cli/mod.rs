// ABOUTME: CLI argument parsing and command routing for poshakh
//
// Provides command-line interface for:
// - tui: launch the terminal UI (default when no command is given)
// - reset: remove all poshakh configuration and start fresh

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};

use crate::config::SetupConfig;

#[derive(Parser, Debug)]
#[command(name = "poshakh", about = "Terminal outfit-planning app", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the terminal UI (default)
    Tui,
    /// Remove all poshakh configuration and start fresh
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Execute the `reset` command: confirm, then wipe `~/.poshakh`.
pub fn run_reset(yes: bool) -> Result<()> {
    if !yes {
        print!("This will remove all poshakh data and settings. Continue? [y/N] ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    SetupConfig::factory_reset()?;
    println!("Poshakh has been reset. Run `poshakh` to start onboarding again.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_tui() {
        let cli = Cli::try_parse_from(["poshakh"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_reset_flag_parsing() {
        let cli = Cli::try_parse_from(["poshakh", "reset", "--yes"]).unwrap();
        match cli.command {
            Some(Commands::Reset { yes }) => assert!(yes),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["poshakh", "bogus"]).is_err());
    }
}
