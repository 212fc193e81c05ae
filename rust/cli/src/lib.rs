//! # Showdown CLI Library
//!
//! Command-line front end for the showdown engine: classify a hand, resolve
//! a showdown between named players, or deal a full seeded game.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand handler and
//! returns the process exit code. Output streams are injected so the whole
//! CLI can be driven from tests.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = showdown_cli::run(
//!     ["showdown", "eval", "--hole", "4c 4d", "--board", "4s Ac Ah 9d 2s"],
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().starts_with("Hand: Full House (4,A)"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Classify one hand and print its label and tie-break key
//! - `resolve`: Resolve a showdown, reporting split pots
//! - `deal`: Deal a full game with the engine and show the winners
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, ShowdownCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_resolve_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["eval", "resolve", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for usage, input, configuration and
/// engine errors (an invalid showdown included).
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["showdown", "deal", "--seed", "42"];
/// let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShowdownCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    // cfg reports its own config errors; every other command needs a valid one.
    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        cmd => match config::load() {
            Ok(cfg) => {
                logging::init(&cfg.log_level);
                dispatch(cmd, &cfg, out)
            }
            Err(e) => Err(CliError::Config(e.to_string())),
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(cmd: Commands, cfg: &config::Config, out: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Eval { hole, board, json } => handle_eval_command(&hole, &board, json, out),
        Commands::Resolve {
            players,
            board,
            json,
        } => handle_resolve_command(&players, &board, json, out),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, cfg, out),
        Commands::Cfg => handle_cfg_command(out),
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Usage: showdown <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: showdown --help");
    exit_code::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcommand_parses() {
        let commands = vec![
            vec!["showdown", "cfg"],
            vec!["showdown", "eval", "--hole", "Ac Kd"],
            vec!["showdown", "resolve", "--player", "A:Ac Kd", "--player", "B:2c 2h"],
            vec!["showdown", "deal"],
            vec!["showdown", "deal", "--seed", "3", "--players", "A,B"],
        ];
        for cmd_args in commands {
            let result = ShowdownCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn deal_players_split_on_commas() {
        let cli = ShowdownCli::try_parse_from(["showdown", "deal", "--players", "Alex,Bob,Jane"])
            .unwrap();
        match cli.cmd {
            Commands::Deal { players, .. } => {
                assert_eq!(
                    players,
                    Some(vec!["Alex".to_string(), "Bob".to_string(), "Jane".to_string()])
                );
            }
            other => panic!("expected deal, got {:?}", other),
        }
    }

    #[test]
    fn resolve_requires_a_player() {
        assert!(ShowdownCli::try_parse_from(["showdown", "resolve"]).is_err());
    }

    #[test]
    fn command_list_matches_subcommands() {
        use clap::CommandFactory;
        let names: Vec<String> = ShowdownCli::command()
            .get_subcommands()
            .map(|c| c.get_name().to_string())
            .filter(|name| name != "help")
            .collect();
        assert_eq!(names, COMMANDS);
    }
}
