//! # Blackjack CLI Library
//!
//! Command-line front end for the `blackjack-engine` crate: play rounds
//! against the house dealer in the terminal, inspect a seeded deal, or show
//! the effective configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and reads interactive input from stdin.
//! [`run_with_input`] does the same with any buffered reader, which is what
//! the tests use.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::Cursor;
//! let mut input = Cursor::new("");
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = blackjack_cli::run_with_input(
//!     vec!["blackjack", "play", "--auto", "--seed", "7", "--rounds", "2"],
//!     &mut input,
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds against the dealer
//! - `deal`: Deal one opening hand for inspection
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
pub mod console;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{BlackjackCli, Commands};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Interactive input is read from the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with interactive input taken from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BlackjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Blackjack CLI");
                    write_or_exit!(err, "Usage: blackjack <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: blackjack --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play(args) => handle_play_command(args, input, out, err),
        Commands::Deal { seed, decks } => handle_deal_command(seed, decks, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };
    match result {
        Ok(()) => exit_code::SUCCESS,
        // Handlers already reported their own failure on err
        Err(CliError::InvalidInput(_) | CliError::Config(_) | CliError::Engine(_)) => {
            exit_code::ERROR
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
