//! # Play Command
//!
//! Interactive blackjack against the house dealer.
//!
//! Each round asks for a bet, deals two cards to each side with the dealer's
//! first card face down, lets the player hit or stand from a numbered menu,
//! then plays the dealer out and settles. With `--auto` the player's hand
//! follows the dealer's draw-below-17 rule and no menu input is read.
//!
//! The session ends after the requested number of rounds, when the player
//! quits (`q` or end of input), or when the balance reaches zero.

use crate::cli::PlayArgs;
use crate::config;
use crate::console::ConsoleChoices;
use crate::error::CliError;
use crate::formatters::format_settlement;
use crate::ui;
use blackjack_engine::engine::Engine;
use blackjack_engine::errors::GameError;
use blackjack_engine::player::Participant;
use std::io::{BufRead, Write};

const AUTO_BET: u32 = 100;

/// Handle the play command.
///
/// Flags override values from the configuration file and environment.
///
/// # Errors
///
/// * `CliError::InvalidInput` if `--rounds` or `--decks` is zero
/// * `CliError::Config` if the configuration cannot be loaded
/// * `CliError::Engine` for engine failures other than an uncovered bet
/// * `CliError::Io` if reading input or writing output fails
pub fn handle_play_command(
    args: PlayArgs,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };
    let cfg = resolved.config;

    let rounds = args.rounds.unwrap_or(1);
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let decks = args.decks.unwrap_or(cfg.decks);
    if decks == 0 {
        ui::write_error(err, "decks must be >= 1")?;
        return Err(CliError::InvalidInput("decks must be >= 1".to_string()));
    }
    let balance = args.balance.unwrap_or(cfg.starting_balance);
    if balance == 0 {
        ui::write_error(err, "balance must be > 0")?;
        return Err(CliError::InvalidInput("balance must be > 0".to_string()));
    }
    if args.bet == Some(0) {
        ui::write_error(err, "bet must be > 0")?;
        return Err(CliError::InvalidInput("bet must be > 0".to_string()));
    }
    let seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let fixed_bet = if args.auto {
        ui::display_warning(
            err,
            "auto mode plays your hand with the dealer's hit-below-17 rule.",
        )?;
        Some(args.bet.unwrap_or(AUTO_BET))
    } else {
        args.bet
    };

    writeln!(
        out,
        "blackjack: rounds={} decks={} seed={}",
        rounds, decks, seed
    )?;

    let console = ConsoleChoices::new(stdin, out, args.auto);
    let mut engine = Engine::with_seed(seed, decks, balance, console);

    let mut played = 0u32;
    'session: for i in 1..=rounds {
        let balance = engine.player().seat().balance();
        {
            let out = engine.input_mut().out();
            writeln!(out, "\nRound {}", i)?;
            writeln!(out, "Balance: {}", balance)?;
        }
        if balance == 0 {
            writeln!(engine.input_mut().out(), "Out of funds.")?;
            break;
        }

        let record = loop {
            let bet = match fixed_bet {
                Some(b) => b,
                None => match engine.input_mut().read_bet(balance)? {
                    Some(b) => b,
                    None => break 'session,
                },
            };
            match engine.play_round(bet) {
                Ok(record) => break record,
                Err(e @ GameError::InsufficientFunds { .. }) => {
                    ui::write_error(err, &e.to_string())?;
                    if fixed_bet.is_some() {
                        break 'session;
                    }
                }
                Err(e) => {
                    ui::write_error(err, &e.to_string())?;
                    return Err(e.into());
                }
            }
        };
        engine.input_mut().take_io_error()?;
        played += 1;

        let out = engine.input_mut().out();
        writeln!(out)?;
        for line in format_settlement(&record) {
            writeln!(out, "{}", line)?;
        }
        if args.json {
            let json = record.to_json_line().map_err(std::io::Error::other)?;
            writeln!(out, "{}", json)?;
        }

        if engine.input_mut().quit_requested() {
            break;
        }
    }

    let final_balance = engine.player().seat().balance();
    let out = engine.input_mut().out();
    writeln!(out, "\nRounds played: {}", played)?;
    writeln!(out, "Final balance: {}", final_balance)?;
    Ok(())
}
