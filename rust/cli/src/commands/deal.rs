//! Deal command handler.
//!
//! Deals a single opening hand (two cards each, dealer's first card face
//! down) and prints it. Useful for checking what a seed produces before
//! playing it. Seed and deck count fall back to the configuration like
//! `play` does, so both commands open with the same cards.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_hand, format_score};
use crate::ui;
use blackjack_engine::engine::Engine;
use blackjack_engine::player::{DEFAULT_BALANCE, Participant, ScriptedChoices};
use std::io::Write;

/// Handle the deal command.
///
/// Flags override the configured values. Without any seed a random one is
/// chosen and printed so the deal can be repeated.
pub fn handle_deal_command(
    seed: Option<u64>,
    decks: Option<usize>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = match config::load_with_sources() {
        Ok(r) => r.config,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };

    let decks = decks.unwrap_or(cfg.decks);
    if decks == 0 {
        ui::write_error(err, "decks must be >= 1")?;
        return Err(CliError::InvalidInput("decks must be >= 1".to_string()));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut eng = Engine::with_seed(seed, decks, DEFAULT_BALANCE, ScriptedChoices::default());
    // A zero stake is accepted by the engine and moves it to the deal phase
    if let Err(e) = eng.place_bet(0).and_then(|_| eng.deal()) {
        ui::write_error(err, &e.to_string())?;
        return Err(e.into());
    }

    let dealer = eng.dealer().seat().hand();
    let player = eng.player().seat().hand();
    writeln!(out, "Dealer: {}", format_hand(dealer))?;
    writeln!(
        out,
        "You:    {} ({})",
        format_hand(player),
        format_score(player.value())
    )?;
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Cards remaining: {}", eng.deck().remaining_cards())?;
    Ok(())
}
