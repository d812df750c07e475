//! Input parsing for interactive commands.
//!
//! Turns raw console lines into bet amounts and turn-menu choices. Parsing
//! never fails hard: anything unusable is reported back as a variant the
//! caller can re-prompt on or treat as a stand.

use blackjack_engine::player::TurnChoice;

/// Result of parsing a line typed at the bet prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum BetInput {
    /// Positive whole amount
    Amount(u32),
    /// User entered q, quit, or an empty line
    Quit,
    /// Anything else, with the message to show before re-prompting
    Invalid(String),
}

/// Parse a bet amount.
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_bet, BetInput};
/// assert_eq!(parse_bet("500"), BetInput::Amount(500));
/// assert_eq!(parse_bet("q"), BetInput::Quit);
/// assert_eq!(parse_bet(""), BetInput::Quit);
/// assert!(matches!(parse_bet("0"), BetInput::Invalid(_)));
/// assert!(matches!(parse_bet("lots"), BetInput::Invalid(_)));
/// ```
pub fn parse_bet(input: &str) -> BetInput {
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "q" || input == "quit" {
        return BetInput::Quit;
    }
    match input.parse::<u32>() {
        Ok(0) => BetInput::Invalid("Bet must be positive".to_string()),
        Ok(amount) => BetInput::Amount(amount),
        Err(_) => BetInput::Invalid(format!("Invalid bet amount: {}", input)),
    }
}

/// Result of parsing a line typed at the turn menu.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuInput {
    /// Numeric menu code, recognised or not
    Choice(u32),
    /// User asked to leave the session after this round
    Quit,
    /// Not a number and not a known word
    Unrecognized,
}

/// Parse a turn-menu line.
///
/// Numbers pass through unchanged so the engine decides what they mean.
/// The words `stand`/`s`, `hit`/`h` and `split` map to their menu codes.
///
/// ```rust
/// # use blackjack_cli::validation::{parse_menu_choice, MenuInput};
/// assert_eq!(parse_menu_choice("2"), MenuInput::Choice(2));
/// assert_eq!(parse_menu_choice("Hit"), MenuInput::Choice(2));
/// assert_eq!(parse_menu_choice("9"), MenuInput::Choice(9));
/// assert_eq!(parse_menu_choice("quit"), MenuInput::Quit);
/// assert_eq!(parse_menu_choice("maybe"), MenuInput::Unrecognized);
/// ```
pub fn parse_menu_choice(input: &str) -> MenuInput {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "q" | "quit" => MenuInput::Quit,
        "s" | "stand" => MenuInput::Choice(TurnChoice::Stand.code()),
        "h" | "hit" => MenuInput::Choice(TurnChoice::Hit.code()),
        "split" => MenuInput::Choice(TurnChoice::Split.code()),
        other => match other.parse::<u32>() {
            Ok(n) => MenuInput::Choice(n),
            Err(_) => MenuInput::Unrecognized,
        },
    }
}
