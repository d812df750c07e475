//! Card, hand, and settlement formatters for terminal display.
//!
//! Pure functions producing the strings the play and deal commands print.
//! Suits use Unicode symbols with an ASCII fallback for terminals that do not
//! render them.
//!
//! ## Example
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_cli::formatters::format_card;
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let mut hidden = ace_spades;
//! hidden.set_face_up(false);
//! assert_eq!(format_card(&hidden), "??");
//! ```

use blackjack_engine::cards::{Card, Suit};
use blackjack_engine::hand::{Hand, HandValue};
use blackjack_engine::record::RoundRecord;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        suit.symbol()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

/// Rank symbol followed by suit, or `??` for a face-down card.
pub fn format_card(card: &Card) -> String {
    if !card.is_face_up() {
        return "??".to_string();
    }
    format!("{}{}", card.rank().symbol(), format_suit(card.suit()))
}

pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

pub fn format_hand(hand: &Hand) -> String {
    format_cards(hand.cards())
}

/// Total, with the hard alternative when an ace is still counted as 11.
///
/// ```rust
/// use blackjack_engine::hand::HandValue;
/// use blackjack_cli::formatters::format_score;
///
/// let soft = HandValue { total: 17, soft: true, bust: false };
/// assert_eq!(format_score(soft), "17/7");
/// let hard = HandValue { total: 20, soft: false, bust: false };
/// assert_eq!(format_score(hard), "20");
/// ```
pub fn format_score(value: HandValue) -> String {
    if value.soft {
        format!("{}/{}", value.total, value.total - 10)
    } else {
        value.total.to_string()
    }
}

/// Two lines showing both hands as the player sees them mid-round.
/// The dealer's score is omitted while the hole card is hidden.
pub fn format_table(dealer: &Hand, player: &Hand) -> [String; 2] {
    let dealer_line = if dealer.cards().iter().any(|c| !c.is_face_up()) {
        format!("Dealer: {}", format_hand(dealer))
    } else {
        format!(
            "Dealer: {} ({})",
            format_hand(dealer),
            format_score(dealer.value())
        )
    };
    let player_line = format!(
        "You:    {} ({})",
        format_hand(player),
        format_score(player.value())
    );
    [dealer_line, player_line]
}

/// Final summary of a settled round.
pub fn format_settlement(record: &RoundRecord) -> Vec<String> {
    let mut lines = Vec::with_capacity(6);
    if record.player_bust {
        lines.push(format!(
            "Bust! Your cards: {}. Total: {}",
            format_cards(&record.player_cards),
            record.player_score
        ));
    }
    if record.dealer_bust {
        lines.push("Dealer busts!".to_string());
    }
    lines.push("--- Result ---".to_string());
    lines.push(format!(
        "Dealer: {} ({})",
        format_cards(&record.dealer_cards),
        record.dealer_score
    ));
    lines.push(format!(
        "You:    {} ({})",
        format_cards(&record.player_cards),
        record.player_score
    ));
    lines.push(record.outcome.describe().to_string());
    lines.push(format!(
        "Bet: {}. Payout: {}. Balance: {}",
        record.bet, record.payout, record.balance
    ));
    lines
}
