use crate::errors::GameError;
use crate::game::Outcome;
use crate::hand::HandValue;

/// Highest non-bust total.
pub const BLACKJACK: u32 = 21;

/// The dealer stands on this total or higher.
pub const DEALER_STANDS_ON: u32 = 17;

/// Validates a stake against the bettor's balance.
///
/// Returns the accepted amount when it does not exceed `balance`. Nothing is
/// deducted here; the caller moves funds only after validation succeeds.
///
/// # Errors
///
/// Returns [`GameError::InsufficientFunds`] when `amount > balance`.
///
/// # Examples
///
/// ```
/// use blackjack_engine::rules::validate_bet;
/// use blackjack_engine::errors::GameError;
///
/// assert_eq!(validate_bet(1000, 500), Ok(500));
/// assert_eq!(validate_bet(1000, 1000), Ok(1000));
/// assert!(matches!(
///     validate_bet(1000, 1001),
///     Err(GameError::InsufficientFunds { bet: 1001, balance: 1000 })
/// ));
/// ```
pub fn validate_bet(balance: u32, amount: u32) -> Result<u32, GameError> {
    if amount > balance {
        return Err(GameError::InsufficientFunds {
            bet: amount,
            balance,
        });
    }
    Ok(amount)
}

/// House rule: draw below 17, stand on 17 through 21 (soft or hard).
///
/// ```
/// use blackjack_engine::rules::dealer_should_draw;
///
/// assert!(dealer_should_draw(16));
/// assert!(!dealer_should_draw(17));
/// assert!(!dealer_should_draw(21));
/// ```
pub fn dealer_should_draw(score: u32) -> bool {
    score < DEALER_STANDS_ON
}

/// Resolves a round from final hand snapshots.
///
/// A player bust loses regardless of the dealer's hand. Otherwise a dealer
/// bust wins for the player, and unbusted totals are compared directly.
pub fn resolve_outcome(player: HandValue, dealer: HandValue) -> Outcome {
    if player.bust {
        Outcome::PlayerBust
    } else if dealer.bust {
        Outcome::DealerBust
    } else if player.total > dealer.total {
        Outcome::PlayerWin
    } else if player.total < dealer.total {
        Outcome::DealerWin
    } else {
        Outcome::Push
    }
}
