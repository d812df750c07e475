use serde::{Deserialize, Serialize};

/// Stage of a single blackjack round.
///
/// ```text
/// AwaitingBet -> BetPlaced -> Dealt -> PlayerTurn -> PlayerBust --------> Settled
///                                                 \-> DealerTurn -------/
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No stake placed yet; hands are empty
    AwaitingBet,
    /// Stake deducted, waiting for the initial deal
    BetPlaced,
    /// Two cards each on the table
    Dealt,
    /// Player is choosing hit/stand
    PlayerTurn,
    /// Player went over 21; dealer turn is skipped
    PlayerBust,
    /// Dealer is drawing to 17
    DealerTurn,
    /// Balances updated; round is closed
    Settled,
}

impl RoundPhase {
    /// True once no more cards may be drawn for this round.
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::PlayerBust | RoundPhase::Settled)
    }
}

/// Result of a settled round from the player's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player total beats dealer total
    PlayerWin,
    /// Dealer went over 21 while the player stood
    DealerBust,
    /// Dealer total beats player total
    DealerWin,
    /// Player went over 21
    PlayerBust,
    /// Equal totals; stake returned
    Push,
}

impl Outcome {
    /// Amount credited back to the player for a stake of `bet`.
    pub fn payout(self, bet: u32) -> u32 {
        match self {
            Outcome::PlayerWin | Outcome::DealerBust => bet.saturating_mul(2),
            Outcome::Push => bet,
            Outcome::DealerWin | Outcome::PlayerBust => 0,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Outcome::PlayerWin => "You win!",
            Outcome::DealerBust => "Dealer busts, you win!",
            Outcome::DealerWin => "Dealer wins.",
            Outcome::PlayerBust => "Bust, you lose.",
            Outcome::Push => "Push.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payout_table() {
        assert_eq!(Outcome::PlayerWin.payout(500), 1000);
        assert_eq!(Outcome::DealerBust.payout(500), 1000);
        assert_eq!(Outcome::Push.payout(500), 500);
        assert_eq!(Outcome::DealerWin.payout(500), 0);
        assert_eq!(Outcome::PlayerBust.payout(500), 0);
    }

    #[test]
    fn terminal_phases() {
        assert!(RoundPhase::PlayerBust.is_terminal());
        assert!(RoundPhase::Settled.is_terminal());
        assert!(!RoundPhase::DealerTurn.is_terminal());
    }
}
