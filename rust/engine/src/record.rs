use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Outcome;
use crate::player::Decision;

/// Which side of the table an event refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Player,
    Dealer,
}

/// One step of a round, in the order it happened.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RoundEvent {
    BetPlaced {
        amount: u32,
        balance: u32,
    },
    CardDealt {
        seat: Seat,
        card: Card,
        score: u32,
    },
    Decision {
        seat: Seat,
        decision: Decision,
        score: u32,
    },
    Bust {
        seat: Seat,
        score: u32,
    },
    HoleCardRevealed {
        card: Card,
    },
    Settled {
        outcome: Outcome,
        payout: u32,
        balance: u32,
    },
}

/// Complete record of a settled round.
/// Serialized as one JSON object per line when the CLI is asked for JSON output.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number within the session
    pub round: u32,
    /// Stake deducted before the deal
    pub bet: u32,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_score: u32,
    pub dealer_score: u32,
    pub player_bust: bool,
    pub dealer_bust: bool,
    pub outcome: Outcome,
    /// Amount credited back at settlement (0 on a loss)
    pub payout: u32,
    /// Player balance after settlement
    pub balance: u32,
    #[serde(default)]
    pub events: Vec<RoundEvent>,
}

impl RoundRecord {
    /// Balance change over the whole round, stake included.
    pub fn net(&self) -> i64 {
        i64::from(self.payout) - i64::from(self.bet)
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn sample() -> RoundRecord {
        RoundRecord {
            round: 1,
            bet: 500,
            player_cards: vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::King, Suit::Hearts),
            ],
            dealer_cards: vec![
                Card::new(Rank::Ten, Suit::Clubs),
                Card::new(Rank::Eight, Suit::Diamonds),
            ],
            player_score: 21,
            dealer_score: 18,
            player_bust: false,
            dealer_bust: false,
            outcome: Outcome::PlayerWin,
            payout: 1000,
            balance: 10_500,
            events: vec![RoundEvent::BetPlaced {
                amount: 500,
                balance: 9_500,
            }],
        }
    }

    #[test]
    fn net_counts_the_stake() {
        let rec = sample();
        assert_eq!(rec.net(), 500);
        let lost = RoundRecord {
            payout: 0,
            outcome: Outcome::DealerWin,
            ..sample()
        };
        assert_eq!(lost.net(), -500);
    }

    #[test]
    fn json_line_tags_events() {
        let line = sample().to_json_line().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("\"event\":\"bet_placed\""));
        assert!(line.contains("\"outcome\":\"PlayerWin\""));
        let back: RoundRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(back, sample());
    }
}
