use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, Rank};
use crate::rules::BLACKJACK;

/// Point total of a hand after ace correction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct HandValue {
    pub total: u32,
    /// At least one ace is still counted as 11.
    pub soft: bool,
    /// Total exceeds 21 with every ace already counted as 1.
    pub bust: bool,
}

/// Scores a set of cards under blackjack ace rules.
///
/// Every card contributes its nominal value (aces 11). While the total is over
/// 21 and an ace still counts as 11, that ace is demoted to 1. The result does
/// not depend on card order or on the face-up flag.
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut total: u32 = cards.iter().map(Card::points).sum();
    let mut soft_aces = cards.iter().filter(|c| c.rank() == Rank::Ace).count();

    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    HandValue {
        total,
        soft: soft_aces > 0,
        bust: total > BLACKJACK,
    }
}

/// Cards held by one participant during a round.
///
/// The value is recomputed from the full card list on every append rather
/// than adjusted incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    value: HandValue,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) -> HandValue {
        self.cards.push(card);
        self.value = evaluate(&self.cards);
        self.value
    }

    pub fn value(&self) -> HandValue {
        self.value
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Exactly two cards of the same rank.
    pub fn can_split(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank() == b.rank())
    }

    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.value.total == BLACKJACK
    }

    /// Flips the card at `index`. Returns false when there is no such card.
    pub fn set_face_up(&mut self, index: usize, up: bool) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.set_face_up(up);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.value = HandValue::default();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
