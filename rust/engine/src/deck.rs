use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{full_deck, Card};

/// Number of 52-card sets combined into one shoe unless configured otherwise.
pub const DEFAULT_MULTIPLIER: usize = 4;

/// A multi-deck shoe that refills itself.
///
/// The top of the deck is the end of the underlying vector. The RNG is owned
/// by the deck and seeded once at construction, so every reshuffle continues
/// the same stream.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    multiplier: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Builds a full shoe of `multiplier` sets and shuffles it.
    pub fn new(multiplier: usize, rng: ChaCha20Rng) -> Self {
        let mut deck = Self {
            cards: Vec::new(),
            multiplier: multiplier.max(1),
            rng,
        };
        deck.rebuild();
        deck
    }

    pub fn new_with_seed(seed: u64, multiplier: usize) -> Self {
        Self::new(multiplier, ChaCha20Rng::seed_from_u64(seed))
    }

    /// Builds a deck that yields `draw_order` front to back before falling back
    /// to regular reshuffles. Intended for replaying known layouts.
    ///
    /// At most `52 * multiplier` cards are kept; anything past the shoe's
    /// capacity is dropped.
    pub fn with_draw_order(draw_order: Vec<Card>, multiplier: usize, seed: u64) -> Self {
        let multiplier = multiplier.max(1);
        let mut cards = draw_order;
        cards.truncate(52 * multiplier);
        cards.reverse();
        Self {
            cards,
            multiplier,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card, rebuilding the shoe first if it is empty.
    pub fn draw_card(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            debug!(multiplier = self.multiplier, "deck exhausted, rebuilding");
            self.rebuild();
        }
    }

    pub fn remaining_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn multiplier(&self) -> usize {
        self.multiplier
    }

    pub fn capacity(&self) -> usize {
        52 * self.multiplier
    }

    fn rebuild(&mut self) {
        self.cards.clear();
        self.cards.reserve(self.capacity());
        for _ in 0..self.multiplier {
            self.cards.extend(full_deck());
        }
        self.shuffle();
    }
}
