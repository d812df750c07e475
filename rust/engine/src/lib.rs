//! # blackjack-engine: Blackjack Round Engine
//!
//! A single-seat blackjack engine: one human player against the house dealer.
//! Provides the shoe, hand scoring with soft/hard aces, the two seat variants
//! and a round controller that runs bet, deal, player turn, dealer turn and
//! settlement with a seedable RNG for reproducible play.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and 52-card set construction
//! - [`deck`] - Multi-deck shoe with automatic rebuild and ChaCha20 shuffling
//! - [`hand`] - Hand container and ace-correcting scorer
//! - [`player`] - Seat state, the [`player::Participant`] trait, Dealer and HumanPlayer
//! - [`rules`] - Bet validation, dealer drawing rule, outcome resolution
//! - [`game`] - Round phases and outcomes
//! - [`engine`] - Round orchestration
//! - [`record`] - Round events and serializable round records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::hand::evaluate;
//!
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ];
//! let value = evaluate(&cards);
//! assert_eq!(value.total, 12);
//! assert!(value.soft);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use blackjack_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42, 4);
//! let mut d2 = Deck::new_with_seed(42, 4);
//! assert_eq!(d1.draw_card(), d2.draw_card());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod record;
pub mod rules;
