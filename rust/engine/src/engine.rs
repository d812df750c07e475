use tracing::{debug, info};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::RoundPhase;
use crate::player::{ChoiceSource, Dealer, Decision, HumanPlayer, Participant};
use crate::record::{RoundEvent, RoundRecord, Seat};
use crate::rules::resolve_outcome;

/// Round controller for one dealer and one interactive player.
///
/// Owns the deck and both seats for the whole session. Each round runs
/// bet, deal, player turn, dealer turn and settlement; [`Engine::play_round`]
/// drives all of them, the individual steps are public for callers that
/// render between them.
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::Engine;
/// use blackjack_engine::player::{Participant, ScriptedChoices};
///
/// // Seeded shoe of 4 decks, 10_000 starting balance, player always stands
/// let mut engine = Engine::with_seed(42, 4, 10_000, ScriptedChoices::default());
///
/// let record = engine.play_round(500).expect("bet is covered");
/// assert_eq!(record.bet, 500);
/// assert_eq!(engine.player().seat().balance(), 9_500 + record.payout);
/// ```
#[derive(Debug)]
pub struct Engine<S> {
    deck: Deck,
    dealer: Dealer,
    player: HumanPlayer<S>,
    phase: RoundPhase,
    round: u32,
    events: Vec<RoundEvent>,
}

impl<S: ChoiceSource> Engine<S> {
    pub fn new(deck: Deck, starting_balance: u32, input: S) -> Self {
        Self {
            deck,
            dealer: Dealer::default(),
            player: HumanPlayer::new(starting_balance, input),
            phase: RoundPhase::AwaitingBet,
            round: 0,
            events: Vec::new(),
        }
    }

    pub fn with_seed(seed: u64, multiplier: usize, starting_balance: u32, input: S) -> Self {
        Self::new(
            Deck::new_with_seed(seed, multiplier),
            starting_balance,
            input,
        )
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Number of rounds that got past betting.
    pub fn round_number(&self) -> u32 {
        self.round
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn player(&self) -> &HumanPlayer<S> {
        &self.player
    }

    pub fn input_mut(&mut self) -> &mut S {
        self.player.input_mut()
    }

    /// Events of the round in progress.
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Clears both hands, bust flags and the current bet. Balances are kept.
    pub fn start_new_round(&mut self) {
        self.player.seat_mut().reset_round();
        self.dealer.seat_mut().reset_round();
        self.events.clear();
        self.phase = RoundPhase::AwaitingBet;
    }

    /// Deducts the stake. Fails before any funds or cards move.
    pub fn place_bet(&mut self, amount: u32) -> Result<(), GameError> {
        self.expect_phase(RoundPhase::AwaitingBet)?;
        self.player.seat_mut().place_bet(amount)?;
        self.round += 1;
        let balance = self.player.seat().balance();
        debug!(round = self.round, amount, balance, "bet placed");
        self.events.push(RoundEvent::BetPlaced { amount, balance });
        self.phase = RoundPhase::BetPlaced;
        Ok(())
    }

    /// Deals two cards each, alternating player then dealer, and turns the
    /// dealer's first card face down.
    pub fn deal(&mut self) -> Result<(), GameError> {
        self.expect_phase(RoundPhase::BetPlaced)?;
        for _ in 0..2 {
            self.draw_to(Seat::Player)?;
            self.draw_to(Seat::Dealer)?;
        }
        self.dealer.hide_hole_card();
        self.phase = RoundPhase::Dealt;
        Ok(())
    }

    /// Asks the player for decisions until they stand or bust.
    ///
    /// Returns [`RoundPhase::PlayerBust`] when the hand went over 21, in which
    /// case the dealer turn must be skipped, or [`RoundPhase::PlayerTurn`] when
    /// the player stood.
    pub fn player_turn(&mut self) -> Result<RoundPhase, GameError> {
        self.expect_phase(RoundPhase::Dealt)?;
        self.phase = RoundPhase::PlayerTurn;

        loop {
            let decision = self.player.decide(self.dealer.seat().hand());
            self.events.push(RoundEvent::Decision {
                seat: Seat::Player,
                decision,
                score: self.player.seat().score(),
            });
            match decision {
                Decision::Hit => match self.draw_to(Seat::Player) {
                    Ok(()) => {}
                    Err(GameError::HandOverflow { score }) => {
                        debug!(score, "player bust");
                        self.events.push(RoundEvent::Bust {
                            seat: Seat::Player,
                            score,
                        });
                        self.phase = RoundPhase::PlayerBust;
                        break;
                    }
                    Err(e) => return Err(e),
                },
                Decision::Stand | Decision::Unsupported(_) => break,
            }
        }
        Ok(self.phase)
    }

    /// Reveals the hole card and draws for the dealer while below 17.
    /// A dealer bust ends the turn and is settled as a dealer loss.
    pub fn dealer_turn(&mut self) -> Result<(), GameError> {
        self.expect_phase(RoundPhase::PlayerTurn)?;
        self.phase = RoundPhase::DealerTurn;
        self.reveal_hole_card();

        while self.dealer.should_take_card(self.player.seat().hand()) {
            self.events.push(RoundEvent::Decision {
                seat: Seat::Dealer,
                decision: Decision::Hit,
                score: self.dealer.seat().score(),
            });
            match self.draw_to(Seat::Dealer) {
                Ok(()) => {}
                Err(GameError::HandOverflow { score }) => {
                    debug!(score, "dealer bust");
                    self.events.push(RoundEvent::Bust {
                        seat: Seat::Dealer,
                        score,
                    });
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Compares the final hands and credits the player. No cards are drawn
    /// from here on.
    pub fn settle(&mut self) -> Result<RoundRecord, GameError> {
        if !matches!(
            self.phase,
            RoundPhase::DealerTurn | RoundPhase::PlayerBust
        ) {
            return Err(GameError::PhaseMismatch {
                expected: RoundPhase::DealerTurn,
                actual: self.phase,
            });
        }
        self.reveal_hole_card();

        let player = self.player.seat().value();
        let dealer = self.dealer.seat().value();
        let outcome = resolve_outcome(player, dealer);
        let bet = self.player.seat().current_bet();
        let payout = self.player.seat_mut().settle(outcome);
        let balance = self.player.seat().balance();
        self.phase = RoundPhase::Settled;

        info!(
            round = self.round,
            ?outcome,
            player = player.total,
            dealer = dealer.total,
            bet,
            payout,
            balance,
            "round settled"
        );
        self.events.push(RoundEvent::Settled {
            outcome,
            payout,
            balance,
        });

        Ok(RoundRecord {
            round: self.round,
            bet,
            player_cards: self.player.seat().hand().cards().to_vec(),
            dealer_cards: self.dealer.seat().hand().cards().to_vec(),
            player_score: player.total,
            dealer_score: dealer.total,
            player_bust: player.bust,
            dealer_bust: dealer.bust,
            outcome,
            payout,
            balance,
            events: self.events.clone(),
        })
    }

    /// Runs one full round for `bet`.
    ///
    /// A previously settled round is cleared first. On
    /// [`GameError::InsufficientFunds`] the round is aborted before any card
    /// is dealt and the engine stays ready for another bet.
    pub fn play_round(&mut self, bet: u32) -> Result<RoundRecord, GameError> {
        if self.phase == RoundPhase::Settled {
            self.start_new_round();
        }
        self.place_bet(bet)?;
        self.deal()?;
        if !self.player_turn()?.is_terminal() {
            self.dealer_turn()?;
        }
        self.settle()
    }

    fn expect_phase(&self, expected: RoundPhase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::PhaseMismatch {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn reveal_hole_card(&mut self) {
        if self.dealer.hole_card_hidden() {
            self.dealer.reveal_hole_card();
            if let Some(&card) = self.dealer.seat().hand().cards().first() {
                self.events.push(RoundEvent::HoleCardRevealed { card });
            }
        }
    }

    /// Draws one card into `seat`. The card is recorded even when it busts
    /// the hand, in which case the overflow error is passed on.
    fn draw_to(&mut self, seat: Seat) -> Result<(), GameError> {
        let card = self.deck.draw_card();
        let target = match seat {
            Seat::Player => self.player.seat_mut(),
            Seat::Dealer => self.dealer.seat_mut(),
        };
        let result = target.add_card(card);
        let score = target.score();
        debug!(?seat, %card, score, remaining = self.deck.remaining_cards(), "card dealt");
        self.events.push(RoundEvent::CardDealt { seat, card, score });
        result.map(|_| ())
    }
}
