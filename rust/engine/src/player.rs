use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, warn};

use crate::cards::Card;
use crate::errors::GameError;
use crate::game::Outcome;
use crate::hand::{Hand, HandValue};
use crate::rules::{dealer_should_draw, validate_bet};

/// Default balance for both seats at the table
pub const DEFAULT_BALANCE: u32 = 10_000;

/// Menu entries offered to an interactive player. Discriminants are the
/// numbers shown in the menu.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnChoice {
    /// Keep the current hand
    Stand = 1,
    /// Take one more card
    Hit = 2,
    /// Split a pair (offered, never executed)
    Split = 3,
}

impl TurnChoice {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<TurnChoice> {
        match code {
            1 => Some(TurnChoice::Stand),
            2 => Some(TurnChoice::Hit),
            3 => Some(TurnChoice::Split),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TurnChoice::Stand => "Stand",
            TurnChoice::Hit => "Hit",
            TurnChoice::Split => "Split",
        }
    }
}

/// What a participant wants to do next.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    Hit,
    Stand,
    /// A recognised action the engine does not implement. Treated as a stand.
    Unsupported(TurnChoice),
}

/// Everything an input source needs to render one decision point.
#[derive(Debug)]
pub struct TurnPrompt<'a> {
    pub dealer: &'a Hand,
    pub player: &'a Hand,
    pub offered: &'a [TurnChoice],
}

/// External input channel for the interactive player.
///
/// Implementations present `prompt.offered` first and then block until one
/// numeric choice is available. `None` means no choice could be read (EOF or
/// closed input) and is treated as a stand.
pub trait ChoiceSource {
    fn choose(&mut self, prompt: &TurnPrompt<'_>) -> Option<u32>;

    /// Informational message for the user, e.g. an unavailable action.
    fn notice(&mut self, _message: &str) {}
}

/// Seat state shared by the dealer and the human player.
#[derive(Debug, Clone)]
pub struct Player {
    hand: Hand,
    bust: bool,
    balance: u32,
    current_bet: u32,
}

impl Player {
    pub fn new(balance: u32) -> Self {
        Self {
            hand: Hand::new(),
            bust: false,
            balance,
            current_bet: 0,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn score(&self) -> u32 {
        self.hand.value().total
    }

    pub fn value(&self) -> HandValue {
        self.hand.value()
    }

    pub fn is_bust(&self) -> bool {
        self.bust
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    /// Deducts `amount` from the balance and records it as the current bet.
    /// On error nothing changes.
    pub fn place_bet(&mut self, amount: u32) -> Result<(), GameError> {
        let amount = validate_bet(self.balance, amount)?;
        self.balance -= amount;
        self.current_bet = amount;
        Ok(())
    }

    /// Appends a card and rescores the whole hand.
    ///
    /// The card is kept even when it busts the hand: the bust flag is set and
    /// [`GameError::HandOverflow`] is returned so the turn loop can end the turn.
    pub fn add_card(&mut self, card: Card) -> Result<HandValue, GameError> {
        let value = self.hand.push(card);
        self.bust = value.bust;
        if value.bust {
            return Err(GameError::HandOverflow { score: value.total });
        }
        Ok(value)
    }

    pub fn set_card_face_up(&mut self, index: usize, up: bool) -> bool {
        self.hand.set_face_up(index, up)
    }

    /// Stake returned plus equal winnings.
    pub fn win(&mut self) {
        self.balance = self.balance.saturating_add(self.current_bet.saturating_mul(2));
    }

    /// Stake returned.
    pub fn push(&mut self) {
        self.balance = self.balance.saturating_add(self.current_bet);
    }

    /// Applies the payout for `outcome` and returns the credited amount.
    pub fn settle(&mut self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::PlayerWin | Outcome::DealerBust => self.win(),
            Outcome::Push => self.push(),
            Outcome::DealerWin | Outcome::PlayerBust => {}
        }
        outcome.payout(self.current_bet)
    }

    /// Clears hand, bust flag and current bet. Balance is kept.
    pub fn reset_round(&mut self) {
        self.hand.clear();
        self.bust = false;
        self.current_bet = 0;
    }
}

/// A seat at the table that can decide whether to take another card.
pub trait Participant {
    fn seat(&self) -> &Player;
    fn seat_mut(&mut self) -> &mut Player;

    /// `opponent` is the other hand as currently visible on the table.
    fn decide(&mut self, opponent: &Hand) -> Decision;

    fn should_take_card(&mut self, opponent: &Hand) -> bool {
        self.decide(opponent) == Decision::Hit
    }
}

/// The house. Draws below 17 and never looks at the player's cards.
#[derive(Debug, Clone)]
pub struct Dealer {
    seat: Player,
}

impl Dealer {
    pub fn new(balance: u32) -> Self {
        Self {
            seat: Player::new(balance),
        }
    }

    /// Turns the first card face down for display.
    pub fn hide_hole_card(&mut self) {
        self.seat.set_card_face_up(0, false);
    }

    pub fn reveal_hole_card(&mut self) {
        self.seat.set_card_face_up(0, true);
    }

    pub fn hole_card_hidden(&self) -> bool {
        self.seat
            .hand()
            .cards()
            .first()
            .is_some_and(|c| !c.is_face_up())
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new(DEFAULT_BALANCE)
    }
}

impl Participant for Dealer {
    fn seat(&self) -> &Player {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Player {
        &mut self.seat
    }

    fn decide(&mut self, _opponent: &Hand) -> Decision {
        if dealer_should_draw(self.seat.score()) {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }
}

/// Interactive player whose choices come from an injected [`ChoiceSource`].
#[derive(Debug)]
pub struct HumanPlayer<S> {
    seat: Player,
    input: S,
}

impl<S: ChoiceSource> HumanPlayer<S> {
    pub fn new(balance: u32, input: S) -> Self {
        Self {
            seat: Player::new(balance),
            input,
        }
    }

    pub fn input(&self) -> &S {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut S {
        &mut self.input
    }

    /// Options for the current hand: stand and hit always, split only for a pair.
    pub fn offered_choices(&self) -> Vec<TurnChoice> {
        let mut offered = vec![TurnChoice::Stand, TurnChoice::Hit];
        if self.seat.hand().can_split() {
            offered.push(TurnChoice::Split);
        }
        offered
    }
}

impl<S: ChoiceSource> Participant for HumanPlayer<S> {
    fn seat(&self) -> &Player {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Player {
        &mut self.seat
    }

    fn decide(&mut self, opponent: &Hand) -> Decision {
        let offered = self.offered_choices();
        let prompt = TurnPrompt {
            dealer: opponent,
            player: self.seat.hand(),
            offered: &offered,
        };
        let raw = self.input.choose(&prompt);
        debug!(?raw, score = self.seat.score(), "player choice");

        match raw.and_then(TurnChoice::from_code) {
            Some(TurnChoice::Hit) => Decision::Hit,
            Some(TurnChoice::Split) if offered.contains(&TurnChoice::Split) => {
                warn!("split requested but not supported");
                self.input.notice("Split is not available yet.");
                Decision::Unsupported(TurnChoice::Split)
            }
            _ => Decision::Stand,
        }
    }
}

/// Replays a fixed list of menu choices. Runs out into stands.
#[derive(Debug, Default, Clone)]
pub struct ScriptedChoices {
    choices: VecDeque<u32>,
    offered_log: Vec<Vec<TurnChoice>>,
    notices: Vec<String>,
}

impl ScriptedChoices {
    pub fn new<I: IntoIterator<Item = u32>>(choices: I) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Option lists presented so far, one per decision.
    pub fn offered_log(&self) -> &[Vec<TurnChoice>] {
        &self.offered_log
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

impl ChoiceSource for ScriptedChoices {
    fn choose(&mut self, prompt: &TurnPrompt<'_>) -> Option<u32> {
        self.offered_log.push(prompt.offered.to_vec());
        self.choices.pop_front()
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Plays the player's hand with the dealer's own draw-below-17 rule.
#[derive(Debug, Default, Clone, Copy)]
pub struct HouseRuleChoices;

impl ChoiceSource for HouseRuleChoices {
    fn choose(&mut self, prompt: &TurnPrompt<'_>) -> Option<u32> {
        let choice = if dealer_should_draw(prompt.player.value().total) {
            TurnChoice::Hit
        } else {
            TurnChoice::Stand
        };
        Some(choice.code())
    }
}
