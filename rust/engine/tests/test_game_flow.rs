use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::deck::Deck;
use blackjack_engine::engine::Engine;
use blackjack_engine::errors::GameError;
use blackjack_engine::game::{Outcome, RoundPhase};
use blackjack_engine::player::{Decision, Participant, ScriptedChoices, TurnChoice};
use blackjack_engine::record::{RoundEvent, Seat};

const H: Suit = Suit::Hearts;
const S: Suit = Suit::Spades;

/// Engine whose shoe yields `order` first. Deal order is player, dealer, player, dealer.
fn stacked(order: &[(Rank, Suit)], choices: &[u32]) -> Engine<ScriptedChoices> {
    let cards = order.iter().map(|&(r, s)| Card::new(r, s)).collect();
    Engine::new(
        Deck::with_draw_order(cards, 4, 0),
        10_000,
        ScriptedChoices::new(choices.iter().copied()),
    )
}

#[test]
fn natural_beats_dealer_eighteen() {
    let mut eng = stacked(
        &[(Rank::Ace, S), (Rank::Ten, H), (Rank::King, H), (Rank::Eight, S)],
        &[],
    );
    eng.place_bet(500).unwrap();
    assert_eq!(eng.player().seat().balance(), 9_500);

    eng.deal().unwrap();
    assert!(eng.player().seat().hand().is_natural());
    assert_eq!(eng.player_turn().unwrap(), RoundPhase::PlayerTurn);
    eng.dealer_turn().unwrap();
    let rec = eng.settle().unwrap();

    assert_eq!(rec.outcome, Outcome::PlayerWin);
    assert_eq!(rec.player_score, 21);
    assert_eq!(rec.dealer_score, 18);
    assert_eq!(rec.payout, 1_000);
    assert_eq!(eng.player().seat().balance(), 10_500);
    assert_eq!(rec.balance, 10_500);
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut eng = stacked(
        &[
            (Rank::Ten, S),
            (Rank::Nine, H),
            (Rank::Six, H),
            (Rank::Five, S),
            (Rank::King, H),
        ],
        &[2],
    );
    let rec = eng.play_round(500).unwrap();

    assert_eq!(rec.outcome, Outcome::PlayerBust);
    assert!(rec.player_bust);
    assert_eq!(rec.player_score, 26);
    assert_eq!(rec.dealer_cards.len(), 2, "dealer must not draw");
    assert_eq!(rec.dealer_score, 14);
    assert_eq!(eng.player().seat().balance(), 9_500);
    assert!(!rec.events.iter().any(|e| matches!(
        e,
        RoundEvent::Decision {
            seat: Seat::Dealer,
            ..
        }
    )));
    assert!(rec.events.contains(&RoundEvent::Bust {
        seat: Seat::Player,
        score: 26
    }));
}

#[test]
fn dealer_bust_pays_standing_player() {
    let mut eng = stacked(
        &[
            (Rank::Ten, S),
            (Rank::Ten, H),
            (Rank::Eight, H),
            (Rank::Six, S),
            (Rank::King, S),
        ],
        &[1],
    );
    let rec = eng.play_round(500).unwrap();
    assert_eq!(rec.outcome, Outcome::DealerBust);
    assert!(rec.dealer_bust);
    assert_eq!(rec.dealer_score, 26);
    assert_eq!(rec.dealer_cards.len(), 3);
    assert_eq!(eng.player().seat().balance(), 10_500);
}

#[test]
fn equal_totals_push() {
    let mut eng = stacked(
        &[(Rank::Ten, S), (Rank::Ten, H), (Rank::Nine, H), (Rank::Nine, S)],
        &[],
    );
    let rec = eng.play_round(500).unwrap();
    assert_eq!(rec.outcome, Outcome::Push);
    assert_eq!(rec.payout, 500);
    assert_eq!(eng.player().seat().balance(), 10_000);
}

#[test]
fn dealer_higher_total_wins() {
    let mut eng = stacked(
        &[(Rank::Ten, S), (Rank::Ten, H), (Rank::Seven, H), (Rank::Eight, S)],
        &[],
    );
    let rec = eng.play_round(500).unwrap();
    assert_eq!(rec.outcome, Outcome::DealerWin);
    assert_eq!(rec.payout, 0);
    assert_eq!(eng.player().seat().balance(), 9_500);
}

#[test]
fn insufficient_funds_aborts_before_any_card_moves() {
    let mut eng = Engine::with_seed(5, 4, 1_000, ScriptedChoices::default());
    let before = eng.deck().remaining_cards();

    let err = eng.play_round(1_500).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientFunds {
            bet: 1_500,
            balance: 1_000
        }
    );
    assert_eq!(eng.phase(), RoundPhase::AwaitingBet);
    assert_eq!(eng.deck().remaining_cards(), before);
    assert!(eng.player().seat().hand().is_empty());
    assert!(eng.dealer().seat().hand().is_empty());
    assert_eq!(eng.player().seat().balance(), 1_000);
    assert_eq!(eng.round_number(), 0);

    // the engine is still usable for a covered bet
    let rec = eng.play_round(1_000).unwrap();
    assert_eq!(rec.round, 1);
}

#[test]
fn initial_deal_alternates_and_hides_hole_card() {
    let mut eng = stacked(
        &[
            (Rank::Two, S),
            (Rank::Three, S),
            (Rank::Four, S),
            (Rank::Five, S),
        ],
        &[],
    );
    eng.place_bet(10).unwrap();
    eng.deal().unwrap();

    let player: Vec<Rank> = eng
        .player()
        .seat()
        .hand()
        .cards()
        .iter()
        .map(|c| c.rank())
        .collect();
    let dealer: Vec<Rank> = eng
        .dealer()
        .seat()
        .hand()
        .cards()
        .iter()
        .map(|c| c.rank())
        .collect();
    assert_eq!(player, vec![Rank::Two, Rank::Four]);
    assert_eq!(dealer, vec![Rank::Three, Rank::Five]);
    assert!(eng.dealer().hole_card_hidden());
    assert_eq!(eng.dealer().seat().hand().to_string(), "?? 5♠");

    eng.player_turn().unwrap();
    assert!(eng.dealer().hole_card_hidden(), "still hidden after player turn");
    eng.dealer_turn().unwrap();
    assert!(!eng.dealer().hole_card_hidden());
}

#[test]
fn player_sees_masked_dealer_hand_when_deciding() {
    let mut eng = stacked(
        &[
            (Rank::Eight, S),
            (Rank::Queen, H),
            (Rank::Eight, H),
            (Rank::Six, S),
        ],
        &[3],
    );
    let rec = eng.play_round(100).unwrap();

    let offered = eng.player().input().offered_log();
    assert_eq!(offered.len(), 1);
    assert!(offered[0].contains(&TurnChoice::Split));
    assert_eq!(eng.player().input().notices().len(), 1);
    assert!(rec.events.contains(&RoundEvent::Decision {
        seat: Seat::Player,
        decision: Decision::Unsupported(TurnChoice::Split),
        score: 16,
    }));
    // split falls through to stand, dealer then plays 16 -> draws
    assert!(rec.dealer_cards.len() >= 3);
}

#[test]
fn steps_out_of_order_are_rejected() {
    let mut eng = Engine::with_seed(1, 1, 100, ScriptedChoices::default());
    assert!(matches!(
        eng.deal(),
        Err(GameError::PhaseMismatch {
            expected: RoundPhase::BetPlaced,
            actual: RoundPhase::AwaitingBet
        })
    ));
    eng.place_bet(10).unwrap();
    assert!(eng.settle().is_err());
    assert!(eng.dealer_turn().is_err());
    eng.deal().unwrap();
    eng.player_turn().unwrap();
    assert!(eng.settle().is_err(), "dealer has not played yet");
}

#[test]
fn consecutive_rounds_start_clean() {
    let mut eng = Engine::with_seed(2024, 4, 10_000, ScriptedChoices::default());
    let mut balance = 10_000u32;
    for round in 1..=5u32 {
        let rec = eng.play_round(100).unwrap();
        assert_eq!(rec.round, round);
        assert_eq!(
            rec.player_cards.len(),
            2,
            "always-stand player keeps two cards"
        );
        balance = balance - 100 + rec.payout;
        assert_eq!(eng.player().seat().balance(), balance);
        assert!(matches!(rec.events.first(), Some(RoundEvent::BetPlaced { .. })));
    }

    eng.start_new_round();
    assert_eq!(eng.phase(), RoundPhase::AwaitingBet);
    assert_eq!(eng.player().seat().current_bet(), 0);
    assert!(eng.player().seat().hand().is_empty());
    assert!(!eng.player().seat().is_bust());
    assert!(eng.events().is_empty());
}

#[test]
fn dealer_balance_is_untouched_by_settlement() {
    let mut eng = stacked(
        &[(Rank::Ace, S), (Rank::Ten, H), (Rank::King, H), (Rank::Eight, S)],
        &[],
    );
    eng.play_round(500).unwrap();
    assert_eq!(eng.dealer().seat().balance(), 10_000);
}
