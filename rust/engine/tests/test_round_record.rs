use blackjack_engine::engine::Engine;
use blackjack_engine::player::{HouseRuleChoices, ScriptedChoices};
use blackjack_engine::record::{RoundEvent, RoundRecord, Seat};

#[test]
fn record_serializes_to_single_json_line() {
    let mut eng = Engine::with_seed(11, 4, 10_000, ScriptedChoices::default());
    let rec = eng.play_round(250).unwrap();
    let line = rec.to_json_line().unwrap();
    assert!(!line.contains('\n'));

    let back: RoundRecord = serde_json::from_str(&line).unwrap();
    assert_eq!(back, rec);
}

#[test]
fn events_follow_round_order() {
    let mut eng = Engine::with_seed(11, 4, 10_000, HouseRuleChoices);
    let rec = eng.play_round(250).unwrap();

    let dealt: Vec<Seat> = rec
        .events
        .iter()
        .filter_map(|e| match e {
            RoundEvent::CardDealt { seat, .. } => Some(*seat),
            _ => None,
        })
        .take(4)
        .collect();
    assert_eq!(
        dealt,
        vec![Seat::Player, Seat::Dealer, Seat::Player, Seat::Dealer]
    );
    assert!(matches!(rec.events.first(), Some(RoundEvent::BetPlaced { amount: 250, .. })));
    assert!(matches!(rec.events.last(), Some(RoundEvent::Settled { .. })));
    assert!(rec
        .events
        .iter()
        .any(|e| matches!(e, RoundEvent::HoleCardRevealed { .. })));
}

#[test]
fn record_net_matches_balance_change() {
    let mut eng = Engine::with_seed(404, 2, 5_000, HouseRuleChoices);
    let mut balance = 5_000i64;
    for _ in 0..20 {
        let rec = eng.play_round(100).unwrap();
        balance += rec.net();
        assert_eq!(i64::from(rec.balance), balance);
    }
}

#[test]
fn final_cards_are_all_face_up() {
    let mut eng = Engine::with_seed(8, 4, 10_000, ScriptedChoices::default());
    let rec = eng.play_round(10).unwrap();
    assert!(rec.dealer_cards.iter().all(|c| c.is_face_up()));
    assert!(rec.player_cards.iter().all(|c| c.is_face_up()));
}
