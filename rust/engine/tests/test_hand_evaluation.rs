use blackjack_engine::cards::{all_ranks, all_suits, Card, Rank, Suit};
use blackjack_engine::errors::GameError;
use blackjack_engine::hand::{evaluate, Hand};
use blackjack_engine::player::Player;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn c(rank: Rank) -> Card {
    Card::new(rank, Suit::Hearts)
}

#[test]
fn two_aces_score_twelve() {
    let v = evaluate(&[c(Rank::Ace), Card::new(Rank::Ace, Suit::Spades)]);
    assert_eq!(v.total, 12);
    assert!(!v.bust);
}

#[test]
fn ace_king_scores_twenty_one() {
    let mut h = Hand::new();
    h.push(c(Rank::Ace));
    let v = h.push(c(Rank::King));
    assert_eq!(v.total, 21);
    assert!(!v.bust);
    assert!(h.is_natural());
}

#[test]
fn three_card_twenty_one_is_not_natural() {
    let mut h = Hand::new();
    h.push(c(Rank::Seven));
    h.push(c(Rank::Seven));
    h.push(c(Rank::Seven));
    assert_eq!(h.value().total, 21);
    assert!(!h.is_natural());
}

#[test]
fn scoring_ignores_card_order() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let mut pool: Vec<Card> = Vec::new();
    for s in all_suits() {
        for r in all_ranks() {
            pool.push(Card::new(r, s));
        }
    }

    for _ in 0..500 {
        let n = rng.random_range(1..=7);
        let mut cards: Vec<Card> = pool.choose_multiple(&mut rng, n).cloned().collect();
        let expected = evaluate(&cards);
        for _ in 0..5 {
            cards.shuffle(&mut rng);
            assert_eq!(evaluate(&cards), expected, "cards {:?}", cards);
        }
    }
}

#[test]
fn bust_only_when_every_ace_is_hard() {
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    let ranks = all_ranks();
    for _ in 0..1000 {
        let n = rng.random_range(2..=8);
        let cards: Vec<Card> = (0..n)
            .map(|_| c(ranks[rng.random_range(0..ranks.len())]))
            .collect();
        let hard_total: u32 = cards
            .iter()
            .map(|c| if c.rank() == Rank::Ace { 1 } else { c.points() })
            .sum();
        let v = evaluate(&cards);
        assert_eq!(v.bust, hard_total > 21, "cards {:?}", cards);
        assert!(v.bust || v.total <= 21);
    }
}

#[test]
fn aces_are_demoted_one_at_a_time() {
    let mut p = Player::new(100);
    assert_eq!(p.add_card(c(Rank::Ace)).unwrap().total, 11);
    assert_eq!(p.add_card(c(Rank::King)).unwrap().total, 21);
    // 11 + 10 + 9 = 30 -> first ace hard
    assert_eq!(p.add_card(c(Rank::Nine)).unwrap().total, 20);
    // second ace arrives soft but must go hard at once
    assert_eq!(p.add_card(c(Rank::Ace)).unwrap().total, 21);
    assert!(!p.is_bust());

    let err = p.add_card(c(Rank::King)).unwrap_err();
    assert_eq!(err, GameError::HandOverflow { score: 31 });
    assert!(p.is_bust());
    assert_eq!(p.hand().len(), 5, "busting card stays in the hand");
}

#[test]
fn face_down_cards_still_count() {
    let mut h = Hand::new();
    h.push(c(Rank::Nine));
    h.push(c(Rank::Eight));
    h.set_face_up(0, false);
    assert_eq!(h.value().total, 17);
}
