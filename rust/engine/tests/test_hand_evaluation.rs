use showdown_engine::cards::{parse_cards, Card, CardSet, Rank as R, Suit as S};
use showdown_engine::errors::GameError;
use showdown_engine::hand::{classify, classify_cards, HandCategory};
use showdown_engine::strength::build_key;

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid cards")
}

fn category(s: &str) -> HandCategory {
    classify_cards(&cards(s)).unwrap().category
}

fn tiebreak(s: &str) -> Vec<R> {
    build_key(&classify_cards(&cards(s)).unwrap()).tiebreak
}

#[test]
fn detects_royal_flush() {
    let cards = [
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
    ];
    let hand = classify_cards(&cards).unwrap();
    assert_eq!(hand.category, HandCategory::RoyalFlush);
    assert_eq!(build_key(&hand).tiebreak, vec![R::Ace]);
}

#[test]
fn king_high_straight_flush_is_not_royal() {
    assert_eq!(category("9s Ts Js Qs Ks Ah 2d"), HandCategory::StraightFlush);
    assert_eq!(tiebreak("9s Ts Js Qs Ks Ah 2d"), vec![R::King]);
}

#[test]
fn suited_run_beats_everything_else_present() {
    // trips or a full house alongside the run
    assert_eq!(category("5h 6h 7h 8h 9h 9s 9d"), HandCategory::StraightFlush);
    assert_eq!(category("5h 6h 7h 8h 9h 5s 5d"), HandCategory::StraightFlush);
}

#[test]
fn straight_flush_ignores_off_suit_ranks_in_the_run() {
    // 5-9 straight exists only across suits, the hearts alone make a flush
    assert_eq!(category("5h 6h 7h 8s 9h 2h Kd"), HandCategory::Flush);
}

#[test]
fn wheel_straight_flush_has_five_on_top() {
    let hand = classify_cards(&cards("Ad 2d 3d 4d 5d Kc Qh")).unwrap();
    assert_eq!(hand.category, HandCategory::StraightFlush);
    assert_eq!(build_key(&hand).tiebreak, vec![R::Five]);
}

#[test]
fn quads_take_priority_over_full_house() {
    assert_eq!(category("7c 7d 7h 7s Kc Kd 2h"), HandCategory::FourOfAKind);
    assert_eq!(tiebreak("7c 7d 7h 7s Kc Kd 2h"), vec![R::Seven, R::King]);
}

#[test]
fn quads_without_enough_cards_for_a_kicker() {
    assert_eq!(category("7c 7d 7h 7s"), HandCategory::FourOfAKind);
    assert_eq!(tiebreak("7c 7d 7h 7s"), vec![R::Seven]);
}

#[test]
fn quads_kicker_may_come_from_a_pair() {
    assert_eq!(tiebreak("7c 7d 7h 7s Qc Qd 2h"), vec![R::Seven, R::Queen]);
}

#[test]
fn scenario_full_house_fours_over_aces() {
    let hole = cards("4c 4d");
    let board = cards("4s Ac Ah 9d 2s");
    let hand = classify(&CardSet::from_hole_and_board(&hole, &board).unwrap());
    assert_eq!(hand.category, HandCategory::FullHouse);
    assert_eq!(build_key(&hand).tiebreak, vec![R::Four, R::Ace]);
}

#[test]
fn two_trips_make_a_full_house() {
    assert_eq!(category("8c 8d 8h 3s 3c 3d Kh"), HandCategory::FullHouse);
    assert_eq!(tiebreak("8c 8d 8h 3s 3c 3d Kh"), vec![R::Eight, R::Three]);
}

#[test]
fn full_house_uses_highest_pair_available() {
    assert_eq!(tiebreak("5c 5d 5h Qs Qc 9d 9h"), vec![R::Five, R::Queen]);
}

#[test]
fn flush_takes_five_highest_of_suit() {
    let s = "2h 7h Jh Qh 9h 4h Ac";
    assert_eq!(category(s), HandCategory::Flush);
    assert_eq!(tiebreak(s), vec![R::Queen, R::Jack, R::Nine, R::Seven, R::Four]);
}

#[test]
fn flush_beats_straight() {
    assert_eq!(category("2h 7h Jh Qh 9h Tc 8d"), HandCategory::Flush);
}

#[test]
fn long_straight_keeps_top_five() {
    let s = "3c 4d 5h 6s 7c 8d 9h";
    assert_eq!(category(s), HandCategory::Straight);
    assert_eq!(tiebreak(s), vec![R::Nine]);
}

#[test]
fn straight_with_paired_rank() {
    assert_eq!(category("5c 6d 6h 7s 8c 9d Kh"), HandCategory::Straight);
}

#[test]
fn wheel_straight_is_five_high() {
    let s = "Ac 2d 3h 4s 5c 9d Kh";
    assert_eq!(category(s), HandCategory::Straight);
    assert_eq!(tiebreak(s), vec![R::Five]);
}

#[test]
fn ace_does_not_wrap_around() {
    assert_eq!(category("Qc Kd Ah 2s 3c 8d 9h"), HandCategory::HighCard);
}

#[test]
fn three_of_a_kind_with_two_kickers() {
    let s = "Qc Qh Qd 2s 3c 4h 9d";
    assert_eq!(category(s), HandCategory::ThreeOfAKind);
    assert_eq!(tiebreak(s), vec![R::Queen, R::Nine, R::Four]);
}

#[test]
fn two_pair_picks_top_two_pairs_and_best_kicker() {
    // a five from the third pair is the best remaining card
    let s = "Kc Kd 8h 8s 5c 5d 2h";
    assert_eq!(category(s), HandCategory::TwoPair);
    assert_eq!(tiebreak(s), vec![R::King, R::Eight, R::Five]);
}

#[test]
fn two_pair_kicker_from_singles_when_higher() {
    assert_eq!(tiebreak("Kc Kd 8h 8s 5c 5d Ah"), vec![R::King, R::Eight, R::Ace]);
}

#[test]
fn scenario_one_pair_of_twos() {
    let s = "2c 2h Ac Kd Qs";
    assert_eq!(category(s), HandCategory::OnePair);
    assert_eq!(tiebreak(s), vec![R::Two, R::Ace, R::King, R::Queen]);
}

#[test]
fn scenario_high_card_on_the_flop() {
    let s = "Ac Kd Qs 2c 3h";
    assert_eq!(category(s), HandCategory::HighCard);
    assert_eq!(
        tiebreak(s),
        vec![R::Ace, R::King, R::Queen, R::Three, R::Two]
    );
}

#[test]
fn high_card_keeps_only_five_ranks() {
    assert_eq!(
        tiebreak("Ac Kd 9s 7c 5h 3d 2s"),
        vec![R::Ace, R::King, R::Nine, R::Seven, R::Five]
    );
}

#[test]
fn preflop_sets_degrade_gracefully() {
    assert_eq!(category("Ac Ad"), HandCategory::OnePair);
    assert_eq!(tiebreak("Ac Ad"), vec![R::Ace]);
    assert_eq!(tiebreak("Ac 7d"), vec![R::Ace, R::Seven]);
}

#[test]
fn four_suited_cards_are_not_a_flush() {
    assert_eq!(category("2h 5h 9h Kh As 3c"), HandCategory::HighCard);
}

#[test]
fn classification_is_idempotent_and_order_free() {
    let a = cards("9s Ts Js 4d 4c Kh 2h");
    let mut b = a.clone();
    b.reverse();
    let first = classify_cards(&a).unwrap();
    assert_eq!(first, classify_cards(&a).unwrap());
    assert_eq!(first, classify_cards(&b).unwrap());
}

#[test]
fn malformed_sets_are_rejected() {
    assert!(matches!(
        classify_cards(&cards("Ac")),
        Err(GameError::MalformedCardSet { .. })
    ));
    assert!(matches!(
        classify_cards(&cards("Ac Kd Ac")),
        Err(GameError::MalformedCardSet { .. })
    ));
    assert!(matches!(
        classify_cards(&cards("2c 3c 4c 5c 6c 7c 8c 9c")),
        Err(GameError::MalformedCardSet { .. })
    ));
}
