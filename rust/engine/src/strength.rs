use std::cmp::Ordering;

use serde::Serialize;

use crate::cards::Rank;
use crate::hand::{ClassifiedHand, HandCategory};

/// Comparable strength of a classified hand.
///
/// Keys compare by category tier first and then by `tiebreak`,
/// lexicographically from the most significant rank. Two keys are equal
/// exactly when their hands split the pot.
#[derive(Debug, Clone, Serialize)]
pub struct StrengthKey {
    pub category: HandCategory,
    // ordered most significant first: group ranks, then kickers
    pub tiebreak: Vec<Rank>,
}

impl PartialEq for StrengthKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for StrengthKey {}

impl PartialOrd for StrengthKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StrengthKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .tier()
            .cmp(&other.category.tier())
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

/// Builds the comparison key of a classified hand.
///
/// The key lists each group rank of the pattern once (quads, trips then pair,
/// high pair then low pair, the top of a straight) followed by the kickers,
/// cut to [`HandCategory::tiebreak_len`].
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::{parse_cards, Rank};
/// use showdown_engine::hand::classify_cards;
/// use showdown_engine::strength::build_key;
///
/// let hand = classify_cards(&parse_cards("2c 2h Ac Kd Qs").unwrap()).unwrap();
/// let key = build_key(&hand);
/// assert_eq!(key.tiebreak, vec![Rank::Two, Rank::Ace, Rank::King, Rank::Queen]);
/// ```
pub fn build_key(hand: &ClassifiedHand) -> StrengthKey {
    let mut tiebreak: Vec<Rank> = hand.primary.iter().map(|c| c.rank).collect();
    tiebreak.dedup();
    tiebreak.extend(hand.kickers.iter().map(|c| c.rank));
    tiebreak.truncate(hand.category.tiebreak_len());
    StrengthKey {
        category: hand.category,
        tiebreak,
    }
}

pub fn compare_hands(a: &ClassifiedHand, b: &ClassifiedHand) -> Ordering {
    build_key(a).cmp(&build_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(category: HandCategory, tiebreak: &[u8]) -> StrengthKey {
        StrengthKey {
            category,
            tiebreak: tiebreak.iter().filter_map(|&v| Rank::from_u8(v)).collect(),
        }
    }

    #[test]
    fn category_dominates_tiebreak() {
        let pair = key(HandCategory::OnePair, &[14, 13, 12, 11]);
        let two_pair = key(HandCategory::TwoPair, &[3, 2, 4]);
        assert!(two_pair > pair);
    }

    #[test]
    fn royal_and_straight_flush_share_a_tier() {
        let royal = key(HandCategory::RoyalFlush, &[14]);
        let king_high = key(HandCategory::StraightFlush, &[13]);
        assert!(royal > king_high);
        assert_eq!(royal, key(HandCategory::StraightFlush, &[14]));
    }

    #[test]
    fn shorter_key_is_weaker_than_extended_one() {
        let bare = key(HandCategory::OnePair, &[9]);
        let kicked = key(HandCategory::OnePair, &[9, 2]);
        assert!(kicked > bare);
    }

    #[test]
    fn equal_keys_mean_split() {
        let a = key(HandCategory::Flush, &[14, 10, 8, 6, 3]);
        let b = key(HandCategory::Flush, &[14, 10, 8, 6, 3]);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }
}
