use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardSet, Rank, Suit};
use crate::errors::GameError;

/// The ten hand categories, weakest to strongest.
///
/// `RoyalFlush` is only a name for the ace-high straight flush; use
/// [`HandCategory::tier`] when comparing strength.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    /// Strength tier used for comparison. Royal and straight flushes share the
    /// top tier and are separated by the straight's high card.
    pub fn tier(self) -> u8 {
        match self {
            HandCategory::RoyalFlush => HandCategory::StraightFlush as u8,
            c => c as u8,
        }
    }

    /// Number of ranks in a complete tiebreak for this category.
    pub fn tiebreak_len(self) -> usize {
        match self {
            HandCategory::HighCard | HandCategory::Flush => 5,
            HandCategory::OnePair => 4,
            HandCategory::TwoPair | HandCategory::ThreeOfAKind => 3,
            HandCategory::FullHouse | HandCategory::FourOfAKind => 2,
            HandCategory::Straight | HandCategory::StraightFlush | HandCategory::RoyalFlush => 1,
        }
    }
}

/// The best hand found in a [`CardSet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassifiedHand {
    pub category: HandCategory,
    /// Cards forming the pattern, grouped and ordered high to low: the pair,
    /// trips then pair for a full house, the straight from its top card.
    pub primary: Vec<Card>,
    /// Remaining cards that break ties, highest first.
    pub kickers: Vec<Card>,
}

impl ClassifiedHand {
    fn new(category: HandCategory, primary: Vec<Card>, kickers: Vec<Card>) -> Self {
        Self {
            category,
            primary,
            kickers,
        }
    }
}

/// Finds the best hand a card set supports.
///
/// Categories are tried from strongest to weakest and the first match wins,
/// so a set holding both quads and a flush reports quads. Straights, flushes
/// and straight flushes need five cards and are skipped on smaller sets.
/// Ace-to-five ("wheel") straights count, with Five as the top card.
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::{parse_cards, CardSet};
/// use showdown_engine::hand::{classify, HandCategory};
///
/// let set = CardSet::new(&parse_cards("4c 4d 4s Ac Ah 9d 2s").unwrap()).unwrap();
/// let hand = classify(&set);
/// assert_eq!(hand.category, HandCategory::FullHouse);
/// ```
pub fn classify(set: &CardSet) -> ClassifiedHand {
    let hand = classify_sorted(&sorted_high_first(set.cards()));
    tracing::trace!(category = ?hand.category, cards = set.len(), "classified hand");
    hand
}

/// Validates `cards` as a [`CardSet`] and classifies it.
pub fn classify_cards(cards: &[Card]) -> Result<ClassifiedHand, GameError> {
    CardSet::new(cards).map(|set| classify(&set))
}

fn sorted_high_first(cards: &[Card]) -> Vec<Card> {
    let mut v = cards.to_vec();
    v.sort_unstable_by(|a, b| b.rank.cmp(&a.rank).then(b.suit.cmp(&a.suit)));
    v
}

// `cards` must be duplicate free and sorted high to low.
fn classify_sorted(cards: &[Card]) -> ClassifiedHand {
    let by_rank = group_by_rank(cards);
    let by_suit = group_by_suit(cards);

    // Straight flush
    if let Some(run) = by_suit
        .iter()
        .filter(|g| g.len() >= 5)
        .filter_map(|g| straight_run(g))
        .max_by_key(|run| run[0].rank)
    {
        let category = if run[0].rank == Rank::Ace {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };
        return ClassifiedHand::new(category, run, vec![]);
    }

    // Four of a kind
    if let Some(quad) = by_rank.iter().find(|g| g.len() == 4) {
        let kickers = highest_excluding(cards, quad, 1);
        return ClassifiedHand::new(HandCategory::FourOfAKind, quad.clone(), kickers);
    }

    // Full house
    if let Some(trips) = by_rank.iter().find(|g| g.len() >= 3) {
        let pair = by_rank
            .iter()
            .find(|g| g.len() >= 2 && g[0].rank != trips[0].rank);
        if let Some(pair) = pair {
            let mut primary = trips[..3].to_vec();
            primary.extend_from_slice(&pair[..2]);
            return ClassifiedHand::new(HandCategory::FullHouse, primary, vec![]);
        }
    }

    // Flush
    if let Some(flush) = by_suit
        .iter()
        .filter(|g| g.len() >= 5)
        .map(|g| g[..5].to_vec())
        .max_by(|a, b| ranks_of(a).cmp(&ranks_of(b)))
    {
        return ClassifiedHand::new(HandCategory::Flush, flush, vec![]);
    }

    // Straight
    if let Some(run) = straight_run(cards) {
        return ClassifiedHand::new(HandCategory::Straight, run, vec![]);
    }

    // Three of a kind
    if let Some(trips) = by_rank.iter().find(|g| g.len() == 3) {
        let kickers = highest_excluding(cards, trips, 2);
        return ClassifiedHand::new(HandCategory::ThreeOfAKind, trips.clone(), kickers);
    }

    let pairs: Vec<&Vec<Card>> = by_rank.iter().filter(|g| g.len() == 2).collect();

    // Two pair
    if let [high, low, ..] = pairs.as_slice() {
        let mut primary = (*high).clone();
        primary.extend_from_slice(low);
        let kickers = highest_excluding(cards, &primary, 1);
        return ClassifiedHand::new(HandCategory::TwoPair, primary, kickers);
    }

    // One pair
    if let Some(pair) = pairs.first() {
        let kickers = highest_excluding(cards, pair, 3);
        return ClassifiedHand::new(HandCategory::OnePair, (*pair).clone(), kickers);
    }

    // High card: top 5 cards
    let top = cards.iter().take(5).copied().collect();
    ClassifiedHand::new(HandCategory::HighCard, top, vec![])
}

/// Cards grouped by rank, groups ordered by rank high to low.
fn group_by_rank(cards: &[Card]) -> Vec<Vec<Card>> {
    let mut groups: Vec<Vec<Card>> = Vec::new();
    for &c in cards {
        match groups.last_mut() {
            Some(g) if g[0].rank == c.rank => g.push(c),
            _ => groups.push(vec![c]),
        }
    }
    groups
}

fn group_by_suit(cards: &[Card]) -> [Vec<Card>; 4] {
    let mut by_suit: [Vec<Card>; 4] = [vec![], vec![], vec![], vec![]];
    for &c in cards {
        by_suit[suit_index(c.suit)].push(c);
    }
    by_suit
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

fn ranks_of(cards: &[Card]) -> Vec<Rank> {
    cards.iter().map(|c| c.rank).collect()
}

fn highest_excluding(cards: &[Card], used: &[Card], n: usize) -> Vec<Card> {
    cards
        .iter()
        .filter(|c| !used.contains(c))
        .take(n)
        .copied()
        .collect()
}

/// Finds the highest five-card run in `cards` (sorted high to low), one card
/// per rank, returned from the top card down. The wheel is returned as
/// 5-4-3-2-A.
fn straight_run(cards: &[Card]) -> Option<Vec<Card>> {
    // first card seen per rank value, indexes 2..=14; index 1 mirrors the ace
    let mut by_value: [Option<Card>; 15] = [None; 15];
    for &c in cards {
        let v = c.rank.value() as usize;
        by_value[v].get_or_insert(c);
    }
    by_value[1] = by_value[14];

    (5..=14usize).rev().find_map(|high| {
        (high - 4..=high)
            .rev()
            .map(|v| by_value[v])
            .collect::<Option<Vec<Card>>>()
    })
}
