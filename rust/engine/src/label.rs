//! Human-readable hand names.
//!
//! Labels are for display only; comparison goes through
//! [`crate::strength::StrengthKey`].

use std::fmt;

use crate::cards::Card;
use crate::hand::{ClassifiedHand, HandCategory};

impl HandCategory {
    /// Canonical display label of the category.
    pub fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Trips",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Quads",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Describes a classified hand, e.g. `Full House (4,A)` or
/// `One Pair (2) - A,K,Q High`.
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::hand::classify_cards;
/// use showdown_engine::label::describe;
///
/// let hand = classify_cards(&parse_cards("Ac Kd Qs 2c 3h").unwrap()).unwrap();
/// assert_eq!(describe(&hand), "A,K,Q,3,2");
/// ```
pub fn describe(hand: &ClassifiedHand) -> String {
    let label = hand.category.label();
    let top = hand
        .primary
        .first()
        .map(|c| c.rank.label())
        .unwrap_or_default();
    match hand.category {
        HandCategory::HighCard => rank_list(&hand.primary),
        HandCategory::OnePair | HandCategory::ThreeOfAKind | HandCategory::FourOfAKind => {
            with_kickers(format!("{label} ({top})"), &hand.kickers)
        }
        HandCategory::TwoPair => {
            let low = hand.primary.get(2).map(|c| c.rank.label()).unwrap_or_default();
            with_kickers(format!("{label} ({top},{low})"), &hand.kickers)
        }
        HandCategory::FullHouse => {
            let pair = hand.primary.get(3).map(|c| c.rank.label()).unwrap_or_default();
            format!("{label} ({top},{pair})")
        }
        HandCategory::Straight | HandCategory::Flush | HandCategory::StraightFlush => {
            format!("{label} ({top} High)")
        }
        HandCategory::RoyalFlush => label.to_string(),
    }
}

fn rank_list(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.rank.label())
        .collect::<Vec<_>>()
        .join(",")
}

fn with_kickers(head: String, kickers: &[Card]) -> String {
    if kickers.is_empty() {
        head
    } else {
        format!("{head} - {} High", rank_list(kickers))
    }
}

impl fmt::Display for ClassifiedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self))
    }
}
