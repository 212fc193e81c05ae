use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no strength; they only group cards for flush detection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Unicode symbol used when printing cards.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            'c' | 'C' | '♣' => Some(Suit::Clubs),
            'd' | 'D' | '♦' => Some(Suit::Diamonds),
            'h' | 'H' | '♥' => Some(Suit::Hearts),
            's' | 'S' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison; Ace is always high.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Converts a numeric value (2..=14) back into a rank.
    pub fn from_u8(v: u8) -> Option<Rank> {
        let rank = match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Short label used in hand names, e.g. `A`, `10`, `4`.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn from_label(s: &str) -> Option<Rank> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are plain values: two cards are equal when rank and suit match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses cards written as rank then suit: `As`, `10h`, `Td`, `4♣`.
impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || GameError::InvalidCard(s.to_string());
        let suit_char = s.chars().last().ok_or_else(invalid)?;
        let suit = Suit::from_char(suit_char).ok_or_else(invalid)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        let rank = Rank::from_label(rank_part).ok_or_else(invalid)?;
        Ok(Card { suit, rank })
    }
}

/// Parses a whitespace or comma separated list of cards.
pub fn parse_cards(input: &str) -> Result<Vec<Card>, GameError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

/// The cards available to one player at showdown: two hole cards plus the
/// community cards revealed so far.
///
/// A `CardSet` always holds between [`CardSet::MIN`] and [`CardSet::MAX`]
/// cards and never the same card twice. Cards are kept sorted so that two sets
/// built from the same cards in a different order are identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    pub const MIN: usize = 2;
    pub const MAX: usize = 7;

    /// Validates and builds a card set.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MalformedCardSet`] when the set has fewer than two
    /// or more than seven cards, or when a card appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown_engine::cards::{parse_cards, CardSet};
    ///
    /// let set = CardSet::new(&parse_cards("Ac Kd Qs").unwrap()).unwrap();
    /// assert_eq!(set.len(), 3);
    ///
    /// let dup = parse_cards("Ac Ac").unwrap();
    /// assert!(CardSet::new(&dup).is_err());
    /// ```
    pub fn new(cards: &[Card]) -> Result<Self, GameError> {
        if cards.len() < Self::MIN || cards.len() > Self::MAX {
            return Err(GameError::MalformedCardSet {
                reason: format!(
                    "expected {} to {} cards, got {}",
                    Self::MIN,
                    Self::MAX,
                    cards.len()
                ),
            });
        }
        let mut sorted = cards.to_vec();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(GameError::MalformedCardSet {
                reason: format!("duplicate card {}", pair[0]),
            });
        }
        Ok(Self { cards: sorted })
    }

    /// Merges a player's hole cards with the community cards.
    pub fn from_hole_and_board(hole: &[Card], board: &[Card]) -> Result<Self, GameError> {
        let mut cards = Vec::with_capacity(hole.len() + board.len());
        cards.extend_from_slice(hole);
        cards.extend_from_slice(board);
        Self::new(&cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
