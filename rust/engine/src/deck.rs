use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A seeded 52-card deck. Cards come off the top one at a time and every
/// take fails with [`GameError::DeckExhausted`] once the deck is empty.
///
/// # Examples
///
/// ```
/// use showdown_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(7);
/// let mut b = Deck::new_with_seed(7);
/// assert_eq!(a.deal_card().unwrap(), b.deal_card().unwrap());
/// a.burn_card().unwrap();
/// assert_eq!(a.remaining(), 50);
/// ```
#[derive(Debug)]
pub struct Deck {
    // undealt cards, top of the deck last
    stack: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub const SIZE: usize = 52;

    /// A full deck already shuffled with a generator seeded from `seed`.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self {
            stack: Vec::with_capacity(Self::SIZE),
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Gathers all 52 cards back and shuffles them. The generator keeps its
    /// state, so successive games from one seed differ but replay exactly.
    pub fn shuffle(&mut self) {
        self.stack = full_deck();
        self.stack.shuffle(&mut self.rng);
    }

    /// Takes the top card.
    pub fn deal_card(&mut self) -> Result<Card, GameError> {
        self.stack.pop().ok_or(GameError::DeckExhausted)
    }

    /// Takes `n` cards from the top, in dealing order.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.stack.len() {
            return Err(GameError::DeckExhausted);
        }
        let at = self.stack.len() - n;
        let mut cards = self.stack.split_off(at);
        cards.reverse();
        Ok(cards)
    }

    /// Discards the top card face down.
    pub fn burn_card(&mut self) -> Result<(), GameError> {
        self.deal_card().map(drop)
    }

    pub fn remaining(&self) -> usize {
        self.stack.len()
    }
}
