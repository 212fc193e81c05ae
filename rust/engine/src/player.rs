use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// A seat at the table: a name and up to two private (hole) cards.
/// The showdown only reads hole cards; dealing fills them one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name
    name: String,
    /// Hole cards (up to 2 cards)
    hole: [Option<Card>; 2],
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hole: [None, None],
        }
    }

    /// A player already holding both hole cards.
    pub fn with_hole(name: impl Into<String>, first: Card, second: Card) -> Self {
        Self {
            name: name.into(),
            hole: [Some(first), Some(second)],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    /// Both hole cards, or `None` while the player is still being dealt.
    pub fn dealt_hole(&self) -> Option<[Card; 2]> {
        match self.hole {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        match self.hole.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(c);
                Ok(())
            }
            None => Err(GameError::HoleCardsFull),
        }
    }

    pub fn clear_cards(&mut self) {
        self.hole = [None, None];
    }
}
