use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardSet};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{classify, ClassifiedHand};
use crate::player::Player;
use crate::showdown::{resolve, PlayerHand, MAX_COMMUNITY_CARDS};

/// Represents a dealing stage of a Texas Hold'em hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Hole cards dealt, no community cards
    Preflop,
    /// 3 community cards
    Flop,
    /// 4th community card
    Turn,
    /// 5th community card; the hand is over
    River,
}

/// Deals a game of hold'em to a fixed table and resolves the winners once
/// the board is complete.
///
/// The engine owns the deck and the players. Each call to
/// [`Engine::next_action`] burns a card and reveals the next street; after the
/// river the showdown is resolved and the winners are kept until the next
/// game starts.
///
/// # Examples
///
/// ```
/// use showdown_engine::engine::{Engine, Street};
///
/// let mut engine = Engine::new(["Alex", "Bob", "Jane"], Some(12345)).unwrap();
/// assert_eq!(engine.street(), Street::Preflop);
///
/// engine.next_action().unwrap(); // flop
/// engine.next_action().unwrap(); // turn
/// engine.next_action().unwrap(); // river
///
/// assert_eq!(engine.board().len(), 5);
/// assert!(engine.has_ended());
/// assert!(!engine.winners().is_empty());
/// ```
#[derive(Debug)]
pub struct Engine {
    /// The deck used for dealing cards
    deck: Deck,
    /// Players in seat order
    players: Vec<Player>,
    /// Community cards on the board (up to 5 cards: flop, turn, river)
    board: Vec<Card>,
    /// Winners of the last completed game
    winners: Vec<PlayerHand>,
}

impl Engine {
    pub const MIN_PLAYERS: usize = 2;
    /// Two hole cards each, three burns and a full board must fit in one deck.
    pub const MAX_PLAYERS: usize = 22;
    pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

    /// Seats the named players and deals the first game.
    pub fn new<I, S>(names: I, seed: Option<u64>) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names.into_iter().map(Player::new).collect();
        if players.len() < Self::MIN_PLAYERS || players.len() > Self::MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount {
                count: players.len(),
                max: Self::MAX_PLAYERS,
            });
        }
        let mut engine = Self {
            deck: Deck::new_with_seed(seed.unwrap_or(Self::DEFAULT_SEED)),
            players,
            board: Vec::with_capacity(MAX_COMMUNITY_CARDS),
            winners: Vec::new(),
        };
        engine.start_new_game()?;
        Ok(engine)
    }

    /// Clears hands and board, shuffles a fresh deck and deals two hole cards
    /// to every player, one card per player per round.
    pub fn start_new_game(&mut self) -> Result<(), GameError> {
        self.players.iter_mut().for_each(Player::clear_cards);
        self.board.clear();
        self.winners.clear();
        self.deck.shuffle();
        for _ in 0..2 {
            for p in &mut self.players {
                p.give_card(self.deck.deal_card()?)?;
            }
        }
        tracing::debug!(players = self.players.len(), "new game dealt");
        Ok(())
    }

    /// Reveals the next street: the flop first, then turn and river. Once the
    /// river is out the showdown is resolved; further calls do nothing.
    pub fn next_action(&mut self) -> Result<Street, GameError> {
        match self.street() {
            Street::Preflop => self.deal_street(3)?,
            Street::Flop | Street::Turn => self.deal_street(1)?,
            Street::River => return Ok(Street::River),
        }
        if self.has_ended() {
            self.identify_winning_hand()?;
        }
        Ok(self.street())
    }

    fn deal_street(&mut self, cards: usize) -> Result<(), GameError> {
        self.deck.burn_card()?;
        self.board.extend(self.deck.deal(cards)?);
        Ok(())
    }

    fn identify_winning_hand(&mut self) -> Result<(), GameError> {
        self.winners = resolve(&self.players, &self.board)?;
        if let Some(best) = self.winners.first() {
            tracing::info!(
                winners = ?self.winners.iter().map(|w| w.name.as_str()).collect::<Vec<_>>(),
                hand = %best.hand,
                "game resolved"
            );
        }
        Ok(())
    }

    pub fn street(&self) -> Street {
        match self.board.len() {
            0..=2 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn has_ended(&self) -> bool {
        self.board.len() >= MAX_COMMUNITY_CARDS
    }

    /// Winners of the current game; empty until the river is dealt.
    pub fn winners(&self) -> &[PlayerHand] {
        &self.winners
    }

    /// The best hand of the player in `seat` with the cards revealed so far.
    pub fn identify_player_hand(&self, seat: usize) -> Result<ClassifiedHand, GameError> {
        let player = self
            .players
            .get(seat)
            .ok_or_else(|| GameError::InvalidShowdownState {
                reason: format!("no player in seat {seat}"),
            })?;
        let hole = player
            .dealt_hole()
            .ok_or_else(|| GameError::InvalidShowdownState {
                reason: format!("player {} does not hold two hole cards", player.name()),
            })?;
        let set = CardSet::from_hole_and_board(&hole, &self.board)?;
        Ok(classify(&set))
    }

    /// True once the game has ended and the player in `seat` is among the
    /// winners.
    pub fn check_if_player_won(&self, seat: usize) -> bool {
        self.winners.iter().any(|w| w.seat == seat)
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
}
