use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use crate::cards::{Card, CardSet};
use crate::errors::GameError;
use crate::hand::{classify, ClassifiedHand};
use crate::player::Player;
use crate::strength::{build_key, StrengthKey};

/// Maximum number of community cards on the board.
pub const MAX_COMMUNITY_CARDS: usize = 5;

/// A player's evaluated hand at showdown.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerHand {
    /// Position of the player in the slice passed to the resolver
    pub seat: usize,
    pub name: String,
    pub hand: ClassifiedHand,
    pub key: StrengthKey,
}

/// Classifies every player's hand against the shared board, in seat order.
/// All validation happens before any hand is classified.
///
/// # Errors
///
/// [`GameError::InvalidShowdownState`] when there are no players, a player
/// does not hold exactly two hole cards, the board has more than five cards,
/// or a card shows up in more than one place. [`GameError::MalformedCardSet`]
/// when a player's own cards repeat a board card.
pub fn rank_players(players: &[Player], board: &[Card]) -> Result<Vec<PlayerHand>, GameError> {
    if players.is_empty() {
        return Err(GameError::InvalidShowdownState {
            reason: "no players to resolve".into(),
        });
    }
    if board.len() > MAX_COMMUNITY_CARDS {
        return Err(GameError::InvalidShowdownState {
            reason: format!(
                "{} community cards, at most {MAX_COMMUNITY_CARDS} allowed",
                board.len()
            ),
        });
    }

    let mut sets = Vec::with_capacity(players.len());
    for player in players {
        let hole = player
            .dealt_hole()
            .ok_or_else(|| GameError::InvalidShowdownState {
                reason: format!("player {} does not hold two hole cards", player.name()),
            })?;
        sets.push(CardSet::from_hole_and_board(&hole, board)?);
    }

    let mut seen: HashSet<Card> = board.iter().copied().collect();
    for player in players {
        for card in player.hole_cards().into_iter().flatten() {
            if !seen.insert(card) {
                return Err(GameError::InvalidShowdownState {
                    reason: format!("card {card} dealt more than once"),
                });
            }
        }
    }

    let evaluated = players
        .iter()
        .zip(&sets)
        .enumerate()
        .map(|(seat, (player, set))| {
            let hand = classify(set);
            let key = build_key(&hand);
            PlayerHand {
                seat,
                name: player.name().to_string(),
                hand,
                key,
            }
        })
        .collect();
    Ok(evaluated)
}

/// Resolves the showdown: every player holding the strongest hand wins.
///
/// The maximum key is found in a single pass and every player whose key
/// equals it is collected, so the winner set does not depend on seating
/// order. More than one winner means a split pot. Winners keep seat order.
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::player::Player;
/// use showdown_engine::showdown::resolve;
///
/// let hole = |s: &str| parse_cards(s).unwrap();
/// let (a, b) = (hole("Ac Kd"), hole("2c 2h"));
/// let players = vec![
///     Player::with_hole("Alex", a[0], a[1]),
///     Player::with_hole("Bob", b[0], b[1]),
/// ];
/// let board = parse_cards("Qs 7d 9h").unwrap();
///
/// let winners = resolve(&players, &board).unwrap();
/// assert_eq!(winners.len(), 1);
/// assert_eq!(winners[0].name, "Bob");
/// ```
pub fn resolve(players: &[Player], board: &[Card]) -> Result<Vec<PlayerHand>, GameError> {
    let winners = select_winners(&rank_players(players, board)?);
    tracing::debug!(
        players = players.len(),
        board = board.len(),
        winners = winners.len(),
        "showdown resolved"
    );
    Ok(winners)
}

/// Picks the winners out of hands already produced by [`rank_players`],
/// keeping seat order.
pub fn select_winners(ranked: &[PlayerHand]) -> Vec<PlayerHand> {
    let mut winners: Vec<PlayerHand> = Vec::new();
    for entry in ranked {
        let ord = winners
            .first()
            .map_or(Ordering::Greater, |best| entry.key.cmp(&best.key));
        match ord {
            Ordering::Greater => {
                winners.clear();
                winners.push(entry.clone());
            }
            Ordering::Equal => winners.push(entry.clone()),
            Ordering::Less => {}
        }
    }
    winners
}

/// True when more than one player shares the pot.
pub fn is_split(winners: &[PlayerHand]) -> bool {
    winners.len() > 1
}
