//! # showdown-engine: Poker Hand Evaluation and Showdown Resolution
//!
//! Classifies hold'em hands built from two hole cards and up to five community
//! cards, turns them into totally ordered strength keys, and picks the
//! winner(s) of a showdown between any number of players, split pots
//! included.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and [`cards::CardSet`]
//! - [`hand`] - Hand classification into the ten categories
//! - [`strength`] - Tie-break keys and hand comparison
//! - [`label`] - Display names such as `Full House (4,A)`
//! - [`showdown`] - Winner resolution across all players
//! - [`player`] - Player name and hole cards
//! - [`deck`] - Seeded 52-card deck
//! - [`engine`] - Dealing cadence (flop, turn, river) and end-of-game winners
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::{parse_cards, CardSet};
//! use showdown_engine::hand::{classify, HandCategory};
//! use showdown_engine::strength::build_key;
//!
//! let cards = parse_cards("4c 4d 4s Ac Ah 9d 2s").unwrap();
//! let hand = classify(&CardSet::new(&cards).unwrap());
//!
//! assert_eq!(hand.category, HandCategory::FullHouse);
//! assert_eq!(hand.to_string(), "Full House (4,A)");
//! println!("Tiebreak: {:?}", build_key(&hand).tiebreak);
//! ```
//!
//! ## Showdown
//!
//! ```rust
//! use showdown_engine::cards::parse_cards;
//! use showdown_engine::player::Player;
//! use showdown_engine::showdown::{is_split, resolve};
//!
//! let board = parse_cards("Th Jh Qh Kh Ah").unwrap();
//! let a = parse_cards("2c 3d").unwrap();
//! let b = parse_cards("4s 5s").unwrap();
//! let players = [
//!     Player::with_hole("Alex", a[0], a[1]),
//!     Player::with_hole("Bob", b[0], b[1]),
//! ];
//!
//! let winners = resolve(&players, &board).unwrap();
//! assert!(is_split(&winners));
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod label;
pub mod player;
pub mod showdown;
pub mod strength;

pub use cards::{Card, CardSet, Rank, Suit};
pub use errors::GameError;
pub use hand::{classify, classify_cards, ClassifiedHand, HandCategory};
pub use showdown::{resolve, PlayerHand};
pub use strength::{build_key, compare_hands, StrengthKey};
