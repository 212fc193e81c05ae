//! Card, board and tie-break formatters for terminal display.
//!
//! Unicode suit symbols are used where the terminal is expected to render
//! them; otherwise the ASCII letters `h d c s` are printed.
//!
//! ## Example
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_cli::formatters::{format_board, format_card, format_ranks};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! assert_eq!(format_ranks(&[Rank::Four, Rank::Ace]), "4,A");
//! ```

use showdown_engine::cards::{Card, Rank, Suit};

/// Check whether the terminal supports Unicode card symbols.
///
/// On Windows, looks for Windows Terminal (WT_SESSION), a modern terminal
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Unix-like systems are
/// assumed to support Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as `♥ ♦ ♣ ♠`, falling back to `h d c s`.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a single character (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ten => "T".to_string(),
        other => other.label().to_string(),
    }
}

/// Format a Card as rank plus suit, e.g. "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a board in bracket notation: "[A♠ K♥ Q♦]", or "[]" when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Format hole cards separated by a space; undealt slots print as `??`.
pub fn format_hole(hole: &[Option<Card>; 2]) -> String {
    hole.iter()
        .map(|c| c.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a tie-break key the way hand labels list ranks: "4,A", "10,9".
pub fn format_ranks(ranks: &[Rank]) -> String {
    ranks
        .iter()
        .map(|r| r.label())
        .collect::<Vec<_>>()
        .join(",")
}
