//! `eval`: classify a single hand.
//!
//! # Example Output
//!
//! ```text
//! Hand: Full House (4,A)
//! Category: Full House
//! Tiebreak: 4,A
//! Best cards: [4♠ 4♦ 4♣ A♥ A♣]
//! ```

use std::io::Write;

use showdown_engine::cards::CardSet;
use showdown_engine::hand::classify;
use showdown_engine::strength::build_key;

use crate::error::CliError;
use crate::formatters::{format_board, format_ranks};
use crate::validation::{parse_board, parse_hole};

pub fn handle_eval_command(
    hole: &str,
    board: &str,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole = parse_hole(hole)?;
    let board = parse_board(board)?;
    let set = CardSet::from_hole_and_board(&hole, &board)?;
    let hand = classify(&set);
    let key = build_key(&hand);

    if json {
        let display = serde_json::json!({
            "label": hand.to_string(),
            "key": key,
            "hand": hand,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
        return Ok(());
    }

    let best: Vec<_> = hand.primary.iter().chain(&hand.kickers).copied().collect();
    writeln!(out, "Hand: {}", hand)?;
    writeln!(out, "Category: {}", hand.category)?;
    writeln!(out, "Tiebreak: {}", format_ranks(&key.tiebreak))?;
    writeln!(out, "Best cards: {}", format_board(&best))?;
    Ok(())
}
