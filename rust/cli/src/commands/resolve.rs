//! `resolve`: evaluate every player against a shared board and name the
//! winner, or every tied winner when the pot is split.
//!
//! # Example Output
//!
//! ```text
//! Board: [T♥ J♥ Q♥ K♥ A♥]
//! Alex: 2♣ 3♦ -> Royal Flush
//! Bob: 4♠ 5♠ -> Royal Flush
//! Split pot: Alex, Bob (Royal Flush)
//! ```

use std::io::Write;

use showdown_engine::showdown::{is_split, rank_players, select_winners};

use crate::error::CliError;
use crate::formatters::{format_board, format_hole};
use crate::ui;
use crate::validation::{parse_board, parse_players};

pub fn handle_resolve_command(
    specs: &[String],
    board: &str,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let players = parse_players(specs)?;
    let board = parse_board(board)?;
    let hands = rank_players(&players, &board)?;
    let winners = select_winners(&hands);

    if json {
        let display = serde_json::json!({
            "board": board,
            "hands": hands,
            "winners": winners.iter().map(|w| &w.name).collect::<Vec<_>>(),
            "split": is_split(&winners),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
        return Ok(());
    }

    writeln!(out, "Board: {}", format_board(&board))?;
    for (player, ranked) in players.iter().zip(&hands) {
        writeln!(
            out,
            "{}: {} -> {}",
            ranked.name,
            format_hole(&player.hole_cards()),
            ranked.hand
        )?;
    }
    ui::write_winners(out, &winners)?;
    Ok(())
}
