//! Terminal output helpers shared by the commands.

use std::io::Write;

use showdown_engine::showdown::PlayerHand;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Write the winner line: `Winner: Bob (One Pair (2) - A,K,Q High)` for a
/// single winner, `Split pot: Alex, Bob (...)` when several tie.
pub fn write_winners(out: &mut dyn Write, winners: &[PlayerHand]) -> std::io::Result<()> {
    let Some(best) = winners.first() else {
        return Ok(());
    };
    let names: Vec<&str> = winners.iter().map(|w| w.name.as_str()).collect();
    let prefix = if winners.len() > 1 {
        "Split pot"
    } else {
        "Winner"
    };
    writeln!(out, "{}: {} ({})", prefix, names.join(", "), best.hand)
}
