//! `deal`: run one full game through the engine.
//!
//! Hole cards are dealt, then flop, turn and river are revealed with a burn
//! before each street, and the showdown is resolved on the river. The seed
//! is printed first so a deal can be replayed with `--seed`.

use std::io::Write;

use showdown_engine::engine::Engine;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::{format_board, format_hole};
use crate::ui;

pub fn handle_deal_command(
    seed: Option<u64>,
    players: Option<Vec<String>>,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let names = players.unwrap_or_else(|| cfg.players.clone());
    config::validate_players(&names).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut eng = Engine::new(names, Some(seed))?;
    while !eng.has_ended() {
        eng.next_action()?;
    }

    writeln!(out, "Seed: {}", seed)?;
    for p in eng.players() {
        writeln!(out, "Hole {}: {}", p.name(), format_hole(&p.hole_cards()))?;
    }
    writeln!(out, "Board: {}", format_board(eng.board()))?;
    for (seat, p) in eng.players().iter().enumerate() {
        writeln!(out, "Hand {}: {}", p.name(), eng.identify_player_hand(seat)?)?;
    }
    ui::write_winners(out, eng.winners())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(seed: Option<u64>, players: Option<&[&str]>) -> Result<String, CliError> {
        let mut out = Vec::new();
        let players = players.map(|list| list.iter().map(|s| s.to_string()).collect());
        handle_deal_command(seed, players, &Config::default(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn deal_lists_default_table() {
        let output = deal(Some(42), None).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Seed: 42");
        assert!(lines[1].starts_with("Hole Alex: "));
        assert!(lines[2].starts_with("Hole Bob: "));
        assert!(lines[3].starts_with("Hole Jane: "));
        assert!(lines[4].starts_with("Board: ["));
        assert!(lines[5].starts_with("Hand Alex: "));
        assert!(lines[8].starts_with("Winner: ") || lines[8].starts_with("Split pot: "));
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn same_seed_same_deal() {
        assert_eq!(deal(Some(12345), None).unwrap(), deal(Some(12345), None).unwrap());
    }

    #[test]
    fn config_seed_used_when_flag_missing() {
        let cfg = Config {
            seed: Some(7),
            ..Config::default()
        };
        let mut out = Vec::new();
        handle_deal_command(None, None, &cfg, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Seed: 7\n"));
    }

    #[test]
    fn custom_players_are_seated() {
        let output = deal(Some(1), Some(&["Ann", "Ben"])).unwrap();
        assert!(output.contains("Hole Ann: "));
        assert!(output.contains("Hand Ben: "));
        assert!(!output.contains("Jane"));
    }

    #[test]
    fn lone_player_is_rejected() {
        let err = deal(Some(1), Some(&["Solo"])).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert_eq!(
            err.to_string(),
            "Invalid input: players must number 2..=22, got 1"
        );
    }
}
