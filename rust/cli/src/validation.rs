//! Parsing of card and player arguments given on the command line.
//!
//! Cards use two-character notation (`Ac`, `Td`, `10h`) separated by spaces
//! or commas. Players are written `Name:Ac Kd`.

use showdown_engine::cards::{Card, parse_cards};
use showdown_engine::player::Player;

use crate::error::CliError;

/// Parse exactly two hole cards.
///
/// ```rust
/// # use showdown_cli::validation::parse_hole;
/// let [a, b] = parse_hole("Ac Kd").unwrap();
/// assert_eq!(a.to_string(), "A♣");
/// assert_eq!(b.to_string(), "K♦");
/// assert!(parse_hole("Ac").is_err());
/// ```
pub fn parse_hole(input: &str) -> Result<[Card; 2], CliError> {
    let cards = parse_cards(input)?;
    match cards.as_slice() {
        [a, b] => Ok([*a, *b]),
        other => Err(CliError::InvalidInput(format!(
            "expected 2 hole cards, got {}",
            other.len()
        ))),
    }
}

/// Parse community cards; an empty string is a preflop board.
pub fn parse_board(input: &str) -> Result<Vec<Card>, CliError> {
    Ok(parse_cards(input)?)
}

/// Parse a `Name:Ac Kd` player spec into a seated player.
pub fn parse_player_spec(spec: &str) -> Result<Player, CliError> {
    let (name, hole) = spec.split_once(':').ok_or_else(|| {
        CliError::InvalidInput(format!("player '{}' must look like Name:Ac Kd", spec))
    })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "player '{}' has no name",
            spec
        )));
    }
    let [a, b] = parse_hole(hole)?;
    Ok(Player::with_hole(name, a, b))
}

/// Parse every `--player` value, rejecting repeated names.
pub fn parse_players(specs: &[String]) -> Result<Vec<Player>, CliError> {
    let mut players: Vec<Player> = Vec::with_capacity(specs.len());
    for spec in specs {
        let player = parse_player_spec(spec)?;
        if players.iter().any(|p| p.name() == player.name()) {
            return Err(CliError::InvalidInput(format!(
                "player '{}' given twice",
                player.name()
            )));
        }
        players.push(player);
    }
    Ok(players)
}
