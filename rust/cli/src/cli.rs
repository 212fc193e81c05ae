//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    version,
    about = "Poker hand classification and showdown resolution"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify one hand from hole cards and an optional board
    Eval {
        /// Two hole cards, e.g. "4c 4d"
        #[arg(long)]
        hole: String,
        /// Zero to five community cards, e.g. "4s Ac Ah 9d 2s"
        #[arg(long, default_value = "")]
        board: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a showdown between players
    Resolve {
        /// Player and hole cards as "Name:Ac Kd"; repeat for each seat
        #[arg(long = "player", required = true)]
        players: Vec<String>,
        /// Zero to five community cards shared by every player
        #[arg(long, default_value = "")]
        board: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Deal one full game and show the winners
    Deal {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Comma-separated player names, e.g. Alex,Bob,Jane
        #[arg(long, value_delimiter = ',')]
        players: Option<Vec<String>>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}
