//! `cfg`: print the resolved configuration with the source of each value.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "players": {
//!     "value": ["Alex", "Bob", "Jane"],
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "log_level": {
//!     "value": "warn",
//!     "source": "default"
//!   }
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;

/// Loads the configuration with source tracking and writes it as pretty
/// JSON to `out`.
///
/// # Errors
///
/// Returns `CliError::Config` if the file cannot be read or parsed, or a
/// value fails validation.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "log_level": {
            "value": config.log_level,
            "source": sources.log_level,
        },
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}
