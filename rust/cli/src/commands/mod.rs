//! Command handler modules for the showdown CLI.
//!
//! Each subcommand lives in its own file and follows one pattern:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in by [`crate::run`]
//! - Errors propagated through `CliError`

mod cfg;
mod deal;
mod eval;
mod resolve;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use resolve::handle_resolve_command;
