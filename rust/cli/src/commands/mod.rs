//! Command handler modules for the blackjack CLI.
//!
//! Each subcommand lives in its own file and exposes one
//! `handle_COMMAND_command` function. Output streams are passed in as
//! `&mut dyn Write` (and stdin as `&mut dyn BufRead` where needed) so tests
//! can drive handlers with in-memory buffers. Errors propagate as
//! [`CliError`](crate::error::CliError).

mod cfg;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
