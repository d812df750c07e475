//! Configuration command handler.
//!
//! Prints the effective configuration with the source of each value
//! (default, file, or env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_balance": {
//!     "value": 10000,
//!     "source": "default"
//!   },
//!   "decks": {
//!     "value": 4,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if the configuration file or environment
/// holds an invalid value, and `CliError::Io` if writing fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_balance": {
            "value": config.starting_balance,
            "source": sources.starting_balance,
        },
        "decks": {
            "value": config.decks,
            "source": sources.decks,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
