//! Configuration command handler.
//!
//! Prints the resolved configuration as pretty JSON, each value paired with
//! its source (`default`, `file` or `env`).

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "prefix": {
            "value": config.prefix,
            "source": sources.prefix,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ascii_suits": {
            "value": config.ascii_suits,
            "source": sources.ascii_suits,
        },
        "log_level": {
            "value": config.log_level,
            "source": sources.log_level,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
