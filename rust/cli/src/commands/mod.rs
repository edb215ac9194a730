//! Command handler modules for the Hi-Lo CLI.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum

mod cfg;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use crate::bot::HiloBot;
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{Renderer, SuitStyle};
use hilo_engine::transcript::TranscriptWriter;

/// Bot configured from `cfg`, optionally writing a transcript to `path`.
pub(crate) fn build_bot(cfg: &Config, transcript: Option<&str>) -> Result<HiloBot, CliError> {
    let renderer = Renderer::new(&cfg.prefix, SuitStyle::detect(cfg.ascii_suits));
    let bot = HiloBot::new(&cfg.prefix, renderer);
    match transcript {
        Some(path) => Ok(bot.with_transcript(TranscriptWriter::create(path)?)),
        None => Ok(bot),
    }
}
