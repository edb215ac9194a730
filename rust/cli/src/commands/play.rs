//! # Play Command
//!
//! Interactive Hi-Lo game over stdin: each input line is treated as one chat
//! message and every bot reply is printed on stdout. This is the same router
//! a chat platform adapter would drive, minus the platform.
//!
//! Ends on EOF or when the user types `q` / `quit`.

use crate::bot::BotAction;
use crate::commands::build_bot;
use crate::config::Config;
use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use std::io::{BufRead, Write};

/// Handle the play command: interactive chat loop.
///
/// # Arguments
///
/// * `transcript` - Optional JSONL transcript path
/// * `cfg` - Resolved configuration (prefix, suit style)
/// * `out` - Output stream for bot replies
/// * `err` - Error stream
/// * `stdin` - Input stream of chat lines
///
/// # Returns
///
/// * `Ok(())` when input ends or the user quits
/// * `Err(CliError)` if the transcript cannot be written or reading stdin fails
pub fn handle_play_command(
    transcript: Option<String>,
    cfg: &Config,
    out: &mut dyn Write,
    _err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut bot = build_bot(cfg, transcript.as_deref())?;

    writeln!(
        out,
        "play: prefix={} (type {}startgame to begin, q to quit)",
        cfg.prefix, cfg.prefix
    )?;

    let mut handled = 0u32;
    while let Some(line) = read_stdin_line(stdin)? {
        match bot.handle_line(&line)? {
            BotAction::Quit => break,
            BotAction::Reply(messages) => {
                if !messages.is_empty() {
                    handled += 1;
                }
                for m in messages {
                    writeln!(out, "{}", m)?;
                }
            }
        }
        out.flush()?;
    }

    writeln!(out, "Session commands={}", handled)?;
    Ok(())
}
