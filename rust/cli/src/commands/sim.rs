//! Self-play simulation.
//!
//! Shuffles a full deck with a seed and feeds it through the bot as chat
//! lines: the first card as `!dealer`, every following card as `!player`.
//! The same seed always produces the same transcript on stdout.

use crate::bot::BotAction;
use crate::commands::build_bot;
use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use hilo_engine::cards::Card;
use hilo_engine::deck::Deck;
use std::io::Write;

/// Handle the sim command.
///
/// # Arguments
///
/// * `seed` - Shuffle seed; falls back to the configured seed, then to a random one
/// * `rounds` - Player rounds to play; `None` plays until the deck is exhausted
/// * `transcript` - Optional JSONL transcript path
/// * `cfg` - Resolved configuration
/// * `out` - Output stream for the game log
/// * `err` - Error stream
///
/// # Errors
///
/// `CliError::InvalidInput` when `rounds` is zero.
pub fn handle_sim_command(
    seed: Option<u64>,
    rounds: Option<u32>,
    transcript: Option<String>,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == Some(0) {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let deck = Deck::new();
    let max_rounds = deck.len() - 1;
    if let Some(r) = rounds
        && r as usize > max_rounds
    {
        ui::display_warning(
            err,
            &format!("only {} rounds fit in one deck; stopping there", max_rounds),
        )?;
    }

    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let rounds = rounds.map_or(max_rounds, |r| (r as usize).min(max_rounds));
    writeln!(out, "sim: seed={} rounds={}", seed, rounds)?;

    let mut bot = build_bot(cfg, transcript.as_deref())?;
    let prefix = bot.prefix().to_string();
    let order = deck.shuffled(seed);

    let mut lines = vec![format!("{}startgame", prefix)];
    if let Some((first, rest)) = order.split_first() {
        lines.push(card_command(&prefix, "dealer", first));
        lines.extend(
            rest.iter()
                .take(rounds)
                .map(|c| card_command(&prefix, "player", c)),
        );
    }

    for line in &lines {
        writeln!(out, "> {}", line)?;
        if let BotAction::Reply(messages) = bot.handle_line(line)? {
            for m in messages {
                writeln!(out, "{}", m)?;
            }
        }
    }

    writeln!(out, "Rounds played: {}", rounds)?;
    writeln!(out, "Cards remaining: {}", bot.session().deck().len())?;
    Ok(())
}

fn card_command(prefix: &str, word: &str, card: &Card) -> String {
    format!("{}{} {} {}", prefix, word, card.suit, card.rank)
}
