//! Chat text parsing for the Hi-Lo bot.
//!
//! Turns one inbound chat line into a typed [`Command`] for the engine, or
//! into one of the router-level outcomes (help, quit, ignored, invalid).
//! The engine never sees raw chat text.

use hilo_engine::session::Command;

/// Result of parsing one chat line.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A command for the game session
    Command(Command),
    /// Suit legend request (`!hg`)
    Help,
    /// User entered quit command (q or quit)
    Quit,
    /// Ordinary chat or an unknown command; no reply
    Ignored,
    /// Malformed command with the message to send back
    Invalid(String),
}

/// Parse a chat line into a command.
///
/// Recognised commands, shown with the default `!` prefix (command words are
/// case-insensitive):
/// - `!startgame`, `!reset`, `!hg`, `!dealercard`
/// - `!dealer <suit> <rank>`, `!player <suit> <rank>`
///
/// Suit and rank tokens are passed through untouched; the session validates
/// them.
///
/// # Example
///
/// ```rust
/// # use hilo_cli::validation::{parse_command, ParseResult};
/// use hilo_engine::session::Command;
///
/// assert_eq!(parse_command("!startgame", "!"), ParseResult::Command(Command::Start));
/// assert_eq!(
///     parse_command("!player hearts 10", "!"),
///     ParseResult::Command(Command::SetPlayerCard { suit: "hearts".into(), rank: "10".into() })
/// );
/// assert_eq!(parse_command("good luck everyone", "!"), ParseResult::Ignored);
/// assert!(matches!(parse_command("!dealer spades", "!"), ParseResult::Invalid(_)));
/// ```
pub fn parse_command(input: &str, prefix: &str) -> ParseResult {
    let input = input.trim();
    if input.is_empty() {
        return ParseResult::Ignored;
    }

    let lowered = input.to_lowercase();
    if lowered == "q" || lowered == "quit" {
        return ParseResult::Quit;
    }

    let Some(body) = input.strip_prefix(prefix) else {
        return ParseResult::Ignored;
    };
    let parts: Vec<&str> = body.split_whitespace().collect();
    let Some(word) = parts.first() else {
        return ParseResult::Ignored;
    };

    match (word.to_lowercase().as_str(), parts.len()) {
        ("startgame", 1) => ParseResult::Command(Command::Start),
        ("reset", 1) => ParseResult::Command(Command::Reset),
        ("hg", 1) => ParseResult::Help,
        ("dealercard", 1) => ParseResult::Command(Command::InheritDealer),
        ("dealer", 3) => ParseResult::Command(Command::SetDealerCard {
            suit: parts[1].to_string(),
            rank: parts[2].to_string(),
        }),
        ("player", 3) => ParseResult::Command(Command::SetPlayerCard {
            suit: parts[1].to_string(),
            rank: parts[2].to_string(),
        }),
        ("dealer" | "player", _) => ParseResult::Invalid(format!(
            "Invalid format. Please enter the command in the format: `{p}player <suit> <rank>` or `{p}dealer <suit> <rank>`.",
            p = prefix
        )),
        _ => ParseResult::Ignored,
    }
}
