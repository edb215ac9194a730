//! The chat-bot: one [`GameSession`] behind the text router.
//!
//! [`HiloBot::handle_line`] is what a chat platform adapter calls for every
//! inbound message. Lines are handled one at a time, in arrival order.

use hilo_engine::session::{GameSession, Outcome};
use hilo_engine::transcript::TranscriptWriter;

use crate::error::CliError;
use crate::formatters::Renderer;
use crate::validation::{ParseResult, parse_command};

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotAction {
    /// Send these messages, in order. Empty for ignored text.
    Reply(Vec<String>),
    /// The user asked to leave the interactive session.
    Quit,
}

pub struct HiloBot {
    session: GameSession,
    renderer: Renderer,
    prefix: String,
    transcript: Option<TranscriptWriter>,
}

impl HiloBot {
    pub fn new(prefix: &str, renderer: Renderer) -> Self {
        Self {
            session: GameSession::new(),
            renderer,
            prefix: prefix.to_string(),
            transcript: None,
        }
    }

    /// Record every dealer reveal and round to `writer`.
    pub fn with_transcript(mut self, writer: TranscriptWriter) -> Self {
        self.transcript = Some(writer);
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Handles one chat line.
    ///
    /// # Errors
    ///
    /// Only transcript writes can fail; game rejections are replies.
    pub fn handle_line(&mut self, line: &str) -> Result<BotAction, CliError> {
        let command = match parse_command(line, &self.prefix) {
            ParseResult::Command(command) => command,
            ParseResult::Help => return Ok(BotAction::Reply(vec![self.renderer.suit_legend()])),
            ParseResult::Quit => return Ok(BotAction::Quit),
            ParseResult::Ignored => return Ok(BotAction::Reply(Vec::new())),
            ParseResult::Invalid(msg) => return Ok(BotAction::Reply(vec![msg])),
        };

        tracing::debug!(?command, "handling command");
        let messages = match self.session.apply(command) {
            Ok(Outcome::Started) => self.renderer.started(),
            Ok(Outcome::Reset) => self.renderer.reset(),
            Ok(Outcome::Dealer(reveal)) => {
                if let Some(t) = &mut self.transcript {
                    t.record_dealer(&reveal)?;
                }
                self.renderer.dealer(&reveal)
            }
            Ok(Outcome::Round(report)) => {
                if let Some(t) = &mut self.transcript {
                    t.record_round(&report)?;
                }
                self.renderer.round(&report)
            }
            Err(e) => self.renderer.error(&e),
        };
        Ok(BotAction::Reply(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::SuitStyle;
    use hilo_engine::cards::{Card, Rank, Suit};

    fn bot() -> HiloBot {
        HiloBot::new("!", Renderer::new("!", SuitStyle::Unicode))
    }

    fn reply(bot: &mut HiloBot, line: &str) -> Vec<String> {
        match bot.handle_line(line).unwrap() {
            BotAction::Reply(msgs) => msgs,
            BotAction::Quit => panic!("unexpected quit for {:?}", line),
        }
    }

    #[test]
    fn full_turn_through_text() {
        let mut b = bot();
        assert_eq!(reply(&mut b, "!startgame").len(), 3);
        let msgs = reply(&mut b, "!dealer spades 5");
        assert!(msgs[0].starts_with("Based on dealer's card:"));
        let msgs = reply(&mut b, "!player hearts 5");
        assert_eq!(msgs[0], "It's a tie! Both Dealer and Player drew 5.");
        assert_eq!(
            b.session().dealer_card(),
            Some(Card::new(Suit::Hearts, Rank::Five))
        );
    }

    #[test]
    fn rejections_become_replies() {
        let mut b = bot();
        assert_eq!(
            reply(&mut b, "!player hearts 5"),
            vec!["Please deal the Dealer's card first."]
        );
        assert!(reply(&mut b, "!dealer moons 5")[0].starts_with("Invalid suit or rank."));
        reply(&mut b, "!dealer spades Q");
        assert_eq!(
            reply(&mut b, "!player spades q"),
            vec!["This card has already been used. Please choose a different card."]
        );
        assert!(reply(&mut b, "!dealercard")[0].starts_with("Enter the suit and rank"));
    }

    #[test]
    fn chatter_gets_no_reply() {
        let mut b = bot();
        assert!(reply(&mut b, "anyone up for a game?").is_empty());
        assert_eq!(b.handle_line("q").unwrap(), BotAction::Quit);
    }

    #[test]
    fn transcript_records_reveals_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.jsonl");
        let writer = TranscriptWriter::create(&path).unwrap();
        let mut b = bot().with_transcript(writer);
        reply(&mut b, "!startgame");
        reply(&mut b, "!dealer clubs 7");
        reply(&mut b, "!player clubs 7");
        reply(&mut b, "!dealercard");
        reply(&mut b, "!player diamonds 2");
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 4);
    }
}
