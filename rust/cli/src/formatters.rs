//! Chat message rendering for cards, odds and session outcomes.
//!
//! Every reply the bot sends is one `String` per chat message. Cards render as
//! `"<rank> <suit>"`, e.g. `Q ♠`, with an ASCII fallback (`Q s`) for terminals
//! that cannot show the suit glyphs.
//!
//! ## Example
//!
//! ```rust
//! use hilo_engine::cards::{Card, Rank, Suit};
//! use hilo_cli::formatters::{format_card, format_percent, SuitStyle};
//!
//! let queen = Card::new(Suit::Spades, Rank::Queen);
//! assert_eq!(format_card(&queen, SuitStyle::Unicode), "Q ♠");
//! assert_eq!(format_card(&queen, SuitStyle::Ascii), "Q s");
//! assert_eq!(format_percent(40.0 / 51.0), "78.43%");
//! ```

use hilo_engine::cards::{Card, Suit, all_suits};
use hilo_engine::deck::Probabilities;
use hilo_engine::errors::GameError;
use hilo_engine::rules::RoundWinner;
use hilo_engine::session::{DealerReveal, RoundReport};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// How suits are drawn in replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuitStyle {
    /// ♠ ♥ ♦ ♣
    Unicode,
    /// s h d c
    Ascii,
}

impl SuitStyle {
    /// ASCII when forced by configuration or when the terminal lacks Unicode.
    pub fn detect(force_ascii: bool) -> Self {
        if force_ascii || !supports_unicode() {
            SuitStyle::Ascii
        } else {
            SuitStyle::Unicode
        }
    }
}

pub fn format_suit(suit: &Suit, style: SuitStyle) -> &'static str {
    match style {
        SuitStyle::Unicode => match suit {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        },
        SuitStyle::Ascii => match suit {
            Suit::Spades => "s",
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
        },
    }
}

pub fn format_card(card: &Card, style: SuitStyle) -> String {
    format!("{} {}", card.rank, format_suit(&card.suit, style))
}

/// One card per line, in the order given.
pub fn format_used_cards(cards: &[Card], style: SuitStyle) -> String {
    cards
        .iter()
        .map(|c| format_card(c, style))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fraction as a percentage with two decimals, halves rounded up.
pub fn format_percent(p: f64) -> String {
    format!("{:.2}%", (p * 10000.0).round() / 100.0)
}

pub fn format_odds(odds: &Probabilities) -> String {
    format!(
        "Lower: {}, Higher: {}",
        format_percent(odds.lower),
        format_percent(odds.higher)
    )
}

/// Builds the chat replies for session outcomes and rejections.
#[derive(Debug, Clone)]
pub struct Renderer {
    prefix: String,
    style: SuitStyle,
}

impl Renderer {
    pub fn new(prefix: &str, style: SuitStyle) -> Self {
        Self {
            prefix: prefix.to_string(),
            style,
        }
    }

    pub fn style(&self) -> SuitStyle {
        self.style
    }

    /// `'spades': '♠', 'hearts': '♥', ...`
    pub fn suit_legend(&self) -> String {
        all_suits()
            .iter()
            .map(|s| format!("'{}': '{}'", s, format_suit(s, self.style)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn started(&self) -> Vec<String> {
        vec![
            format!("Game started! Enter `{}dealercard` to start.", self.prefix),
            format!("Enter `{}hg` to check the rule", self.prefix),
            self.suit_legend(),
        ]
    }

    pub fn reset(&self) -> Vec<String> {
        vec![format!(
            "Game has been reset! Enter `{}dealercard` to start.",
            self.prefix
        )]
    }

    pub fn dealer(&self, reveal: &DealerReveal) -> Vec<String> {
        let mut msgs = Vec::with_capacity(4);
        if reveal.inherited {
            msgs.push(format!(
                "Dealer inherits the player's last card: {}",
                format_card(&reveal.dealer_card, self.style)
            ));
        }
        msgs.push(format!("Based on dealer's card: {}", format_odds(&reveal.odds)));
        msgs.push(self.used_cards(&reveal.used_cards));
        if !reveal.inherited {
            msgs.push(self.continue_prompt());
        }
        if reveal.deck_exhausted {
            msgs.push(self.exhausted());
        }
        msgs
    }

    pub fn round(&self, report: &RoundReport) -> Vec<String> {
        let verdict = match report.winner {
            RoundWinner::Tie => format!(
                "It's a tie! Both Dealer and Player drew {}.",
                report.player_card.rank
            ),
            winner => format!("{} wins this round!", winner),
        };
        let mut msgs = vec![
            verdict,
            self.used_cards(&report.used_cards),
            format!("Updated probabilities: {}", format_odds(&report.odds)),
            self.continue_prompt(),
        ];
        if report.deck_exhausted {
            msgs.push(self.exhausted());
        }
        msgs
    }

    pub fn error(&self, error: &GameError) -> Vec<String> {
        let msg = match error {
            GameError::InvalidCard { .. } => "Invalid suit or rank. Please enter a valid suit ('spades', 'hearts', 'diamonds', 'clubs') and rank (2-10, J, Q, K, A).".to_string(),
            GameError::DuplicateCard(_) => {
                "This card has already been used. Please choose a different card.".to_string()
            }
            GameError::NoDealerCard => "Please deal the Dealer's card first.".to_string(),
            GameError::NoPendingCard => format!(
                "Enter the suit and rank for Dealer's card (e.g., `{}dealer spades Q`)",
                self.prefix
            ),
        };
        vec![msg]
    }

    fn used_cards(&self, cards: &[Card]) -> String {
        format!(
            "Cards that have been used so far:\n{}",
            format_used_cards(cards, self.style)
        )
    }

    fn continue_prompt(&self) -> String {
        format!(
            "Enter `{}player <suit> <rank>` to continue the game.",
            self.prefix
        )
    }

    fn exhausted(&self) -> String {
        "No more cards left in the deck!".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilo_engine::cards::Rank;
    use hilo_engine::session::GameSession;

    fn renderer() -> Renderer {
        Renderer::new("!", SuitStyle::Unicode)
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(8.0 / 51.0), "15.69%");
    }

    #[test]
    fn percent_rounds_halves_up() {
        // 32-card deck, odd counts land exactly on .xx5
        assert_eq!(format_percent(1.0 / 32.0), "3.13%");
        assert_eq!(format_percent(5.0 / 32.0), "15.63%");
        assert_eq!(format_percent(3.0 / 32.0), "9.38%");
    }

    #[test]
    fn forced_ascii_renderer() {
        let r = Renderer::new("!", SuitStyle::detect(true));
        assert_eq!(r.style(), SuitStyle::Ascii);
        assert_eq!(r.suit_legend(), "'spades': 's', 'hearts': 'h', 'diamonds': 'd', 'clubs': 'c'");
    }

    #[test]
    fn ten_renders_as_two_digits() {
        let c = Card::new(Suit::Hearts, Rank::Ten);
        assert_eq!(format_card(&c, SuitStyle::Unicode), "10 ♥");
    }

    #[test]
    fn legend_lists_all_suits() {
        assert_eq!(
            renderer().suit_legend(),
            "'spades': '♠', 'hearts': '♥', 'diamonds': '♦', 'clubs': '♣'"
        );
    }

    #[test]
    fn dealer_reply_shows_odds_and_history() {
        let mut game = GameSession::new();
        let reveal = game.set_dealer_card("spades", "Q").unwrap();
        let msgs = renderer().dealer(&reveal);
        assert_eq!(msgs[0], "Based on dealer's card: Lower: 78.43%, Higher: 15.69%");
        assert_eq!(msgs[1], "Cards that have been used so far:\nQ ♠");
        assert!(msgs[2].contains("!player <suit> <rank>"));
        assert_eq!(msgs.len(), 3);
    }

    #[test]
    fn inherited_reply_announces_the_card() {
        let mut game = GameSession::new();
        game.set_dealer_card("spades", "2").unwrap();
        game.set_player_card("clubs", "9").unwrap();
        let reveal = game.inherit_dealer().unwrap();
        let msgs = renderer().dealer(&reveal);
        assert_eq!(msgs[0], "Dealer inherits the player's last card: 9 ♣");
        assert!(msgs[1].starts_with("Based on dealer's card:"));
    }

    #[test]
    fn round_reply_names_the_winner() {
        let mut game = GameSession::new();
        game.set_dealer_card("spades", "5").unwrap();
        let tie = game.set_player_card("hearts", "5").unwrap();
        assert_eq!(
            renderer().round(&tie)[0],
            "It's a tie! Both Dealer and Player drew 5."
        );
        let win = game.set_player_card("hearts", "K").unwrap();
        let msgs = renderer().round(&win);
        assert_eq!(msgs[0], "Player wins this round!");
        assert_eq!(msgs[1], "Cards that have been used so far:\n5 ♠\n5 ♥\nK ♥");
        assert!(msgs[2].starts_with("Updated probabilities: Lower: "));
    }

    #[test]
    fn errors_use_configured_prefix() {
        let r = Renderer::new("?", SuitStyle::Ascii);
        let msgs = r.error(&GameError::NoPendingCard);
        assert_eq!(
            msgs,
            vec!["Enter the suit and rank for Dealer's card (e.g., `?dealer spades Q`)"]
        );
    }
}
