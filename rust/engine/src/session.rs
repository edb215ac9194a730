use std::collections::HashSet;

use serde::Serialize;

use crate::cards::Card;
use crate::deck::{Deck, Probabilities};
use crate::errors::GameError;
use crate::rules::{compare_ranks, RoundWinner};

/// Ordered log of every card revealed in the current game.
///
/// The log keeps entries in draw order. [`UsedCards::unique`] is the view
/// shown to players: one entry per `(suit, rank)`, first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedCards {
    log: Vec<Card>,
}

impl UsedCards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.log.push(card);
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.log.contains(card)
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn log(&self) -> &[Card] {
        &self.log
    }

    pub fn unique(&self) -> Vec<Card> {
        let mut seen = HashSet::with_capacity(self.log.len());
        self.log
            .iter()
            .copied()
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

/// Where the turn protocol currently stands.
///
/// A freshly started or reset game waits for its dealer card; once one is
/// set, every player card becomes the next reference and the game keeps
/// waiting for player cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    AwaitingDealerCard,
    AwaitingPlayerCard,
}

/// A command intent, already resolved from chat text by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    SetDealerCard { suit: String, rank: String },
    InheritDealer,
    SetPlayerCard { suit: String, rank: String },
}

/// Result of a dealer card being set, explicitly or by inheritance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealerReveal {
    pub dealer_card: Card,
    /// `true` when the card was taken over from the last player card.
    pub inherited: bool,
    pub odds: Probabilities,
    pub used_cards: Vec<Card>,
    pub remaining: usize,
    pub deck_exhausted: bool,
}

/// Result of one player card being compared against the dealer card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundReport {
    pub previous_dealer: Card,
    pub player_card: Card,
    pub winner: RoundWinner,
    /// Odds for the next draw against the player card, now the reference.
    pub odds: Probabilities,
    pub used_cards: Vec<Card>,
    pub remaining: usize,
    pub deck_exhausted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Outcome {
    Started,
    Reset,
    Dealer(DealerReveal),
    Round(RoundReport),
}

/// State of one Hi-Lo game: remaining deck, used-card log and the two card slots.
///
/// Every operation validates before it writes, so a rejected command leaves
/// the session exactly as it was. Callers own the session and must serialise
/// access to it; it holds no locks of its own.
///
/// # Examples
///
/// ```
/// use hilo_engine::rules::RoundWinner;
/// use hilo_engine::session::GameSession;
///
/// let mut game = GameSession::new();
/// let reveal = game.set_dealer_card("spades", "5").unwrap();
/// assert_eq!(reveal.remaining, 51);
///
/// let round = game.set_player_card("hearts", "5").unwrap();
/// assert_eq!(round.winner, RoundWinner::Tie);
/// assert_eq!(game.dealer_card(), Some(round.player_card));
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    deck: Deck,
    used: UsedCards,
    last_player_card: Option<Card>,
    dealer_card: Option<Card>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            deck: Deck::new(),
            used: UsedCards::new(),
            last_player_card: None,
            dealer_card: None,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn used_cards(&self) -> &UsedCards {
        &self.used
    }

    pub fn dealer_card(&self) -> Option<Card> {
        self.dealer_card
    }

    pub fn last_player_card(&self) -> Option<Card> {
        self.last_player_card
    }

    pub fn phase(&self) -> Phase {
        match self.dealer_card {
            Some(_) => Phase::AwaitingPlayerCard,
            None => Phase::AwaitingDealerCard,
        }
    }

    pub fn is_deck_exhausted(&self) -> bool {
        self.deck.is_empty()
    }

    /// Runs one command to completion.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, GameError> {
        let result = match command {
            Command::Start => {
                self.start();
                Ok(Outcome::Started)
            }
            Command::Reset => {
                self.reset();
                Ok(Outcome::Reset)
            }
            Command::SetDealerCard { suit, rank } => {
                self.set_dealer_card(&suit, &rank).map(Outcome::Dealer)
            }
            Command::InheritDealer => self.inherit_dealer().map(Outcome::Dealer),
            Command::SetPlayerCard { suit, rank } => {
                self.set_player_card(&suit, &rank).map(Outcome::Round)
            }
        };
        if let Err(e) = &result {
            tracing::debug!(error = %e, phase = ?self.phase(), "command rejected");
        }
        result
    }

    pub fn start(&mut self) {
        *self = Self::new();
        tracing::info!("game started");
    }

    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::info!("game reset");
    }

    pub fn set_dealer_card(&mut self, suit: &str, rank: &str) -> Result<DealerReveal, GameError> {
        let card = Card::parse(suit, rank)?;
        self.ensure_unused(&card)?;

        self.dealer_card = Some(card);
        self.draw(card);

        let reveal = self.dealer_reveal(card, false);
        tracing::info!(
            card = %card,
            remaining = reveal.remaining,
            lower = reveal.odds.lower,
            higher = reveal.odds.higher,
            "dealer card set"
        );
        Ok(reveal)
    }

    /// Promotes the last player card to dealer card.
    ///
    /// That card was removed from the deck and logged when it was played, so
    /// neither happens again here.
    pub fn inherit_dealer(&mut self) -> Result<DealerReveal, GameError> {
        let card = self.last_player_card.take().ok_or(GameError::NoPendingCard)?;
        self.dealer_card = Some(card);

        let reveal = self.dealer_reveal(card, true);
        tracing::info!(card = %card, remaining = reveal.remaining, "dealer inherited last player card");
        Ok(reveal)
    }

    pub fn set_player_card(&mut self, suit: &str, rank: &str) -> Result<RoundReport, GameError> {
        let card = Card::parse(suit, rank)?;
        let dealer = self.dealer_card.ok_or(GameError::NoDealerCard)?;
        self.ensure_unused(&card)?;

        self.draw(card);
        let winner = compare_ranks(&dealer, &card);
        // the played card is the next reference whatever the result
        self.last_player_card = Some(card);
        self.dealer_card = Some(card);

        let report = RoundReport {
            previous_dealer: dealer,
            player_card: card,
            winner,
            odds: self.deck.probabilities(&card),
            used_cards: self.used.unique(),
            remaining: self.deck.len(),
            deck_exhausted: self.deck.is_empty(),
        };
        tracing::info!(
            dealer = %dealer,
            player = %card,
            winner = %winner,
            remaining = report.remaining,
            "round played"
        );
        if report.deck_exhausted {
            tracing::info!("deck exhausted");
        }
        Ok(report)
    }

    fn ensure_unused(&self, card: &Card) -> Result<(), GameError> {
        if self.used.contains(card) {
            Err(GameError::DuplicateCard(*card))
        } else {
            Ok(())
        }
    }

    fn draw(&mut self, card: Card) {
        self.deck = self.deck.without(&card);
        self.used.push(card);
    }

    fn dealer_reveal(&self, card: Card, inherited: bool) -> DealerReveal {
        DealerReveal {
            dealer_card: card,
            inherited,
            odds: self.deck.probabilities(&card),
            used_cards: self.used.unique(),
            remaining: self.deck.len(),
            deck_exhausted: self.deck.is_empty(),
        }
    }
}
