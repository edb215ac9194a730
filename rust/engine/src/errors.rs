use thiserror::Error;

use crate::cards::Card;

/// User-correctable failures of a single session command.
/// None of them mutates the session; the command is simply rejected.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GameError {
    #[error("Invalid card: suit '{suit}', rank '{rank}'")]
    InvalidCard { suit: String, rank: String },
    #[error("Card already used: {0}")]
    DuplicateCard(Card),
    #[error("No dealer card has been dealt yet")]
    NoDealerCard,
    #[error("No player card to inherit as dealer card")]
    NoPendingCard,
}
