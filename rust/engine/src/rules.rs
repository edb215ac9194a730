use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Outcome of comparing a player card against the dealer card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundWinner {
    Dealer,
    Player,
    Tie,
}

impl fmt::Display for RoundWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoundWinner::Dealer => "Dealer",
            RoundWinner::Player => "Player",
            RoundWinner::Tie => "Tie",
        })
    }
}

/// Compares two cards by rank alone.
///
/// The reference (dealer) card wins when it ranks strictly higher, the other
/// (player) card wins when it ranks strictly higher, and equal ranks tie
/// whatever the suits.
///
/// # Examples
///
/// ```
/// use hilo_engine::cards::{Card, Rank, Suit};
/// use hilo_engine::rules::{compare_ranks, RoundWinner};
///
/// let dealer = Card::new(Suit::Spades, Rank::Five);
/// assert_eq!(compare_ranks(&dealer, &Card::new(Suit::Hearts, Rank::Two)), RoundWinner::Dealer);
/// assert_eq!(compare_ranks(&dealer, &Card::new(Suit::Hearts, Rank::Ace)), RoundWinner::Player);
/// assert_eq!(compare_ranks(&dealer, &Card::new(Suit::Hearts, Rank::Five)), RoundWinner::Tie);
/// ```
pub fn compare_ranks(reference: &Card, other: &Card) -> RoundWinner {
    match reference.rank.index().cmp(&other.rank.index()) {
        Ordering::Greater => RoundWinner::Dealer,
        Ordering::Less => RoundWinner::Player,
        Ordering::Equal => RoundWinner::Tie,
    }
}
