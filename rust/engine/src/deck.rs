use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::cards::{full_deck, Card};

/// The cards still available to be drawn in the current game.
///
/// A deck only ever shrinks: cards are removed as they are revealed and the
/// deck is rebuilt from scratch when a game starts or is reset. It never holds
/// the same `(suit, rank)` twice.
///
/// # Examples
///
/// ```
/// use hilo_engine::cards::{Card, Rank, Suit};
/// use hilo_engine::deck::Deck;
///
/// let deck = Deck::new();
/// assert_eq!(deck.len(), 52);
///
/// let queen = Card::new(Suit::Spades, Rank::Queen);
/// let rest = deck.without(&queen);
/// assert_eq!(rest.len(), 51);
/// assert!(!rest.contains(&queen));
/// // removing twice is a no-op
/// assert_eq!(rest.without(&queen), rest);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full 52-card deck in suit-major, rank-minor order.
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns a copy of this deck minus every card equal to `card`.
    pub fn without(&self, card: &Card) -> Deck {
        Deck {
            cards: self.cards.iter().copied().filter(|c| c != card).collect(),
        }
    }

    /// Hi-Lo odds of the next draw against `reference`.
    pub fn probabilities(&self, reference: &Card) -> Probabilities {
        let pivot = reference.rank.index();
        let mut lower_count = 0;
        let mut higher_count = 0;
        for c in &self.cards {
            let idx = c.rank.index();
            if idx < pivot {
                lower_count += 1;
            } else if idx > pivot {
                higher_count += 1;
            }
        }
        let total = self.cards.len();
        let (lower, higher) = if total > 0 {
            (
                lower_count as f64 / total as f64,
                higher_count as f64 / total as f64,
            )
        } else {
            (0.0, 0.0)
        };
        Probabilities {
            lower,
            higher,
            lower_count,
            higher_count,
            tie_count: total - lower_count - higher_count,
            total,
        }
    }

    /// Remaining cards in a reproducible random order for `seed`.
    pub fn shuffled(&self, seed: u64) -> Vec<Card> {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut order = self.cards.clone();
        order.shuffle(&mut rng);
        order
    }
}

/// Chance that the next card drawn ranks strictly below or above a reference card.
///
/// Cards tied with the reference rank count in `total` only, so
/// `lower + higher <= 1`. An empty deck yields zero for both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Probabilities {
    pub lower: f64,
    pub higher: f64,
    pub lower_count: usize,
    pub higher_count: usize,
    pub tie_count: usize,
    pub total: usize,
}

pub fn initialize_deck() -> Deck {
    Deck::new()
}

pub fn remove_card(deck: &Deck, card: &Card) -> Deck {
    deck.without(card)
}

pub fn calculate_probabilities(deck: &Deck, reference: &Card) -> Probabilities {
    deck.probabilities(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn enumeration_is_suit_major() {
        let d = Deck::new();
        assert_eq!(d.cards()[0], Card::new(Suit::Spades, Rank::Two));
        assert_eq!(d.cards()[12], Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(d.cards()[13], Card::new(Suit::Hearts, Rank::Two));
        assert_eq!(d.cards()[51], Card::new(Suit::Clubs, Rank::Ace));
    }

    #[test]
    fn without_leaves_input_untouched() {
        let d = Deck::new();
        let ace = Card::new(Suit::Clubs, Rank::Ace);
        let _ = d.without(&ace);
        assert!(d.contains(&ace));
        assert_eq!(d.len(), 52);
    }

    #[test]
    fn tie_count_fills_the_gap() {
        let p = Deck::new().probabilities(&Card::new(Suit::Hearts, Rank::Seven));
        assert_eq!(p.lower_count, 20);
        assert_eq!(p.higher_count, 28);
        assert_eq!(p.tie_count, 4);
        assert_eq!(p.total, 52);
    }

    #[test]
    fn shuffled_keeps_the_same_cards() {
        let d = Deck::new().without(&Card::new(Suit::Spades, Rank::Two));
        let mut order = d.shuffled(9);
        assert_eq!(order.len(), 51);
        order.sort();
        let mut expected = d.cards().to_vec();
        expected.sort();
        assert_eq!(order, expected);
    }
}
