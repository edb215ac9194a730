//! # hilo-engine: Hi-Lo Card Game Core
//!
//! Single-deck game-state engine for a chat-driven Hi-Lo guessing game. One
//! card is revealed as the dealer card, players reveal cards against it, and
//! the engine reports the round winner together with the odds that the next
//! card ranks lower or higher than the current reference.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the chat vocabulary
//! - [`deck`] - Remaining deck, card removal and Hi-Lo probabilities
//! - [`rules`] - Rank comparison between dealer and player cards
//! - [`session`] - Game session state and the turn protocol
//! - [`transcript`] - JSONL audit trail of reveals
//! - [`errors`] - Error types for session commands
//!
//! ## Quick Start
//!
//! ```rust
//! use hilo_engine::session::{Command, GameSession, Outcome};
//!
//! let mut game = GameSession::new();
//! game.apply(Command::Start).unwrap();
//!
//! let outcome = game
//!     .apply(Command::SetDealerCard { suit: "spades".into(), rank: "Q".into() })
//!     .unwrap();
//! if let Outcome::Dealer(reveal) = outcome {
//!     assert_eq!(reveal.remaining, 51);
//!     assert_eq!(reveal.odds.higher_count, 8);
//! }
//! ```
//!
//! ## Deck Queries
//!
//! The deck functions are pure; they never mutate their input or log:
//!
//! ```rust
//! use hilo_engine::cards::{Card, Rank, Suit};
//! use hilo_engine::deck::{calculate_probabilities, initialize_deck, remove_card};
//!
//! let deck = initialize_deck();
//! let two = Card::new(Suit::Clubs, Rank::Two);
//! let deck = remove_card(&deck, &two);
//! let odds = calculate_probabilities(&deck, &two);
//! assert_eq!(odds.lower, 0.0);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod rules;
pub mod session;
pub mod transcript;
