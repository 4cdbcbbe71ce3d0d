//! Common types for the parlor mini-game engines.
//!
//! This crate holds the data model shared by every game: cards, decks,
//! hands, and the session/outcome vocabulary. It contains no game rules;
//! those live in `parlor-engine`.

pub mod cards;
pub mod casino;

pub use cards::{Card, Deck, Hand, Rank, Suit};
pub use casino::{GameType, Resolution, RoundOutcome, SessionPhase};
