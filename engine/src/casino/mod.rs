//! Game engines.
//!
//! Each game is a small state machine behind the [`CasinoGame`] trait:
//! a `Config` validated at round start, a `State` owning all round-scoped
//! data, and a typed `Action` vocabulary. Deck construction, shuffling,
//! and hand bookkeeping come from `parlor-types`; valuation lives in
//! [`score`], and the house-edge-weighted distributions in [`weighted`].
//!
//! Games never touch wall-clock time or ambient randomness: time arrives
//! as action payloads (driven by the [`crate::scheduler`]) and randomness
//! through [`GameRng`].

pub mod baccarat;
pub mod blackjack;
pub mod coin_flip;
pub mod crash;
pub mod dice;
pub mod mines;
pub mod plinko;
pub mod registry;
pub mod roulette;
pub mod score;
pub mod session;
pub mod shell_game;
pub mod weighted;


use crate::rng::GameRng;
use parlor_types::{GameType, Resolution};
use thiserror::Error;

pub use session::Session;

/// Errors a game can report. Every failure is synchronous and leaves the
/// session state unchanged; none is fatal beyond the current action.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The action is not valid in the current phase (acting before the
    /// round starts, after it resolves, or on an already-revealed cell).
    #[error("action not valid in the current phase")]
    InvalidAction,
    /// The round requires a bet selection before it can start.
    #[error("no bet selected")]
    MissingBet,
    /// A player-initiated draw found the deck exhausted.
    #[error("deck exhausted")]
    EmptyDeck,
    /// The configuration is out of range for this game.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// A single game's rules engine.
///
/// `start` validates the config and deals the opening state; `apply`
/// advances the machine by one action, returning `Some(resolution)` once
/// the round has resolved. Implementations must not partially mutate
/// state on error.
pub trait CasinoGame {
    /// Per-round configuration (bet selections, board parameters, house
    /// edge).
    type Config: Clone;
    /// All round-scoped state: deck, hands, timers, drawn outcomes.
    type State;
    /// The player- or timer-driven actions this game understands.
    type Action;

    const GAME_TYPE: GameType;

    fn start(config: &Self::Config, rng: &mut GameRng) -> Result<Self::State, GameError>;

    fn apply(
        state: &mut Self::State,
        action: Self::Action,
        rng: &mut GameRng,
    ) -> Result<Option<Resolution>, GameError>;
}
