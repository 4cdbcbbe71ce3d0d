//! Parlor game engines.
//!
//! This crate contains the rules engines and session state machines for a
//! set of single-player casino mini-games. The presentation layer (pages,
//! buttons, animations) lives elsewhere; it calls into these engines and
//! renders their results.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time inside the engines; timed games consume a
//!   logical millisecond clock through the [`scheduler`].
//! - All randomness flows through [`GameRng`], which can be seeded for
//!   reproducible rounds in tests and the simulator.
//!
//! ## Session model
//! Each game implements [`casino::CasinoGame`]; a [`casino::Session`]
//! wraps one game instance and owns its round-scoped state (deck, hands,
//! timers). Sessions move strictly forward (NotStarted → InProgress →
//! Resolved) until an explicit reset, which also cancels any scheduled
//! task belonging to the old round.

pub mod casino;
pub mod rng;
pub mod scheduler;

pub use casino::registry::{GameCategory, GameConfig, GameInfo, GameRegistry};
pub use casino::{CasinoGame, GameError, Session};
pub use rng::GameRng;
pub use scheduler::{DueTask, RoundId, Scheduler, TaskId};
