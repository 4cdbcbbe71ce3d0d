//! Plinko.
//!
//! The ball's left/right decision at every row is drawn up front; the
//! Step action (fired by the scheduler every [`STEP_INTERVAL_MS`]) walks
//! the ball down one row at a time. The final bucket is the count of
//! rightward bounces, binomial around the center, and pays the linear
//! distance-from-center multiplier from [`super::weighted`].

use super::weighted::plinko_multiplier;
use super::{CasinoGame, GameError};
use crate::rng::GameRng;
use parlor_types::{GameType, Resolution, RoundOutcome};
use serde::{Deserialize, Serialize};

/// Scheduler cadence for the row-by-row drop.
pub const STEP_INTERVAL_MS: u64 = 500;

/// Round configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlinkoConfig {
    /// Peg rows the ball falls through.
    pub rows: u32,
    /// Payout multiplier at the extreme buckets.
    pub max_multiplier: f64,
}

impl Default for PlinkoConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            max_multiplier: 100.0,
        }
    }
}

/// One round's state.
#[derive(Clone, Debug)]
pub struct PlinkoState {
    /// Pre-drawn bounce per row; `true` is rightward.
    pub path: Vec<bool>,
    /// Rows the ball has fallen through so far.
    pub row: usize,
    pub max_multiplier: f64,
    /// Set once the ball reaches the bottom.
    pub multiplier: Option<f64>,
}

impl PlinkoState {
    /// Rightward bounces taken so far; after the last row this is the
    /// bucket index.
    pub fn rights(&self) -> u32 {
        self.path[..self.row].iter().filter(|right| **right).count() as u32
    }
}

/// The only action: advance the ball one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlinkoAction {
    Step,
}

pub struct Plinko;

impl CasinoGame for Plinko {
    type Config = PlinkoConfig;
    type State = PlinkoState;
    type Action = PlinkoAction;

    const GAME_TYPE: GameType = GameType::Plinko;

    fn start(config: &Self::Config, rng: &mut GameRng) -> Result<Self::State, GameError> {
        if config.rows == 0 {
            return Err(GameError::InvalidConfig("row count must be positive"));
        }
        if config.max_multiplier < 1.0 {
            return Err(GameError::InvalidConfig("max multiplier must be at least 1"));
        }
        let path = (0..config.rows).map(|_| rng.gen_bool(0.5)).collect();
        Ok(PlinkoState {
            path,
            row: 0,
            max_multiplier: config.max_multiplier,
            multiplier: None,
        })
    }

    fn apply(
        state: &mut Self::State,
        action: Self::Action,
        _rng: &mut GameRng,
    ) -> Result<Option<Resolution>, GameError> {
        let PlinkoAction::Step = action;
        if state.multiplier.is_some() {
            return Err(GameError::InvalidAction);
        }
        state.row += 1;
        if state.row < state.path.len() {
            return Ok(None);
        }
        let rows = state.path.len() as u32;
        let multiplier = plinko_multiplier(state.rights(), rows, state.max_multiplier);
        state.multiplier = Some(multiplier);
        Ok(Some(Resolution::with_multiplier(
            RoundOutcome::PlayerWin,
            multiplier,
        )))
    }
}
