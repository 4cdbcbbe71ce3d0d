//! Crash.
//!
//! A round draws a hidden crash point from the weighted distribution and
//! grows a live multiplier along `1 + (t/factor)²`. The factor is fitted
//! so the curve cannot meet the crash point before the 3-second minimum
//! round duration. Cashing out locks the live multiplier as the payout;
//! once the curve reaches the crash point the round is lost.
//!
//! Ticks carry the logical elapsed time and are expected to come from a
//! [`crate::scheduler::Scheduler`] at [`TICK_INTERVAL_MS`] cadence.

use super::weighted::{crash_point, growth_factor, live_multiplier, CRASH_MIN_DURATION_MS};
use super::{CasinoGame, GameError};
use crate::rng::GameRng;
use parlor_types::{GameType, Resolution, RoundOutcome};
use serde::{Deserialize, Serialize};

/// Suggested tick cadence for scheduler-driven rounds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Round configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrashConfig {
    /// House edge applied to the drawn crash point, in `[0, 1)`.
    pub house_edge: f64,
}

impl Default for CrashConfig {
    fn default() -> Self {
        Self { house_edge: 0.02 }
    }
}

/// How a running round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrashStatus {
    Running,
    CashedOut,
    Crashed,
}

/// One round's state.
#[derive(Clone, Debug)]
pub struct CrashState {
    /// The hidden crash point (already house-edge adjusted).
    pub crash_point: f64,
    /// Growth factor fitted to the crash point.
    pub factor: f64,
    /// Logical time since the round started.
    pub elapsed_ms: u64,
    /// Live multiplier at `elapsed_ms`.
    pub live: f64,
    pub status: CrashStatus,
}

/// Player and timer actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrashAction {
    /// Advance the curve to the given logical elapsed time.
    Tick { elapsed_ms: u64 },
    /// Lock in the live multiplier.
    CashOut,
}

pub struct Crash;

impl CasinoGame for Crash {
    type Config = CrashConfig;
    type State = CrashState;
    type Action = CrashAction;

    const GAME_TYPE: GameType = GameType::Crash;

    fn start(config: &Self::Config, rng: &mut GameRng) -> Result<Self::State, GameError> {
        if !(0.0..1.0).contains(&config.house_edge) {
            return Err(GameError::InvalidConfig("house edge must be in [0, 1)"));
        }
        let point = crash_point(rng, config.house_edge);
        Ok(CrashState {
            crash_point: point,
            factor: growth_factor(point),
            elapsed_ms: 0,
            live: 1.0,
            status: CrashStatus::Running,
        })
    }

    fn apply(
        state: &mut Self::State,
        action: Self::Action,
        _rng: &mut GameRng,
    ) -> Result<Option<Resolution>, GameError> {
        if state.status != CrashStatus::Running {
            return Err(GameError::InvalidAction);
        }
        match action {
            CrashAction::Tick { elapsed_ms } => {
                // The logical clock is monotonic; late-arriving ticks for
                // earlier instants are absorbed.
                if elapsed_ms > state.elapsed_ms {
                    state.elapsed_ms = elapsed_ms;
                    state.live = live_multiplier(elapsed_ms, state.factor);
                }
                let past_minimum = state.elapsed_ms >= CRASH_MIN_DURATION_MS;
                if past_minimum && state.live >= state.crash_point {
                    state.live = state.crash_point;
                    state.status = CrashStatus::Crashed;
                    return Ok(Some(Resolution::new(RoundOutcome::DealerWin)));
                }
                Ok(None)
            }
            CrashAction::CashOut => {
                state.status = CrashStatus::CashedOut;
                Ok(Some(Resolution::with_multiplier(
                    RoundOutcome::PlayerWin,
                    state.live,
                )))
            }
        }
    }
}
