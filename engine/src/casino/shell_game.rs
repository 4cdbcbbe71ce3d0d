//! Shell game (cup and ball).
//!
//! The ball is shown under one of three cups, the cups are mixed for a
//! fixed delay, and the player guesses where the ball ended up. Both the
//! show and mixing phases advance on scheduler tasks; the ball's final
//! cup is re-drawn when mixing ends, exactly like the original table's
//! shuffle.

use super::{CasinoGame, GameError};
use crate::rng::GameRng;
use parlor_types::{GameType, Resolution, RoundOutcome};
use serde::{Deserialize, Serialize};

/// Cups on the table.
pub const CUP_COUNT: usize = 3;
/// How long the ball is shown before mixing starts.
pub const SHOW_DURATION_MS: u64 = 800;
/// How long the cups mix before guessing opens.
pub const MIX_DURATION_MS: u64 = 2_000;

/// Shell game has no pre-round knobs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellGameConfig;

/// Presentation phases within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellPhase {
    /// The ball's starting cup is visible.
    Show,
    /// Cups are moving; the ball is hidden.
    Mixing,
    /// The player may guess.
    Guessing,
    Resolved,
}

/// One round's state.
#[derive(Clone, Copy, Debug)]
pub struct ShellGameState {
    /// Where the ball is shown before mixing.
    pub initial_cup: usize,
    /// Where the ball lands after mixing; drawn when mixing ends.
    pub final_cup: Option<usize>,
    pub phase: ShellPhase,
}

/// Timer-driven and player actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellGameAction {
    /// Show → Mixing (fires [`SHOW_DURATION_MS`] after the start).
    StartMixing,
    /// Mixing → Guessing; draws the final cup (fires [`MIX_DURATION_MS`]
    /// later).
    FinishMixing,
    /// The player's pick.
    Guess(usize),
}

pub struct ShellGame;

impl CasinoGame for ShellGame {
    type Config = ShellGameConfig;
    type State = ShellGameState;
    type Action = ShellGameAction;

    const GAME_TYPE: GameType = GameType::ShellGame;

    fn start(_config: &Self::Config, rng: &mut GameRng) -> Result<Self::State, GameError> {
        Ok(ShellGameState {
            initial_cup: rng.gen_range(0..CUP_COUNT),
            final_cup: None,
            phase: ShellPhase::Show,
        })
    }

    fn apply(
        state: &mut Self::State,
        action: Self::Action,
        rng: &mut GameRng,
    ) -> Result<Option<Resolution>, GameError> {
        match (state.phase, action) {
            (ShellPhase::Show, ShellGameAction::StartMixing) => {
                state.phase = ShellPhase::Mixing;
                Ok(None)
            }
            (ShellPhase::Mixing, ShellGameAction::FinishMixing) => {
                state.final_cup = Some(rng.gen_range(0..CUP_COUNT));
                state.phase = ShellPhase::Guessing;
                Ok(None)
            }
            (ShellPhase::Guessing, ShellGameAction::Guess(cup)) => {
                if cup >= CUP_COUNT {
                    return Err(GameError::InvalidAction);
                }
                state.phase = ShellPhase::Resolved;
                let outcome = if Some(cup) == state.final_cup {
                    RoundOutcome::PlayerWin
                } else {
                    RoundOutcome::DealerWin
                };
                Ok(Some(Resolution::new(outcome)))
            }
            _ => Err(GameError::InvalidAction),
        }
    }
}
