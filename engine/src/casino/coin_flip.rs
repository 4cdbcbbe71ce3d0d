//! Coin flip.
//!
//! The player picks a side, the coin is flipped once, and a matching
//! side wins. Picking is the round's bet-selection precondition.

use super::{CasinoGame, GameError};
use crate::rng::GameRng;
use parlor_types::{GameType, Resolution, RoundOutcome};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Heads,
    Tails,
}

/// Round configuration; the side pick is required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinFlipConfig {
    pub pick: Option<Side>,
}

/// One round's state.
#[derive(Clone, Copy, Debug)]
pub struct CoinFlipState {
    pub pick: Side,
    pub result: Option<Side>,
}

/// The only action: flip the coin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoinFlipAction {
    Flip,
}

pub struct CoinFlip;

impl CasinoGame for CoinFlip {
    type Config = CoinFlipConfig;
    type State = CoinFlipState;
    type Action = CoinFlipAction;

    const GAME_TYPE: GameType = GameType::CoinFlip;

    fn start(config: &Self::Config, _rng: &mut GameRng) -> Result<Self::State, GameError> {
        let pick = config.pick.ok_or(GameError::MissingBet)?;
        Ok(CoinFlipState { pick, result: None })
    }

    fn apply(
        state: &mut Self::State,
        action: Self::Action,
        rng: &mut GameRng,
    ) -> Result<Option<Resolution>, GameError> {
        let CoinFlipAction::Flip = action;
        if state.result.is_some() {
            return Err(GameError::InvalidAction);
        }
        let result = if rng.gen_bool(0.5) {
            Side::Heads
        } else {
            Side::Tails
        };
        state.result = Some(result);
        let outcome = if result == state.pick {
            RoundOutcome::PlayerWin
        } else {
            RoundOutcome::DealerWin
        };
        Ok(Some(Resolution::new(outcome)))
    }
}
