//! Dice.
//!
//! Player die against dealer die, higher face wins, equal faces push.
//! The rolling animation is presentation-side; the engine resolves on
//! the single Roll action.

use super::{CasinoGame, GameError};
use crate::rng::GameRng;
use parlor_types::{GameType, Resolution, RoundOutcome};
use serde::{Deserialize, Serialize};

/// How long the presentation tumbles the dice before showing the result.
pub const ROLL_DURATION_MS: u64 = 2_000;

/// Dice has no pre-round knobs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceConfig;

/// One round's state; the dice hold their final faces once rolled.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiceState {
    pub player_die: Option<u8>,
    pub dealer_die: Option<u8>,
}

/// The only action: roll both dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiceAction {
    Roll,
}

pub struct Dice;

impl CasinoGame for Dice {
    type Config = DiceConfig;
    type State = DiceState;
    type Action = DiceAction;

    const GAME_TYPE: GameType = GameType::Dice;

    fn start(_config: &Self::Config, _rng: &mut GameRng) -> Result<Self::State, GameError> {
        Ok(DiceState::default())
    }

    fn apply(
        state: &mut Self::State,
        action: Self::Action,
        rng: &mut GameRng,
    ) -> Result<Option<Resolution>, GameError> {
        let DiceAction::Roll = action;
        if state.player_die.is_some() {
            return Err(GameError::InvalidAction);
        }
        let player = rng.roll_die();
        let dealer = rng.roll_die();
        state.player_die = Some(player);
        state.dealer_die = Some(dealer);
        let outcome = if player > dealer {
            RoundOutcome::PlayerWin
        } else if player < dealer {
            RoundOutcome::DealerWin
        } else {
            RoundOutcome::Push
        };
        Ok(Some(Resolution::new(outcome)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_resolves_by_comparing_faces() {
        for seed in 0..100 {
            let mut rng = GameRng::from_seed(seed);
            let mut state = Dice::start(&DiceConfig, &mut rng).unwrap();
            let res = Dice::apply(&mut state, DiceAction::Roll, &mut rng)
                .unwrap()
                .expect("roll resolves");
            let player = state.player_die.unwrap();
            let dealer = state.dealer_die.unwrap();
            assert!((1..=6).contains(&player));
            assert!((1..=6).contains(&dealer));
            let expected = if player > dealer {
                RoundOutcome::PlayerWin
            } else if player < dealer {
                RoundOutcome::DealerWin
            } else {
                RoundOutcome::Push
            };
            assert_eq!(res.outcome, expected);
        }
    }

    #[test]
    fn rolling_twice_is_invalid() {
        let mut rng = GameRng::from_seed(1);
        let mut state = Dice::start(&DiceConfig, &mut rng).unwrap();
        Dice::apply(&mut state, DiceAction::Roll, &mut rng).unwrap();
        let err = Dice::apply(&mut state, DiceAction::Roll, &mut rng).unwrap_err();
        assert_eq!(err, GameError::InvalidAction);
    }
}
