//! Roulette.
//!
//! One spin draws a pocket; every selected bet is evaluated against it
//! independently. Bets are either a specific pocket label or a color.
//! The wheel layout (single or double zero) is configurable; European is
//! the default.

use super::weighted::{spin_pocket, Color, Pocket, RouletteVariant};
use super::{CasinoGame, GameError};
use crate::rng::GameRng;
use parlor_types::{GameType, Resolution, RoundOutcome};
use serde::{Deserialize, Serialize};

/// A single bet: a pocket label or a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouletteBet {
    Pocket(Pocket),
    Color(Color),
}

impl RouletteBet {
    /// True when this bet matches the drawn pocket.
    fn wins(self, result: Pocket) -> bool {
        match self {
            RouletteBet::Pocket(pocket) => pocket == result,
            RouletteBet::Color(color) => color == result.color(),
        }
    }
}

/// Round configuration: wheel layout plus the set of simultaneous bets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouletteConfig {
    pub variant: RouletteVariant,
    pub bets: Vec<RouletteBet>,
}

/// Per-bet evaluation of a finished spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetResult {
    pub bet: RouletteBet,
    pub won: bool,
}

/// One round's state.
#[derive(Clone, Debug)]
pub struct RouletteState {
    pub variant: RouletteVariant,
    pub bets: Vec<RouletteBet>,
    /// The drawn pocket, present once the wheel has been spun.
    pub result: Option<Pocket>,
    pub bet_results: Vec<BetResult>,
}

/// The only action: spin the wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouletteAction {
    Spin,
}

fn validate_bet(bet: RouletteBet, variant: RouletteVariant) -> Result<(), GameError> {
    match bet {
        RouletteBet::Pocket(Pocket::Number(n)) if !(1..=36).contains(&n) => {
            Err(GameError::InvalidConfig("pocket number out of range"))
        }
        RouletteBet::Pocket(Pocket::DoubleZero) if variant == RouletteVariant::European => {
            Err(GameError::InvalidConfig("double zero needs an American wheel"))
        }
        _ => Ok(()),
    }
}

pub struct Roulette;

impl CasinoGame for Roulette {
    type Config = RouletteConfig;
    type State = RouletteState;
    type Action = RouletteAction;

    const GAME_TYPE: GameType = GameType::Roulette;

    fn start(config: &Self::Config, _rng: &mut GameRng) -> Result<Self::State, GameError> {
        if config.bets.is_empty() {
            return Err(GameError::MissingBet);
        }
        for &bet in &config.bets {
            validate_bet(bet, config.variant)?;
        }
        Ok(RouletteState {
            variant: config.variant,
            bets: config.bets.clone(),
            result: None,
            bet_results: Vec::new(),
        })
    }

    fn apply(
        state: &mut Self::State,
        action: Self::Action,
        rng: &mut GameRng,
    ) -> Result<Option<Resolution>, GameError> {
        let RouletteAction::Spin = action;
        if state.result.is_some() {
            return Err(GameError::InvalidAction);
        }

        let pocket = spin_pocket(rng, state.variant);
        state.result = Some(pocket);
        state.bet_results = state
            .bets
            .iter()
            .map(|&bet| BetResult {
                bet,
                won: bet.wins(pocket),
            })
            .collect();

        let any_won = state.bet_results.iter().any(|result| result.won);
        let outcome = if any_won {
            RoundOutcome::PlayerWin
        } else {
            RoundOutcome::DealerWin
        };
        Ok(Some(Resolution::new(outcome)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(bets: Vec<RouletteBet>) -> RouletteConfig {
        RouletteConfig {
            variant: RouletteVariant::European,
            bets,
        }
    }

    #[test]
    fn spinning_without_bets_is_rejected() {
        let mut rng = GameRng::from_seed(1);
        let err = Roulette::start(&config(vec![]), &mut rng).unwrap_err();
        assert_eq!(err, GameError::MissingBet);
    }

    #[test]
    fn double_zero_bet_needs_american_wheel() {
        let mut rng = GameRng::from_seed(1);
        let err =
            Roulette::start(&config(vec![RouletteBet::Pocket(Pocket::DoubleZero)]), &mut rng)
                .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));

        let american = RouletteConfig {
            variant: RouletteVariant::American,
            bets: vec![RouletteBet::Pocket(Pocket::DoubleZero)],
        };
        assert!(Roulette::start(&american, &mut rng).is_ok());
    }

    #[test]
    fn out_of_range_number_is_rejected() {
        let mut rng = GameRng::from_seed(1);
        let err = Roulette::start(
            &config(vec![RouletteBet::Pocket(Pocket::Number(37))]),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn color_bet_wins_iff_pocket_color_matches() {
        for seed in 0..100 {
            let mut rng = GameRng::from_seed(seed);
            let mut state =
                Roulette::start(&config(vec![RouletteBet::Color(Color::Red)]), &mut rng).unwrap();
            let res = Roulette::apply(&mut state, RouletteAction::Spin, &mut rng)
                .unwrap()
                .expect("spin resolves");
            let pocket = state.result.unwrap();
            let expected = pocket.color() == Color::Red;
            assert_eq!(state.bet_results[0].won, expected);
            let outcome = if expected {
                RoundOutcome::PlayerWin
            } else {
                RoundOutcome::DealerWin
            };
            assert_eq!(res.outcome, outcome);
        }
    }

    #[test]
    fn simultaneous_bets_evaluate_independently() {
        let bets = vec![
            RouletteBet::Color(Color::Red),
            RouletteBet::Color(Color::Black),
            RouletteBet::Pocket(Pocket::Number(17)),
        ];
        let mut rng = GameRng::from_seed(12);
        let mut state = Roulette::start(&config(bets), &mut rng).unwrap();
        Roulette::apply(&mut state, RouletteAction::Spin, &mut rng).unwrap();
        let pocket = state.result.unwrap();
        assert_eq!(state.bet_results.len(), 3);
        // Red and black cannot both win; both lose only on green.
        let red = state.bet_results[0].won;
        let black = state.bet_results[1].won;
        assert!(!(red && black));
        assert_eq!(red || black, pocket.color() != Color::Green);
        assert_eq!(state.bet_results[2].won, pocket == Pocket::Number(17));
    }

    #[test]
    fn spinning_twice_is_invalid() {
        let mut rng = GameRng::from_seed(3);
        let mut state =
            Roulette::start(&config(vec![RouletteBet::Color(Color::Green)]), &mut rng).unwrap();
        Roulette::apply(&mut state, RouletteAction::Spin, &mut rng).unwrap();
        let err = Roulette::apply(&mut state, RouletteAction::Spin, &mut rng).unwrap_err();
        assert_eq!(err, GameError::InvalidAction);
    }
}
