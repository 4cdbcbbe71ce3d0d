//! Baccarat.
//!
//! No player choices after the bet: one Deal action runs the whole round.
//! Two cards each, dealt alternating player-banker; a natural 8 or 9
//! stops the deal, otherwise the player draws on a total of 5 or less and
//! the banker follows the fixed third-card table.
//!
//! Payouts: Player 1:1, Banker 1:1 less 5% commission, Tie 8:1. A bet
//! whose condition does not match the result pays nothing.

use super::score::{baccarat_card_value, baccarat_total, is_natural};
use super::{CasinoGame, GameError};
use crate::rng::GameRng;
use parlor_types::{Card, GameType, Hand, Resolution, RoundOutcome};
use serde::{Deserialize, Serialize};

/// Commission withheld from winning banker bets.
const BANKER_COMMISSION: f64 = 0.05;

/// Tie bets pay 8:1.
const TIE_PAYOUT: f64 = 8.0;

/// The three bet options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaccaratBet {
    Player,
    Banker,
    Tie,
}

/// Round configuration; the bet selection is required before dealing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaccaratConfig {
    pub bet: Option<BaccaratBet>,
}

/// One round's state.
#[derive(Clone, Debug)]
pub struct BaccaratState {
    pub bet: BaccaratBet,
    pub player: Hand,
    pub banker: Hand,
    /// The player's third card, if one was drawn (drives the banker
    /// table).
    pub player_third: Option<Card>,
    pub resolved: bool,
}

/// The only action: deal and resolve the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaccaratAction {
    Deal,
}

/// The fixed banker third-card table.
///
/// With no player third card the banker simply draws on 5 or less. With
/// one, the decision depends on both the banker total and the value of
/// the player's third card.
fn banker_draws(banker_total: u8, player_third: Option<u8>) -> bool {
    match player_third {
        None => banker_total <= 5,
        Some(third) => match banker_total {
            0..=2 => true,
            3 => third != 8,
            4 => (2..=7).contains(&third),
            5 => (4..=7).contains(&third),
            6 => third == 6 || third == 7,
            _ => false,
        },
    }
}

/// Payout multiplier for a winning bet.
fn bet_payout(bet: BaccaratBet) -> f64 {
    match bet {
        BaccaratBet::Player => 1.0,
        BaccaratBet::Banker => 1.0 - BANKER_COMMISSION,
        BaccaratBet::Tie => TIE_PAYOUT,
    }
}

/// True when the bet's condition matches the table result.
fn bet_matches(bet: BaccaratBet, outcome: RoundOutcome) -> bool {
    matches!(
        (bet, outcome),
        (BaccaratBet::Player, RoundOutcome::PlayerWin)
            | (BaccaratBet::Banker, RoundOutcome::DealerWin)
            | (BaccaratBet::Tie, RoundOutcome::Push)
    )
}

pub struct Baccarat;

impl CasinoGame for Baccarat {
    type Config = BaccaratConfig;
    type State = BaccaratState;
    type Action = BaccaratAction;

    const GAME_TYPE: GameType = GameType::Baccarat;

    fn start(config: &Self::Config, _rng: &mut GameRng) -> Result<Self::State, GameError> {
        let bet = config.bet.ok_or(GameError::MissingBet)?;
        Ok(BaccaratState {
            bet,
            player: Hand::new(),
            banker: Hand::new(),
            player_third: None,
            resolved: false,
        })
    }

    fn apply(
        state: &mut Self::State,
        action: Self::Action,
        rng: &mut GameRng,
    ) -> Result<Option<Resolution>, GameError> {
        let BaccaratAction::Deal = action;
        if state.resolved {
            return Err(GameError::InvalidAction);
        }

        let mut deck = rng.create_deck();
        // Alternating deal: player, banker, player, banker. A fresh deck
        // cannot run out inside one baccarat round (six cards at most).
        for _ in 0..2 {
            for hand in [&mut state.player, &mut state.banker] {
                if let Some(card) = deck.draw() {
                    hand.push(card);
                }
            }
        }

        // Naturals end the round with no further draws for either side.
        if !is_natural(&state.player) && !is_natural(&state.banker) {
            if baccarat_total(&state.player) <= 5 {
                if let Some(card) = deck.draw() {
                    state.player.push(card);
                    state.player_third = Some(card);
                }
            }
            let third_value = state.player_third.map(baccarat_card_value);
            if banker_draws(baccarat_total(&state.banker), third_value) {
                if let Some(card) = deck.draw() {
                    state.banker.push(card);
                }
            }
        }

        let player_total = baccarat_total(&state.player);
        let banker_total = baccarat_total(&state.banker);
        let outcome = if player_total > banker_total {
            RoundOutcome::PlayerWin
        } else if player_total < banker_total {
            RoundOutcome::DealerWin
        } else {
            RoundOutcome::Push
        };

        state.resolved = true;
        let resolution = if bet_matches(state.bet, outcome) {
            Resolution::with_multiplier(outcome, bet_payout(state.bet))
        } else {
            Resolution::new(outcome)
        };
        Ok(Some(resolution))
    }
}
