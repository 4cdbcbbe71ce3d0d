//! Blackjack.
//!
//! Single hand, no splits, doubles, or insurance. The player hits or
//! stands; on stand the dealer draws to 17 (standing on all 17s) and the
//! higher non-busted total wins. An exhausted deck halts the dealer's
//! draw loop; only a player hit on an empty deck is an error.

use super::score::blackjack_total;
use super::{CasinoGame, GameError};
use crate::rng::GameRng;
use parlor_types::{Deck, GameType, Hand, Resolution, RoundOutcome};
use serde::{Deserialize, Serialize};

/// Dealer draws while below this total.
const DEALER_STAND: u8 = 17;

/// Blackjack has no pre-round knobs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackjackConfig;

/// Turn phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    DealerTurn,
    Resolved,
}

/// One round's state.
#[derive(Clone, Debug)]
pub struct BlackjackState {
    pub deck: Deck,
    pub player: Hand,
    pub dealer: Hand,
    pub phase: Phase,
}

/// Player actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlackjackAction {
    Hit,
    Stand,
}

impl BlackjackState {
    fn resolve(&mut self) -> Resolution {
        self.phase = Phase::Resolved;
        let player = blackjack_total(&self.player);
        let dealer = blackjack_total(&self.dealer);
        let outcome = if dealer.is_bust() {
            RoundOutcome::PlayerWin
        } else if player.total == dealer.total {
            RoundOutcome::Push
        } else if player.total > dealer.total {
            RoundOutcome::PlayerWin
        } else {
            RoundOutcome::DealerWin
        };
        Resolution::new(outcome)
    }
}

pub struct Blackjack;

impl CasinoGame for Blackjack {
    type Config = BlackjackConfig;
    type State = BlackjackState;
    type Action = BlackjackAction;

    const GAME_TYPE: GameType = GameType::Blackjack;

    fn start(_config: &Self::Config, rng: &mut GameRng) -> Result<Self::State, GameError> {
        let mut deck = rng.create_deck();
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        // Alternating deal: player, dealer, player, dealer.
        for _ in 0..2 {
            for hand in [&mut player, &mut dealer] {
                // A fresh 52-card deck cannot run out here.
                if let Some(card) = deck.draw() {
                    hand.push(card);
                }
            }
        }
        Ok(BlackjackState {
            deck,
            player,
            dealer,
            phase: Phase::PlayerTurn,
        })
    }

    fn apply(
        state: &mut Self::State,
        action: Self::Action,
        _rng: &mut GameRng,
    ) -> Result<Option<Resolution>, GameError> {
        if state.phase != Phase::PlayerTurn {
            return Err(GameError::InvalidAction);
        }
        match action {
            BlackjackAction::Hit => {
                let card = state.deck.draw().ok_or(GameError::EmptyDeck)?;
                state.player.push(card);
                if blackjack_total(&state.player).is_bust() {
                    state.phase = Phase::Resolved;
                    return Ok(Some(Resolution::new(RoundOutcome::DealerWin)));
                }
                Ok(None)
            }
            BlackjackAction::Stand => {
                state.phase = Phase::DealerTurn;
                // Exhausting the deck halts the loop; it is not an error.
                while blackjack_total(&state.dealer).total < DEALER_STAND {
                    match state.deck.draw() {
                        Some(card) => state.dealer.push(card),
                        None => break,
                    }
                }
                Ok(Some(state.resolve()))
            }
        }
    }
}
