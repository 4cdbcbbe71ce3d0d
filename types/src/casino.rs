//! Session and outcome vocabulary shared by every game.

use serde::{Deserialize, Serialize};

/// The games the engine knows how to run.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    Baccarat = 0,
    Blackjack = 1,
    CoinFlip = 2,
    Crash = 3,
    Dice = 4,
    Mines = 5,
    Plinko = 6,
    Roulette = 7,
    ShellGame = 8,
}

impl GameType {
    /// All supported games.
    pub const ALL: [GameType; 9] = [
        GameType::Baccarat,
        GameType::Blackjack,
        GameType::CoinFlip,
        GameType::Crash,
        GameType::Dice,
        GameType::Mines,
        GameType::Plinko,
        GameType::Roulette,
        GameType::ShellGame,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GameType::Baccarat => "Baccarat",
            GameType::Blackjack => "Blackjack",
            GameType::CoinFlip => "Coin Flip",
            GameType::Crash => "Crash",
            GameType::Dice => "Dice",
            GameType::Mines => "Mines",
            GameType::Plinko => "Plinko",
            GameType::Roulette => "Roulette",
            GameType::ShellGame => "Shell Game",
        }
    }
}

impl TryFrom<u8> for GameType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Baccarat),
            1 => Ok(Self::Blackjack),
            2 => Ok(Self::CoinFlip),
            3 => Ok(Self::Crash),
            4 => Ok(Self::Dice),
            5 => Ok(Self::Mines),
            6 => Ok(Self::Plinko),
            7 => Ok(Self::Roulette),
            8 => Ok(Self::ShellGame),
            other => Err(other),
        }
    }
}

/// Lifecycle phase of a game session. Transitions are strictly forward
/// (NotStarted → InProgress → Resolved) until an explicit reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    InProgress,
    Resolved,
}

/// Who won the round. `DealerWin` doubles as the banker/house side in
/// games without a literal dealer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerWin,
    DealerWin,
    /// Tie: the bet is returned without profit or loss.
    Push,
}

/// Final result of a round.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub outcome: RoundOutcome,
    /// Payout multiplier when the player's bet pays, quoted the way the
    /// game quotes it: Crash's cash-out value and Plinko's bucket
    /// multiplier are total return per unit staked; Baccarat's is profit
    /// odds (1:1, 0.95:1, 8:1). `None` when nothing pays (losses,
    /// pushes, and games with no payout curve).
    pub multiplier: Option<f64>,
}

impl Resolution {
    pub fn new(outcome: RoundOutcome) -> Self {
        Self {
            outcome,
            multiplier: None,
        }
    }

    pub fn with_multiplier(outcome: RoundOutcome, multiplier: f64) -> Self {
        Self {
            outcome,
            multiplier: Some(multiplier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_type_round_trips_through_u8() {
        for game in GameType::ALL {
            assert_eq!(GameType::try_from(game as u8), Ok(game));
        }
        assert_eq!(GameType::try_from(9), Err(9));
    }

    #[test]
    fn session_phase_defaults_to_not_started() {
        assert_eq!(SessionPhase::default(), SessionPhase::NotStarted);
    }

    #[test]
    fn resolution_constructors() {
        let push = Resolution::new(RoundOutcome::Push);
        assert_eq!(push.multiplier, None);
        let win = Resolution::with_multiplier(RoundOutcome::PlayerWin, 1.95);
        assert_eq!(win.multiplier, Some(1.95));
    }
}
