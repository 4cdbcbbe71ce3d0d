//! Mines.
//!
//! A 5×5 board with a configurable number of hidden mines. Revealing a
//! safe cell keeps the round going; revealing a mine loses it; clearing
//! every safe cell wins it. Take-profit resolves the round early as a
//! player win.

use super::{CasinoGame, GameError};
use crate::rng::GameRng;
use parlor_types::{GameType, Resolution, RoundOutcome};
use serde::{Deserialize, Serialize};

/// Board edge length.
pub const GRID_SIZE: usize = 5;
/// Cells on the board.
pub const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Round configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinesConfig {
    /// Hidden mines; at least one cell must stay safe.
    pub mines: u8,
}

impl Default for MinesConfig {
    fn default() -> Self {
        Self { mines: 5 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinesStatus {
    Running,
    Won,
    Lost,
}

/// One round's state.
#[derive(Clone, Debug)]
pub struct MinesState {
    /// `true` where a mine sits.
    pub mines: [bool; TOTAL_CELLS],
    /// `true` once the player has revealed the cell.
    pub revealed: [bool; TOTAL_CELLS],
    pub mine_count: u8,
    pub status: MinesStatus,
}

impl MinesState {
    /// Safe cells revealed so far.
    pub fn safe_revealed(&self) -> usize {
        self.revealed
            .iter()
            .zip(self.mines.iter())
            .filter(|(revealed, mine)| **revealed && !**mine)
            .count()
    }

    fn safe_total(&self) -> usize {
        TOTAL_CELLS - self.mine_count as usize
    }
}

/// Player actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinesAction {
    /// Reveal the cell at this board index (row-major).
    Reveal(usize),
    /// Stop and bank the progress so far.
    TakeProfit,
}

pub struct Mines;

impl CasinoGame for Mines {
    type Config = MinesConfig;
    type State = MinesState;
    type Action = MinesAction;

    const GAME_TYPE: GameType = GameType::Mines;

    fn start(config: &Self::Config, rng: &mut GameRng) -> Result<Self::State, GameError> {
        let count = config.mines as usize;
        if count == 0 || count >= TOTAL_CELLS {
            return Err(GameError::InvalidConfig("mine count must be 1..=24"));
        }
        // Partial Fisher–Yates over the cell indices; the first `count`
        // entries become mines. Unbiased, no rejection loop.
        let mut cells: [usize; TOTAL_CELLS] = std::array::from_fn(|i| i);
        for i in 0..count {
            let j = rng.gen_range(i..TOTAL_CELLS);
            cells.swap(i, j);
        }
        let mut mines = [false; TOTAL_CELLS];
        for &cell in &cells[..count] {
            mines[cell] = true;
        }
        Ok(MinesState {
            mines,
            revealed: [false; TOTAL_CELLS],
            mine_count: config.mines,
            status: MinesStatus::Running,
        })
    }

    fn apply(
        state: &mut Self::State,
        action: Self::Action,
        _rng: &mut GameRng,
    ) -> Result<Option<Resolution>, GameError> {
        if state.status != MinesStatus::Running {
            return Err(GameError::InvalidAction);
        }
        match action {
            MinesAction::Reveal(cell) => {
                if cell >= TOTAL_CELLS || state.revealed[cell] {
                    return Err(GameError::InvalidAction);
                }
                state.revealed[cell] = true;
                if state.mines[cell] {
                    state.status = MinesStatus::Lost;
                    return Ok(Some(Resolution::new(RoundOutcome::DealerWin)));
                }
                if state.safe_revealed() == state.safe_total() {
                    state.status = MinesStatus::Won;
                    return Ok(Some(Resolution::new(RoundOutcome::PlayerWin)));
                }
                Ok(None)
            }
            MinesAction::TakeProfit => {
                state.status = MinesStatus::Won;
                Ok(Some(Resolution::new(RoundOutcome::PlayerWin)))
            }
        }
    }
}
