//! Game registry: the catalog of available games and their defaults.
//!
//! The registry provides:
//! - Centralized listing of supported games
//! - Per-game configuration defaults
//! - Active/inactive game filtering
//! - Metadata for display (names, descriptions, categories)

use super::baccarat::BaccaratConfig;
use super::blackjack::BlackjackConfig;
use super::coin_flip::CoinFlipConfig;
use super::crash::CrashConfig;
use super::dice::DiceConfig;
use super::mines::MinesConfig;
use super::plinko::PlinkoConfig;
use super::roulette::RouletteConfig;
use super::shell_game::ShellGameConfig;
use parlor_types::GameType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-game configuration values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameConfig {
    Baccarat(BaccaratConfig),
    Blackjack(BlackjackConfig),
    CoinFlip(CoinFlipConfig),
    Crash(CrashConfig),
    Dice(DiceConfig),
    Mines(MinesConfig),
    Plinko(PlinkoConfig),
    Roulette(RouletteConfig),
    ShellGame(ShellGameConfig),
}

impl GameConfig {
    /// Create a default configuration for a game type.
    pub fn default_for(game_type: GameType) -> Self {
        match game_type {
            GameType::Baccarat => Self::Baccarat(BaccaratConfig::default()),
            GameType::Blackjack => Self::Blackjack(BlackjackConfig),
            GameType::CoinFlip => Self::CoinFlip(CoinFlipConfig::default()),
            GameType::Crash => Self::Crash(CrashConfig::default()),
            GameType::Dice => Self::Dice(DiceConfig),
            GameType::Mines => Self::Mines(MinesConfig::default()),
            GameType::Plinko => Self::Plinko(PlinkoConfig::default()),
            GameType::Roulette => Self::Roulette(RouletteConfig::default()),
            GameType::ShellGame => Self::ShellGame(ShellGameConfig),
        }
    }

    /// Get the game type for this configuration.
    pub fn game_type(&self) -> GameType {
        match self {
            Self::Baccarat(_) => GameType::Baccarat,
            Self::Blackjack(_) => GameType::Blackjack,
            Self::CoinFlip(_) => GameType::CoinFlip,
            Self::Crash(_) => GameType::Crash,
            Self::Dice(_) => GameType::Dice,
            Self::Mines(_) => GameType::Mines,
            Self::Plinko(_) => GameType::Plinko,
            Self::Roulette(_) => GameType::Roulette,
            Self::ShellGame(_) => GameType::ShellGame,
        }
    }
}

/// Rough grouping for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCategory {
    Cards,
    Wheel,
    Dice,
    Arcade,
}

/// Display metadata for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub category: GameCategory,
}

fn info_for(game_type: GameType) -> GameInfo {
    match game_type {
        GameType::Baccarat => GameInfo {
            name: "Baccarat",
            description: "Player or banker to nine, fixed drawing rules",
            category: GameCategory::Cards,
        },
        GameType::Blackjack => GameInfo {
            name: "Blackjack",
            description: "Hit or stand to 21 against the dealer",
            category: GameCategory::Cards,
        },
        GameType::CoinFlip => GameInfo {
            name: "Coin Flip",
            description: "Call heads or tails",
            category: GameCategory::Arcade,
        },
        GameType::Crash => GameInfo {
            name: "Crash",
            description: "Cash out before the multiplier crashes",
            category: GameCategory::Arcade,
        },
        GameType::Dice => GameInfo {
            name: "Dice",
            description: "Your die against the dealer's",
            category: GameCategory::Dice,
        },
        GameType::Mines => GameInfo {
            name: "Mines",
            description: "Clear the board without hitting a mine",
            category: GameCategory::Arcade,
        },
        GameType::Plinko => GameInfo {
            name: "Plinko",
            description: "Drop the ball, land an edge bucket",
            category: GameCategory::Arcade,
        },
        GameType::Roulette => GameInfo {
            name: "Roulette",
            description: "Numbers and colors on a spinning wheel",
            category: GameCategory::Wheel,
        },
        GameType::ShellGame => GameInfo {
            name: "Shell Game",
            description: "Follow the ball under the cups",
            category: GameCategory::Arcade,
        },
    }
}

/// Catalog of games with their configurations and active flags.
#[derive(Clone, Debug)]
pub struct GameRegistry {
    configs: HashMap<GameType, GameConfig>,
    inactive: Vec<GameType>,
}

impl Default for GameRegistry {
    fn default() -> Self {
        let configs = GameType::ALL
            .into_iter()
            .map(|game_type| (game_type, GameConfig::default_for(game_type)))
            .collect();
        Self {
            configs,
            inactive: Vec::new(),
        }
    }
}

impl GameRegistry {
    /// All games the registry knows, active or not.
    pub fn game_types(&self) -> impl Iterator<Item = GameType> + '_ {
        self.configs.keys().copied()
    }

    /// Games currently offered.
    pub fn active_games(&self) -> Vec<GameType> {
        GameType::ALL
            .into_iter()
            .filter(|game_type| self.is_active(*game_type))
            .collect()
    }

    pub fn is_active(&self, game_type: GameType) -> bool {
        !self.inactive.contains(&game_type)
    }

    pub fn set_active(&mut self, game_type: GameType, active: bool) {
        if active {
            self.inactive.retain(|g| *g != game_type);
        } else if !self.inactive.contains(&game_type) {
            self.inactive.push(game_type);
        }
    }

    pub fn get_info(&self, game_type: GameType) -> Option<GameInfo> {
        self.configs
            .contains_key(&game_type)
            .then(|| info_for(game_type))
    }

    pub fn get_config(&self, game_type: GameType) -> Option<&GameConfig> {
        self.configs.get(&game_type)
    }

    /// Replace a game's configuration. The config's own game type keys
    /// the entry.
    pub fn set_config(&mut self, config: GameConfig) {
        self.configs.insert(config.game_type(), config);
    }
}
