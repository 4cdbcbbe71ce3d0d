//! Batch round runner for the parlor game engines.
//!
//! Runs seeded rounds of each game with a fixed simple policy and
//! reports win/loss/push counts and the observed return-to-player, so
//! house-edge changes can be sanity checked from the command line.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use parlor_engine::casino::baccarat::{Baccarat, BaccaratAction, BaccaratBet, BaccaratConfig};
use parlor_engine::casino::blackjack::{Blackjack, BlackjackAction, BlackjackConfig};
use parlor_engine::casino::coin_flip::{CoinFlip, CoinFlipAction, CoinFlipConfig, Side};
use parlor_engine::casino::crash::{Crash, CrashAction, CrashConfig, TICK_INTERVAL_MS};
use parlor_engine::casino::dice::{Dice, DiceAction, DiceConfig};
use parlor_engine::casino::mines::{Mines, MinesAction, MinesConfig, TOTAL_CELLS};
use parlor_engine::casino::plinko::{Plinko, PlinkoAction, PlinkoConfig};
use parlor_engine::casino::roulette::{Roulette, RouletteAction, RouletteBet, RouletteConfig};
use parlor_engine::casino::score::blackjack_total;
use parlor_engine::casino::shell_game::{ShellGame, ShellGameAction, ShellGameConfig};
use parlor_engine::casino::weighted::Color;
use parlor_engine::{GameRng, Scheduler, Session};
use parlor_types::{GameType, RoundOutcome};
use serde::Serialize;
use tracing::{info, Level};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GameArg {
    Baccarat,
    Blackjack,
    CoinFlip,
    Crash,
    Dice,
    Mines,
    Plinko,
    Roulette,
    ShellGame,
}

impl From<GameArg> for GameType {
    fn from(arg: GameArg) -> Self {
        match arg {
            GameArg::Baccarat => GameType::Baccarat,
            GameArg::Blackjack => GameType::Blackjack,
            GameArg::CoinFlip => GameType::CoinFlip,
            GameArg::Crash => GameType::Crash,
            GameArg::Dice => GameType::Dice,
            GameArg::Mines => GameType::Mines,
            GameArg::Plinko => GameType::Plinko,
            GameArg::Roulette => GameType::Roulette,
            GameArg::ShellGame => GameType::ShellGame,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Run seeded batches of parlor rounds and report statistics")]
struct Args {
    /// Game to simulate; omit to run every game.
    #[arg(long, value_enum)]
    game: Option<GameArg>,

    /// Rounds per game.
    #[arg(long, default_value_t = 10_000)]
    rounds: u64,

    /// Seed for the random stream.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// House edge for Crash.
    #[arg(long, default_value_t = 0.02)]
    house_edge: f64,

    /// Crash policy: cash out once the live multiplier reaches this.
    #[arg(long, default_value_t = 2.0)]
    cash_out: f64,

    /// Mines on the board.
    #[arg(long, default_value_t = 5)]
    mines: u8,

    /// Mines policy: safe reveals before taking profit.
    #[arg(long, default_value_t = 3)]
    picks: u8,

    /// Plinko rows.
    #[arg(long, default_value_t = 10)]
    rows: u32,

    /// Emit machine-readable JSON instead of log lines.
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// Tallied results of one game's batch.
#[derive(Debug, Serialize)]
struct GameStats {
    game: &'static str,
    rounds: u64,
    wins: u64,
    losses: u64,
    pushes: u64,
    /// Observed return-to-player: mean total return per unit staked.
    rtp: f64,
}

#[derive(Default)]
struct Tally {
    wins: u64,
    losses: u64,
    pushes: u64,
    profit: f64,
}

impl Tally {
    /// Record a round's outcome with an explicit profit per unit staked.
    fn record(&mut self, outcome: RoundOutcome, profit: f64) {
        match outcome {
            RoundOutcome::PlayerWin => self.wins += 1,
            RoundOutcome::DealerWin => self.losses += 1,
            RoundOutcome::Push => self.pushes += 1,
        }
        self.profit += profit;
    }

    fn finish(self, game: GameType, rounds: u64) -> GameStats {
        GameStats {
            game: game.name(),
            rounds,
            wins: self.wins,
            losses: self.losses,
            pushes: self.pushes,
            rtp: 1.0 + self.profit / rounds as f64,
        }
    }
}

/// Even-money profit for games without a payout curve.
fn even_money(outcome: RoundOutcome) -> f64 {
    match outcome {
        RoundOutcome::PlayerWin => 1.0,
        RoundOutcome::DealerWin => -1.0,
        RoundOutcome::Push => 0.0,
    }
}

fn run_blackjack(args: &Args, rng: &mut GameRng) -> Result<GameStats> {
    let mut tally = Tally::default();
    let mut session: Session<Blackjack> = Session::new(BlackjackConfig);
    let mut scheduler = Scheduler::new();
    for _ in 0..args.rounds {
        session.start(rng)?;
        // Simple policy: hit to 17, then stand.
        let resolution = loop {
            let state = session.state().context("round not running")?;
            let action = if blackjack_total(&state.player).total < 17 {
                BlackjackAction::Hit
            } else {
                BlackjackAction::Stand
            };
            if let Some(res) = session.act(action, rng)? {
                break res;
            }
        };
        tally.record(resolution.outcome, even_money(resolution.outcome));
        session.reset(&mut scheduler);
    }
    Ok(tally.finish(GameType::Blackjack, args.rounds))
}

fn run_baccarat(args: &Args, rng: &mut GameRng) -> Result<GameStats> {
    let mut tally = Tally::default();
    let config = BaccaratConfig {
        bet: Some(BaccaratBet::Player),
    };
    let mut session: Session<Baccarat> = Session::new(config);
    let mut scheduler = Scheduler::new();
    for _ in 0..args.rounds {
        session.start(rng)?;
        let resolution = session
            .act(BaccaratAction::Deal, rng)?
            .context("deal did not resolve")?;
        // The multiplier quotes profit odds on a matched bet; a tie
        // returns the stake on a player bet.
        let profit = match resolution.multiplier {
            Some(odds) => odds,
            None => match resolution.outcome {
                RoundOutcome::Push => 0.0,
                _ => -1.0,
            },
        };
        tally.record(resolution.outcome, profit);
        session.reset(&mut scheduler);
    }
    Ok(tally.finish(GameType::Baccarat, args.rounds))
}

fn run_coin_flip(args: &Args, rng: &mut GameRng) -> Result<GameStats> {
    let mut tally = Tally::default();
    let config = CoinFlipConfig {
        pick: Some(Side::Heads),
    };
    let mut session: Session<CoinFlip> = Session::new(config);
    let mut scheduler = Scheduler::new();
    for _ in 0..args.rounds {
        session.start(rng)?;
        let resolution = session
            .act(CoinFlipAction::Flip, rng)?
            .context("flip did not resolve")?;
        tally.record(resolution.outcome, even_money(resolution.outcome));
        session.reset(&mut scheduler);
    }
    Ok(tally.finish(GameType::CoinFlip, args.rounds))
}

fn run_crash(args: &Args, rng: &mut GameRng) -> Result<GameStats> {
    let mut tally = Tally::default();
    let config = CrashConfig {
        house_edge: args.house_edge,
    };
    let mut session: Session<Crash> = Session::new(config);
    let mut scheduler = Scheduler::new();
    for _ in 0..args.rounds {
        session.start(rng)?;
        // Policy: tick until the live multiplier reaches the target, then
        // cash out; a crash first loses the stake.
        let mut elapsed = 0;
        let resolution = loop {
            elapsed += TICK_INTERVAL_MS;
            if let Some(res) = session.act(CrashAction::Tick { elapsed_ms: elapsed }, rng)? {
                break res;
            }
            let live = session.state().context("round not running")?.live;
            if live >= args.cash_out {
                break session
                    .act(CrashAction::CashOut, rng)?
                    .context("cash out did not resolve")?;
            }
        };
        let profit = match resolution.multiplier {
            Some(total_return) => total_return - 1.0,
            None => -1.0,
        };
        tally.record(resolution.outcome, profit);
        session.reset(&mut scheduler);
    }
    Ok(tally.finish(GameType::Crash, args.rounds))
}

fn run_dice(args: &Args, rng: &mut GameRng) -> Result<GameStats> {
    let mut tally = Tally::default();
    let mut session: Session<Dice> = Session::new(DiceConfig);
    let mut scheduler = Scheduler::new();
    for _ in 0..args.rounds {
        session.start(rng)?;
        let resolution = session
            .act(DiceAction::Roll, rng)?
            .context("roll did not resolve")?;
        tally.record(resolution.outcome, even_money(resolution.outcome));
        session.reset(&mut scheduler);
    }
    Ok(tally.finish(GameType::Dice, args.rounds))
}

fn run_mines(args: &Args, rng: &mut GameRng) -> Result<GameStats> {
    let mut tally = Tally::default();
    let config = MinesConfig { mines: args.mines };
    let mut session: Session<Mines> = Session::new(config);
    let mut scheduler = Scheduler::new();
    for _ in 0..args.rounds {
        session.start(rng)?;
        // Policy: reveal `picks` random cells, then take profit. A repeat
        // pick of a revealed cell is rejected by the game; draw again.
        let mut resolution = None;
        let mut revealed = 0;
        while revealed < args.picks {
            let cell = rng.gen_range(0..TOTAL_CELLS);
            match session.act(MinesAction::Reveal(cell), rng) {
                Ok(Some(res)) => {
                    resolution = Some(res);
                    break;
                }
                Ok(None) => revealed += 1,
                Err(_) => continue,
            }
        }
        let resolution = match resolution {
            Some(res) => res,
            None => session
                .act(MinesAction::TakeProfit, rng)?
                .context("take profit did not resolve")?,
        };
        tally.record(resolution.outcome, even_money(resolution.outcome));
        session.reset(&mut scheduler);
    }
    Ok(tally.finish(GameType::Mines, args.rounds))
}

fn run_plinko(args: &Args, rng: &mut GameRng) -> Result<GameStats> {
    let mut tally = Tally::default();
    let config = PlinkoConfig {
        rows: args.rows,
        ..PlinkoConfig::default()
    };
    let mut session: Session<Plinko> = Session::new(config);
    let mut scheduler = Scheduler::new();
    for _ in 0..args.rounds {
        session.start(rng)?;
        let resolution = loop {
            if let Some(res) = session.act(PlinkoAction::Step, rng)? {
                break res;
            }
        };
        let multiplier = resolution
            .multiplier
            .context("plinko always pays a multiplier")?;
        tally.record(resolution.outcome, multiplier - 1.0);
        session.reset(&mut scheduler);
    }
    Ok(tally.finish(GameType::Plinko, args.rounds))
}

fn run_roulette(args: &Args, rng: &mut GameRng) -> Result<GameStats> {
    let mut tally = Tally::default();
    let config = RouletteConfig {
        bets: vec![RouletteBet::Color(Color::Red)],
        ..RouletteConfig::default()
    };
    let mut session: Session<Roulette> = Session::new(config);
    let mut scheduler = Scheduler::new();
    for _ in 0..args.rounds {
        session.start(rng)?;
        let resolution = session
            .act(RouletteAction::Spin, rng)?
            .context("spin did not resolve")?;
        tally.record(resolution.outcome, even_money(resolution.outcome));
        session.reset(&mut scheduler);
    }
    Ok(tally.finish(GameType::Roulette, args.rounds))
}

fn run_shell_game(args: &Args, rng: &mut GameRng) -> Result<GameStats> {
    let mut tally = Tally::default();
    let mut session: Session<ShellGame> = Session::new(ShellGameConfig);
    let mut scheduler = Scheduler::new();
    for _ in 0..args.rounds {
        session.start(rng)?;
        session.act(ShellGameAction::StartMixing, rng)?;
        session.act(ShellGameAction::FinishMixing, rng)?;
        let guess = rng.gen_range(0..3);
        let resolution = session
            .act(ShellGameAction::Guess(guess), rng)?
            .context("guess did not resolve")?;
        tally.record(resolution.outcome, even_money(resolution.outcome));
        session.reset(&mut scheduler);
    }
    Ok(tally.finish(GameType::ShellGame, args.rounds))
}

fn run_game(game: GameType, args: &Args, rng: &mut GameRng) -> Result<GameStats> {
    match game {
        GameType::Baccarat => run_baccarat(args, rng),
        GameType::Blackjack => run_blackjack(args, rng),
        GameType::CoinFlip => run_coin_flip(args, rng),
        GameType::Crash => run_crash(args, rng),
        GameType::Dice => run_dice(args, rng),
        GameType::Mines => run_mines(args, rng),
        GameType::Plinko => run_plinko(args, rng),
        GameType::Roulette => run_roulette(args, rng),
        GameType::ShellGame => run_shell_game(args, rng),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if !args.json {
        tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    }

    let games: Vec<GameType> = match args.game {
        Some(game) => vec![game.into()],
        None => GameType::ALL.to_vec(),
    };

    let mut all_stats = Vec::with_capacity(games.len());
    for game in games {
        let mut rng = GameRng::from_seed(args.seed);
        let stats =
            run_game(game, &args, &mut rng).with_context(|| format!("{} batch", game.name()))?;
        if !args.json {
            info!(
                game = stats.game,
                rounds = stats.rounds,
                wins = stats.wins,
                losses = stats.losses,
                pushes = stats.pushes,
                rtp = format!("{:.4}", stats.rtp),
                "batch complete"
            );
        }
        all_stats.push(stats);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&all_stats)?);
    }
    Ok(())
}
