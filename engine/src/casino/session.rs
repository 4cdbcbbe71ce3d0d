//! Generic per-game session lifecycle.
//!
//! A [`Session`] owns one game instance's round-scoped state and walks
//! the shared phase machine: NotStarted → InProgress → Resolved, then
//! back to NotStarted on an explicit reset. The session is a plain owned
//! value passed to pure-ish transition methods, so every game is unit
//! testable without a rendering environment.
//!
//! Timed games receive their timer actions through [`Session::deliver`],
//! which drops any task tagged with a stale round id. Resets additionally
//! cancel the old round's tasks at the scheduler, so both defenses are in
//! place against a timer surviving a round boundary.

use super::{CasinoGame, GameError};
use crate::rng::GameRng;
use crate::scheduler::{DueTask, RoundId, Scheduler};
use parlor_types::{Resolution, SessionPhase};
use tracing::debug;

/// One game instance's session.
pub struct Session<G: CasinoGame> {
    round: RoundId,
    phase: SessionPhase,
    config: G::Config,
    state: Option<G::State>,
    resolution: Option<Resolution>,
}

impl<G: CasinoGame> Session<G> {
    pub fn new(config: G::Config) -> Self {
        Self {
            round: RoundId::first(),
            phase: SessionPhase::NotStarted,
            config,
            state: None,
            resolution: None,
        }
    }

    pub fn round(&self) -> RoundId {
        self.round
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn config(&self) -> &G::Config {
        &self.config
    }

    /// The running round's game state, if a round is live.
    pub fn state(&self) -> Option<&G::State> {
        self.state.as_ref()
    }

    /// The final outcome, once the round has resolved.
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    /// Swap the configuration (bet selection, board parameters) before
    /// the next round starts.
    pub fn set_config(&mut self, config: G::Config) -> Result<(), GameError> {
        if self.phase != SessionPhase::NotStarted {
            return Err(GameError::InvalidAction);
        }
        self.config = config;
        Ok(())
    }

    /// Start a round. Fails (leaving the session untouched) if one is
    /// already running or the config's preconditions are unmet.
    pub fn start(&mut self, rng: &mut GameRng) -> Result<(), GameError> {
        if self.phase != SessionPhase::NotStarted {
            return Err(GameError::InvalidAction);
        }
        let state = G::start(&self.config, rng)?;
        self.state = Some(state);
        self.phase = SessionPhase::InProgress;
        debug!(game = ?G::GAME_TYPE, round = ?self.round, "round started");
        Ok(())
    }

    /// Apply a player action to the running round.
    pub fn act(
        &mut self,
        action: G::Action,
        rng: &mut GameRng,
    ) -> Result<Option<Resolution>, GameError> {
        if self.phase != SessionPhase::InProgress {
            return Err(GameError::InvalidAction);
        }
        let state = self.state.as_mut().ok_or(GameError::InvalidAction)?;
        match G::apply(state, action, rng)? {
            Some(resolution) => {
                self.resolution = Some(resolution);
                self.phase = SessionPhase::Resolved;
                debug!(
                    game = ?G::GAME_TYPE,
                    round = ?self.round,
                    outcome = ?resolution.outcome,
                    "round resolved"
                );
                Ok(Some(resolution))
            }
            None => Ok(None),
        }
    }

    /// Apply a scheduler task. Tasks tagged with a stale round id, or
    /// arriving after the round resolved, are dropped without touching
    /// any state.
    pub fn deliver(
        &mut self,
        task: DueTask<G::Action>,
        rng: &mut GameRng,
    ) -> Result<Option<Resolution>, GameError> {
        if task.round != self.round || self.phase != SessionPhase::InProgress {
            debug!(game = ?G::GAME_TYPE, task = ?task.id, "dropping stale timer task");
            return Ok(None);
        }
        self.act(task.payload, rng)
    }

    /// Discard all round-scoped state and return to NotStarted. The old
    /// round's pending scheduler tasks are cancelled; the round id is
    /// bumped so a task that already fired cannot land in the new round.
    pub fn reset(&mut self, scheduler: &mut Scheduler<G::Action>) {
        let cancelled = scheduler.cancel_round(self.round);
        debug!(
            game = ?G::GAME_TYPE,
            round = ?self.round,
            cancelled,
            "session reset"
        );
        self.round = self.round.next();
        self.phase = SessionPhase::NotStarted;
        self.state = None;
        self.resolution = None;
    }
}
