use chrono::{DateTime, Utc};
use tripick_core::{
    ActionOutcome, ClickOutcome, Level, LevelPlan, MatchEngine, SettleEvents, SymbolCatalog,
};
use tripick_protocol::{SessionToken, SubmissionPayload};

use crate::{Allowances, Powerup, RankTier, Result};

/// Runs at or under this many elapsed seconds are discarded instead of
/// submitted.
pub const MIN_RANKED_SECS: u64 = 60;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    FreePlay,
    Ranked(RankTier),
}

impl Mode {
    pub const fn is_ranked(&self) -> bool {
        matches!(self, Self::Ranked(_))
    }
}

/// One sitting of the game: the match engine plus the mode-specific rules —
/// score accrual, powerup budgets, and the run clock. Wall-clock time is
/// always injected through `now` parameters; the session never reads a
/// clock, so the once-per-second display tick lives entirely outside.
#[derive(Clone, Debug)]
pub struct Session {
    engine: MatchEngine,
    mode: Mode,
    score: u32,
    score_per_match: u32,
    allowances: Allowances,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    token: Option<SessionToken>,
}

impl Session {
    /// Untimed, unscored play from level 1 with unlimited powerups.
    pub fn free_play(catalog: SymbolCatalog, seed: u64) -> Result<Self> {
        let engine = MatchEngine::new(catalog, LevelPlan::Endless, seed)?;
        Ok(Self {
            engine,
            mode: Mode::FreePlay,
            score: 0,
            score_per_match: 0,
            allowances: Allowances::unlimited(),
            started_at: None,
            ended_at: None,
            token: None,
        })
    }

    /// Timed, scored run over the tier's level list. `token` comes from
    /// [`crate::ScoreService::start_game`] and is echoed back on submission.
    pub fn ranked(
        catalog: SymbolCatalog,
        tier: RankTier,
        token: SessionToken,
        seed: u64,
    ) -> Result<Self> {
        let config = tier.config();
        let engine = MatchEngine::new(
            catalog,
            LevelPlan::sequence(config.levels.to_vec()),
            seed,
        )?;
        log::debug!("ranked session started, {:?} tier", tier);
        Ok(Self {
            engine,
            mode: Mode::Ranked(tier),
            score: 0,
            score_per_match: config.score_per_match,
            allowances: Allowances::from_config(&config),
            started_at: None,
            ended_at: None,
            token: Some(token),
        })
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn allowances(&self) -> &Allowances {
        &self.allowances
    }

    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }

    /// Whole seconds on the display clock. Idle time before the first click
    /// does not count.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        match self.started_at {
            Some(start) => (self.ended_at.unwrap_or(now) - start).num_seconds().max(0) as u32,
            None => 0,
        }
    }

    /// The run clock starts on the first accepted click.
    pub fn click(&mut self, now: DateTime<Utc>, index: usize) -> Result<ClickOutcome> {
        let outcome = self.engine.click(index)?;
        if outcome.accepted() && self.started_at.is_none() {
            self.started_at = Some(now);
            log::debug!("run clock started at {}", now);
        }
        Ok(outcome)
    }

    pub fn settle(&mut self, now: DateTime<Utc>) -> Result<SettleEvents> {
        let events = self.engine.settle()?;
        if events.matched.is_some() && self.mode.is_ranked() {
            self.score += self.score_per_match;
        }
        if events.lost || events.won {
            self.finish_clock(now);
        }
        Ok(events)
    }

    /// An empty queue short-circuits before any allowance is spent.
    pub fn pop(&mut self) -> Result<ActionOutcome> {
        if self.engine.is_finished() || self.engine.is_settling() || self.engine.queue().is_empty()
        {
            return Ok(ActionOutcome::NoChange);
        }
        self.allowances.pop.try_spend(Powerup::Pop)?;
        Ok(self.engine.pop())
    }

    /// An empty queue short-circuits before any allowance is spent.
    pub fn undo(&mut self) -> Result<ActionOutcome> {
        if self.engine.is_finished() || self.engine.is_settling() || self.engine.queue().is_empty()
        {
            return Ok(ActionOutcome::NoChange);
        }
        self.allowances.undo.try_spend(Powerup::Undo)?;
        Ok(self.engine.undo())
    }

    pub fn wash(&mut self) -> Result<ActionOutcome> {
        if self.engine.is_finished() || self.engine.is_settling() {
            return Ok(ActionOutcome::NoChange);
        }
        self.allowances.wash.try_spend(Powerup::Wash)?;
        Ok(self.engine.wash())
    }

    /// Manual level skip, free play only.
    pub fn level_up(&mut self) -> ActionOutcome {
        match self.mode {
            Mode::FreePlay => self.engine.level_up(),
            Mode::Ranked(_) => ActionOutcome::NoChange,
        }
    }

    pub fn restart(&mut self, level: Level) {
        self.engine.restart(level);
    }

    /// Ends the run (abandoning it if still in progress) and packages the
    /// submission. `None` when there is nothing to submit: free play, or a
    /// ranked run at or under [`MIN_RANKED_SECS`] elapsed seconds.
    pub fn end(&mut self, now: DateTime<Utc>) -> Option<SubmissionPayload> {
        self.engine.abandon();
        self.finish_clock(now);

        if !self.mode.is_ranked() {
            return None;
        }
        let token = self.token.clone()?;
        let time_used = self.elapsed_secs_ceil();
        if time_used <= MIN_RANKED_SECS {
            log::warn!(
                "run lasted {}s, at or under the {}s ranking floor; not submitted",
                time_used,
                MIN_RANKED_SECS
            );
            return None;
        }
        Some(SubmissionPayload {
            token,
            score: self.score,
            time_used,
        })
    }

    fn finish_clock(&mut self, now: DateTime<Utc>) {
        if self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
    }

    /// Elapsed seconds rounded up, as the scoring service expects.
    fn elapsed_secs_ceil(&self) -> u64 {
        let (Some(start), Some(end)) = (self.started_at, self.ended_at) else {
            return 0;
        };
        let millis = (end - start).num_milliseconds().max(0) as u64;
        millis.div_ceil(1000)
    }
}

/// `HH:MM:SS` for the status bar.
pub fn format_clock(total_secs: u32) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        total_secs % 3600 / 60,
        total_secs % 60
    )
}
