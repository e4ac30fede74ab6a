use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Outcome of a click attempt. Invalid clicks (covered tile, settling window
/// open, game over) are rejected silently rather than erroring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    Rejected,
    Settling,
}

impl ClickOutcome {
    pub const fn accepted(self) -> bool {
        matches!(self, Self::Settling)
    }
}

/// Outcome of pop/undo/wash/level-up style actions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    NoChange,
    Changed,
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Everything that happened while settling one click, for the presentation
/// and session layers to consume (score, sounds, dialogs).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SettleEvents {
    /// Symbol of a resolved triple, if one completed.
    pub matched: Option<SymbolId>,
    pub lost: bool,
    pub won: bool,
    pub level_advanced: bool,
}

/// How the engine picks the next level after a cleared board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LevelPlan {
    /// Free play: one level at a time up to [`MAX_LEVEL`], which wins.
    Endless,
    /// Ranked: a fixed list of target levels; clearing the last one wins.
    Sequence { levels: Vec<Level>, cursor: usize },
}

impl LevelPlan {
    pub fn sequence(levels: Vec<Level>) -> Self {
        Self::Sequence { levels, cursor: 0 }
    }

    fn first_level(&self) -> Result<Level> {
        match self {
            Self::Endless => Ok(1),
            Self::Sequence { levels, .. } => {
                levels.first().copied().ok_or(GameError::EmptySequence)
            }
        }
    }

    /// Next level after a clear, `None` when the cleared board was the last.
    fn advance(&mut self, current: Level) -> Option<Level> {
        match self {
            Self::Endless => (current < MAX_LEVEL).then(|| current + 1),
            Self::Sequence { levels, cursor } => {
                if *cursor + 1 >= levels.len() {
                    None
                } else {
                    *cursor += 1;
                    Some(levels[*cursor])
                }
            }
        }
    }

    fn rewind(&mut self) {
        if let Self::Sequence { cursor, .. } = self {
            *cursor = 0;
        }
    }

    /// `(stage index, stage count)` for sequence plans.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self {
            Self::Endless => None,
            Self::Sequence { levels, cursor } => Some((*cursor, levels.len())),
        }
    }
}

/// The click -> queue -> match state machine over one board at a time.
///
/// All randomness (placement, jitter, tile ids, shuffles, the discard lane)
/// comes from one seeded RNG in a fixed draw order, so a run is exactly
/// reproducible from its seed and click sequence.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    catalog: SymbolCatalog,
    plan: LevelPlan,
    level: Level,
    board: Vec<Tile>,
    queue: SmallVec<[TileId; QUEUE_CAP]>,
    state: EngineState,
    settling: Option<SymbolId>,
    rng: SmallRng,
}

impl MatchEngine {
    pub fn new(catalog: SymbolCatalog, plan: LevelPlan, seed: u64) -> Result<Self> {
        if catalog.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        let level = plan.first_level()?;
        let mut engine = Self {
            catalog,
            plan,
            level,
            board: Vec::new(),
            queue: SmallVec::new(),
            state: EngineState::Playing,
            settling: None,
            rng: SmallRng::seed_from_u64(seed),
        };
        engine.regenerate();
        Ok(engine)
    }

    /// Builds an engine over a handcrafted board, for replays and custom
    /// layouts. Queue membership is rebuilt from tile statuses in board
    /// order; coverage is recomputed.
    pub fn from_board(
        catalog: SymbolCatalog,
        plan: LevelPlan,
        level: Level,
        board: Vec<Tile>,
        seed: u64,
    ) -> Result<Self> {
        if catalog.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        plan.first_level()?;
        let queue = board
            .iter()
            .filter(|tile| tile.status == TileStatus::Queued)
            .map(|tile| tile.id.clone())
            .collect();
        let mut engine = Self {
            catalog,
            plan,
            level: clamp_level(level),
            board,
            queue,
            state: EngineState::Playing,
            settling: None,
            rng: SmallRng::seed_from_u64(seed),
        };
        recompute_coverage(&mut engine.board);
        Ok(engine)
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_final()
    }

    /// Whether a click is waiting for its settling window to elapse.
    pub fn is_settling(&self) -> bool {
        self.settling.is_some()
    }

    pub fn board(&self) -> &[Tile] {
        &self.board
    }

    pub fn queue(&self) -> &[TileId] {
        &self.queue
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    /// Tiles not yet resolved, queued ones included.
    pub fn tiles_left(&self) -> usize {
        self.board
            .iter()
            .filter(|tile| !tile.status.is_resolved())
            .count()
    }

    /// `(stage index, stage count)` for sequence plans.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.plan.progress()
    }

    /// First half of a turn: moves an uncovered on-board tile into the queue
    /// and opens the settling window. The caller waits [`SETTLE_MILLIS`] and
    /// then calls [`Self::settle`]; any action in between is rejected.
    pub fn click(&mut self, index: usize) -> Result<ClickOutcome> {
        if index >= self.board.len() {
            return Err(GameError::OutOfRange(index));
        }
        if self.state.is_final() || self.settling.is_some() {
            return Ok(ClickOutcome::Rejected);
        }

        let tile = &mut self.board[index];
        if tile.covered || tile.status != TileStatus::OnBoard {
            return Ok(ClickOutcome::Rejected);
        }
        tile.status = TileStatus::Queued;
        let symbol = tile.symbol;
        let id = tile.id.clone();
        self.queue.push(id);
        recompute_coverage(&mut self.board);

        self.settling = Some(symbol);
        log::trace!("tile {} queued, queue length {}", index, self.queue.len());
        Ok(ClickOutcome::Settling)
    }

    /// Second half of a turn: triple detection, then the loss check, then
    /// the clear check, in that fixed order. A triple that drains the queue
    /// below capacity on the same click therefore averts the loss.
    pub fn settle(&mut self) -> Result<SettleEvents> {
        let symbol = self.settling.take().ok_or(GameError::NotSettling)?;
        let mut events = SettleEvents::default();

        let matched: SmallVec<[TileId; 3]> = self
            .board
            .iter()
            .filter(|tile| tile.status == TileStatus::Queued && tile.symbol == symbol)
            .map(|tile| tile.id.clone())
            .collect();
        if matched.len() == 3 {
            for tile in &mut self.board {
                if tile.status == TileStatus::Queued && tile.symbol == symbol {
                    tile.status = TileStatus::Resolved;
                }
            }
            self.queue.retain(|id| !matched.contains(id));
            events.matched = Some(symbol);
            log::debug!("triple resolved, {} tiles left", self.tiles_left());
        }

        if self.queue.len() == QUEUE_CAP {
            self.state = EngineState::Lost;
            events.lost = true;
            log::debug!("queue overflow at level {}", self.level);
        } else if self.board.iter().all(|tile| tile.status.is_resolved()) {
            match self.plan.advance(self.level) {
                Some(next) => {
                    log::debug!("level {} cleared, advancing to {}", self.level, next);
                    self.level = next;
                    self.regenerate();
                    events.level_advanced = true;
                }
                None => {
                    self.state = EngineState::Won;
                    events.won = true;
                    log::debug!("final level {} cleared", self.level);
                }
            }
        } else {
            recompute_coverage(&mut self.board);
        }
        Ok(events)
    }

    /// Returns the oldest queued tile to the board, parked in the discard
    /// lane at a random column of the lowest row.
    pub fn pop(&mut self) -> ActionOutcome {
        if self.state.is_final() || self.settling.is_some() || self.queue.is_empty() {
            return ActionOutcome::NoChange;
        }
        let id = self.queue.remove(0);
        let col = self.rng.random_range(0..GRID_CELLS);
        let Some(tile) = self.board.iter_mut().find(|tile| tile.id == id) else {
            return ActionOutcome::NoChange;
        };
        tile.status = TileStatus::OnBoard;
        tile.x = col * TILE_SIZE;
        tile.y = DISCARD_ROW * TILE_SIZE;
        recompute_coverage(&mut self.board);
        log::debug!("popped tile {} to the discard lane", id);
        ActionOutcome::Changed
    }

    /// Returns the most recently queued tile to the board at its recorded
    /// position; the position was never touched while it sat in the queue.
    pub fn undo(&mut self) -> ActionOutcome {
        if self.state.is_final() || self.settling.is_some() {
            return ActionOutcome::NoChange;
        }
        let Some(id) = self.queue.pop() else {
            return ActionOutcome::NoChange;
        };
        let Some(tile) = self.board.iter_mut().find(|tile| tile.id == id) else {
            return ActionOutcome::NoChange;
        };
        tile.status = TileStatus::OnBoard;
        recompute_coverage(&mut self.board);
        log::debug!("undid click on tile {}", id);
        ActionOutcome::Changed
    }

    /// Reshuffles the board; queued and resolved tiles stay where they are.
    pub fn wash(&mut self) -> ActionOutcome {
        if self.state.is_final() || self.settling.is_some() {
            return ActionOutcome::NoChange;
        }
        crate::shuffle::wash(self.level, &mut self.board, &mut self.rng);
        recompute_coverage(&mut self.board);
        ActionOutcome::Changed
    }

    /// Free-play only: skips to the next level without a clear. Also clears
    /// a finished flag, so it doubles as "keep going" after a loss.
    pub fn level_up(&mut self) -> ActionOutcome {
        if self.settling.is_some() {
            return ActionOutcome::NoChange;
        }
        match self.plan {
            LevelPlan::Sequence { .. } => ActionOutcome::NoChange,
            LevelPlan::Endless => {
                if self.level >= MAX_LEVEL {
                    return ActionOutcome::NoChange;
                }
                self.level += 1;
                self.state = EngineState::Playing;
                self.regenerate();
                ActionOutcome::Changed
            }
        }
    }

    /// Hard reset: fresh board, empty queue, cleared finished flag. Sequence
    /// plans restart from their first target level; endless play restarts at
    /// the (clamped) requested level.
    pub fn restart(&mut self, level: Level) {
        self.state = EngineState::Playing;
        self.plan.rewind();
        self.level = match &self.plan {
            LevelPlan::Endless => clamp_level(level),
            LevelPlan::Sequence { levels, .. } => {
                levels.first().copied().unwrap_or_else(|| clamp_level(level))
            }
        };
        self.regenerate();
    }

    /// Ends the run as a loss without emitting events; used for voluntary
    /// abandonment.
    pub fn abandon(&mut self) {
        if !self.state.is_final() {
            self.state = EngineState::Lost;
            self.settling = None;
            log::debug!("run abandoned at level {}", self.level);
        }
    }

    /// Display layout for the queue: same-symbol tiles grouped adjacently
    /// (groups ordered by first occurrence), slots spaced one tile apart
    /// starting at [`QUEUE_ORIGIN_X`].
    pub fn queue_slots(&self) -> Vec<(TileId, Px)> {
        let mut groups: Vec<(SymbolId, Vec<&TileId>)> = Vec::new();
        for id in &self.queue {
            let Some(symbol) = self
                .board
                .iter()
                .find(|tile| tile.id == *id)
                .map(|tile| tile.symbol)
            else {
                continue;
            };
            match groups.iter_mut().find(|(existing, _)| *existing == symbol) {
                Some((_, members)) => members.push(id),
                None => groups.push((symbol, alloc::vec![id])),
            }
        }

        let mut slots = Vec::with_capacity(self.queue.len());
        let mut x = QUEUE_ORIGIN_X;
        for (_, members) in groups {
            for id in members {
                slots.push((id.clone(), x));
                x += TILE_SIZE;
            }
        }
        slots
    }

    fn regenerate(&mut self) {
        self.board = generate_board(self.level, &self.catalog, &mut self.rng);
        self.queue.clear();
        self.settling = None;
        recompute_coverage(&mut self.board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    fn catalog(len: usize) -> SymbolCatalog {
        SymbolCatalog::new(
            (0..len)
                .map(|i| Symbol {
                    name: format!("sym-{}", i),
                    glyph: format!("g{}", i),
                    click_sound: String::from("click"),
                    triple_sound: String::from("triple"),
                })
                .collect(),
        )
    }

    /// Non-overlapping layout: every tile is clickable by index.
    fn spread_board(symbols: &[u16]) -> Vec<Tile> {
        symbols
            .iter()
            .enumerate()
            .map(|(i, &s)| Tile {
                id: TileId::new(format!("t{}", i)),
                status: TileStatus::OnBoard,
                x: (i as Px % 8) * 200,
                y: (i as Px / 8) * 200,
                covered: false,
                symbol: SymbolId(s),
            })
            .collect()
    }

    fn engine(symbols: &[u16]) -> MatchEngine {
        MatchEngine::from_board(catalog(8), LevelPlan::Endless, 1, spread_board(symbols), 42)
            .unwrap()
    }

    fn tap(engine: &mut MatchEngine, index: usize) -> SettleEvents {
        assert_eq!(engine.click(index).unwrap(), ClickOutcome::Settling);
        engine.settle().unwrap()
    }

    #[test]
    fn new_rejects_empty_catalog() {
        assert_eq!(
            MatchEngine::new(SymbolCatalog::default(), LevelPlan::Endless, 1).unwrap_err(),
            GameError::EmptyCatalog
        );
    }

    #[test]
    fn empty_sequence_plan_is_rejected() {
        assert_eq!(
            MatchEngine::new(catalog(4), LevelPlan::sequence(alloc::vec![]), 1).unwrap_err(),
            GameError::EmptySequence
        );
    }

    #[test]
    fn same_seed_reproduces_the_board() {
        let a = MatchEngine::new(catalog(8), LevelPlan::Endless, 5).unwrap();
        let b = MatchEngine::new(catalog(8), LevelPlan::Endless, 5).unwrap();

        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn click_on_covered_tile_is_rejected() {
        let mut board = spread_board(&[0, 0]);
        board[0].x = 300;
        board[0].y = 300;
        board[1].x = 300;
        board[1].y = 300;
        let mut engine =
            MatchEngine::from_board(catalog(8), LevelPlan::Endless, 1, board, 42).unwrap();

        assert_eq!(engine.click(0).unwrap(), ClickOutcome::Rejected);
        assert!(engine.queue().is_empty());
        assert_eq!(engine.click(1).unwrap(), ClickOutcome::Settling);
    }

    #[test]
    fn click_is_rejected_during_settling_window() {
        let mut engine = engine(&[0, 0, 0]);

        assert_eq!(engine.click(0).unwrap(), ClickOutcome::Settling);
        assert_eq!(engine.click(1).unwrap(), ClickOutcome::Rejected);
        assert_eq!(engine.queue().len(), 1);

        engine.settle().unwrap();
        assert_eq!(engine.click(1).unwrap(), ClickOutcome::Settling);
    }

    #[test]
    fn click_out_of_range_is_an_error() {
        let mut engine = engine(&[0]);
        assert_eq!(engine.click(9).unwrap_err(), GameError::OutOfRange(9));
    }

    #[test]
    fn settle_without_pending_click_is_an_error() {
        let mut engine = engine(&[0]);
        assert_eq!(engine.settle().unwrap_err(), GameError::NotSettling);
    }

    #[test]
    fn two_queued_twins_do_not_resolve() {
        let mut engine = engine(&[0, 0, 0, 1, 1, 1]);

        assert_eq!(tap(&mut engine, 0), SettleEvents::default());
        assert_eq!(tap(&mut engine, 1), SettleEvents::default());
        assert_eq!(engine.queue().len(), 2);
    }

    #[test]
    fn third_twin_resolves_the_triple() {
        let mut engine = engine(&[0, 0, 0, 1, 1, 1]);

        tap(&mut engine, 0);
        tap(&mut engine, 1);
        let events = tap(&mut engine, 2);

        assert_eq!(events.matched, Some(SymbolId(0)));
        assert!(engine.queue().is_empty());
        assert_eq!(engine.tiles_left(), 3);
        for tile in engine.board().iter().filter(|t| t.symbol == SymbolId(0)) {
            assert_eq!(tile.status, TileStatus::Resolved);
        }
    }

    #[test]
    fn six_twins_resolve_as_two_triples() {
        let mut engine = engine(&[0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1]);

        let mut matches = 0;
        for index in 0..6 {
            if tap(&mut engine, index).matched.is_some() {
                matches += 1;
            }
        }

        assert_eq!(matches, 2);
        assert!(engine.queue().is_empty());
    }

    #[test]
    fn queue_overflow_without_triple_loses() {
        let mut engine = engine(&[0, 0, 1, 1, 2, 2, 3, 4]);

        for index in 0..6 {
            assert!(!tap(&mut engine, index).lost);
        }
        let events = tap(&mut engine, 6);

        assert!(events.lost);
        assert_eq!(engine.state(), EngineState::Lost);
        assert_eq!(engine.click(7).unwrap(), ClickOutcome::Rejected);
        assert_eq!(engine.pop(), ActionOutcome::NoChange);
        assert_eq!(engine.undo(), ActionOutcome::NoChange);
        assert_eq!(engine.wash(), ActionOutcome::NoChange);
    }

    #[test]
    fn triple_on_the_seventh_click_averts_the_loss() {
        let mut engine = engine(&[0, 0, 1, 1, 2, 2, 0]);

        for index in 0..6 {
            tap(&mut engine, index);
        }
        let events = tap(&mut engine, 6);

        assert_eq!(events.matched, Some(SymbolId(0)));
        assert!(!events.lost);
        assert_eq!(engine.queue().len(), 4);
        assert_eq!(engine.state(), EngineState::Playing);
    }

    #[test]
    fn pop_parks_the_oldest_tile_in_the_discard_lane() {
        let mut engine = engine(&[0, 1, 2]);
        tap(&mut engine, 0);
        tap(&mut engine, 1);

        assert_eq!(engine.pop(), ActionOutcome::Changed);

        let popped = engine.board().iter().find(|t| t.id.as_str() == "t0").unwrap();
        assert_eq!(popped.status, TileStatus::OnBoard);
        assert_eq!(popped.y, DISCARD_ROW * TILE_SIZE);
        assert!(popped.x >= 0 && popped.x < GRID_CELLS * TILE_SIZE);
        assert_eq!(popped.x % TILE_SIZE, 0);
        assert_eq!(engine.queue().len(), 1);
        assert_eq!(engine.queue()[0].as_str(), "t1");
    }

    #[test]
    fn pop_on_empty_queue_is_a_no_op() {
        let mut engine = engine(&[0, 1]);
        let before = engine.board().to_vec();

        assert_eq!(engine.pop(), ActionOutcome::NoChange);
        assert_eq!(engine.board(), &before[..]);
    }

    #[test]
    fn undo_restores_the_recorded_position() {
        let mut engine = engine(&[0, 1, 2, 3, 0]);
        let original = {
            let tile = &engine.board()[4];
            (tile.x, tile.y)
        };
        tap(&mut engine, 4);

        assert_eq!(engine.undo(), ActionOutcome::Changed);

        let tile = &engine.board()[4];
        assert_eq!(tile.status, TileStatus::OnBoard);
        assert_eq!((tile.x, tile.y), original);
        assert!(engine.queue().is_empty());
    }

    #[test]
    fn wash_spares_queued_tiles() {
        let mut engine = engine(&[0, 0, 0, 1, 1, 1]);
        tap(&mut engine, 0);
        let queued_pos = {
            let tile = engine.board().iter().find(|t| t.id.as_str() == "t0").unwrap();
            (tile.x, tile.y)
        };

        assert_eq!(engine.wash(), ActionOutcome::Changed);

        let tile = engine.board().iter().find(|t| t.id.as_str() == "t0").unwrap();
        assert_eq!(tile.status, TileStatus::Queued);
        assert_eq!((tile.x, tile.y), queued_pos);
        assert_eq!(engine.queue().len(), 1);
    }

    #[test]
    fn wash_is_rejected_during_settling_window() {
        let mut engine = engine(&[0, 1]);
        engine.click(0).unwrap();

        assert_eq!(engine.wash(), ActionOutcome::NoChange);
    }

    #[test]
    fn cleared_board_advances_an_endless_level() {
        let mut engine =
            MatchEngine::from_board(catalog(1), LevelPlan::Endless, 1, spread_board(&[0, 0, 0]), 7)
                .unwrap();

        tap(&mut engine, 0);
        tap(&mut engine, 1);
        let events = tap(&mut engine, 2);

        assert!(events.level_advanced);
        assert!(!events.won);
        assert_eq!(engine.level(), 2);
        assert!(engine.queue().is_empty());
        assert_eq!(engine.board().len(), TILES_PER_SYMBOL);
    }

    #[test]
    fn clearing_the_last_sequence_level_wins() {
        let mut engine = MatchEngine::from_board(
            catalog(1),
            LevelPlan::sequence(alloc::vec![1]),
            1,
            spread_board(&[0, 0, 0]),
            7,
        )
        .unwrap();

        tap(&mut engine, 0);
        tap(&mut engine, 1);
        let events = tap(&mut engine, 2);

        assert!(events.won);
        assert!(!events.level_advanced);
        assert_eq!(engine.state(), EngineState::Won);
    }

    #[test]
    fn sequence_plan_advances_to_the_next_listed_level() {
        let mut engine = MatchEngine::from_board(
            catalog(1),
            LevelPlan::sequence(alloc::vec![1, 3]),
            1,
            spread_board(&[0, 0, 0]),
            7,
        )
        .unwrap();

        tap(&mut engine, 0);
        tap(&mut engine, 1);
        let events = tap(&mut engine, 2);

        assert!(events.level_advanced);
        assert_eq!(engine.level(), 3);
        assert_eq!(engine.progress(), Some((1, 2)));
    }

    #[test]
    fn clearing_the_max_endless_level_wins() {
        let mut engine = MatchEngine::from_board(
            catalog(1),
            LevelPlan::Endless,
            MAX_LEVEL,
            spread_board(&[0, 0, 0]),
            7,
        )
        .unwrap();

        tap(&mut engine, 0);
        tap(&mut engine, 1);
        let events = tap(&mut engine, 2);

        assert!(events.won);
        assert_eq!(engine.state(), EngineState::Won);
    }

    #[test]
    fn level_up_caps_at_the_max_level() {
        let mut engine = MatchEngine::from_board(
            catalog(1),
            LevelPlan::Endless,
            MAX_LEVEL,
            spread_board(&[0, 0, 0]),
            7,
        )
        .unwrap();

        assert_eq!(engine.level_up(), ActionOutcome::NoChange);
        assert_eq!(engine.level(), MAX_LEVEL);
    }

    #[test]
    fn level_up_regenerates_and_clears_the_queue() {
        let mut engine = engine(&[0, 1, 2]);
        tap(&mut engine, 0);

        assert_eq!(engine.level_up(), ActionOutcome::Changed);

        assert_eq!(engine.level(), 2);
        assert!(engine.queue().is_empty());
        // level 2 pool: 4 symbols x 6 tiles
        assert_eq!(engine.board().len(), 4 * TILES_PER_SYMBOL);
    }

    #[test]
    fn level_up_is_rejected_for_sequence_plans() {
        let mut engine = MatchEngine::from_board(
            catalog(1),
            LevelPlan::sequence(alloc::vec![1, 2]),
            1,
            spread_board(&[0, 0, 0]),
            7,
        )
        .unwrap();

        assert_eq!(engine.level_up(), ActionOutcome::NoChange);
    }

    #[test]
    fn restart_resets_a_lost_run() {
        let mut engine = engine(&[0, 0, 1, 1, 2, 2, 3, 4]);
        for index in 0..7 {
            tap(&mut engine, index);
        }
        assert_eq!(engine.state(), EngineState::Lost);

        engine.restart(3);

        assert_eq!(engine.state(), EngineState::Playing);
        assert_eq!(engine.level(), 3);
        assert!(engine.queue().is_empty());
        assert_eq!(engine.board().len(), 6 * TILES_PER_SYMBOL);
    }

    #[test]
    fn abandon_marks_the_run_lost() {
        let mut engine = engine(&[0, 1]);

        engine.abandon();

        assert_eq!(engine.state(), EngineState::Lost);
        assert_eq!(engine.click(0).unwrap(), ClickOutcome::Rejected);
    }

    #[test]
    fn queue_slots_group_same_symbol_tiles() {
        let mut engine = engine(&[0, 1, 0, 2]);
        tap(&mut engine, 0);
        tap(&mut engine, 1);
        tap(&mut engine, 2);

        let slots = engine.queue_slots();

        let order: Vec<&str> = slots.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, ["t0", "t2", "t1"]);
        let xs: Vec<Px> = slots.iter().map(|&(_, x)| x).collect();
        assert_eq!(xs, [QUEUE_ORIGIN_X, QUEUE_ORIGIN_X + TILE_SIZE, QUEUE_ORIGIN_X + 2 * TILE_SIZE]);
    }
}
