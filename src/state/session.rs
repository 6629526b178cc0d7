//! Round state for one player: board size, current layout, status and timing.
//! Driven through [`yew::Reducible`] so the host can `use_reducer` it.

use std::rc::Rc;

use yew::Reducible;

use crate::config::{Difficulty, GameConfig};
use crate::layout::{self, Layout};
use crate::model::{ItemId, Rect, SizeRange};
use crate::random::SeededRandom;
use crate::state::stats::SessionStats;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Playing,
    Success,
}

#[derive(Clone, Debug)]
pub struct GameSession {
    pub config: GameConfig,
    pub difficulty: Difficulty,
    /// Last measured board size.
    pub board: Rect,
    pub layout: Layout,
    /// Bumped on every relayout; selections carry it so clicks on a replaced
    /// layout are dropped.
    pub generation: u32,
    /// Started rounds plus reshuffles.
    pub round: u32,
    pub status: Status,
    pub started_at_ms: f64,
    pub elapsed_ms: f64,
    /// Decoys clicked this round.
    pub misses: u32,
    pub stats: SessionStats,
    rng: SeededRandom,
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    Resize { width: f64, height: f64, now_ms: f64 },
    SetDifficulty(Difficulty),
    Start { now_ms: f64 },
    Reshuffle,
    Select { generation: u32, id: ItemId, now_ms: f64 },
    Dismiss,
    RestoreStats(SessionStats),
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            difficulty: Difficulty::default(),
            board: Rect::default(),
            layout: Layout::empty(),
            generation: 0,
            round: 0,
            status: Status::Idle,
            started_at_ms: 0.0,
            elapsed_ms: 0.0,
            misses: 0,
            stats: SessionStats::default(),
            rng: SeededRandom::from_seed(seed),
        }
    }

    pub fn count(&self) -> usize {
        self.config.count_for(self.difficulty)
    }

    pub fn size_range(&self) -> SizeRange {
        self.config.size_range_for(self.board.width)
    }

    /// Time of the round just won; `None` unless the target was found.
    pub fn found_ms(&self) -> Option<f64> {
        (self.status == Status::Success).then_some(self.elapsed_ms)
    }

    fn relayout(&mut self) {
        let sizes = self.size_range();
        self.layout = layout::layout(self.board, self.config.padding, self.count(), sizes, &mut self.rng);
        self.generation = self.generation.wrapping_add(1);
    }

    fn start(&mut self, now_ms: f64) {
        self.status = Status::Playing;
        self.started_at_ms = now_ms;
        self.elapsed_ms = 0.0;
        self.misses = 0;
        self.round = self.round.saturating_add(1);
        self.relayout();
    }
}

impl Reducible for GameSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SessionAction::*;
        let mut new = (*self).clone();
        match action {
            Resize { width, height, now_ms } => {
                let board = Rect::new(width, height);
                if board == new.board {
                    return self;
                }
                new.board = board;
                if new.status == Status::Idle && board.is_positive() {
                    new.start(now_ms);
                } else {
                    new.relayout();
                }
            }
            SetDifficulty(difficulty) => {
                if difficulty == new.difficulty {
                    return self;
                }
                new.difficulty = difficulty;
                new.relayout();
            }
            Start { now_ms } => new.start(now_ms),
            Reshuffle => {
                new.round = new.round.saturating_add(1);
                new.relayout();
            }
            Select { generation, id, now_ms } => {
                if generation != new.generation {
                    return self;
                }
                match new.status {
                    Status::Idle => new.start(now_ms),
                    Status::Playing if new.layout.is_target(id) => {
                        new.elapsed_ms = (now_ms - new.started_at_ms).max(0.0);
                        new.status = Status::Success;
                        new.stats.record_win(new.elapsed_ms);
                        log::debug!("target found in {:.0}ms after {} misses", new.elapsed_ms, new.misses);
                    }
                    Status::Playing if new.layout.get(id).is_some() => {
                        new.misses = new.misses.saturating_add(1);
                    }
                    _ => return self,
                }
            }
            Dismiss => {
                if new.status == Status::Idle {
                    return self;
                }
                new.status = Status::Idle;
            }
            RestoreStats(stats) => new.stats = stats,
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Rc<GameSession> {
        Rc::new(GameSession::new(GameConfig::default(), 42))
    }

    fn resized(s: Rc<GameSession>) -> Rc<GameSession> {
        s.reduce(SessionAction::Resize {
            width: 960.0,
            height: 640.0,
            now_ms: 1_000.0,
        })
    }

    #[test]
    fn first_measurement_starts_a_round() {
        let s = resized(session());
        assert_eq!(s.status, Status::Playing);
        assert_eq!(s.round, 1);
        assert_eq!(s.layout.len(), 90);
        assert_eq!(s.started_at_ms, 1_000.0);
    }

    #[test]
    fn zero_size_board_stays_idle() {
        let s = session().reduce(SessionAction::Resize {
            width: 0.0,
            height: 0.0,
            now_ms: 0.0,
        });
        assert_eq!(s.status, Status::Idle);
        assert!(s.layout.is_empty());
    }

    #[test]
    fn finding_the_target_records_time() {
        let s = resized(session());
        let target = s.layout.target().unwrap().id;
        let s = s.clone().reduce(SessionAction::Select {
            generation: s.generation,
            id: target,
            now_ms: 4_500.0,
        });
        assert_eq!(s.status, Status::Success);
        assert_eq!(s.elapsed_ms, 3_500.0);
        assert_eq!(s.stats.best_ms, Some(3_500.0));
        assert_eq!(s.found_ms(), Some(3_500.0));
        let s = s.reduce(SessionAction::Dismiss);
        assert_eq!(s.found_ms(), None);
        assert_eq!(s.stats.best_ms, Some(3_500.0));
    }

    #[test]
    fn decoys_count_as_misses() {
        let s = resized(session());
        let decoy = s.layout.items().iter().find(|it| !it.is_target).unwrap().id;
        let s = s.clone().reduce(SessionAction::Select {
            generation: s.generation,
            id: decoy,
            now_ms: 2_000.0,
        });
        assert_eq!(s.status, Status::Playing);
        assert_eq!(s.misses, 1);
        assert_eq!(s.found_ms(), None);
    }

    #[test]
    fn stale_selections_are_ignored() {
        let s = resized(session());
        let old_generation = s.generation;
        let target = s.layout.target().unwrap().id;
        let s = s.reduce(SessionAction::Reshuffle);
        let after = s.clone().reduce(SessionAction::Select {
            generation: old_generation,
            id: target,
            now_ms: 2_000.0,
        });
        assert!(Rc::ptr_eq(&s, &after));
        assert_eq!(after.status, Status::Playing);
    }

    #[test]
    fn reshuffle_keeps_status_and_count() {
        let s = resized(session());
        let before = s.layout.clone();
        let s = s.reduce(SessionAction::Reshuffle);
        assert_eq!(s.round, 2);
        assert_eq!(s.status, Status::Playing);
        assert_eq!(s.layout.len(), 90);
        assert_ne!(s.layout, before);
    }

    #[test]
    fn difficulty_changes_the_count() {
        let s = resized(session()).reduce(SessionAction::SetDifficulty(Difficulty::Insane));
        assert_eq!(s.layout.len(), 240);
        assert_eq!(s.round, 1);
    }

    #[test]
    fn selecting_while_idle_starts_instead() {
        let s = resized(session()).reduce(SessionAction::Dismiss);
        assert_eq!(s.status, Status::Idle);
        let target = s.layout.target().unwrap().id;
        let s = s.clone().reduce(SessionAction::Select {
            generation: s.generation,
            id: target,
            now_ms: 9_000.0,
        });
        assert_eq!(s.status, Status::Playing);
        assert_eq!(s.round, 2);
        assert_eq!(s.stats.rounds_won, 0);
    }

    #[test]
    fn restored_stats_survive_new_rounds() {
        let stats = SessionStats {
            best_ms: Some(2_000.0),
            rounds_won: 4,
        };
        let s = session().reduce(SessionAction::RestoreStats(stats));
        let s = resized(s).reduce(SessionAction::Start { now_ms: 5_000.0 });
        assert_eq!(s.stats, stats);
        assert_eq!(s.round, 2);
    }
}
