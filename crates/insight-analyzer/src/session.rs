//! Per-request analysis session state.
//!
//! Owned by whichever caller drives an analysis (CLI run, request handler);
//! passed by reference, never ambient. The report is always rebuilt from a
//! fresh evaluation pass, so anything that changes the inputs clears it.

use insight_core::{MoveRecord, Report};
use insight_game::GameData;

use crate::config::DEFAULT_DEPTH;

#[derive(Debug)]
pub struct AnalysisSession {
    game: GameData,
    depth: u32,
    /// 0 = starting position, 1..=n = after that ply.
    current_move_index: usize,
    report: Option<Report>,
}

impl AnalysisSession {
    pub fn new(game: GameData) -> Self {
        Self {
            game,
            depth: DEFAULT_DEPTH,
            current_move_index: 0,
            report: None,
        }
    }

    pub fn game(&self) -> &GameData {
        &self.game
    }

    pub fn ply_count(&self) -> usize {
        self.game.moves.len()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Changing depth invalidates the current report; it must be rebuilt
    /// from a new evaluation pass.
    pub fn set_depth(&mut self, depth: u32) {
        if depth != self.depth {
            self.depth = depth;
            self.report = None;
        }
    }

    pub fn current_move_index(&self) -> usize {
        self.current_move_index
    }

    /// Clamped to the game length.
    pub fn set_current_move_index(&mut self, index: usize) {
        self.current_move_index = index.min(self.ply_count());
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn set_report(&mut self, report: Report) {
        self.report = Some(report);
    }

    /// The classified record for the currently selected ply, if a report is
    /// present and the ply survived analysis.
    pub fn current_move(&self) -> Option<&MoveRecord> {
        if self.current_move_index == 0 {
            return None;
        }
        self.report.as_ref().and_then(|r| {
            r.moves
                .iter()
                .find(|m| m.move_index == self.current_move_index)
        })
    }
}
