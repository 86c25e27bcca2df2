use alloc::string::String;

use crate::{
    board::{TruthBoard, VisibleBoard},
    common::{BoardError, Cell, ShotOutcome},
};

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Complete,
}

/// One round of play: the hidden fleet, the player's chart and counters.
#[derive(Debug, Clone)]
pub struct GameSession {
    player: String,
    truth: TruthBoard,
    visible: VisibleBoard,
    shots: usize,
    hits: usize,
    target: usize,
}

impl GameSession {
    /// Start a round on a generated or hand-built pair of boards. The round
    /// is won once every segment on `truth` has been hit.
    ///
    /// Both boards must be unshot: `truth` holds only water and ships and
    /// `visible` only water.
    pub fn new(player: impl Into<String>, truth: TruthBoard, visible: VisibleBoard) -> Result<Self, BoardError> {
        if truth.size() != visible.size() {
            return Err(BoardError::InvalidConfig("truth and visible boards differ in size"));
        }
        if truth.grid().count(|&c| matches!(c, Cell::Hit | Cell::Miss)) > 0 {
            return Err(BoardError::InvalidConfig("truth board has already been shot at"));
        }
        if visible.grid().count(|&c| c != Cell::Water) > 0 {
            return Err(BoardError::InvalidConfig("visible board has already been shot at"));
        }
        let target = truth.segment_count();
        Ok(Self {
            player: player.into(),
            truth,
            visible,
            shots: 0,
            hits: 0,
            target,
        })
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn truth(&self) -> &TruthBoard {
        &self.truth
    }

    pub fn visible(&self) -> &VisibleBoard {
        &self.visible
    }

    /// Turns consumed so far. Repeats are not counted.
    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Segments that must be hit to finish the round.
    pub fn target(&self) -> usize {
        self.target
    }

    pub fn is_complete(&self) -> bool {
        self.hits >= self.target
    }

    pub fn status(&self) -> GameStatus {
        if self.is_complete() {
            GameStatus::Complete
        } else {
            GameStatus::InProgress
        }
    }

    /// Fire at (`row`, `col`).
    ///
    /// A cell already shown as hit or miss yields `Repeat` without touching
    /// any state. Otherwise one turn is consumed and both boards updated.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        if self.visible.is_resolved(row, col)? {
            log::debug!("repeat shot at ({}, {})", row, col);
            return Ok(ShotOutcome::Repeat);
        }
        let outcome = self.truth.strike(row, col)?;
        if !outcome.counts_as_shot() {
            log::warn!("({}, {}) resolved on the truth board but not the visible one", row, col);
            return Ok(outcome);
        }
        self.shots += 1;
        self.visible.mark(row, col, outcome)?;
        if outcome.is_hit() {
            self.hits += 1;
        }
        log::debug!(
            "shot {} at ({}, {}): {:?} [{}/{} hits]",
            self.shots,
            row,
            col,
            outcome,
            self.hits,
            self.target
        );
        Ok(outcome)
    }
}
