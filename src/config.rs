use alloc::vec::Vec;

use crate::common::BoardError;

pub const BOARD_SIZE: usize = 7;

/// Largest supported board; columns are labelled with single letters.
pub const MAX_BOARD_SIZE: usize = 26;

pub const FLEET: [FleetEntry; 3] = [
    FleetEntry::new(3, 1),
    FleetEntry::new(2, 2),
    FleetEntry::new(1, 4),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 * 2 + 4;

/// Random placement attempts allowed per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// One line of the fleet manifest: `count` ships of `length` segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetEntry {
    length: usize,
    count: usize,
}

impl FleetEntry {
    pub const fn new(length: usize, count: usize) -> Self {
        Self { length, count }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Board dimensions and fleet used to generate a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet: Vec<FleetEntry>,
    pub max_placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Reject configurations that can never produce a board.
    ///
    /// Whether a valid fleet actually fits without touching is only known
    /// once placement runs out of attempts.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidConfig("board size must be between 1 and 26"));
        }
        if self.fleet.iter().all(|e| e.count == 0) {
            return Err(BoardError::InvalidConfig("fleet has no ships"));
        }
        if self
            .fleet
            .iter()
            .any(|e| e.length == 0 || e.length > self.board_size)
        {
            return Err(BoardError::InvalidConfig("ship length must fit on the board"));
        }
        if self.max_placement_attempts == 0 {
            return Err(BoardError::InvalidConfig("placement attempts must be non-zero"));
        }
        if self.total_segments() > self.board_size * self.board_size {
            return Err(BoardError::InvalidConfig("fleet has more segments than the board has cells"));
        }
        Ok(())
    }

    /// Number of segments across the whole fleet.
    pub fn total_segments(&self) -> usize {
        self.fleet.iter().map(|e| e.length * e.count).sum()
    }

    /// Every ship length to place, longest first.
    pub fn ship_lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .fleet
            .iter()
            .flat_map(|e| core::iter::repeat(e.length).take(e.count))
            .collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        lengths
    }
}
