//! Ship definitions: orientation, footprint and bounds checking.

use rand::Rng;

use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Pick an orientation with equal probability.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Index of a ship placed on a [`TruthBoard`](crate::TruthBoard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShipId(pub usize);

/// A straight run of `length` cells anchored at its top-left segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    row: usize,
    col: usize,
}

impl Ship {
    /// Describe a ship at (`row`, `col`) running right or down from there.
    /// Returns `ShipOutOfBounds` if any segment falls off a `board_size` board.
    pub fn new(
        length: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
        board_size: usize,
    ) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidConfig("ship length must be non-zero"));
        }
        let end = match orientation {
            Orientation::Horizontal => col.checked_add(length - 1).map(|end_col| (row, end_col)),
            Orientation::Vertical => row.checked_add(length - 1).map(|end_row| (end_row, col)),
        };
        let Some((end_row, end_col)) = end else {
            return Err(BoardError::ShipOutOfBounds);
        };
        if end_row >= board_size || end_col >= board_size {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Ship {
            length,
            orientation,
            row,
            col,
        })
    }

    /// Coordinates of every segment, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Ship {
            length,
            orientation,
            row,
            col,
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Returns `true` if the ship covers (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => row == self.row && col >= self.col && col < self.col + self.length,
            Orientation::Vertical => col == self.col && row >= self.row && row < self.row + self.length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Anchor of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
