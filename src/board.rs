//! Truth and visible boards.
//!
//! The truth board knows where every ship is and which ship owns each
//! segment; the visible board is the player's chart and only ever shows
//! water, hits and misses.

use alloc::vec::Vec;

use crate::common::{BoardError, Cell, ShotOutcome};
use crate::grid::Grid;
use crate::ship::{Ship, ShipId};

/// Ship placements plus per-ship hit tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthBoard {
    cells: Grid<Cell>,
    owners: Grid<Option<ShipId>>,
    ships: Vec<Ship>,
    ship_hits: Vec<usize>,
}

impl TruthBoard {
    /// Create an all-water board with no ships.
    pub fn new(size: usize) -> Self {
        TruthBoard {
            cells: Grid::new(size),
            owners: Grid::new(size),
            ships: Vec::new(),
            ship_hits: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// Ships in placement order; a ship's position is its [`ShipId`].
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Result<&Ship, BoardError> {
        self.ships.get(id.0).ok_or(BoardError::InvalidIndex)
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.cells.get(row, col)
    }

    /// Ship occupying (`row`, `col`), hit or not.
    pub fn owner(&self, row: usize, col: usize) -> Result<Option<ShipId>, BoardError> {
        self.owners.get(row, col)
    }

    /// Underlying cell grid.
    pub fn grid(&self) -> &Grid<Cell> {
        &self.cells
    }

    /// Total number of ship segments placed.
    pub fn segment_count(&self) -> usize {
        self.ships.iter().map(Ship::length).sum()
    }

    /// Number of segments still un-hit.
    pub fn remaining_segments(&self) -> usize {
        self.cells.count(|&c| c == Cell::Ship)
    }

    pub fn is_sunk(&self, id: ShipId) -> Result<bool, BoardError> {
        let ship = self.ship(id)?;
        Ok(self.ship_hits[id.0] == ship.length())
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships
            .iter()
            .zip(&self.ship_hits)
            .all(|(ship, &hits)| hits == ship.length())
    }

    /// Check that `ship` fits without overlapping or touching any placed ship.
    pub fn check_placement(&self, ship: &Ship) -> Result<(), BoardError> {
        let mut touching = false;
        for (r, c) in ship.cells() {
            if self.cells.get(r, c).map_err(|_| BoardError::ShipOutOfBounds)? != Cell::Water {
                return Err(BoardError::ShipOverlaps);
            }
            touching |= self
                .cells
                .neighborhood(r, c)
                .any(|(nr, nc)| matches!(self.cells.get(nr, nc), Ok(Cell::Ship | Cell::Hit)));
        }
        if touching {
            Err(BoardError::ShipTooClose)
        } else {
            Ok(())
        }
    }

    /// Place a ship, enforcing the one-cell buffer around every other ship.
    pub fn place(&mut self, ship: Ship) -> Result<ShipId, BoardError> {
        self.check_placement(&ship)?;
        let id = ShipId(self.ships.len());
        for (r, c) in ship.cells() {
            self.cells.set(r, c, Cell::Ship)?;
            self.owners.set(r, c, Some(id))?;
        }
        self.ships.push(ship);
        self.ship_hits.push(0);
        log::debug!(
            "placed ship {:?}: length {} at {:?} {:?}",
            id,
            ship.length(),
            ship.origin(),
            ship.orientation()
        );
        Ok(id)
    }

    /// Resolve a shot against the ship layout.
    ///
    /// A `Ship` cell becomes `Hit`; the outcome is `Sunk` once every cell
    /// owned by that ship is hit. Water stays water on this board. Shooting
    /// an already hit cell reports `Repeat` and changes nothing.
    pub fn strike(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        match self.cells.get(row, col)? {
            Cell::Ship => {
                let id = self
                    .owners
                    .get(row, col)?
                    .ok_or(BoardError::InvalidIndex)?;
                self.cells.set(row, col, Cell::Hit)?;
                self.ship_hits[id.0] += 1;
                let length = self.ships[id.0].length();
                if self.ship_hits[id.0] == length {
                    Ok(ShotOutcome::Sunk { length })
                } else {
                    Ok(ShotOutcome::Hit)
                }
            }
            Cell::Hit | Cell::Miss => Ok(ShotOutcome::Repeat),
            Cell::Water => Ok(ShotOutcome::Miss),
        }
    }
}

/// The player's view: water, hits and misses only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleBoard {
    cells: Grid<Cell>,
}

impl VisibleBoard {
    /// Create an all-water chart.
    pub fn new(size: usize) -> Self {
        VisibleBoard { cells: Grid::new(size) }
    }

    pub fn size(&self) -> usize {
        self.cells.size()
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.cells.get(row, col)
    }

    /// Returns `true` once the cell has been shot.
    pub fn is_resolved(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.cells.get(row, col)? != Cell::Water)
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.cells
    }

    pub fn hits(&self) -> usize {
        self.cells.count(|&c| c == Cell::Hit)
    }

    pub fn misses(&self) -> usize {
        self.cells.count(|&c| c == Cell::Miss)
    }

    pub(crate) fn mark(&mut self, row: usize, col: usize, outcome: ShotOutcome) -> Result<(), BoardError> {
        let cell = match outcome {
            ShotOutcome::Hit | ShotOutcome::Sunk { .. } => Cell::Hit,
            ShotOutcome::Miss => Cell::Miss,
            ShotOutcome::Repeat => return Ok(()),
        };
        self.cells.set(row, col, cell)
    }
}
