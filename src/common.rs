//! Common types for the game: cell states, shot outcomes and board errors.

use core::fmt;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Open water, or an unknown cell on the visible board.
    #[default]
    Water,
    /// An un-hit ship segment. Only ever present on the truth board.
    Ship,
    /// A ship segment that has been shot.
    Hit,
    /// A shot that found only water.
    Miss,
}

impl Cell {
    /// Glyph used when drawing the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Ship => 'S',
            Cell::Hit => 'H',
            Cell::Miss => 'M',
        }
    }
}

/// Result of resolving a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed in water.
    Miss,
    /// Shot hit a ship that still has un-hit segments.
    Hit,
    /// Shot hit the last remaining segment of a ship of `length`.
    Sunk { length: usize },
    /// Cell was already resolved; nothing changed and no turn was used.
    Repeat,
}

impl ShotOutcome {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk { .. })
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, ShotOutcome::Sunk { .. })
    }

    /// Whether the shot consumed a turn.
    pub fn counts_as_shot(&self) -> bool {
        !matches!(self, ShotOutcome::Repeat)
    }
}

/// Errors returned by board, generator and session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column index is outside `[0, size)`.
    OutOfBounds { row: usize, col: usize },
    /// Ship index does not refer to a placed ship.
    InvalidIndex,
    /// Ship would extend past the board edge.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement touches another ship, diagonals included.
    ShipTooClose,
    /// Random placement ran out of attempts for a ship.
    UnableToPlaceShip { length: usize, attempts: usize },
    /// Game configuration cannot produce a playable board.
    InvalidConfig(&'static str),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate out of bounds: row={}, col={}", row, col)
            }
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipTooClose => write!(f, "Ship placement touches another ship"),
            BoardError::UnableToPlaceShip { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
            BoardError::InvalidConfig(reason) => write!(f, "Invalid game configuration: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
