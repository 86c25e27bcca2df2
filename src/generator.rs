//! Random fleet layout by rejection sampling.

use rand::Rng;

use crate::board::{TruthBoard, VisibleBoard};
use crate::common::BoardError;
use crate::config::GameConfig;
use crate::ship::{Orientation, Ship};

/// Builds fresh boards for a round from a validated [`GameConfig`].
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    config: GameConfig,
}

impl BoardGenerator {
    /// Validate `config` and wrap it.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Place the whole fleet on a new truth board and return it together
    /// with an all-water visible board of the same size.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<(TruthBoard, VisibleBoard), BoardError> {
        let size = self.config.board_size;
        let mut board = TruthBoard::new(size);
        for length in self.config.ship_lengths() {
            let ship = self.random_placement(&board, rng, length)?;
            board.place(ship)?;
        }
        log::debug!(
            "generated {}x{} board with {} ships ({} segments)",
            size,
            size,
            board.ships().len(),
            board.segment_count()
        );
        Ok((board, VisibleBoard::new(size)))
    }

    /// Sample anchors and orientations until a ship of `length` fits on
    /// `board` without touching anything, or the attempt budget runs out.
    pub fn random_placement<R: Rng>(
        &self,
        board: &TruthBoard,
        rng: &mut R,
        length: usize,
    ) -> Result<Ship, BoardError> {
        let size = board.size();
        if length == 0 || length > size {
            return Err(BoardError::ShipOutOfBounds);
        }
        let budget = self.config.max_placement_attempts;
        for attempt in 1..=budget {
            let orient = Orientation::random(rng);
            let max_r = if orient == Orientation::Vertical {
                size - length
            } else {
                size - 1
            };
            let max_c = if orient == Orientation::Horizontal {
                size - length
            } else {
                size - 1
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let ship = Ship::new(length, orient, r, c, size)?;
            match board.check_placement(&ship) {
                Ok(()) => {
                    log::trace!("length {} accepted after {} attempts", length, attempt);
                    return Ok(ship);
                }
                Err(BoardError::ShipOverlaps | BoardError::ShipTooClose) => {
                    log::trace!("rejected length {} at ({}, {}) {:?}", length, r, c, orient);
                }
                Err(e) => return Err(e),
            }
        }
        log::warn!("gave up placing ship of length {} after {} attempts", length, budget);
        Err(BoardError::UnableToPlaceShip {
            length,
            attempts: budget,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FleetEntry;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn same_seed_same_layout() {
        let generator = BoardGenerator::new(GameConfig::default()).unwrap();
        let (a, _) = generator.generate(&mut SmallRng::seed_from_u64(7)).unwrap();
        let (b, _) = generator.generate(&mut SmallRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn impossible_fleet_hits_retry_budget() {
        // Two length-3 ships can never sit apart on a 3x3 board.
        let config = GameConfig {
            board_size: 3,
            fleet: alloc::vec![FleetEntry::new(3, 2)],
            max_placement_attempts: 50,
        };
        let generator = BoardGenerator::new(config).unwrap();
        let err = generator
            .generate(&mut SmallRng::seed_from_u64(1))
            .unwrap_err();
        assert_eq!(
            err,
            BoardError::UnableToPlaceShip {
                length: 3,
                attempts: 50
            }
        );
    }
}
