//! A square, runtime-sized grid of cells.
//!
//! Cells are stored row-major in a single `Vec`. Every accessor is bounds
//! checked and reports `BoardError::OutOfBounds` instead of panicking.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;

/// An `size×size` grid of `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`.
    pub fn new(size: usize) -> Self {
        Self::filled(size, T::default())
    }
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Grid {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `(row, col)` lies on the grid.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<T, BoardError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Sets the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Number of cells matching `pred`.
    pub fn count<F: Fn(&T) -> bool>(&self, pred: F) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }

    /// Iterate over `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / size, i % size, v))
    }

    /// One row of the grid.
    pub fn row(&self, row: usize) -> Result<&[T], BoardError> {
        if row >= self.size {
            return Err(BoardError::OutOfBounds { row, col: 0 });
        }
        let start = row * self.size;
        Ok(&self.cells[start..start + self.size])
    }

    /// Coordinates of the 3×3 block centred on `(row, col)`, clipped to the
    /// grid. The centre itself is included.
    pub fn neighborhood(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let size = self.size;
        let rows = row.saturating_sub(1)..=(row + 1).min(size.saturating_sub(1));
        rows.flat_map(move |r| {
            let cols = col.saturating_sub(1)..=(col + 1).min(size.saturating_sub(1));
            cols.map(move |c| (r, c))
        })
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if self.in_bounds(row, col) {
            Ok(row * self.size + col)
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}> [", self.size, self.size)?;
        for r in 0..self.size {
            let start = r * self.size;
            writeln!(f, "  {:?}", &self.cells[start..start + self.size])?;
        }
        write!(f, "]")
    }
}
