// grid.rs - Grid type for Conway's Game of Life

use std::fmt;

use crate::error::{LifeError, Result};

/// Fixed-size rectangular grid of dead/alive cells.
///
/// Cells are stored row-major. Dimensions never change after construction,
/// so two grids compare equal only when both their shape and every cell match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows  : usize,
    cols  : usize,
    cells : Vec<bool>,
}

impl Grid {
    /// All-dead grid of `rows` x `cols` cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimension { rows, cols });
        }
        Ok(Self { rows, cols, cells: vec![false; rows * cols] })
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell state at `(row, col)`. Coordinates outside the grid read as dead.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.contains(row, col) && self.cells[row * self.cols + col]
    }

    /// Writes a cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if self.contains(row, col) {
            self.cells[row * self.cols + col] = alive;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// True when no cell is alive.
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 { f.write_str(" ")?; }
                f.write_str(if self.get(row, col) { "■" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(5, 5).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.live_count(), 0);
        assert_eq!((grid.rows(), grid.cols()), (5, 5));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(Grid::new(0, 4), Err(LifeError::InvalidDimension { rows: 0, cols: 4 }));
        assert_eq!(Grid::new(4, 0), Err(LifeError::InvalidDimension { rows: 4, cols: 0 }));
    }

    #[test]
    fn out_of_range_set_is_ignored() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(3, 0, true);
        grid.set(0, 3, true);
        grid.set(usize::MAX, usize::MAX, true);
        assert!(grid.is_empty());
        assert!(!grid.get(7, 7));
    }

    #[test]
    fn equality_needs_same_shape_and_cells() {
        let a = Grid::new(2, 3).unwrap();
        let b = Grid::new(3, 2).unwrap();
        assert_ne!(a, b);

        let mut c = a.clone();
        assert_eq!(a, c);
        c.set(1, 2, true);
        assert_ne!(a, c);
    }

    #[test]
    fn live_cells_are_row_major() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.set(2, 1, true);
        grid.set(0, 3, true);
        grid.set(1, 0, true);
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(0, 3), (1, 0), (2, 1)]);
    }

    #[test]
    fn display_draws_rows() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(0, 1, true);
        assert_eq!(grid.to_string(), ". ■ .\n. . .\n");
    }
}
