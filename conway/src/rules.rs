// rules.rs - Transition rule for Conway's Game of Life
//
// Neighbours outside the grid count as dead; there is no wraparound.

use crate::grid::Grid;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Number of live cells in the Moore neighbourhood of `(row, col)`.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if grid.get(nr, nc) { count += 1; }
    }
    count
}

/// Next state of a single cell.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Computes the next generation into a fresh grid.
///
/// The input is left untouched so callers can compare old and new states.
/// The returned flag is true iff at least one cell of the new grid is alive.
pub fn step(grid: &Grid) -> (Grid, bool) {
    let mut next = grid.clone();
    let mut any_alive = false;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let alive = next_state(grid.get(row, col), count_live_neighbors(grid, row, col));
            next.set(row, col, alive);
            any_alive |= alive;
        }
    }
    (next, any_alive)
}
