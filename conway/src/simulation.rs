// simulation.rs - Facade tying the grid, the rule and the history together
//
// Renderers read through `grid()` and mutate only through this type, so the
// live grid is the single source of truth for what is on screen.

use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::history::History;
use crate::patterns::Pattern;
use crate::rules;

#[derive(Debug, Clone)]
pub struct Simulation {
    grid    : Grid,
    history : History,
}

impl Simulation {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let grid = Grid::new(rows, cols)?;
        let history = History::new(&grid);
        Ok(Self { grid, history })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.rows, config.cols)
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn get(&self, row: usize, col: usize) -> bool { self.grid.get(row, col) }

    pub fn rows(&self) -> usize { self.grid.rows() }
    pub fn cols(&self) -> usize { self.grid.cols() }

    /// Manual edit, recorded once per cell. Out-of-range coordinates are
    /// ignored entirely and leave the history (redo tail included) alone.
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
        if !self.grid.contains(row, col) {
            return;
        }
        self.grid.set(row, col, alive);
        self.history.record(&self.grid);
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let alive = !self.grid.get(row, col);
        self.set_cell(row, col, alive);
    }

    /// Computes and records the next generation.
    ///
    /// Returns false on extinction, in which case nothing changes and the
    /// driver loop should stop advancing.
    pub fn advance_generation(&mut self) -> bool {
        let (next, any_alive) = rules::step(&self.grid);
        if !any_alive {
            debug!(position = self.history.position(), "extinction, generation not advanced");
            return false;
        }
        self.grid = next;
        self.history.record(&self.grid);
        true
    }

    /// Rewinds one recorded state. Silently does nothing at the oldest one.
    pub fn go_to_previous_generation(&mut self) {
        if let Some(snapshot) = self.history.step_back() {
            self.grid = snapshot;
        }
    }

    /// Replays the next recorded state, or computes a new generation when
    /// the cursor already sits at the tail. Returns false on extinction.
    pub fn go_to_next_generation(&mut self) -> bool {
        match self.history.step_forward() {
            Some(snapshot) => {
                self.grid = snapshot;
                true
            }
            None => self.advance_generation(),
        }
    }

    pub fn restore_at(&mut self, index: usize) -> Result<()> {
        self.grid = self.history.restore(index)?;
        Ok(())
    }

    pub fn history_len(&self) -> usize { self.history.len() }

    pub fn history_position(&self) -> usize { self.history.position() }

    pub fn history(&self) -> &History { &self.history }

    /// Clears the grid and starts a fresh history.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.history = History::new(&self.grid);
    }

    /// Places live cells shifted by `offset`, dropping any that land
    /// outside the grid. Each placed cell is recorded separately.
    ///
    /// Returns how many cells were placed.
    pub fn load_cells<I>(&mut self, cells: I, offset: (i64, i64)) -> usize
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut placed = 0;
        for (row, col) in cells {
            let (Some(r), Some(c)) = (shift(row, offset.0), shift(col, offset.1)) else {
                continue;
            };
            if self.grid.contains(r, c) {
                self.set_cell(r, c, true);
                placed += 1;
            }
        }
        placed
    }

    /// Resets, then places a builtin pattern near the centre of the grid.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> usize {
        self.reset();
        let offset = self.centered_offset();
        let placed = self.load_cells(pattern.coords(), offset);
        info!(pattern = pattern.name, placed, "loaded builtin pattern");
        placed
    }

    /// Top-left placement used for builtin patterns.
    pub fn centered_offset(&self) -> (i64, i64) {
        (self.rows() as i64 / 2 - 2, self.cols() as i64 / 2 - 2)
    }
}

// None when the shifted coordinate is negative or overflows.
fn shift(value: i64, by: i64) -> Option<usize> {
    value.checked_add(by).and_then(|v| usize::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use crate::patterns;

    fn blinker() -> Simulation {
        let mut sim = Simulation::new(5, 5).unwrap();
        sim.set_cell(2, 1, true);
        sim.set_cell(2, 2, true);
        sim.set_cell(2, 3, true);
        sim
    }

    #[test]
    fn set_cell_changes_state() {
        let mut sim = Simulation::new(3, 3).unwrap();
        sim.set_cell(1, 1, true);
        assert!(sim.get(1, 1));
        sim.set_cell(1, 1, false);
        assert!(!sim.get(1, 1));
        assert_eq!(sim.history_len(), 3);
    }

    #[test]
    fn each_cell_edit_is_recorded() {
        let sim = blinker();
        assert_eq!(sim.history_len(), 4);
        assert_eq!(sim.history_position(), 3);
    }

    #[test]
    fn out_of_range_edit_adds_nothing() {
        let mut sim = Simulation::new(3, 3).unwrap();
        sim.set_cell(5, 5, true);
        assert_eq!(sim.history_len(), 1);
        assert!(sim.grid().is_empty());
    }

    #[test]
    fn out_of_range_edit_keeps_redo_tail() {
        let mut sim = blinker();
        assert!(sim.advance_generation());
        assert!(sim.advance_generation());
        sim.restore_at(1).unwrap();
        let before = sim.grid().clone();

        sim.set_cell(99, 99, true);
        assert_eq!(sim.history_len(), 6);
        assert_eq!(sim.history_position(), 1);
        assert_eq!(sim.grid(), &before);
        assert!(sim.go_to_next_generation());
        assert_eq!(sim.history_position(), 2);
    }

    #[test]
    fn invalid_dimensions_fail() {
        assert_eq!(Simulation::new(0, 0).unwrap_err(), LifeError::InvalidDimension { rows: 0, cols: 0 });
        let config = SimulationConfig::default().with_size(10, 0);
        assert!(Simulation::from_config(&config).is_err());
    }

    #[test]
    fn advance_on_extinct_grid_is_noop() {
        let mut sim = Simulation::new(4, 4).unwrap();
        sim.set_cell(1, 1, true);
        let before = sim.grid().clone();
        let position = sim.history_position();

        assert!(!sim.advance_generation());
        assert_eq!(sim.grid(), &before);
        assert_eq!(sim.history_position(), position);
        assert_eq!(sim.history_len(), 2);
    }

    #[test]
    fn manual_edit_revives_after_extinction() {
        let mut sim = Simulation::new(4, 4).unwrap();
        assert!(!sim.advance_generation());
        for (r, c) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            sim.set_cell(r, c, true);
        }
        assert!(sim.advance_generation());
    }

    #[test]
    fn previous_at_oldest_is_silent() {
        let mut sim = Simulation::new(3, 3).unwrap();
        sim.go_to_previous_generation();
        assert_eq!(sim.history_position(), 0);
        assert!(sim.grid().is_empty());
    }

    #[test]
    fn next_replays_before_computing() {
        let mut sim = blinker();
        assert!(sim.advance_generation());
        assert!(sim.advance_generation());
        let len = sim.history_len();
        let latest = sim.grid().clone();

        sim.go_to_previous_generation();
        sim.go_to_previous_generation();
        assert!(sim.go_to_next_generation());
        assert!(sim.go_to_next_generation());
        assert_eq!(sim.history_len(), len);
        assert_eq!(sim.grid(), &latest);
    }

    #[test]
    fn next_at_tail_matches_advance() {
        let mut replayed = blinker();
        let mut advanced = blinker();

        assert!(replayed.go_to_next_generation());
        assert!(advanced.advance_generation());
        assert_eq!(replayed.grid(), advanced.grid());
        assert_eq!(replayed.history_len(), advanced.history_len());
    }

    #[test]
    fn restore_at_installs_snapshot() {
        let mut sim = blinker();
        sim.restore_at(1).unwrap();
        assert_eq!(sim.grid().live_cells().collect::<Vec<_>>(), vec![(2, 1)]);
        assert_eq!(sim.history_len(), 4);

        let err = sim.restore_at(4).unwrap_err();
        assert_eq!(err, LifeError::IndexOutOfRange { index: 4, len: 4 });
        assert_eq!(sim.history_position(), 1);
    }

    #[test]
    fn edit_after_rewind_prunes_branch() {
        let mut sim = blinker();
        sim.restore_at(1).unwrap();
        sim.set_cell(0, 0, true);
        assert_eq!(sim.history_len(), 3);
        assert!(sim.history().is_at_tail());
    }

    #[test]
    fn load_cells_ignores_out_of_range() {
        let mut sim = Simulation::new(5, 5).unwrap();
        let placed = sim.load_cells([(0, 0), (-2, 2), (4, 4), (2, 9)], (1, 0));
        assert_eq!(placed, 1);
        assert_eq!(sim.grid().live_cells().collect::<Vec<_>>(), vec![(1, 0)]);
    }

    #[test]
    fn builtin_pattern_is_centered() {
        let mut sim = Simulation::new(20, 20).unwrap();
        sim.set_cell(0, 0, true);
        let glider = patterns::find_builtin("Glider").unwrap();
        assert_eq!(sim.load_pattern(glider), 5);
        assert!(!sim.get(0, 0));
        assert!(sim.get(8, 9));
        assert_eq!(sim.history_len(), 6);
    }

    #[test]
    fn reset_starts_new_history() {
        let mut sim = blinker();
        sim.reset();
        assert!(sim.grid().is_empty());
        assert_eq!(sim.history_len(), 1);
        assert_eq!(sim.history_position(), 0);
    }
}
