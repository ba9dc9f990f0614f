//! Grid module - the automaton's live-cell store
//!
//! The grid is a fixed `cols x rows` rectangle with no wraparound.
//! Live cells are kept sparsely in a hash set keyed by [`Coord`]; a dead cell
//! costs nothing. Coordinates: (col, row) where col ranges 0..cols (left to
//! right) and row ranges 0..rows (top to bottom).

use std::collections::HashSet;

use log::trace;

use crate::rng::SimpleRng;
use crate::types::{Coord, Layout};

/// Conway's rule: birth on 3, survival on 2 or 3.
#[inline(always)]
fn next_state(alive: bool, live_neighbors: u8) -> bool {
    (alive && live_neighbors == 2) || live_neighbors == 3
}

/// The automaton state: geometry plus the set of live cells
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: u16,
    cols: u16,
    layout: Layout,
    live: HashSet<Coord>,
    generation: u64,
}

impl Grid {
    /// Create an empty grid. Zero dimensions are bumped to 1.
    pub fn new(rows: u16, cols: u16, layout: Layout) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
            layout,
            live: HashSet::new(),
            generation: 0,
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of steps since creation or the last [`Grid::clear`]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Check if `cell` lies inside the grid
    #[inline(always)]
    pub fn contains(&self, cell: Coord) -> bool {
        cell.col >= 0
            && cell.col < i32::from(self.cols)
            && cell.row >= 0
            && cell.row < i32::from(self.rows)
    }

    /// Out-of-bounds cells are simply dead.
    pub fn is_alive(&self, cell: Coord) -> bool {
        self.live.contains(&cell)
    }

    /// Flip a cell. Returns the new state, or None if `cell` is out of bounds
    /// (in which case nothing changes).
    pub fn toggle(&mut self, cell: Coord) -> Option<bool> {
        if !self.contains(cell) {
            return None;
        }
        if self.live.remove(&cell) {
            Some(false)
        } else {
            self.live.insert(cell);
            Some(true)
        }
    }

    /// Set a cell's state.
    /// Returns false if out of bounds
    pub fn set_alive(&mut self, cell: Coord, alive: bool) -> bool {
        if !self.contains(cell) {
            return false;
        }
        if alive {
            self.live.insert(cell);
        } else {
            self.live.remove(&cell);
        }
        true
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.live.clear();
        self.generation = 0;
    }

    /// Live cells among the 8 surrounding positions. Neighbors off the edge
    /// count as dead.
    pub fn count_live_neighbors(&self, cell: Coord) -> u8 {
        cell.neighbors()
            .filter(|n| self.contains(*n) && self.live.contains(n))
            .count() as u8
    }

    /// Advance one generation.
    ///
    /// Every position is evaluated against the current (frozen) live set and
    /// the results go into a fresh set, which then replaces the old one.
    pub fn step(&mut self) {
        let mut next = HashSet::with_capacity(self.live.len());

        for row in 0..i32::from(self.rows) {
            for col in 0..i32::from(self.cols) {
                let cell = Coord::new(col, row);
                let n = self.count_live_neighbors(cell);
                if next_state(self.live.contains(&cell), n) {
                    next.insert(cell);
                }
            }
        }

        self.live = next;
        self.generation += 1;
        trace!(
            "generation {} population {}",
            self.generation,
            self.live.len()
        );
    }

    /// Every position in row-major order with its state.
    ///
    /// Read-only; call again to restart.
    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        let cols = i32::from(self.cols);
        (0..i32::from(self.rows)).flat_map(move |row| {
            (0..cols).map(move |col| {
                let cell = Coord::new(col, row);
                (cell, self.live.contains(&cell))
            })
        })
    }

    /// Live cells in no particular order
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.live.iter().copied()
    }

    /// Cell under a pixel position, if it is inside the grid
    pub fn cell_at_pixel(&self, x: i32, y: i32) -> Option<Coord> {
        let cell = self.layout.pixel_to_coord(x, y);
        self.contains(cell).then_some(cell)
    }

    /// Replace the population with random cells at roughly `density_percent`.
    pub fn randomize(&mut self, rng: &mut SimpleRng, density_percent: u32) {
        self.clear();
        for row in 0..i32::from(self.rows) {
            for col in 0..i32::from(self.cols) {
                if rng.chance(density_percent) {
                    self.live.insert(Coord::new(col, row));
                }
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_ROWS,
            crate::types::DEFAULT_COLS,
            Layout::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: u16, cols: u16) -> Grid {
        Grid::new(rows, cols, Layout::default())
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8u8 {
            assert_eq!(next_state(false, n), n == 3, "dead with {}", n);
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {}", n);
        }
    }

    #[test]
    fn test_zero_dimensions_are_clamped() {
        let g = grid(0, 0);
        assert_eq!((g.rows(), g.cols()), (1, 1));
    }

    #[test]
    fn test_corner_has_three_candidates() {
        let mut g = grid(3, 3);
        for (cell, _) in g.clone().enumerate_cells() {
            g.set_alive(cell, true);
        }
        assert_eq!(g.count_live_neighbors(Coord::new(0, 0)), 3);
        assert_eq!(g.count_live_neighbors(Coord::new(2, 2)), 3);
        assert_eq!(g.count_live_neighbors(Coord::new(1, 0)), 5);
        assert_eq!(g.count_live_neighbors(Coord::new(1, 1)), 8);
    }

    #[test]
    fn test_neighbors_outside_grid_are_not_counted() {
        let mut g = grid(2, 2);
        g.set_alive(Coord::new(0, 0), true);
        // (-1, -1) is adjacent to (0, 0) but off-grid.
        assert_eq!(g.count_live_neighbors(Coord::new(-1, -1)), 1);
        assert_eq!(g.count_live_neighbors(Coord::new(1, 1)), 1);
    }

    #[test]
    fn test_enumerate_is_row_major() {
        let g = grid(2, 3);
        let cells: Vec<Coord> = g.enumerate_cells().map(|(c, _)| c).collect();
        assert_eq!(
            cells,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(2, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_toggle_reports_new_state() {
        let mut g = grid(4, 4);
        assert_eq!(g.toggle(Coord::new(1, 2)), Some(true));
        assert_eq!(g.toggle(Coord::new(1, 2)), Some(false));
        assert_eq!(g.toggle(Coord::new(4, 0)), None);
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut g = grid(4, 4);
        for c in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            g.set_alive(Coord::new(c.0, c.1), true);
        }
        let before = g.clone();
        g.step();
        assert_eq!(g.live, before.live);
        assert_eq!(g.generation(), 1);
    }

    #[test]
    fn test_clear_resets_generation() {
        let mut g = grid(3, 3);
        g.step();
        g.step();
        assert_eq!(g.generation(), 2);
        g.clear();
        assert_eq!(g.generation(), 0);
    }

    #[test]
    fn test_cell_at_pixel_respects_origin() {
        let g = Grid::new(30, 30, Layout::new(20, 1, 60, 60));
        assert_eq!(g.cell_at_pixel(60, 60), Some(Coord::new(0, 0)));
        assert_eq!(g.cell_at_pixel(659, 659), Some(Coord::new(29, 29)));
        assert_eq!(g.cell_at_pixel(660, 60), None);
        assert_eq!(g.cell_at_pixel(59, 60), None);
    }

    #[test]
    fn test_randomize_is_deterministic_and_in_bounds() {
        let mut a = grid(10, 12);
        let mut b = grid(10, 12);
        a.randomize(&mut SimpleRng::new(5), 30);
        b.randomize(&mut SimpleRng::new(5), 30);
        assert_eq!(a.live, b.live);
        assert!(a.population() > 0);
        assert!(a.live_cells().all(|c| a.contains(c)));
    }
}
