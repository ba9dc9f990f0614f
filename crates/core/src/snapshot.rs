use crate::grid::Grid;

/// A fully computed generation, copied out for rendering.
///
/// Views only ever read a snapshot, never the live grid, so a frame can not
/// observe a half-stepped generation. The cell buffer is reused across
/// frames; it only reallocates when the grid shape changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GridSnapshot {
    pub rows: u16,
    pub cols: u16,
    /// Row-major, `rows * cols` entries
    pub cells: Vec<bool>,
    pub running: bool,
    pub generation: u64,
    pub population: usize,
}

impl GridSnapshot {
    /// Overwrite this snapshot with the grid's current generation.
    pub fn fill_from(&mut self, grid: &Grid, running: bool) {
        self.rows = grid.rows();
        self.cols = grid.cols();
        self.cells.clear();
        self.cells
            .extend(grid.enumerate_cells().map(|(_, alive)| alive));
        self.running = running;
        self.generation = grid.generation();
        self.population = grid.population();
    }

    pub fn is_alive(&self, col: u16, row: u16) -> bool {
        if col >= self.cols || row >= self.rows {
            return false;
        }
        self.cells
            .get(usize::from(row) * usize::from(self.cols) + usize::from(col))
            .copied()
            .unwrap_or(false)
    }

    /// FNV-1a over the visible state; changes whenever the frame would.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        let mut mix = |b: u8| {
            h ^= b as u64;
            h = h.wrapping_mul(0x00000100000001B3);
        };
        for b in self.rows.to_le_bytes() {
            mix(b);
        }
        for b in self.cols.to_le_bytes() {
            mix(b);
        }
        for &alive in &self.cells {
            mix(alive as u8);
        }
        mix(self.running as u8);
        for b in self.generation.to_le_bytes() {
            mix(b);
        }
        h
    }
}
