//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input handling).
//!
//! # Grid Dimensions
//!
//! - **Columns**: 30 (indexed 0-29)
//! - **Rows**: 30 (indexed 0-29)
//!
//! Coordinates never wrap: anything outside `[0, cols) x [0, rows)` is invalid.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host frame interval (~60 FPS) |
//! | `STEP_INTERVAL_MS` | 200 | Minimum time between generations |
//! | `REPEAT_DELAY_TICKS` | 30 | Held input ticks before auto-repeat starts |
//! | `REPEAT_INTERVAL_TICKS` | 3 | Ticks between auto-repeats |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{Coord, Key, Layout, LifeConfig};
//!
//! let key = Key::from_str("toggleRun").unwrap();
//! assert_eq!(key, Key::ToggleRun);
//!
//! let config = LifeConfig::default();
//! assert_eq!(config.step_interval_ms, 200);
//!
//! let layout = Layout::new(20, 1, 60, 60);
//! assert_eq!(layout.pixel_to_coord(85, 60), Coord::new(1, 0));
//! ```

use std::fmt;

/// Default number of grid rows
pub const DEFAULT_ROWS: u16 = 30;

/// Default number of grid columns
pub const DEFAULT_COLS: u16 = 30;

/// Default cell edge length in pixels
pub const DEFAULT_CELL_SIZE: u16 = 20;

/// Default width of the cell border in pixels
pub const DEFAULT_EDGE_WIDTH: u16 = 1;

/// Default pixel offset of the grid's top-left corner
pub const DEFAULT_ORIGIN_X: i32 = 60;
pub const DEFAULT_ORIGIN_Y: i32 = 60;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Minimum wall-clock time between two generations while running
pub const STEP_INTERVAL_MS: u64 = 200;

/// Ticks an input must be held before it starts repeating
pub const REPEAT_DELAY_TICKS: u32 = 30;

/// Ticks between repeats once repeating
pub const REPEAT_INTERVAL_TICKS: u32 = 3;

/// Chance (in percent) that a cell starts alive on randomize
pub const RANDOM_DENSITY_PERCENT: u32 = 30;


/// A grid position: `col` grows to the right, `row` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The Moore-neighborhood coordinates around `self`.
    ///
    /// Results may lie outside any grid; callers filter by bounds. Offsets
    /// that would overflow `i32` are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dc, dr)| {
            Some(Coord::new(
                self.col.checked_add(dc)?,
                self.row.checked_add(dr)?,
            ))
        })
    }
}

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Pixel layout of the grid.
///
/// Only used to map pointer positions to cells (and by views to draw);
/// the simulation itself never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cell_size: u16,
    pub edge_width: u16,
    pub origin_x: i32,
    pub origin_y: i32,
}

impl Layout {
    pub fn new(cell_size: u16, edge_width: u16, origin_x: i32, origin_y: i32) -> Self {
        Self {
            cell_size,
            edge_width,
            origin_x,
            origin_y,
        }
    }

    /// Map a pixel position to a (possibly out-of-bounds) cell.
    ///
    /// Uses floor division so pixels left of / above the origin land on
    /// negative coordinates instead of collapsing onto column/row 0.
    pub fn pixel_to_coord(&self, x: i32, y: i32) -> Coord {
        let size = i64::from(self.cell_size.max(1));
        Coord::new(
            floor_cell(x, self.origin_x, size),
            floor_cell(y, self.origin_y, size),
        )
    }
}

// Widened so extreme pointer positions saturate instead of overflowing.
// Saturated values are far outside any u16-sized grid.
fn floor_cell(pixel: i32, origin: i32, size: i64) -> i32 {
    let cell = (i64::from(pixel) - i64::from(origin)).div_euclid(size);
    cell.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(
            DEFAULT_CELL_SIZE,
            DEFAULT_EDGE_WIDTH,
            DEFAULT_ORIGIN_X,
            DEFAULT_ORIGIN_Y,
        )
    }
}

/// Keys the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Kill every cell
    Clear,
    /// Switch between running and paused
    ToggleRun,
    /// Pause and advance exactly one generation
    Step,
    /// Replace the grid with a random population
    Randomize,
}

impl Key {
    /// Every key, in index order
    pub const ALL: [Key; 4] = [Key::Clear, Key::ToggleRun, Key::Step, Key::Randomize];

    /// Number of distinct keys
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index in `0..Key::COUNT`, handy for per-key state arrays
    pub fn index(self) -> usize {
        match self {
            Key::Clear => 0,
            Key::ToggleRun => 1,
            Key::Step => 2,
            Key::Randomize => 3,
        }
    }

    /// Parse key from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::Key;
    ///
    /// assert_eq!(Key::from_str("clear"), Some(Key::Clear));
    /// assert_eq!(Key::from_str("STEP"), Some(Key::Step));
    /// assert_eq!(Key::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clear" => Some(Key::Clear),
            "togglerun" => Some(Key::ToggleRun),
            "step" => Some(Key::Step),
            "randomize" => Some(Key::Randomize),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Clear => "clear",
            Key::ToggleRun => "toggleRun",
            Key::Step => "step",
            Key::Randomize => "randomize",
        }
    }
}

/// A rate-limited input event, ready for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer activation at a pixel position
    Pointer { x: i32, y: i32 },
    /// Discrete key press
    Key(Key),
}

/// Why an input was dropped.
///
/// These are never fatal: the interactive loop logs and discards them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    /// The pointer mapped to a cell outside the grid
    OutOfBounds(Coord),
    /// The key has no binding
    UnrecognizedKey,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ignored::OutOfBounds(coord) => write!(f, "pointer outside grid at {}", coord),
            Ignored::UnrecognizedKey => write!(f, "unrecognized key"),
        }
    }
}

impl std::error::Error for Ignored {}

/// All tunables for a simulation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    pub rows: u16,
    pub cols: u16,
    pub layout: Layout,
    pub step_interval_ms: u64,
    pub repeat_delay_ticks: u32,
    pub repeat_interval_ticks: u32,
    pub tick_ms: u32,
    /// Seed for randomized fills
    pub seed: u32,
    pub random_density_percent: u32,
}

impl LifeConfig {
    pub fn with_size(mut self, rows: u16, cols: u16) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_step_interval_ms(mut self, step_interval_ms: u64) -> Self {
        self.step_interval_ms = step_interval_ms;
        self
    }

    pub fn with_repeat(mut self, delay_ticks: u32, interval_ticks: u32) -> Self {
        self.repeat_delay_ticks = delay_ticks;
        self.repeat_interval_ticks = interval_ticks;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            layout: Layout::default(),
            step_interval_ms: STEP_INTERVAL_MS,
            repeat_delay_ticks: REPEAT_DELAY_TICKS,
            repeat_interval_ticks: REPEAT_INTERVAL_TICKS,
            tick_ms: TICK_MS,
            seed: 1,
            random_density_percent: RANDOM_DENSITY_PERCENT,
        }
    }
}
