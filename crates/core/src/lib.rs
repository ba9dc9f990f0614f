//! Core automaton module - pure, deterministic, and testable
//!
//! This module contains the Game of Life state store and its stepping rule.
//! It has **no dependencies** on terminals, input devices, or clocks, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical generations
//! - **Testable**: Every rule and edge case is unit tested
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: Sparse live-cell set with bounded, non-wrapping geometry
//! - [`rng`]: Small LCG used for random fills
//! - [`snapshot`]: Render-side copy of a finished generation
//!
//! # Rules
//!
//! Standard Conway life (B3/S23) over a finite grid:
//!
//! - A dead cell with exactly 3 live neighbors is born
//! - A live cell with 2 or 3 live neighbors survives
//! - Everything else is dead in the next generation
//! - Cells beyond the edge are always dead (no wraparound)
//!
//! # Example
//!
//! ```
//! use tui_life_core::Grid;
//! use tui_life_types::{Coord, Layout};
//!
//! let mut grid = Grid::new(3, 3, Layout::default());
//! for row in 0..3 {
//!     grid.toggle(Coord::new(1, row));
//! }
//!
//! grid.step();
//! assert!(grid.is_alive(Coord::new(0, 1)));
//! assert!(grid.is_alive(Coord::new(2, 1)));
//! assert!(!grid.is_alive(Coord::new(1, 0)));
//! ```

pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use rng::SimpleRng;
pub use snapshot::GridSnapshot;
