//! Simulation engine: wires input events and wall-clock cadence to the grid.
//!
//! Two states, `Paused` (initial) and `Running`, switched by
//! [`Key::ToggleRun`](crate::types::Key::ToggleRun). While running, at most
//! one generation is computed per `step_interval_ms`, no matter how often the
//! host ticks.

pub mod controller;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use controller::Controller;
