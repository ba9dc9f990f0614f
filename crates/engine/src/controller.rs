//! Simulation controller - run/pause state, step cadence, input dispatch
//!
//! The host calls [`Controller::tick`] once per frame with a monotonic
//! timestamp. Input arrives as already rate-limited [`InputEvent`]s (see the
//! input crate's repeat gates) and is queued until the next tick drains it.

use std::collections::VecDeque;

use log::{debug, info};

use crate::core::{Grid, GridSnapshot, SimpleRng};
use crate::types::{Coord, Ignored, InputEvent, Key, LifeConfig};

/// Owns the grid and decides when it changes.
#[derive(Debug, Clone)]
pub struct Controller {
    grid: Grid,
    running: bool,
    step_interval_ms: u64,
    /// Timestamp (ms) of the last automatic or manual step
    last_step_ms: u64,
    pending: VecDeque<InputEvent>,
    rng: SimpleRng,
    random_density_percent: u32,
}

impl Controller {
    /// Create a paused controller with an empty grid.
    pub fn new(config: &LifeConfig) -> Self {
        Self::with_grid(Grid::new(config.rows, config.cols, config.layout), config)
    }

    /// Wrap an existing grid (e.g. one seeded with a pattern).
    pub fn with_grid(grid: Grid, config: &LifeConfig) -> Self {
        Self {
            grid,
            running: false,
            step_interval_ms: config.step_interval_ms,
            last_step_ms: 0,
            pending: VecDeque::new(),
            rng: SimpleRng::new(config.seed),
            random_density_percent: config.random_density_percent,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn step_interval_ms(&self) -> u64 {
        self.step_interval_ms
    }

    /// Queue an event for the next [`Controller::tick`].
    pub fn push_event(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn handle_key_event(&mut self, key: Key) {
        match key {
            Key::Clear => {
                self.grid.clear();
                info!("grid cleared");
            }
            Key::ToggleRun => {
                self.running = !self.running;
                info!("{}", if self.running { "running" } else { "paused" });
            }
            Key::Step => {
                // Single-stepping always leaves the simulation paused.
                self.running = false;
                self.grid.step();
                debug!("single step to generation {}", self.grid.generation());
            }
            Key::Randomize => {
                self.grid
                    .randomize(&mut self.rng, self.random_density_percent);
                info!("randomized, population {}", self.grid.population());
            }
        }
    }

    /// Toggle the cell under a pixel position.
    pub fn handle_pointer_event(&mut self, x: i32, y: i32) -> Result<Coord, Ignored> {
        let cell = self.grid.layout().pixel_to_coord(x, y);
        match self.grid.toggle(cell) {
            Some(alive) => {
                debug!("toggled {} -> {}", cell, alive);
                Ok(cell)
            }
            None => Err(Ignored::OutOfBounds(cell)),
        }
    }

    /// Per-frame update. Returns true if the grid advanced a generation.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        while let Some(event) = self.pending.pop_front() {
            match event {
                InputEvent::Key(key) => self.handle_key_event(key),
                InputEvent::Pointer { x, y } => {
                    if let Err(reason) = self.handle_pointer_event(x, y) {
                        debug!("ignored input: {}", reason);
                    }
                }
            }
        }

        if !self.running {
            return false;
        }

        if now_ms.saturating_sub(self.last_step_ms) < self.step_interval_ms {
            return false;
        }

        self.last_step_ms = now_ms;
        self.grid.step();
        true
    }

    /// Copy the current generation out for rendering.
    pub fn snapshot_into(&self, snap: &mut GridSnapshot) {
        snap.fill_from(&self.grid, self.running);
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let mut snap = GridSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
