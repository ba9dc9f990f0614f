//! Held-input tracker for terminal environments.
//!
//! Turns crossterm press/release/mouse events into per-source held state and,
//! once per tick, into rate-limited [`InputEvent`]s via one [`RepeatGate`] per
//! source. Supports terminals that do not emit key release events by using a
//! timeout.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};

use crate::map::map_key;
use crate::repeat::RepeatGate;
use crate::types::{Ignored, InputEvent, Key, REPEAT_DELAY_TICKS, REPEAT_INTERVAL_TICKS};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Upper bound on events produced by one `update` (pointer + every key)
pub const MAX_EVENTS_PER_TICK: usize = 1 + Key::COUNT;

/// Tracks pointer and key state between ticks.
#[derive(Debug, Clone)]
pub struct InputHandler {
    pointer: Option<(i32, i32)>,
    pointer_held: bool,
    /// A press happened since the last update (survives a same-tick release)
    pointer_pressed: bool,
    pointer_gate: RepeatGate,
    /// Time of the last press/repeat for each held key
    key_last_press: [Option<Instant>; Key::COUNT],
    key_pressed: [bool; Key::COUNT],
    key_gates: [RepeatGate; Key::COUNT],
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(REPEAT_DELAY_TICKS, REPEAT_INTERVAL_TICKS)
    }

    pub fn with_config(repeat_delay_ticks: u32, repeat_interval_ticks: u32) -> Self {
        let gate = RepeatGate::new(repeat_delay_ticks, repeat_interval_ticks);
        Self {
            pointer: None,
            pointer_held: false,
            pointer_pressed: false,
            pointer_gate: gate,
            key_last_press: [None; Key::COUNT],
            key_pressed: [false; Key::COUNT],
            key_gates: [gate; Key::COUNT],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Record a key press (or terminal auto-repeat of a held key).
    pub fn handle_key_press(&mut self, code: KeyCode) -> Result<Key, Ignored> {
        let key = map_key(code).ok_or(Ignored::UnrecognizedKey)?;
        let i = key.index();
        if self.key_last_press[i].is_none() {
            self.key_pressed[i] = true;
        }
        self.key_last_press[i] = Some(Instant::now());
        Ok(key)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(key) = map_key(code) {
            self.key_last_press[key.index()] = None;
        }
    }

    /// Record a mouse event; `x`/`y` are already in grid pixel space.
    pub fn handle_mouse(&mut self, kind: MouseEventKind, x: i32, y: i32) {
        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer = Some((x, y));
                self.pointer_held = true;
                self.pointer_pressed = true;
                self.pointer_gate.reset();
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                self.pointer = Some((x, y));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.pointer = Some((x, y));
                self.pointer_held = false;
            }
            _ => {}
        }
    }

    pub fn pointer_held(&self) -> bool {
        self.pointer_held
    }

    pub fn key_held(&self, key: Key) -> bool {
        self.key_last_press[key.index()].is_some()
    }

    /// Advance one tick and collect the events that fire on it.
    pub fn update(&mut self) -> ArrayVec<InputEvent, MAX_EVENTS_PER_TICK> {
        let mut events = ArrayVec::new();

        // Auto-release when terminal does not emit release events.
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        for last in self.key_last_press.iter_mut() {
            if last.is_some_and(|t| t.elapsed() > timeout) {
                *last = None;
            }
        }

        let held = self.pointer_held || self.pointer_pressed;
        self.pointer_pressed = false;
        if self.pointer_gate.update(held) {
            if let Some((x, y)) = self.pointer {
                events.push(InputEvent::Pointer { x, y });
            }
        }

        for key in Key::ALL {
            let i = key.index();
            let held = self.key_last_press[i].is_some() || self.key_pressed[i];
            self.key_pressed[i] = false;
            if self.key_gates[i].update(held) {
                events.push(InputEvent::Key(key));
            }
        }

        events
    }

    pub fn reset(&mut self) {
        self.pointer_held = false;
        self.pointer_pressed = false;
        self.pointer_gate.reset();
        self.key_last_press = [None; Key::COUNT];
        self.key_pressed = [false; Key::COUNT];
        for gate in self.key_gates.iter_mut() {
            gate.reset();
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
