//! Hold-to-repeat gate for a single input source.
//!
//! Polled once per tick with "is it held right now". The tick a press starts
//! fires immediately; a held input then fires again `delay` ticks after the
//! press and every `interval` ticks after that:
//!
//! ```text
//! held tick:  0    1 .. delay-1   delay   delay+i   delay+2i ...
//! fires:      yes  no             yes     yes       yes
//! ```
//!
//! So holding for `delay + interval * k` ticks fires exactly `1 + k` times.

use crate::types::{REPEAT_DELAY_TICKS, REPEAT_INTERVAL_TICKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatGate {
    delay_ticks: u32,
    interval_ticks: u32,
    /// Ticks since the press started; None while released
    held_ticks: Option<u32>,
}

impl RepeatGate {
    pub fn new(delay_ticks: u32, interval_ticks: u32) -> Self {
        Self {
            delay_ticks,
            interval_ticks: interval_ticks.max(1),
            held_ticks: None,
        }
    }

    /// Advance one tick. Returns true if the input should fire this tick.
    pub fn update(&mut self, held: bool) -> bool {
        if !held {
            self.held_ticks = None;
            return false;
        }

        let d = match self.held_ticks {
            None => 0,
            Some(d) => d.saturating_add(1),
        };
        self.held_ticks = Some(d);

        d == 0 || (d >= self.delay_ticks && (d - self.delay_ticks) % self.interval_ticks == 0)
    }

    /// Forget the current press; the next held tick fires immediately.
    pub fn reset(&mut self) {
        self.held_ticks = None;
    }

    pub fn is_held(&self) -> bool {
        self.held_ticks.is_some()
    }
}

impl Default for RepeatGate {
    fn default() -> Self {
        Self::new(REPEAT_DELAY_TICKS, REPEAT_INTERVAL_TICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fires_over(gate: &mut RepeatGate, ticks: u32) -> usize {
        (0..ticks).filter(|_| gate.update(true)).count()
    }

    #[test]
    fn first_tick_fires_then_waits_for_delay() {
        let mut gate = RepeatGate::new(30, 3);
        assert!(gate.update(true));
        for _ in 1..30 {
            assert!(!gate.update(true));
        }
        // Tick 30: first repeat.
        assert!(gate.update(true));
        assert!(!gate.update(true));
        assert!(!gate.update(true));
        assert!(gate.update(true));
    }

    #[test]
    fn hold_for_delay_plus_k_intervals_fires_one_plus_k() {
        for k in 0..10 {
            let mut gate = RepeatGate::new(30, 3);
            assert_eq!(fires_over(&mut gate, 30 + 3 * k), 1 + k as usize, "k = {}", k);
        }
    }

    #[test]
    fn release_restarts_the_press() {
        let mut gate = RepeatGate::new(5, 2);
        assert!(gate.update(true));
        assert!(!gate.update(true));
        assert!(!gate.update(false));
        assert!(!gate.is_held());
        assert!(gate.update(true));
    }

    #[test]
    fn reset_makes_next_tick_fire() {
        let mut gate = RepeatGate::new(5, 2);
        assert!(gate.update(true));
        assert!(!gate.update(true));
        gate.reset();
        assert!(gate.update(true));
    }

    #[test]
    fn zero_interval_is_treated_as_one() {
        let mut gate = RepeatGate::new(2, 0);
        assert_eq!(fires_over(&mut gate, 5), 4);
    }

    #[test]
    fn released_gate_never_fires() {
        let mut gate = RepeatGate::default();
        for _ in 0..100 {
            assert!(!gate.update(false));
        }
    }
}
