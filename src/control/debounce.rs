// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Time-based debounce for latched (toggle) controls.
//!
//! The joystick is polled once per tick, so a single physical press can show up as several edges.
//! `Debounce` accepts an event only if strictly more than `interval_ms` has passed since the last
//! accepted one.

use crate::io::elapsed_ms;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Debounce {
    interval_ms: u32,
    last_ms: Option<u32>,
}

impl Debounce {
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Offer an event at `now_ms`. Returns `true` and records the time if it is accepted.
    pub fn accept(&mut self, now_ms: u32) -> bool {
        let ready = match self.last_ms {
            None => true,
            Some(last) => elapsed_ms(now_ms, last) > self.interval_ms,
        };
        if ready {
            self.last_ms = Some(now_ms);
        }
        ready
    }

    /// Forget the last accepted event.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    #[inline]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    #[inline]
    pub fn last_ms(&self) -> Option<u32> {
        self.last_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_is_always_accepted() {
        let mut d = Debounce::new(100);
        assert!(d.accept(0));
        assert_eq!(d.last_ms(), Some(0));
    }

    #[test]
    fn events_inside_interval_are_rejected() {
        let mut d = Debounce::new(100);
        assert!(d.accept(1_000));
        assert!(!d.accept(1_040));
        assert!(!d.accept(1_100));
        // A rejected event does not move the window.
        assert_eq!(d.last_ms(), Some(1_000));
        assert!(d.accept(1_101));
    }

    #[test]
    fn works_across_timer_wrap() {
        let mut d = Debounce::new(100);
        assert!(d.accept(u32::MAX - 10));
        assert!(!d.accept(50));
        assert!(d.accept(95));
    }

    #[test]
    fn reset_forgets_history() {
        let mut d = Debounce::new(100);
        assert!(d.accept(500));
        d.reset();
        assert!(d.accept(510));
    }
}
