// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Joystick link with a staleness watchdog.
//!
//! Only the newest frame is kept. Once no valid frame has arrived for `timeout_ms` the link reads
//! as [`JoystickFrame::NEUTRAL`], which puts the drive in its deadzone path and releases every
//! button. Each transition to stale counts as a dropout and is logged at `warn` together with
//! the number of frames the parser has rejected so far.

use log::{info, warn};

use crate::io::{elapsed_ms, Axis, Button, InputSource};
use crate::protocol::messages::JoystickFrame;
use crate::protocol::parser::Parser;

pub struct Link {
    parser: Parser,
    latest: Option<(JoystickFrame, u32)>,
    now_ms: u32,
    timeout_ms: u32,
    stale: bool,
    dropouts: u32,
}

impl Link {
    pub const fn new(timeout_ms: u32) -> Self {
        Self {
            parser: Parser::new(),
            latest: None,
            now_ms: 0,
            timeout_ms,
            stale: true,
            dropouts: 0,
        }
    }

    /// Push one received byte. Returns `true` if it completed a valid frame.
    pub fn feed(&mut self, byte: u8, now_ms: u32) -> bool {
        self.now_ms = now_ms;
        match self.parser.push(byte) {
            Some(frame) => {
                self.latest = Some((frame, now_ms));
                if self.stale {
                    info!("link up");
                    self.stale = false;
                }
                true
            }
            None => false,
        }
    }

    /// Advance the watchdog to `now_ms`.
    pub fn refresh(&mut self, now_ms: u32) {
        self.now_ms = now_ms;
        let stale = self.is_stale();
        if stale && !self.stale {
            self.dropouts = self.dropouts.wrapping_add(1);
            warn!(
                "link lost, no frame for {} ms (dropout {}, {} frames rejected)",
                self.timeout_ms,
                self.dropouts,
                self.rejected()
            );
        }
        self.stale = stale;
    }

    /// True if no frame has been received within the timeout.
    pub fn is_stale(&self) -> bool {
        match self.latest {
            None => true,
            Some((_, at)) => elapsed_ms(self.now_ms, at) > self.timeout_ms,
        }
    }

    /// Latest frame, or neutral if the link is stale.
    pub fn current(&self) -> JoystickFrame {
        match self.latest {
            Some((frame, _)) if !self.is_stale() => frame,
            _ => JoystickFrame::NEUTRAL,
        }
    }

    /// Frames the parser dropped.
    #[inline]
    pub fn rejected(&self) -> u32 {
        self.parser.rejected()
    }

    /// Times a live link has gone stale.
    #[inline]
    pub fn dropouts(&self) -> u32 {
        self.dropouts
    }
}

impl InputSource for Link {
    fn refresh(&mut self, now_ms: u32) {
        Link::refresh(self, now_ms);
    }

    fn axis(&mut self, axis: Axis) -> i16 {
        self.current().axis(axis)
    }

    fn button(&mut self, button: Button) -> bool {
        self.current().button(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send(link: &mut Link, frame: &JoystickFrame, now_ms: u32) -> bool {
        frame
            .encode()
            .iter()
            .fold(false, |done, b| link.feed(*b, now_ms) || done)
    }

    fn forward() -> JoystickFrame {
        JoystickFrame {
            axes: [90, 0, -128, 0],
            buttons: Button::G5Up.bit(),
        }
    }

    #[test]
    fn neutral_before_first_frame() {
        let mut link = Link::new(250);
        link.refresh(0);
        assert!(link.is_stale());
        assert_eq!(link.axis(Axis::Ch1), 0);
        assert!(!link.button(Button::G5Up));
    }

    #[test]
    fn reports_latest_frame() {
        let mut link = Link::new(250);
        assert!(send(&mut link, &forward(), 10));
        link.refresh(20);
        assert_eq!(link.axis(Axis::Ch1), 90);
        assert_eq!(link.axis(Axis::Ch3), -127);
        assert!(link.button(Button::G5Up));

        let newer = JoystickFrame {
            axes: [-40, 0, 0, 0],
            buttons: 0,
        };
        assert!(send(&mut link, &newer, 30));
        assert_eq!(link.axis(Axis::Ch1), -40);
        assert!(!link.button(Button::G5Up));
    }

    #[test]
    fn goes_neutral_when_stale() {
        let mut link = Link::new(250);
        send(&mut link, &forward(), 1_000);

        link.refresh(1_250);
        assert!(!link.is_stale());
        assert_eq!(link.axis(Axis::Ch1), 90);

        link.refresh(1_251);
        assert!(link.is_stale());
        assert_eq!(link.current(), JoystickFrame::NEUTRAL);
        assert!(!link.button(Button::G5Up));

        // Recovers on the next good frame.
        send(&mut link, &forward(), 1_300);
        link.refresh(1_310);
        assert_eq!(link.axis(Axis::Ch1), 90);
    }

    #[test]
    fn each_loss_of_a_live_link_counts_one_dropout() {
        let mut link = Link::new(250);
        // Never up yet: not a dropout.
        link.refresh(1_000);
        assert_eq!(link.dropouts(), 0);

        send(&mut link, &forward(), 1_000);
        link.refresh(1_300);
        assert_eq!(link.dropouts(), 1);
        // Still down on later ticks.
        link.refresh(1_320);
        link.refresh(5_000);
        assert_eq!(link.dropouts(), 1);

        send(&mut link, &forward(), 5_000);
        link.refresh(5_010);
        link.refresh(5_300);
        assert_eq!(link.dropouts(), 2);
    }

    #[test]
    fn corrupt_frame_keeps_previous() {
        let mut link = Link::new(250);
        send(&mut link, &forward(), 0);

        let mut bad = JoystickFrame::NEUTRAL.encode();
        bad[3] ^= 0x55;
        for b in bad {
            assert!(!link.feed(b, 5));
        }
        assert_eq!(link.rejected(), 1);
        assert_eq!(link.axis(Axis::Ch1), 90);
    }
}
