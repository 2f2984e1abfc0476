// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Joystick frames sent by the handheld controller bridge.
//!
//! ```text
//! | 0xA5 | 0x10 | ch1 | ch2 | ch3 | ch4 | buttons lo | buttons hi | checksum |
//! ```
//!
//! Channels are `i8`. The checksum is the wrapping sum of every byte after the start byte.

use crate::io::{Axis, Button, AXIS_MAX};

/// Sync byte for the protocol.
pub const START_BYTE: u8 = 0xA5;

// Message IDs
pub const MSG_JOYSTICK: u8 = 0x10;

/// Bytes after the message id and before the checksum.
pub const PAYLOAD_LEN: usize = 6;

/// Whole frame, start byte to checksum.
pub const FRAME_LEN: usize = PAYLOAD_LEN + 3;

/// One joystick sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoystickFrame {
    pub axes: [i8; 4],
    pub buttons: u16,
}

impl JoystickFrame {
    /// Sticks centred, nothing pressed.
    pub const NEUTRAL: JoystickFrame = JoystickFrame {
        axes: [0; 4],
        buttons: 0,
    };

    pub(crate) fn from_payload(p: &[u8; PAYLOAD_LEN]) -> Self {
        Self {
            axes: [p[0] as i8, p[1] as i8, p[2] as i8, p[3] as i8],
            buttons: u16::from_le_bytes([p[4], p[5]]),
        }
    }

    /// Axis in -127..=127. The wire can carry -128; it reads as -127.
    #[inline]
    pub fn axis(&self, axis: Axis) -> i16 {
        (self.axes[axis.index()] as i16).max(-AXIS_MAX)
    }

    #[inline]
    pub fn button(&self, button: Button) -> bool {
        self.buttons & button.bit() != 0
    }

    /// Serialize to the wire format.
    pub fn encode(&self) -> [u8; FRAME_LEN] {
        let [lo, hi] = self.buttons.to_le_bytes();
        let mut out = [
            START_BYTE,
            MSG_JOYSTICK,
            self.axes[0] as u8,
            self.axes[1] as u8,
            self.axes[2] as u8,
            self.axes[3] as u8,
            lo,
            hi,
            0,
        ];
        out[FRAME_LEN - 1] = checksum(&out[1..FRAME_LEN - 1]);
        out
    }
}

pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_layout() {
        let frame = JoystickFrame {
            axes: [1, -1, 127, -128],
            buttons: Button::G5Up.bit() | Button::G8Right.bit(),
        };
        let bytes = frame.encode();
        assert_eq!(bytes[0], START_BYTE);
        assert_eq!(bytes[1], MSG_JOYSTICK);
        assert_eq!(&bytes[2..6], &[0x01, 0xFF, 0x7F, 0x80]);
        assert_eq!(&bytes[6..8], &[0x01, 0x08]);
        assert_eq!(bytes[8], checksum(&bytes[1..8]));
    }

    #[test]
    fn minus_128_reads_as_minus_127() {
        let frame = JoystickFrame {
            axes: [-128, 127, 0, -127],
            buttons: 0,
        };
        assert_eq!(frame.axis(Axis::Ch1), -127);
        assert_eq!(frame.axis(Axis::Ch2), 127);
        assert_eq!(frame.axis(Axis::Ch4), -127);
    }
}
