// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Byte-at-a-time parser for joystick frames.
//!
//! Any unknown message id or bad checksum drops the frame and waits for the next start byte.

use log::trace;

use crate::protocol::messages::*;

enum State {
    WaitStart,
    WaitId,
    Payload { len: usize },
    WaitChecksum,
}

pub struct Parser {
    state: State,
    checksum: u8,
    payload: [u8; PAYLOAD_LEN],
    rejected: u32,
}

impl Parser {
    pub const fn new() -> Self {
        Self {
            state: State::WaitStart,
            checksum: 0,
            payload: [0; PAYLOAD_LEN],
            rejected: 0,
        }
    }

    /// Frames dropped for an unknown id or a bad checksum.
    #[inline]
    pub fn rejected(&self) -> u32 {
        self.rejected
    }

    /// Process a single incoming byte. Returns `Some(JoystickFrame)` if a complete packet is received.
    pub fn push(&mut self, byte: u8) -> Option<JoystickFrame> {
        match self.state {
            State::WaitStart => {
                if byte == START_BYTE {
                    self.state = State::WaitId;
                    self.checksum = 0;
                }
            }
            State::WaitId => {
                self.checksum = self.checksum.wrapping_add(byte);
                if byte == MSG_JOYSTICK {
                    self.state = State::Payload { len: 0 };
                } else {
                    trace!("link: unknown id {:#04x}", byte);
                    self.reject();
                }
            }
            State::Payload { len } => {
                self.checksum = self.checksum.wrapping_add(byte);
                self.payload[len] = byte;
                self.state = if len + 1 == PAYLOAD_LEN {
                    State::WaitChecksum
                } else {
                    State::Payload { len: len + 1 }
                };
            }
            State::WaitChecksum => {
                self.state = State::WaitStart;
                if byte == self.checksum {
                    return Some(JoystickFrame::from_payload(&self.payload));
                }
                trace!("link: bad checksum {:#04x} != {:#04x}", byte, self.checksum);
                self.rejected = self.rejected.wrapping_add(1);
            }
        }
        None
    }

    fn reject(&mut self) {
        self.state = State::WaitStart;
        self.rejected = self.rejected.wrapping_add(1);
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
