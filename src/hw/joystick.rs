// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Operator joystick received over a USART.
//!
//! When the link drops, the USART receive error count is logged next to the link's own warning.

use log::warn;
use stm32f7xx_hal::serial::Instance;

use crate::hw::UsartRx;
use crate::io::{Axis, Button, InputSource};
use crate::protocol::Link;

/// Bytes drained per tick. At 115200 baud and a 20 ms tick about 230 bytes can arrive, so this
/// always keeps up.
const MAX_BYTES_PER_TICK: usize = 512;

pub struct SerialJoystick<U: Instance> {
    rx: UsartRx<U>,
    link: Link,
}

impl<U: Instance> SerialJoystick<U> {
    pub fn new(rx: UsartRx<U>, timeout_ms: u32) -> Self {
        Self {
            rx,
            link: Link::new(timeout_ms),
        }
    }
}

impl<U: Instance> InputSource for SerialJoystick<U> {
    fn refresh(&mut self, now_ms: u32) {
        for _ in 0..MAX_BYTES_PER_TICK {
            match self.rx.read_byte() {
                Some(b) => {
                    self.link.feed(b, now_ms);
                }
                None => break,
            }
        }
        let dropouts = self.link.dropouts();
        self.link.refresh(now_ms);
        if self.link.dropouts() != dropouts {
            warn!("joystick usart: {} rx errors so far", self.rx.errors());
        }
    }

    #[inline]
    fn axis(&mut self, axis: Axis) -> i16 {
        self.link.axis(axis)
    }

    #[inline]
    fn button(&mut self, button: Button) -> bool {
        self.link.button(button)
    }
}
