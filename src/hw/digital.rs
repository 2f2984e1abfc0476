// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Digital sensor header.
//!
//! | Pin | GPIO | Use |
//! | --- | ---- | --- |
//! | 1 | PF0 | lifter max limit |
//! | 2 | PF1 | lifter min limit |
//! | 3 | PF2 | co-processor friendly line |
//! | 4 | PF3 | co-processor enemy line |
//! | 5 | PF4 | intake ball sensor |
//! | 6 | PF5 | sorter busy (output) |
//!
//! Inputs are pulled up, so an unplugged switch reads high.

use log::trace;
use stm32f7xx_hal::gpio::{gpiof, Input, Output, PullUp, PushPull};

use crate::io::{DigitalIo, DigitalPin};

pub struct SensorHeader {
    pub in1: gpiof::PF0<Input<PullUp>>,
    pub in2: gpiof::PF1<Input<PullUp>>,
    pub in3: gpiof::PF2<Input<PullUp>>,
    pub in4: gpiof::PF3<Input<PullUp>>,
    pub in5: gpiof::PF4<Input<PullUp>>,
    pub out6: gpiof::PF5<Output<PushPull>>,
}

impl DigitalIo for SensorHeader {
    fn read(&mut self, pin: DigitalPin) -> bool {
        match pin.0 {
            1 => self.in1.is_high(),
            2 => self.in2.is_high(),
            3 => self.in3.is_high(),
            4 => self.in4.is_high(),
            5 => self.in5.is_high(),
            6 => self.out6.is_set_high(),
            n => {
                trace!("read of unwired pin {}", n);
                false
            }
        }
    }

    fn write(&mut self, pin: DigitalPin, high: bool) {
        match (pin.0, high) {
            (6, true) => self.out6.set_high(),
            (6, false) => self.out6.set_low(),
            (n, _) => trace!("write to input or unwired pin {}", n),
        }
    }
}
