// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! In-memory collaborators for unit tests.

use crate::io::{
    ActuatorSink, Axis, Button, Clock, Devices, DigitalIo, DigitalPin, InputSource, Port,
    RotaryEncoder,
};

pub type MockDevices = Devices<MockInput, MockDigital, MockEncoder, MockActuators, MockClock>;

#[derive(Default)]
pub struct MockInput {
    pub axes: [i16; 4],
    pub buttons: u16,
}

impl MockInput {
    pub fn set_axis(&mut self, axis: Axis, value: i16) {
        self.axes[axis.index()] = value;
    }

    pub fn press(&mut self, button: Button) {
        self.buttons |= button.bit();
    }

    pub fn release(&mut self, button: Button) {
        self.buttons &= !button.bit();
    }
}

impl InputSource for MockInput {
    fn axis(&mut self, axis: Axis) -> i16 {
        self.axes[axis.index()]
    }

    fn button(&mut self, button: Button) -> bool {
        self.buttons & button.bit() != 0
    }
}

/// Pin levels the test sets, and the last level the code wrote to each pin.
#[derive(Default)]
pub struct MockDigital {
    pub levels: [bool; 16],
    pub outputs: [Option<bool>; 16],
}

impl MockDigital {
    pub fn set_level(&mut self, pin: u8, high: bool) {
        self.levels[pin as usize] = high;
    }

    pub fn written(&self, pin: u8) -> Option<bool> {
        self.outputs[pin as usize]
    }
}

impl DigitalIo for MockDigital {
    fn read(&mut self, pin: DigitalPin) -> bool {
        self.levels[pin.0 as usize]
    }

    fn write(&mut self, pin: DigitalPin, high: bool) {
        self.outputs[pin.0 as usize] = Some(high);
    }
}

#[derive(Default)]
pub struct MockEncoder {
    pub position: i32,
    pub resets: u32,
}

impl RotaryEncoder for MockEncoder {
    fn position(&mut self) -> i32 {
        self.position
    }

    fn reset(&mut self) {
        self.position = 0;
        self.resets += 1;
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Actuation {
    Power(i16),
    Stop,
}

/// Records the last command per port, unclamped.
#[derive(Default)]
pub struct MockActuators {
    pub last: [Option<Actuation>; 16],
}

impl MockActuators {
    pub fn last(&self, port: Port) -> Option<Actuation> {
        self.last[port.0 as usize]
    }
}

impl ActuatorSink for MockActuators {
    fn set_power(&mut self, port: Port, power: i16) {
        self.last[port.0 as usize] = Some(Actuation::Power(power));
    }

    fn stop(&mut self, port: Port) {
        self.last[port.0 as usize] = Some(Actuation::Stop);
    }
}

/// Time only moves when the test sets `now` or something calls `delay_ms`.
#[derive(Default)]
pub struct MockClock {
    pub now: u32,
    pub delays: u32,
}

impl Clock for MockClock {
    fn now_ms(&mut self) -> u32 {
        self.now
    }

    fn delay_ms(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
        self.delays += 1;
    }
}
