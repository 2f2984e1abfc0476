// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Port-addressed actuator bank.
//!
//! `MotorBank` turns the loop's `(port, power)` commands into calls on the individual motors wired
//! to the board. Ports are numbered from 1. Powers are clamped to
//! [`MOTOR_MAX`](crate::motors::MOTOR_MAX) here, so the
//! control layer can hand over raw mixer output unchanged.

use log::trace;

use crate::io::{ActuatorSink, Port};
use crate::motors::command::clamp_power;

/// A single bidirectional DC motor output.
pub trait DcMotor {
    /// Drive at a signed power in -127..=127. Zero lets the motor coast.
    fn set_power(&mut self, power: i16);

    /// Actively brake the motor.
    fn brake(&mut self);
}

/// Fixed table of motors indexed by port number.
pub struct MotorBank<'a, const N: usize> {
    slots: [Option<&'a mut dyn DcMotor>; N],
}

impl<'a, const N: usize> MotorBank<'a, N> {
    /// Create an empty bank. All ports start unmapped.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }

    /// Attach a motor to `port`, replacing whatever was there.
    ///
    /// Returns `false` if the port number is outside the bank.
    pub fn attach(&mut self, port: Port, motor: &'a mut dyn DcMotor) -> bool {
        match Self::slot_index(port) {
            Some(i) => {
                self.slots[i] = Some(motor);
                true
            }
            None => false,
        }
    }

    /// Brake every attached motor.
    pub fn stop_all(&mut self) {
        for motor in self.slots.iter_mut().flatten() {
            motor.brake();
        }
    }

    #[inline]
    fn slot_index(port: Port) -> Option<usize> {
        let i = (port.0 as usize).checked_sub(1)?;
        (i < N).then_some(i)
    }

    fn motor(&mut self, port: Port) -> Option<&mut (dyn DcMotor + 'a)> {
        let i = Self::slot_index(port)?;
        self.slots[i].as_deref_mut()
    }
}

impl<'a, const N: usize> Default for MotorBank<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> ActuatorSink for MotorBank<'a, N> {
    fn set_power(&mut self, port: Port, power: i16) {
        match self.motor(port) {
            Some(m) => m.set_power(clamp_power(power)),
            None => trace!("set_power on unmapped port {}", port.0),
        }
    }

    fn stop(&mut self, port: Port) {
        match self.motor(port) {
            Some(m) => m.brake(),
            None => trace!("stop on unmapped port {}", port.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingMotor {
        power: Option<i16>,
        braked: bool,
    }

    impl DcMotor for RecordingMotor {
        fn set_power(&mut self, power: i16) {
            self.power = Some(power);
            self.braked = false;
        }

        fn brake(&mut self) {
            self.power = None;
            self.braked = true;
        }
    }

    #[test]
    fn clamps_power_to_motor_range() {
        let mut a = RecordingMotor::default();
        let mut b = RecordingMotor::default();
        {
            let mut bank: MotorBank<'_, 10> = MotorBank::new();
            assert!(bank.attach(Port(1), &mut a));
            assert!(bank.attach(Port(10), &mut b));

            bank.set_power(Port(1), 300);
            bank.set_power(Port(10), -381);
        }
        assert_eq!(a.power, Some(127));
        assert_eq!(b.power, Some(-127));
    }

    #[test]
    fn stop_brakes_instead_of_zero_power() {
        let mut m = RecordingMotor::default();
        {
            let mut bank: MotorBank<'_, 4> = MotorBank::new();
            bank.attach(Port(2), &mut m);
            bank.set_power(Port(2), 50);
            bank.stop(Port(2));
        }
        assert!(m.braked);
        assert_eq!(m.power, None);
    }

    #[test]
    fn unmapped_and_out_of_range_ports_are_ignored() {
        let mut m = RecordingMotor::default();
        {
            let mut bank: MotorBank<'_, 4> = MotorBank::new();
            assert!(!bank.attach(Port(0), &mut m));
            // Neither of these may panic.
            bank.set_power(Port(3), 10);
            bank.stop(Port(9));
            bank.stop_all();
        }
        assert_eq!(m.power, None);
        assert!(!m.braked);
    }

    #[test]
    fn stop_all_brakes_every_attached_motor() {
        let mut a = RecordingMotor::default();
        let mut b = RecordingMotor::default();
        {
            let mut bank: MotorBank<'_, 10> = MotorBank::new();
            bank.attach(Port(2), &mut a);
            bank.attach(Port(7), &mut b);
            bank.set_power(Port(2), 20);
            bank.stop_all();
        }
        assert!(a.braked);
        assert!(b.braked);
    }
}
