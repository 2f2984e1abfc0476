// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Per-actuator command produced by the control layer.

use crate::io::{ActuatorSink, Port};

/// Largest power magnitude an actuator accepts.
pub const MOTOR_MAX: i16 = 127;

/// What one actuator should do this tick.
///
/// `Stop` and `Power(0)` are deliberately distinct: on the H-bridge outputs the first brakes the
/// motor, the second lets it coast.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MotorCommand {
    Power(i16),
    Stop,
}

impl MotorCommand {
    /// Full forward power.
    pub const FULL: MotorCommand = MotorCommand::Power(MOTOR_MAX);

    /// Issue this command to `port`.
    #[inline]
    pub fn apply<A: ActuatorSink>(self, port: Port, sink: &mut A) {
        match self {
            MotorCommand::Power(p) => sink.set_power(port, p),
            MotorCommand::Stop => sink.stop(port),
        }
    }
}

/// Clamp a raw power to the accepted actuator range.
#[inline]
pub fn clamp_power(power: i16) -> i16 {
    power.clamp(-MOTOR_MAX, MOTOR_MAX)
}
