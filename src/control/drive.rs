// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Holonomic (mecanum) drive mixing.
//!
//! Three operator axes are combined into four wheel powers:
//!
//! ```text
//! front_left  = -throttle - strafe + turn
//! front_right = -throttle + strafe + turn
//! back_left   = -throttle - strafe - turn
//! back_right  = -throttle + strafe - turn
//! ```
//!
//! The powers are not clamped here. `MotorBank` clamps each one to the actuator range when it is
//! applied. The sums saturate at the `i16` limits, which only matters for axes far outside
//! -127..=127.

use crate::config::{DeadzonePolicy, DriveConfig};
use crate::motors::MotorCommand;

/// Operator drive request for one tick.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DriveInput {
    pub strafe: i16,
    pub throttle: i16,
    pub turn: i16,
}

impl DriveInput {
    /// True when at least one axis is strictly outside the deadzone.
    #[inline]
    pub fn is_live(&self, deadzone: i16) -> bool {
        [self.strafe, self.throttle, self.turn]
            .iter()
            .any(|v| v.unsigned_abs() > deadzone.unsigned_abs())
    }
}

/// Wheel powers in FL, FR, BL, BR order.
pub type WheelPowers = [i16; 4];

/// Mix the three axes into four wheel powers.
#[inline]
pub fn mix(input: DriveInput) -> WheelPowers {
    let DriveInput {
        strafe,
        throttle,
        turn,
    } = input;

    let back = throttle.saturating_neg();
    [
        back.saturating_sub(strafe).saturating_add(turn),
        back.saturating_add(strafe).saturating_add(turn),
        back.saturating_sub(strafe).saturating_sub(turn),
        back.saturating_add(strafe).saturating_sub(turn),
    ]
}

/// Commands for the four drive motors, FL, FR, BL, BR.
pub fn drive_command(cfg: &DriveConfig, input: DriveInput) -> [MotorCommand; 4] {
    if input.is_live(cfg.deadzone) {
        mix(input).map(MotorCommand::Power)
    } else {
        match cfg.policy {
            DeadzonePolicy::Stop => [MotorCommand::Stop; 4],
            DeadzonePolicy::Zero => [MotorCommand::Power(0); 4],
        }
    }
}
