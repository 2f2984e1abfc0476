// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Intake (pickup) control.
//!
//! Two operator schemes, selected by [`PickupMode`]:
//!
//! - **Toggle**: a rising edge on the button flips the intake on/off, gated by [`Debounce`].
//! - **Momentary**: the intake runs while a button is held, and runs on its own while the ball
//!   sensor is engaged.

use log::debug;

use crate::config::{PickupConfig, PickupMode};
use crate::control::Debounce;
use crate::motors::MotorCommand;

/// Inputs the pickup looks at, already sampled for this tick.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PickupInput {
    /// Toggle button (toggle mode) or forward button (momentary mode).
    pub primary: bool,
    pub reverse: bool,
    pub sensor: bool,
}

/// Pickup state carried between ticks.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PickupState {
    active: bool,
    was_pressed: bool,
    debounce: Debounce,
}

impl PickupState {
    pub fn new(cfg: &PickupConfig) -> Self {
        let interval = match cfg.mode {
            PickupMode::Toggle { debounce_ms, .. } => debounce_ms,
            PickupMode::Momentary { .. } => 0,
        };
        Self {
            active: false,
            was_pressed: false,
            debounce: Debounce::new(interval),
        }
    }

    /// Latched on/off state (toggle mode).
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance one tick and return the intake command.
    pub fn update(&mut self, cfg: &PickupConfig, input: PickupInput, now_ms: u32) -> MotorCommand {
        match cfg.mode {
            PickupMode::Toggle { .. } => {
                let rising = input.primary && !self.was_pressed;
                self.was_pressed = input.primary;

                if rising && self.debounce.accept(now_ms) {
                    self.active = !self.active;
                    debug!("pickup toggled {}", if self.active { "on" } else { "off" });
                }

                if self.active {
                    MotorCommand::Power(cfg.power)
                } else {
                    MotorCommand::Stop
                }
            }

            PickupMode::Momentary { .. } => match (input.primary, input.reverse) {
                (true, true) => MotorCommand::Stop,
                (true, false) => MotorCommand::Power(cfg.power),
                (false, true) => MotorCommand::Power(-cfg.power),
                (false, false) if input.sensor => MotorCommand::Power(cfg.power),
                (false, false) => MotorCommand::Stop,
            },
        }
    }
}
