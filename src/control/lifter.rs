// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Lifter with travel-limit interlock.
//!
//! The lifter may only move up while the max-limit switch is open and only move down while the
//! min-limit switch is open. Up and down requested together is a stop. There is no input
//! combination that moves the lifter into an engaged limit.

use crate::config::LifterConfig;
use crate::motors::MotorCommand;

/// Lifter inputs for one tick. Limit flags are already converted from their active level.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LifterInput {
    pub up: bool,
    pub down: bool,
    pub at_max: bool,
    pub at_min: bool,
}

pub fn command(cfg: &LifterConfig, input: LifterInput) -> MotorCommand {
    match (input.up, input.down) {
        (true, false) if !input.at_max => MotorCommand::Power(cfg.power),
        (false, true) if !input.at_min => MotorCommand::Power(-cfg.power),
        _ => MotorCommand::Stop,
    }
}
