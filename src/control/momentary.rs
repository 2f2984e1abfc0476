// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hold-to-run mechanisms (shooter, ramp). No latching and no debounce.

use crate::config::MomentaryConfig;
use crate::motors::MotorCommand;

/// Command for a momentary mechanism given which bindings are held.
///
/// Forward and reverse held together cancel out to a stop.
pub fn command(cfg: &MomentaryConfig, forward_held: bool, reverse_held: bool) -> MotorCommand {
    let reverse_held = reverse_held && cfg.reverse.is_some();
    match (forward_held, reverse_held) {
        (true, true) => MotorCommand::Stop,
        (true, false) => cfg.forward.command,
        (false, true) => cfg.reverse.map_or(cfg.idle, |b| b.command),
        (false, false) => cfg.idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{presets, Binding};
    use crate::io::Button;

    #[test]
    fn shooter_runs_forward_and_stops() {
        let cfg = presets::SHOOTER_BOT.shooter.unwrap();
        assert_eq!(command(&cfg, true, false), MotorCommand::Power(100));
        assert_eq!(command(&cfg, false, true), MotorCommand::Stop);
        assert_eq!(command(&cfg, false, false), MotorCommand::Stop);
    }

    #[test]
    fn ramp_reverses() {
        let cfg = presets::LIFTER_BOT.ramp.unwrap();
        assert_eq!(command(&cfg, true, false), MotorCommand::Power(127));
        assert_eq!(command(&cfg, false, true), MotorCommand::Power(-127));
        assert_eq!(command(&cfg, true, true), MotorCommand::Stop);
    }

    #[test]
    fn reverse_without_binding_is_ignored() {
        let cfg = MomentaryConfig {
            reverse: None,
            idle: MotorCommand::Power(0),
            ..presets::SHOOTER_BOT.shooter.unwrap()
        };
        assert_eq!(command(&cfg, true, true), MotorCommand::Power(100));
        assert_eq!(command(&cfg, false, true), MotorCommand::Power(0));
    }

    #[test]
    fn release_issues_idle_command() {
        let cfg = MomentaryConfig {
            idle: MotorCommand::Power(10),
            forward: Binding {
                button: Button::G8Left,
                command: MotorCommand::Power(60),
            },
            ..presets::SHOOTER_BOT.shooter.unwrap()
        };
        assert_eq!(command(&cfg, false, false), MotorCommand::Power(10));
    }
}
