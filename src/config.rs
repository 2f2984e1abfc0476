// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Robot Configuration
//!
//! Everything that differs between robot revisions lives in one `const`-constructible
//! [`RobotConfig`]: port mapping, joystick mapping, deadzone and stop policy, debounce interval,
//! mechanism speeds and sorter limits. A mechanism that a revision does not have is `None`.
//!
//! The four revisions of the robot are provided as [`presets`]. The firmware picks one at build
//! time through the `preset-*` Cargo features (see [`ACTIVE`]).

use crate::io::{Axis, Button, DigitalPin, Port, SensorInput};
use crate::motors::{MotorCommand, MOTOR_MAX};

/// Minimum interval between accepted pickup toggles.
pub const DEBOUNCE_MS: u32 = 100;

/// Fixed loop period of the later revisions.
pub const TICK_PERIOD_MS: u32 = 20;

/// Encoder counts the sorter must travel to finish one cycle.
pub const SORTER_THRESHOLD: i32 = 90;

/// What the drive does while every axis is inside the deadzone.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DeadzonePolicy {
    /// Issue a stop (brake) to all four drive motors.
    Stop,
    /// Command zero power (coast) on all four drive motors.
    Zero,
}

/// Which joystick channel feeds which drive axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DriveAxes {
    pub strafe: Axis,
    pub throttle: Axis,
    pub turn: Axis,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DrivePorts {
    pub front_left: Port,
    pub front_right: Port,
    pub back_left: Port,
    pub back_right: Port,
}

impl DrivePorts {
    /// Ports in mixer output order: FL, FR, BL, BR.
    #[inline]
    pub const fn as_array(&self) -> [Port; 4] {
        [
            self.front_left,
            self.front_right,
            self.back_left,
            self.back_right,
        ]
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DriveConfig {
    pub ports: DrivePorts,
    pub axes: DriveAxes,
    /// An axis is live only when its magnitude is strictly greater than this.
    pub deadzone: i16,
    pub policy: DeadzonePolicy,
}

/// How the operator runs the intake.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PickupMode {
    /// Each press latches the intake on or off.
    Toggle { button: Button, debounce_ms: u32 },

    /// Runs while held. `auto_run` keeps it running on its own while the sensor is engaged.
    Momentary {
        forward: Button,
        reverse: Option<Button>,
        auto_run: Option<SensorInput>,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PickupConfig {
    pub port: Port,
    pub power: i16,
    pub mode: PickupMode,
}

/// Button held ⇒ command issued.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Binding {
    pub button: Button,
    pub command: MotorCommand,
}

/// A hold-to-run mechanism such as the shooter or the ramp.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MomentaryConfig {
    pub port: Port,
    pub forward: Binding,
    pub reverse: Option<Binding>,
    /// Issued while no binding is held.
    pub idle: MotorCommand,
}

/// Lifter with a limit switch at each end of travel.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LifterConfig {
    pub port: Port,
    pub up: Button,
    pub down: Button,
    pub power: i16,
    pub max_limit: SensorInput,
    pub min_limit: SensorInput,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SorterConfig {
    pub port: Port,
    /// Power while sorting; friendly runs at `+power`, enemy at `-power`.
    pub power: i16,
    /// A cycle ends once the encoder is past `+threshold` (friendly) or `-threshold` (enemy).
    pub threshold: i32,
    pub friendly_button: Button,
    pub enemy_button: Button,
    /// Classification lines from the vision co-processor.
    pub friendly_signal: Option<SensorInput>,
    pub enemy_signal: Option<SensorInput>,
    /// Driven high while a cycle is in progress so the co-processor can hold off.
    pub busy_signal: Option<DigitalPin>,
    /// Give up on a cycle that has not reached the threshold after this long.
    pub timeout_ms: Option<u32>,
}

/// Operator joystick link.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LinkConfig {
    pub baud_rate: u32,
    /// With no valid frame for this long the joystick reads as neutral.
    pub timeout_ms: u32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RobotConfig {
    pub name: &'static str,
    pub drive: DriveConfig,
    pub pickup: Option<PickupConfig>,
    pub shooter: Option<MomentaryConfig>,
    pub ramp: Option<MomentaryConfig>,
    pub lifter: Option<LifterConfig>,
    pub sorter: Option<SorterConfig>,
    pub link: LinkConfig,
    /// Delay at the end of every tick. Zero runs the loop flat out.
    pub tick_period_ms: u32,
}

/// Structural problems `RobotConfig::validate` can find.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// Two outputs are mapped to the same port.
    DuplicatePort(Port),
    /// Port 0 does not exist.
    InvalidPort,
    NegativeDeadzone,
    PowerOutOfRange(i16),
    ZeroDebounce,
    NonPositiveThreshold,
}

impl RobotConfig {
    /// Every output port the configuration drives, drive ports first.
    pub fn ports(&self) -> impl Iterator<Item = Port> + '_ {
        let drive = self.drive.ports.as_array();
        let mechanisms = [
            self.pickup.map(|p| p.port),
            self.shooter.map(|s| s.port),
            self.ramp.map(|r| r.port),
            self.lifter.map(|l| l.port),
            self.sorter.map(|s| s.port),
        ];
        drive.into_iter().chain(mechanisms.into_iter().flatten())
    }

    /// Check the configuration for mistakes the type system cannot catch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = [false; 256];
        for port in self.ports() {
            if port.0 == 0 {
                return Err(ConfigError::InvalidPort);
            }
            if seen[port.0 as usize] {
                return Err(ConfigError::DuplicatePort(port));
            }
            seen[port.0 as usize] = true;
        }

        if self.drive.deadzone < 0 {
            return Err(ConfigError::NegativeDeadzone);
        }

        if let Some(PickupConfig {
            mode: PickupMode::Toggle { debounce_ms: 0, .. },
            ..
        }) = self.pickup
        {
            return Err(ConfigError::ZeroDebounce);
        }

        let powers = [
            self.pickup.map(|p| p.power),
            self.lifter.map(|l| l.power),
            self.sorter.map(|s| s.power),
        ];
        for p in powers.into_iter().flatten() {
            check_power(p)?;
        }
        for m in [self.shooter, self.ramp].into_iter().flatten() {
            let commands = [Some(m.forward.command), m.reverse.map(|b| b.command), Some(m.idle)];
            for cmd in commands.into_iter().flatten() {
                if let MotorCommand::Power(p) = cmd {
                    check_power(p)?;
                }
            }
        }

        if let Some(s) = self.sorter {
            if s.threshold <= 0 {
                return Err(ConfigError::NonPositiveThreshold);
            }
        }

        Ok(())
    }
}

fn check_power(p: i16) -> Result<(), ConfigError> {
    if p.unsigned_abs() > MOTOR_MAX as u16 {
        Err(ConfigError::PowerOutOfRange(p))
    } else {
        Ok(())
    }
}

/// The four robot revisions.
pub mod presets {
    use super::*;

    const DRIVE_PORTS: DrivePorts = DrivePorts {
        front_left: Port(2),
        front_right: Port(7),
        back_left: Port(3),
        back_right: Port(8),
    };

    const DRIVE_AXES: DriveAxes = DriveAxes {
        strafe: Axis::Ch3,
        throttle: Axis::Ch1,
        turn: Axis::Ch4,
    };

    const LINK: LinkConfig = LinkConfig {
        baud_rate: 115_200,
        timeout_ms: 250,
    };

    const TOGGLE_PICKUP: PickupConfig = PickupConfig {
        port: Port(4),
        power: MOTOR_MAX,
        mode: PickupMode::Toggle {
            button: Button::G5Up,
            debounce_ms: DEBOUNCE_MS,
        },
    };

    const SHOOTER: MomentaryConfig = MomentaryConfig {
        port: Port(5),
        forward: Binding {
            button: Button::G6Up,
            command: MotorCommand::Power(100),
        },
        reverse: Some(Binding {
            button: Button::G6Down,
            command: MotorCommand::Stop,
        }),
        idle: MotorCommand::Stop,
    };

    const LIFTER: LifterConfig = LifterConfig {
        port: Port(9),
        up: Button::G8Up,
        down: Button::G8Down,
        power: MOTOR_MAX,
        max_limit: SensorInput::active_low(1),
        min_limit: SensorInput::active_low(2),
    };

    /// First revision: mecanum drive only, hard stop in the deadzone, no tick delay.
    pub const DRIVE_ONLY: RobotConfig = RobotConfig {
        name: "drive-only",
        drive: DriveConfig {
            ports: DRIVE_PORTS,
            axes: DRIVE_AXES,
            deadzone: 50,
            policy: DeadzonePolicy::Stop,
        },
        pickup: None,
        shooter: None,
        ramp: None,
        lifter: None,
        sorter: None,
        link: LINK,
        tick_period_ms: 0,
    };

    /// Second revision: toggled intake and a shooter.
    pub const SHOOTER_BOT: RobotConfig = RobotConfig {
        name: "shooter",
        drive: DriveConfig {
            ports: DRIVE_PORTS,
            axes: DRIVE_AXES,
            deadzone: 20,
            policy: DeadzonePolicy::Zero,
        },
        pickup: Some(TOGGLE_PICKUP),
        shooter: Some(SHOOTER),
        ramp: None,
        lifter: None,
        sorter: None,
        link: LINK,
        tick_period_ms: TICK_PERIOD_MS,
    };

    /// Third revision: shooter replaced by a ramp and a limit-switched lifter.
    pub const LIFTER_BOT: RobotConfig = RobotConfig {
        name: "lifter",
        drive: DriveConfig {
            ports: DRIVE_PORTS,
            axes: DRIVE_AXES,
            deadzone: 20,
            policy: DeadzonePolicy::Stop,
        },
        pickup: Some(TOGGLE_PICKUP),
        shooter: None,
        ramp: Some(MomentaryConfig {
            port: Port(6),
            forward: Binding {
                button: Button::G7Up,
                command: MotorCommand::FULL,
            },
            reverse: Some(Binding {
                button: Button::G7Down,
                command: MotorCommand::Power(-MOTOR_MAX),
            }),
            idle: MotorCommand::Stop,
        }),
        lifter: Some(LIFTER),
        sorter: None,
        link: LINK,
        tick_period_ms: TICK_PERIOD_MS,
    };

    /// Latest revision: momentary intake with ball-sensor auto-run, shooter, lifter, and the
    /// encoder-driven ball sorter fed by the vision co-processor.
    pub const SORTER_BOT: RobotConfig = RobotConfig {
        name: "sorter",
        drive: DriveConfig {
            ports: DRIVE_PORTS,
            axes: DRIVE_AXES,
            deadzone: 20,
            policy: DeadzonePolicy::Zero,
        },
        pickup: Some(PickupConfig {
            port: Port(4),
            power: MOTOR_MAX,
            mode: PickupMode::Momentary {
                forward: Button::G5Up,
                reverse: Some(Button::G5Down),
                auto_run: Some(SensorInput::active_high(5)),
            },
        }),
        shooter: Some(SHOOTER),
        ramp: None,
        lifter: Some(LIFTER),
        sorter: Some(SorterConfig {
            port: Port(10),
            power: 80,
            threshold: SORTER_THRESHOLD,
            friendly_button: Button::G7Left,
            enemy_button: Button::G7Right,
            friendly_signal: Some(SensorInput::active_high(3)),
            enemy_signal: Some(SensorInput::active_high(4)),
            busy_signal: Some(DigitalPin(6)),
            timeout_ms: Some(1_500),
        }),
        link: LINK,
        tick_period_ms: TICK_PERIOD_MS,
    };

    pub const ALL: [&RobotConfig; 4] = [&DRIVE_ONLY, &SHOOTER_BOT, &LIFTER_BOT, &SORTER_BOT];
}

/// Configuration the firmware is built for.
#[cfg(feature = "preset-drive")]
pub static ACTIVE: RobotConfig = presets::DRIVE_ONLY;

#[cfg(all(feature = "preset-shooter", not(feature = "preset-drive")))]
pub static ACTIVE: RobotConfig = presets::SHOOTER_BOT;

#[cfg(all(
    feature = "preset-lifter",
    not(any(feature = "preset-drive", feature = "preset-shooter"))
))]
pub static ACTIVE: RobotConfig = presets::LIFTER_BOT;

#[cfg(not(any(
    feature = "preset-drive",
    feature = "preset-shooter",
    feature = "preset-lifter"
)))]
pub static ACTIVE: RobotConfig = presets::SORTER_BOT;
