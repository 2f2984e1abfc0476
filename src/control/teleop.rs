// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The teleop loop.
//!
//! Each tick runs three steps in order:
//!
//! 1. [`InputFrame::sample`] reads every input the configured mechanisms need.
//! 2. [`TeleopLoop::evaluate`] turns the frame into [`Commands`], updating the loop state.
//! 3. [`Commands::apply`] issues the commands to the actuators and the encoder.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut teleop = TeleopLoop::new(&config::ACTIVE);
//! teleop.run(&mut devices);
//! ```

use log::info;

use crate::config::{PickupMode, RobotConfig};
use crate::control::drive::{self, DriveInput};
use crate::control::lifter::{self, LifterInput};
use crate::control::momentary;
use crate::control::pickup::{PickupInput, PickupState};
use crate::control::sorter::{Fault, Sorter, SorterInput};
use crate::io::{
    ActuatorSink, Axis, Clock, Devices, DigitalIo, InputSource, RotaryEncoder, AXIS_MAX,
};
use crate::motors::MotorCommand;

/// Forward/reverse bindings held on a momentary mechanism.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Held {
    pub forward: bool,
    pub reverse: bool,
}

/// Everything the loop reads in one tick.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct InputFrame {
    pub now_ms: u32,
    pub drive: DriveInput,
    pub pickup: PickupInput,
    pub shooter: Held,
    pub ramp: Held,
    pub lifter: LifterInput,
    pub sorter: SorterInput,
}

impl InputFrame {
    /// Read the inputs `cfg` uses. Inputs of mechanisms the robot does not have stay `false`.
    pub fn sample<I, D, E, A, C>(cfg: &RobotConfig, dev: &mut Devices<I, D, E, A, C>) -> Self
    where
        I: InputSource,
        D: DigitalIo,
        E: RotaryEncoder,
        C: Clock,
    {
        let mut frame = InputFrame {
            now_ms: dev.clock.now_ms(),
            ..Default::default()
        };
        dev.input.refresh(frame.now_ms);

        let axes = cfg.drive.axes;
        let mut axis = |a: Axis| dev.input.axis(a).clamp(-AXIS_MAX, AXIS_MAX);
        frame.drive = DriveInput {
            strafe: axis(axes.strafe),
            throttle: axis(axes.throttle),
            turn: axis(axes.turn),
        };

        if let Some(p) = cfg.pickup {
            frame.pickup = match p.mode {
                PickupMode::Toggle { button, .. } => PickupInput {
                    primary: dev.input.button(button),
                    ..Default::default()
                },
                PickupMode::Momentary {
                    forward,
                    reverse,
                    auto_run,
                } => PickupInput {
                    primary: dev.input.button(forward),
                    reverse: reverse.map_or(false, |b| dev.input.button(b)),
                    sensor: auto_run.map_or(false, |s| s.is_active(&mut dev.digital)),
                },
            };
        }

        if let Some(s) = cfg.shooter {
            frame.shooter = Held {
                forward: dev.input.button(s.forward.button),
                reverse: s.reverse.map_or(false, |b| dev.input.button(b.button)),
            };
        }

        if let Some(r) = cfg.ramp {
            frame.ramp = Held {
                forward: dev.input.button(r.forward.button),
                reverse: r.reverse.map_or(false, |b| dev.input.button(b.button)),
            };
        }

        if let Some(l) = cfg.lifter {
            frame.lifter = LifterInput {
                up: dev.input.button(l.up),
                down: dev.input.button(l.down),
                at_max: l.max_limit.is_active(&mut dev.digital),
                at_min: l.min_limit.is_active(&mut dev.digital),
            };
        }

        if let Some(s) = cfg.sorter {
            let friendly_signal = s
                .friendly_signal
                .map_or(false, |sig| sig.is_active(&mut dev.digital));
            let enemy_signal = s
                .enemy_signal
                .map_or(false, |sig| sig.is_active(&mut dev.digital));
            frame.sorter = SorterInput {
                friendly: dev.input.button(s.friendly_button) || friendly_signal,
                enemy: dev.input.button(s.enemy_button) || enemy_signal,
                position: dev.encoder.position(),
            };
        }

        frame
    }
}

/// Everything the loop writes in one tick. `None` means the robot has no such mechanism.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Commands {
    /// FL, FR, BL, BR.
    pub drive: [MotorCommand; 4],
    pub pickup: Option<MotorCommand>,
    pub shooter: Option<MotorCommand>,
    pub ramp: Option<MotorCommand>,
    pub lifter: Option<MotorCommand>,
    pub sorter: Option<MotorCommand>,
    pub reset_encoder: bool,
    pub sorter_busy: bool,
}

impl Commands {
    /// Issue the commands. The encoder is reset after the sorter has been stopped.
    pub fn apply<I, D, E, A, C>(&self, cfg: &RobotConfig, dev: &mut Devices<I, D, E, A, C>)
    where
        D: DigitalIo,
        E: RotaryEncoder,
        A: ActuatorSink,
    {
        for (cmd, port) in self.drive.iter().zip(cfg.drive.ports.as_array()) {
            cmd.apply(port, &mut dev.actuators);
        }

        let mechanisms = [
            (self.pickup, cfg.pickup.map(|p| p.port)),
            (self.shooter, cfg.shooter.map(|s| s.port)),
            (self.ramp, cfg.ramp.map(|r| r.port)),
            (self.lifter, cfg.lifter.map(|l| l.port)),
            (self.sorter, cfg.sorter.map(|s| s.port)),
        ];
        for (cmd, port) in mechanisms {
            if let (Some(cmd), Some(port)) = (cmd, port) {
                cmd.apply(port, &mut dev.actuators);
            }
        }

        if let Some(s) = cfg.sorter {
            if self.reset_encoder {
                dev.encoder.reset();
            }
            if let Some(pin) = s.busy_signal {
                dev.digital.write(pin, self.sorter_busy);
            }
        }
    }
}

/// Result of one tick.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TickReport {
    pub commands: Commands,
    pub fault: Option<Fault>,
}

/// State carried from one tick to the next.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TeleopState {
    pub pickup: Option<PickupState>,
    pub sorter: Sorter,
}

impl TeleopState {
    /// Fresh state, as after the robot is (re-)enabled.
    pub fn new(cfg: &RobotConfig) -> Self {
        Self {
            pickup: cfg.pickup.as_ref().map(PickupState::new),
            sorter: Sorter::new(),
        }
    }
}

/// Teleop controller: configuration plus the state it owns.
pub struct TeleopLoop<'c> {
    cfg: &'c RobotConfig,
    state: TeleopState,
}

impl<'c> TeleopLoop<'c> {
    pub fn new(cfg: &'c RobotConfig) -> Self {
        Self {
            cfg,
            state: TeleopState::new(cfg),
        }
    }

    #[inline]
    pub fn config(&self) -> &RobotConfig {
        self.cfg
    }

    #[inline]
    pub fn state(&self) -> &TeleopState {
        &self.state
    }

    /// Compute this tick's commands from a sampled frame.
    pub fn evaluate(&mut self, frame: &InputFrame) -> TickReport {
        let cfg = self.cfg;
        let now = frame.now_ms;

        let drive = drive::drive_command(&cfg.drive, frame.drive);

        let pickup = match (cfg.pickup.as_ref(), self.state.pickup.as_mut()) {
            (Some(p), Some(state)) => Some(state.update(p, frame.pickup, now)),
            _ => None,
        };

        let shooter = cfg
            .shooter
            .map(|s| momentary::command(&s, frame.shooter.forward, frame.shooter.reverse));
        let ramp = cfg
            .ramp
            .map(|r| momentary::command(&r, frame.ramp.forward, frame.ramp.reverse));

        let lifter = cfg.lifter.map(|l| lifter::command(&l, frame.lifter));

        let mut reset_encoder = false;
        let mut fault = None;
        let sorter = cfg.sorter.map(|s| {
            let out = self.state.sorter.update(&s, frame.sorter, now);
            reset_encoder = out.reset_encoder;
            fault = out.fault;
            out.command
        });

        TickReport {
            commands: Commands {
                drive,
                pickup,
                shooter,
                ramp,
                lifter,
                sorter,
                reset_encoder,
                sorter_busy: self.state.sorter.is_busy(),
            },
            fault,
        }
    }

    /// Sample, evaluate and apply one tick. Does not delay.
    pub fn tick<I, D, E, A, C>(&mut self, dev: &mut Devices<I, D, E, A, C>) -> TickReport
    where
        I: InputSource,
        D: DigitalIo,
        E: RotaryEncoder,
        A: ActuatorSink,
        C: Clock,
    {
        let frame = InputFrame::sample(self.cfg, dev);
        let report = self.evaluate(&frame);
        report.commands.apply(self.cfg, dev);
        report
    }

    /// Run forever at the configured tick period.
    pub fn run<I, D, E, A, C>(&mut self, dev: &mut Devices<I, D, E, A, C>) -> !
    where
        I: InputSource,
        D: DigitalIo,
        E: RotaryEncoder,
        A: ActuatorSink,
        C: Clock,
    {
        info!(
            "teleop '{}' running, tick {} ms",
            self.cfg.name, self.cfg.tick_period_ms
        );
        loop {
            self.tick(dev);
            if self.cfg.tick_period_ms > 0 {
                dev.clock.delay_ms(self.cfg.tick_period_ms);
            }
        }
    }
}
