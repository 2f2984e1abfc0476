// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Ball sorter state machine.
//!
//! ```text
//!            friendly trigger                       encoder > +threshold
//!   Idle ───────────────────────► SortingFriendly ───────────────────────► Idle (reset encoder)
//!   Idle ───────────────────────► SortingEnemy    ───────────────────────► Idle (reset encoder)
//!            enemy trigger                          encoder < -threshold
//! ```
//!
//! A trigger is only taken from `Idle`, so the two sorting phases exclude each other. If both
//! triggers arrive in the same tick the friendly one wins.
//!
//! The encoder threshold is the normal way out of a sorting phase. When `timeout_ms` is configured,
//! a phase that has not reached it in time is abandoned: the sorter is stopped, the encoder is reset
//! and [`Fault::SorterStuck`] is reported. The sorter then stays latched in `Idle` and ignores
//! triggers until both have been seen released, so a trigger line stuck high cannot restart it.

use log::{info, warn};

use crate::config::SorterConfig;
use crate::io::elapsed_ms;
use crate::motors::MotorCommand;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SortPhase {
    Idle,
    SortingFriendly,
    SortingEnemy,
}

/// Runtime faults reported by the loop.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Fault {
    /// The sorter ran for longer than its timeout without reaching the encoder threshold.
    SorterStuck { phase: SortPhase, position: i32 },
}

/// Sorter inputs for one tick. Triggers combine the manual button and the co-processor line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SorterInput {
    pub friendly: bool,
    pub enemy: bool,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SorterOutput {
    pub command: MotorCommand,
    /// Zero the sorter encoder after this tick's commands are issued.
    pub reset_encoder: bool,
    pub fault: Option<Fault>,
}

impl SorterOutput {
    const IDLE: SorterOutput = SorterOutput {
        command: MotorCommand::Stop,
        reset_encoder: false,
        fault: None,
    };

    const FINISHED: SorterOutput = SorterOutput {
        command: MotorCommand::Stop,
        reset_encoder: true,
        fault: None,
    };
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Sorter {
    phase: SortPhase,
    started_ms: u32,
    /// Set by a timeout, cleared once both triggers are released.
    latched: bool,
}

impl Sorter {
    pub const fn new() -> Self {
        Self {
            phase: SortPhase::Idle,
            started_ms: 0,
            latched: false,
        }
    }

    #[inline]
    pub fn phase(&self) -> SortPhase {
        self.phase
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.phase != SortPhase::Idle
    }

    /// True after a timeout until both triggers have been released.
    #[inline]
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Advance one tick and return what the sorter actuator and encoder should do.
    pub fn update(&mut self, cfg: &SorterConfig, input: SorterInput, now_ms: u32) -> SorterOutput {
        if self.latched {
            if input.friendly || input.enemy {
                return SorterOutput::IDLE;
            }
            info!("sorter triggers released, re-armed");
            self.latched = false;
        }

        if self.phase == SortPhase::Idle {
            if input.friendly {
                self.enter(SortPhase::SortingFriendly, now_ms);
            } else if input.enemy {
                self.enter(SortPhase::SortingEnemy, now_ms);
            }
        }

        let (done, run) = match self.phase {
            SortPhase::Idle => return SorterOutput::IDLE,
            SortPhase::SortingFriendly => (input.position > cfg.threshold, cfg.power),
            SortPhase::SortingEnemy => (input.position < -cfg.threshold, -cfg.power),
        };

        if done {
            info!("sorter {:?} done at {}", self.phase, input.position);
            self.phase = SortPhase::Idle;
            return SorterOutput::FINISHED;
        }

        if let Some(timeout) = cfg.timeout_ms {
            if elapsed_ms(now_ms, self.started_ms) > timeout {
                let fault = Fault::SorterStuck {
                    phase: self.phase,
                    position: input.position,
                };
                warn!(
                    "sorter stuck in {:?} at {} after {} ms, stopping",
                    self.phase, input.position, timeout
                );
                self.phase = SortPhase::Idle;
                self.latched = true;
                return SorterOutput {
                    fault: Some(fault),
                    ..SorterOutput::FINISHED
                };
            }
        }

        SorterOutput {
            command: MotorCommand::Power(run),
            reset_encoder: false,
            fault: None,
        }
    }

    fn enter(&mut self, phase: SortPhase, now_ms: u32) {
        info!("sorter {:?}", phase);
        self.phase = phase;
        self.started_ms = now_ms;
    }
}

impl Default for Sorter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;

    fn cfg() -> SorterConfig {
        presets::SORTER_BOT.sorter.unwrap()
    }

    fn at(position: i32) -> SorterInput {
        SorterInput {
            position,
            ..Default::default()
        }
    }

    fn friendly(position: i32) -> SorterInput {
        SorterInput {
            friendly: true,
            position,
            ..Default::default()
        }
    }

    fn enemy(position: i32) -> SorterInput {
        SorterInput {
            enemy: true,
            position,
            ..Default::default()
        }
    }

    #[test]
    fn idle_without_trigger() {
        let c = cfg();
        let mut s = Sorter::new();
        let out = s.update(&c, at(0), 0);
        assert_eq!(s.phase(), SortPhase::Idle);
        assert_eq!(out.command, MotorCommand::Stop);
        assert!(!out.reset_encoder);
    }

    #[test]
    fn friendly_cycle_ends_past_threshold() {
        let c = cfg();
        let mut s = Sorter::new();

        let out = s.update(&c, friendly(0), 0);
        assert_eq!(s.phase(), SortPhase::SortingFriendly);
        assert_eq!(out.command, MotorCommand::Power(80));

        let out = s.update(&c, at(89), 20);
        assert_eq!(s.phase(), SortPhase::SortingFriendly);
        assert_eq!(out.command, MotorCommand::Power(80));
        assert!(!out.reset_encoder);

        // Exactly at the threshold is not past it.
        let out = s.update(&c, at(90), 40);
        assert_eq!(s.phase(), SortPhase::SortingFriendly);
        assert!(!out.reset_encoder);

        let out = s.update(&c, at(91), 60);
        assert_eq!(s.phase(), SortPhase::Idle);
        assert_eq!(out.command, MotorCommand::Stop);
        assert!(out.reset_encoder);
        assert_eq!(out.fault, None);
    }

    #[test]
    fn enemy_cycle_runs_reverse_and_ends_below_negative_threshold() {
        let c = cfg();
        let mut s = Sorter::new();

        let out = s.update(&c, enemy(0), 0);
        assert_eq!(s.phase(), SortPhase::SortingEnemy);
        assert_eq!(out.command, MotorCommand::Power(-80));

        // Positive travel never finishes an enemy cycle.
        let out = s.update(&c, at(200), 20);
        assert_eq!(s.phase(), SortPhase::SortingEnemy);
        assert!(!out.reset_encoder);

        let out = s.update(&c, at(-89), 40);
        assert_eq!(s.phase(), SortPhase::SortingEnemy);
        assert!(!out.reset_encoder);

        let out = s.update(&c, at(-91), 60);
        assert_eq!(s.phase(), SortPhase::Idle);
        assert!(out.reset_encoder);
    }

    #[test]
    fn enemy_trigger_is_ignored_while_sorting_friendly() {
        let c = cfg();
        let mut s = Sorter::new();
        s.update(&c, friendly(0), 0);

        let out = s.update(&c, enemy(10), 20);
        assert_eq!(s.phase(), SortPhase::SortingFriendly);
        assert_eq!(out.command, MotorCommand::Power(80));
    }

    #[test]
    fn friendly_trigger_is_ignored_while_sorting_enemy() {
        let c = cfg();
        let mut s = Sorter::new();
        s.update(&c, enemy(0), 0);
        s.update(&c, friendly(-10), 20);
        assert_eq!(s.phase(), SortPhase::SortingEnemy);
    }

    #[test]
    fn simultaneous_triggers_pick_friendly() {
        let c = cfg();
        let mut s = Sorter::new();
        let both = SorterInput {
            friendly: true,
            enemy: true,
            position: 0,
        };
        s.update(&c, both, 0);
        assert_eq!(s.phase(), SortPhase::SortingFriendly);
    }

    #[test]
    fn held_trigger_starts_a_new_cycle_after_finishing() {
        let c = cfg();
        let mut s = Sorter::new();
        s.update(&c, friendly(0), 0);
        let out = s.update(&c, friendly(95), 20);
        assert!(out.reset_encoder);
        assert_eq!(s.phase(), SortPhase::Idle);
        s.update(&c, friendly(0), 40);
        assert_eq!(s.phase(), SortPhase::SortingFriendly);
    }

    #[test]
    fn timeout_reports_stuck_sorter_and_stops() {
        let c = cfg();
        let mut s = Sorter::new();
        s.update(&c, friendly(0), 1_000);

        let out = s.update(&c, at(12), 2_500);
        assert_eq!(s.phase(), SortPhase::SortingFriendly);
        assert_eq!(out.fault, None);

        let out = s.update(&c, at(12), 2_501);
        assert_eq!(s.phase(), SortPhase::Idle);
        assert_eq!(out.command, MotorCommand::Stop);
        assert!(out.reset_encoder);
        assert_eq!(
            out.fault,
            Some(Fault::SorterStuck {
                phase: SortPhase::SortingFriendly,
                position: 12,
            })
        );
    }

    #[test]
    fn held_trigger_cannot_restart_after_timeout() {
        let c = cfg();
        let mut s = Sorter::new();
        let mut faults = 0;
        let mut running = 0;
        for tick in 0..1_000u32 {
            let out = s.update(&c, friendly(0), tick * 20);
            if out.fault.is_some() {
                faults += 1;
            }
            if out.command != MotorCommand::Stop {
                running += 1;
            }
        }
        assert_eq!(faults, 1);
        assert!(s.is_latched());
        assert_eq!(s.phase(), SortPhase::Idle);
        // Ran from t = 0 up to and including t = 1500.
        assert_eq!(running, 76);

        // Enemy trigger is refused too while latched.
        let out = s.update(&c, enemy(0), 20_000);
        assert_eq!(out.command, MotorCommand::Stop);
        assert_eq!(s.phase(), SortPhase::Idle);
    }

    #[test]
    fn released_triggers_rearm_after_timeout() {
        let c = cfg();
        let mut s = Sorter::new();
        s.update(&c, enemy(0), 0);
        let out = s.update(&c, enemy(0), 1_501);
        assert!(out.fault.is_some());
        assert!(s.is_latched());

        let out = s.update(&c, at(0), 1_521);
        assert!(!s.is_latched());
        assert_eq!(out, SorterOutput::IDLE);

        let out = s.update(&c, friendly(0), 1_541);
        assert_eq!(s.phase(), SortPhase::SortingFriendly);
        assert_eq!(out.command, MotorCommand::Power(80));
    }

    #[test]
    fn without_timeout_sorter_runs_until_threshold() {
        let c = SorterConfig {
            timeout_ms: None,
            ..cfg()
        };
        let mut s = Sorter::new();
        s.update(&c, enemy(0), 0);
        let out = s.update(&c, at(-5), 1_000_000);
        assert_eq!(s.phase(), SortPhase::SortingEnemy);
        assert_eq!(out.command, MotorCommand::Power(-80));
    }
}
