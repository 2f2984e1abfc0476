// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! Pure per-tick logic. Nothing in here touches hardware; every mechanism takes sampled inputs
//! and returns a [`MotorCommand`](crate::motors::MotorCommand).
//!
//! ## Modules
//!
//! - [`drive`] - Mecanum mixing with deadzone policy.
//! - [`debounce`] - Time-based debounce for toggle buttons.
//! - [`pickup`] - Intake, toggled or momentary.
//! - [`momentary`] - Hold-to-run mechanisms (shooter, ramp).
//! - [`lifter`] - Lifter with limit-switch interlock.
//! - [`sorter`] - Encoder-driven ball sorter state machine.
//! - [`teleop`] - The loop that samples, evaluates and applies each tick.

pub mod debounce;
pub mod drive;
pub mod lifter;
pub mod momentary;
pub mod pickup;
pub mod sorter;
pub mod teleop;

pub use debounce::Debounce;
pub use drive::{DriveInput, WheelPowers};
pub use pickup::{PickupInput, PickupState};
pub use sorter::{Fault, SortPhase, Sorter};
pub use teleop::{Commands, InputFrame, TeleopLoop, TeleopState, TickReport};
