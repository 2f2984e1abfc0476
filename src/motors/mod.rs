// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Actuator Abstractions
//!
//! This module contains the motor-level types that sit between the control layer and the
//! device-level outputs in `hw`.
//!
//! ## Modules
//!
//! - [`command`] - `MotorCommand`, the per-actuator output of one control tick.
//! - [`bank`] - `DcMotor` trait and `MotorBank`, the port-addressed actuator sink.

pub mod bank;
pub mod command;

pub use bank::{DcMotor, MotorBank};
pub use command::{MotorCommand, MOTOR_MAX};
