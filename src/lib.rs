// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Teleop Firmware
//!
//! Operator-control loop for a mecanum-drive competition robot, written in Rust, targeting an
//! STM32F777 MCU. Every robot revision (drive-only, shooter, lifter, sorter) runs the same loop,
//! parameterized by a [`config::RobotConfig`].
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`config`] | Per-revision configuration and presets |
//! | [`io`] | Collaborator traits the loop reads and writes through |
//! | [`control`] | Drive mixing, mechanisms, sorter state machine, the teleop loop |
//! | [`motors`] | Motor commands and the port-addressed motor bank |
//! | [`protocol`] | Joystick link frames, parser and watchdog |
//! | `hw` | STM32F7 peripherals, board pins, USART logger (`firmware` feature) |
//!
//! ## Getting Started
//!
//! Run the unit tests on the host:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board (sorter revision unless a `preset-*` feature is given):
//!
//! ```bash
//! cargo run --release --features firmware
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod io;
pub mod motors;
pub mod protocol;

#[cfg(feature = "firmware")]
pub mod hw;

#[cfg(test)]
mod testing;
