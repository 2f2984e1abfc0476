// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Operator joystick link protocol.

pub mod link;
pub mod messages;
pub mod parser;

pub use link::Link;
pub use messages::JoystickFrame;
pub use parser::Parser;
