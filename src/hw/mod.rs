// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Layer
//!
//! STM32F777 implementations of the collaborator traits in [`io`](crate::io), plus board pins and
//! the USART logger. Only built with the `firmware` feature.

pub mod clock;
pub mod digital;
pub mod encoder;
pub mod joystick;
pub mod led;
pub mod logger;
pub mod motor;
pub mod pins;
pub mod usart;

pub use clock::MonoTimer;
pub use digital::SensorHeader;
pub use encoder::Encoder;
pub use joystick::SerialJoystick;
pub use led::Led;
pub use logger::UsartLogger;
pub use motor::HBridge;
pub use pins::BoardPins;
pub use usart::{Usart, UsartRx};
