// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Collaborator Interfaces
//!
//! The teleop loop never touches a peripheral directly. Everything it reads or writes goes through
//! the traits in this module, so the same loop runs on the board (see `hw`) and against the mocks
//! used by the unit tests.
//!
//! | Trait | Provides |
//! | ----- | -------- |
//! | [`InputSource`] | Latest joystick axes and buttons |
//! | [`DigitalIo`] | Raw digital pin levels |
//! | [`RotaryEncoder`] | Signed, resettable position counter |
//! | [`ActuatorSink`] | Signed power and stop commands per actuator port |
//! | [`Clock`] | Monotonic milliseconds and a blocking delay |

/// Logical actuator port, numbered from 1 like the motor ports on the robot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Port(pub u8);

/// Logical digital pin number.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DigitalPin(pub u8);

/// Electrical level at which a digital sensor reports "active".
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

impl ActiveLevel {
    /// Interpret a raw pin level.
    #[inline]
    pub const fn is_active(self, level_high: bool) -> bool {
        match self {
            ActiveLevel::High => level_high,
            ActiveLevel::Low => !level_high,
        }
    }
}

/// A digital sensor: which pin, and which level means "engaged".
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SensorInput {
    pub pin: DigitalPin,
    pub level: ActiveLevel,
}

impl SensorInput {
    pub const fn active_high(pin: u8) -> Self {
        Self {
            pin: DigitalPin(pin),
            level: ActiveLevel::High,
        }
    }

    pub const fn active_low(pin: u8) -> Self {
        Self {
            pin: DigitalPin(pin),
            level: ActiveLevel::Low,
        }
    }

    /// Read the sensor and apply its active level.
    #[inline]
    pub fn is_active<D: DigitalIo>(&self, digital: &mut D) -> bool {
        self.level.is_active(digital.read(self.pin))
    }
}

/// Largest joystick axis magnitude.
pub const AXIS_MAX: i16 = 127;

/// Analog joystick channel.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Axis {
    Ch1,
    Ch2,
    Ch3,
    Ch4,
}

impl Axis {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::Ch1 => 0,
            Axis::Ch2 => 1,
            Axis::Ch3 => 2,
            Axis::Ch4 => 3,
        }
    }
}

/// Joystick buttons, grouped the way they sit on the handset: two shoulder pairs (5 and 6) and
/// two four-way pads (7 and 8).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Button {
    G5Up,
    G5Down,
    G6Up,
    G6Down,
    G7Up,
    G7Down,
    G7Left,
    G7Right,
    G8Up,
    G8Down,
    G8Left,
    G8Right,
}

impl Button {
    /// Bit position in the link's button mask.
    #[inline]
    pub const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Operator input. Each call returns the latest sample; there is no buffering or history.
pub trait InputSource {
    /// Called once at the start of every tick, before any reads.
    fn refresh(&mut self, _now_ms: u32) {}

    /// Axis value in -127..=127. The loop clamps anything outside that range.
    fn axis(&mut self, axis: Axis) -> i16;

    fn button(&mut self, button: Button) -> bool;
}

/// Digital pins, read and written as raw electrical levels (`true` = high).
pub trait DigitalIo {
    fn read(&mut self, pin: DigitalPin) -> bool;

    fn write(&mut self, pin: DigitalPin, high: bool);
}

/// Signed position counter, resettable to zero.
pub trait RotaryEncoder {
    fn position(&mut self) -> i32;

    fn reset(&mut self);
}

/// Actuator outputs, addressed by port.
pub trait ActuatorSink {
    /// Signed power, nominally -127..=127. Implementations clamp to their accepted range.
    fn set_power(&mut self, port: Port, power: i16);

    /// Actively stop the actuator. This is not the same as `set_power(port, 0)`.
    fn stop(&mut self, port: Port);
}

/// Monotonic time source with a blocking delay.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch. Wraps; compare with `wrapping_sub`.
    fn now_ms(&mut self) -> u32;

    fn delay_ms(&mut self, ms: u32);
}

/// One of each collaborator the loop needs.
#[derive(Default)]
pub struct Devices<I, D, E, A, C> {
    pub input: I,
    pub digital: D,
    pub encoder: E,
    pub actuators: A,
    pub clock: C,
}

/// Milliseconds elapsed from `since` to `now`, tolerant of counter wrap.
#[inline]
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Prescaler that divides a timer input clock down to a 1 kHz count.
///
/// `None` if the clock is not a whole number of kHz or the divider does not fit the 16-bit
/// prescaler register (timer clocks above 65.536 MHz).
pub fn millis_prescaler(timer_clock_hz: u32) -> Option<u16> {
    if timer_clock_hz < 1_000 || timer_clock_hz % 1_000 != 0 {
        return None;
    }
    u16::try_from(timer_clock_hz / 1_000 - 1).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_level_interprets_raw_pin() {
        assert!(ActiveLevel::High.is_active(true));
        assert!(!ActiveLevel::High.is_active(false));
        assert!(ActiveLevel::Low.is_active(false));
        assert!(!ActiveLevel::Low.is_active(true));
    }

    #[test]
    fn button_bits_are_distinct() {
        let all = [
            Button::G5Up,
            Button::G5Down,
            Button::G6Up,
            Button::G6Down,
            Button::G7Up,
            Button::G7Down,
            Button::G7Left,
            Button::G7Right,
            Button::G8Up,
            Button::G8Down,
            Button::G8Left,
            Button::G8Right,
        ];
        let mut mask = 0u16;
        for b in all {
            assert_eq!(mask & b.bit(), 0);
            mask |= b.bit();
        }
        assert_eq!(mask, 0x0FFF);
    }

    #[test]
    fn millis_prescaler_fits_sixteen_bits() {
        assert_eq!(millis_prescaler(16_000_000), Some(15_999));
        assert_eq!(millis_prescaler(65_536_000), Some(65_535));
        assert_eq!(millis_prescaler(65_537_000), None);
        // 216 MHz sysclk gives a 108 MHz timer clock.
        assert_eq!(millis_prescaler(108_000_000), None);
        assert_eq!(millis_prescaler(16_000_500), None);
        assert_eq!(millis_prescaler(999), None);
    }

    #[test]
    fn elapsed_survives_wrap() {
        assert_eq!(elapsed_ms(5, u32::MAX - 4), 10);
        assert_eq!(elapsed_ms(150, 50), 100);
    }
}
