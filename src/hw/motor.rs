// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-input PWM H-bridge.
//!
//! | Command | IN1 | IN2 |
//! | ------- | --- | --- |
//! | forward | duty | 0 |
//! | reverse | 0 | duty |
//! | zero power (coast) | 0 | 0 |
//! | brake | max | max |

use stm32f7xx_hal::prelude::*;

use crate::motors::{DcMotor, MOTOR_MAX};

pub struct HBridge<Pwm1, Pwm2> {
    in1: Pwm1,
    in2: Pwm2,
}

impl<Pwm1, Pwm2> HBridge<Pwm1, Pwm2>
where
    Pwm1: _embedded_hal_PwmPin<Duty = u16>,
    Pwm2: _embedded_hal_PwmPin<Duty = u16>,
{
    /// Take both channels and start them coasting.
    pub fn new(mut in1: Pwm1, mut in2: Pwm2) -> Self {
        in1.set_duty(0);
        in2.set_duty(0);
        in1.enable();
        in2.enable();
        Self { in1, in2 }
    }

    /// Scale `|power|` in 0..=127 to the channel duty range.
    fn duty(&self, power: i16) -> u16 {
        let max = self.in1.get_max_duty() as u32;
        let mag = power.unsigned_abs().min(MOTOR_MAX as u16) as u32;
        (mag * max / MOTOR_MAX as u32) as u16
    }

    pub fn free(self) -> (Pwm1, Pwm2) {
        (self.in1, self.in2)
    }
}

impl<Pwm1, Pwm2> DcMotor for HBridge<Pwm1, Pwm2>
where
    Pwm1: _embedded_hal_PwmPin<Duty = u16>,
    Pwm2: _embedded_hal_PwmPin<Duty = u16>,
{
    fn set_power(&mut self, power: i16) {
        let duty = self.duty(power);
        if power > 0 {
            self.in1.set_duty(duty);
            self.in2.set_duty(0);
        } else if power < 0 {
            self.in1.set_duty(0);
            self.in2.set_duty(duty);
        } else {
            self.in1.set_duty(0);
            self.in2.set_duty(0);
        }
    }

    fn brake(&mut self) {
        let max1 = self.in1.get_max_duty();
        let max2 = self.in2.get_max_duty();
        self.in1.set_duty(max1);
        self.in2.set_duty(max2);
    }
}
