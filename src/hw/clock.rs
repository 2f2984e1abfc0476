// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Millisecond time base on TIM5.
//!
//! TIM5 is a free-running 32-bit up-counter prescaled to 1 kHz, so the counter is the uptime in
//! milliseconds and wraps after about 49 days.

use stm32f7xx_hal::{pac, rcc::Clocks};

use crate::io::{millis_prescaler, Clock};

/// The APB1 timer clock cannot be divided down to exactly 1 kHz.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UnsupportedClock {
    pub timer_clock_hz: u32,
}

pub struct MonoTimer {
    tim: pac::TIM5,
}

impl MonoTimer {
    /// Start TIM5 counting milliseconds from zero.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedClock`] if the 16-bit prescaler cannot reach 1 kHz, e.g. with a
    /// 108 MHz timer clock. TIM5 is left untouched in that case.
    pub fn tim5(tim5: pac::TIM5, clocks: &Clocks) -> Result<Self, UnsupportedClock> {
        let timer_clock_hz = clocks.timclk1().raw();
        let psc = millis_prescaler(timer_clock_hz).ok_or(UnsupportedClock { timer_clock_hz })?;

        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim5en().set_bit());

        let tim = tim5;
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        tim.psc.write(|w| w.psc().bits(psc));
        tim.arr.write(|w| w.bits(0xFFFF_FFFF));

        // Load the prescaler now rather than at the first overflow.
        tim.egr.write(|w| w.ug().set_bit());
        tim.cnt.write(|w| w.bits(0));
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Ok(Self { tim })
    }

    #[inline]
    pub fn now(&self) -> u32 {
        self.tim.cnt.read().cnt().bits()
    }

    pub fn free(self) -> pac::TIM5 {
        self.tim
    }
}

impl Clock for MonoTimer {
    #[inline]
    fn now_ms(&mut self) -> u32 {
        self.now()
    }

    fn delay_ms(&mut self, ms: u32) {
        let start = self.now();
        while self.now().wrapping_sub(start) < ms {
            cortex_m::asm::nop();
        }
    }
}
