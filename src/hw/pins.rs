// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F777 teleop controller board.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpioc, gpiod, gpioe, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

use crate::hw::SensorHeader;

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD, dp.GPIOE, dp.GPIOF);
/// ```
pub struct BoardPins {
    pub leds: LedPins,
    pub usart1: Usart1Pins,
    pub usart2: Usart2Pins,
    pub encoder: EncoderPins,
    pub motors: MotorPins,
    pub sensors: SensorHeader,
}

pub struct LedPins {
    pub red: gpiod::PD8<Output<PushPull>>,
    pub yellow: gpiod::PD9<Output<PushPull>>,
    pub green: gpiod::PD10<Output<PushPull>>,
}

/// Debug terminal and log output.
pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// Joystick link from the handheld controller bridge.
pub struct Usart2Pins {
    pub tx: gpiod::PD5<Alternate<7>>,
    pub rx: gpiod::PD6<Alternate<7>>,
}

/// TIM2 quadrature input for the sorter encoder.
pub struct EncoderPins {
    pub tim2_ch1: gpioa::PA0<Alternate<1>>,
    pub tim2_ch2: gpioa::PA1<Alternate<1>>,
}

/// H-bridge inputs, two PWM channels per motor port. Port 1 is not wired.
pub struct MotorPins {
    pub tim1: (
        gpioe::PE9<Alternate<1>>,  // port 2 IN1
        gpioe::PE11<Alternate<1>>, // port 2 IN2
        gpioe::PE13<Alternate<1>>, // port 3 IN1
        gpioe::PE14<Alternate<1>>, // port 3 IN2
    ),
    pub tim4: (
        gpiod::PD12<Alternate<2>>, // port 4 IN1
        gpiod::PD13<Alternate<2>>, // port 4 IN2
        gpiod::PD14<Alternate<2>>, // port 5 IN1
        gpiod::PD15<Alternate<2>>, // port 5 IN2
    ),
    pub tim8: (
        gpioc::PC6<Alternate<3>>, // port 6 IN1
        gpioc::PC7<Alternate<3>>, // port 6 IN2
        gpioc::PC8<Alternate<3>>, // port 7 IN1
        gpioc::PC9<Alternate<3>>, // port 7 IN2
    ),
    pub tim3: (
        gpiob::PB4<Alternate<2>>, // port 8 IN1
        gpiob::PB5<Alternate<2>>, // port 8 IN2
        gpiob::PB0<Alternate<2>>, // port 9 IN1
        gpiob::PB1<Alternate<2>>, // port 9 IN2
    ),
    pub tim12: (
        gpiob::PB14<Alternate<9>>, // port 10 IN1
        gpiob::PB15<Alternate<9>>, // port 10 IN2
    ),
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(
        gpioa: pac::GPIOA,
        gpiob: pac::GPIOB,
        gpioc: pac::GPIOC,
        gpiod: pac::GPIOD,
        gpioe: pac::GPIOE,
        gpiof: pac::GPIOF,
    ) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();
        let gpiof = gpiof.split();

        Self {
            leds: LedPins {
                red: gpiod.pd8.into_push_pull_output(),
                yellow: gpiod.pd9.into_push_pull_output(),
                green: gpiod.pd10.into_push_pull_output(),
            },

            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            usart2: Usart2Pins {
                tx: gpiod.pd5.into_alternate::<7>(),
                rx: gpiod.pd6.into_alternate::<7>(),
            },

            encoder: EncoderPins {
                tim2_ch1: gpioa.pa0.into_alternate::<1>(),
                tim2_ch2: gpioa.pa1.into_alternate::<1>(),
            },

            motors: MotorPins {
                tim1: (
                    gpioe.pe9.into_alternate::<1>(),
                    gpioe.pe11.into_alternate::<1>(),
                    gpioe.pe13.into_alternate::<1>(),
                    gpioe.pe14.into_alternate::<1>(),
                ),
                tim4: (
                    gpiod.pd12.into_alternate::<2>(),
                    gpiod.pd13.into_alternate::<2>(),
                    gpiod.pd14.into_alternate::<2>(),
                    gpiod.pd15.into_alternate::<2>(),
                ),
                tim8: (
                    gpioc.pc6.into_alternate::<3>(),
                    gpioc.pc7.into_alternate::<3>(),
                    gpioc.pc8.into_alternate::<3>(),
                    gpioc.pc9.into_alternate::<3>(),
                ),
                tim3: (
                    gpiob.pb4.into_alternate::<2>(),
                    gpiob.pb5.into_alternate::<2>(),
                    gpiob.pb0.into_alternate::<2>(),
                    gpiob.pb1.into_alternate::<2>(),
                ),
                tim12: (
                    gpiob.pb14.into_alternate::<9>(),
                    gpiob.pb15.into_alternate::<9>(),
                ),
            },

            sensors: SensorHeader {
                in1: gpiof.pf0.into_pull_up_input(),
                in2: gpiof.pf1.into_pull_up_input(),
                in3: gpiof.pf2.into_pull_up_input(),
                in4: gpiof.pf3.into_pull_up_input(),
                in5: gpiof.pf4.into_pull_up_input(),
                out6: gpiof.pf5.into_push_pull_output(),
            },
        }
    }
}
