// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use log::{error, info, LevelFilter};
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use teleop::config;
use teleop::control::TeleopLoop;
use teleop::hw::{
    self, BoardPins, Encoder, HBridge, Led, MonoTimer, SerialJoystick, Usart, UsartRx,
};
use teleop::io::{Devices, Port};
use teleop::motors::MotorBank;

/// H-bridge switching frequency.
const PWM_FREQ_KHZ: u32 = 20;

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD, dp.GPIOE, dp.GPIOF);

    // LED
    let mut led_red = Led::active_low(pins.leds.red);
    let mut led_yellow = Led::active_low(pins.leds.yellow);
    let mut led_green = Led::active_low(pins.leds.green);
    led_yellow.on();

    // USART1 (DBG) carries the log
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART1,
        (pins.usart1.tx, pins.usart1.rx),
        &clocks,
        usart_cfg,
    );
    hw::logger::init(Usart::new(serial), LevelFilter::Info).unwrap();

    let cfg = &config::ACTIVE;
    info!("robot '{}'", cfg.name);
    if let Err(e) = cfg.validate() {
        error!("invalid configuration: {:?}", e);
        led_yellow.off();
        halt(&mut led_red);
    }

    let clock = match MonoTimer::tim5(dp.TIM5, &clocks) {
        Ok(clock) => clock,
        Err(e) => {
            error!("no 1 kHz time base: {:?}", e);
            led_yellow.off();
            halt(&mut led_red);
        }
    };

    // USART2 carries the joystick link
    let link_cfg = Config {
        baud_rate: cfg.link.baud_rate.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART2,
        (pins.usart2.tx, pins.usart2.rx),
        &clocks,
        link_cfg,
    );
    let joystick = SerialJoystick::new(UsartRx::new(serial), cfg.link.timeout_ms);

    // Motors: two PWM channels per H-bridge
    let m = pins.motors;
    let (t1c1, t1c2, t1c3, t1c4) = dp
        .TIM1
        .pwm_hz(m.tim1, PWM_FREQ_KHZ.kHz(), &clocks)
        .split();
    let (t4c1, t4c2, t4c3, t4c4) = dp
        .TIM4
        .pwm_hz(m.tim4, PWM_FREQ_KHZ.kHz(), &clocks)
        .split();
    let (t8c1, t8c2, t8c3, t8c4) = dp
        .TIM8
        .pwm_hz(m.tim8, PWM_FREQ_KHZ.kHz(), &clocks)
        .split();
    let (t3c1, t3c2, t3c3, t3c4) = dp
        .TIM3
        .pwm_hz(m.tim3, PWM_FREQ_KHZ.kHz(), &clocks)
        .split();
    let (t12c1, t12c2) = dp
        .TIM12
        .pwm_hz(m.tim12, PWM_FREQ_KHZ.kHz(), &clocks)
        .split();

    let mut port2 = HBridge::new(t1c1, t1c2);
    let mut port3 = HBridge::new(t1c3, t1c4);
    let mut port4 = HBridge::new(t4c1, t4c2);
    let mut port5 = HBridge::new(t4c3, t4c4);
    let mut port6 = HBridge::new(t8c1, t8c2);
    let mut port7 = HBridge::new(t8c3, t8c4);
    let mut port8 = HBridge::new(t3c1, t3c2);
    let mut port9 = HBridge::new(t3c3, t3c4);
    let mut port10 = HBridge::new(t12c1, t12c2);

    let mut bank: MotorBank<'_, 10> = MotorBank::new();
    bank.attach(Port(2), &mut port2);
    bank.attach(Port(3), &mut port3);
    bank.attach(Port(4), &mut port4);
    bank.attach(Port(5), &mut port5);
    bank.attach(Port(6), &mut port6);
    bank.attach(Port(7), &mut port7);
    bank.attach(Port(8), &mut port8);
    bank.attach(Port(9), &mut port9);
    bank.attach(Port(10), &mut port10);
    bank.stop_all();

    let mut devices = Devices {
        input: joystick,
        digital: pins.sensors,
        encoder: Encoder::tim2(dp.TIM2),
        actuators: bank,
        clock,
    };

    led_yellow.off();
    led_green.on();

    TeleopLoop::new(cfg).run(&mut devices)
}

/// Bring-up failed: red LED on, stop here.
fn halt<const P: char, const N: u8>(led_red: &mut Led<P, N>) -> ! {
    led_red.on();
    loop {
        cortex_m::asm::nop();
    }
}
