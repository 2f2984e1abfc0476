// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `log` backend that writes to the debug USART.
//!
//! Initialize once at startup, after the debug USART is configured:
//!
//! ```ignore
//! hw::logger::init(usart, LevelFilter::Info)?;
//! log::info!("boot");
//! ```
//!
//! Each record is written as `LEVEL target - message` followed by CRLF. Output is blocking and
//! happens inside a critical section, so keep `trace` off in normal builds.

use core::cell::RefCell;
use core::fmt::Write;

use cortex_m::interrupt::{self, Mutex};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use stm32f7xx_hal::pac::USART1;

use crate::hw::Usart;

static SINK: Mutex<RefCell<Option<Usart<USART1>>>> = Mutex::new(RefCell::new(None));

static LOGGER: UsartLogger = UsartLogger;

/// Writes log records to the debug USART held in [`SINK`].
pub struct UsartLogger;

impl Log for UsartLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        interrupt::free(|cs| {
            if let Some(usart) = SINK.borrow(cs).borrow_mut().as_mut() {
                let _ = write!(
                    usart,
                    "{} {} - {}\r\n",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        });
    }

    fn flush(&self) {
        interrupt::free(|cs| {
            if let Some(usart) = SINK.borrow(cs).borrow_mut().as_mut() {
                usart.flush();
            }
        });
    }
}

/// Install the logger on `usart`.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init(usart: Usart<USART1>, level: LevelFilter) -> Result<(), SetLoggerError> {
    interrupt::free(|cs| SINK.borrow(cs).replace(Some(usart)));
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
