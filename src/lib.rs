//! # aw9523-gpio
//!
//! A Rust driver for the Awinic AW9523/AW9523B 16-channel I2C GPIO
//! expander and constant-current LED driver, built on the blocking
//! [`embedded_hal::i2c::I2c`] trait.
//!
//! ## Features
//!
//! *   Bulk 16-bit pin operations (`configure_direction`, `output_gpio`,
//!     `input_gpio`, `interrupt_enable_gpio`, `configure_led_mode`).
//! *   Single-pin operations (`pin_mode`, `digital_write`, `digital_read`,
//!     `enable_interrupt`, `analog_write`) that never disturb sibling pins.
//! *   256-step constant-current LED dimming per pin.
//! *   Open-drain/push-pull selection for port 0 (`open_drain_port0`).
//! *   Soft reset and chip ID verification (`init`, `reset`, `chip_id`).
//!
//! ## Chip notes
//!
//! The 16 pins are split across two 8-bit ports: port 0 covers pins 0-7,
//! port 1 covers pins 8-15. Several function registers store the *inverse*
//! of the logical sense (direction, interrupt enable, LED mode, the port-0
//! drive-mode bit); the driver handles the polarity so the public API is
//! consistently "1 / true = active".
//!
//! The driver keeps no register cache: every call re-reads or re-writes
//! hardware. A handle takes `&mut self` for all operations, so concurrent
//! access to one device must be serialized by the caller.
//!
//! ## Basic usage
//!
//! ```no_run
//! use aw9523_gpio::{Aw9523, PinLevel, PinMode, DEFAULT_ADDRESS};
//!
//! fn run<I2C>(i2c: I2C) -> aw9523_gpio::Result<(), I2C::Error>
//! where
//!     I2C: embedded_hal::i2c::I2c,
//! {
//!     let mut expander = Aw9523::new(i2c, DEFAULT_ADDRESS)?;
//!     expander.init()?;
//!
//!     // Pin 0: LED with 50% current
//!     expander.pin_mode(0, PinMode::LedMode)?;
//!     expander.analog_write(0, 127)?;
//!
//!     // Pin 8: digital output, driven high
//!     expander.pin_mode(8, PinMode::Output)?;
//!     expander.digital_write(8, PinLevel::High)?;
//!
//!     // Pin 15: input
//!     expander.pin_mode(15, PinMode::Input)?;
//!     let level = expander.digital_read(15)?;
//!     println!("pin 15 is {:?}", level);
//!     Ok(())
//! }
//! ```
//!
//! ## Addressing
//!
//! The AD0/AD1 pins select one of four addresses, 0x58 through 0x5B.
//! [`Aw9523::new`] rejects anything outside that range.

mod consts;
mod device;
mod error;
pub mod gpio;
mod register;

pub use consts::DEFAULT_ADDRESS;
pub use device::Aw9523;
pub use error::{Error, Result};
pub use gpio::{PinLevel, PinMode};
