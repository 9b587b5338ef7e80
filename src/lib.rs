//! LCD1602 I2C Character Display Driver
//!
//! A driver for 16x2 character LCD modules built on the HD44780 controller
//! (or a clone) and wired through a PCF8574 I2C backpack.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - 4-bit initialization sequence with configurable (padded) delays
//! - Text rendering with newline and width-driven line wrapping
//! - Pluggable transport via [`DisplayInterface`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! use lcd1602_i2c::{Builder, Display, I2cInterface, WriteStatus};
//!
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut i2c = MockI2c;
//! # let mut delay = MockDelay;
//! let interface = I2cInterface::new(&mut i2c, 0x27);
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//!
//! match display.send_string("Hello\nWorld", &mut delay) {
//!     Ok(WriteStatus::Finished) => {}
//!     Ok(WriteStatus::Interrupted) => { /* text did not fit */ }
//!     Err(_) => { /* bus failure */ }
//! }
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// HD44780 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Nibble framing for the PCF8574 backpack
pub mod frame;
/// Hardware interface abstraction
pub mod interface;

pub use config::{Builder, COLUMNS, Config, DEFAULT_ADDRESS, ROWS, Timing};
pub use display::{Display, InitState, WriteStatus};
pub use error::{BuilderError, DelayKind, Error};
pub use interface::{DisplayInterface, I2cInterface};
