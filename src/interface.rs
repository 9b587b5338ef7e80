//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`]
//! struct for reaching the HD44780 through a PCF8574 I2C expander.
//!
//! ## Hardware Requirements
//!
//! - I2C bus (SDA + SCL) with pull-ups
//! - PCF8574 backpack at a fixed 7-bit address (usually `0x27` or `0x3F`)
//!
//! Bus setup and pin assignment belong to the platform HAL; the driver only
//! needs a way to write bytes to the backpack.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! use lcd1602_i2c::{DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
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
//! let mut i2c = MockI2c;
//!
//! // Borrow the bus so it can be handed to other drivers afterwards
//! let mut interface = I2cInterface::new(&mut i2c, 0x27);
//!
//! // One enable pulse with the backlight on
//! let _ = interface.write(&[0x3C, 0x38]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::config::DEFAULT_ADDRESS;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the transport underneath the HD44780 driver
///
/// This trait abstracts over the bus, allowing the
/// [`Display`](crate::display::Display) to work with any transport that can
/// write a byte sequence to the backpack, including simulated ones in tests.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`] struct. Implement this
/// trait yourself to add bus arbitration, logging, or a different expander.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write `bytes` to the expander as one blocking transfer
    ///
    /// Each byte becomes the new state of the expander's output pins, in
    /// order. The whole slice must go out in a single bus transaction so an
    /// enable pulse is never split.
    ///
    /// # Errors
    ///
    /// Returns an error if the device did not acknowledge every byte or the
    /// bus reported any other failure.
    #[allow(clippy::type_complexity)]
    fn write(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// PCF8574 backpack on an embedded-hal v1.0 I2C bus
///
/// ## Type Parameters
///
/// * `I2C` - bus implementing [`I2c`], owned or `&mut`
///
/// ## Example
///
/// ```rust,no_run
/// use lcd1602_i2c::{Builder, Display, I2cInterface};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
/// # struct MockI2c;
/// # impl ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: SevenBitAddress,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let interface = I2cInterface::with_default_address(MockI2c);
///
/// # let config = match Builder::new().build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: SevenBitAddress,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface for the backpack at `address`
    pub fn new(i2c: I2C, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    /// Create a new interface at [`DEFAULT_ADDRESS`] (`0x27`)
    pub fn with_default_address(i2c: I2C) -> Self {
        Self::new(i2c, DEFAULT_ADDRESS)
    }

    /// Get the device address
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(self.address, bytes)
    }
}
