//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//!
//! Running out of rows while rendering text is not an error: it is reported
//! as [`WriteStatus::Interrupted`](crate::display::WriteStatus::Interrupted),
//! since the display size is a known fixed limit.
//!
//! ## Example
//!
//! ```
//! use lcd1602_i2c::{Builder, BuilderError, Timing};
//!
//! let result = Builder::new()
//!     .timing(Timing { power_on: 1, ..Timing::default() })
//!     .build();
//! assert!(matches!(result, Err(BuilderError::DelayBelowMinimum { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Bus write failed
    ///
    /// Wraps the underlying error from the [`DisplayInterface`] implementation.
    /// The operation was aborted at the failing transfer; anything already
    /// written stays on screen.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Bus write failed: {e:?}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Delay that a [`BuilderError::DelayBelowMinimum`] refers to
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DelayKind {
    /// Power-on settle time
    PowerOn,
    /// Wait after the first reset nibble
    FirstReset,
    /// Wait after the reset retries
    ResetRetry,
    /// Wait after each nibble
    NibbleSettle,
    /// Wait after clear display
    Clear,
}

impl core::fmt::Display for DelayKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::PowerOn => "power-on",
            Self::FirstReset => "first reset",
            Self::ResetRetry => "reset retry",
            Self::NibbleSettle => "nibble settle",
            Self::Clear => "clear",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// A delay is shorter than the controller tolerates
    ///
    /// See [`Timing`](crate::config::Timing) for the minimums.
    DelayBelowMinimum {
        /// Which delay was rejected
        delay: DelayKind,
        /// Smallest accepted value in milliseconds
        minimum_ms: u32,
        /// Value provided in milliseconds
        provided_ms: u32,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DelayBelowMinimum {
                delay,
                minimum_ms,
                provided_ms,
            } => write!(
                f,
                "{delay} delay of {provided_ms}ms is below the {minimum_ms}ms minimum"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_builder_error_message() {
        let error = BuilderError::DelayBelowMinimum {
            delay: DelayKind::NibbleSettle,
            minimum_ms: 2,
            provided_ms: 1,
        };
        assert_eq!(
            error.to_string(),
            "nibble settle delay of 1ms is below the 2ms minimum"
        );
    }
}
