//! Display configuration types and builder

use crate::command::{Direction, EntryShift, Font, State};
pub use crate::error::{BuilderError, DelayKind};

/// Visible characters per row
pub const COLUMNS: u8 = 16;

/// Physical rows on the module
pub const ROWS: u8 = 2;

/// Default 7-bit I2C address of a PCF8574 backpack
///
/// PCF8574A-based backpacks usually answer on `0x3F` instead.
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Delays inserted between controller transfers, in milliseconds
///
/// The defaults are the minimums this driver accepts. Any value may be padded
/// upward for slow controller clones or long bus wiring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Wait after power is applied, before the first reset nibble
    pub power_on: u32,
    /// Wait after the first 0x3 reset nibble
    pub first_reset: u32,
    /// Wait after the second and third 0x3 reset nibbles
    pub reset_retry: u32,
    /// Wait after every nibble of a command or character
    pub nibble_settle: u32,
    /// Extra wait after clear display and return home
    pub clear: u32,
    /// Extra wait after repositioning the cursor
    pub set_cursor: u32,
}

impl Timing {
    /// Minimum power-on settle time
    pub const MIN_POWER_ON_MS: u32 = 15;
    /// Minimum wait after the first reset nibble
    pub const MIN_FIRST_RESET_MS: u32 = 5;
    /// Minimum wait after the reset retries
    pub const MIN_RESET_RETRY_MS: u32 = 2;
    /// Minimum wait after each nibble
    pub const MIN_NIBBLE_SETTLE_MS: u32 = 2;
    /// Minimum wait after clear display
    pub const MIN_CLEAR_MS: u32 = 10;

    /// Check every delay against its minimum
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::DelayBelowMinimum` for the first delay that is
    /// too short.
    pub fn validate(&self) -> Result<(), BuilderError> {
        let checks = [
            (DelayKind::PowerOn, self.power_on, Self::MIN_POWER_ON_MS),
            (DelayKind::FirstReset, self.first_reset, Self::MIN_FIRST_RESET_MS),
            (DelayKind::ResetRetry, self.reset_retry, Self::MIN_RESET_RETRY_MS),
            (DelayKind::NibbleSettle, self.nibble_settle, Self::MIN_NIBBLE_SETTLE_MS),
            (DelayKind::Clear, self.clear, Self::MIN_CLEAR_MS),
        ];

        for (delay, provided_ms, minimum_ms) in checks {
            if provided_ms < minimum_ms {
                return Err(BuilderError::DelayBelowMinimum {
                    delay,
                    minimum_ms,
                    provided_ms,
                });
            }
        }
        Ok(())
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            power_on: Self::MIN_POWER_ON_MS,
            first_reset: Self::MIN_FIRST_RESET_MS,
            reset_retry: Self::MIN_RESET_RETRY_MS,
            nibble_settle: Self::MIN_NIBBLE_SETTLE_MS,
            clear: Self::MIN_CLEAR_MS,
            // Far longer than the controller needs, kept for clone compatibility
            set_cursor: 10,
        }
    }
}

/// Display configuration
///
/// Controls the function set, display control and entry mode written by
/// [`Display::init`](crate::Display::init). Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Character font
    pub font: Font,
    /// Display on/off
    pub display: State,
    /// Underline cursor visibility
    pub cursor: State,
    /// Blinking block cursor
    pub blink: State,
    /// Address counter direction
    pub direction: Direction,
    /// Display shift on write
    pub entry_shift: EntryShift,
    /// Transfer delays
    pub timing: Timing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font: Font::Font5x7,
            display: State::On,
            cursor: State::Off,
            blink: State::Off,
            direction: Direction::Increment,
            entry_shift: EntryShift::NoMove,
            timing: Timing::default(),
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use lcd1602_i2c::{Builder, Timing};
/// use lcd1602_i2c::command::State;
///
/// let config = Builder::new()
///     .cursor(State::On)
///     .timing(Timing { power_on: 50, ..Timing::default() })
///     .build();
/// assert!(config.is_ok());
///
/// let too_fast = Builder::new()
///     .timing(Timing { nibble_settle: 1, ..Timing::default() })
///     .build();
/// assert!(too_fast.is_err());
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character font
    pub fn font(mut self, font: Font) -> Self {
        self.config.font = font;
        self
    }

    /// Turn the display on or off after init
    pub fn display(mut self, display: State) -> Self {
        self.config.display = display;
        self
    }

    /// Show or hide the underline cursor
    pub fn cursor(mut self, cursor: State) -> Self {
        self.config.cursor = cursor;
        self
    }

    /// Enable or disable the blinking block cursor
    pub fn blink(mut self, blink: State) -> Self {
        self.config.blink = blink;
        self
    }

    /// Set the address counter direction
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Set whether the display shifts on each write
    ///
    /// [`EntryShift::MoveOnWrite`] scrolls the whole display as text is
    /// written, so rows no longer start at column 0 on screen.
    pub fn entry_shift(mut self, entry_shift: EntryShift) -> Self {
        self.config.entry_shift = entry_shift;
        self
    }

    /// Set transfer delays
    pub fn timing(mut self, timing: Timing) -> Self {
        self.config.timing = timing;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::DelayBelowMinimum` if any delay is shorter than
    /// the controller tolerates.
    pub fn build(self) -> Result<Config, BuilderError> {
        self.config.timing.validate()?;
        Ok(self.config)
    }
}
