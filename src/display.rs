//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::command::{
    CLEAR_DISPLAY, DataLength, Lines, RETURN_HOME, State, display_control, entry_mode_set,
    function_set, set_ddram_address,
};
use crate::config::{COLUMNS, Config, ROWS};
use crate::error::Error;
use crate::frame::{RegisterSelect, encode_nibble, split_byte};
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Nibble written three times to force the controller into a known mode
const RESET_NIBBLE: u8 = 0x30;

/// Nibble that commits the controller to 4-bit transfers
const FOUR_BIT_NIBBLE: u8 = 0x20;

/// Outcome of rendering a string
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WriteStatus {
    /// Every character was written
    Finished,
    /// The text needed a third row; everything past that point was dropped
    Interrupted,
}

/// Progress of the power-on initialization sequence
///
/// States are entered in declaration order. If a bus write fails during
/// [`Display::init`], the display stays in the last state it reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub enum InitState {
    /// Nothing sent yet
    #[default]
    Unpowered,
    /// Power-on wait done, reset nibbles being sent
    NibbleResetting,
    /// Controller switched to 4-bit transfers
    FunctionConfigured,
    /// Function set and display control written
    DisplayConfigured,
    /// Display cleared
    Cleared,
    /// Entry mode written, ready for text
    EntryConfigured,
}

/// Core display driver for a 16x2 HD44780 behind a PCF8574
///
/// Every operation blocks on the bus and on the delay provider. The driver
/// assumes exclusive access to the controller; share it between tasks only
/// behind a mutex.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// How far initialization got
    init_state: InitState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`init`](Self::init) is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            init_state: InitState::Unpowered,
        }
    }

    /// Run the power-on sequence and apply the configuration
    ///
    /// Waits for the controller to power up, resets it into 4-bit mode with
    /// three 0x3 nibbles and a 0x2 nibble, then writes function set, display
    /// control, clear display and entry mode set.
    ///
    /// Aborts at the first bus failure. The controller is then in an unknown
    /// mode; call `init` again to retry from the start.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        let timing = self.config.timing;
        self.init_state = InitState::Unpowered;

        delay.delay_ms(timing.power_on);
        self.enter(InitState::NibbleResetting);

        self.transmit_nibble(RESET_NIBBLE, RegisterSelect::Command)?;
        delay.delay_ms(timing.first_reset);
        self.transmit_nibble(RESET_NIBBLE, RegisterSelect::Command)?;
        delay.delay_ms(timing.reset_retry);
        self.transmit_nibble(RESET_NIBBLE, RegisterSelect::Command)?;
        delay.delay_ms(timing.reset_retry);

        self.transmit_nibble(FOUR_BIT_NIBBLE, RegisterSelect::Command)?;
        delay.delay_ms(timing.nibble_settle);
        self.enter(InitState::FunctionConfigured);

        self.send_command(
            function_set(DataLength::Bits4, Lines::Two, self.config.font),
            delay,
        )?;
        self.send_command(
            display_control(self.config.display, self.config.cursor, self.config.blink),
            delay,
        )?;
        self.enter(InitState::DisplayConfigured);

        self.clear(delay)?;
        self.enter(InitState::Cleared);

        self.send_command(
            entry_mode_set(self.config.direction, self.config.entry_shift),
            delay,
        )?;
        self.enter(InitState::EntryConfigured);

        Ok(())
    }

    /// Clear the screen and render `text` from the top-left corner
    ///
    /// A `'\n'` moves to the start of the next row without being drawn, and a
    /// row that already holds [`COLUMNS`] characters wraps onto the next row
    /// before the following character. Text that would need a third row is
    /// dropped and `WriteStatus::Interrupted` is returned; the rows already
    /// drawn stay on screen.
    ///
    /// Bytes are sent as-is. ASCII renders the same on every character ROM;
    /// other bytes map to whatever glyph the ROM holds at that code.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` on the first failed bus write. Characters
    /// written before the failure are left on screen.
    pub fn send_string<D: DelayNs>(
        &mut self,
        text: &str,
        delay: &mut D,
    ) -> Result<WriteStatus, Error<I>> {
        self.clear(delay)?;

        let mut column: u8 = 0;
        let mut row: u8 = 0;

        for byte in text.bytes() {
            let newline = byte == b'\n';

            if newline || column >= COLUMNS {
                if row + 1 >= ROWS {
                    debug!("lcd: text overflows {} rows, dropping the rest", ROWS);
                    return Ok(WriteStatus::Interrupted);
                }
                row += 1;
                column = 0;
                self.set_cursor(0, row, delay)?;

                if newline {
                    continue;
                }
            }

            self.send_char(byte, delay)?;
            column += 1;
        }

        Ok(WriteStatus::Finished)
    }

    /// Clear the screen and move the cursor to (0, 0)
    pub fn clear<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(CLEAR_DISPLAY, delay)?;
        delay.delay_ms(self.config.timing.clear);
        Ok(())
    }

    /// Move the cursor to (0, 0) without touching the screen contents
    pub fn return_home<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(RETURN_HOME, delay)?;
        delay.delay_ms(self.config.timing.clear);
        Ok(())
    }

    /// Move the cursor to `(column, row)`
    ///
    /// `row` is clamped to the bottom row. `column` is passed through
    /// unchecked: values of [`COLUMNS`] or more land in off-screen memory or
    /// on the other row, depending on the controller.
    pub fn set_cursor<D: DelayNs>(
        &mut self,
        column: u8,
        row: u8,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.send_command(set_ddram_address(column, row), delay)?;
        delay.delay_ms(self.config.timing.set_cursor);
        Ok(())
    }

    /// Change display, cursor and blink visibility
    pub fn set_display_control<D: DelayNs>(
        &mut self,
        display: State,
        cursor: State,
        blink: State,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.send_command(display_control(display, cursor, blink), delay)?;
        self.config.display = display;
        self.config.cursor = cursor;
        self.config.blink = blink;
        Ok(())
    }

    /// How far initialization got
    pub fn init_state(&self) -> InitState {
        self.init_state
    }

    /// Whether [`init`](Self::init) completed
    pub fn is_ready(&self) -> bool {
        self.init_state == InitState::EntryConfigured
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the underlying interface
    pub fn interface(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }

    fn enter(&mut self, state: InitState) {
        debug!("lcd: init {:?}", state);
        self.init_state = state;
    }

    /// Send the high nibble of `value` as one enable pulse
    fn transmit_nibble(&mut self, value: u8, register: RegisterSelect) -> DisplayResult<I> {
        let frame = encode_nibble(value, register);
        self.interface.write(&frame).map_err(|e| {
            warn!("lcd: bus write failed: {:?}", e);
            Error::Interface(e)
        })
    }

    /// Send a full byte as two nibbles, each followed by the settle delay
    fn send_byte<D: DelayNs>(
        &mut self,
        byte: u8,
        register: RegisterSelect,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let (high, low) = split_byte(byte);
        let settle = self.config.timing.nibble_settle;

        self.transmit_nibble(high, register)?;
        delay.delay_ms(settle);
        self.transmit_nibble(low, register)?;
        delay.delay_ms(settle);
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command<D: DelayNs>(&mut self, cmd: u8, delay: &mut D) -> DisplayResult<I> {
        trace!("lcd: command {:#04x}", cmd);
        self.send_byte(cmd, RegisterSelect::Command, delay)
    }

    /// Write a character at the address counter
    fn send_char<D: DelayNs>(&mut self, c: u8, delay: &mut D) -> DisplayResult<I> {
        trace!("lcd: char {:#04x}", c);
        self.send_byte(c, RegisterSelect::Data, delay)
    }
}
