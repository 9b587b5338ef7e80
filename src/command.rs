//! HD44780 command definitions
//!
//! This module defines the instruction bytes understood by the HD44780
//! controller. Each configurable instruction is a flag bit OR-ed with a set
//! of option bits and then masked to the bits the instruction owns, so
//! composition is order-independent and can never spill into a neighbouring
//! instruction.
//!
//! Commands are written with RS low, split into two nibbles; see
//! [`crate::frame`].
//!
//! ## Example
//!
//! ```
//! use lcd1602_i2c::command::{self, Font, Lines, DataLength};
//!
//! // 4-bit, two rows, 5x7 font
//! assert_eq!(command::function_set(DataLength::Bits4, Lines::Two, Font::Font5x7), 0x28);
//!
//! // Start of the second row
//! assert_eq!(command::set_ddram_address(0, 1), 0xC0);
//! ```

/// Clear display command (0x01)
///
/// Fills DDRAM with spaces and resets the address counter to 0.
/// Slow on most controller clones; wait [`Timing::clear`](crate::config::Timing).
pub const CLEAR_DISPLAY: u8 = 0x01;

/// Return home command (0x02)
///
/// Resets the address counter to 0 and undoes any display shift.
/// DDRAM contents are kept.
pub const RETURN_HOME: u8 = 0x02;

/// Entry mode set flag (0x04)
pub const ENTRY_MODE_SET: u8 = 0x04;
/// Bits owned by entry mode set
pub const ENTRY_MODE_MASK: u8 = 0x07;

/// Display control flag (0x08)
pub const DISPLAY_CONTROL: u8 = 0x08;
/// Bits owned by display control
pub const DISPLAY_CONTROL_MASK: u8 = 0x0F;

/// Cursor/display shift flag (0x10)
pub const SHIFT: u8 = 0x10;
/// Bits owned by cursor/display shift
pub const SHIFT_MASK: u8 = 0x1C;

/// Function set flag (0x20)
pub const FUNCTION_SET: u8 = 0x20;
/// Bits owned by function set
pub const FUNCTION_SET_MASK: u8 = 0x3C;

/// Set DDRAM address flag (0x80)
///
/// The lower 7 bits carry the address.
pub const SET_DDRAM_ADDRESS: u8 = 0x80;

/// DDRAM address of the first column of each row
pub const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// Address counter direction after each write
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum Direction {
    /// Address counter decrements (right to left)
    Decrement = 0x00,
    /// Address counter increments (left to right)
    #[default]
    Increment = 0x02,
}

/// Whether the whole display moves along with each write
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum EntryShift {
    /// Only the address counter moves
    #[default]
    NoMove = 0x00,
    /// The display shifts by one position on every write
    MoveOnWrite = 0x01,
}

/// On/off option used by display control
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum State {
    /// Disabled
    #[default]
    Off,
    /// Enabled
    On,
}

impl State {
    const fn bit(self, bit: u8) -> u8 {
        match self {
            Self::Off => 0x00,
            Self::On => bit,
        }
    }
}

impl From<bool> for State {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

/// What a shift instruction moves
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum ShiftTarget {
    /// Move the cursor only
    #[default]
    Cursor = 0x00,
    /// Shift the entire display, cursor follows
    Display = 0x08,
}

/// Direction of a shift instruction
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum ShiftDirection {
    /// Shift left
    #[default]
    Left = 0x00,
    /// Shift right
    Right = 0x04,
}

/// Interface data length
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum DataLength {
    /// 4-bit transfers (the only mode reachable through a PCF8574)
    #[default]
    Bits4 = 0x00,
    /// 8-bit transfers
    Bits8 = 0x10,
}

/// Number of display lines
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum Lines {
    /// Single line
    One = 0x00,
    /// Two lines
    #[default]
    Two = 0x08,
}

/// Character font
///
/// 5x7 glyphs occupy a 5x8 cell (bottom row is the cursor line).
/// Most controllers ignore the font bit in two-line mode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum Font {
    /// 5x7 dots
    #[default]
    Font5x7 = 0x00,
    /// 5x10 dots
    Font5x10 = 0x04,
}

/// Compose an entry mode set command
pub const fn entry_mode_set(direction: Direction, shift: EntryShift) -> u8 {
    (ENTRY_MODE_SET | direction as u8 | shift as u8) & ENTRY_MODE_MASK
}

/// Compose a display control command
///
/// ```
/// use lcd1602_i2c::command::{display_control, State};
///
/// assert_eq!(display_control(State::On, State::Off, State::Off), 0x0C);
/// assert_eq!(display_control(State::On, State::On, State::On), 0x0F);
/// ```
pub const fn display_control(display: State, cursor: State, blink: State) -> u8 {
    (DISPLAY_CONTROL | display.bit(0x04) | cursor.bit(0x02) | blink.bit(0x01))
        & DISPLAY_CONTROL_MASK
}

/// Compose a cursor/display shift command
pub const fn shift(target: ShiftTarget, direction: ShiftDirection) -> u8 {
    (SHIFT | target as u8 | direction as u8) & SHIFT_MASK
}

/// Compose a function set command
pub const fn function_set(data_length: DataLength, lines: Lines, font: Font) -> u8 {
    (FUNCTION_SET | data_length as u8 | lines as u8 | font as u8) & FUNCTION_SET_MASK
}

/// Compose a set DDRAM address command for `(column, row)`
///
/// `row` is clamped to the last physical row. `column` is not checked:
/// columns past the visible width address controller memory that is either
/// off-screen or belongs to the other row.
pub const fn set_ddram_address(column: u8, row: u8) -> u8 {
    let row = if row > 1 { 1 } else { row as usize };
    SET_DDRAM_ADDRESS | ROW_OFFSETS[row].wrapping_add(column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_mode_set() {
        assert_eq!(entry_mode_set(Direction::Increment, EntryShift::NoMove), 0x06);
        assert_eq!(entry_mode_set(Direction::Increment, EntryShift::MoveOnWrite), 0x07);
        assert_eq!(entry_mode_set(Direction::Decrement, EntryShift::NoMove), 0x04);
    }

    #[test]
    fn test_display_control() {
        assert_eq!(display_control(State::Off, State::Off, State::Off), 0x08);
        assert_eq!(display_control(State::On, State::Off, State::Off), 0x0C);
        assert_eq!(display_control(State::On, State::On, State::Off), 0x0E);
        assert_eq!(display_control(State::Off, State::Off, State::On), 0x09);
    }

    #[test]
    fn test_shift() {
        assert_eq!(shift(ShiftTarget::Cursor, ShiftDirection::Left), 0x10);
        assert_eq!(shift(ShiftTarget::Cursor, ShiftDirection::Right), 0x14);
        assert_eq!(shift(ShiftTarget::Display, ShiftDirection::Left), 0x18);
        assert_eq!(shift(ShiftTarget::Display, ShiftDirection::Right), 0x1C);
    }

    #[test]
    fn test_function_set_is_deterministic_and_masked() {
        let lengths = [DataLength::Bits4, DataLength::Bits8];
        let lines = [Lines::One, Lines::Two];
        let fonts = [Font::Font5x7, Font::Font5x10];

        for length in lengths {
            for line in lines {
                for font in fonts {
                    let byte = function_set(length, line, font);
                    let chosen = length as u8 | line as u8 | font as u8;
                    assert_eq!(byte & FUNCTION_SET_MASK, FUNCTION_SET | chosen);
                    assert_eq!(byte, function_set(length, line, font));
                }
            }
        }

        assert_eq!(function_set(DataLength::Bits4, Lines::Two, Font::Font5x7), 0x28);
        assert_eq!(function_set(DataLength::Bits4, Lines::Two, Font::Font5x10), 0x2C);
    }

    #[test]
    fn test_compositions_stay_inside_their_mask() {
        assert_eq!(entry_mode_set(Direction::Increment, EntryShift::MoveOnWrite) & !ENTRY_MODE_MASK, 0);
        assert_eq!(display_control(State::On, State::On, State::On) & !DISPLAY_CONTROL_MASK, 0);
        assert_eq!(shift(ShiftTarget::Display, ShiftDirection::Right) & !SHIFT_MASK, 0);
        assert_eq!(function_set(DataLength::Bits8, Lines::Two, Font::Font5x10) & !FUNCTION_SET_MASK, 0);
    }

    #[test]
    fn test_set_ddram_address_rows() {
        assert_eq!(set_ddram_address(0, 0), 0x80);
        assert_eq!(set_ddram_address(15, 0), 0x8F);
        assert_eq!(set_ddram_address(0, 1), 0xC0);
        assert_eq!(set_ddram_address(5, 1), 0xC5);
    }

    #[test]
    fn test_set_ddram_address_clamps_row() {
        assert_eq!(set_ddram_address(5, 9), set_ddram_address(5, 1));
        assert_eq!(set_ddram_address(0, 255), 0xC0);
    }

    #[test]
    fn test_state_from_bool() {
        assert_eq!(State::from(true), State::On);
        assert_eq!(State::from(false), State::Off);
    }
}
