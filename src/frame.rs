//! Nibble framing for the PCF8574 backpack
//!
//! The PCF8574 drives the HD44780 data and control lines directly from the
//! byte last written to it over I2C. In 4-bit mode every byte sent to the
//! controller is split into two nibbles, and each nibble is latched by an
//! enable pulse: the same payload written once with EN high, then again
//! with EN low.
//!
//! ## Pin Mapping
//!
//! | Bit | Signal | Meaning |
//! |-----|--------|---------|
//! | 0 | RS | 1 = data (character), 0 = command |
//! | 1 | RW | always 0, the driver never reads |
//! | 2 | EN | strobed high then low per nibble |
//! | 3 | BL | backlight, always on |
//! | 7-4 | D7-D4 | the nibble being transferred |
//!
//! ## Example
//!
//! ```
//! use lcd1602_i2c::frame::{encode_nibble, RegisterSelect};
//!
//! // High nibble of 'A' (0x41) sent as data
//! let frame = encode_nibble(0x41, RegisterSelect::Data);
//! assert_eq!(frame, [0x4D, 0x49]);
//! ```

/// Register select bit (P0)
pub const RS: u8 = 0x01;
/// Read/write bit (P1), held low
pub const RW: u8 = 0x02;
/// Enable strobe bit (P2)
pub const ENABLE: u8 = 0x04;
/// Backlight bit (P3)
pub const BACKLIGHT: u8 = 0x08;

/// Which controller register a nibble is addressed to
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RegisterSelect {
    /// Instruction register
    #[default]
    Command,
    /// Data register (character written at the DDRAM address counter)
    Data,
}

/// Encode the high nibble of `value` into a two-byte enable pulse
///
/// The low nibble of `value` is discarded. Returns the bus payload with EN
/// set followed by the same payload with EN cleared.
///
/// ## Example
///
/// ```
/// use lcd1602_i2c::frame::{encode_nibble, RegisterSelect, BACKLIGHT, ENABLE};
///
/// let [strobe, latch] = encode_nibble(0x30, RegisterSelect::Command);
/// assert_eq!(strobe, 0x30 | BACKLIGHT | ENABLE);
/// assert_eq!(latch, 0x30 | BACKLIGHT);
/// ```
pub const fn encode_nibble(value: u8, register: RegisterSelect) -> [u8; 2] {
    let mut payload = (value & 0xF0) | BACKLIGHT;
    if let RegisterSelect::Data = register {
        payload |= RS;
    }
    payload &= !RW;
    [payload | ENABLE, payload & !ENABLE]
}

/// Split a byte into the two values passed to [`encode_nibble`]
///
/// Both halves are returned in the high nibble position, high half first.
///
/// ```
/// use lcd1602_i2c::frame::split_byte;
///
/// assert_eq!(split_byte(0x28), (0x20, 0x80));
/// ```
pub const fn split_byte(byte: u8) -> (u8, u8) {
    (byte & 0xF0, (byte << 4) & 0xF0)
}
