//! HD44780 character LCD driver
//!
//! Drives an HD44780-compatible 2-line LCD over the 4-bit parallel bus
//! (RS, E, D4..D7) with RW tied to ground. Without RW the busy flag cannot
//! be read, so every command is followed by a fixed worst-case delay.

use embedded_hal::delay::DelayNs;
use porchlight_core::traits::{CharacterDisplay, DisplayError, DisplayLine};
use porchlight_hal::gpio::{Level, OutputPin};

/// HD44780 instructions
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    // Entry mode flags
    pub const ENTRY_INCREMENT: u8 = 0x02;

    // Display control flags
    pub const DISPLAY_ON: u8 = 0x04;

    // Function set flags
    pub const TWO_LINES: u8 = 0x08;
    pub const FONT_5X8: u8 = 0x00;
}

/// Power-on settle time before the first instruction
const POWER_ON_DELAY_MS: u32 = 50;

/// Execution time of most instructions (37 µs nominal, with margin)
const COMMAND_DELAY_US: u32 = 50;

/// Execution time of CLEAR (1.52 ms nominal)
const CLEAR_DELAY_US: u32 = 2000;

/// Enable pulse width (450 ns minimum)
const ENABLE_PULSE_US: u32 = 1;

/// DDRAM address of column 0 on each line
const LINE_OFFSETS: [u8; 2] = [0x00, 0x40];

/// Substitute for characters the character ROM does not share with ASCII
const REPLACEMENT_CHAR: u8 = b'?';

/// LCD bus pins
pub struct LcdPins<P> {
    /// Register select (low = instruction, high = data)
    pub rs: P,
    /// Enable strobe, data latched on the falling edge
    pub en: P,
    /// Data lines D4..D7
    pub data: [P; 4],
}

/// HD44780 driver
pub struct Hd44780<P, D> {
    pins: LcdPins<P>,
    delay: D,
    columns: u8,
    initialized: bool,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a new driver for a display `columns` characters wide
    ///
    /// The controller is not touched until [`init`](Self::init).
    pub fn new(pins: LcdPins<P>, delay: D, columns: u8) -> Self {
        Self {
            pins,
            delay,
            columns,
            initialized: false,
        }
    }

    /// Run the power-on initialization by instruction
    ///
    /// Forces the controller into 4-bit mode regardless of the state it
    /// powered up in, then configures two lines, display on with no
    /// cursor, cleared, left-to-right entry.
    pub fn init(&mut self) {
        self.pins.rs.set_low();
        self.pins.en.set_low();
        self.delay.delay_ms(POWER_ON_DELAY_MS);

        // Three 8-bit function sets, then the switch to 4-bit
        self.write_nibble(0x03);
        self.delay.delay_us(4500);
        self.write_nibble(0x03);
        self.delay.delay_us(150);
        self.write_nibble(0x03);
        self.delay.delay_us(150);
        self.write_nibble(0x02);
        self.delay.delay_us(150);

        self.command(cmd::FUNCTION_SET | cmd::TWO_LINES | cmd::FONT_5X8);
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON);
        self.command(cmd::CLEAR);
        self.delay.delay_us(CLEAR_DELAY_US);
        self.command(cmd::ENTRY_MODE | cmd::ENTRY_INCREMENT);

        self.initialized = true;
    }

    /// Move the cursor to `col` on `line`
    fn set_cursor(&mut self, line: DisplayLine, col: u8) {
        let addr = LINE_OFFSETS[line.index() as usize] + col;
        self.command(cmd::SET_DDRAM_ADDR | addr);
    }

    /// Write `text` from column 0 and blank the rest of the line
    fn fill_line(&mut self, line: DisplayLine, text: &str) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        self.set_cursor(line, 0);

        let mut written = 0u8;
        for c in text.chars().take(self.columns as usize) {
            self.data(glyph(c));
            written += 1;
        }
        for _ in written..self.columns {
            self.data(b' ');
        }

        Ok(())
    }

    fn command(&mut self, byte: u8) {
        self.pins.rs.set_low();
        self.write_byte(byte);
    }

    fn data(&mut self, byte: u8) {
        self.pins.rs.set_high();
        self.write_byte(byte);
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        self.delay.delay_us(COMMAND_DELAY_US);
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.pins.data.iter_mut().enumerate() {
            pin.set_level(Level::from(nibble & (1 << bit) != 0));
        }

        self.pins.en.set_high();
        self.delay.delay_us(ENABLE_PULSE_US);
        self.pins.en.set_low();
        self.delay.delay_us(ENABLE_PULSE_US);
    }
}

/// Character ROM code for `c`
///
/// The A00 ROM matches ASCII for 0x20..=0x7D; anything else is replaced.
fn glyph(c: char) -> u8 {
    match c {
        ' '..='}' => c as u8,
        _ => REPLACEMENT_CHAR,
    }
}

impl<P, D> CharacterDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn columns(&self) -> u8 {
        self.columns
    }

    fn write_line(&mut self, line: DisplayLine, text: &str) -> Result<(), DisplayError> {
        self.fill_line(line, text)
    }

    fn clear_line(&mut self, line: DisplayLine) -> Result<(), DisplayError> {
        self.fill_line(line, "")
    }
}
