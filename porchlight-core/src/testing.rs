//! Recording `HardwareIo` fake for host tests

use std::collections::VecDeque;
use std::string::{String, ToString};
use std::vec::Vec;

use crate::traits::{DisplayLine, HardwareIo};

/// One observed hardware operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    SetPin(bool),
    ReadPin,
    WriteLine(DisplayLine, String),
    ClearLine(DisplayLine),
    Serial(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeError {
    Display,
    Serial,
}

/// Board double: scripted sensor readings in, recorded outputs out
#[derive(Default)]
pub struct FakeIo {
    /// Sensor levels returned by successive reads; empty reads as no motion
    pub readings: VecDeque<bool>,
    /// Last level driven on the LED pin
    pub pin: Option<bool>,
    /// Current content of the two display lines
    pub lines: [String; 2],
    /// Everything sent over the serial link
    pub serial: String,
    pub ops: Vec<Op>,
    pub fail_display: bool,
    pub fail_serial: bool,
}

impl FakeIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_readings(readings: &[bool]) -> Self {
        Self {
            readings: readings.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn display(&self) -> [&str; 2] {
        [self.lines[0].as_str(), self.lines[1].as_str()]
    }

    /// Operations other than input reads
    pub fn writes(&self) -> Vec<Op> {
        self.ops
            .iter()
            .filter(|op| **op != Op::ReadPin)
            .cloned()
            .collect()
    }
}

impl HardwareIo for FakeIo {
    type Error = FakeError;

    fn set_output_pin(&mut self, active: bool) {
        self.ops.push(Op::SetPin(active));
        self.pin = Some(active);
    }

    fn read_input_pin(&mut self) -> bool {
        self.ops.push(Op::ReadPin);
        self.readings.pop_front().unwrap_or(false)
    }

    fn write_display_line(&mut self, line: DisplayLine, text: &str) -> Result<(), FakeError> {
        self.ops.push(Op::WriteLine(line, text.to_string()));
        if self.fail_display {
            return Err(FakeError::Display);
        }
        self.lines[line.index() as usize] = text.to_string();
        Ok(())
    }

    fn clear_display_line(&mut self, line: DisplayLine) -> Result<(), FakeError> {
        self.ops.push(Op::ClearLine(line));
        if self.fail_display {
            return Err(FakeError::Display);
        }
        self.lines[line.index() as usize].clear();
        Ok(())
    }

    fn write_serial_line(&mut self, text: &str) -> Result<(), FakeError> {
        self.ops.push(Op::Serial(text.to_string()));
        if self.fail_serial {
            return Err(FakeError::Serial);
        }
        self.serial.push_str(text);
        self.serial.push('\n');
        Ok(())
    }
}
