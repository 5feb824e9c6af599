//! Board I/O
//!
//! Composes the sensor, light, display and serial drivers into the
//! `HardwareIo` seam the control loop runs against.

use porchlight_core::traits::{CharacterDisplay, DisplayError, DisplayLine, HardwareIo};
use porchlight_hal::gpio::{InputPin, OutputPin};
use porchlight_hal::uart::UartTx;

use crate::light::GpioLight;
use crate::sensor::PirSensor;
use crate::serial::{SerialError, SerialLines};

/// Errors from the board's bus-attached outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    Display(DisplayError),
    Serial(SerialError),
}

impl From<DisplayError> for IoError {
    fn from(e: DisplayError) -> Self {
        IoError::Display(e)
    }
}

impl From<SerialError> for IoError {
    fn from(e: SerialError) -> Self {
        IoError::Serial(e)
    }
}

/// The welcome light's hardware, owned in one place
pub struct BoardIo<S, L, D, U> {
    sensor: PirSensor<S>,
    light: GpioLight<L>,
    display: D,
    serial: SerialLines<U>,
}

impl<S, L, D, U> BoardIo<S, L, D, U>
where
    S: InputPin,
    L: OutputPin,
    D: CharacterDisplay,
    U: UartTx,
{
    /// Assemble from initialized drivers
    pub fn new(
        sensor: PirSensor<S>,
        light: GpioLight<L>,
        display: D,
        serial: SerialLines<U>,
    ) -> Self {
        Self {
            sensor,
            light,
            display,
            serial,
        }
    }
}

impl<S, L, D, U> HardwareIo for BoardIo<S, L, D, U>
where
    S: InputPin,
    L: OutputPin,
    D: CharacterDisplay,
    U: UartTx,
{
    type Error = IoError;

    fn set_output_pin(&mut self, active: bool) {
        self.light.set_on(active);
    }

    fn read_input_pin(&mut self) -> bool {
        self.sensor.motion_detected()
    }

    fn write_display_line(&mut self, line: DisplayLine, text: &str) -> Result<(), IoError> {
        Ok(self.display.write_line(line, text)?)
    }

    fn clear_display_line(&mut self, line: DisplayLine) -> Result<(), IoError> {
        Ok(self.display.clear_line(line)?)
    }

    fn write_serial_line(&mut self, text: &str) -> Result<(), IoError> {
        Ok(self.serial.write_line(text)?)
    }
}
