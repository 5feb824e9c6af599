//! Hardware I/O seam for the control loop
//!
//! The control loop only ever touches the board through this trait, so it
//! can be driven by a recording fake on the host.

use super::display::DisplayLine;

/// Everything the welcome light needs from the board
///
/// Pin operations are infallible (plain register accesses). Display and
/// serial writes go over a bus and can fail; failures are reported to the
/// caller and never retried.
pub trait HardwareIo {
    /// Error type for display and serial writes
    type Error;

    /// Drive the LED output; `true` is the active (lit) level
    fn set_output_pin(&mut self, active: bool);

    /// Sample the motion sensor input; `true` means motion detected
    fn read_input_pin(&mut self) -> bool;

    /// Replace the content of a display line with `text`
    fn write_display_line(&mut self, line: DisplayLine, text: &str) -> Result<(), Self::Error>;

    /// Blank a display line
    fn clear_display_line(&mut self, line: DisplayLine) -> Result<(), Self::Error>;

    /// Send `text` followed by a `\n` terminator over the serial link
    fn write_serial_line(&mut self, text: &str) -> Result<(), Self::Error>;
}

impl<T: HardwareIo + ?Sized> HardwareIo for &mut T {
    type Error = T::Error;

    fn set_output_pin(&mut self, active: bool) {
        T::set_output_pin(self, active)
    }

    fn read_input_pin(&mut self) -> bool {
        T::read_input_pin(self)
    }

    fn write_display_line(&mut self, line: DisplayLine, text: &str) -> Result<(), Self::Error> {
        T::write_display_line(self, line, text)
    }

    fn clear_display_line(&mut self, line: DisplayLine) -> Result<(), Self::Error> {
        T::clear_display_line(self, line)
    }

    fn write_serial_line(&mut self, text: &str) -> Result<(), Self::Error> {
        T::write_serial_line(self, text)
    }
}
