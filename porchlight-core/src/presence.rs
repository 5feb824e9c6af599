//! Presence mapping
//!
//! Maps the motion sensor level onto the porch light and the welcome
//! panel. The mapping is stateless: every call drives the LED and both
//! display lines, whether or not the level changed since the last call.

use crate::traits::{DisplayLine, HardwareIo};

/// Text shown on the top line while motion is detected
pub const WELCOME_TEXT: &str = "Welcome";

/// Text shown on the bottom line while motion is detected
pub const HOMEOWNER_TEXT: &str = "Homeowner!";

/// Logical state of the porch light
///
/// Always equal to the sensor level it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightState {
    Off,
    On,
}

impl LightState {
    /// Derive the light state from a sensor sample
    pub const fn from_sensor(sensor_active: bool) -> Self {
        if sensor_active {
            LightState::On
        } else {
            LightState::Off
        }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, LightState::On)
    }
}

/// Drive the LED and the welcome panel from a sensor sample
///
/// - motion: LED on, "Welcome" on line 0, "Homeowner!" on line 1
/// - no motion: LED off, both lines cleared
///
/// The LED is set before the display is touched, so a display failure
/// still leaves the light matching the sensor. Both lines are always
/// written; the first display error is returned.
pub fn apply_presence<IO: HardwareIo + ?Sized>(
    io: &mut IO,
    sensor_active: bool,
) -> Result<LightState, IO::Error> {
    let light = LightState::from_sensor(sensor_active);
    io.set_output_pin(light.is_on());

    let (top, bottom) = match light {
        LightState::On => (
            io.write_display_line(DisplayLine::Top, WELCOME_TEXT),
            io.write_display_line(DisplayLine::Bottom, HOMEOWNER_TEXT),
        ),
        LightState::Off => (
            io.clear_display_line(DisplayLine::Top),
            io.clear_display_line(DisplayLine::Bottom),
        ),
    };
    top?;
    bottom?;

    Ok(light)
}
