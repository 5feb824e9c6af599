//! Status reporting over the serial link

use crate::traits::HardwareIo;

/// Status line sent while the light is on
pub const LIGHT_ON_MESSAGE: &str = "Light is on";

/// Status line sent while the light is off
pub const LIGHT_OFF_MESSAGE: &str = "Light is off";

/// Status line for a sensor sample
pub const fn status_message(sensor_active: bool) -> &'static str {
    if sensor_active {
        LIGHT_ON_MESSAGE
    } else {
        LIGHT_OFF_MESSAGE
    }
}

/// Send exactly one status line for a sensor sample
pub fn report_status<IO: HardwareIo + ?Sized>(
    io: &mut IO,
    sensor_active: bool,
) -> Result<(), IO::Error> {
    io.write_serial_line(status_message(sensor_active))
}
