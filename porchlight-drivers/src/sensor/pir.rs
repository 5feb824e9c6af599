//! PIR motion sensor
//!
//! HC-SR501 style modules drive their output high while motion is seen.
//! The module's own retrigger/hold timer is the only filtering; the level
//! is read raw every time.

use porchlight_hal::gpio::InputPin;

/// PIR sensor on a digital input
pub struct PirSensor<P> {
    pin: P,
    /// If true, motion = pin LOW
    inverted: bool,
}

impl<P: InputPin> PirSensor<P> {
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Sample the sensor; `true` while motion is detected
    pub fn motion_detected(&self) -> bool {
        self.pin.is_high() != self.inverted
    }
}
