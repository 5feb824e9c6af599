//! Porch LED on a GPIO
//!
//! The reference board sources the LED from the pin through a 1 kΩ
//! resistor, so the pin goes high to light it. Boards that sink the LED
//! into the pin (anode to 3V3) wire it active-low with `!gpioN`.

use porchlight_hal::gpio::{Level, OutputPin};

/// The porch LED
pub struct GpioLight<P> {
    pin: P,
    /// LED sunk into the pin: lit while the pin is low
    sinks: bool,
    on: bool,
}

impl<P: OutputPin> GpioLight<P> {
    /// Take over the LED pin and make sure the LED is dark
    pub fn new(pin: P, active_low: bool) -> Self {
        let mut light = Self {
            pin,
            sinks: active_low,
            on: false,
        };
        light.set_on(false);
        light
    }

    /// Light or darken the LED
    ///
    /// Drives the pin on every call; nothing is skipped when the LED is
    /// already in the requested state.
    pub fn set_on(&mut self, on: bool) {
        self.on = on;
        self.pin.set_level(Level::from(on != self.sinks));
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
