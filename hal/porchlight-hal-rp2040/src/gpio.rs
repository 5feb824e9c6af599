//! GPIO wrappers
//!
//! Newtypes over embassy-rp pins so they can implement the
//! `porchlight-hal` traits.

use embassy_rp::gpio::{AnyPin, Input, Level as RpLevel, Output, Pull as RpPull};
use embassy_rp::Peri;
use porchlight_core::config::Pull;
use porchlight_hal::gpio::{InputPin, Level, OutputPin};

/// Push-pull output
pub struct RpOutput {
    pin: Output<'static>,
}

impl RpOutput {
    /// Configure `pin` as an output driven to `initial`
    pub fn new(pin: Peri<'static, AnyPin>, initial: Level) -> Self {
        let initial = match initial {
            Level::High => RpLevel::High,
            Level::Low => RpLevel::Low,
        };
        Self {
            pin: Output::new(pin, initial),
        }
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Digital input with optional internal pull
pub struct RpInput {
    pin: Input<'static>,
}

impl RpInput {
    pub fn new(pin: Peri<'static, AnyPin>, pull: Pull) -> Self {
        let pull = match pull {
            Pull::None => RpPull::None,
            Pull::Up => RpPull::Up,
            Pull::Down => RpPull::Down,
        };
        Self {
            pin: Input::new(pin, pull),
        }
    }
}

impl InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
