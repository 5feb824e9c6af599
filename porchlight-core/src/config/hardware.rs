//! Hardware configuration types
//!
//! These types describe how the sensor, LED, LCD and serial link are
//! wired to the controller.

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// UART0 TX, carries the status feed
pub const SERIAL_TX_PIN: u8 = 0;

/// UART0 RX, unused but claimed by the UART
pub const SERIAL_RX_PIN: u8 = 1;

/// Pins claimed by the serial link
pub const RESERVED_PINS: [u8; 2] = [SERIAL_TX_PIN, SERIAL_RX_PIN];

/// Narrowest display that still fits "Homeowner!"
pub const MIN_COLUMNS: u8 = 10;

/// Widest HD44780 line
pub const MAX_COLUMNS: u8 = 40;

/// Supported baud rate range
pub const MIN_BAUDRATE: u32 = 300;
pub const MAX_BAUDRATE: u32 = 921_600;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed `[section]` header
    InvalidSection,
    /// Key not recognised in its section
    UnknownKey,
    /// Value has the wrong type or cannot be parsed
    InvalidValue,
    /// Pin string is not `[!][^|~]gpioN` with N in range
    InvalidPin,
    /// Pin is claimed by the serial link
    ReservedPin(u8),
    /// Same GPIO assigned to two functions
    PinConflict(u8),
    /// Display geometry unsupported
    InvalidGeometry,
    /// Baud rate out of range
    InvalidBaudrate,
}

/// Internal pull resistor setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    #[default]
    None,
    Up,
    Down,
}

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Internal pull resistor
    pub pull: Pull,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull: Pull::None,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull: Pull::None,
        }
    }

    /// Create a pin with pull-down enabled
    pub const fn with_pulldown(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull: Pull::Down,
        }
    }

    /// Electrical level for a logical state
    ///
    /// `true` means high for normal pins, low for inverted ones.
    pub const fn level_for(&self, active: bool) -> bool {
        active != self.inverted
    }
}

/// HD44780 wiring and geometry (4-bit mode, RW tied to ground)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdConfig {
    /// Register select
    pub rs: u8,
    /// Enable strobe
    pub en: u8,
    /// Data lines D4..D7
    pub data: [u8; 4],
    /// Characters per line
    pub columns: u8,
    /// Lines (only 2 supported)
    pub rows: u8,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            rs: 16,
            en: 17,
            data: [18, 19, 20, 21],
            columns: 16,
            rows: 2,
        }
    }
}

/// Serial status link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    pub baudrate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self { baudrate: 115200 }
    }
}

/// Complete board wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// PIR sensor output
    pub sensor: PinConfig,
    /// Porch light LED
    pub led: PinConfig,
    pub lcd: LcdConfig,
    pub serial: SerialConfig,
}

impl Default for BoardConfig {
    /// Reference wiring
    fn default() -> Self {
        Self {
            sensor: PinConfig::with_pulldown(15),
            led: PinConfig::new(14),
            lcd: LcdConfig::default(),
            serial: SerialConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Every GPIO the board functions use, serial link excluded
    pub fn assigned_pins(&self) -> [u8; 8] {
        let [d4, d5, d6, d7] = self.lcd.data;
        [
            self.sensor.pin,
            self.led.pin,
            self.lcd.rs,
            self.lcd.en,
            d4,
            d5,
            d6,
            d7,
        ]
    }

    /// Check pin ranges, conflicts, display geometry and baud rate
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pins = self.assigned_pins();

        for (i, &pin) in pins.iter().enumerate() {
            if pin >= GPIO_COUNT {
                return Err(ConfigError::InvalidPin);
            }
            if RESERVED_PINS.contains(&pin) {
                return Err(ConfigError::ReservedPin(pin));
            }
            if pins[..i].contains(&pin) {
                return Err(ConfigError::PinConflict(pin));
            }
        }

        if self.lcd.rows != 2 || !(MIN_COLUMNS..=MAX_COLUMNS).contains(&self.lcd.columns) {
            return Err(ConfigError::InvalidGeometry);
        }

        if !(MIN_BAUDRATE..=MAX_BAUDRATE).contains(&self.serial.baudrate) {
            return Err(ConfigError::InvalidBaudrate);
        }

        Ok(())
    }
}
