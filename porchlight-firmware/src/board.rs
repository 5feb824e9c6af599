//! Board assembly
//!
//! Turns the validated wiring into concrete drivers: PIR input, LED
//! output, HD44780 on six outputs and the UART0 status link.

use defmt::*;
use embassy_time::Delay;
use porchlight_core::config::BoardConfig;
use porchlight_drivers::display::{Hd44780, LcdPins};
use porchlight_drivers::light::GpioLight;
use porchlight_drivers::sensor::PirSensor;
use porchlight_drivers::serial::SerialLines;
use porchlight_drivers::BoardIo;
use porchlight_hal::{Level, UartConfig};
use porchlight_hal_rp2040::{PinBank, PinError, RpInput, RpOutput, RpUartTx, SerialPeripherals};

/// Concrete board I/O type run by the presence task
pub type Board = BoardIo<RpInput, RpOutput, Hd44780<RpOutput, Delay>, RpUartTx>;

/// Build and initialize every peripheral the welcome light uses
pub fn assemble(
    config: &BoardConfig,
    pins: &mut PinBank,
    serial: SerialPeripherals,
) -> Result<Board, PinError> {
    // Motion sensor
    let sensor_pin = RpInput::new(pins.take(config.sensor.pin)?, config.sensor.pull);
    let sensor = PirSensor::new(sensor_pin, config.sensor.inverted);
    info!(
        "PIR sensor on GPIO{} (inverted={})",
        config.sensor.pin, config.sensor.inverted
    );

    // Porch light, configured at its off level so it never flashes at boot
    let off_level = Level::from(config.led.level_for(false));
    let light = GpioLight::new(
        RpOutput::new(pins.take(config.led.pin)?, off_level),
        config.led.inverted,
    );
    info!(
        "LED on GPIO{} (inverted={})",
        config.led.pin, config.led.inverted
    );

    // Welcome panel
    let [d4, d5, d6, d7] = config.lcd.data;
    let lcd_pins = LcdPins {
        rs: output(pins, config.lcd.rs)?,
        en: output(pins, config.lcd.en)?,
        data: [
            output(pins, d4)?,
            output(pins, d5)?,
            output(pins, d6)?,
            output(pins, d7)?,
        ],
    };
    let mut lcd = Hd44780::new(lcd_pins, Delay, config.lcd.columns);
    lcd.init();
    info!(
        "LCD initialized ({}x{}, RS=GPIO{} E=GPIO{})",
        config.lcd.columns, config.lcd.rows, config.lcd.rs, config.lcd.en
    );

    // Status link
    let uart_config = UartConfig::with_baudrate(config.serial.baudrate);
    let uart = RpUartTx::new(serial.uart, serial.tx, &uart_config);
    info!("Serial link on UART0 at {} baud", config.serial.baudrate);

    Ok(BoardIo::new(sensor, light, lcd, SerialLines::new(uart)))
}

fn output(pins: &mut PinBank, pin: u8) -> Result<RpOutput, PinError> {
    Ok(RpOutput::new(pins.take(pin)?, Level::Low))
}
