//! Porchlight - Motion-Activated Welcome Light Firmware
//!
//! Main firmware binary for RP2040-based boards. Polls a PIR sensor and
//! mirrors its level onto the porch light, a 16x2 welcome panel and a
//! serial status feed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use porchlight_hal_rp2040::PinBank;

mod board;
mod config;
mod tasks;

/// Embedded board wiring (compiled into firmware)
/// Edit board.toml and rebuild to rewire
const EMBEDDED_CONFIG: &str = include_str!("../board.toml");

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Porchlight firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load(EMBEDDED_CONFIG);

    // Hand out GPIOs by number; UART0 and its pins are split off first
    let (mut pins, serial) = PinBank::split(p);

    // Pins were validated against conflicts and reservations, so taking
    // them cannot fail
    let io = unwrap!(board::assemble(&config, &mut pins, serial));
    info!("Board I/O ready");

    spawner.spawn(tasks::presence_task(io)).unwrap();

    info!("Presence task spawned, firmware running");
}
