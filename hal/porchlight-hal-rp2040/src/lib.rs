//! RP2040-specific HAL for the welcome light firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `porchlight-hal` traits, plus RP2040-specific functionality:
//!
//! - GPIO input/output wrappers (implement `porchlight_hal::{InputPin, OutputPin}`)
//! - Blocking UART transmitter (implements `porchlight_hal::UartTx`)
//! - Pin bank for taking GPIOs by number from the board config

#![no_std]

pub mod gpio;
pub mod pins;
pub mod uart;

pub use gpio::{RpInput, RpOutput};
pub use pins::{PinBank, PinError, SerialPeripherals};
pub use uart::RpUartTx;
