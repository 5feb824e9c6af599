//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in porchlight-core for the welcome light hardware:
//!
//! - Character display (HD44780 in 4-bit mode)
//! - Porch light (GPIO LED, active-high or active-low)
//! - Motion sensor (PIR digital output)
//! - Serial status link (newline-terminated lines over UART)
//! - `BoardIo`, which composes the above into `HardwareIo`

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod board;
pub mod display;
pub mod light;
pub mod sensor;
pub mod serial;

pub use board::{BoardIo, IoError};
