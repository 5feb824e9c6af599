//! Board-agnostic core logic for the welcome light firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (`HardwareIo`, `CharacterDisplay`)
//! - Presence mapping (sensor level to LED and welcome panel)
//! - Status reporting (sensor level to serial status line)
//! - The control loop that ties them together
//! - Board wiring configuration types and parser

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod control;
pub mod presence;
pub mod status;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
