//! Configuration types
//!
//! Board wiring (which GPIO drives what) and the parser for the
//! `board.toml` file embedded in the firmware.

pub mod hardware;
pub mod parse;

pub use hardware::*;
pub use parse::{parse_board_config, parse_pin_string};
