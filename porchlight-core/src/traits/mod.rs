//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod io;

pub use display::{CharacterDisplay, DisplayError, DisplayLine};
pub use io::HardwareIo;
