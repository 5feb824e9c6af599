//! Porch light output

pub mod gpio;

pub use gpio::GpioLight;
