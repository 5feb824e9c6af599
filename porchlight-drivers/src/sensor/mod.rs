//! Motion sensor input

pub mod pir;

pub use pir::PirSensor;
