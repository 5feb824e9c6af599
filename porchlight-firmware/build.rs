//! Build script for porchlight-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates board.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use porchlight_core::config::{parse_board_config, ConfigError};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).expect("create memory.x in OUT_DIR");
    f.write_all(memory_x).expect("write memory.x");

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml wiring at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=board.toml");

    let content = fs::read_to_string("board.toml")
        .unwrap_or_else(|e| fail(&format!("cannot read board.toml: {e}")));

    // Full TOML syntax check first, for line/column diagnostics
    if let Err(e) = toml::from_str::<toml::Value>(&content) {
        fail(&format!("invalid TOML syntax\n{e}"));
    }

    // Then the parser the firmware runs at boot, so a board.toml that
    // builds is one the device accepts
    match parse_board_config(&content) {
        Ok(config) => println!(
            "cargo:warning=board.toml: sensor=GPIO{} led=GPIO{} lcd={}x{} serial={} baud",
            config.sensor.pin,
            config.led.pin,
            config.lcd.columns,
            config.lcd.rows,
            config.serial.baudrate
        ),
        Err(e) => fail(&describe(e)),
    }
}

/// Human-readable explanation of a wiring error
fn describe(e: ConfigError) -> String {
    match e {
        ConfigError::InvalidSection => "unknown section (only [lcd] and [serial] exist)".into(),
        ConfigError::UnknownKey => "unknown key for its section".into(),
        ConfigError::InvalidValue => "value has the wrong type or is out of range".into(),
        ConfigError::InvalidPin => {
            "pin must be \"gpioN\" (N 0-29); ! only on sensor/led, ^ or ~ only on sensor".into()
        }
        ConfigError::ReservedPin(pin) => format!("GPIO{pin} is used by the serial link (UART0)"),
        ConfigError::PinConflict(pin) => format!("GPIO{pin} is assigned more than once"),
        ConfigError::InvalidGeometry => "LCD must have 2 rows and 10-40 columns".into(),
        ConfigError::InvalidBaudrate => "baud rate must be 300-921600".into(),
    }
}

fn fail(msg: &str) -> ! {
    panic!("\n\nboard.toml rejected: {msg}\n");
}
