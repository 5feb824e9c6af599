//! Board wiring parser
//!
//! Minimal `no_std` parser for the subset of TOML used by `board.toml`.
//! It does NOT support the full TOML spec.
//!
//! Supported:
//! - `key = value` pairs (quoted string, integer with optional `_` separators)
//! - `[lcd]` and `[serial]` section headers
//! - Comments (`# ...`), including trailing ones
//!
//! Keys that are absent keep their reference-wiring default. The parsed
//! config is validated before it is returned.

use super::hardware::{BoardConfig, ConfigError, PinConfig, Pull, GPIO_COUNT};

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Lcd,
    Serial,
}

/// Parsed right-hand side of a `key = value` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Value<'a> {
    Str(&'a str),
    Int(u32),
}

/// Parse `board.toml` content into a validated [`BoardConfig`]
pub fn parse_board_config(input: &str) -> Result<BoardConfig, ConfigError> {
    let mut config = BoardConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = parse_section_header(header)?;
            continue;
        }

        let (key, raw) = line.split_once('=').ok_or(ConfigError::InvalidValue)?;
        let value = parse_value(raw.trim())?;
        apply_value(section, key.trim(), value, &mut config)?;
    }

    config.validate()?;
    Ok(config)
}

/// Parse a pin string
///
/// Supports formats:
/// - "gpio14" -> plain pin
/// - "!gpio14" -> inverted (active-low)
/// - "^gpio15" -> pull-up
/// - "~gpio15" -> pull-down
///
/// Modifiers may be combined in any order ("!~gpio15").
pub fn parse_pin_string(s: &str) -> Result<PinConfig, ConfigError> {
    let mut rest = s.trim();
    let mut config = PinConfig::default();

    loop {
        if let Some(r) = rest.strip_prefix('!') {
            config.inverted = true;
            rest = r;
        } else if let Some(r) = rest.strip_prefix('^') {
            config.pull = set_pull(config.pull, Pull::Up)?;
            rest = r;
        } else if let Some(r) = rest.strip_prefix('~') {
            config.pull = set_pull(config.pull, Pull::Down)?;
            rest = r;
        } else {
            break;
        }
    }

    let number = rest.strip_prefix("gpio").ok_or(ConfigError::InvalidPin)?;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidPin);
    }
    let pin: u8 = number.parse().map_err(|_| ConfigError::InvalidPin)?;
    if pin >= GPIO_COUNT {
        return Err(ConfigError::InvalidPin);
    }

    config.pin = pin;
    Ok(config)
}

fn set_pull(current: Pull, requested: Pull) -> Result<Pull, ConfigError> {
    match current {
        Pull::None => Ok(requested),
        _ => Err(ConfigError::InvalidPin),
    }
}

/// Cut a trailing `#` comment, ignoring `#` inside quotes
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    match header.trim() {
        "lcd" => Ok(Section::Lcd),
        "serial" => Ok(Section::Serial),
        _ => Err(ConfigError::InvalidSection),
    }
}

fn parse_value(raw: &str) -> Result<Value<'_>, ConfigError> {
    if let Some(inner) = raw.strip_prefix('"').and_then(|r| r.strip_suffix('"')) {
        if inner.contains('"') {
            return Err(ConfigError::InvalidValue);
        }
        return Ok(Value::Str(inner));
    }
    parse_integer(raw)
        .map(Value::Int)
        .ok_or(ConfigError::InvalidValue)
}

/// Decimal integer, `_` allowed between digits
fn parse_integer(raw: &str) -> Option<u32> {
    if raw.is_empty() || raw.starts_with('_') || raw.ends_with('_') || raw.contains("__") {
        return None;
    }

    raw.bytes().filter(|&b| b != b'_').try_fold(0u32, |acc, b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    })
}

fn apply_value(
    section: Section,
    key: &str,
    value: Value<'_>,
    config: &mut BoardConfig,
) -> Result<(), ConfigError> {
    match (section, key) {
        (Section::Root, "sensor") => config.sensor = pin_value(value)?,
        (Section::Root, "led") => config.led = led_pin_value(value)?,
        (Section::Lcd, "rs") => config.lcd.rs = bus_pin_value(value)?,
        (Section::Lcd, "en") => config.lcd.en = bus_pin_value(value)?,
        (Section::Lcd, "d4") => config.lcd.data[0] = bus_pin_value(value)?,
        (Section::Lcd, "d5") => config.lcd.data[1] = bus_pin_value(value)?,
        (Section::Lcd, "d6") => config.lcd.data[2] = bus_pin_value(value)?,
        (Section::Lcd, "d7") => config.lcd.data[3] = bus_pin_value(value)?,
        (Section::Lcd, "columns") => config.lcd.columns = small_int_value(value)?,
        (Section::Lcd, "rows") => config.lcd.rows = small_int_value(value)?,
        (Section::Serial, "baudrate") => config.serial.baudrate = int_value(value)?,
        _ => return Err(ConfigError::UnknownKey),
    }
    Ok(())
}

fn pin_value(value: Value<'_>) -> Result<PinConfig, ConfigError> {
    match value {
        Value::Str(s) => parse_pin_string(s),
        Value::Int(_) => Err(ConfigError::InvalidValue),
    }
}

/// The LED is a push-pull output: inversion allowed, pulls are not
fn led_pin_value(value: Value<'_>) -> Result<PinConfig, ConfigError> {
    let pin = pin_value(value)?;
    if pin.pull != Pull::None {
        return Err(ConfigError::InvalidPin);
    }
    Ok(pin)
}

/// LCD bus lines are plain push-pull outputs: no inversion, no pulls
fn bus_pin_value(value: Value<'_>) -> Result<u8, ConfigError> {
    let pin = pin_value(value)?;
    if pin.inverted || pin.pull != Pull::None {
        return Err(ConfigError::InvalidPin);
    }
    Ok(pin.pin)
}

fn int_value(value: Value<'_>) -> Result<u32, ConfigError> {
    match value {
        Value::Int(n) => Ok(n),
        Value::Str(_) => Err(ConfigError::InvalidValue),
    }
}

fn small_int_value(value: Value<'_>) -> Result<u8, ConfigError> {
    u8::try_from(int_value(value)?).map_err(|_| ConfigError::InvalidValue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LcdConfig;

    const REFERENCE: &str = r#"
# Porch wiring
sensor = "~gpio15"   # PIR output
led = "gpio14"

[lcd]
rs = "gpio16"
en = "gpio17"
d4 = "gpio18"
d5 = "gpio19"
d6 = "gpio20"
d7 = "gpio21"
columns = 16
rows = 2

[serial]
baudrate = 115_200
"#;

    #[test]
    fn test_parse_reference_wiring() {
        let config = parse_board_config(REFERENCE).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(parse_board_config(""), Ok(BoardConfig::default()));
    }

    #[test]
    fn test_partial_override() {
        let config = parse_board_config("led = \"!gpio25\"\n[serial]\nbaudrate = 9600\n").unwrap();

        assert_eq!(config.led, PinConfig::inverted(25));
        assert_eq!(config.serial.baudrate, 9600);
        assert_eq!(config.lcd, LcdConfig::default());
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            parse_board_config("[heater]\n"),
            Err(ConfigError::InvalidSection)
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_board_config("buzzer = \"gpio3\"\n"),
            Err(ConfigError::UnknownKey)
        );
        // Keys are section-scoped
        assert_eq!(
            parse_board_config("baudrate = 9600\n"),
            Err(ConfigError::UnknownKey)
        );
    }

    #[test]
    fn test_wrong_value_type() {
        assert_eq!(
            parse_board_config("led = 14\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_board_config("[lcd]\ncolumns = \"16\"\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_board_config("[lcd]\nrows = 300\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_board_config("led\n"),
            Err(ConfigError::InvalidValue)
        );
    }

    #[test]
    fn test_lcd_pins_must_be_plain() {
        assert_eq!(
            parse_board_config("[lcd]\nrs = \"!gpio16\"\n"),
            Err(ConfigError::InvalidPin)
        );
    }

    #[test]
    fn test_led_takes_no_pull() {
        assert_eq!(
            parse_board_config("led = \"^gpio14\"\n"),
            Err(ConfigError::InvalidPin)
        );
        assert_eq!(
            parse_board_config("led = \"!~gpio14\"\n"),
            Err(ConfigError::InvalidPin)
        );
        // Active-low wiring is still fine
        assert_eq!(
            parse_board_config("led = \"!gpio14\"\n").map(|c| c.led),
            Ok(PinConfig::inverted(14))
        );
    }

    #[test]
    fn test_validation_runs() {
        assert_eq!(
            parse_board_config("led = \"gpio15\"\n"),
            Err(ConfigError::PinConflict(15))
        );
        assert_eq!(
            parse_board_config("sensor = \"gpio1\"\n"),
            Err(ConfigError::ReservedPin(1))
        );
    }

    #[test]
    fn test_parse_pin_string() {
        assert_eq!(parse_pin_string("gpio14"), Ok(PinConfig::new(14)));
        assert_eq!(parse_pin_string("!gpio14"), Ok(PinConfig::inverted(14)));
        assert_eq!(parse_pin_string("~gpio15"), Ok(PinConfig::with_pulldown(15)));
        assert_eq!(
            parse_pin_string("^!gpio4"),
            Ok(PinConfig {
                pin: 4,
                inverted: true,
                pull: Pull::Up,
            })
        );
        assert_eq!(parse_pin_string("gpio0"), Ok(PinConfig::new(0)));
        assert_eq!(parse_pin_string("gpio29"), Ok(PinConfig::new(29)));

        // Invalid
        assert_eq!(parse_pin_string("gpio30"), Err(ConfigError::InvalidPin));
        assert_eq!(parse_pin_string("pin11"), Err(ConfigError::InvalidPin));
        assert_eq!(parse_pin_string("gpio"), Err(ConfigError::InvalidPin));
        assert_eq!(parse_pin_string("gpio+3"), Err(ConfigError::InvalidPin));
        assert_eq!(parse_pin_string("^~gpio3"), Err(ConfigError::InvalidPin));
        assert_eq!(parse_pin_string(""), Err(ConfigError::InvalidPin));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("9600"), Some(9600));
        assert_eq!(parse_integer("115_200"), Some(115_200));
        assert_eq!(parse_integer("_1"), None);
        assert_eq!(parse_integer("1__0"), None);
        assert_eq!(parse_integer("-1"), None);
        assert_eq!(parse_integer("99999999999"), None);
    }

    #[test]
    fn test_hash_inside_string_is_not_comment() {
        assert_eq!(strip_comment("a = \"x#y\" # c"), "a = \"x#y\" ");
    }
}
