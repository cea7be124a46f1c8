//! Minimal TOML parser for the display configuration
//!
//! Handles only the subset `display.toml` uses; it does NOT support the full
//! TOML spec and never allocates.
//!
//! Supported features:
//! - `[panel]`, `[spi]` and `[pins]` section headers
//! - Key = value pairs (string, integer, boolean)
//! - Integers with `_` separators (`10_000_000`)
//! - Pin strings `"gpio17"` and `"!gpio20"` (active-low)
//! - Comments (# ...)

use hx8357_core::config::{DisplayConfig, PinConfig};
use hx8357_core::state::Orientation;
use hx8357_hal_rp2040::parse_pin_string;
use hx8357_protocol::WordOrder;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value of the wrong type or out of range
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
    /// Key not valid in its section
    UnknownKey,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Panel,
    Spi,
    Pins,
}

/// Parse TOML text into a [`DisplayConfig`]
///
/// Keys that are not present keep their defaults.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let header = header
                .strip_suffix(']')
                .ok_or(ParseError::InvalidSection)?;
            section = parse_section_header(header)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "panel" => Ok(Section::Panel),
        "spi" => Ok(Section::Spi),
        "pins" => Ok(Section::Pins),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    // Strip an inline comment unless the # sits inside a string
    let value = match value.find('#') {
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Parse an integer value, ignoring `_` separators
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    let mut digits = heapless::String::<24>::new();
    for c in value.chars().filter(|&c| c != '_') {
        digits.push(c).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let (pin, inverted) = parse_pin_string(parse_string(value)).ok_or(ParseError::InvalidPin)?;
    Ok(PinConfig { pin, inverted })
}

fn parse_orientation(value: &str) -> Result<Orientation, ParseError> {
    match parse_string(value) {
        "landscape" => Ok(Orientation::Landscape),
        "portrait" => Ok(Orientation::Portrait),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_word_order(value: &str) -> Result<WordOrder, ParseError> {
    match parse_string(value) {
        "big_endian" | "be" => Ok(WordOrder::BigEndian),
        "little_endian" | "le" => Ok(WordOrder::LittleEndian),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Apply a parsed value to the appropriate config field
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DisplayConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Panel => match key {
            "orientation" => config.panel.orientation = parse_orientation(value)?,
            "color_inversion" => config.panel.color_inversion = parse_bool(value)?,
            "word_order" => config.panel.word_order = parse_word_order(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Spi => match key {
            "frequency_hz" | "frequency" => config.spi.frequency_hz = parse_int(value)?,
            "mode" => config.spi.mode = parse_int(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Pins => match key {
            "cs" | "cs_pin" => config.pins.cs = parse_pin(value)?,
            "reset" | "reset_pin" => config.pins.reset = parse_pin(value)?,
            "backlight" | "backlight_pin" => config.pins.backlight = parse_pin(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Root => return Err(ParseError::UnknownKey),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pin() {
        let pin = parse_pin("\"gpio17\"").unwrap();
        assert_eq!(pin.pin, 17);
        assert!(!pin.inverted);

        let pin = parse_pin("\"!gpio20\"").unwrap();
        assert_eq!(pin.pin, 20);
        assert!(pin.inverted);

        assert_eq!(parse_pin("\"gpio40\""), Err(ParseError::InvalidPin));
    }

    #[test]
    fn test_parse_int_separators() {
        assert_eq!(parse_int::<u32>("10_000_000"), Ok(10_000_000));
        assert_eq!(parse_int::<u8>("3"), Ok(3));
        assert_eq!(parse_int::<u8>("300"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_inline_comment() {
        assert_eq!(parse_key_value("mode = 3 # cpol=1"), Some(("mode", "3")));
        assert_eq!(
            parse_key_value("cs = \"gpio17\" # chip select"),
            Some(("cs", "\"gpio17\""))
        );
        assert_eq!(parse_key_value("mode ="), None);
    }

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
# Portrait panel on a little-endian bridge
[panel]
orientation = "portrait"
color_inversion = false
word_order = "little_endian"

[spi]
frequency_hz = 16_000_000
mode = 0

[pins]
cs = "gpio5"
reset = "!gpio6"
backlight = "gpio7"
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.panel.orientation, Orientation::Portrait);
        assert!(!config.panel.color_inversion);
        assert_eq!(config.panel.word_order, WordOrder::LittleEndian);
        assert_eq!(config.spi.frequency_hz, 16_000_000);
        assert_eq!(config.spi.mode, 0);
        assert_eq!(config.pins.cs, PinConfig::new(5));
        assert_eq!(config.pins.reset, PinConfig::inverted(6));
        assert_eq!(config.pins.backlight.pin, 7);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_config("[spi]\nmode = 3\n").unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_config("[fonts]"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("[panel"), Err(ParseError::InvalidSection));
        assert_eq!(
            parse_config("[panel]\nrotation = 90"),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(
            parse_config("[panel]\norientation = \"diagonal\""),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("mode = 3"), Err(ParseError::UnknownKey));
    }
}
