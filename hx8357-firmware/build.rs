//! Build script for hx8357-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// SPI0 pins fixed by the board wiring
const RESERVED_PINS: [u8; 2] = [18, 19];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds display.toml for its pin assignment.        ║\n\
            ║  Please create one in the hx8357-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_panel(&config, &mut errors);
    validate_spi(&config, &mut errors);
    validate_pins(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid display configuration                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=display.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only the sections the firmware parser understands
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        return;
    };
    for (name, value) in table {
        if !["panel", "spi", "pins"].contains(&name.as_str()) {
            errors.push(format!("Unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("'{}' must be a [section]", name));
        }
    }
}

fn validate_panel(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(panel) = config.get("panel").and_then(|p| p.as_table()) else {
        return;
    };

    for (key, value) in panel {
        match key.as_str() {
            "orientation" => {
                if !matches!(value.as_str(), Some("landscape" | "portrait")) {
                    errors.push("[panel] orientation must be 'landscape' or 'portrait'".into());
                }
            }
            "word_order" => {
                if !matches!(
                    value.as_str(),
                    Some("big_endian" | "little_endian" | "be" | "le")
                ) {
                    errors.push("[panel] word_order must be 'big_endian' or 'little_endian'".into());
                }
            }
            "color_inversion" => {
                if !value.is_bool() {
                    errors.push("[panel] color_inversion must be true or false".into());
                }
            }
            other => errors.push(format!("[panel] unknown key '{}'", other)),
        }
    }
}

fn validate_spi(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(spi) = config.get("spi").and_then(|s| s.as_table()) else {
        return;
    };

    for (key, value) in spi {
        match key.as_str() {
            "frequency_hz" | "frequency" => match value.as_integer() {
                Some(hz) if hz > 0 && hz <= 20_000_000 => {}
                _ => errors.push("[spi] frequency_hz must be 1-20000000".into()),
            },
            "mode" => match value.as_integer() {
                Some(0..=3) => {}
                _ => errors.push("[spi] mode must be 0-3".into()),
            },
            other => errors.push(format!("[spi] unknown key '{}'", other)),
        }
    }
}

fn validate_pins(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(pins) = config.get("pins").and_then(|p| p.as_table()) else {
        return;
    };

    let mut seen: Vec<u8> = Vec::new();
    for (key, value) in pins {
        if !["cs", "cs_pin", "reset", "reset_pin", "backlight", "backlight_pin"]
            .contains(&key.as_str())
        {
            errors.push(format!("[pins] unknown key '{}'", key));
            continue;
        }

        let Some(pin) = value.as_str().and_then(parse_pin) else {
            errors.push(format!("[pins] {} must look like \"gpio17\" or \"!gpio17\"", key));
            continue;
        };

        if RESERVED_PINS.contains(&pin) {
            errors.push(format!("[pins] {} uses gpio{}, which belongs to SPI0", key, pin));
        }
        if seen.contains(&pin) {
            errors.push(format!("[pins] gpio{} assigned twice", pin));
        }
        seen.push(pin);
    }
}

/// "gpioN" or "!gpioN" with N in 0-29
fn parse_pin(s: &str) -> Option<u8> {
    let s = s.trim();
    let s = s.strip_prefix('!').unwrap_or(s);
    let pin: u8 = s.strip_prefix("gpio")?.parse().ok()?;
    (pin < 30).then_some(pin)
}
