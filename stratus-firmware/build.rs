//! Build script for stratus-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates watchface.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const SECTIONS: [&str; 2] = ["icons", "defaults"];
const ICON_KEYS: [&str; 5] = ["preset", "placeholder", "error", "not_available", "map"];
const DEFAULT_KEYS: [&str; 3] = ["temperature", "conditions", "city"];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate watchface.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=watchface.toml");

    let config_path = Path::new("watchface.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: watchface.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a watchface.toml configuration file.        ║\n\
            ║  Please create one in the stratus-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read watchface.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in watchface.toml                    ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    report("Invalid structure", validate_structure(&config));
    report("Invalid icon map", validate_icon_map(&config));

    // The firmware's own parser has the final say on codes and layout
    if let Err(e) = stratus_core::config::parse_config(&config_content) {
        report(
            "Rejected by the watch-face parser",
            vec![format!("line {}: {:?}", e.line, e.kind)],
        );
    }

    println!("cargo:warning=watchface.toml validated successfully");
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

/// Panic with a boxed list of errors, if there are any
fn report(title: &str, errors: Vec<String>) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Check sections and keys, and the shape of each value
fn validate_structure(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(root) = config.as_table() else {
        return vec!["top level must be a table".to_string()];
    };

    for (name, value) in root {
        if !SECTIONS.contains(&name.as_str()) {
            errors.push(format!("unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("[{}] must be a table", name));
        }
    }

    if let Some(icons) = root.get("icons").and_then(|v| v.as_table()) {
        for (key, value) in icons {
            if !ICON_KEYS.contains(&key.as_str()) {
                errors.push(format!("[icons] unknown key '{}'", key));
                continue;
            }
            match key.as_str() {
                "preset" => match value.as_str() {
                    Some("extended") | Some("compact") => {}
                    _ => errors.push("[icons] preset must be 'extended' or 'compact'".to_string()),
                },
                "map" => {}
                _ => {
                    if !is_icon_code(value) && value.as_str() != Some("none") {
                        errors.push(format!(
                            "[icons] {} must be a single character or 0-255",
                            key
                        ));
                    }
                }
            }
        }
    }

    if let Some(defaults) = root.get("defaults").and_then(|v| v.as_table()) {
        for (key, value) in defaults {
            if !DEFAULT_KEYS.contains(&key.as_str()) {
                errors.push(format!("[defaults] unknown key '{}'", key));
            } else if !value.is_str() {
                errors.push(format!("[defaults] {} must be a string", key));
            }
        }
    }

    errors
}

/// Check the optional custom icon table
fn validate_icon_map(config: &toml::Value) -> Vec<String> {
    let map = match config.get("icons").and_then(|i| i.get("map")) {
        Some(toml::Value::Table(t)) => t,
        Some(_) => return vec!["[icons.map] must be a table".to_string()],
        None => return Vec::new(),
    };

    let mut errors = Vec::new();
    if map.is_empty() {
        errors.push("[icons.map] cannot be empty".to_string());
    }

    for (code, icon) in map {
        if icon.as_str().is_none() {
            errors.push(format!("[icons.map] {} must name an icon", code));
        }
    }

    errors
}

fn is_icon_code(value: &toml::Value) -> bool {
    match value {
        toml::Value::Integer(n) => (0..=255).contains(n),
        toml::Value::String(s) => s.len() == 1 || s.parse::<u8>().is_ok(),
        _ => false,
    }
}
