//! Watch-face configuration loading
//!
//! The configuration is embedded at build time from watchface.toml and
//! parsed at startup. Falls back to built-in defaults if parsing fails.

use defmt::*;

use stratus_core::config::{parse_config, WatchfaceConfig};

/// Embedded configuration (compiled into firmware)
/// Edit watchface.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../watchface.toml");

/// Parse the embedded configuration
pub fn load_config() -> WatchfaceConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            log_config_summary(&config);
            config
        }
        Err(e) => {
            error!(
                "Failed to parse embedded config at line {}: {:?}",
                e.line, e.kind
            );
            error!("Using built-in defaults");
            WatchfaceConfig::default()
        }
    }
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &WatchfaceConfig) {
    let icons = &config.icons;
    debug!("  {} icon codes", icons.entries.len());
    debug!(
        "  placeholder={}, error={}, not_available={:?}",
        icons.placeholder.value(),
        icons.error.value(),
        icons.not_available.map(|c| c.value())
    );
    debug!(
        "  defaults: {} / {} / {}",
        config.defaults.temperature.as_str(),
        config.defaults.conditions.as_str(),
        config.defaults.city.as_str()
    );
}
