//! Configuration type definitions

use crate::icons::IconLayout;
use crate::sync::{text_value, TextValue, DEFAULT_CITY, DEFAULT_CONDITIONS, DEFAULT_TEMPERATURE};

/// Text shown in each text field before the first update
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldDefaults {
    pub temperature: TextValue,
    pub conditions: TextValue,
    pub city: TextValue,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            temperature: text_value(DEFAULT_TEMPERATURE),
            conditions: text_value(DEFAULT_CONDITIONS),
            city: text_value(DEFAULT_CITY),
        }
    }
}

/// Complete watch-face configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchfaceConfig {
    /// Icon code layout
    pub icons: IconLayout,
    /// Startup text
    pub defaults: FieldDefaults,
}
