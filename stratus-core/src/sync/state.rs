//! Current value of every tracked field

use super::field::{text_value, FieldKey, FieldValue, TextValue};
use crate::config::FieldDefaults;
use crate::icons::IconCode;

/// CONDITIONS text shown on transport failure
pub const ERROR_TEXT: &str = "Error";

pub const DEFAULT_TEMPERATURE: &str = "N/A";
pub const DEFAULT_CONDITIONS: &str = "Please wait...";
pub const DEFAULT_CITY: &str = "N/A";

/// Values of the four tracked fields
///
/// Every field always holds a value. There is no separate error mode:
/// the face shows an error exactly when CONDITIONS and ICON hold the error
/// values, see [`SyncState::shows_error`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SyncState {
    temperature: TextValue,
    conditions: TextValue,
    city: TextValue,
    icon: IconCode,
}

impl SyncState {
    /// Startup state
    pub fn new(defaults: &FieldDefaults, placeholder: IconCode) -> Self {
        Self {
            temperature: defaults.temperature.clone(),
            conditions: defaults.conditions.clone(),
            city: defaults.city.clone(),
            icon: placeholder,
        }
    }

    pub fn temperature(&self) -> &str {
        &self.temperature
    }

    pub fn conditions(&self) -> &str {
        &self.conditions
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn icon(&self) -> IconCode {
        self.icon
    }

    /// Text of a text field, `None` for the icon
    pub fn text(&self, field: FieldKey) -> Option<&str> {
        match field {
            FieldKey::Temperature => Some(&self.temperature),
            FieldKey::Conditions => Some(&self.conditions),
            FieldKey::City => Some(&self.city),
            FieldKey::Icon => None,
        }
    }

    pub fn get(&self, field: FieldKey) -> FieldValue {
        match field {
            FieldKey::Temperature => FieldValue::Text(self.temperature.clone()),
            FieldKey::Conditions => FieldValue::Text(self.conditions.clone()),
            FieldKey::City => FieldValue::Text(self.city.clone()),
            FieldKey::Icon => FieldValue::Icon(self.icon),
        }
    }

    /// Whether the error fallback is what is currently displayed
    pub fn shows_error(&self, error_icon: IconCode) -> bool {
        self.conditions == ERROR_TEXT && self.icon == error_icon
    }

    /// Returns false if `field` is the icon
    pub(crate) fn set_text(&mut self, field: FieldKey, value: TextValue) -> bool {
        let slot = match field {
            FieldKey::Temperature => &mut self.temperature,
            FieldKey::Conditions => &mut self.conditions,
            FieldKey::City => &mut self.city,
            FieldKey::Icon => return false,
        };
        *slot = value;
        true
    }

    pub(crate) fn set_icon(&mut self, code: IconCode) {
        self.icon = code;
    }

    pub(crate) fn set_error_text(&mut self) {
        self.conditions = text_value(ERROR_TEXT);
    }
}
