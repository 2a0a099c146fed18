//! Tracked fields

use heapless::String;

use stratus_protocol::{KEY_CITY, KEY_CONDITIONS, KEY_ICON, KEY_TEMPERATURE};

use crate::icons::IconCode;

/// Maximum text field length in bytes
pub const TEXT_CAPACITY: usize = 32;

/// Bounded text field value
pub type TextValue = String<TEXT_CAPACITY>;

/// Copy `text` into a field value, truncating at a character boundary
pub fn text_value(text: &str) -> TextValue {
    let mut end = text.len().min(TEXT_CAPACITY);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let mut value = TextValue::new();
    // Fits: end <= TEXT_CAPACITY
    let _ = value.push_str(&text[..end]);
    value
}

/// One of the four tracked fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FieldKey {
    Temperature = 0,
    Conditions = 1,
    City = 2,
    Icon = 3,
}

impl FieldKey {
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Temperature,
        FieldKey::Conditions,
        FieldKey::City,
        FieldKey::Icon,
    ];

    /// Field for a wire key, `None` for keys this face does not track
    pub const fn from_key(key: u32) -> Option<Self> {
        match key {
            KEY_TEMPERATURE => Some(FieldKey::Temperature),
            KEY_CONDITIONS => Some(FieldKey::Conditions),
            KEY_CITY => Some(FieldKey::City),
            KEY_ICON => Some(FieldKey::Icon),
            _ => None,
        }
    }

    /// Wire key
    pub const fn key(self) -> u32 {
        self as u32
    }

    /// True for the text fields
    pub const fn is_text(self) -> bool {
        !matches!(self, FieldKey::Icon)
    }
}

/// Current value of one field
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldValue {
    Text(TextValue),
    Icon(IconCode),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            FieldValue::Icon(_) => None,
        }
    }

    pub fn as_icon(&self) -> Option<IconCode> {
        match self {
            FieldValue::Icon(code) => Some(*code),
            FieldValue::Text(_) => None,
        }
    }
}
