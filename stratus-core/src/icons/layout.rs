//! Icon code layouts
//!
//! A layout assigns wire codes to icon resources and names the codes that
//! carry a special meaning (placeholder, error, not-available). Watch faces
//! differ in how many codes they use and which code means what, so the code
//! space is always configuration.

use heapless::Vec;

use super::{IconTableError, WeatherIcon};

/// Maximum number of codes in one layout
pub const MAX_ICONS: usize = 32;

/// Icon code as carried by the ICON field on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IconCode(pub u8);

impl IconCode {
    /// Raw code value
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for IconCode {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Codes with a fixed meaning inside a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconRole {
    /// Shown until the first update arrives
    Placeholder,
    /// Shown on transport failure
    Error,
    /// Forecast not available
    NotAvailable,
}

/// One code to icon assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IconEntry {
    pub code: IconCode,
    pub icon: WeatherIcon,
}

/// Icon code layout
///
/// Entries may be listed in any order. Completeness is checked when an
/// [`IconTable`](super::IconTable) is built from the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IconLayout {
    pub entries: Vec<IconEntry, MAX_ICONS>,
    pub placeholder: IconCode,
    pub error: IconCode,
    pub not_available: Option<IconCode>,
}

/// Icons of the compact layout, starting at code 0
const COMPACT_ICONS: [WeatherIcon; 10] = [
    WeatherIcon::Error,
    WeatherIcon::Refresh,
    WeatherIcon::ClearDay,
    WeatherIcon::PartlyCloudyDay,
    WeatherIcon::Cloudy,
    WeatherIcon::Rain,
    WeatherIcon::Snow,
    WeatherIcon::Storm,
    WeatherIcon::Fog,
    WeatherIcon::NotAvailable,
];

impl IconLayout {
    /// Start an empty layout with the given role codes
    pub const fn new(placeholder: IconCode, error: IconCode) -> Self {
        Self {
            entries: Vec::new(),
            placeholder,
            error,
            not_available: None,
        }
    }

    /// Full icon set on codes `'a'..='v'`
    ///
    /// `'a'` is the refresh placeholder, `'b'` the error icon and `'v'`
    /// not-available.
    pub fn extended() -> Self {
        Self {
            entries: sequential(b'a', &WeatherIcon::ALL),
            placeholder: IconCode(b'a'),
            error: IconCode(b'b'),
            not_available: Some(IconCode(b'v')),
        }
    }

    /// Reduced icon set on codes `0..=9`
    ///
    /// `0` is the error icon, `1` the refresh placeholder and `9`
    /// not-available.
    pub fn compact() -> Self {
        Self {
            entries: sequential(0, &COMPACT_ICONS),
            placeholder: IconCode(1),
            error: IconCode(0),
            not_available: Some(IconCode(9)),
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "extended" => Some(Self::extended()),
            "compact" => Some(Self::compact()),
            _ => None,
        }
    }

    /// Assign `icon` to `code`, replacing an earlier assignment
    pub fn assign(&mut self, code: IconCode, icon: WeatherIcon) -> Result<(), IconTableError> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.code == code) {
            entry.icon = icon;
            return Ok(());
        }
        self.entries
            .push(IconEntry { code, icon })
            .map_err(|_| IconTableError::TooManyIcons)
    }

    /// Code assigned to a role
    pub fn role_code(&self, role: IconRole) -> Option<IconCode> {
        match role {
            IconRole::Placeholder => Some(self.placeholder),
            IconRole::Error => Some(self.error),
            IconRole::NotAvailable => self.not_available,
        }
    }
}

impl Default for IconLayout {
    fn default() -> Self {
        Self::extended()
    }
}

fn sequential(first: u8, icons: &[WeatherIcon]) -> Vec<IconEntry, MAX_ICONS> {
    icons
        .iter()
        .zip(first..)
        .take(MAX_ICONS)
        .map(|(&icon, code)| IconEntry {
            code: IconCode(code),
            icon,
        })
        .collect()
}
