//! Checked icon table

use heapless::Vec;

use super::{IconCode, IconEntry, IconLayout, IconRole, WeatherIcon, MAX_ICONS};

/// Layout validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconTableError {
    /// Layout has no entries
    Empty,
    /// More entries than the table can hold
    TooManyIcons,
    /// Code assigned twice
    DuplicateCode(IconCode),
    /// Gap in the code range
    MissingCode(IconCode),
    /// Role code outside the table
    UnmappedRole { role: IconRole, code: IconCode },
}

/// Mapping from icon code to icon resource
///
/// Built from an [`IconLayout`]. Construction guarantees that the codes
/// form one contiguous range and that every role code resolves, so a code
/// is valid exactly when [`IconTable::resolve`] returns `Some`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IconTable {
    /// Sorted by code
    entries: Vec<IconEntry, MAX_ICONS>,
    placeholder: IconCode,
    error: IconCode,
    not_available: Option<IconCode>,
}

impl IconTable {
    /// Validate a layout and build its table
    pub fn new(layout: &IconLayout) -> Result<Self, IconTableError> {
        let mut entries = layout.entries.clone();
        if entries.is_empty() {
            return Err(IconTableError::Empty);
        }
        entries.sort_unstable_by_key(|e| e.code);

        for pair in entries.windows(2) {
            let (prev, next) = (pair[0].code.0, pair[1].code.0);
            if prev == next {
                return Err(IconTableError::DuplicateCode(pair[1].code));
            }
            if next - prev > 1 {
                return Err(IconTableError::MissingCode(IconCode(prev + 1)));
            }
        }

        let table = Self {
            entries,
            placeholder: layout.placeholder,
            error: layout.error,
            not_available: layout.not_available,
        };

        for role in [IconRole::Placeholder, IconRole::Error, IconRole::NotAvailable] {
            if let Some(code) = layout.role_code(role) {
                if !table.contains(code) {
                    return Err(IconTableError::UnmappedRole { role, code });
                }
            }
        }

        Ok(table)
    }

    /// Icon for a code, `None` if out of range
    pub fn resolve(&self, code: IconCode) -> Option<WeatherIcon> {
        self.entries
            .binary_search_by_key(&code, |e| e.code)
            .ok()
            .map(|idx| self.entries[idx].icon)
    }

    pub fn contains(&self, code: IconCode) -> bool {
        self.resolve(code).is_some()
    }

    /// Number of codes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed table
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowest and highest valid code
    pub fn code_range(&self) -> (IconCode, IconCode) {
        // Non-empty by construction
        let first = self.entries.first().map_or(IconCode(0), |e| e.code);
        let last = self.entries.last().map_or(IconCode(0), |e| e.code);
        (first, last)
    }

    pub fn placeholder(&self) -> IconCode {
        self.placeholder
    }

    pub fn error(&self) -> IconCode {
        self.error
    }

    pub fn not_available(&self) -> Option<IconCode> {
        self.not_available
    }

    /// Entries in code order
    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }
}
