//! Owned sync events

use stratus_protocol::{DictError, TupleValue};

use super::field::{text_value, FieldKey, TextValue};

/// Owned copy of an inbound tuple value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateValue {
    Text(TextValue),
    Uint(u32),
    Int(i32),
    /// Byte array; only the length is kept
    Bytes(usize),
}

impl UpdateValue {
    pub fn text(text: &str) -> Self {
        UpdateValue::Text(text_value(text))
    }

    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            UpdateValue::Uint(v) => Some(v as i64),
            UpdateValue::Int(v) => Some(v as i64),
            _ => None,
        }
    }
}

impl From<TupleValue<'_>> for UpdateValue {
    fn from(value: TupleValue<'_>) -> Self {
        match value {
            TupleValue::CString(text) => UpdateValue::text(text),
            TupleValue::Uint(v) => UpdateValue::Uint(v),
            TupleValue::Int(v) => UpdateValue::Int(v),
            TupleValue::Bytes(data) => UpdateValue::Bytes(data.len()),
        }
    }
}

/// Input to the synchronizer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncEvent {
    /// One inbound key/value pair
    Update { key: u32, value: UpdateValue },
    /// Inbound channel failure with an opaque code
    TransportFailure { code: u32 },
}

/// Result of a successful update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateOutcome {
    /// Field changed and the adapter was notified
    Applied(FieldKey),
    /// Key not tracked by this face
    Ignored,
}

/// Summary of applying a whole dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DictionaryOutcome {
    pub applied: u8,
    pub ignored: u8,
    /// Tuples refused for a wrong type or icon code
    pub rejected: u8,
    /// Decode failure that triggered the transport fallback
    pub decode_error: Option<DictError>,
}

impl DictionaryOutcome {
    /// True if the dictionary decoded completely
    pub fn is_complete(&self) -> bool {
        self.decode_error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple_value() {
        assert_eq!(
            UpdateValue::from(TupleValue::CString("Cloudy")),
            UpdateValue::text("Cloudy")
        );
        assert_eq!(UpdateValue::from(TupleValue::Uint(7)), UpdateValue::Uint(7));
        assert_eq!(UpdateValue::from(TupleValue::Int(-3)), UpdateValue::Int(-3));
        assert_eq!(
            UpdateValue::from(TupleValue::Bytes(&[1, 2, 3])),
            UpdateValue::Bytes(3)
        );
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(UpdateValue::Uint(99).as_integer(), Some(99));
        assert_eq!(UpdateValue::Int(-1).as_integer(), Some(-1));
        assert_eq!(UpdateValue::text("1").as_integer(), None);
        assert_eq!(UpdateValue::Bytes(1).as_integer(), None);
    }
}
