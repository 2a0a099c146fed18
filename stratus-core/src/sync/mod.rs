//! Key-indexed state sync
//!
//! The synchronizer owns the four tracked fields, applies inbound
//! key/value updates to them and tells the display adapter what changed.
//! Transport failures collapse into a single fallback state.

mod events;
mod field;
mod state;
mod synchronizer;

pub use events::{DictionaryOutcome, SyncEvent, UpdateOutcome, UpdateValue};
pub use field::{text_value, FieldKey, FieldValue, TextValue, TEXT_CAPACITY};
pub use state::{SyncState, DEFAULT_CITY, DEFAULT_CONDITIONS, DEFAULT_TEMPERATURE, ERROR_TEXT};
pub use synchronizer::{StateSynchronizer, SyncError};
