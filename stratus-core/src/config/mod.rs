//! Watch-face configuration
//!
//! Icon layout and field defaults, plus a parser for the small TOML subset
//! the firmware embeds.

mod parse;
mod types;

pub use parse::{parse_config, ParseError, ParseErrorKind};
pub use types::{FieldDefaults, WatchfaceConfig};
