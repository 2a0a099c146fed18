//! Parser for the watch-face configuration file
//!
//! Handles only the TOML subset the configuration needs, without `alloc`.
//!
//! Supported:
//! - `[icons]`, `[icons.map]` and `[defaults]` sections
//! - `key = value` pairs with quoted or bare strings and integers
//! - Comments (`# ...`), including trailing ones
//!
//! Icon codes are written either as an integer (`0`..`255`) or as a single
//! character (`"a"`). A single digit is read as an integer.

use heapless::Vec;

use super::types::WatchfaceConfig;
use crate::icons::{IconCode, IconEntry, IconLayout, IconTable, IconTableError, WeatherIcon, MAX_ICONS};
use crate::sync::{text_value, TextValue, TEXT_CAPACITY};

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseErrorKind {
    /// Unknown or malformed section header
    InvalidSection,
    /// Line is not `key = value`
    InvalidLine,
    /// Key not valid in this section
    UnknownKey,
    /// Value has the wrong shape
    InvalidValue,
    /// Unknown icon layout preset
    UnknownPreset,
    /// Unknown icon name
    UnknownIcon,
    /// Text does not fit a field
    TextTooLong,
    /// More icon codes than a layout holds
    TooManyItems,
    /// Resulting icon layout is inconsistent
    Layout(IconTableError),
}

/// Parse error with its 1-based line number
///
/// Layout errors are only found once the whole file is read and carry the
/// number of the last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Icons,
    IconMap,
    Defaults,
}

/// Icon settings collected across the file
///
/// Assembled at the end so key order inside `[icons]` does not matter.
#[derive(Default)]
struct IconSettings {
    preset: Option<IconLayout>,
    placeholder: Option<IconCode>,
    error: Option<IconCode>,
    not_available: Option<Option<IconCode>>,
    map: Option<Vec<IconEntry, MAX_ICONS>>,
}

impl IconSettings {
    fn into_layout(self) -> IconLayout {
        let mut layout = self.preset.unwrap_or_default();
        if let Some(code) = self.placeholder {
            layout.placeholder = code;
        }
        if let Some(code) = self.error {
            layout.error = code;
        }
        if let Some(code) = self.not_available {
            layout.not_available = code;
        }
        if let Some(map) = self.map {
            layout.entries = map;
        }
        layout
    }
}

/// Parse configuration text into a [`WatchfaceConfig`]
///
/// Anything the file leaves out keeps its default. The icon layout is
/// validated before returning.
pub fn parse_config(input: &str) -> Result<WatchfaceConfig, ParseError> {
    let mut config = WatchfaceConfig::default();
    let mut icons = IconSettings::default();
    let mut section = Section::Root;
    let mut last_line = 0;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let at = |kind| ParseError { line: line_no, kind };

        if line.starts_with('[') {
            section = parse_section_header(line).map_err(at)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(at(ParseErrorKind::InvalidLine))?;

        match section {
            Section::Root => return Err(at(ParseErrorKind::UnknownKey)),
            Section::Icons => apply_icon_setting(&mut icons, key, value).map_err(at)?,
            Section::IconMap => {
                let code = parse_code(key).map_err(at)?;
                let icon = parse_icon(value).map_err(at)?;
                let map = icons.map.get_or_insert_with(Vec::new);
                map.push(IconEntry { code, icon })
                    .map_err(|_| at(ParseErrorKind::TooManyItems))?;
            }
            Section::Defaults => {
                let text = parse_text(value).map_err(at)?;
                match key {
                    "temperature" => config.defaults.temperature = text,
                    "conditions" => config.defaults.conditions = text,
                    "city" => config.defaults.city = text,
                    _ => return Err(at(ParseErrorKind::UnknownKey)),
                }
            }
        }
    }

    config.icons = icons.into_layout();
    IconTable::new(&config.icons).map_err(|e| ParseError {
        line: last_line,
        kind: ParseErrorKind::Layout(e),
    })?;

    Ok(config)
}

/// Parse a header line like `[icons.map]`
fn parse_section_header(line: &str) -> Result<Section, ParseErrorKind> {
    let name = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ParseErrorKind::InvalidSection)?;

    match name.trim() {
        "icons" => Ok(Section::Icons),
        "icons.map" => Ok(Section::IconMap),
        "defaults" => Ok(Section::Defaults),
        _ => Err(ParseErrorKind::InvalidSection),
    }
}

fn apply_icon_setting(icons: &mut IconSettings, key: &str, value: &str) -> Result<(), ParseErrorKind> {
    match key {
        "preset" => {
            let name = parse_string(value);
            icons.preset = Some(IconLayout::preset(name).ok_or(ParseErrorKind::UnknownPreset)?);
        }
        "placeholder" => icons.placeholder = Some(parse_code(value)?),
        "error" => icons.error = Some(parse_code(value)?),
        "not_available" => {
            icons.not_available = Some(match parse_string(value) {
                "none" => None,
                _ => Some(parse_code(value)?),
            });
        }
        _ => return Err(ParseErrorKind::UnknownKey),
    }
    Ok(())
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Strip a trailing comment unless the # sits inside a string
    let value = match value.find('#') {
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Strip surrounding quotes; bare strings are accepted as-is
fn parse_string(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}

fn parse_text(value: &str) -> Result<TextValue, ParseErrorKind> {
    let text = parse_string(value);
    if text.len() > TEXT_CAPACITY {
        return Err(ParseErrorKind::TextTooLong);
    }
    Ok(text_value(text))
}

fn parse_code(value: &str) -> Result<IconCode, ParseErrorKind> {
    let text = parse_string(value);
    if let Ok(code) = text.parse::<u8>() {
        return Ok(IconCode(code));
    }
    match text.as_bytes() {
        [byte] if byte.is_ascii_graphic() => Ok(IconCode(*byte)),
        _ => Err(ParseErrorKind::InvalidValue),
    }
}

fn parse_icon(value: &str) -> Result<WeatherIcon, ParseErrorKind> {
    WeatherIcon::from_name(parse_string(value)).ok_or(ParseErrorKind::UnknownIcon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), WatchfaceConfig::default());
        assert_eq!(
            parse_config("# nothing here\n\n").unwrap(),
            WatchfaceConfig::default()
        );
    }

    #[test]
    fn test_compact_preset_with_defaults() {
        let input = r#"
[icons]
preset = "compact"   # reduced set

[defaults]
temperature = "--"
conditions = "Loading"
city = Oslo
"#;
        let config = parse_config(input).unwrap();
        assert_eq!(config.icons, IconLayout::compact());
        assert_eq!(config.defaults.temperature.as_str(), "--");
        assert_eq!(config.defaults.conditions.as_str(), "Loading");
        assert_eq!(config.defaults.city.as_str(), "Oslo");
    }

    #[test]
    fn test_role_overrides_independent_of_order() {
        let input = r#"
[icons]
error = "a"
placeholder = "b"
preset = "extended"
not_available = none
"#;
        let config = parse_config(input).unwrap();
        assert_eq!(config.icons.error, IconCode(b'a'));
        assert_eq!(config.icons.placeholder, IconCode(b'b'));
        assert_eq!(config.icons.not_available, None);
        assert_eq!(config.icons.entries.len(), 22);
    }

    #[test]
    fn test_custom_map_replaces_preset() {
        let input = r#"
[icons]
placeholder = 1
error = 0
not_available = 3

[icons.map]
0 = "error"
1 = "refresh"
2 = "rain"
3 = "not_available"
"#;
        let config = parse_config(input).unwrap();
        assert_eq!(config.icons.entries.len(), 4);
        let table = IconTable::new(&config.icons).unwrap();
        assert_eq!(table.resolve(IconCode(2)), Some(WeatherIcon::Rain));
        assert_eq!(table.resolve(IconCode(4)), None);
    }

    #[test]
    fn test_hash_inside_string_kept() {
        let config = parse_config("[defaults]\ncity = \"Room #4\" # note").unwrap();
        assert_eq!(config.defaults.city.as_str(), "Room #4");
    }

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("\"a\""), Ok(IconCode(b'a')));
        assert_eq!(parse_code("v"), Ok(IconCode(b'v')));
        assert_eq!(parse_code("7"), Ok(IconCode(7)));
        assert_eq!(parse_code("200"), Ok(IconCode(200)));
        assert_eq!(parse_code("\"ab\""), Err(ParseErrorKind::InvalidValue));
        assert_eq!(parse_code("300"), Err(ParseErrorKind::InvalidValue));
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        assert_eq!(
            parse_config("[weather]"),
            Err(ParseError {
                line: 1,
                kind: ParseErrorKind::InvalidSection
            })
        );
        assert_eq!(
            parse_config("\n[icons]\npreset = \"tiny\""),
            Err(ParseError {
                line: 3,
                kind: ParseErrorKind::UnknownPreset
            })
        );
        assert_eq!(
            parse_config("[icons.map]\na = \"tornado\""),
            Err(ParseError {
                line: 2,
                kind: ParseErrorKind::UnknownIcon
            })
        );
        assert_eq!(
            parse_config("[defaults]\nwind = \"calm\""),
            Err(ParseError {
                line: 2,
                kind: ParseErrorKind::UnknownKey
            })
        );
        assert_eq!(
            parse_config("preset = \"compact\""),
            Err(ParseError {
                line: 1,
                kind: ParseErrorKind::UnknownKey
            })
        );
        assert_eq!(
            parse_config("[icons]\npreset"),
            Err(ParseError {
                line: 2,
                kind: ParseErrorKind::InvalidLine
            })
        );
    }

    #[test]
    fn test_text_too_long() {
        let input = "[defaults]\ncity = \"Llanfairpwllgwyngyllgogerychwyrndrobwll\"";
        assert_eq!(
            parse_config(input).unwrap_err().kind,
            ParseErrorKind::TextTooLong
        );
    }

    #[test]
    fn test_inconsistent_layout_rejected() {
        let input = "[icons]\npreset = \"compact\"\nerror = \"b\"\n";
        let err = parse_config(input).unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(
            err.kind,
            ParseErrorKind::Layout(IconTableError::UnmappedRole { .. })
        ));

        let input = "[icons.map]\na = refresh\nb = error\nd = rain\n";
        assert_eq!(
            parse_config(input).unwrap_err().kind,
            ParseErrorKind::Layout(IconTableError::MissingCode(IconCode(b'c')))
        );
    }
}
