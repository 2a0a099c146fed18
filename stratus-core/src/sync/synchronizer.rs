//! The State Synchronizer

use stratus_protocol::{DictReader, Tuple};

use super::events::{DictionaryOutcome, SyncEvent, UpdateOutcome, UpdateValue};
use super::field::FieldKey;
use super::state::SyncState;
use crate::config::WatchfaceConfig;
use crate::icons::{IconCode, IconSlot, IconTable, IconTableError};
use crate::traits::{DisplayAdapter, IconLoader, ResourceError};

/// Errors from applying a single update
///
/// None of these change state or trigger the transport fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncError {
    /// Value type does not match the field
    TypeMismatch { field: FieldKey },
    /// Integer does not fit an icon code
    InvalidIconValue(i64),
    /// Code not in the icon table
    IconOutOfRange(IconCode),
    /// Loader could not provide the icon
    IconLoad(ResourceError),
    /// Icon layout failed validation
    Layout(IconTableError),
}

impl From<ResourceError> for SyncError {
    fn from(e: ResourceError) -> Self {
        SyncError::IconLoad(e)
    }
}

impl From<IconTableError> for SyncError {
    fn from(e: IconTableError) -> Self {
        SyncError::Layout(e)
    }
}

/// Applies inbound updates to the tracked fields
///
/// Owns the display adapter, the icon loader and the single live icon
/// resource. Every method runs to completion without yielding and ends
/// with one [`DisplayAdapter::commit`], so no caller ever sees a
/// half-applied update.
pub struct StateSynchronizer<A, L: IconLoader> {
    state: SyncState,
    table: IconTable,
    icon: IconSlot<L::Handle>,
    adapter: A,
    loader: L,
    /// Notifications sent since the last commit
    uncommitted: bool,
}

impl<A, L> StateSynchronizer<A, L>
where
    A: DisplayAdapter<L::Handle>,
    L: IconLoader,
{
    /// Validate the icon layout, load the placeholder icon and publish the
    /// initial values of all four fields
    pub fn new(config: &WatchfaceConfig, adapter: A, mut loader: L) -> Result<Self, SyncError> {
        let table = IconTable::new(&config.icons)?;
        let placeholder = table.placeholder();
        let icon = table
            .resolve(placeholder)
            .ok_or(SyncError::IconOutOfRange(placeholder))?;
        let icon = IconSlot::load(&mut loader, placeholder, icon)?;

        let mut sync = Self {
            state: SyncState::new(&config.defaults, placeholder),
            table,
            icon,
            adapter,
            loader,
            uncommitted: false,
        };
        sync.publish_all();
        Ok(sync)
    }

    /// Send every field to the adapter
    pub fn publish_all(&mut self) {
        for field in FieldKey::ALL {
            self.notify(field);
        }
        self.commit();
    }

    /// Send the current value of one field to the adapter again
    ///
    /// Used when the adapter could not show the last notification.
    pub fn republish(&mut self, field: FieldKey) {
        self.notify(field);
        self.commit();
    }

    /// Apply one key/value update
    ///
    /// Unknown keys are ignored without notifying the adapter. A value of
    /// the wrong type, or an icon code outside the table, is refused and
    /// leaves state untouched.
    pub fn apply_update(&mut self, key: u32, value: UpdateValue) -> Result<UpdateOutcome, SyncError> {
        let outcome = self.update(key, value);
        self.commit();
        outcome
    }

    /// Apply a decoded tuple
    pub fn apply_tuple(&mut self, tuple: &Tuple<'_>) -> Result<UpdateOutcome, SyncError> {
        self.apply_update(tuple.key, tuple.value.into())
    }

    /// Apply every tuple of a dictionary in order, as one update
    ///
    /// Tuples before a decode error stay applied; the decode error itself
    /// triggers the transport fallback.
    pub fn apply_dictionary(&mut self, reader: DictReader<'_>) -> DictionaryOutcome {
        let mut outcome = DictionaryOutcome::default();
        for item in reader {
            match item {
                Ok(tuple) => match self.update(tuple.key, tuple.value.into()) {
                    Ok(UpdateOutcome::Applied(_)) => outcome.applied += 1,
                    Ok(UpdateOutcome::Ignored) => outcome.ignored += 1,
                    Err(_) => outcome.rejected += 1,
                },
                Err(e) => {
                    outcome.decode_error = Some(e);
                    // Icon load failure is already reflected in state
                    let _ = self.enter_error();
                }
            }
        }
        self.commit();
        outcome
    }

    /// Apply the payload of a push message
    ///
    /// A payload whose dictionary header does not decode applies nothing
    /// and triggers the transport fallback.
    pub fn apply_payload(&mut self, payload: &[u8]) -> DictionaryOutcome {
        match DictReader::new(payload) {
            Ok(reader) => self.apply_dictionary(reader),
            Err(e) => {
                let _ = self.enter_error();
                self.commit();
                DictionaryOutcome {
                    decode_error: Some(e),
                    ..DictionaryOutcome::default()
                }
            }
        }
    }

    /// Enter the error fallback: CONDITIONS "Error", ICON the error code
    ///
    /// The code is not classified. Applying this repeatedly only repeats
    /// the notifications. If the error icon cannot be loaded the previous
    /// icon stays displayed and in state, and the load error is returned.
    pub fn apply_transport_error(&mut self, _code: u32) -> Result<(), SyncError> {
        let result = self.enter_error();
        self.commit();
        result
    }

    /// Show the icon for `code`, replacing the current icon resource
    ///
    /// Exactly one icon resource is live before and after the call.
    pub fn resolve_icon(&mut self, code: IconCode) -> Result<&L::Handle, SyncError> {
        let result = self.swap_icon(code);
        self.commit();
        result?;
        Ok(self.icon.handle())
    }

    /// Dispatch an event
    pub fn handle(&mut self, event: SyncEvent) -> Result<UpdateOutcome, SyncError> {
        match event {
            SyncEvent::Update { key, value } => self.apply_update(key, value),
            SyncEvent::TransportFailure { code } => {
                self.apply_transport_error(code)?;
                Ok(UpdateOutcome::Applied(FieldKey::Conditions))
            }
        }
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    pub fn table(&self) -> &IconTable {
        &self.table
    }

    /// Handle of the live icon resource
    pub fn icon_handle(&self) -> &L::Handle {
        self.icon.handle()
    }

    /// Whether the error fallback is displayed
    pub fn shows_error(&self) -> bool {
        self.state.shows_error(self.table.error())
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Release the icon resource and hand back the collaborators
    pub fn shutdown(mut self) -> (A, L) {
        self.icon.release(&mut self.loader);
        (self.adapter, self.loader)
    }

    fn update(&mut self, key: u32, value: UpdateValue) -> Result<UpdateOutcome, SyncError> {
        let Some(field) = FieldKey::from_key(key) else {
            return Ok(UpdateOutcome::Ignored);
        };

        match (field, value) {
            (FieldKey::Icon, value) => {
                let raw = value
                    .as_integer()
                    .ok_or(SyncError::TypeMismatch { field })?;
                let code = u8::try_from(raw).map_err(|_| SyncError::InvalidIconValue(raw))?;
                self.swap_icon(IconCode(code))?;
            }
            (field, UpdateValue::Text(text)) => {
                self.state.set_text(field, text);
                self.notify(field);
            }
            (field, _) => return Err(SyncError::TypeMismatch { field }),
        }

        Ok(UpdateOutcome::Applied(field))
    }

    fn enter_error(&mut self) -> Result<(), SyncError> {
        self.state.set_error_text();
        self.notify(FieldKey::Conditions);
        self.swap_icon(self.table.error())
    }

    fn swap_icon(&mut self, code: IconCode) -> Result<(), SyncError> {
        let icon = self
            .table
            .resolve(code)
            .ok_or(SyncError::IconOutOfRange(code))?;
        self.icon.replace(&mut self.loader, code, icon)?;
        self.state.set_icon(code);
        self.notify(FieldKey::Icon);
        Ok(())
    }

    fn notify(&mut self, field: FieldKey) {
        match self.state.text(field) {
            Some(text) => self.adapter.show_text(field, text),
            None => self.adapter.show_icon(self.state.icon(), self.icon.handle()),
        }
        self.uncommitted = true;
    }

    fn commit(&mut self) {
        if core::mem::take(&mut self.uncommitted) {
            self.adapter.commit();
        }
    }
}

#[cfg(test)]
mod tests {
    use heapless::{String, Vec};

    use super::*;
    use crate::icons::{IconLayout, WeatherIcon};
    use crate::sync::{DEFAULT_CITY, DEFAULT_CONDITIONS, DEFAULT_TEMPERATURE, ERROR_TEXT};
    use stratus_protocol::DictWriter;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Shown {
        Text(FieldKey, String<32>),
        Icon(IconCode, WeatherIcon),
    }

    #[derive(Default)]
    struct RecordingAdapter {
        shown: Vec<Shown, 64>,
        /// Number of notifications in each commit
        commits: Vec<usize, 16>,
        since_commit: usize,
    }

    impl DisplayAdapter<TestIcon> for RecordingAdapter {
        fn show_text(&mut self, field: FieldKey, text: &str) {
            self.shown
                .push(Shown::Text(field, String::try_from(text).unwrap()))
                .unwrap();
            self.since_commit += 1;
        }

        fn show_icon(&mut self, code: IconCode, icon: &TestIcon) {
            self.shown.push(Shown::Icon(code, icon.icon)).unwrap();
            self.since_commit += 1;
        }

        fn commit(&mut self) {
            self.commits.push(self.since_commit).unwrap();
            self.since_commit = 0;
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    struct TestIcon {
        icon: WeatherIcon,
    }

    #[derive(Default)]
    struct CountingLoader {
        live: usize,
        loads: usize,
        fail_next: Option<ResourceError>,
    }

    impl IconLoader for CountingLoader {
        type Handle = TestIcon;

        fn load(&mut self, icon: WeatherIcon) -> Result<TestIcon, ResourceError> {
            if let Some(e) = self.fail_next.take() {
                return Err(e);
            }
            self.live += 1;
            self.loads += 1;
            Ok(TestIcon { icon })
        }

        fn release(&mut self, _handle: TestIcon) {
            self.live -= 1;
        }
    }

    fn synchronizer() -> StateSynchronizer<RecordingAdapter, CountingLoader> {
        let mut sync = StateSynchronizer::new(
            &WatchfaceConfig::default(),
            RecordingAdapter::default(),
            CountingLoader::default(),
        )
        .unwrap();
        sync.adapter_mut().shown.clear();
        sync.adapter_mut().commits.clear();
        sync
    }

    fn text(field: FieldKey, value: &str) -> Shown {
        Shown::Text(field, String::try_from(value).unwrap())
    }

    #[test]
    fn test_initial_state_and_publish() {
        let sync = StateSynchronizer::new(
            &WatchfaceConfig::default(),
            RecordingAdapter::default(),
            CountingLoader::default(),
        )
        .unwrap();

        let state = sync.state();
        assert_eq!(state.temperature(), DEFAULT_TEMPERATURE);
        assert_eq!(state.conditions(), DEFAULT_CONDITIONS);
        assert_eq!(state.city(), DEFAULT_CITY);
        assert_eq!(state.icon(), IconCode(b'a'));
        assert_eq!(sync.loader().live, 1);
        assert_eq!(sync.icon_handle().icon, WeatherIcon::Refresh);

        assert_eq!(
            sync.adapter().shown.as_slice(),
            &[
                text(FieldKey::Temperature, DEFAULT_TEMPERATURE),
                text(FieldKey::Conditions, DEFAULT_CONDITIONS),
                text(FieldKey::City, DEFAULT_CITY),
                Shown::Icon(IconCode(b'a'), WeatherIcon::Refresh),
            ]
        );
    }

    #[test]
    fn test_text_update_changes_one_field() {
        let mut sync = synchronizer();
        let before = sync.state().clone();

        let outcome = sync.apply_update(0, UpdateValue::text("68°F")).unwrap();
        assert_eq!(outcome, UpdateOutcome::Applied(FieldKey::Temperature));
        assert_eq!(sync.state().temperature(), "68°F");
        assert_eq!(sync.state().conditions(), before.conditions());
        assert_eq!(sync.state().city(), before.city());
        assert_eq!(sync.state().icon(), before.icon());
        assert_eq!(
            sync.adapter().shown.as_slice(),
            &[text(FieldKey::Temperature, "68°F")]
        );
    }

    #[test]
    fn test_icon_update() {
        let mut sync = synchronizer();
        let outcome = sync.apply_update(3, UpdateValue::Uint(b'm' as u32)).unwrap();
        assert_eq!(outcome, UpdateOutcome::Applied(FieldKey::Icon));
        assert_eq!(sync.state().icon(), IconCode(b'm'));
        assert_eq!(sync.icon_handle().icon, WeatherIcon::LightRain);
        assert_eq!(sync.loader().live, 1);
        assert_eq!(
            sync.adapter().shown.as_slice(),
            &[Shown::Icon(IconCode(b'm'), WeatherIcon::LightRain)]
        );
    }

    #[test]
    fn test_signed_icon_value_accepted() {
        let mut sync = synchronizer();
        sync.apply_update(3, UpdateValue::Int(b'c' as i32)).unwrap();
        assert_eq!(sync.icon_handle().icon, WeatherIcon::ClearDay);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut sync = synchronizer();
        let before = sync.state().clone();

        assert_eq!(
            sync.apply_update(99, UpdateValue::text("hello")),
            Ok(UpdateOutcome::Ignored)
        );
        assert_eq!(
            sync.apply_update(4, UpdateValue::Int(0)),
            Ok(UpdateOutcome::Ignored)
        );
        assert_eq!(sync.state(), &before);
        assert!(sync.adapter().shown.is_empty());
    }

    #[test]
    fn test_type_mismatch_refused() {
        let mut sync = synchronizer();
        let before = sync.state().clone();

        assert_eq!(
            sync.apply_update(0, UpdateValue::Int(68)),
            Err(SyncError::TypeMismatch {
                field: FieldKey::Temperature
            })
        );
        assert_eq!(
            sync.apply_update(3, UpdateValue::text("c")),
            Err(SyncError::TypeMismatch {
                field: FieldKey::Icon
            })
        );
        assert_eq!(
            sync.apply_update(2, UpdateValue::Bytes(4)),
            Err(SyncError::TypeMismatch {
                field: FieldKey::City
            })
        );
        assert_eq!(sync.state(), &before);
        assert!(sync.adapter().shown.is_empty());
        assert!(!sync.shows_error());
    }

    #[test]
    fn test_icon_out_of_range_refused() {
        let mut sync = synchronizer();
        let before = sync.state().clone();

        assert_eq!(
            sync.apply_update(3, UpdateValue::Uint(b'z' as u32)),
            Err(SyncError::IconOutOfRange(IconCode(b'z')))
        );
        assert_eq!(
            sync.apply_update(3, UpdateValue::Uint(1000)),
            Err(SyncError::InvalidIconValue(1000))
        );
        assert_eq!(
            sync.apply_update(3, UpdateValue::Int(-1)),
            Err(SyncError::InvalidIconValue(-1))
        );
        assert_eq!(sync.state(), &before);
        assert_eq!(sync.loader().live, 1);
        assert!(sync.adapter().shown.is_empty());
    }

    #[test]
    fn test_transport_error_fallback() {
        let mut sync = synchronizer();
        sync.apply_update(1, UpdateValue::text("Sunny")).unwrap();
        sync.apply_update(3, UpdateValue::Uint(b'c' as u32)).unwrap();
        sync.adapter_mut().shown.clear();

        sync.apply_transport_error(1).unwrap();
        assert_eq!(sync.state().conditions(), ERROR_TEXT);
        assert_eq!(sync.state().icon(), IconCode(b'b'));
        assert_eq!(sync.icon_handle().icon, WeatherIcon::Error);
        assert!(sync.shows_error());
        assert_eq!(
            sync.adapter().shown.as_slice(),
            &[
                text(FieldKey::Conditions, ERROR_TEXT),
                Shown::Icon(IconCode(b'b'), WeatherIcon::Error),
            ]
        );
    }

    #[test]
    fn test_transport_error_idempotent() {
        let mut sync = synchronizer();
        sync.apply_transport_error(7).unwrap();
        let after_first = sync.state().clone();
        let loads = sync.loader().loads;

        sync.apply_transport_error(42).unwrap();
        assert_eq!(sync.state(), &after_first);
        assert_eq!(sync.loader().loads, loads);
        assert_eq!(sync.loader().live, 1);
    }

    #[test]
    fn test_recover_after_error() {
        let mut sync = synchronizer();
        sync.apply_transport_error(1).unwrap();
        sync.apply_update(1, UpdateValue::text("Cloudy")).unwrap();
        assert!(!sync.shows_error());
        sync.apply_update(3, UpdateValue::Uint(b'k' as u32)).unwrap();
        assert_eq!(sync.icon_handle().icon, WeatherIcon::Cloudy);
    }

    #[test]
    fn test_failed_icon_load_keeps_previous() {
        let mut sync = synchronizer();
        sync.loader.fail_next = Some(ResourceError::OutOfMemory);

        assert_eq!(
            sync.apply_update(3, UpdateValue::Uint(b'n' as u32)),
            Err(SyncError::IconLoad(ResourceError::OutOfMemory))
        );
        assert_eq!(sync.state().icon(), IconCode(b'a'));
        assert_eq!(sync.icon_handle().icon, WeatherIcon::Refresh);
        assert_eq!(sync.loader().live, 1);
    }

    #[test]
    fn test_error_icon_load_failure_still_sets_conditions() {
        let mut sync = synchronizer();
        sync.loader.fail_next = Some(ResourceError::NotFound);

        assert_eq!(
            sync.apply_transport_error(1),
            Err(SyncError::IconLoad(ResourceError::NotFound))
        );
        assert_eq!(sync.state().conditions(), ERROR_TEXT);
        assert_eq!(sync.state().icon(), IconCode(b'a'));
        assert!(!sync.shows_error());
    }

    #[test]
    fn test_apply_dictionary() {
        let mut buf = [0u8; 128];
        let mut writer = DictWriter::new(&mut buf).unwrap();
        writer.write_cstring(0, "12°C").unwrap();
        writer.write_cstring(1, "Fog").unwrap();
        writer.write_cstring(2, "London").unwrap();
        writer.write_uint(3, b'e' as u32).unwrap();
        writer.write_int(77, 5).unwrap();
        writer.write_uint(1, 3).unwrap();
        let len = writer.finish();

        let mut sync = synchronizer();
        let outcome = sync.apply_dictionary(DictReader::new(&buf[..len]).unwrap());
        assert_eq!(
            outcome,
            DictionaryOutcome {
                applied: 4,
                ignored: 1,
                rejected: 1,
                decode_error: None,
            }
        );
        assert!(outcome.is_complete());
        assert_eq!(sync.state().temperature(), "12°C");
        assert_eq!(sync.state().conditions(), "Fog");
        assert_eq!(sync.state().city(), "London");
        assert_eq!(sync.icon_handle().icon, WeatherIcon::Fog);
    }

    #[test]
    fn test_dictionary_is_one_commit() {
        let mut buf = [0u8; 128];
        let mut writer = DictWriter::new(&mut buf).unwrap();
        writer.write_cstring(0, "5°C").unwrap();
        writer.write_cstring(1, "Snow").unwrap();
        writer.write_cstring(2, "Oslo").unwrap();
        writer.write_uint(3, b'o' as u32).unwrap();
        let len = writer.finish();

        let mut sync = synchronizer();
        let outcome = sync.apply_payload(&buf[..len]);
        assert!(outcome.is_complete());
        assert_eq!(outcome.applied, 4);
        assert_eq!(sync.adapter().commits.as_slice(), &[4]);
        assert_eq!(
            sync.adapter().shown.as_slice(),
            &[
                text(FieldKey::Temperature, "5°C"),
                text(FieldKey::Conditions, "Snow"),
                text(FieldKey::City, "Oslo"),
                Shown::Icon(IconCode(b'o'), WeatherIcon::Snow),
            ]
        );
    }

    #[test]
    fn test_single_updates_commit_separately() {
        let mut sync = synchronizer();
        sync.apply_update(0, UpdateValue::text("1°C")).unwrap();
        sync.apply_update(99, UpdateValue::Uint(1)).unwrap();
        let _ = sync.apply_update(0, UpdateValue::Int(1));
        sync.apply_transport_error(2).unwrap();
        assert_eq!(sync.adapter().commits.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_bad_payload_header_triggers_fallback() {
        let mut sync = synchronizer();
        let before = sync.state().clone();

        let outcome = sync.apply_payload(&[200]);
        assert_eq!(
            outcome.decode_error,
            Some(stratus_protocol::DictError::TooManyTuples)
        );
        assert_eq!(outcome.applied, 0);
        assert!(sync.shows_error());
        assert_eq!(sync.state().city(), before.city());
        assert_eq!(sync.adapter().commits.as_slice(), &[2]);
    }

    #[test]
    fn test_republish_icon() {
        let mut sync = synchronizer();
        sync.apply_update(3, UpdateValue::Uint(b'c' as u32)).unwrap();
        let loads = sync.loader().loads;
        sync.adapter_mut().shown.clear();

        sync.republish(FieldKey::Icon);
        assert_eq!(
            sync.adapter().shown.as_slice(),
            &[Shown::Icon(IconCode(b'c'), WeatherIcon::ClearDay)]
        );
        assert_eq!(sync.loader().loads, loads);
        assert_eq!(sync.loader().live, 1);
    }

    #[test]
    fn test_truncated_dictionary_triggers_fallback() {
        let mut buf = [0u8; 64];
        let mut writer = DictWriter::new(&mut buf).unwrap();
        writer.write_cstring(2, "Paris").unwrap();
        writer.write_cstring(0, "20°C").unwrap();
        let len = writer.finish();

        let mut sync = synchronizer();
        // Cut the second tuple short
        let outcome = sync.apply_dictionary(DictReader::new(&buf[..len - 2]).unwrap());
        assert_eq!(outcome.applied, 1);
        assert_eq!(outcome.decode_error, Some(stratus_protocol::DictError::Truncated));
        assert_eq!(sync.state().city(), "Paris");
        assert_eq!(sync.state().temperature(), DEFAULT_TEMPERATURE);
        assert!(sync.shows_error());
    }

    #[test]
    fn test_handle_events() {
        let mut sync = synchronizer();
        assert_eq!(
            sync.handle(SyncEvent::Update {
                key: 2,
                value: UpdateValue::text("Berlin"),
            }),
            Ok(UpdateOutcome::Applied(FieldKey::City))
        );
        assert_eq!(sync.state().city(), "Berlin");

        sync.handle(SyncEvent::TransportFailure { code: 3 }).unwrap();
        assert!(sync.shows_error());
        assert_eq!(sync.state().city(), "Berlin");
    }

    #[test]
    fn test_compact_layout() {
        let config = WatchfaceConfig {
            icons: IconLayout::compact(),
            ..WatchfaceConfig::default()
        };
        let mut sync =
            StateSynchronizer::new(&config, RecordingAdapter::default(), CountingLoader::default())
                .unwrap();
        assert_eq!(sync.state().icon(), IconCode(1));
        assert_eq!(sync.icon_handle().icon, WeatherIcon::Refresh);

        sync.apply_transport_error(0).unwrap();
        assert_eq!(sync.state().icon(), IconCode(0));
        assert_eq!(sync.icon_handle().icon, WeatherIcon::Error);

        assert_eq!(
            sync.apply_update(3, UpdateValue::Uint(b'c' as u32)),
            Err(SyncError::IconOutOfRange(IconCode(b'c')))
        );
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let config = WatchfaceConfig {
            icons: IconLayout::new(IconCode(0), IconCode(1)),
            ..WatchfaceConfig::default()
        };
        let result =
            StateSynchronizer::new(&config, RecordingAdapter::default(), CountingLoader::default());
        assert!(matches!(result, Err(SyncError::Layout(IconTableError::Empty))));
    }

    #[test]
    fn test_placeholder_load_failure() {
        let loader = CountingLoader {
            fail_next: Some(ResourceError::Corrupt),
            ..CountingLoader::default()
        };
        let result =
            StateSynchronizer::new(&WatchfaceConfig::default(), RecordingAdapter::default(), loader);
        assert!(matches!(
            result,
            Err(SyncError::IconLoad(ResourceError::Corrupt))
        ));
    }

    #[test]
    fn test_shutdown_releases_icon() {
        let mut sync = synchronizer();
        sync.apply_update(3, UpdateValue::Uint(b'd' as u32)).unwrap();
        let (_adapter, loader) = sync.shutdown();
        assert_eq!(loader.live, 0);
    }
}
