//! Display adapter trait

use crate::icons::IconCode;
use crate::sync::FieldKey;

/// Receives per-field change notifications
///
/// The adapter owns every widget and does all rendering. It is infallible
/// from the synchronizer's point of view: rendering problems stay inside
/// the adapter.
pub trait DisplayAdapter<H> {
    /// A text field changed
    ///
    /// `field` is never [`FieldKey::Icon`].
    fn show_text(&mut self, field: FieldKey, text: &str);

    /// The icon changed
    fn show_icon(&mut self, code: IconCode, icon: &H);

    /// End of one update
    ///
    /// Called once after every notification belonging to the same inbound
    /// update, so a whole dictionary becomes visible at once.
    fn commit(&mut self) {}
}

impl<H, T: DisplayAdapter<H> + ?Sized> DisplayAdapter<H> for &mut T {
    fn show_text(&mut self, field: FieldKey, text: &str) {
        (**self).show_text(field, text);
    }

    fn show_icon(&mut self, code: IconCode, icon: &H) {
        (**self).show_icon(code, icon);
    }

    fn commit(&mut self) {
        (**self).commit();
    }
}
