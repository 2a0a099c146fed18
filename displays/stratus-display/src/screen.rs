//! Watch-face widget set
//!
//! `WeatherScreen` owns one widget per field and is the only place they are
//! reachable from. It is built once at startup and torn down explicitly.

use stratus_core::icons::IconCode;
use stratus_core::sync::{text_value, FieldKey, TextValue};
use stratus_core::traits::DisplayAdapter;

use crate::backend::{DisplayBackend, DisplayError, Widget};

/// Cached content of a text widget
#[derive(Debug, Clone)]
pub struct TextWidget {
    widget: Widget,
    text: TextValue,
    /// Cached text not yet on the display
    dirty: bool,
}

impl TextWidget {
    fn new(widget: Widget) -> Self {
        Self {
            widget,
            text: TextValue::new(),
            dirty: false,
        }
    }

    pub fn widget(&self) -> Widget {
        self.widget
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Display adapter for the weather face
///
/// Text is cached per widget, so a repeated notification with unchanged text
/// does not touch the backend. Drawing goes to the backend as notifications
/// arrive; the flush happens on [`DisplayAdapter::commit`], once per update.
/// While the backend is not ready, text is only cached and drawn by the next
/// [`WeatherScreen::redraw`]. An icon that could not be drawn is flagged by
/// [`WeatherScreen::icon_pending`] until it is sent again.
pub struct WeatherScreen<B> {
    backend: B,
    temperature: TextWidget,
    conditions: TextWidget,
    city: TextWidget,
    icon: Option<IconCode>,
    icon_pending: bool,
    /// Drawn content not yet flushed
    unflushed: bool,
    render_errors: u32,
    last_error: Option<DisplayError>,
}

impl<B: DisplayBackend> WeatherScreen<B> {
    /// Create the widget set on top of a backend
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            temperature: TextWidget::new(Widget::Temperature),
            conditions: TextWidget::new(Widget::Conditions),
            city: TextWidget::new(Widget::City),
            icon: None,
            icon_pending: false,
            unflushed: false,
            render_errors: 0,
            last_error: None,
        }
    }

    /// Text widget for a field, `None` for the icon
    pub fn text_widget(&self, field: FieldKey) -> Option<&TextWidget> {
        match field {
            FieldKey::Temperature => Some(&self.temperature),
            FieldKey::Conditions => Some(&self.conditions),
            FieldKey::City => Some(&self.city),
            FieldKey::Icon => None,
        }
    }

    /// Code of the icon last drawn
    pub fn icon_code(&self) -> Option<IconCode> {
        self.icon
    }

    /// Whether the last icon notification was not drawn
    ///
    /// The screen does not keep the bitmap; the icon has to be sent again.
    pub fn icon_pending(&self) -> bool {
        self.icon_pending
    }

    /// Number of backend errors absorbed so far
    pub fn render_errors(&self) -> u32 {
        self.render_errors
    }

    pub fn last_error(&self) -> Option<DisplayError> {
        self.last_error
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Draw every text widget whose cached text is not on the display
    pub fn redraw(&mut self) {
        if !self.backend.is_ready() {
            return;
        }
        self.draw_dirty_text();
        self.flush();
    }

    /// Blank every widget and hand back the backend
    pub fn teardown(mut self) -> B {
        for widget in Widget::ALL {
            let result = self.backend.clear_widget(widget);
            self.record(result);
        }
        let result = self.backend.flush();
        self.record(result);
        self.backend
    }

    fn text_widget_mut(&mut self, field: FieldKey) -> Option<&mut TextWidget> {
        match field {
            FieldKey::Temperature => Some(&mut self.temperature),
            FieldKey::Conditions => Some(&mut self.conditions),
            FieldKey::City => Some(&mut self.city),
            FieldKey::Icon => None,
        }
    }

    fn draw_dirty_text(&mut self) {
        for widget in [&mut self.temperature, &mut self.conditions, &mut self.city] {
            if !widget.dirty {
                continue;
            }
            match self.backend.draw_text(widget.widget, &widget.text) {
                Ok(()) => {
                    widget.dirty = false;
                    self.unflushed = true;
                }
                Err(e) => {
                    self.render_errors = self.render_errors.saturating_add(1);
                    self.last_error = Some(e);
                }
            }
        }
    }

    fn flush(&mut self) {
        if !self.unflushed {
            return;
        }
        let result = self.backend.flush();
        if self.record(result) {
            self.unflushed = false;
        }
    }

    fn record(&mut self, result: Result<(), DisplayError>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                self.render_errors = self.render_errors.saturating_add(1);
                self.last_error = Some(e);
                false
            }
        }
    }
}

impl<B: DisplayBackend> DisplayAdapter<B::Bitmap> for WeatherScreen<B> {
    fn show_text(&mut self, field: FieldKey, text: &str) {
        let Some(widget) = self.text_widget_mut(field) else {
            return;
        };
        if widget.text == text && !widget.dirty {
            return;
        }
        widget.text = text_value(text);
        widget.dirty = true;
        if self.backend.is_ready() {
            self.draw_dirty_text();
        }
    }

    fn show_icon(&mut self, code: IconCode, icon: &B::Bitmap) {
        self.icon_pending = true;
        if !self.backend.is_ready() {
            self.record(Err(DisplayError::NotInitialized));
            return;
        }
        let result = self.backend.draw_bitmap(Widget::Icon, icon);
        if self.record(result) {
            self.icon = Some(code);
            self.icon_pending = false;
            self.unflushed = true;
        }
    }

    fn commit(&mut self) {
        if self.backend.is_ready() {
            self.flush();
        }
    }
}
