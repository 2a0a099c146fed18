//! Display backend trait
//!
//! Defines the interface for different display types.

use stratus_core::sync::FieldKey;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Display not initialized
    NotInitialized,
    /// Bitmap could not be drawn
    InvalidBitmap,
    /// Buffer overflow
    BufferOverflow,
}

/// Screen regions of the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Widget {
    Temperature,
    Conditions,
    City,
    Icon,
}

impl Widget {
    pub const ALL: [Widget; 4] = [
        Widget::Temperature,
        Widget::Conditions,
        Widget::City,
        Widget::Icon,
    ];

    /// Widget that displays a field
    pub const fn for_field(field: FieldKey) -> Self {
        match field {
            FieldKey::Temperature => Widget::Temperature,
            FieldKey::Conditions => Widget::Conditions,
            FieldKey::City => Widget::City,
            FieldKey::Icon => Widget::Icon,
        }
    }
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering widgets.
/// Implementations own fonts, layout and the actual pixels.
pub trait DisplayBackend {
    /// Bitmap type the backend can draw, as produced by the icon loader
    type Bitmap;

    /// Replace the text of a widget
    fn draw_text(&mut self, widget: Widget, text: &str) -> Result<(), DisplayError>;

    /// Show a bitmap in a widget
    fn draw_bitmap(&mut self, widget: Widget, bitmap: &Self::Bitmap) -> Result<(), DisplayError>;

    /// Blank a widget
    fn clear_widget(&mut self, widget: Widget) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
