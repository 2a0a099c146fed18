//! Display backend that logs widget updates

use defmt::*;

use stratus_display::{DisplayBackend, DisplayError, Widget};

use super::icons::IconBitmap;

/// Logs every draw instead of driving a panel
pub struct TraceBackend {
    frames: u32,
}

impl TraceBackend {
    pub const fn new() -> Self {
        Self { frames: 0 }
    }
}

impl DisplayBackend for TraceBackend {
    type Bitmap = IconBitmap;

    fn draw_text(&mut self, widget: Widget, text: &str) -> Result<(), DisplayError> {
        info!("[{:?}] {}", widget, text);
        Ok(())
    }

    fn draw_bitmap(&mut self, widget: Widget, bitmap: &IconBitmap) -> Result<(), DisplayError> {
        info!("[{:?}] icon {:?} (#{})", widget, bitmap.icon, bitmap.id);
        Ok(())
    }

    fn clear_widget(&mut self, widget: Widget) -> Result<(), DisplayError> {
        debug!("[{:?}] cleared", widget);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.frames = self.frames.wrapping_add(1);
        trace!("Frame {} flushed", self.frames);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }
}
