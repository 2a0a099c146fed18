//! Icon loader that tracks resources without artwork

use defmt::*;

use stratus_core::icons::WeatherIcon;
use stratus_core::traits::{IconLoader, ResourceError};

/// Bitmaps that fit in RAM at once: the displayed one and its replacement
const MAX_LIVE: usize = 2;

/// Stand-in for a loaded icon bitmap
#[derive(Debug, PartialEq, Eq, Format)]
pub struct IconBitmap {
    pub id: u32,
    pub icon: WeatherIcon,
}

/// Hands out numbered bitmaps and counts the live ones
pub struct TraceIconLoader {
    next_id: u32,
    live: usize,
}

impl TraceIconLoader {
    pub const fn new() -> Self {
        Self { next_id: 0, live: 0 }
    }
}

impl IconLoader for TraceIconLoader {
    type Handle = IconBitmap;

    fn load(&mut self, icon: WeatherIcon) -> Result<IconBitmap, ResourceError> {
        if self.live >= MAX_LIVE {
            warn!("Icon {:?} refused: {} bitmaps live", icon, self.live);
            return Err(ResourceError::OutOfMemory);
        }
        self.next_id = self.next_id.wrapping_add(1);
        self.live += 1;
        debug!("Loaded {:?} as #{} ({} live)", icon, self.next_id, self.live);
        Ok(IconBitmap {
            id: self.next_id,
            icon,
        })
    }

    fn release(&mut self, handle: IconBitmap) {
        self.live = self.live.saturating_sub(1);
        debug!("Released #{} ({} live)", handle.id, self.live);
    }
}
