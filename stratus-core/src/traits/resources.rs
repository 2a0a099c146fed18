//! Icon resource loading

use crate::icons::WeatherIcon;

/// Errors from loading icon artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceError {
    /// No artwork for this icon
    NotFound,
    /// No room for another bitmap
    OutOfMemory,
    /// Artwork present but unreadable
    Corrupt,
}

/// Loads and releases icon resources
///
/// Every handle returned by [`IconLoader::load`] must eventually be passed
/// back to [`IconLoader::release`].
pub trait IconLoader {
    /// Opaque resource handle
    type Handle;

    fn load(&mut self, icon: WeatherIcon) -> Result<Self::Handle, ResourceError>;

    fn release(&mut self, handle: Self::Handle);
}
