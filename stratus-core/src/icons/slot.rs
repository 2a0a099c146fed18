//! Exclusive owner of the displayed icon resource

use core::mem;

use super::{IconCode, WeatherIcon};
use crate::traits::{IconLoader, ResourceError};

/// The one live icon resource and the code it was loaded for
///
/// A slot always holds a handle, so exactly one icon resource is live for
/// as long as the slot exists. Dropping a slot without [`IconSlot::release`]
/// leaks the resource on loaders that track them.
#[derive(Debug)]
pub struct IconSlot<H> {
    code: IconCode,
    handle: H,
}

impl<H> IconSlot<H> {
    /// Load the first icon
    pub fn load<L>(loader: &mut L, code: IconCode, icon: WeatherIcon) -> Result<Self, ResourceError>
    where
        L: IconLoader<Handle = H>,
    {
        let handle = loader.load(icon)?;
        Ok(Self { code, handle })
    }

    /// Swap in the icon for `code`
    ///
    /// The new resource is acquired before the old one is released. On
    /// failure the slot is untouched and still owns the previous handle.
    /// Replacing with the current code keeps the loaded handle.
    pub fn replace<L>(
        &mut self,
        loader: &mut L,
        code: IconCode,
        icon: WeatherIcon,
    ) -> Result<(), ResourceError>
    where
        L: IconLoader<Handle = H>,
    {
        if code == self.code {
            return Ok(());
        }
        let handle = loader.load(icon)?;
        let old = mem::replace(&mut self.handle, handle);
        self.code = code;
        loader.release(old);
        Ok(())
    }

    pub fn code(&self) -> IconCode {
        self.code
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Give the resource back to the loader
    pub fn release<L>(self, loader: &mut L)
    where
        L: IconLoader<Handle = H>,
    {
        loader.release(self.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingLoader {
        live: usize,
        next_id: u32,
        fail_next: bool,
    }

    impl IconLoader for CountingLoader {
        type Handle = (u32, WeatherIcon);

        fn load(&mut self, icon: WeatherIcon) -> Result<Self::Handle, ResourceError> {
            if self.fail_next {
                self.fail_next = false;
                return Err(ResourceError::OutOfMemory);
            }
            self.live += 1;
            self.next_id += 1;
            Ok((self.next_id, icon))
        }

        fn release(&mut self, _handle: Self::Handle) {
            self.live -= 1;
        }
    }

    #[test]
    fn test_replace_keeps_one_live() {
        let mut loader = CountingLoader::default();
        let mut slot = IconSlot::load(&mut loader, IconCode(1), WeatherIcon::Refresh).unwrap();
        assert_eq!(loader.live, 1);

        slot.replace(&mut loader, IconCode(2), WeatherIcon::Rain).unwrap();
        assert_eq!(loader.live, 1);
        assert_eq!(slot.code(), IconCode(2));
        assert_eq!(slot.handle().1, WeatherIcon::Rain);

        slot.release(&mut loader);
        assert_eq!(loader.live, 0);
    }

    #[test]
    fn test_same_code_keeps_handle() {
        let mut loader = CountingLoader::default();
        let mut slot = IconSlot::load(&mut loader, IconCode(1), WeatherIcon::Refresh).unwrap();
        let id = slot.handle().0;

        slot.replace(&mut loader, IconCode(1), WeatherIcon::Refresh).unwrap();
        assert_eq!(slot.handle().0, id);
        assert_eq!(loader.live, 1);
    }

    #[test]
    fn test_failed_load_keeps_previous() {
        let mut loader = CountingLoader::default();
        let mut slot = IconSlot::load(&mut loader, IconCode(1), WeatherIcon::Refresh).unwrap();

        loader.fail_next = true;
        assert_eq!(
            slot.replace(&mut loader, IconCode(3), WeatherIcon::Snow),
            Err(ResourceError::OutOfMemory)
        );
        assert_eq!(slot.code(), IconCode(1));
        assert_eq!(slot.handle().1, WeatherIcon::Refresh);
        assert_eq!(loader.live, 1);
    }
}
