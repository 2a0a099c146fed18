//! Weather icons, code layouts and the checked icon table

mod layout;
mod slot;
mod table;
mod weather;

pub use layout::{IconCode, IconEntry, IconLayout, IconRole, MAX_ICONS};
pub use slot::IconSlot;
pub use table::{IconTable, IconTableError};
pub use weather::WeatherIcon;
