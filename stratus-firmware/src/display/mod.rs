//! Watch-face display stand-ins
//!
//! Rendering and artwork loading are board-specific. Until a panel driver
//! exists, widgets and icon resources are traced over defmt so the sync
//! path can be followed on a probe.

pub mod icons;
pub mod trace;

pub use icons::{IconBitmap, TraceIconLoader};
pub use trace::TraceBackend;
