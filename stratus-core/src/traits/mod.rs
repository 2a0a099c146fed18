//! Collaborator traits
//!
//! These traits define the interface between the state synchronizer and
//! the platform code that renders widgets and owns icon artwork.

pub mod display;
pub mod resources;

pub use display::DisplayAdapter;
pub use resources::{IconLoader, ResourceError};
