//! Board-agnostic core logic for the Stratus weather watch face
//!
//! This crate contains all application logic that does not depend on
//! specific hardware or platform implementations:
//!
//! - Field model and the always-complete `SyncState`
//! - The State Synchronizer mapping inbound key/value updates to widgets
//! - Icon tables built from configurable icon layouts
//! - Collaborator traits (display adapter, icon loader)
//! - Watch-face configuration types and the config file parser

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod icons;
pub mod sync;
pub mod traits;
