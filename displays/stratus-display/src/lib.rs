//! Widget set and display abstraction for Stratus
//!
//! This crate provides:
//! - `DisplayBackend` trait for different display types
//! - `WeatherScreen`, the single owner of every watch-face widget
//!
//! # Architecture
//!
//! `WeatherScreen` implements the core `DisplayAdapter` trait, so the state
//! synchronizer can hand it field changes directly. The screen caches what
//! each widget shows and renders through whatever `DisplayBackend` it was
//! built with. Backend failures are counted on the screen and never reach
//! the synchronizer.

#![no_std]

pub mod backend;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, Widget};
pub use screen::{TextWidget, WeatherScreen};
