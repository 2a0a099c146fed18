//! Companion Link Protocol
//!
//! This crate defines the byte protocol between the paired companion device
//! (phone bridge) and the watch. The companion pushes weather updates as
//! small key/value dictionaries; the watch acknowledges each push and sends a
//! single STATUS message at startup.
//!
//! # Protocol Overview
//!
//! Every message travels in one frame:
//! ```text
//! ┌───────┬────────┬──────┬─────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ TXN │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 1B  │ 0–250B      │ 1B       │
//! └───────┴────────┴──────┴─────┴─────────────┴──────────┘
//! ```
//!
//! Push and status payloads are tuple dictionaries (see [`dict`]).
//! Resending after a NACK or a missing ACK is the companion's job; the watch
//! never retries.

#![no_std]
#![deny(unsafe_code)]

pub mod dict;
pub mod frame;
pub mod messages;

pub use dict::{DictError, DictReader, DictWriter, Tuple, TupleValue};
pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
pub use messages::{
    InboundMessage, OutboundMessage, KEY_CITY, KEY_CONDITIONS, KEY_ICON, KEY_STATUS,
    KEY_TEMPERATURE, STATUS_READY,
};
