//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use stratus_protocol::{Frame, OutboundMessage};

/// Channel capacity for link events
const SYNC_CHANNEL_SIZE: usize = 4;

/// Channel capacity for link replies
const REPLY_CHANNEL_SIZE: usize = 4;

/// Work for the sync task
#[derive(Debug, Clone)]
pub enum LinkEvent {
    /// Push frame, applied as one update and answered with ACK or NACK
    Push(Frame),
    /// Link failure with an opaque code
    Failure { code: u32 },
}

/// Pushes and link failures for the sync task
pub static SYNC_EVENTS: Channel<CriticalSectionRawMutex, LinkEvent, SYNC_CHANNEL_SIZE> =
    Channel::new();

/// ACK/NACK replies for the link TX task
pub static LINK_REPLIES: Channel<CriticalSectionRawMutex, OutboundMessage, REPLY_CHANNEL_SIZE> =
    Channel::new();
