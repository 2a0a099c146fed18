//! Message types for the companion link
//!
//! Message types are divided into two categories:
//! - Companion → Watch: dictionary pushes, acknowledgements
//! - Watch → Companion: acknowledgements, startup status

use crate::dict::{DictError, DictReader, DictWriter};
use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};

// Dictionary keys shared with the companion app
pub const KEY_TEMPERATURE: u32 = 0;
pub const KEY_CONDITIONS: u32 = 1;
pub const KEY_CITY: u32 = 2;
pub const KEY_ICON: u32 = 3;
pub const KEY_STATUS: u32 = 4;

/// STATUS value sent once the watch is ready for pushes
pub const STATUS_READY: i32 = 0;

// Message type IDs: Companion → Watch
pub const MSG_PUSH: u8 = 0x01;
pub const MSG_PEER_ACK: u8 = 0x02;
pub const MSG_PEER_NACK: u8 = 0x03;

// Message type IDs: Watch → Companion
pub const MSG_ACK: u8 = 0x81;
pub const MSG_NACK: u8 = 0x82;
pub const MSG_STATUS: u8 = 0x83;

/// Messages received from the companion
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InboundMessage<'a> {
    /// Key/value update push
    Push { txn: u8, dictionary: DictReader<'a> },
    /// Companion accepted one of our messages
    Ack { txn: u8 },
    /// Companion rejected one of our messages
    Nack { txn: u8 },
    /// Message type this firmware does not know
    Unknown { msg_type: u8, txn: u8 },
}

impl<'a> InboundMessage<'a> {
    /// Parse a message from a frame
    ///
    /// Only the dictionary header is checked here; tuples are decoded lazily
    /// while iterating. Unknown message types are not an error.
    pub fn from_frame(frame: &'a Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            MSG_PUSH => {
                let dictionary =
                    DictReader::new(&frame.payload).map_err(|_| FrameError::InvalidFrame)?;
                Ok(InboundMessage::Push {
                    txn: frame.txn,
                    dictionary,
                })
            }
            MSG_PEER_ACK => Ok(InboundMessage::Ack { txn: frame.txn }),
            MSG_PEER_NACK => Ok(InboundMessage::Nack { txn: frame.txn }),
            msg_type => Ok(InboundMessage::Unknown {
                msg_type,
                txn: frame.txn,
            }),
        }
    }

    /// Transaction id of this message
    pub fn txn(&self) -> u8 {
        match self {
            InboundMessage::Push { txn, .. }
            | InboundMessage::Ack { txn }
            | InboundMessage::Nack { txn }
            | InboundMessage::Unknown { txn, .. } => *txn,
        }
    }
}

/// Messages sent to the companion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutboundMessage {
    /// Push `txn` was applied
    Ack { txn: u8 },
    /// Push `txn` could not be decoded; the companion may resend
    Nack { txn: u8 },
    /// Liveness signal, sent once at startup
    Status { txn: u8, value: i32 },
}

impl OutboundMessage {
    /// Startup status message
    pub const fn ready(txn: u8) -> Self {
        OutboundMessage::Status {
            txn,
            value: STATUS_READY,
        }
    }

    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match *self {
            OutboundMessage::Ack { txn } => Ok(Frame::empty(MSG_ACK, txn)),
            OutboundMessage::Nack { txn } => Ok(Frame::empty(MSG_NACK, txn)),
            OutboundMessage::Status { txn, value } => {
                let mut payload = [0u8; MAX_PAYLOAD_SIZE];
                let len = encode_status(&mut payload, value)
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                Frame::new(MSG_STATUS, txn, &payload[..len])
            }
        }
    }
}

fn encode_status(buf: &mut [u8], value: i32) -> Result<usize, DictError> {
    let mut writer = DictWriter::new(buf)?;
    writer.write_int(KEY_STATUS, value)?;
    Ok(writer.finish())
}
