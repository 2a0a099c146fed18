//! Companion link receive task
//!
//! Parses frames from the companion bridge and hands pushes to the sync
//! task, which applies and answers them.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use stratus_protocol::{Frame, FrameParser, InboundMessage};

use crate::channels::{LinkEvent, SYNC_EVENTS};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Transport failure code for UART read errors
const UART_READ_FAILURE: u32 = 0x01;

/// Link RX task - receives and parses frames from the companion
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: BufferedUartRx) {
    info!("Link RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => handle_frame(frame).await,
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(e) => {
                            warn!("Frame parse error: {:?}", e);
                            report_failure(e.code()).await;
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
                report_failure(UART_READ_FAILURE).await;
            }
        }
    }
}

/// Handle a complete frame
///
/// Pushes go to the sync task whole, including ones with an unusable
/// dictionary header, so every push gets exactly one reply.
async fn handle_frame(frame: Frame) {
    match InboundMessage::from_frame(&frame) {
        Ok(InboundMessage::Push { txn, dictionary }) => {
            debug!("Push {} with {} tuples", txn, dictionary.declared_len());
        }
        Ok(InboundMessage::Ack { txn }) => {
            trace!("Companion ACK {}", txn);
            return;
        }
        Ok(InboundMessage::Nack { txn }) => {
            warn!("Companion NACK {}", txn);
            return;
        }
        Ok(InboundMessage::Unknown { msg_type, txn }) => {
            debug!("Ignoring message type {:#x} (txn {})", msg_type, txn);
            return;
        }
        Err(e) => {
            warn!("Push {} has an unusable header: {:?}", frame.txn, e);
        }
    }
    SYNC_EVENTS.send(LinkEvent::Push(frame)).await;
}

async fn report_failure(code: u32) {
    SYNC_EVENTS.send(LinkEvent::Failure { code }).await;
}
